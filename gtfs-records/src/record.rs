//! Splitting of GTFS files into records and of records into fields
//!
//! GTFS files use a small CSV dialect: fields are separated by commas and a field
//! containing a comma must be enclosed in double quotes. There is no escaping of
//! quotes inside a quoted field, and a field can not contain a line break, which
//! allows to split the file in lines before looking at the quotes.
use crate::Error;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Splits the content of a file into its records
///
/// Line feeds, carriage returns and carriage return + line feed all end a record.
/// Empty lines are dropped.
pub fn split_records(content: &str) -> Vec<&str> {
    content
        .split(['\r', '\n'])
        .filter(|record| !record.is_empty())
        .collect()
}

/// Reads the next field of a record and advances `cursor` past it and its delimiter
///
/// A quoted field is returned without its quotes. The text of a field is never
/// copied: the returned slice borrows from the record.
pub fn next_field<'a>(cursor: &mut &'a str) -> Result<&'a str, Error> {
    let text = *cursor;
    if text.is_empty() {
        return Err(Error::EmptyField);
    }
    if let Some(quoted) = text.strip_prefix(QUOTE) {
        let end = quoted.find(QUOTE).ok_or(Error::QuoteExpected)?;
        let field = &quoted[..end];
        let rest = &quoted[end + QUOTE.len_utf8()..];
        *cursor = match rest.strip_prefix(DELIMITER) {
            Some(rest) => rest,
            None if rest.is_empty() => rest,
            None => return Err(Error::DelimiterExpected),
        };
        Ok(field)
    } else {
        match text.find(DELIMITER) {
            Some(end) => {
                *cursor = &text[end + DELIMITER.len_utf8()..];
                Ok(&text[..end])
            }
            None => {
                *cursor = "";
                Ok(text)
            }
        }
    }
}

/// Reads all the fields of a record
///
/// ```
/// let fields = gtfs_records::read_record(r#"one,"tw,o",,three,"#)?;
/// assert_eq!(fields, ["one", "tw,o", "", "three", ""]);
/// # Ok::<(), gtfs_records::Error>(())
/// ```
pub fn read_record(record: &str) -> Result<Vec<&str>, Error> {
    let mut cursor = record;
    let mut fields = Vec::new();
    while !cursor.is_empty() {
        fields.push(next_field(&mut cursor)?);
    }
    // a trailing comma announces one last, empty, field
    if record.ends_with(DELIMITER) {
        fields.push("");
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_field_simple() {
        let mut record = "one,2,three";
        assert_eq!("one", next_field(&mut record).unwrap());
        assert_eq!("2,three", record);
    }

    #[test]
    fn next_field_last_field() {
        let mut record = "one";
        assert_eq!("one", next_field(&mut record).unwrap());
        assert_eq!("", record);
    }

    #[test]
    fn next_field_empty() {
        let mut record = "";
        assert!(matches!(next_field(&mut record), Err(Error::EmptyField)));
    }

    #[test]
    fn next_field_leading_delimiter() {
        let mut record = ",two";
        assert_eq!("", next_field(&mut record).unwrap());
        assert_eq!("two", record);
    }

    #[test]
    fn next_field_quoted() {
        let mut record = "\"one\",2,three";
        assert_eq!("one", next_field(&mut record).unwrap());
        assert_eq!("2,three", record);

        let mut record = "\"one\"";
        assert_eq!("one", next_field(&mut record).unwrap());
        assert_eq!("", record);
    }

    #[test]
    fn next_field_unbalanced_quotes() {
        let mut record = "\"one,2,three";
        assert!(matches!(next_field(&mut record), Err(Error::QuoteExpected)));
    }

    #[test]
    fn next_field_quoted_without_delimiter() {
        let mut record = "\"one\"2,three";
        assert!(matches!(
            next_field(&mut record),
            Err(Error::DelimiterExpected)
        ));
    }

    #[test]
    fn read_simple_record() {
        assert_eq!(vec!["one", "2", "three"], read_record("one,2,three").unwrap());
    }

    #[test]
    fn read_empty_record() {
        assert!(read_record("").unwrap().is_empty());
    }

    #[test]
    fn read_record_with_empty_fields() {
        assert_eq!(
            vec!["one", "2", "", "three"],
            read_record("one,2,,three").unwrap()
        );
        assert_eq!(vec!["a", "b", ""], read_record("a,b,").unwrap());
        assert_eq!(vec!["", ""], read_record(",").unwrap());
    }

    #[test]
    fn read_record_with_quoted_fields() {
        assert_eq!(
            vec!["one", "2", "three"],
            read_record("one,\"2\",three").unwrap()
        );
        assert_eq!(
            vec!["one", "tw,o", "three"],
            read_record("one,\"tw,o\",three").unwrap()
        );
        assert_eq!(vec!["one", "two,"], read_record("one,\"two,\"").unwrap());
        assert_eq!(vec!["one", ""], read_record("one,\"\"").unwrap());
        assert_eq!(vec!["a", ""], read_record("\"a\",").unwrap());
    }

    #[test]
    fn read_record_errors() {
        assert!(matches!(
            read_record("\"one,2,three"),
            Err(Error::QuoteExpected)
        ));
        assert!(matches!(
            read_record("\"one\"2,three"),
            Err(Error::DelimiterExpected)
        ));
    }

    #[test]
    fn unquoted_records_rejoin() {
        for record in ["one,2,three", "a,,b", "single", "x,y,", ",lead", "sp ace, padded "] {
            let fields = read_record(record).unwrap();
            assert_eq!(record, fields.join(","));
        }
    }

    #[test]
    fn split_newline_variants() {
        assert_eq!(vec!["a,b", "c,d"], split_records("a,b\r\nc,d"));
        assert_eq!(vec!["a,b", "c,d"], split_records("a,b\nc,d"));
        assert_eq!(vec!["a,b", "c,d"], split_records("a,b\rc,d"));
        assert_eq!(
            vec!["one,2,,three", "four,five"],
            split_records("one,2,,three\n\n\r\nfour,five\r\n")
        );
        assert!(split_records("").is_empty());
    }
}
