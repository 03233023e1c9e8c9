//! Module for the error management
use thiserror::Error;

/// An error that can occur when parsing GTFS data.
#[derive(Error, Debug)]
pub enum Error {
    /// The tokenizer was asked for a field but no text was left in the record
    #[error("no field left to read in the record")]
    EmptyField,
    /// A quoted field was opened but never closed
    #[error("a quote was expected, but not found")]
    QuoteExpected,
    /// A quoted field was followed by something other than a comma
    #[error("a comma was expected after a quoted field, but not found")]
    DelimiterExpected,
    /// The record does not have as many fields as the header has columns
    #[error("the header has {header} columns but the record has {record} fields")]
    HeaderRecordMismatch {
        /// Number of columns in the header
        header: usize,
        /// Number of fields in the record
        record: usize,
    },
    /// The raw text of a field could not be converted to the type of its column
    #[error("'{value}' is not a valid value for {field}")]
    InvalidValue {
        /// GTFS name of the column
        field: &'static str,
        /// Raw text that could not be converted
        value: String,
    },
    /// A value was assigned to a column that does not hold values of that kind
    #[error("{field} cannot hold a value of kind {kind}")]
    InvalidTarget {
        /// GTFS name of the column
        field: &'static str,
        /// Kind of the value that was offered
        kind: &'static str,
    },
    /// A mandatory column is absent from the header
    #[error("the required field {0} is missing")]
    MissingRequiredField(&'static str),
    /// A file has no header row
    #[error("{0} has no header")]
    MissingHeader(String),
    /// A line of a file could not be decoded
    #[error("impossible to read line {line} of '{file_name}'")]
    InvalidRecord {
        /// File the record comes from
        file_name: String,
        /// 1-based line number, the header being line 1
        line: usize,
        /// Why the record could not be decoded
        #[source]
        source: Box<Error>,
    },
    /// A mandatory file is not present in the feed
    #[error("Could not find file {0}")]
    MissingFile(String),
    /// The given path to the GTFS is neither a file nor a directory
    #[error("Could not read GTFS: {0} is neither a file nor a directory")]
    NotFileNorDirectory(String),
    /// Generic Input/Output error while reading a file
    #[error("impossible to read file")]
    IO(#[from] std::io::Error),
    /// Impossible to read a file
    #[error("impossible to read '{file_name}'")]
    NamedFileIO {
        /// The file name that could not be read
        file_name: String,
        /// The inital error that caused the unability to read the file
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Error when trying to unzip the GTFS archive
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    /// Attaches the file name and line to an error raised while decoding a record
    pub(crate) fn in_record(self, file_name: &str, line: usize) -> Error {
        Error::InvalidRecord {
            file_name: file_name.to_owned(),
            line,
            source: Box::new(self),
        }
    }
}
