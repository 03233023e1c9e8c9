//! Resolution of the header of a GTFS file into typed columns
use crate::coerce::Kind;
use crate::record::read_record;
use crate::Error;
use std::fmt::Debug;
use std::hash::Hash;

/// The columns of one kind of GTFS file
///
/// Every known column has exactly one spelling, given by the GTFS reference
/// (`agency_name`, `route_type`…). Any other spelling is a nonstandard column.
pub trait FieldId: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The catch-all identifier of columns that are not part of the reference
    const NONSTANDARD: Self;
    /// All the known columns, in the order of the reference
    const ALL: &'static [Self];

    /// Identifier of a column from its spelling, [FieldId::NONSTANDARD] if unknown
    fn from_name(name: &str) -> Self;
    /// Spelling of the column in GTFS files
    fn name(&self) -> &'static str;
    /// Kind of the values stored in the column, `None` for nonstandard columns
    fn kind(&self) -> Option<Kind>;
}

/// Maps the spellings of a header to their column identifiers
///
/// Unknown columns are not an error: they are kept, at their position, as
/// [FieldId::NONSTANDARD]. Two unknown columns give two independent identifiers.
pub fn resolve_header<F: FieldId>(names: &[&str]) -> Vec<F> {
    names
        .iter()
        .map(|name| {
            let field = F::from_name(name);
            if field == F::NONSTANDARD {
                log::debug!("ignoring nonstandard column '{}'", name);
            }
            field
        })
        .collect()
}

/// Reads a header record
///
/// ```
/// use gtfs_records::{read_header, AgencyField};
///
/// let header: Vec<AgencyField> = read_header("agency_name,agency_url,agency_timezone")?;
/// assert_eq!(header, [AgencyField::Name, AgencyField::Url, AgencyField::Timezone]);
/// # Ok::<(), gtfs_records::Error>(())
/// ```
pub fn read_header<F: FieldId>(record: &str) -> Result<Vec<F>, Error> {
    Ok(resolve_header(&read_record(record)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AgencyField, RouteField};

    #[test]
    fn header() {
        let header: Vec<AgencyField> =
            read_header("agency_name,agency_url,agency_timezone").unwrap();
        assert_eq!(
            vec![AgencyField::Name, AgencyField::Url, AgencyField::Timezone],
            header
        );
    }

    #[test]
    fn header_with_all_fields() {
        let header: Vec<AgencyField> = read_header(
            "agency_id,agency_name,agency_url,agency_timezone,agency_lang,agency_phone,agency_fare_url,agency_email",
        )
        .unwrap();
        assert_eq!(AgencyField::ALL, header.as_slice());
    }

    #[test]
    fn empty_header() {
        let header: Vec<AgencyField> = read_header("").unwrap();
        assert!(header.is_empty());
    }

    #[test]
    fn nonstandard_columns_are_kept() {
        let header: Vec<AgencyField> =
            read_header("agency_name,,agency_url,vendor_extra,agency_timezone").unwrap();
        assert_eq!(
            vec![
                AgencyField::Name,
                AgencyField::Nonstandard,
                AgencyField::Url,
                AgencyField::Nonstandard,
                AgencyField::Timezone
            ],
            header
        );
    }

    #[test]
    fn spellings_of_another_file_are_nonstandard() {
        let header: Vec<RouteField> = read_header("agency_name,route_id").unwrap();
        assert_eq!(vec![RouteField::Nonstandard, RouteField::Id], header);
    }

    #[test]
    fn malformed_header() {
        assert!(matches!(
            read_header::<AgencyField>("\"agency_name,agency_url,agency_timezone"),
            Err(Error::QuoteExpected)
        ));
    }

    #[test]
    fn spellings_round_trip() {
        for field in AgencyField::ALL {
            assert_eq!(*field, AgencyField::from_name(field.name()));
            assert!(field.kind().is_some());
        }
        assert_eq!(None, AgencyField::Nonstandard.kind());
    }
}
