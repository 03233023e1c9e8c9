//! Collections of the entities of one GTFS file
use crate::decode::{decode_record, Entity};
use crate::header::{read_header, FieldId};
use crate::objects::*;
use crate::record::split_records;
use crate::Error;
use std::ops::{Index, IndexMut};

const BOM: char = '\u{feff}';

/// Lazily decodes the records of a file, one [Result] per line
///
/// The header is read when the reader is created. Each following line is only
/// decoded when the iterator reaches it, so a caller can stop at the first error
/// or skip the invalid lines.
///
/// ```
/// use gtfs_records::{Agency, RecordReader};
///
/// let content = "agency_name,agency_url,agency_timezone\n\
///                CTA,http://transitchicago.com,America/Chicago\n\
///                Broken,not a url,America/Chicago";
/// let results: Vec<_> = RecordReader::<Agency>::new(content)?.collect();
/// assert_eq!(2, results.len());
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// # Ok::<(), gtfs_records::Error>(())
/// ```
pub struct RecordReader<'a, E: Entity> {
    header: Vec<E::Field>,
    has_header: bool,
    records: Vec<&'a str>,
    position: usize,
}

impl<'a, E: Entity> RecordReader<'a, E> {
    /// Reads the header of `content`. A leading byte order mark is ignored
    pub fn new(content: &'a str) -> Result<Self, Error> {
        let records = split_records(content.strip_prefix(BOM).unwrap_or(content));
        let header = match records.first() {
            Some(record) => read_header(record).map_err(|e| e.in_record(E::FILE_NAME, 1))?,
            None => Vec::new(),
        };
        Ok(Self {
            header,
            has_header: !records.is_empty(),
            records,
            position: 1,
        })
    }

    /// The resolved columns of the file
    pub fn header(&self) -> &[E::Field] {
        &self.header
    }

    /// False when the file had no line at all
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Stops reading and keeps only the header
    pub fn into_header(self) -> Vec<E::Field> {
        self.header
    }
}

impl<'a, E: Entity> Iterator for RecordReader<'a, E> {
    type Item = Result<E, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = *self.records.get(self.position)?;
        self.position += 1;
        // The header is line 1, the first record line 2
        Some(
            decode_record(record, &self.header)
                .map_err(|e| e.in_record(E::FILE_NAME, self.position)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

/// The header and the entities of one GTFS file, in the order of the file
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Debug(bound = "E: std::fmt::Debug"),
    Clone(bound = "E: Clone"),
    PartialEq(bound = "E: PartialEq")
)]
pub struct Dataset<E: Entity> {
    header: Vec<E::Field>,
    records: Vec<E>,
}

/// The content of `agency.txt`
pub type Agencies = Dataset<Agency>;
/// The content of `routes.txt`
pub type Routes = Dataset<Route>;
/// The content of `stops.txt`
pub type Stops = Dataset<Stop>;
/// The content of `trips.txt`
pub type Trips = Dataset<Trip>;
/// The content of `stop_times.txt`
pub type StopTimes = Dataset<StopTime>;

impl<E: Entity> Dataset<E> {
    /// Decodes the whole content of a file. The first invalid line aborts the parsing
    ///
    /// An empty content gives an empty dataset without header.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let mut reader = RecordReader::<E>::new(content)?;
        let records = reader.by_ref().collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            header: reader.into_header(),
            records,
        })
    }

    /// An empty dataset with the given columns
    pub fn with_header(header: Vec<E::Field>) -> Self {
        Self {
            header,
            records: Vec::new(),
        }
    }

    /// The columns of the file the entities were read from
    pub fn header(&self) -> &[E::Field] {
        &self.header
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there is no entity
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The entity at `index`
    pub fn get(&self, index: usize) -> Option<&E> {
        self.records.get(index)
    }

    /// The first entity of the file
    pub fn first(&self) -> Option<&E> {
        self.records.first()
    }

    /// Iterates over the entities in file order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.records.iter()
    }

    /// Appends an entity
    pub fn push(&mut self, entity: E) {
        self.records.push(entity);
    }

    /// All the entities
    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// Consumes the dataset, keeping only the entities
    pub fn into_records(self) -> Vec<E> {
        self.records
    }

    /// True if all the columns that must be present are in the header
    pub fn has_required_fields(&self) -> bool {
        E::REQUIRED_FIELDS.iter().all(|f| self.header.contains(f))
    }

    /// True if all the conditionally required columns are in the header
    pub fn has_conditionally_required_fields(&self) -> bool {
        E::CONDITIONALLY_REQUIRED_FIELDS
            .iter()
            .all(|f| self.header.contains(f))
    }
}

impl Dataset<Agency> {
    /// True if every agency has an `agency_id`
    pub fn has_required_agency_ids(&self) -> bool {
        self.records.iter().all(|agency| agency.id.is_some())
    }

    /// True if all agencies are in the time zone of the first one
    pub fn has_matching_time_zones(&self) -> bool {
        match self.records.split_first() {
            Some((first, others)) => others.iter().all(|a| a.timezone == first.timezone),
            None => true,
        }
    }

    /// The header has the required columns, every agency has an id and they share the same time zone
    pub fn is_valid(&self) -> bool {
        self.has_required_fields()
            && self.has_required_agency_ids()
            && self.has_matching_time_zones()
    }
}

impl<E: Entity> Index<usize> for Dataset<E> {
    type Output = E;

    fn index(&self, index: usize) -> &E {
        &self.records[index]
    }
}

impl<E: Entity> IndexMut<usize> for Dataset<E> {
    fn index_mut(&mut self, index: usize) -> &mut E {
        &mut self.records[index]
    }
}

impl<E: Entity> IntoIterator for Dataset<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, E: Entity> IntoIterator for &'a Dataset<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Collects entities built by hand. The header is then the list of all the known columns
impl<E: Entity> FromIterator<E> for Dataset<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            header: <E::Field as FieldId>::ALL.to_vec(),
            records: iter.into_iter().collect(),
        }
    }
}

impl<E: Entity> Extend<E> for Dataset<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.records.extend(iter)
    }
}
