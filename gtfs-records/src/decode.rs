//! Decoding of a record into a typed entity, following the header of its file
use crate::coerce::Value;
use crate::header::FieldId;
use crate::record::read_record;
use crate::Error;

/// Accumulates the values of one record before building the entity
///
/// A builder is filled column by column with [EntityBuilder::set], then consumed
/// by [EntityBuilder::build]. Nothing is built if any step fails.
pub trait EntityBuilder: Default {
    /// Columns of the file
    type Field: FieldId;
    /// The entity being built
    type Output;

    /// Stores `value` as the value of `field`
    ///
    /// Fails with [Error::InvalidTarget] if `field` does not hold values of that kind.
    fn set(&mut self, field: Self::Field, value: Value) -> Result<(), Error>;

    /// Builds the entity, failing with [Error::MissingRequiredField] if a mandatory column was never set
    fn build(self) -> Result<Self::Output, Error>;
}

/// A GTFS object read from one line of one file
pub trait Entity: Sized {
    /// Columns of the file
    type Field: FieldId;
    /// How the entity is built from its columns
    type Builder: EntityBuilder<Field = Self::Field, Output = Self>;

    /// Name of the file holding the entities
    const FILE_NAME: &'static str;
    /// Columns that must be present in the file
    const REQUIRED_FIELDS: &'static [Self::Field];
    /// Columns that are required under some conditions (e.g. when there are several agencies)
    const CONDITIONALLY_REQUIRED_FIELDS: &'static [Self::Field] = &[];

    /// Decodes a record, see [decode_record]
    fn from_record(record: &str, header: &[Self::Field]) -> Result<Self, Error> {
        decode_record(record, header)
    }
}

/// Converts the raw text of a column and stores it in the builder
///
/// Values of nonstandard columns are dropped.
pub fn assign<B: EntityBuilder>(builder: &mut B, field: B::Field, raw: &str) -> Result<(), Error> {
    match field.kind() {
        Some(kind) => builder.set(field, kind.coerce(field.name(), raw)?),
        None => Ok(()),
    }
}

/// Builds an entity from the fields of a record
///
/// The `i`th field is the value of the `i`th column of the header. The first
/// value that can not be converted aborts the decoding.
pub fn decode_fields<E: Entity>(fields: &[&str], header: &[E::Field]) -> Result<E, Error> {
    if fields.len() != header.len() {
        return Err(Error::HeaderRecordMismatch {
            header: header.len(),
            record: fields.len(),
        });
    }
    let mut builder = E::Builder::default();
    for (raw, field) in fields.iter().zip(header) {
        assign(&mut builder, *field, raw)?;
    }
    builder.build()
}

/// Tokenizes then decodes a record
pub fn decode_record<E: Entity>(record: &str, header: &[E::Field]) -> Result<E, Error> {
    decode_fields(&read_record(record)?, header)
}

/// Error for a value offered to a column of another kind
pub(crate) fn invalid_target<F: FieldId>(field: F, value: &Value) -> Error {
    Error::InvalidTarget {
        field: field.name(),
        kind: value.kind().name(),
    }
}

/// Value of a mandatory column, or the error telling it was never set
pub(crate) fn required<T, F: FieldId>(value: Option<T>, field: F) -> Result<T, Error> {
    value.ok_or_else(|| Error::MissingRequiredField(field.name()))
}
