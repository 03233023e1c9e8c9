/*! The [General Transit Feed Specification](https://gtfs.org/) (GTFS) is a commonly used model to represent public transit data.

This crate reads the main files of a GTFS feed (`agency.txt`, `routes.txt`, `stops.txt`, `trips.txt` and `stop_times.txt`) into typed Rust structs.

To get started, see [Feed] or, for a single file, [Dataset::parse].

## What is GTFS

A Gtfs feed is a collection of CSV files (often bundled as a zip file).
Each file represents a collection of one type (stops, lines, etc.) that have relationships through unique identifiers.

## Design decisions

### Layers

Reading a file goes through small steps that can each be used on their own:

* [split_records] splits the content of a file into lines,
* [read_record] splits a line into its fields,
* [read_header] resolves the first line into column identifiers ([AgencyField], [RouteField]…),
* [Kind::coerce] converts the text of a field into a typed [Value],
* [decode_record] assigns the values of a line to an entity builder and builds the entity.

### Columns

Every file has its own enumeration of columns. A column that is not part of the reference is not an error:
it is kept as `Nonstandard` and its values are ignored.

### Use of Enum

Many values are integers that are actually enumerations of certain values. We always use Rust enums, like [LocationType] to represent them, and not the integer value.
A value outside of the enumeration is an error.

### Reference

We try to stick as closely as possible to the reference. Optional fields are [std::option], while missing mandatory columns will result in an error.

### Renaming

We strip the object type from the column names (`route_short_name` is [Route::short_name]).

*/
#![warn(missing_docs)]

#[macro_use]
extern crate derivative;

mod coerce;
mod dataset;
mod decode;
mod enums;
pub mod error;
mod feed;
mod fields;
mod header;
pub(crate) mod objects;
mod record;


pub use coerce::{parse_color, parse_time, Kind, Value};
pub use dataset::{Agencies, Dataset, RecordReader, Routes, StopTimes, Stops, Trips};
pub use decode::{assign, decode_fields, decode_record, Entity, EntityBuilder};
pub use error::Error;
pub use feed::{Feed, FeedReader};
pub use header::{read_header, resolve_header, FieldId};
pub use objects::*;
pub use record::{next_field, read_record, split_records};
