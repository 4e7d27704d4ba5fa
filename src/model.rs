//! Data model: wire input shapes and canonical output rows.
//!
//! The raw side mirrors the details endpoint's JSON; the row side is what
//! the export pipeline builds and the serializer renders.

mod raw;
mod row;

pub use raw::{Geometry, MteDetails, RawClosure, RoadClosures};
pub use row::{ClosureRow, Direction};
