//! Wire shapes for the MTE details endpoint.
//!
//! Field names mirror the JSON payload. Everything here is read-only input;
//! unknown fields in the response are ignored.

use serde::Deserialize;

/// Top-level payload returned by the details endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MteDetails {
    #[serde(default)]
    pub road_closures: RoadClosures,
}

/// The closure collection for one event lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadClosures {
    #[serde(default)]
    pub objects: Vec<RawClosure>,
}

/// One raw closure record as returned by the remote lookup.
///
/// The dates are opaque `yyyy-mm-dd hh:mm` strings and are never parsed;
/// downstream matching compares them byte-for-byte.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawClosure {
    /// The event this closure belongs to. A response can carry closures
    /// for several events.
    pub event_id: String,

    pub reason: String,
    pub start_date: String,
    pub end_date: String,

    /// true = traversed A→B, false = B→A.
    pub forward: bool,

    pub permanent: bool,

    /// A single segment id, or an already-joined `;` list.
    #[serde(rename = "segID")]
    pub seg_id: String,

    /// Absent geometry reads as an empty coordinate list.
    #[serde(default)]
    pub geometry: Geometry,
}

/// Closure geometry: a sequence of `[longitude, latitude]` pairs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}
