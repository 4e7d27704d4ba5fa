//! Canonical output rows produced by the export pipeline.

/// Travel direction of a closure relative to its segment's A→B orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    AToB,
    BToA,

    /// Never assigned at normalization; arises only from merging two
    /// opposite unidirectional sightings of the same closure.
    TwoWay,
}

impl Direction {
    /// The label used in the CSV `direction` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AToB => "A to B",
            Self::BToA => "B to A",
            Self::TwoWay => "TWO WAY",
        }
    }
}

/// One output row of the closure document.
///
/// `start`, `end`, and `segment_id` form the merge key and stay exactly as
/// they arrived — no trimming, no parsing. The constant columns of the
/// document (`add` marker, zoom, comment) live in the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureRow {
    pub reason: String,
    pub start: String,
    pub end: String,
    pub direction: Direction,
    pub permanent: bool,
    pub segment_id: String,

    /// Permalink-style `lon=<x>&lat=<y>`, or empty when the closure carries
    /// no geometry.
    pub lonlat: String,

    pub mte_id: String,
}
