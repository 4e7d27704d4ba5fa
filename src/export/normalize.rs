//! Normalization: one raw closure in, one canonical row out.

use crate::model::{ClosureRow, Direction, RawClosure};

/// Convert one raw closure into an output row.
///
/// Returns `None` when the closure belongs to a different event than the one
/// being exported; the remote response can carry closures for several events
/// and those must be discarded, not normalized.
pub fn normalize(closure: &RawClosure, mte_id: &str) -> Option<ClosureRow> {
    if closure.event_id != mte_id {
        return None;
    }

    let direction = if closure.forward {
        Direction::AToB
    } else {
        Direction::BToA
    };

    Some(ClosureRow {
        reason: closure.reason.clone(),
        start: closure.start_date.clone(),
        end: closure.end_date.clone(),
        direction,
        permanent: closure.permanent,
        segment_id: closure.seg_id.clone(),
        lonlat: lonlat(&closure.geometry.coordinates),
        mte_id: mte_id.to_string(),
    })
}

/// Permalink-style coordinate string from the first geometry pair.
fn lonlat(coordinates: &[[f64; 2]]) -> String {
    match coordinates.first() {
        Some([lon, lat]) => format!("lon={lon}&lat={lat}"),
        None => String::new(),
    }
}
