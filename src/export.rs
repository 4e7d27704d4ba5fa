//! The export pipeline: normalize, merge, serialize.
//!
//! One synchronous pass per invocation: raw closures are normalized one at a
//! time, folded into a result set that collapses opposite-direction
//! sightings, and the final ordered set is rendered as CSV text. The set is
//! a value built fresh per call — nothing is shared between exports.

mod merge;
mod normalize;
mod serialize;

pub use merge::ResultSet;
pub use normalize::normalize;
pub use serialize::{COLUMNS, SerializeError, to_csv};

use crate::model::{ClosureRow, RawClosure};

/// Run the normalize-and-merge fold over one response's closure collection.
///
/// Rows come out in arrival order, except that a bidirectional merge moves
/// the merged row to the end of the set.
pub fn build_rows(closures: &[RawClosure], mte_id: &str) -> Vec<ClosureRow> {
    let mut set = ResultSet::new();
    for closure in closures {
        if let Some(row) = normalize(closure, mte_id) {
            set.merge(row);
        }
    }
    set.into_rows()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Direction, Geometry};

    fn closure(forward: bool) -> RawClosure {
        RawClosure {
            event_id: "999".to_string(),
            reason: "Roadworks".to_string(),
            start_date: "2024-01-01 08:00".to_string(),
            end_date: "2024-01-01 10:00".to_string(),
            forward,
            permanent: false,
            seg_id: "123".to_string(),
            geometry: Geometry::default(),
        }
    }

    #[test]
    fn opposite_sightings_export_as_one_two_way_row() {
        let rows = build_rows(&[closure(true), closure(false)], "999");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].direction, Direction::TwoWay);
        assert_eq!(rows[0].mte_id, "999");
        assert_eq!(rows[0].segment_id, "123");
    }

    #[test]
    fn closures_for_other_events_produce_no_rows() {
        let mut foreign = closure(true);
        foreign.event_id = "1000".to_string();

        assert!(build_rows(&[foreign], "999").is_empty());
    }

    #[test]
    fn fully_filtered_collection_still_serializes_to_header_only() {
        let mut foreign = closure(true);
        foreign.event_id = "1000".to_string();

        let text = to_csv(&build_rows(&[foreign], "999")).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn row_count_is_matching_inputs_minus_merges() {
        let mut other_window = closure(true);
        other_window.start_date = "2024-02-01 08:00".to_string();

        let rows = build_rows(
            &[closure(true), closure(false), other_window],
            "999",
        );
        assert_eq!(rows.len(), 2);
    }
}
