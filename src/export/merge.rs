//! Bidirectional merge: fold normalized rows into an ordered result set.

use crate::model::{ClosureRow, Direction};

/// Ordered accumulator for output rows, scoped to one export invocation.
///
/// Rows sharing `(start, end, segment_id)` describe the same physical
/// closure seen from two directions; those collapse into a single `TWO WAY`
/// row. Everything else keeps arrival order.
#[derive(Debug, Default)]
pub struct ResultSet {
    rows: Vec<ClosureRow>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one row into the set.
    ///
    /// The key match is exact string equality on all three fields. Outcomes:
    ///
    /// - no match: append the row;
    /// - the matched row is already `TWO WAY`: absorb the incoming row, the
    ///   single merged entry stands;
    /// - directions differ: remove the matched row and append the incoming
    ///   one as `TWO WAY` — a merged row always moves to the end of the set;
    /// - directions equal: append anyway. The exported document reproduces
    ///   same-direction duplicates rather than deduplicating them.
    pub fn merge(&mut self, mut row: ClosureRow) {
        let matched = self.rows.iter().position(|e| {
            e.start == row.start && e.end == row.end && e.segment_id == row.segment_id
        });

        if let Some(idx) = matched {
            if self.rows[idx].direction == Direction::TwoWay {
                return;
            }
            if self.rows[idx].direction != row.direction {
                self.rows.remove(idx);
                row.direction = Direction::TwoWay;
            }
        }

        self.rows.push(row);
    }

    /// The final ordered rows. Consumes the set; nothing is retained across
    /// invocations.
    pub fn into_rows(self) -> Vec<ClosureRow> {
        self.rows
    }
}
