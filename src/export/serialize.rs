//! CSV rendering of the final row set.

use std::io;
use std::string::FromUtf8Error;

use crate::model::ClosureRow;

/// Errors that can occur while rendering the export document.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("rendered CSV was not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// Marker value of the `header` column: every exported line is an add.
const ROW_MARKER: &str = "add";

/// Fixed permalink zoom stamped on every row.
const ZOOM: &str = "17";

/// The `comment` column is left for the editor to fill in.
const COMMENT: &str = "";

/// Column labels of the export document, in order.
pub const COLUMNS: [&str; 11] = [
    "header",
    "reason",
    "start date (yyyy-mm-dd hh:mm)",
    "end date (yyyy-mm-dd hh:mm)",
    "direction (A to B|B to A|TWO WAY)",
    "ignore trafic (Yes|No)",
    "segment IDs (id1;id2;...)",
    "lon/lat (like in a permalink: lon=xxx&lat=yyy)",
    "zoom (14 to 22)",
    "MTE id (empty cell if not)",
    "comment (optional)",
];

/// Render the ordered row set as CSV text.
///
/// Line one is the fixed header, then one line per row in set order. Lines
/// are newline-joined with no trailing terminator. The output is a pure
/// function of the input: the same rows always produce identical bytes.
/// Fields containing delimiters, quotes, or newlines get standard CSV
/// quoting; all other values render exactly as-is.
pub fn to_csv(rows: &[ClosureRow]) -> Result<String, SerializeError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(COLUMNS)?;
        for row in rows {
            writer.write_record([
                ROW_MARKER,
                row.reason.as_str(),
                row.start.as_str(),
                row.end.as_str(),
                row.direction.as_str(),
                yes_no(row.permanent),
                row.segment_id.as_str(),
                row.lonlat.as_str(),
                ZOOM,
                row.mte_id.as_str(),
                COMMENT,
            ])?;
        }
        writer.flush()?;
    }

    let mut text = String::from_utf8(buf)?;
    // The writer terminates every record; the document itself is
    // newline-joined without a trailing terminator.
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Direction;

    fn sample_row() -> ClosureRow {
        ClosureRow {
            reason: "Roadworks".to_string(),
            start: "2024-01-01 08:00".to_string(),
            end: "2024-01-01 10:00".to_string(),
            direction: Direction::AToB,
            permanent: false,
            segment_id: "123".to_string(),
            lonlat: "lon=-122.5&lat=45.5".to_string(),
            mte_id: "999".to_string(),
        }
    }

    #[test]
    fn empty_set_renders_header_only() {
        let text = to_csv(&[]).unwrap();
        assert_eq!(text, COLUMNS.join(","));
    }

    #[test]
    fn row_renders_eleven_columns_in_fixed_order() {
        let text = to_csv(&[sample_row()]).unwrap();
        let line = text.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "add,Roadworks,2024-01-01 08:00,2024-01-01 10:00,A to B,No,123,lon=-122.5&lat=45.5,17,999,"
        );
    }

    #[test]
    fn permanent_closure_renders_yes() {
        let mut row = sample_row();
        row.permanent = true;

        let text = to_csv(&[row]).unwrap();
        assert!(text.lines().nth(1).unwrap().contains(",Yes,"));
    }

    #[test]
    fn two_way_direction_renders_its_label() {
        let mut row = sample_row();
        row.direction = Direction::TwoWay;

        let text = to_csv(&[row]).unwrap();
        assert!(text.lines().nth(1).unwrap().contains(",TWO WAY,"));
    }

    #[test]
    fn rows_render_in_set_order() {
        let mut second = sample_row();
        second.segment_id = "456".to_string();

        let text = to_csv(&[sample_row(), second]).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains(",123,"));
        assert!(lines[2].contains(",456,"));
    }

    #[test]
    fn no_trailing_newline() {
        let text = to_csv(&[sample_row()]).unwrap();
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn rendering_is_deterministic() {
        let rows = [sample_row(), sample_row()];
        assert_eq!(to_csv(&rows).unwrap(), to_csv(&rows).unwrap());
    }

    #[test]
    fn embedded_comma_gets_quoted() {
        let mut row = sample_row();
        row.reason = "Bridge out, use detour".to_string();

        let text = to_csv(&[row]).unwrap();
        assert!(text.contains("\"Bridge out, use detour\""));
    }

    #[test]
    fn header_line_is_the_documented_literal() {
        let text = to_csv(&[]).unwrap();
        assert_eq!(
            text,
            "header,reason,start date (yyyy-mm-dd hh:mm),end date (yyyy-mm-dd hh:mm),\
             direction (A to B|B to A|TWO WAY),ignore trafic (Yes|No),\
             segment IDs (id1;id2;...),lon/lat (like in a permalink: lon=xxx&lat=yyy),\
             zoom (14 to 22),MTE id (empty cell if not),comment (optional)"
        );
    }
}
