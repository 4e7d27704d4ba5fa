//! Output boundary: the exported document on disk or as a data URI.

use std::fs;
use std::io;
use std::path::Path;

/// Fixed name of the exported file.
pub const CSV_FILENAME: &str = "mte_closure.csv";

/// Write the CSV text to the given path.
pub fn write_csv(path: &Path, csv: &str) -> io::Result<()> {
    fs::write(path, csv)
}

/// Frame the CSV text as the `data:` URI browser hosts hand to a download
/// trigger. The text is embedded literally, without percent-encoding.
pub fn data_uri(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8,{csv}")
}
