//! CSV roster reading.

use std::io::Read;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::RawRow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses CSV text with a header row into raw rows.
///
/// Each data row is paired with the header labels in column order. Rows may
/// be shorter than the header; missing trailing cells are simply absent.
/// `source` names the input in error messages.
///
/// # Examples
///
/// ```
/// use vacation_engine::table::parse_rows;
///
/// let csv = "Name,Date of birth\nHans,30.12.1950\n";
/// let rows = parse_rows(csv.as_bytes(), "inline").unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].joined_values(), "Hans, 30.12.1950");
/// ```
pub fn parse_rows<R: Read>(reader: R, source: &str) -> EngineResult<Vec<RawRow>> {
    let csv_error = |e: csv::Error| EngineError::CsvRead {
        path: source.to_string(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_error)?.clone();

    reader
        .records()
        .map(|record| -> EngineResult<RawRow> {
            let record = record.map_err(csv_error)?;
            Ok(headers.iter().zip(record.iter()).collect())
        })
        .collect()
}

/// Reads every row of the roster at `path`.
///
/// The whole file is read before parsing starts.
pub async fn read_rows(path: &Path) -> EngineResult<Vec<RawRow>> {
    let path_str = path.display().to_string();

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| EngineError::InputRead {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes[..]);
    parse_rows(content, &path_str)
}
