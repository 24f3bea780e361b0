//! CSV result writing.

use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::EntitlementResult;

/// A record that can be projected onto named output columns.
pub trait TableRecord {
    /// Returns the cell for `field`, or `None` for an empty cell.
    fn field(&self, field: &str) -> Option<String>;
}

impl TableRecord for EntitlementResult {
    fn field(&self, field: &str) -> Option<String> {
        match field {
            "name" => Some(self.name.clone()),
            "days" => self.days.map(|days| days.normalize().to_string()),
            _ => None,
        }
    }
}

/// Encodes `records` as CSV with a header row made of `fields`.
///
/// # Examples
///
/// ```
/// use vacation_engine::models::EntitlementResult;
/// use vacation_engine::table::encode_rows;
/// use rust_decimal::Decimal;
///
/// let results = vec![
///     EntitlementResult { name: "Hans".to_string(), days: Some(Decimal::from(27)) },
///     EntitlementResult { name: "".to_string(), days: None },
/// ];
/// let bytes = encode_rows(&results, &["name", "days"], "inline").unwrap();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "name,days\nHans,27\n,\n");
/// ```
pub fn encode_rows<T: TableRecord>(
    records: &[T],
    fields: &[&str],
    destination: &str,
) -> EngineResult<Vec<u8>> {
    let csv_error = |message: String| EngineError::OutputWrite {
        path: destination.to_string(),
        message,
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(fields)
        .map_err(|e| csv_error(e.to_string()))?;

    for record in records {
        let cells = fields
            .iter()
            .map(|field| record.field(field).unwrap_or_default());
        writer
            .write_record(cells)
            .map_err(|e| csv_error(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| csv_error(e.error().to_string()))
}

/// Writes `records` to `path` as CSV, projecting only `fields`.
///
/// The output is fully encoded in memory before the file is touched.
pub async fn write_rows<T: TableRecord>(
    path: &Path,
    records: &[T],
    fields: &[&str],
) -> EngineResult<()> {
    let path_str = path.display().to_string();
    let bytes = encode_rows(records, fields, &path_str)?;

    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| EngineError::OutputWrite {
            path: path_str,
            message: e.to_string(),
        })
}
