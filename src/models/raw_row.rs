//! Raw roster row model.

use serde::{Deserialize, Serialize};

/// One row of the input roster, exactly as read.
///
/// Cells keep the column order of the source file so that header matching
/// can apply a "last matching column wins" rule and so that the original
/// values can be echoed back in diagnostics.
///
/// # Example
///
/// ```
/// use vacation_engine::models::RawRow;
///
/// let row: RawRow = [("Name", "Hans"), ("Date of birth", "30.12.1950")]
///     .into_iter()
///     .collect();
/// assert_eq!(row.len(), 2);
/// assert_eq!(row.joined_values(), "Hans, 30.12.1950");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell at the end of the row.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.cells.push((label.into(), value.into()));
    }

    /// Iterates over `(label, value)` pairs in column order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    /// Iterates over the cell values in column order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    /// Returns the untouched cell values joined for display.
    pub fn joined_values(&self) -> String {
        self.values().collect::<Vec<_>>().join(", ")
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<L, V> FromIterator<(L, V)> for RawRow
where
    L: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
        }
    }
}
