//! Roster row parsing.
//!
//! Column headers are free-form; a header is assigned a [`ColumnRole`] by
//! case-insensitive substring match. Parsing never fails: anything that does
//! not fit leaves the corresponding field empty so that validation can reject
//! the row later.

use chrono::NaiveDate;

use crate::models::{EmployeeRecord, RawRow};

/// The only accepted date layout, `DD.MM.YYYY`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// The field a roster column feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Header contains "name".
    Name,
    /// Header contains "birth".
    BirthDate,
    /// Header contains "start".
    StartDate,
    /// Header contains "contract".
    Contract,
}

impl ColumnRole {
    /// Classifies a column header.
    ///
    /// Roles are tested in the order name, birth, start, contract and the
    /// first hit wins, so "Contract start" is a start-date column.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::ingest::ColumnRole;
    ///
    /// assert_eq!(ColumnRole::classify("Date of Birth"), Some(ColumnRole::BirthDate));
    /// assert_eq!(ColumnRole::classify("Contract start"), Some(ColumnRole::StartDate));
    /// assert_eq!(ColumnRole::classify("Department"), None);
    /// ```
    pub fn classify(label: &str) -> Option<Self> {
        let label = label.to_lowercase();

        if label.contains("name") {
            Some(Self::Name)
        } else if label.contains("birth") {
            Some(Self::BirthDate)
        } else if label.contains("start") {
            Some(Self::StartDate)
        } else if label.contains("contract") {
            Some(Self::Contract)
        } else {
            None
        }
    }
}

/// Parses a date in strict `DD.MM.YYYY` form.
///
/// Exactly two day digits, two month digits and four year digits are
/// required, and the result must be a real calendar date.
///
/// # Examples
///
/// ```
/// use vacation_engine::ingest::parse_strict_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_strict_date("30.12.1950"),
///     NaiveDate::from_ymd_opt(1950, 12, 30)
/// );
/// assert_eq!(parse_strict_date("01.01.2001a"), None);
/// assert_eq!(parse_strict_date("1.1.2001"), None);
/// assert_eq!(parse_strict_date("31.02.2001"), None);
/// ```
pub fn parse_strict_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }

    let digits_only = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits_only {
        return None;
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Normalizes one roster row into an [`EmployeeRecord`].
///
/// Every cell is trimmed first. Columns are visited in file order, so when
/// several headers map to the same role the last one wins. An empty contract
/// cell counts as no contract.
///
/// # Examples
///
/// ```
/// use vacation_engine::ingest::parse_row;
/// use vacation_engine::models::RawRow;
///
/// let row: RawRow = [
///     ("Name", " Hans "),
///     ("Date of birth", "30.12.1950"),
///     ("Start date", "01.01.2001"),
///     ("Special contract", "27 days"),
/// ]
/// .into_iter()
/// .collect();
///
/// let record = parse_row(&row);
/// assert_eq!(record.name, "Hans");
/// assert!(record.date_of_birth.is_some());
/// assert_eq!(record.contract_override.as_deref(), Some("27 days"));
/// ```
pub fn parse_row(row: &RawRow) -> EmployeeRecord {
    let mut record = EmployeeRecord::default();

    for (label, value) in row.cells() {
        let value = value.trim();

        match ColumnRole::classify(label) {
            Some(ColumnRole::Name) => record.name = value.to_string(),
            Some(ColumnRole::BirthDate) => record.date_of_birth = parse_strict_date(value),
            Some(ColumnRole::StartDate) => record.start_date = parse_strict_date(value),
            Some(ColumnRole::Contract) => {
                record.contract_override = (!value.is_empty()).then(|| value.to_string())
            }
            None => {}
        }
    }

    record
}
