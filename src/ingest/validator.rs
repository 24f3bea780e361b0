//! Record validation.

use crate::models::{Employee, EmployeeRecord};

/// Promotes a parsed record to an [`Employee`] if it is complete.
///
/// A record is complete when the name is non-empty and both dates parsed.
/// The special contract is never required.
///
/// # Examples
///
/// ```
/// use vacation_engine::ingest::validate;
/// use vacation_engine::models::EmployeeRecord;
/// use chrono::NaiveDate;
///
/// let record = EmployeeRecord {
///     name: "Hans".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1),
///     start_date: NaiveDate::from_ymd_opt(1998, 1, 1),
///     contract_override: None,
/// };
/// let employee = validate(&record).unwrap();
/// assert_eq!(employee.name, "Hans");
/// ```
pub fn validate(record: &EmployeeRecord) -> Option<Employee> {
    if record.name.is_empty() {
        return None;
    }

    Some(Employee {
        name: record.name.clone(),
        date_of_birth: record.date_of_birth?,
        start_date: record.start_date?,
        contract_override: record.contract_override.clone(),
    })
}

/// Returns true if the record has enough information to compute an entitlement.
pub fn is_valid(record: &EmployeeRecord) -> bool {
    !record.name.is_empty() && record.date_of_birth.is_some() && record.start_date.is_some()
}
