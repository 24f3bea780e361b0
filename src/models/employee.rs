//! Employee models.
//!
//! [`EmployeeRecord`] is what the parser produces from a roster row and may be
//! incomplete. [`Employee`] is a record that passed validation; its dates are
//! guaranteed to be present.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A roster row normalized into typed fields.
///
/// Dates that were missing or did not match `DD.MM.YYYY` are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's name. Empty when no name column was present.
    pub name: String,
    /// The employee's date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// The date the employee started employment.
    pub start_date: Option<NaiveDate>,
    /// Free-text special contract, e.g. "30 vacation days".
    pub contract_override: Option<String>,
}

/// An employee with enough information to compute an entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name (never empty).
    pub name: String,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// The date the employee started employment.
    pub start_date: NaiveDate,
    /// Free-text special contract, e.g. "30 vacation days".
    pub contract_override: Option<String>,
}

impl Employee {
    /// Returns the age the employee reaches during `year`.
    ///
    /// Only calendar years are compared, so someone born on 31 December 1970
    /// is 30 for the whole of 2000. The difference saturates at the `i32`
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     name: "Hans".to_string(),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1970, 12, 31).unwrap(),
    ///     start_date: NaiveDate::from_ymd_opt(1998, 1, 1).unwrap(),
    ///     contract_override: None,
    /// };
    /// assert_eq!(employee.age_in(2000), 30);
    /// ```
    pub fn age_in(&self, year: i32) -> i32 {
        year.saturating_sub(self.date_of_birth.year())
    }

    /// Returns the calendar year employment started.
    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    /// Returns the 0-based month employment started (0 = January).
    pub fn start_month0(&self) -> u32 {
        self.start_date.month0()
    }

    /// Returns the day of month employment started.
    pub fn start_day(&self) -> u32 {
        self.start_date.day()
    }
}
