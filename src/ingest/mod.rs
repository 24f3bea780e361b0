//! Turning raw roster rows into employees.
//!
//! [`parse_row`] normalizes free-form columns into an
//! [`EmployeeRecord`](crate::models::EmployeeRecord); [`validate`] decides
//! whether that record can go through the rule engine.

mod parser;
mod validator;

pub use parser::{ColumnRole, DATE_FORMAT, parse_row, parse_strict_date};
pub use validator::{is_valid, validate};
