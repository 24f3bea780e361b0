//! Request types for the Vacation Entitlement Engine API.
//!
//! This module defines the JSON request structures for the `/entitlements`
//! endpoint. Cells are raw strings and go through the same column parser as
//! CSV rosters.

use serde::{Deserialize, Serialize};

use crate::models::RawRow;

/// Request body for the `/entitlements` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The target year, validated like the CLI argument.
    pub year: String,
    /// The roster rows to evaluate, in output order.
    #[serde(default)]
    pub employees: Vec<EmployeeRowRequest>,
}

/// One roster row in an entitlement request.
///
/// Missing cells default to empty strings and make the row invalid, exactly as
/// an empty CSV cell would.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeRowRequest {
    /// The employee's name.
    #[serde(default)]
    pub name: String,
    /// Date of birth as `DD.MM.YYYY`.
    #[serde(default)]
    pub date_of_birth: String,
    /// Start date as `DD.MM.YYYY`.
    #[serde(default)]
    pub start_date: String,
    /// Free text special contract, e.g. "30 days".
    #[serde(default)]
    pub special_contract: Option<String>,
}

impl From<EmployeeRowRequest> for RawRow {
    fn from(request: EmployeeRowRequest) -> Self {
        let mut row = RawRow::new();
        row.push("Name", request.name);
        row.push("Date of birth", request.date_of_birth);
        row.push("Start date", request.start_date);
        row.push(
            "Special contract",
            request.special_contract.unwrap_or_default(),
        );
        row
    }
}
