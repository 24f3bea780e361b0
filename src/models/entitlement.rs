//! Entitlement result models for the Vacation Entitlement Engine.
//!
//! This module contains the [`EntitlementResult`] written to the output roster
//! and the audit structures that record how each rule changed the day count.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Warning code for a row that failed validation.
pub const INVALID_ROW: &str = "INVALID_ROW";
/// Warning code for a special contract without a leading day count.
pub const INVALID_CONTRACT: &str = "INVALID_CONTRACT";
/// Warning code for an employee who starts after the target year.
pub const NOT_STARTED: &str = "NOT_STARTED";
/// Warning code for a start date outside the allowed days of month.
pub const IRREGULAR_START_DAY: &str = "IRREGULAR_START_DAY";

/// The computed entitlement for one roster row.
///
/// `days` is `None` when the row was invalid or the entitlement could not be
/// determined (e.g. the employee had not started yet).
///
/// # Example
///
/// ```
/// use vacation_engine::models::EntitlementResult;
/// use rust_decimal::Decimal;
///
/// let result = EntitlementResult {
///     name: "Hans".to_string(),
///     days: Some(Decimal::from(27)),
/// };
/// assert!(result.is_determined());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementResult {
    /// The employee's name as read from the roster.
    pub name: String,
    /// Vacation days, rounded to one decimal place.
    pub days: Option<Decimal>,
}

impl EntitlementResult {
    /// Returns true if a day count was computed.
    pub fn is_determined(&self) -> bool {
        self.days.is_some()
    }
}

/// A single step in the audit trace recording a rule decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A diagnostic produced while processing a row.
///
/// Warnings never abort a run. The orchestrator decides how to present them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a new warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while processing the row.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if any warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}
