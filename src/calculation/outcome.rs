//! The value every rule hands back to the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, AuditWarning};

/// The result of applying one rule to the running day count.
///
/// `days` is `None` once the entitlement can no longer be determined; every
/// later rule passes `None` through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    /// The running day count after this rule.
    pub days: Option<Decimal>,
    /// The audit step recording this rule.
    pub audit_step: AuditStep,
    /// Diagnostics raised by this rule.
    pub warnings: Vec<AuditWarning>,
}

/// Renders a running day count for an audit step.
pub(crate) fn days_json(days: Option<Decimal>) -> serde_json::Value {
    match days {
        Some(days) => serde_json::Value::String(days.normalize().to_string()),
        None => serde_json::Value::Null,
    }
}

/// Renders a running day count for audit reasoning.
pub(crate) fn days_text(days: Option<Decimal>) -> String {
    match days {
        Some(days) => days.normalize().to_string(),
        None => "undetermined".to_string(),
    }
}
