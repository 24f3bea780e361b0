//! Start day check.
//!
//! Employment normally begins on one of a few days of the month. Any other
//! day is flagged for a human to double check; the entitlement is unaffected.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{AuditStep, AuditWarning, Employee, IRREGULAR_START_DAY};

use super::outcome::{RuleOutcome, days_json};

/// Flags a start date that falls outside the allowed days of month.
pub fn check_start_day(
    days: Option<Decimal>,
    employee: &Employee,
    policy: &PolicyConfig,
    step_number: u32,
) -> RuleOutcome {
    let start_day = employee.start_day();
    let regular = policy.allowed_start_days.contains(&start_day);

    let mut warnings = Vec::new();
    if !regular {
        warnings.push(AuditWarning::new(
            IRREGULAR_START_DAY,
            format!(
                "{} started not in a correct day. Please double check it.",
                employee.name
            ),
            "low",
        ));
    }

    let reasoning = if regular {
        format!("Start day {} is allowed", start_day)
    } else {
        format!(
            "Start day {} is not one of {:?}",
            start_day, policy.allowed_start_days
        )
    };

    RuleOutcome {
        days,
        audit_step: AuditStep {
            step_number,
            rule_id: "start_day_check".to_string(),
            rule_name: "Start Day Check".to_string(),
            input: serde_json::json!({
                "days": days_json(days),
                "start_day": start_day,
                "allowed_start_days": policy.allowed_start_days
            }),
            output: serde_json::json!({
                "days": days_json(days),
                "regular": regular
            }),
            reasoning,
        },
        warnings,
    }
}
