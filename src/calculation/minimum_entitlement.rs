//! Minimum entitlement rule.
//!
//! Every employee starts from the policy's base number of days.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::AuditStep;

use super::outcome::{RuleOutcome, days_json, days_text};

/// Adds the base entitlement to the running day count.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::apply_minimum_entitlement;
/// use vacation_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let result = apply_minimum_entitlement(Some(Decimal::ZERO), &PolicyConfig::default(), 1);
/// assert_eq!(result.days, Some(Decimal::from(26)));
/// ```
pub fn apply_minimum_entitlement(
    days: Option<Decimal>,
    policy: &PolicyConfig,
    step_number: u32,
) -> RuleOutcome {
    let minimum = policy.minimum_days;
    let new_days = days.map(|d| d + minimum);

    let audit_step = AuditStep {
        step_number,
        rule_id: "minimum_entitlement".to_string(),
        rule_name: "Minimum Entitlement".to_string(),
        input: serde_json::json!({
            "days": days_json(days),
            "minimum_days": minimum.normalize().to_string()
        }),
        output: serde_json::json!({
            "days": days_json(new_days)
        }),
        reasoning: format!(
            "{} + {} = {}",
            days_text(days),
            minimum.normalize(),
            days_text(new_days)
        ),
    };

    RuleOutcome {
        days: new_days,
        audit_step,
        warnings: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adds_base_days() {
        let result = apply_minimum_entitlement(Some(Decimal::ZERO), &PolicyConfig::default(), 1);

        assert_eq!(result.days, Some(Decimal::from(26)));
        assert_eq!(result.audit_step.rule_id, "minimum_entitlement");
        assert_eq!(result.audit_step.output["days"].as_str().unwrap(), "26");
        assert_eq!(result.audit_step.reasoning, "0 + 26 = 26");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_uses_configured_minimum() {
        let policy = PolicyConfig {
            minimum_days: Decimal::from(20),
            ..PolicyConfig::default()
        };
        let result = apply_minimum_entitlement(Some(Decimal::ZERO), &policy, 1);

        assert_eq!(result.days, Some(Decimal::from(20)));
    }

    #[test]
    fn test_undetermined_stays_undetermined() {
        let result = apply_minimum_entitlement(None, &PolicyConfig::default(), 1);

        assert_eq!(result.days, None);
        assert!(result.audit_step.output["days"].is_null());
    }

    #[test]
    fn test_step_number_is_recorded() {
        let result = apply_minimum_entitlement(Some(Decimal::ZERO), &PolicyConfig::default(), 7);
        assert_eq!(result.audit_step.step_number, 7);
    }
}
