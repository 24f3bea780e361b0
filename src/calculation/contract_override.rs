//! Special contract rule.
//!
//! A special contract replaces whatever the earlier rules produced with the
//! day count it states, even when that is below the minimum.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{AuditStep, AuditWarning, Employee, INVALID_CONTRACT};

use super::outcome::{RuleOutcome, days_json, days_text};

/// Extracts the day count a contract text starts with.
///
/// Leading whitespace and a single `+` sign are accepted. Anything that does
/// not begin with a digit (including a `-` sign) yields `None`, as does a
/// digit run too long to fit a `Decimal`.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::leading_day_count;
/// use rust_decimal::Decimal;
///
/// assert_eq!(leading_day_count("30 vacation days"), Some(Decimal::from(30)));
/// assert_eq!(leading_day_count("14"), Some(Decimal::from(14)));
/// assert_eq!(leading_day_count("vacation: 30"), None);
/// ```
pub fn leading_day_count(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);

    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());

    if end == 0 {
        return None;
    }
    Decimal::from_str(&text[..end]).ok()
}

/// Replaces the running day count with the contract's day count, if any.
///
/// Without a contract the day count passes through unchanged. A contract that
/// does not start with a number makes the entitlement undetermined and raises
/// an `INVALID_CONTRACT` warning.
pub fn apply_contract_override(
    days: Option<Decimal>,
    employee: &Employee,
    step_number: u32,
) -> RuleOutcome {
    let Some(contract) = employee.contract_override.as_deref() else {
        return RuleOutcome {
            days,
            audit_step: AuditStep {
                step_number,
                rule_id: "contract_override".to_string(),
                rule_name: "Special Contract".to_string(),
                input: serde_json::json!({ "days": days_json(days), "contract": null }),
                output: serde_json::json!({ "days": days_json(days), "override_applied": false }),
                reasoning: "No special contract".to_string(),
            },
            warnings: vec![],
        };
    };

    let contract_days = leading_day_count(contract);
    let new_days = contract_days;

    let mut warnings = Vec::new();
    let reasoning = match contract_days {
        Some(n) => format!(
            "Special contract '{}' replaces {} with {}",
            contract,
            days_text(days),
            n
        ),
        None => {
            warnings.push(AuditWarning::new(
                INVALID_CONTRACT,
                format!("Invalid special contract for {}", employee.name),
                "high",
            ));
            format!(
                "Special contract '{}' does not start with a day count",
                contract
            )
        }
    };

    RuleOutcome {
        days: new_days,
        audit_step: AuditStep {
            step_number,
            rule_id: "contract_override".to_string(),
            rule_name: "Special Contract".to_string(),
            input: serde_json::json!({ "days": days_json(days), "contract": contract }),
            output: serde_json::json!({
                "days": days_json(new_days),
                "override_applied": contract_days.is_some()
            }),
            reasoning,
        },
        warnings,
    }
}
