//! Age bonus rule.
//!
//! Employees reaching the bonus age during the target year receive one extra
//! day, plus one more for every completed bonus period after that. Age is the
//! plain difference of calendar years.

use rust_decimal::Decimal;

use crate::config::{AgeBonusConfig, PolicyConfig};
use crate::models::{AuditStep, Employee};

use super::outcome::{RuleOutcome, days_json, days_text};

/// Returns the bonus days for an employee of the given age.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::age_bonus_days;
/// use vacation_engine::config::AgeBonusConfig;
///
/// let config = AgeBonusConfig::default();
/// assert_eq!(age_bonus_days(29, &config), 0);
/// assert_eq!(age_bonus_days(30, &config), 1);
/// assert_eq!(age_bonus_days(34, &config), 1);
/// assert_eq!(age_bonus_days(35, &config), 2);
/// ```
pub fn age_bonus_days(age: i32, config: &AgeBonusConfig) -> u32 {
    let over = age.saturating_sub(config.min_age);
    if over < 0 || config.period_years <= 0 {
        return 0;
    }

    (over / config.period_years).unsigned_abs() + 1
}

/// Adds the age bonus for `year` to the running day count.
pub fn apply_age_bonus(
    days: Option<Decimal>,
    employee: &Employee,
    year: i32,
    policy: &PolicyConfig,
    step_number: u32,
) -> RuleOutcome {
    let age = employee.age_in(year);
    let bonus = age_bonus_days(age, &policy.age_bonus);
    let new_days = days.and_then(|d| d.checked_add(Decimal::from(bonus)));

    let reasoning = if bonus > 0 {
        format!(
            "Age {} in {} earns {} bonus day(s): {} + {} = {}",
            age,
            year,
            bonus,
            days_text(days),
            bonus,
            days_text(new_days)
        )
    } else {
        format!(
            "Age {} in {} is below {}, no bonus",
            age, year, policy.age_bonus.min_age
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "age_bonus".to_string(),
        rule_name: "Age Bonus".to_string(),
        input: serde_json::json!({
            "days": days_json(days),
            "age": age,
            "min_age": policy.age_bonus.min_age,
            "period_years": policy.age_bonus.period_years
        }),
        output: serde_json::json!({
            "days": days_json(new_days),
            "bonus_days": bonus
        }),
        reasoning,
    };

    RuleOutcome {
        days: new_days,
        audit_step,
        warnings: vec![],
    }
}
