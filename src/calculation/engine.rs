//! The rule chain.
//!
//! [`compute_entitlement`] runs the five rules in their fixed order over a
//! running day count that starts at zero:
//!
//! 1. minimum entitlement
//! 2. age bonus
//! 3. special contract
//! 4. newcomer accrual
//! 5. start day check
//!
//! The engine never logs. Diagnostics are collected in the returned
//! [`AuditTrace`] and presented by the caller.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::models::{AuditTrace, Employee};

use super::age_bonus::apply_age_bonus;
use super::contract_override::apply_contract_override;
use super::minimum_entitlement::apply_minimum_entitlement;
use super::newcomer::apply_newcomer_rule;
use super::outcome::RuleOutcome;
use super::start_day::check_start_day;

/// Decimal places kept in a final day count.
pub const RESULT_DECIMAL_PLACES: u32 = 1;

/// The unrounded outcome of the rule chain for one employee and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    /// The day count at full precision, `None` if undetermined.
    pub days: Option<Decimal>,
    /// The fraction carried into the following year (start year only).
    pub carried: Option<Decimal>,
    /// Every rule step and warning, in order.
    pub audit_trace: AuditTrace,
}

impl Entitlement {
    /// Returns the day count rounded for output.
    pub fn rounded_days(&self) -> Option<Decimal> {
        self.days.map(round_days)
    }
}

/// Rounds a day count to one decimal place, halves away from zero.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::round_days;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let days = Decimal::from(26) / Decimal::from(12);
/// assert_eq!(round_days(days), Decimal::from_str("2.2").unwrap());
/// assert_eq!(round_days(Decimal::from_str("0.25").unwrap()).to_string(), "0.3");
/// assert_eq!(round_days(Decimal::from(27)).to_string(), "27");
/// ```
pub fn round_days(days: Decimal) -> Decimal {
    days.round_dp_with_strategy(RESULT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Runs the full rule chain for `employee` in `year`.
///
/// In the employee's second year the chain is run once more for the previous
/// year to find the fraction carried over from the start year. That inner run
/// always lands in the start-year branch, so recursion is at most one level
/// deep. Its warnings are not repeated in the returned trace.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::compute_entitlement;
/// use vacation_engine::config::PolicyConfig;
/// use vacation_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     name: "Hans".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
///     start_date: NaiveDate::from_ymd_opt(1998, 1, 1).unwrap(),
///     contract_override: None,
/// };
///
/// let entitlement = compute_entitlement(&employee, 2000, &PolicyConfig::default());
/// assert_eq!(entitlement.rounded_days(), Some(Decimal::from(27)));
/// assert_eq!(entitlement.audit_trace.steps.len(), 5);
/// ```
pub fn compute_entitlement(employee: &Employee, year: i32, policy: &PolicyConfig) -> Entitlement {
    let mut trace = AuditTrace::default();

    let days = Some(Decimal::ZERO);
    let days = record(apply_minimum_entitlement(days, policy, 1), &mut trace);
    let days = record(apply_age_bonus(days, employee, year, policy, 2), &mut trace);
    let days = record(apply_contract_override(days, employee, 3), &mut trace);

    let newcomer = apply_newcomer_rule(days, employee, year, 4, || {
        prior_year_carry(employee, year, policy)
    });
    trace.steps.push(newcomer.audit_step);
    trace.warnings.extend(newcomer.warnings);
    let carried = newcomer.carried;

    let days = record(check_start_day(newcomer.days, employee, policy, 5), &mut trace);

    Entitlement {
        days,
        carried,
        audit_trace: trace,
    }
}

fn record(outcome: RuleOutcome, trace: &mut AuditTrace) -> Option<Decimal> {
    trace.steps.push(outcome.audit_step);
    trace.warnings.extend(outcome.warnings);
    outcome.days
}

/// Returns the fraction carried from `year - 1` into `year`.
fn prior_year_carry(employee: &Employee, year: i32, policy: &PolicyConfig) -> Option<Decimal> {
    if year - 1 < employee.start_year() {
        return None;
    }
    compute_entitlement(employee, year - 1, policy).carried
}

/// Runs the rule chain and returns the day count at full precision.
pub fn compute_days(employee: &Employee, year: i32, policy: &PolicyConfig) -> Option<Decimal> {
    compute_entitlement(employee, year, policy).days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{INVALID_CONTRACT, IRREGULAR_START_DAY, NOT_STARTED};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(birth: &str, start: &str, contract: Option<&str>) -> Employee {
        Employee {
            name: "Hans".to_string(),
            date_of_birth: NaiveDate::parse_from_str(birth, "%d.%m.%Y").unwrap(),
            start_date: NaiveDate::parse_from_str(start, "%d.%m.%Y").unwrap(),
            contract_override: contract.map(str::to_string),
        }
    }

    fn rounded(employee: &Employee, year: i32) -> Option<Decimal> {
        compute_entitlement(employee, year, &PolicyConfig::default()).rounded_days()
    }

    #[test]
    fn test_minimum_days_for_young_established_employee() {
        let e = employee("01.01.2000", "01.01.2016", None);
        assert_eq!(rounded(&e, 2018), Some(dec("26")));
    }

    #[test]
    fn test_thirty_year_old_gets_bonus() {
        let e = employee("01.01.1970", "01.01.1998", None);
        assert_eq!(rounded(&e, 2000), Some(dec("27")));
    }

    #[test]
    fn test_turning_thirty_on_new_years_eve_gets_bonus() {
        let e = employee("31.12.1970", "01.01.1998", None);
        assert_eq!(rounded(&e, 2000), Some(dec("27")));
    }

    #[test]
    fn test_thirty_five_year_old_gets_two_bonus_days() {
        let e = employee("01.01.1965", "01.01.1998", None);
        assert_eq!(rounded(&e, 2000), Some(dec("28")));
    }

    #[test]
    fn test_contract_overrides_age_adjusted_total() {
        let e = employee("31.12.1965", "01.01.1998", Some("30 vacation days"));
        assert_eq!(rounded(&e, 2000), Some(dec("30")));
    }

    #[test]
    fn test_contract_below_minimum_still_wins() {
        let e = employee("31.12.1965", "01.01.1998", Some("14 vacation days"));
        assert_eq!(rounded(&e, 2000), Some(dec("14")));
    }

    #[test]
    fn test_invalid_contract_is_undetermined() {
        let e = employee("31.12.1965", "01.01.1998", Some("see HR"));
        let entitlement = compute_entitlement(&e, 2000, &PolicyConfig::default());

        assert_eq!(entitlement.rounded_days(), None);
        assert!(entitlement.audit_trace.has_warning(INVALID_CONTRACT));
    }

    #[test]
    fn test_november_starter_gets_one_twelfth() {
        let e = employee("01.01.2000", "01.11.2017", None);
        assert_eq!(rounded(&e, 2017), Some(dec("2.2")));
    }

    #[test]
    fn test_mid_november_starter_gets_one_twelfth() {
        let e = employee("01.01.2000", "15.11.2017", None);
        assert_eq!(rounded(&e, 2017), Some(dec("2.2")));
    }

    #[test]
    fn test_december_starter_gets_nothing_in_start_year() {
        let e = employee("01.01.2000", "01.12.2017", None);
        assert_eq!(rounded(&e, 2017), Some(Decimal::ZERO));
    }

    #[test]
    fn test_second_year_gets_carry_over() {
        let e = employee("01.01.2000", "01.12.2017", None);
        assert_eq!(rounded(&e, 2018), Some(dec("28.2")));
    }

    #[test]
    fn test_second_year_carry_independent_of_start_month() {
        let e = employee("01.01.2000", "01.08.2017", None);
        assert_eq!(rounded(&e, 2018), Some(dec("28.2")));
    }

    #[test]
    fn test_carry_uses_prior_year_entitlement() {
        // 29 in 2017 (no bonus), 30 in 2018 (one bonus day).
        let e = employee("01.01.1988", "01.06.2017", None);
        let days = compute_days(&e, 2018, &PolicyConfig::default()).unwrap();

        assert_eq!(days, Decimal::from(27) + Decimal::from(26) / Decimal::from(12));
    }

    #[test]
    fn test_carry_uses_prior_year_contract() {
        let e = employee("01.01.2000", "01.06.2017", Some("24 days"));
        assert_eq!(rounded(&e, 2018), Some(dec("26")));
    }

    #[test]
    fn test_not_started_is_undetermined() {
        let e = employee("01.01.2000", "01.01.2019", None);
        let entitlement = compute_entitlement(&e, 2017, &PolicyConfig::default());

        assert_eq!(entitlement.rounded_days(), None);
        assert!(entitlement.audit_trace.has_warning(NOT_STARTED));
    }

    #[test]
    fn test_irregular_start_day_warns_without_changing_days() {
        let e = employee("31.12.1965", "10.01.1998", None);
        let entitlement = compute_entitlement(&e, 2000, &PolicyConfig::default());

        assert_eq!(entitlement.rounded_days(), Some(dec("28")));
        assert!(entitlement.audit_trace.has_warning(IRREGULAR_START_DAY));
    }

    #[test]
    fn test_second_year_does_not_repeat_prior_year_warnings() {
        let e = employee("01.01.2000", "10.12.2017", None);
        let entitlement = compute_entitlement(&e, 2018, &PolicyConfig::default());

        let irregular = entitlement
            .audit_trace
            .warnings
            .iter()
            .filter(|w| w.code == IRREGULAR_START_DAY)
            .count();
        assert_eq!(irregular, 1);
    }

    #[test]
    fn test_steps_are_in_rule_order() {
        let e = employee("01.01.1970", "01.01.1998", None);
        let entitlement = compute_entitlement(&e, 2000, &PolicyConfig::default());

        let ids: Vec<&str> = entitlement
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "minimum_entitlement",
                "age_bonus",
                "contract_override",
                "newcomer",
                "start_day_check"
            ]
        );
        let numbers: Vec<u32> = entitlement
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_carried_is_only_set_in_start_year() {
        let e = employee("01.01.2000", "01.12.2017", None);
        let policy = PolicyConfig::default();

        assert_eq!(
            compute_entitlement(&e, 2017, &policy).carried,
            Some(Decimal::from(26) / Decimal::from(12))
        );
        assert_eq!(compute_entitlement(&e, 2018, &policy).carried, None);
    }

    #[test]
    fn test_extreme_years_do_not_panic() {
        let e = employee("01.01.1970", "01.01.1998", None);

        let before = compute_entitlement(&e, i32::MIN, &PolicyConfig::default());
        assert_eq!(before.rounded_days(), None);
        assert!(before.audit_trace.has_warning(NOT_STARTED));

        let after = compute_entitlement(&e, i32::MAX, &PolicyConfig::default());
        assert_eq!(after.rounded_days(), Some(Decimal::from(26 + 429_496_330)));
    }

    #[test]
    fn test_huge_contract_in_start_year_is_prorated() {
        let e = employee("01.01.1970", "01.11.2017", Some("99999999999 days"));
        let entitlement = compute_entitlement(&e, 2017, &PolicyConfig::default());

        assert_eq!(
            entitlement.days,
            Some(Decimal::from(99_999_999_999u64) / Decimal::from(12))
        );
    }

    #[test]
    fn test_round_days_half_away_from_zero() {
        assert_eq!(round_days(dec("2.25")), dec("2.3"));
        assert_eq!(round_days(dec("2.24")), dec("2.2"));
        assert_eq!(round_days(dec("23.8333")), dec("23.8"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_employee() -> impl Strategy<Value = Employee> {
            (1940i32..2005, 1u32..=12, 1u32..=28, 1990i32..2030, 1u32..=12, 1u32..=28).prop_map(
                |(by, bm, bd, sy, sm, sd)| Employee {
                    name: "Prop".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(by, bm, bd).unwrap(),
                    start_date: NaiveDate::from_ymd_opt(sy, sm, sd).unwrap(),
                    contract_override: None,
                },
            )
        }

        proptest! {
            #[test]
            fn established_employees_get_at_least_minimum(
                employee in arb_employee(),
                year in 1990i32..2040,
            ) {
                prop_assume!(employee.start_year() < year - 1);

                let days = rounded(&employee, year).unwrap();
                prop_assert!(days >= Decimal::from(26));
            }

            #[test]
            fn reruns_are_identical(employee in arb_employee(), year in 1990i32..2040) {
                let policy = PolicyConfig::default();
                prop_assert_eq!(
                    compute_entitlement(&employee, year, &policy),
                    compute_entitlement(&employee, year, &policy)
                );
            }
        }
    }
}
