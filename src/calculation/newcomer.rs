//! Newcomer rule.
//!
//! Employees in their first calendar year receive only the whole months left
//! after their start month. In their second year they receive their full
//! entitlement plus the 1/12 accrued during the first year.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, AuditWarning, Employee, NOT_STARTED};

use super::outcome::{days_json, days_text};

/// Months an entitlement is spread over.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Where an employee stands relative to the target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewcomerPhase {
    /// Started before the previous year; no adjustment.
    Established,
    /// Started during the target year.
    StartYear,
    /// Started during the year before the target year.
    SecondYear,
    /// Starts after the target year.
    NotStarted,
}

impl NewcomerPhase {
    /// Classifies an employee's start year against the target year.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::calculation::NewcomerPhase;
    ///
    /// assert_eq!(NewcomerPhase::classify(2017, 2017), NewcomerPhase::StartYear);
    /// assert_eq!(NewcomerPhase::classify(2017, 2018), NewcomerPhase::SecondYear);
    /// assert_eq!(NewcomerPhase::classify(2017, 2016), NewcomerPhase::NotStarted);
    /// assert_eq!(NewcomerPhase::classify(2017, 2019), NewcomerPhase::Established);
    /// ```
    pub fn classify(start_year: i32, year: i32) -> Self {
        if start_year == year {
            Self::StartYear
        } else if start_year + 1 == year {
            Self::SecondYear
        } else if start_year > year {
            Self::NotStarted
        } else {
            Self::Established
        }
    }
}

/// The result of the newcomer rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewcomerOutcome {
    /// The running day count after this rule.
    pub days: Option<Decimal>,
    /// The fraction carried into the second year. Only set in the start year.
    pub carried: Option<Decimal>,
    /// The audit step recording this rule.
    pub audit_step: AuditStep,
    /// Diagnostics raised by this rule.
    pub warnings: Vec<AuditWarning>,
}

/// Applies the newcomer adjustment for `year`.
///
/// `prior_year_carry` is only called in the second year and must return the
/// carried fraction of the start year's entitlement.
///
/// # Examples
///
/// ```
/// use vacation_engine::calculation::apply_newcomer_rule;
/// use vacation_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     name: "Hans".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
///     start_date: NaiveDate::from_ymd_opt(2017, 11, 1).unwrap(),
///     contract_override: None,
/// };
///
/// // Started in November: only December counts.
/// let result = apply_newcomer_rule(Some(Decimal::from(24)), &employee, 2017, 4, || None);
/// assert_eq!(result.days, Some(Decimal::from(2)));
/// assert_eq!(result.carried, Some(Decimal::from(2)));
/// ```
pub fn apply_newcomer_rule<F>(
    days: Option<Decimal>,
    employee: &Employee,
    year: i32,
    step_number: u32,
    prior_year_carry: F,
) -> NewcomerOutcome
where
    F: FnOnce() -> Option<Decimal>,
{
    let start_year = employee.start_year();
    let phase = NewcomerPhase::classify(start_year, year);
    let months = Decimal::from(MONTHS_PER_YEAR);

    let mut carried = None;
    let mut carry_added = None;
    let mut warnings = Vec::new();

    let (new_days, reasoning) = match phase {
        NewcomerPhase::StartYear => {
            let remaining_months = MONTHS_PER_YEAR - 1 - employee.start_month0();
            carried = days.and_then(|d| d.checked_div(months));
            let prorated = days
                .and_then(|d| d.checked_mul(Decimal::from(remaining_months)))
                .and_then(|d| d.checked_div(months));
            (
                prorated,
                format!(
                    "Started {} {}: {} full month(s) remain, {} x {}/{} = {}",
                    employee.start_date.format("%B"),
                    start_year,
                    remaining_months,
                    days_text(days),
                    remaining_months,
                    MONTHS_PER_YEAR,
                    days_text(prorated)
                ),
            )
        }
        NewcomerPhase::SecondYear => {
            carry_added = prior_year_carry();
            let total = days.zip(carry_added).and_then(|(d, c)| d.checked_add(c));
            (
                total,
                format!(
                    "Second year after starting in {}: {} + carried {} = {}",
                    start_year,
                    days_text(days),
                    days_text(carry_added),
                    days_text(total)
                ),
            )
        }
        NewcomerPhase::NotStarted => {
            warnings.push(AuditWarning::new(
                NOT_STARTED,
                format!("{} did not work in {}", employee.name, year),
                "medium",
            ));
            (
                None,
                format!("Starts in {}, after target year {}", start_year, year),
            )
        }
        NewcomerPhase::Established => (
            days,
            format!("Started in {}, no newcomer adjustment", start_year),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "newcomer".to_string(),
        rule_name: "Newcomer Accrual".to_string(),
        input: serde_json::json!({
            "days": days_json(days),
            "start_date": employee.start_date,
            "year": year
        }),
        output: serde_json::json!({
            "days": days_json(new_days),
            "phase": phase,
            "carried": days_json(carried),
            "carry_added": days_json(carry_added)
        }),
        reasoning,
    };

    NewcomerOutcome {
        days: new_days,
        carried,
        audit_step,
        warnings,
    }
}
