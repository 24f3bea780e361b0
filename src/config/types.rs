//! Configuration types for the vacation policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the policy YAML file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days granted to every employee before any other rule applies.
pub const DEFAULT_MINIMUM_DAYS: Decimal = Decimal::from_parts(26, 0, 0, false, 0);

/// Age bonus settings.
///
/// An employee who reaches `min_age` during the target year receives one
/// additional day, and one more for every completed `period_years` after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBonusConfig {
    /// The age (in calendar-year difference) at which the first bonus day is granted.
    pub min_age: i32,
    /// The number of years between successive bonus days.
    pub period_years: i32,
}

impl Default for AgeBonusConfig {
    fn default() -> Self {
        Self {
            min_age: 30,
            period_years: 5,
        }
    }
}

/// The complete vacation policy.
///
/// # Example
///
/// ```
/// use vacation_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.minimum_days, Decimal::from(26));
/// assert_eq!(policy.age_bonus.min_age, 30);
/// assert_eq!(policy.allowed_start_days, vec![1, 15]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Base number of vacation days per year.
    pub minimum_days: Decimal,
    /// Age bonus settings.
    #[serde(default)]
    pub age_bonus: AgeBonusConfig,
    /// Days of month on which an employee is expected to start.
    #[serde(default = "default_allowed_start_days")]
    pub allowed_start_days: Vec<u32>,
}

fn default_allowed_start_days() -> Vec<u32> {
    vec![1, 15]
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            minimum_days: DEFAULT_MINIMUM_DAYS,
            age_bonus: AgeBonusConfig::default(),
            allowed_start_days: default_allowed_start_days(),
        }
    }
}

impl PolicyConfig {
    /// Checks the values that would make the rules meaningless.
    ///
    /// Returns a description of the first problem found.
    pub fn check(&self) -> Result<(), String> {
        if self.minimum_days.is_sign_negative() {
            return Err(format!(
                "minimum_days must not be negative (got {})",
                self.minimum_days
            ));
        }
        if self.age_bonus.period_years <= 0 {
            return Err(format!(
                "age_bonus.period_years must be positive (got {})",
                self.age_bonus.period_years
            ));
        }
        if let Some(day) = self
            .allowed_start_days
            .iter()
            .find(|day| **day == 0 || **day > 31)
        {
            return Err(format!("allowed_start_days contains invalid day {}", day));
        }
        Ok(())
    }
}
