//! Calculation logic for the Vacation Entitlement Engine.
//!
//! This module contains the individual policy rules (minimum entitlement, age
//! bonus, special contract, newcomer accrual and start day check) and the
//! engine that chains them for one employee and target year.

mod age_bonus;
mod contract_override;
mod engine;
mod minimum_entitlement;
mod newcomer;
mod outcome;
mod start_day;

pub use age_bonus::{age_bonus_days, apply_age_bonus};
pub use contract_override::{apply_contract_override, leading_day_count};
pub use engine::{
    Entitlement, RESULT_DECIMAL_PLACES, compute_days, compute_entitlement, round_days,
};
pub use minimum_entitlement::apply_minimum_entitlement;
pub use newcomer::{MONTHS_PER_YEAR, NewcomerOutcome, NewcomerPhase, apply_newcomer_rule};
pub use outcome::RuleOutcome;
pub use start_day::check_start_day;
