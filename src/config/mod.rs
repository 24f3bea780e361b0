//! Configuration loading for the Vacation Entitlement Engine.
//!
//! The policy constants (base days, age bonus and allowed start days) are
//! loaded from a YAML file, or taken from the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/vacation_policy.yaml").unwrap();
//! println!("Base entitlement: {}", config.policy().minimum_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AgeBonusConfig, DEFAULT_MINIMUM_DAYS, PolicyConfig};
