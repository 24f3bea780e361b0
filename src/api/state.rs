//! Application state for the Vacation Entitlement Engine API.

use std::sync::Arc;

use crate::config::PolicyConfig;

/// Shared application state.
///
/// Holds the policy every request is evaluated against. The policy is never
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<PolicyConfig>,
}

impl AppState {
    /// Creates a new application state for the given policy.
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns the active policy.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_policy() {
        let state = AppState::default();
        let clone = state.clone();
        assert!(std::ptr::eq(state.policy(), clone.policy()));
    }
}
