//! HTTP API module for the Vacation Entitlement Engine.
//!
//! This module exposes the rule engine over REST: a roster posted to
//! `/entitlements` is evaluated exactly like a CSV file, with the audit trace
//! of every row included in the response.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRowRequest, EntitlementRequest};
pub use response::{ApiError, ApiErrorResponse, EmployeeEntitlement, EntitlementResponse};
pub use state::AppState;
