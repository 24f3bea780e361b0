//! Response types for the Vacation Entitlement Engine API.
//!
//! This module defines the success body of `/entitlements` and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::AuditTrace;
use crate::processor::RowReport;

/// Response body for a successful `/entitlements` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The target year.
    pub year: i32,
    /// One entry per request row, in request order.
    pub results: Vec<EmployeeEntitlement>,
}

/// The entitlement of one request row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeEntitlement {
    /// The employee's name, empty if the row had none.
    pub name: String,
    /// Vacation days, `null` when undetermined.
    pub days: Option<Decimal>,
    /// How the result came about.
    pub audit_trace: AuditTrace,
}

impl From<RowReport> for EmployeeEntitlement {
    fn from(report: RowReport) -> Self {
        Self {
            name: report.result.name,
            days: report.result.days,
            audit_trace: report.audit_trace,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid year error response.
    pub fn invalid_year(value: &str) -> Self {
        Self::with_details(
            "INVALID_YEAR",
            "Year is not valid",
            format!("'{}' is not an integer year", value),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidYear { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_year(&value),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
            EngineError::InputRead { .. }
            | EngineError::CsvRead { .. }
            | EngineError::OutputWrite { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("IO_ERROR", "Roster I/O failed", error.to_string()),
            },
        }
    }
}
