//! HTTP request handlers for the Vacation Entitlement Engine API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::RawRow;
use crate::processor::{parse_year, process_rows};

use super::request::EntitlementRequest;
use super::response::{ApiError, ApiErrorResponse, EmployeeEntitlement, EntitlementResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlements", post(entitlements_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for POST /entitlements.
///
/// Evaluates every posted row for the requested year. Row problems do not
/// fail the request; they come back as `null` days plus audit warnings.
async fn entitlements_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let year = match parse_year(&request.year) {
        Ok(year) => year,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year = %request.year,
                "Year is not valid"
            );
            let api_error: ApiErrorResponse = err.into();
            return json_response(api_error.status, api_error.error);
        }
    };

    let start_time = Instant::now();
    let rows: Vec<RawRow> = request.employees.into_iter().map(Into::into).collect();
    let reports = process_rows(&rows, year, state.policy());

    for report in &reports {
        for warning in &report.audit_trace.warnings {
            warn!(
                correlation_id = %correlation_id,
                employee = %report.result.name,
                code = %warning.code,
                "{}",
                warning.message
            );
        }
    }

    info!(
        correlation_id = %correlation_id,
        year,
        employees = reports.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Entitlement calculation completed"
    );

    json_response(
        StatusCode::OK,
        EntitlementResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            year,
            results: reports.into_iter().map(EmployeeEntitlement::from).collect(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;
    use crate::models::{INVALID_ROW, NOT_STARTED};
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn post(router: Router, body: String) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/entitlements")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn router() -> Router {
        create_router(AppState::default())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = json!({
            "year": "2000",
            "employees": [{
                "name": "Hans",
                "date_of_birth": "01.01.1970",
                "start_date": "01.01.1998"
            }]
        });

        let (status, json) = post(router(), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["year"], 2000);
        assert_eq!(json["engine_version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["results"][0]["name"], "Hans");
        assert_eq!(json["results"][0]["days"], "27");
        assert_eq!(
            json["results"][0]["audit_trace"]["steps"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
    }

    #[tokio::test]
    async fn test_response_parses_into_typed_body() {
        let body = json!({
            "year": "2017",
            "employees": [{
                "name": "Anna",
                "date_of_birth": "01.01.2000",
                "start_date": "01.11.2017"
            }]
        });

        let (_, json) = post(router(), body.to_string()).await;
        let response: EntitlementResponse = serde_json::from_value(json).unwrap();

        assert_eq!(response.results[0].days, Some(Decimal::new(22, 1)));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, json) = post(router(), "{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_year_returns_400() {
        let (status, json) = post(router(), json!({"employees": []}).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
        assert!(json["message"].as_str().unwrap().contains("year"));
    }

    #[tokio::test]
    async fn test_invalid_year_returns_400() {
        let body = json!({"year": "a2017", "employees": []});
        let (status, json) = post(router(), body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_YEAR");
    }

    #[tokio::test]
    async fn test_row_problems_do_not_fail_request() {
        let body = json!({
            "year": "2017",
            "employees": [
                {"name": "", "date_of_birth": "30.12.1950", "start_date": "01.01.2001"},
                {"name": "Late", "date_of_birth": "01.01.1990", "start_date": "01.01.2020"}
            ]
        });

        let (status, json) = post(router(), body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["results"][0]["days"].is_null());
        assert_eq!(
            json["results"][0]["audit_trace"]["warnings"][0]["code"],
            INVALID_ROW
        );
        assert!(json["results"][1]["days"].is_null());
        assert_eq!(
            json["results"][1]["audit_trace"]["warnings"][0]["code"],
            NOT_STARTED
        );
    }

    #[tokio::test]
    async fn test_custom_policy_is_applied() {
        let policy = PolicyConfig {
            minimum_days: Decimal::from(30),
            ..PolicyConfig::default()
        };
        let body = json!({
            "year": "2018",
            "employees": [{
                "name": "Young",
                "date_of_birth": "01.01.2000",
                "start_date": "01.01.2015"
            }]
        });

        let (_, json) = post(create_router(AppState::new(policy)), body.to_string()).await;

        assert_eq!(json["results"][0]["days"], "30");
    }
}
