//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_attendance, calculate_salary};
use crate::error::EngineError;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts an attendance snapshot with an optional daily wage and returns
/// the computed salary result. This is the explicit recompute-on-demand
/// entry point: callers post the whole snapshot whenever either input
/// changes.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let response = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Well-formed JSON with the wrong shape: missing fields,
                    // unknown status literals, bad date keys.
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiErrorResponse {
                        status: StatusCode::BAD_REQUEST,
                        error: ApiError::validation_error(body_text),
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiErrorResponse {
                        status: StatusCode::BAD_REQUEST,
                        error: ApiError::malformed_json(format!("Invalid JSON syntax: {}", err)),
                    }
                }
                JsonRejection::MissingJsonContentType(_) => ApiErrorResponse {
                    status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    error: ApiError::new(
                        "UNSUPPORTED_MEDIA_TYPE",
                        "Content-Type must be application/json",
                    ),
                },
                _ => ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::malformed_json("Failed to parse request body"),
                },
            };
            return (
                response.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response.error),
            )
                .into_response();
        }
    };

    // Resolve the wage: request value, else configured default
    let daily_wage = request
        .daily_wage
        .unwrap_or_else(|| state.config().default_daily_wage());

    if daily_wage < Decimal::ZERO {
        warn!(
            correlation_id = %correlation_id,
            daily_wage = %daily_wage,
            "Negative daily wage rejected"
        );
        let api_error: ApiErrorResponse = EngineError::NegativeWage { wage: daily_wage }.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Perform the calculation
    let start_time = Instant::now();
    let summary = aggregate_attendance(&request.attendance);
    let result = calculate_salary(
        daily_wage,
        summary.total_days,
        summary.absent_days,
        summary.double_days,
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        entries = request.attendance.len(),
        total_days = result.total_days,
        absent_days = result.absent_days,
        double_days = result.double_days,
        gross_salary = %result.gross_salary,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}
