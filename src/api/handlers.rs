//! HTTP request handlers for the Revision Engine API.
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
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::ClaimInput;

use super::request::ClaimRequest;
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
/// Accepts a claim request and returns the full per-period record set with
/// totals and warnings.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClaimRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing claim request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    if request.filing_date < request.enlistment_date {
        warn!(
            correlation_id = %correlation_id,
            filing_date = %request.filing_date,
            enlistment_date = %request.enlistment_date,
            "Filing date precedes enlistment date"
        );
        let api_error: ApiErrorResponse = EngineError::InvalidClaim {
            field: "filing_date".to_string(),
            message: "must be on or after enlistment_date".to_string(),
        }
        .into();
        return api_error.into_response();
    }

    let input: ClaimInput = request.into();

    // Perform the calculation; it degrades instead of failing, so the only
    // error paths on this route are the request-shape ones above.
    let start_time = Instant::now();
    let result = state.engine().calculate(&input);
    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        periods = result.periods.len(),
        warnings = result.warnings.len(),
        grand_total = %result.totals.grand_total,
        duration_us = duration.as_micros(),
        "Claim computation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}
