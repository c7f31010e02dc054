//! HTTP request handlers for the workload metrics API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{Local, NaiveDateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::evaluate_source;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};

use super::request::MetricsRequest;
use super::response::{ApiError, ApiErrorResponse, MetricsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", post(metrics_handler))
        .with_state(state)
}

/// Handler for POST /metrics endpoint.
///
/// Accepts an attendance sheet and returns the derived workload metrics.
async fn metrics_handler(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing metrics request");

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
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let rows_count = request.rows.len();
    let start_time = Instant::now();
    match perform_calculation(request, state.config(), correlation_id) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                rows_count,
                evaluated_at = %response.evaluated_at,
                overwork_time = response.metrics.overwork_time,
                warnings = response.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Metrics calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Metrics calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the engine for one request.
///
/// The request's `now` is used when given; otherwise the server's local time
/// is read here, once, and passed to the engine explicitly.
fn perform_calculation(
    request: MetricsRequest,
    config: &ConfigLoader,
    calculation_id: Uuid,
) -> EngineResult<MetricsResponse> {
    let (sheet, now) = request.into_parts();
    let evaluated_at: NaiveDateTime = now.unwrap_or_else(|| Local::now().naive_local());

    let report = evaluate_source(&sheet, evaluated_at, config.standard_workday_minutes())
        .ok_or_else(|| EngineError::NoAttendanceRows {
            message: "the request contained no daily rows".to_string(),
        })?;

    Ok(MetricsResponse {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        evaluated_at,
        summary: report.metrics.summary(),
        metrics: report.metrics,
        audit_trace: report.audit_trace,
    })
}
