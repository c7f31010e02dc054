//! HTTP API module for the workload metrics engine.
//!
//! This module provides the REST endpoint that turns a posted attendance
//! sheet into workload metrics.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::MetricsRequest;
pub use response::{ApiError, ApiErrorResponse, MetricsResponse};
pub use state::AppState;
