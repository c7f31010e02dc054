//! Request types for the workload metrics API.
//!
//! This module defines the JSON request structure for the `/metrics` endpoint.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceSheet, DailyRecord, MonthTotals};

/// Request body for the `/metrics` endpoint.
///
/// `now` is the moment the metrics are evaluated at. When omitted, the server
/// substitutes its local time before calling the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRequest {
    /// Daily attendance rows for the month.
    pub rows: Vec<DailyRecord>,
    /// Month-to-date totals; each missing value counts as `00:00`.
    #[serde(default)]
    pub totals: MonthTotals,
    /// Evaluation moment, e.g. `"2025-12-19T14:00:00"`.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

impl MetricsRequest {
    /// Splits the request into the attendance sheet and the optional moment.
    pub fn into_parts(self) -> (AttendanceSheet, Option<NaiveDateTime>) {
        (AttendanceSheet::new(self.rows, self.totals), self.now)
    }
}
