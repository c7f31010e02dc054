//! Core data models for the workload metrics engine.
//!
//! This module contains the attendance inputs, the metrics output and the
//! audit trace types shared across the crate.

mod attendance_sheet;
mod audit;
mod daily_record;
mod month_totals;
mod work_metrics;

pub use attendance_sheet::{AttendanceSheet, AttendanceSource};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use daily_record::DailyRecord;
pub use month_totals::{MonthTotals, ZERO_DURATION};
pub use work_metrics::{MetricsReport, MetricsSummary, NOT_STARTED, WorkMetrics};
