//! Calculation logic for the workload metrics engine.
//!
//! This module contains the `HH:MM` codec, the working-day calendar policy,
//! the monthly quota model, the overwork rules and the engine that combines
//! them into [`WorkMetrics`](crate::models::WorkMetrics).

mod calendar;
mod metrics;
mod overwork;
mod quota;
mod time_codec;

pub use calendar::{
    count_working_days, date_pattern, holiday_for, is_working_day, last_day_of_month,
};
pub use metrics::{
    calculate_metrics, calculate_metrics_with_policy, calculate_report, evaluate_source,
    find_today_record,
};
pub use overwork::{
    MonthOverworkResult, TodayWorkResult, WorkedToday, calculate_month_overwork,
    calculate_today_work, excess_over_workday, resolve_worked_today, shortfall_to_workday,
};
pub use quota::{
    QuotaEstimate, STANDARD_WORKDAY_MINUTES, estimate_quota, monthly_quota, total_working_days,
    working_days_remaining,
};
pub use time_codec::{
    PENDING_MARKER, SHIFT_WINDOW_SEPARATOR, ShiftWindow, format_duration, is_pending,
    minutes_since_midnight, parse_duration, parse_shift_window,
};
