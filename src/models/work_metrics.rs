//! Engine output models.
//!
//! [`WorkMetrics`] is the raw result of a calculation, in minutes.
//! [`MetricsSummary`] is the same data formatted for display, and
//! [`MetricsReport`] pairs the metrics with the audit trace that produced them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditTrace;
use crate::calculation::format_duration;

/// Label shown for the start time when there is no clock-in today.
pub const NOT_STARTED: &str = "Not started";

/// Derived workload metrics for one invocation of the engine.
///
/// All duration fields are non-negative minute counts.
///
/// # Example
///
/// ```
/// use workload_metrics::models::WorkMetrics;
///
/// let metrics = WorkMetrics {
///     overwork_time: 95,
///     overwork_today: 30,
///     hours_remaining_today: 0,
///     start_time_today: Some("09:00".to_string()),
///     working_days_remaining: 7,
///     hours_remaining_for_quota: 1942,
///     monthly_quota: 9600,
///     current_month_total: 7658,
/// };
/// assert_eq!(metrics.summary().hours_remaining_for_quota, "32:22");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkMetrics {
    /// Month-to-date overwork: per-day excess plus declared overtime.
    pub overwork_time: i64,
    /// Overwork for today.
    pub overwork_today: i64,
    /// Time still needed today to reach the standard workday.
    pub hours_remaining_today: i64,
    /// Today's clock-in, passed through verbatim.
    pub start_time_today: Option<String>,
    /// Working days left in the month, not counting today.
    pub working_days_remaining: u32,
    /// Time still needed to reach the monthly quota.
    pub hours_remaining_for_quota: i64,
    /// Estimated monthly quota.
    pub monthly_quota: i64,
    /// Declared working hours for the month so far.
    pub current_month_total: i64,
}

impl WorkMetrics {
    /// Progress toward the monthly quota as a percentage in `[0, 100]`,
    /// rounded to two decimal places. Zero when the quota is zero.
    ///
    /// ```
    /// use workload_metrics::models::WorkMetrics;
    /// use rust_decimal::Decimal;
    ///
    /// let metrics = WorkMetrics {
    ///     monthly_quota: 9600,
    ///     current_month_total: 4800,
    ///     ..WorkMetrics::default()
    /// };
    /// assert_eq!(metrics.quota_progress_percent(), Decimal::new(50, 0));
    /// ```
    pub fn quota_progress_percent(&self) -> Decimal {
        if self.monthly_quota <= 0 {
            return Decimal::ZERO;
        }

        let ratio = Decimal::from(self.current_month_total) * Decimal::ONE_HUNDRED
            / Decimal::from(self.monthly_quota);

        ratio.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED).round_dp(2)
    }

    /// Formats every duration as `HH:MM` for display.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            overwork_today: format_duration(self.overwork_today),
            overwork_time: format_duration(self.overwork_time),
            hours_remaining_today: format_duration(self.hours_remaining_today),
            start_time_today: self
                .start_time_today
                .clone()
                .unwrap_or_else(|| NOT_STARTED.to_string()),
            working_days_remaining: self.working_days_remaining,
            hours_remaining_for_quota: format_duration(self.hours_remaining_for_quota),
            current_month_total: format_duration(self.current_month_total),
            monthly_quota: format_duration(self.monthly_quota),
            quota_progress_percent: self.quota_progress_percent(),
        }
    }
}

/// Display-ready view of [`WorkMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Overwork today, `HH:MM`.
    pub overwork_today: String,
    /// Month-to-date overwork, `HH:MM`.
    pub overwork_time: String,
    /// Remaining time today, `HH:MM`.
    pub hours_remaining_today: String,
    /// Clock-in today, or `"Not started"`.
    pub start_time_today: String,
    /// Working days left after today.
    pub working_days_remaining: u32,
    /// Remaining time for the quota, `HH:MM`.
    pub hours_remaining_for_quota: String,
    /// Month-to-date working hours, `HH:MM`.
    pub current_month_total: String,
    /// Monthly quota, `HH:MM`.
    pub monthly_quota: String,
    /// Quota progress percentage.
    pub quota_progress_percent: Decimal,
}

/// Metrics together with the audit trace of how they were derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// The computed metrics.
    pub metrics: WorkMetrics,
    /// Every derivation step, in order.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> WorkMetrics {
        WorkMetrics {
            overwork_time: 95,
            overwork_today: 30,
            hours_remaining_today: 0,
            start_time_today: Some("09:00".to_string()),
            working_days_remaining: 7,
            hours_remaining_for_quota: 1942,
            monthly_quota: 9600,
            current_month_total: 7658,
        }
    }

    #[test]
    fn test_progress_is_rounded_to_two_places() {
        // 7658 / 9600 = 79.7708...%
        assert_eq!(
            sample_metrics().quota_progress_percent(),
            Decimal::new(7977, 2)
        );
    }

    #[test]
    fn test_progress_is_capped_at_one_hundred() {
        let metrics = WorkMetrics {
            monthly_quota: 480,
            current_month_total: 600,
            ..WorkMetrics::default()
        };
        assert_eq!(metrics.quota_progress_percent(), Decimal::ONE_HUNDRED);
    }

    #[test]
    fn test_progress_with_zero_quota_is_zero() {
        let metrics = WorkMetrics {
            monthly_quota: 0,
            current_month_total: 600,
            ..WorkMetrics::default()
        };
        assert_eq!(metrics.quota_progress_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_summary_formats_durations() {
        let summary = sample_metrics().summary();
        assert_eq!(summary.overwork_today, "00:30");
        assert_eq!(summary.overwork_time, "01:35");
        assert_eq!(summary.hours_remaining_today, "00:00");
        assert_eq!(summary.start_time_today, "09:00");
        assert_eq!(summary.working_days_remaining, 7);
        assert_eq!(summary.current_month_total, "127:38");
        assert_eq!(summary.monthly_quota, "160:00");
    }

    #[test]
    fn test_summary_without_clock_in() {
        let summary = WorkMetrics::default().summary();
        assert_eq!(summary.start_time_today, NOT_STARTED);
        assert_eq!(summary.quota_progress_percent, Decimal::ZERO);
    }

    #[test]
    fn test_metrics_serialization() {
        let metrics = sample_metrics();
        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains("\"overwork_time\":95"));
        assert!(json.contains("\"start_time_today\":\"09:00\""));

        let deserialized: WorkMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, metrics);
    }
}
