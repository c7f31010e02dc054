//! Monthly quota estimation.
//!
//! The quota is the number of working days in the month multiplied by the
//! standard workday. Remaining days are counted with the same calendar
//! routine over the days after today, so the two figures stay consistent.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::calendar::{count_working_days, last_day_of_month};
use crate::models::{AuditStep, DailyRecord};

/// The standard workday in minutes (8 hours).
pub const STANDARD_WORKDAY_MINUTES: i64 = 480;

/// Estimated monthly quota in minutes.
///
/// ```
/// use workload_metrics::calculation::{monthly_quota, STANDARD_WORKDAY_MINUTES};
///
/// assert_eq!(monthly_quota(20, STANDARD_WORKDAY_MINUTES), 9600);
/// ```
pub fn monthly_quota(total_working_days: u32, standard_workday_minutes: i64) -> i64 {
    i64::from(total_working_days).saturating_mul(standard_workday_minutes)
}

/// Working days in the whole month containing `today`.
pub fn total_working_days(records: &[DailyRecord], today: NaiveDate) -> u32 {
    let last_day = last_day_of_month(today.year(), today.month());
    count_working_days(records, today.year(), today.month(), 1, last_day)
}

/// Working days strictly after `today` through the end of its month.
///
/// ```
/// use workload_metrics::calculation::working_days_remaining;
/// use chrono::NaiveDate;
///
/// // Friday 2025-12-19: 22nd-26th and 29th-31st remain.
/// let today = NaiveDate::from_ymd_opt(2025, 12, 19).unwrap();
/// assert_eq!(working_days_remaining(&[], today), 8);
/// ```
pub fn working_days_remaining(records: &[DailyRecord], today: NaiveDate) -> u32 {
    let last_day = last_day_of_month(today.year(), today.month());
    count_working_days(records, today.year(), today.month(), today.day() + 1, last_day)
}

/// Quota figures for the month containing a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaEstimate {
    /// Working days in the whole month.
    pub total_working_days: u32,
    /// Working days after today.
    pub working_days_remaining: u32,
    /// Total working days multiplied by the standard workday, in minutes.
    pub monthly_quota: i64,
    /// The audit step recording this estimate.
    pub audit_step: AuditStep,
}

/// Estimates the monthly quota and the working days remaining.
pub fn estimate_quota(
    records: &[DailyRecord],
    today: NaiveDate,
    standard_workday_minutes: i64,
    step_number: u32,
) -> QuotaEstimate {
    let total_working_days = total_working_days(records, today);
    let working_days_remaining = working_days_remaining(records, today);
    let monthly_quota = monthly_quota(total_working_days, standard_workday_minutes);
    let holidays = records.iter().filter(|r| r.is_holiday()).count();

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_quota".to_string(),
        rule_name: "Monthly Quota Estimate".to_string(),
        input: serde_json::json!({
            "today": today.to_string(),
            "last_day": last_day_of_month(today.year(), today.month()),
            "holiday_rows": holidays,
            "standard_workday_minutes": standard_workday_minutes
        }),
        output: serde_json::json!({
            "total_working_days": total_working_days,
            "working_days_remaining": working_days_remaining,
            "monthly_quota": monthly_quota
        }),
        reasoning: format!(
            "{} working days x {} minutes = {} minute quota; {} working days remain after {}",
            total_working_days, standard_workday_minutes, monthly_quota, working_days_remaining, today
        ),
    };

    QuotaEstimate {
        total_working_days,
        working_days_remaining,
        monthly_quota,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn holiday(date: &str) -> DailyRecord {
        DailyRecord {
            holiday_type: Some("Public Holiday".to_string()),
            ..DailyRecord::new(date)
        }
    }

    #[test]
    fn test_quota_is_days_times_workday() {
        assert_eq!(monthly_quota(0, STANDARD_WORKDAY_MINUTES), 0);
        assert_eq!(monthly_quota(23, STANDARD_WORKDAY_MINUTES), 11040);
        assert_eq!(monthly_quota(20, 450), 9000);
        assert_eq!(monthly_quota(23, i64::MAX), i64::MAX);
    }

    #[test]
    fn test_remaining_excludes_today() {
        // Monday 2025-12-01 is itself a working day, 22 remain after it.
        assert_eq!(working_days_remaining(&[], date(2025, 12, 1)), 22);
    }

    #[test]
    fn test_remaining_on_last_day_is_zero() {
        assert_eq!(working_days_remaining(&[], date(2025, 12, 31)), 0);
    }

    #[test]
    fn test_remaining_skips_holidays() {
        let records = vec![holiday("12/25(Thu)"), holiday("12/26(Fri)")];
        assert_eq!(working_days_remaining(&records, date(2025, 12, 19)), 6);
    }

    #[test]
    fn test_holiday_before_today_only_affects_total() {
        let records = vec![holiday("12/03(Wed)")];
        let today = date(2025, 12, 19);
        assert_eq!(working_days_remaining(&records, today), 8);
        assert_eq!(total_working_days(&records, today), 22);
    }

    #[test]
    fn test_estimate_quota_for_february() {
        let estimate = estimate_quota(&[], date(2026, 2, 16), STANDARD_WORKDAY_MINUTES, 4);
        assert_eq!(estimate.total_working_days, 20);
        assert_eq!(estimate.monthly_quota, 9600);
        // 17th-20th and 23rd-27th.
        assert_eq!(estimate.working_days_remaining, 9);
        assert_eq!(estimate.audit_step.step_number, 4);
        assert_eq!(estimate.audit_step.rule_id, "monthly_quota");
        assert_eq!(estimate.audit_step.output["monthly_quota"], 9600);
    }

    #[test]
    fn test_quota_matches_total_working_days_exactly() {
        for month in 1..=12 {
            let today = date(2026, month, 1);
            let estimate = estimate_quota(&[], today, STANDARD_WORKDAY_MINUTES, 1);
            assert_eq!(
                estimate.monthly_quota,
                i64::from(total_working_days(&[], today)) * 480
            );
        }
    }
}
