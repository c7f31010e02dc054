//! The metrics engine.
//!
//! Combines the daily records, the month totals and an explicit current
//! moment into a [`WorkMetrics`] value. The engine never reads the system
//! clock, so calling it twice with the same inputs yields the same result.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

use super::calendar::date_pattern;
use super::overwork::{calculate_month_overwork, calculate_today_work};
use super::quota::{STANDARD_WORKDAY_MINUTES, estimate_quota};
use super::time_codec::{format_duration, parse_duration};
use crate::models::{
    AttendanceSource, AuditStep, AuditTrace, AuditWarning, DailyRecord, MetricsReport,
    MonthTotals, WorkMetrics,
};

/// Finds the record for `today` by its `MM/DD` date prefix.
///
/// ```
/// use workload_metrics::calculation::find_today_record;
/// use workload_metrics::models::DailyRecord;
/// use chrono::NaiveDate;
///
/// let records = vec![DailyRecord::new("12/18(Thu)"), DailyRecord::new("12/19(Fri)")];
/// let today = NaiveDate::from_ymd_opt(2025, 12, 19).unwrap();
/// assert_eq!(find_today_record(&records, today).map(|r| r.date.as_str()), Some("12/19(Fri)"));
/// ```
pub fn find_today_record(records: &[DailyRecord], today: NaiveDate) -> Option<&DailyRecord> {
    let pattern = date_pattern(today.month(), today.day());
    records.iter().find(|record| record.matches_date(&pattern))
}

/// Calculates the workload metrics with the standard 8-hour workday.
///
/// # Example
///
/// ```
/// use workload_metrics::calculation::calculate_metrics;
/// use workload_metrics::models::{DailyRecord, MonthTotals};
/// use chrono::NaiveDate;
///
/// let records = vec![DailyRecord {
///     working_hours: Some("09:30".to_string()),
///     clock_in: Some("09:00".to_string()),
///     ..DailyRecord::new("02/16(Mon)")
/// }];
/// let totals = MonthTotals::with_hours("127:38", "00:00");
/// let now = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap().and_hms_opt(19, 0, 0).unwrap();
///
/// let metrics = calculate_metrics(&records, &totals, now);
/// assert_eq!(metrics.overwork_today, 90);
/// assert_eq!(metrics.hours_remaining_today, 0);
/// assert_eq!(metrics.monthly_quota, 9600);
/// assert_eq!(metrics.hours_remaining_for_quota, 1942);
/// assert_eq!(metrics.start_time_today.as_deref(), Some("09:00"));
/// ```
pub fn calculate_metrics(
    records: &[DailyRecord],
    totals: &MonthTotals,
    now: NaiveDateTime,
) -> WorkMetrics {
    calculate_metrics_with_policy(records, totals, now, STANDARD_WORKDAY_MINUTES)
}

/// Calculates the workload metrics with a configured standard workday.
pub fn calculate_metrics_with_policy(
    records: &[DailyRecord],
    totals: &MonthTotals,
    now: NaiveDateTime,
    standard_workday_minutes: i64,
) -> WorkMetrics {
    calculate_report(records, totals, now, standard_workday_minutes).metrics
}

/// Calculates the workload metrics together with an audit trace.
pub fn calculate_report(
    records: &[DailyRecord],
    totals: &MonthTotals,
    now: NaiveDateTime,
    standard_workday_minutes: i64,
) -> MetricsReport {
    let today = now.date();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    // Today's record
    let today_record = find_today_record(records, today);
    let pattern = date_pattern(today.month(), today.day());
    steps.push(AuditStep {
        step_number,
        rule_id: "today_record_lookup".to_string(),
        rule_name: "Today Record Lookup".to_string(),
        input: serde_json::json!({
            "pattern": pattern,
            "rows": records.len()
        }),
        output: serde_json::json!({
            "found": today_record.is_some(),
            "date": today_record.map(|r| r.date.clone())
        }),
        reasoning: match today_record {
            Some(record) => format!("Row '{}' matches {}", record.date, pattern),
            None => format!("No row starts with {}", pattern),
        },
    });
    step_number += 1;
    if today_record.is_none() {
        warnings.push(AuditWarning::new(
            "NO_TODAY_RECORD",
            format!("No attendance row for {pattern}; today's figures default to zero"),
            "low",
        ));
    }

    // Month-to-date overwork
    let month_overwork =
        calculate_month_overwork(records, totals, standard_workday_minutes, step_number);
    steps.push(month_overwork.audit_step);
    step_number += 1;

    // Today's overwork and remaining time
    let today_work =
        calculate_today_work(today_record, now.time(), standard_workday_minutes, step_number);
    steps.push(today_work.audit_step);
    warnings.extend(today_work.warnings);
    step_number += 1;

    // Quota and remaining days
    let quota = estimate_quota(records, today, standard_workday_minutes, step_number);
    steps.push(quota.audit_step);
    step_number += 1;

    // Quota progress: declared working hours only
    let current_month_total = parse_duration(Some(totals.working_hours.as_str())).max(0);
    let hours_remaining_for_quota = quota
        .monthly_quota
        .saturating_sub(current_month_total)
        .max(0);
    steps.push(AuditStep {
        step_number,
        rule_id: "quota_progress".to_string(),
        rule_name: "Monthly Quota Progress".to_string(),
        input: serde_json::json!({
            "working_hours_total": totals.working_hours,
            "off_shift_hours_total": totals.off_shift_hours,
            "monthly_quota": quota.monthly_quota
        }),
        output: serde_json::json!({
            "current_month_total": current_month_total,
            "hours_remaining_for_quota": hours_remaining_for_quota
        }),
        reasoning: format!(
            "{} of {} worked; {} remaining (off-shift hours do not count toward the quota)",
            format_duration(current_month_total),
            format_duration(quota.monthly_quota),
            format_duration(hours_remaining_for_quota)
        ),
    });

    let metrics = WorkMetrics {
        overwork_time: month_overwork.total,
        overwork_today: today_work.overwork_today,
        hours_remaining_today: today_work.hours_remaining_today,
        start_time_today: today_record
            .and_then(DailyRecord::clock_in)
            .map(str::to_string),
        working_days_remaining: quota.working_days_remaining,
        hours_remaining_for_quota,
        monthly_quota: quota.monthly_quota,
        current_month_total,
    };

    debug!(
        today = %today,
        rows = records.len(),
        overwork_time = %format_duration(metrics.overwork_time),
        overwork_today = %format_duration(metrics.overwork_today),
        hours_remaining_today = %format_duration(metrics.hours_remaining_today),
        working_days_remaining = metrics.working_days_remaining,
        monthly_quota = %format_duration(metrics.monthly_quota),
        hours_remaining_for_quota = %format_duration(metrics.hours_remaining_for_quota),
        warnings = warnings.len(),
        "Calculated workload metrics"
    );

    MetricsReport {
        metrics,
        audit_trace: AuditTrace { steps, warnings },
    }
}

/// Extracts a sheet from the source and calculates a report for it.
///
/// Returns `None` when the source has no sheet or the sheet has no rows;
/// there is nothing worth presenting in either case.
pub fn evaluate_source<S: AttendanceSource + ?Sized>(
    source: &S,
    now: NaiveDateTime,
    standard_workday_minutes: i64,
) -> Option<MetricsReport> {
    let Some(sheet) = source.extract() else {
        debug!("Attendance source produced no sheet");
        return None;
    };
    if sheet.is_empty() {
        debug!("Attendance sheet has no rows");
        return None;
    }

    Some(calculate_report(
        &sheet.rows,
        &sheet.totals,
        now,
        standard_workday_minutes,
    ))
}
