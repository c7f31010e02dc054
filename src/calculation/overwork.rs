//! Overwork and remaining-time rules.
//!
//! Month-to-date overwork sums each non-holiday day's excess over the
//! standard workday and adds the overtime declared in the month totals.
//! Today's figures use the declared working hours when the source has them
//! and otherwise fall back to the raw clock-in/clock-out span.

use chrono::NaiveTime;

use super::time_codec::{minutes_since_midnight, parse_duration, parse_shift_window};
use crate::models::{AuditStep, AuditWarning, DailyRecord, MonthTotals};

/// Minutes worked beyond the standard workday, floored at zero.
pub fn excess_over_workday(worked: i64, standard_workday_minutes: i64) -> i64 {
    worked.saturating_sub(standard_workday_minutes).max(0)
}

/// Minutes still needed to reach the standard workday, floored at zero.
pub fn shortfall_to_workday(worked: i64, standard_workday_minutes: i64) -> i64 {
    standard_workday_minutes.saturating_sub(worked).max(0)
}

/// The result of accumulating overwork across the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOverworkResult {
    /// Sum of per-day excess over the standard workday.
    pub per_day_excess: i64,
    /// Overtime declared in the month totals.
    pub declared_overtime: i64,
    /// `per_day_excess + declared_overtime`, floored at zero.
    pub total: i64,
    /// The audit step recording the accumulation.
    pub audit_step: AuditStep,
}

/// Accumulates month-to-date overwork.
///
/// Every record without a holiday marker that declares working hours
/// contributes its excess over the standard workday. The overtime from the
/// month totals is then added on top; the two are treated as independent
/// signals.
///
/// # Example
///
/// ```
/// use workload_metrics::calculation::{calculate_month_overwork, STANDARD_WORKDAY_MINUTES};
/// use workload_metrics::models::{DailyRecord, MonthTotals};
///
/// let records = vec![
///     DailyRecord { working_hours: Some("09:30".to_string()), ..DailyRecord::new("12/01(Mon)") },
///     DailyRecord { working_hours: Some("07:00".to_string()), ..DailyRecord::new("12/02(Tue)") },
/// ];
/// let totals = MonthTotals::with_hours("16:30", "01:00");
///
/// let result = calculate_month_overwork(&records, &totals, STANDARD_WORKDAY_MINUTES, 1);
/// assert_eq!(result.per_day_excess, 90);
/// assert_eq!(result.total, 150);
/// ```
pub fn calculate_month_overwork(
    records: &[DailyRecord],
    totals: &MonthTotals,
    standard_workday_minutes: i64,
    step_number: u32,
) -> MonthOverworkResult {
    let contributing: Vec<(&str, i64)> = records
        .iter()
        .filter(|record| !record.is_holiday())
        .filter_map(|record| {
            record.working_hours().map(|hours| {
                let worked = parse_duration(Some(hours));
                (
                    record.date.as_str(),
                    excess_over_workday(worked, standard_workday_minutes),
                )
            })
        })
        .collect();

    let per_day_excess = contributing
        .iter()
        .map(|(_, excess)| *excess)
        .fold(0, i64::saturating_add);
    let declared_overtime = parse_duration(Some(totals.overtime.as_str()));
    let total = per_day_excess.saturating_add(declared_overtime).max(0);

    let days_over = contributing.iter().filter(|(_, excess)| *excess > 0).count();

    let audit_step = AuditStep {
        step_number,
        rule_id: "month_overwork".to_string(),
        rule_name: "Month-to-Date Overwork".to_string(),
        input: serde_json::json!({
            "rows_with_working_hours": contributing.len(),
            "declared_overtime": totals.overtime,
            "standard_workday_minutes": standard_workday_minutes
        }),
        output: serde_json::json!({
            "per_day_excess": per_day_excess,
            "declared_overtime": declared_overtime,
            "overwork_time": total
        }),
        reasoning: format!(
            "{} of {} non-holiday days exceeded {} minutes by {} minutes in total; \
             plus {} minutes declared overtime = {} minutes",
            days_over,
            contributing.len(),
            standard_workday_minutes,
            per_day_excess,
            declared_overtime,
            total
        ),
    };

    MonthOverworkResult {
        per_day_excess,
        declared_overtime,
        total,
        audit_step,
    }
}

/// How today's worked time was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkedToday {
    /// Working hours declared by the source for today.
    Declared {
        /// Declared minutes worked.
        worked: i64,
    },
    /// Raw span from clock-in to clock-out, or to now when still clocked in.
    Clocked {
        /// Clock-in, minutes since midnight.
        clock_in: i64,
        /// Clock-out, or the current time of day.
        until: i64,
        /// Whether `until` is a real clock-out.
        clocked_out: bool,
        /// `until - clock_in`. Negative if the clock-out precedes clock-in.
        worked: i64,
    },
    /// Nothing usable for today.
    Unavailable,
}

impl WorkedToday {
    /// Minutes worked today, if known.
    pub fn minutes(&self) -> Option<i64> {
        match self {
            WorkedToday::Declared { worked } | WorkedToday::Clocked { worked, .. } => Some(*worked),
            WorkedToday::Unavailable => None,
        }
    }

    fn method(&self) -> &'static str {
        match self {
            WorkedToday::Declared { .. } => "declared_working_hours",
            WorkedToday::Clocked { .. } => "clock_times",
            WorkedToday::Unavailable => "none",
        }
    }
}

/// Determines how long has been worked today.
///
/// Declared working hours win. Otherwise a clock-in is measured against the
/// clock-out, or against `now` while the clock-out is missing or pending. A
/// clock-in that does not parse to a positive time is unusable.
pub fn resolve_worked_today(today: Option<&DailyRecord>, now: NaiveTime) -> WorkedToday {
    let Some(record) = today else {
        return WorkedToday::Unavailable;
    };

    if let Some(hours) = record.working_hours() {
        return WorkedToday::Declared {
            worked: parse_duration(Some(hours)),
        };
    }

    let Some(clock_in) = record.clock_in().map(|text| parse_duration(Some(text))) else {
        return WorkedToday::Unavailable;
    };
    if clock_in <= 0 {
        return WorkedToday::Unavailable;
    }

    let clock_out = record.clock_out().map(|text| parse_duration(Some(text)));
    let until = clock_out.unwrap_or_else(|| minutes_since_midnight(now));

    WorkedToday::Clocked {
        clock_in,
        until,
        clocked_out: clock_out.is_some(),
        worked: until.saturating_sub(clock_in),
    }
}

/// Today's overwork and remaining time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayWorkResult {
    /// How the worked time was determined.
    pub worked: WorkedToday,
    /// Minutes beyond the standard workday.
    pub overwork_today: i64,
    /// Minutes still needed to reach the standard workday.
    pub hours_remaining_today: i64,
    /// The audit step recording the calculation.
    pub audit_step: AuditStep,
    /// Inputs that were degraded rather than used.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates today's overwork and remaining time.
///
/// Both are zero when nothing usable is recorded for today.
///
/// # Example
///
/// ```
/// use workload_metrics::calculation::{calculate_today_work, STANDARD_WORKDAY_MINUTES};
/// use workload_metrics::models::DailyRecord;
/// use chrono::NaiveTime;
///
/// let today = DailyRecord { clock_in: Some("09:00".to_string()), ..DailyRecord::new("12/19(Fri)") };
/// let now = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
///
/// let result = calculate_today_work(Some(&today), now, STANDARD_WORKDAY_MINUTES, 2);
/// assert_eq!(result.overwork_today, 0);
/// assert_eq!(result.hours_remaining_today, 180);
/// ```
pub fn calculate_today_work(
    today: Option<&DailyRecord>,
    now: NaiveTime,
    standard_workday_minutes: i64,
    step_number: u32,
) -> TodayWorkResult {
    let worked = resolve_worked_today(today, now);
    let mut warnings = Vec::new();

    let (overwork_today, hours_remaining_today) = match worked.minutes() {
        Some(minutes) => (
            excess_over_workday(minutes, standard_workday_minutes),
            shortfall_to_workday(minutes, standard_workday_minutes),
        ),
        None => (0, 0),
    };

    if let Some(record) = today {
        if record.working_hours().is_none()
            && record.clock_in().is_some()
            && worked == WorkedToday::Unavailable
        {
            warnings.push(AuditWarning::new(
                "UNUSABLE_CLOCK_IN",
                format!(
                    "Clock-in '{}' on {} is not a usable time; today's figures default to zero",
                    record.clock_in.as_deref().unwrap_or_default(),
                    record.date
                ),
                "medium",
            ));
        }
    }

    if let WorkedToday::Clocked { worked: minutes, .. } = worked {
        if minutes < 0 {
            warnings.push(AuditWarning::new(
                "NEGATIVE_WORKED_TIME",
                format!(
                    "Clock-out precedes clock-in by {} minutes",
                    minutes.unsigned_abs()
                ),
                "high",
            ));
        }
    }

    let reasoning = match worked {
        WorkedToday::Declared { worked } => format!(
            "Declared working hours of {} minutes against a {} minute workday",
            worked, standard_workday_minutes
        ),
        WorkedToday::Clocked {
            clock_in,
            until,
            clocked_out,
            worked,
        } => format!(
            "Clocked in at minute {} and {} at minute {}: {} minutes worked against a {} minute workday",
            clock_in,
            if clocked_out { "out" } else { "still working" },
            until,
            worked,
            standard_workday_minutes
        ),
        WorkedToday::Unavailable => {
            "No working hours or clock-in recorded for today; defaulting to zero".to_string()
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "today_work".to_string(),
        rule_name: "Today's Overwork and Remaining Time".to_string(),
        input: serde_json::json!({
            "date": today.map(|r| r.date.clone()),
            "working_hours": today.and_then(|r| r.working_hours.clone()),
            "clock_in": today.and_then(|r| r.clock_in.clone()),
            "clock_out": today.and_then(|r| r.clock_out.clone()),
            "shift_window": today
                .and_then(|r| parse_shift_window(r.shift_time.as_deref()))
                .map(|w| serde_json::json!({"start": w.start, "end": w.end})),
            "now": now.format("%H:%M").to_string()
        }),
        output: serde_json::json!({
            "method": worked.method(),
            "worked_minutes": worked.minutes(),
            "overwork_today": overwork_today,
            "hours_remaining_today": hours_remaining_today
        }),
        reasoning,
    };

    TodayWorkResult {
        worked,
        overwork_today,
        hours_remaining_today,
        audit_step,
        warnings,
    }
}
