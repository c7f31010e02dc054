//! Working-day policy for a calendar month.
//!
//! A working day is a Monday to Friday that the attendance records do not mark
//! as a holiday. Records are matched to calendar days by their `MM/DD` date
//! prefix; records whose label does not start with a valid pattern are never
//! matched.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::DailyRecord;

/// Whether the given day of the week is a working day.
///
/// ```
/// use workload_metrics::calculation::is_working_day;
/// use chrono::Weekday;
///
/// assert!(is_working_day(Weekday::Fri));
/// assert!(!is_working_day(Weekday::Sat));
/// assert!(!is_working_day(Weekday::Sun));
/// ```
pub fn is_working_day(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Builds the zero-padded `MM/DD` pattern for a 1-based month and day.
///
/// ```
/// use workload_metrics::calculation::date_pattern;
///
/// assert_eq!(date_pattern(3, 7), "03/07");
/// assert_eq!(date_pattern(12, 19), "12/19");
/// ```
pub fn date_pattern(month: u32, day: u32) -> String {
    format!("{month:02}/{day:02}")
}

/// Returns the holiday marker recorded for a day, if any.
///
/// Looks up the first record whose date starts with the day's `MM/DD`
/// pattern and returns its marker when present and non-blank.
pub fn holiday_for(records: &[DailyRecord], month: u32, day: u32) -> Option<&str> {
    let pattern = date_pattern(month, day);
    records
        .iter()
        .find(|record| record.matches_date(&pattern))
        .and_then(DailyRecord::holiday_marker)
}

/// The number of days in a month, or `0` for an invalid year/month.
///
/// ```
/// use workload_metrics::calculation::last_day_of_month;
///
/// assert_eq!(last_day_of_month(2024, 2), 29);
/// assert_eq!(last_day_of_month(2026, 2), 28);
/// assert_eq!(last_day_of_month(2025, 12), 31);
/// ```
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month.saturating_add(1))
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .filter(|last| last.month() == month)
        .map_or(0, |last| last.day())
}

/// Counts working days in the closed range `from_day..=through_day`.
///
/// Weekends and days with a holiday marker are skipped. An empty range
/// counts zero, and days that do not exist in the month are ignored.
///
/// The same routine serves both the remaining-days figure and the whole-month
/// total so that the two always agree.
///
/// ```
/// use workload_metrics::calculation::count_working_days;
///
/// // February 2026 has 20 weekdays.
/// assert_eq!(count_working_days(&[], 2026, 2, 1, 28), 20);
/// ```
pub fn count_working_days(
    records: &[DailyRecord],
    year: i32,
    month: u32,
    from_day: u32,
    through_day: u32,
) -> u32 {
    let through_day = through_day.min(last_day_of_month(year, month));
    (from_day..=through_day)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .filter(|date| is_working_day(date.weekday()))
        .filter(|date| holiday_for(records, month, date.day()).is_none())
        .count() as u32
}
