//! Conversion between `HH:MM` strings and minute counts.
//!
//! Parsing is total: anything that is not a well-formed `HH:MM` value is read
//! as zero minutes. Callers therefore cannot distinguish "missing" from a
//! genuine `00:00`; the metrics rules are written with that in mind.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// What the source system shows in place of a time that has not happened yet,
/// typically a clock-out later today.
pub const PENDING_MARKER: &str = "(Available)";

/// Separator between the start and end of a shift window (full-width tilde).
pub const SHIFT_WINDOW_SEPARATOR: char = '～';

/// Whether the value is the pending marker.
pub fn is_pending(text: &str) -> bool {
    text.trim() == PENDING_MARKER
}

/// Parses an `HH:MM` duration or time of day into minutes.
///
/// Hours are not limited to 23, so month totals such as `"127:38"` parse as
/// expected. Returns `0` for a missing or blank value, the pending marker,
/// anything without exactly two colon-separated parts, and parts that are not
/// integers.
///
/// # Examples
///
/// ```
/// use workload_metrics::calculation::parse_duration;
///
/// assert_eq!(parse_duration(Some("09:30")), 570);
/// assert_eq!(parse_duration(Some("9:5")), 545);
/// assert_eq!(parse_duration(Some("127:38")), 7658);
/// assert_eq!(parse_duration(Some("abc:12")), 0);
/// assert_eq!(parse_duration(Some("(Available)")), 0);
/// assert_eq!(parse_duration(None), 0);
/// ```
pub fn parse_duration(text: Option<&str>) -> i64 {
    let Some(text) = text else {
        return 0;
    };
    if text.trim().is_empty() || is_pending(text) {
        return 0;
    }

    let mut parts = text.split(':');
    let (Some(hours), Some(minutes), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0;
    };

    let (Ok(hours), Ok(minutes)) = (hours.trim().parse::<i64>(), minutes.trim().parse::<i64>())
    else {
        return 0;
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .unwrap_or(0)
}

/// Formats a minute count as zero-padded `HH:MM`.
///
/// Hours are not wrapped at 24. Negative input is not meaningful; every
/// caller in this crate clamps at zero before formatting.
///
/// # Examples
///
/// ```
/// use workload_metrics::calculation::format_duration;
///
/// assert_eq!(format_duration(0), "00:00");
/// assert_eq!(format_duration(545), "09:05");
/// assert_eq!(format_duration(7658), "127:38");
/// ```
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    format!("{hours:02}:{mins:02}")
}

/// Minutes elapsed since midnight for a time of day.
pub fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// A scheduled shift window in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Shift start.
    pub start: i64,
    /// Shift end.
    pub end: i64,
}

/// Parses a shift window such as `"11:00～16:00"`.
///
/// Returns `None` when the separator is missing or either side parses to
/// zero.
///
/// ```
/// use workload_metrics::calculation::{parse_shift_window, ShiftWindow};
///
/// assert_eq!(
///     parse_shift_window(Some("11:00～16:00")),
///     Some(ShiftWindow { start: 660, end: 960 })
/// );
/// assert_eq!(parse_shift_window(Some("11:00-16:00")), None);
/// ```
pub fn parse_shift_window(text: Option<&str>) -> Option<ShiftWindow> {
    let (start, end) = text?.split_once(SHIFT_WINDOW_SEPARATOR)?;
    let start = parse_duration(Some(start.trim()));
    let end = parse_duration(Some(end.trim()));

    if start == 0 || end == 0 {
        return None;
    }

    Some(ShiftWindow { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_blank_and_missing_are_zero() {
        assert_eq!(parse_duration(None), 0);
        assert_eq!(parse_duration(Some("")), 0);
        assert_eq!(parse_duration(Some("   ")), 0);
    }

    #[test]
    fn test_parse_pending_marker_is_zero() {
        assert_eq!(parse_duration(Some(PENDING_MARKER)), 0);
        assert!(is_pending(" (Available) "));
        assert!(!is_pending("17:00"));
    }

    #[test]
    fn test_parse_rejects_wrong_part_count() {
        assert_eq!(parse_duration(Some("0930")), 0);
        assert_eq!(parse_duration(Some("09:30:00")), 0);
        assert_eq!(parse_duration(Some(":")), 0);
    }

    #[test]
    fn test_parse_rejects_non_numeric_parts() {
        assert_eq!(parse_duration(Some("abc:12")), 0);
        assert_eq!(parse_duration(Some("09:xx")), 0);
        assert_eq!(parse_duration(Some("09:")), 0);
    }

    #[test]
    fn test_parse_unpadded_parts() {
        assert_eq!(parse_duration(Some("9:5")), 545);
        assert_eq!(parse_duration(Some(" 8 : 15 ")), 495);
    }

    #[test]
    fn test_parse_overflow_is_zero() {
        assert_eq!(parse_duration(Some("9223372036854775807:00")), 0);
    }

    #[test]
    fn test_format_pads_both_parts() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(5), "00:05");
        assert_eq!(format_duration(60), "01:00");
        assert_eq!(format_duration(1439), "23:59");
        assert_eq!(format_duration(1440), "24:00");
    }

    #[test]
    fn test_minutes_since_midnight() {
        let time = NaiveTime::from_hms_opt(14, 0, 59).unwrap();
        assert_eq!(minutes_since_midnight(time), 840);
        assert_eq!(minutes_since_midnight(NaiveTime::MIN), 0);
    }

    #[test]
    fn test_shift_window_requires_both_sides() {
        assert_eq!(parse_shift_window(None), None);
        assert_eq!(parse_shift_window(Some("～16:00")), None);
        assert_eq!(parse_shift_window(Some("00:00～16:00")), None);
        assert_eq!(
            parse_shift_window(Some(" 09:00 ～ 18:00 ")),
            Some(ShiftWindow { start: 540, end: 1080 })
        );
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_a_day(minutes in 0i64..1440) {
            prop_assert_eq!(parse_duration(Some(&format_duration(minutes))), minutes);
        }

        #[test]
        fn prop_round_trip_month_totals(minutes in 0i64..1_000_000) {
            prop_assert_eq!(parse_duration(Some(&format_duration(minutes))), minutes);
        }

        #[test]
        fn prop_parse_padded_clock_strings(h in 0u32..100, m in 0u32..60) {
            let text = format!("{h:02}:{m:02}");
            prop_assert_eq!(parse_duration(Some(&text)), i64::from(h) * 60 + i64::from(m));
        }
    }
}
