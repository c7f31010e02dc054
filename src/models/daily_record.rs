//! Daily attendance record model.
//!
//! A [`DailyRecord`] is one row of the monthly attendance table as produced by
//! the source system. All fields other than `date` are optional strings; a
//! blank or whitespace-only value is treated exactly like a missing one.

use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::is_pending;

/// One calendar day of attendance.
///
/// Duration fields (`working_hours`, `overtime`, ...) are authoritative when
/// present: the source system derives them from clock times and breaks.
///
/// # Example
///
/// ```
/// use workload_metrics::models::DailyRecord;
///
/// let record = DailyRecord {
///     working_hours: Some("09:30".to_string()),
///     ..DailyRecord::new("12/19(Fri)")
/// };
/// assert!(record.matches_date("12/19"));
/// assert!(!record.is_holiday());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// The day label, e.g. `"12/19(Fri)"`. Matched by `MM/DD` prefix.
    pub date: String,
    /// Holiday marker. Any non-blank value excludes the day from working-day
    /// counts and overwork accrual.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub holiday_type: Option<String>,
    /// Scheduled shift window, e.g. `"11:00～16:00"`.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub shift_time: Option<String>,
    /// Clock-in time of day (`HH:MM`).
    #[serde(default, deserialize_with = "blank_as_none")]
    pub clock_in: Option<String>,
    /// Clock-out time of day (`HH:MM`), or the pending marker.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub clock_out: Option<String>,
    /// Declared working hours for the day.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub working_hours: Option<String>,
    /// Declared hours outside the nominal shift window.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub off_shift_hours: Option<String>,
    /// Declared overtime.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub overtime: Option<String>,
    /// Declared night-shift hours.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub night_shift: Option<String>,
    /// Declared break duration.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub break_duration: Option<String>,
}

impl DailyRecord {
    /// Creates a record for the given day label with every other field absent.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    /// Returns a copy with blank optional fields collapsed to `None`.
    ///
    /// Deserialized records are already normalized; this is for records
    /// built by hand.
    pub fn normalized(self) -> Self {
        Self {
            date: self.date,
            holiday_type: self.holiday_type.and_then(non_blank),
            shift_time: self.shift_time.and_then(non_blank),
            clock_in: self.clock_in.and_then(non_blank),
            clock_out: self.clock_out.and_then(non_blank),
            working_hours: self.working_hours.and_then(non_blank),
            off_shift_hours: self.off_shift_hours.and_then(non_blank),
            overtime: self.overtime.and_then(non_blank),
            night_shift: self.night_shift.and_then(non_blank),
            break_duration: self.break_duration.and_then(non_blank),
        }
    }

    /// Whether the record's date label starts with the given `MM/DD` pattern.
    pub fn matches_date(&self, pattern: &str) -> bool {
        self.date.starts_with(pattern)
    }

    /// The holiday marker, if present and non-blank.
    pub fn holiday_marker(&self) -> Option<&str> {
        present(&self.holiday_type)
    }

    /// Whether this day carries a holiday marker.
    pub fn is_holiday(&self) -> bool {
        self.holiday_marker().is_some()
    }

    /// The declared working hours, if present and non-blank.
    pub fn working_hours(&self) -> Option<&str> {
        present(&self.working_hours)
    }

    /// The clock-in time, if present and non-blank.
    pub fn clock_in(&self) -> Option<&str> {
        present(&self.clock_in)
    }

    /// The clock-out time, unless it is missing, blank or still pending.
    pub fn clock_out(&self) -> Option<&str> {
        present(&self.clock_out).filter(|value| !is_pending(value))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(non_blank))
}
