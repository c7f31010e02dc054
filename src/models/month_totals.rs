//! Month-to-date totals as declared by the source system.

use serde::{Deserialize, Deserializer, Serialize};

/// The zero duration used for any total the source does not provide.
pub const ZERO_DURATION: &str = "00:00";

fn zero_duration() -> String {
    ZERO_DURATION.to_string()
}

fn zero_if_blank<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(zero_duration))
}

/// Month-to-date aggregate durations from the table's total row.
///
/// Every field defaults to `"00:00"` when missing, `null` or blank.
///
/// # Example
///
/// ```
/// use workload_metrics::models::MonthTotals;
///
/// let totals: MonthTotals = serde_json::from_str(r#"{"working_hours": "127:38"}"#).unwrap();
/// assert_eq!(totals.working_hours, "127:38");
/// assert_eq!(totals.overtime, "00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// Declared working hours for the month so far.
    #[serde(default = "zero_duration", deserialize_with = "zero_if_blank")]
    pub working_hours: String,
    /// Declared off-shift hours.
    #[serde(default = "zero_duration", deserialize_with = "zero_if_blank")]
    pub off_shift_hours: String,
    /// Declared overtime.
    #[serde(default = "zero_duration", deserialize_with = "zero_if_blank")]
    pub overtime: String,
    /// Declared night-shift hours.
    #[serde(default = "zero_duration", deserialize_with = "zero_if_blank")]
    pub night_shift: String,
    /// Declared break time.
    #[serde(default = "zero_duration", deserialize_with = "zero_if_blank")]
    pub break_duration: String,
}

impl Default for MonthTotals {
    fn default() -> Self {
        Self {
            working_hours: zero_duration(),
            off_shift_hours: zero_duration(),
            overtime: zero_duration(),
            night_shift: zero_duration(),
            break_duration: zero_duration(),
        }
    }
}

impl MonthTotals {
    /// Totals with the given working hours and overtime, everything else zero.
    pub fn with_hours(working_hours: impl Into<String>, overtime: impl Into<String>) -> Self {
        Self {
            working_hours: working_hours.into(),
            overtime: overtime.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let totals = MonthTotals::default();
        assert_eq!(totals.working_hours, "00:00");
        assert_eq!(totals.off_shift_hours, "00:00");
        assert_eq!(totals.overtime, "00:00");
        assert_eq!(totals.night_shift, "00:00");
        assert_eq!(totals.break_duration, "00:00");
    }

    #[test]
    fn test_empty_object_deserializes_to_zero() {
        let totals: MonthTotals = serde_json::from_str("{}").unwrap();
        assert_eq!(totals, MonthTotals::default());
    }

    #[test]
    fn test_null_and_blank_fields_deserialize_to_zero() {
        let json = r#"{"working_hours": "127:38", "overtime": null, "night_shift": "  "}"#;
        let totals: MonthTotals = serde_json::from_str(json).unwrap();
        assert_eq!(totals.working_hours, "127:38");
        assert_eq!(totals.overtime, "00:00");
        assert_eq!(totals.night_shift, "00:00");
        assert_eq!(totals.break_duration, "00:00");
    }

    #[test]
    fn test_with_hours() {
        let totals = MonthTotals::with_hours("127:38", "02:15");
        assert_eq!(totals.working_hours, "127:38");
        assert_eq!(totals.overtime, "02:15");
        assert_eq!(totals.night_shift, "00:00");
    }
}
