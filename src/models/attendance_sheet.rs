//! The attendance sheet and the seam to whatever produces it.

use serde::{Deserialize, Serialize};

use super::{DailyRecord, MonthTotals};

/// A month of attendance: the daily rows plus the declared totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    /// Daily rows. At most one row per date is expected.
    #[serde(default)]
    pub rows: Vec<DailyRecord>,
    /// Month-to-date totals.
    #[serde(default)]
    pub totals: MonthTotals,
}

impl AttendanceSheet {
    /// Creates a sheet from rows and totals.
    pub fn new(rows: Vec<DailyRecord>, totals: MonthTotals) -> Self {
        Self { rows, totals }
    }

    /// Whether the sheet has no daily rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Anything that can produce an attendance sheet.
///
/// Table discovery and scraping live behind this trait so the engine can be
/// driven entirely by constructed sheets. `None` means no sheet could be found.
pub trait AttendanceSource {
    /// Extracts the current attendance sheet, if one is available.
    fn extract(&self) -> Option<AttendanceSheet>;
}

impl AttendanceSource for AttendanceSheet {
    fn extract(&self) -> Option<AttendanceSheet> {
        Some(self.clone())
    }
}

impl AttendanceSource for Option<AttendanceSheet> {
    fn extract(&self) -> Option<AttendanceSheet> {
        self.clone()
    }
}
