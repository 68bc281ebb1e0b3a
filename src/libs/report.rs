//! Daily report assembly over the attendance store.

use crate::libs::formatter::{format_clock, format_report_date};
use crate::libs::record::{count_active, filter_by_date, AttendanceRecord};
use chrono::NaiveDate;

/// The derived view of one date's attendance: the date's entries in store
/// order plus the currently-on-duty tally.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub entries: Vec<AttendanceRecord>,
    pub active: usize,
}

impl DailyReport {
    /// Builds the report for a date from the full record set.
    ///
    /// Entries keep backing-store order; display surfaces that want
    /// most-recent-first reverse on their side.
    pub fn build(records: &[AttendanceRecord], date: NaiveDate) -> Self {
        let entries = filter_by_date(records, date);
        let active = count_active(&entries);
        DailyReport { date, entries, active }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the plain-text summary used by the share command.
    ///
    /// One line per entry; an entry still on duty reads "on duty" in place
    /// of its out-time.
    pub fn share_text(&self) -> String {
        let mut text = format!("Jalpan Sewa Record - {}\n", format_report_date(self.date));
        if self.entries.is_empty() {
            text.push_str("\nNo sewa records for this date.\n");
            return text;
        }
        text.push_str(&format!("Entries: {}  On duty: {}\n\n", self.entries.len(), self.active));
        for record in &self.entries {
            let out = match record.end {
                Some(t) => format_clock(Some(t)),
                None => "on duty".to_string(),
            };
            text.push_str(&format!(
                "- {} ({}): {} - {}\n",
                record.sewadar_name,
                record.counter,
                format_clock(Some(record.start)),
                out
            ));
        }
        text
    }
}
