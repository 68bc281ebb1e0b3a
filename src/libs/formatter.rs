//! Display formatting for times, dates, and attendance rows.
//!
//! Every surface that shows a clock time to the user (the daily log table,
//! the report header, exports, share text) goes through this module so the
//! formatting stays consistent.
//!
//! ## Format Specifications
//!
//! - Clock times render in localized 12-hour form, "h:mm AM/PM" with no
//!   leading zero on the hour: "9:00 AM", "1:05 PM", "12:00 AM".
//! - A missing time (an entry still on duty) renders as an empty string;
//!   table and export surfaces substitute their own "ACTIVE" marker.
//! - Report dates render as "7 August 2026".
//!
//! ## Examples
//!
//! ```rust
//! use sewalog::libs::formatter::format_clock;
//! use chrono::NaiveTime;
//!
//! let t = NaiveTime::from_hms_opt(13, 5, 0);
//! assert_eq!(format_clock(t), "1:05 PM");
//! assert_eq!(format_clock(None), "");
//! ```

use crate::libs::record::AttendanceRecord;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Shown in place of an out-time for entries still on duty.
pub const ACTIVE_MARKER: &str = "ACTIVE";

/// An attendance row with every value pre-formatted for display.
///
/// Table rendering and the CSV/Excel exporters consume these directly, so
/// all formatting decisions are made once, here, rather than at each
/// surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedRecord {
    /// The record's store identifier, used to address mark-out.
    pub id: i64,
    /// The sewadar's display name.
    pub sewadar: String,
    /// The counter the sewa was performed at.
    pub counter: String,
    /// Check-in time in 12-hour display form (e.g. "9:00 AM").
    pub time_in: String,
    /// Check-out time in 12-hour display form, or [`ACTIVE_MARKER`].
    pub time_out: String,
}

/// Formats a clock time in 12-hour display form; `None` renders empty.
pub fn format_clock(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => String::new(),
    }
}

/// Formats a date the way the report header shows it, e.g. "7 August 2026".
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Short date form used in the daily overview, e.g. "Aug 7".
pub fn format_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Formatting a collection of attendance records into display rows.
pub trait RecordGroup {
    fn format(&self) -> Vec<FormattedRecord>;
}

impl RecordGroup for Vec<AttendanceRecord> {
    fn format(&self) -> Vec<FormattedRecord> {
        self.iter()
            .map(|r| FormattedRecord {
                id: r.id,
                sewadar: r.sewadar_name.clone(),
                counter: r.counter.clone(),
                time_in: format_clock(Some(r.start)),
                time_out: r.end.map_or_else(|| ACTIVE_MARKER.to_string(), |t| format_clock(Some(t))),
            })
            .collect()
    }
}
