//! 12-hour time entry handling.
//!
//! Check-in and check-out times are entered as three separate fields (hour,
//! minute, AM/PM), matching the paper registers used at the counters.
//! This module converts that form state into the canonical 24-hour "HH:MM"
//! representation used for storage and comparison, and applies the
//! field-level corrections the entry flow relies on.
//!
//! Two layers of correction apply to typed input:
//!
//! - While typing, only digits are kept and the field is truncated to two
//!   characters ([`sanitize_digits`]). Nothing else is corrected mid-edit.
//! - On commit, the field is clamped into its valid range and re-padded
//!   ([`clamp_field`]). Unparsable input is a no-op: the field keeps its
//!   last value.
//!
//! Conversion to canonical form never fails. An unparsable hour degrades to
//! 0 so that a half-typed form still produces a well-formed string; range
//! enforcement is the clamping step's job, not the converter's.

use crate::libs::error::EntryError;
use chrono::{Local, NaiveTime, Timelike};

/// AM/PM half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// Which field of the time form is being committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockField {
    Hour,
    Minute,
}

/// Raw 12-hour form state: hour and minute exactly as typed, plus the
/// meridiem selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInput {
    pub hour: String,
    pub minute: String,
    pub period: Meridiem,
}

impl TimeInput {
    pub fn new(hour: &str, minute: &str, period: Meridiem) -> Self {
        TimeInput {
            hour: hour.to_string(),
            minute: minute.to_string(),
            period,
        }
    }

    /// Converts the form state into the canonical 24-hour "HH:MM" string.
    ///
    /// Applies the standard 12-hour clock rule: 12 AM becomes 00, 12 PM
    /// stays 12, every other PM hour gains 12. An unparsable hour is
    /// treated as 0; the minute is used as given and zero-padded to two
    /// characters.
    pub fn to_canonical(&self) -> String {
        let mut hour: u32 = self.hour.trim().parse().unwrap_or(0);
        if self.period == Meridiem::Pm && hour < 12 {
            hour += 12;
        }
        if self.period == Meridiem::Am && hour == 12 {
            hour = 0;
        }
        format!("{:02}:{:0>2}", hour, self.minute)
    }

    /// Parses the form state into a [`NaiveTime`], rejecting canonical
    /// strings that fall outside the valid clock range.
    pub fn to_time(&self) -> Result<NaiveTime, EntryError> {
        parse_canonical(&self.to_canonical())
    }

    /// Builds form state from a wall-clock time, with the minute rounded
    /// down to the nearest multiple of five. Used to pre-fill the mark-out
    /// form with a sensible "now".
    pub fn from_time(time: NaiveTime) -> Self {
        let mut hour = time.hour();
        let period = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
        if hour > 12 {
            hour -= 12;
        }
        if hour == 0 {
            hour = 12;
        }
        let minute = time.minute() / 5 * 5;
        TimeInput {
            hour: format!("{:02}", hour),
            minute: format!("{:02}", minute),
            period,
        }
    }

    /// [`TimeInput::from_time`] for the current local wall clock.
    pub fn now() -> Self {
        Self::from_time(Local::now().time())
    }
}

/// Keystroke-level sanitizing: strips non-digit characters and truncates to
/// two, leaving typing otherwise unrestricted until the field is committed.
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(2).collect()
}

/// Corrects a committed field value.
///
/// Unparsable input is returned unchanged so the field keeps its last value.
/// Hours clamp to the 12-hour display range [1, 12], minutes to [0, 59];
/// the result is re-padded to two digits. Idempotent.
pub fn clamp_field(field: ClockField, raw: &str) -> String {
    let value: i64 = match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => return raw.to_string(),
    };
    let corrected = match field {
        ClockField::Hour => value.clamp(1, 12),
        ClockField::Minute => value.clamp(0, 59),
    };
    format!("{:02}", corrected)
}

/// Parses a canonical "HH:MM" string with hour in [00, 23] and minute in
/// [00, 59]. Malformed strings are a validation failure, never stored.
pub fn parse_canonical(value: &str) -> Result<NaiveTime, EntryError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EntryError::InvalidTime(value.to_string()))
}
