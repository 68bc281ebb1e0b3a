use crate::libs::error::EntryError;
use crate::libs::sewadar::Sewadar;
use crate::libs::time_input::parse_canonical;
use chrono::{NaiveDate, NaiveTime};

/// One shift instance: a sewadar serving at a counter on a given date.
///
/// A record with no `end` is the only representation of "currently on
/// duty"; there is no separate status flag. Once created, the single
/// permitted mutation is setting `end`, exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub sewadar_id: String,
    /// Denormalized at creation so the log reads without a roster lookup.
    pub sewadar_name: String,
    /// Partition key for all queries.
    pub date: NaiveDate,
    pub counter: String,
    pub start: NaiveTime,
    pub end: Option<NaiveTime>,
}

impl AttendanceRecord {
    pub fn is_active(&self) -> bool {
        self.end.is_none()
    }
}

/// Returns the records for a date, preserving backing-store order.
///
/// Recomputed on every call; the record set is bounded by a single venue's
/// daily volunteer count, so no caching is layered on top.
pub fn filter_by_date(records: &[AttendanceRecord], date: NaiveDate) -> Vec<AttendanceRecord> {
    records.iter().filter(|r| r.date == date).cloned().collect()
}

/// Counts records still lacking an end time, the "currently on duty" tally.
pub fn count_active(records: &[AttendanceRecord]) -> usize {
    records.iter().filter(|r| r.is_active()).count()
}

/// Validated input for creating a record.
///
/// Checks the non-empty preconditions, resolves the sewadar against the
/// roster (denormalizing the name), and parses the canonical times, so a
/// `NewEntry` that exists is always storable. The date is taken from the
/// caller's active date context, never from the wall clock: back-dating an
/// entry is a supported workflow.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub sewadar_id: String,
    pub sewadar_name: String,
    pub date: NaiveDate,
    pub counter: String,
    pub start: NaiveTime,
    pub end: Option<NaiveTime>,
}

impl NewEntry {
    pub fn validate(
        roster: &[Sewadar],
        sewadar_id: &str,
        counter: &str,
        date: NaiveDate,
        start: &str,
        end: Option<&str>,
    ) -> Result<Self, EntryError> {
        if sewadar_id.trim().is_empty() {
            return Err(EntryError::MissingSewadar);
        }
        if counter.trim().is_empty() {
            return Err(EntryError::MissingCounter);
        }
        let sewadar = roster
            .iter()
            .find(|s| s.id == sewadar_id)
            .ok_or_else(|| EntryError::UnknownSewadar(sewadar_id.to_string()))?;
        Ok(NewEntry {
            sewadar_id: sewadar.id.clone(),
            sewadar_name: sewadar.name.clone(),
            date,
            counter: counter.trim().to_string(),
            start: parse_canonical(start)?,
            end: end.map(parse_canonical).transpose()?,
        })
    }
}
