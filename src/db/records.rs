use crate::db::db::Db;
use crate::libs::error::EntryError;
use crate::libs::record::{AttendanceRecord, NewEntry};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Row};

// AUTOINCREMENT keeps ids unique across the whole record set and never
// reused, even after external deletion.
const SCHEMA_RECORDS: &str = "CREATE TABLE IF NOT EXISTS records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date DATE NOT NULL,
    sewadar_id TEXT NOT NULL,
    sewadar_name TEXT NOT NULL,
    counter TEXT NOT NULL,
    start TEXT NOT NULL,
    end TEXT
);";
const INSERT_RECORD: &str = "INSERT INTO records (date, sewadar_id, sewadar_name, counter, start, end) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_END: &str = "UPDATE records SET end = ?1 WHERE id = ?2 AND end IS NULL";
const SELECT_RECORDS: &str = "SELECT id, date, sewadar_id, sewadar_name, counter, start, end FROM records";
const WHERE_DATE: &str = "WHERE date = ?1";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";

/// The attendance record store.
///
/// Append-only from the entry workflows' perspective: `insert` creates,
/// `mark_out` sets the end time exactly once, nothing here deletes.
pub struct Records {
    conn: Connection,
}

impl Records {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_RECORDS, [])?;
        Ok(Records { conn: db.conn })
    }

    /// Persists a validated entry and returns it with its assigned id.
    pub fn insert(&mut self, entry: &NewEntry) -> Result<AttendanceRecord> {
        self.conn.execute(
            INSERT_RECORD,
            params![
                entry.date,
                entry.sewadar_id,
                entry.sewadar_name,
                entry.counter,
                entry.start.format("%H:%M").to_string(),
                entry.end.map(|t| t.format("%H:%M").to_string()),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(AttendanceRecord {
            id,
            sewadar_id: entry.sewadar_id.clone(),
            sewadar_name: entry.sewadar_name.clone(),
            date: entry.date,
            counter: entry.counter.clone(),
            start: entry.start,
            end: entry.end,
        })
    }

    /// Sets the end time on an active record.
    ///
    /// The guarded update only matches rows whose end is still NULL, which
    /// makes the mutate-once invariant a store-level guarantee: a closed
    /// record reports `RecordAlreadyClosed`, an unknown id `RecordNotFound`.
    pub fn mark_out(&mut self, id: i64, end: NaiveTime) -> Result<AttendanceRecord> {
        let affected = self.conn.execute(UPDATE_END, params![end.format("%H:%M").to_string(), id])?;
        if affected == 0 {
            return match self.fetch_by_id(id)? {
                Some(_) => Err(EntryError::RecordAlreadyClosed(id).into()),
                None => Err(EntryError::RecordNotFound(id).into()),
            };
        }
        self.fetch_by_id(id)?.ok_or_else(|| EntryError::RecordNotFound(id).into())
    }

    pub fn fetch_by_id(&mut self, id: i64) -> Result<Option<AttendanceRecord>> {
        let record = self
            .conn
            .query_row(&format!("{} {}", SELECT_RECORDS, WHERE_ID), params![id], map_record)
            .optional()?;
        Ok(record)
    }

    /// Returns a date's records in insertion order.
    pub fn fetch_date(&mut self, date: NaiveDate) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_RECORDS, WHERE_DATE, ORDER_BY_ID))?;
        let record_iter = stmt.query_map(params![date], map_record)?;
        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    /// Returns the full record set in insertion order.
    pub fn fetch_all(&mut self) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_RECORDS, ORDER_BY_ID))?;
        let record_iter = stmt.query_map([], map_record)?;
        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }
}

fn map_record(row: &Row<'_>) -> rusqlite::Result<AttendanceRecord> {
    Ok(AttendanceRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        sewadar_id: row.get(2)?,
        sewadar_name: row.get(3)?,
        counter: row.get(4)?,
        start: NaiveTime::parse_from_str(&row.get::<_, String>(5)?, "%H:%M").unwrap(),
        end: row
            .get::<_, Option<String>>(6)?
            .map(|s| NaiveTime::parse_from_str(&s, "%H:%M").unwrap()),
    })
}
