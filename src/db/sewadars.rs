use crate::db::db::Db;
use crate::libs::sewadar::Sewadar;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_SEWADARS: &str = "CREATE TABLE IF NOT EXISTS sewadars (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL
);";
const INSERT_SEWADAR: &str = "INSERT INTO sewadars (id, name) VALUES (?1, ?2)";
const SELECT_BY_ID: &str = "SELECT id, name FROM sewadars WHERE id = ?1";
const SELECT_ALL: &str = "SELECT id, name FROM sewadars ORDER BY name";

/// The roster store. Reference data for the attendance workflows, managed
/// only through the roster commands.
pub struct Sewadars {
    conn: Connection,
}

impl Sewadars {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_SEWADARS, [])?;
        Ok(Sewadars { conn: db.conn })
    }

    /// Adds a sewadar; returns false without changes if the id is taken.
    pub fn insert(&mut self, sewadar: &Sewadar) -> Result<bool> {
        if self.fetch(&sewadar.id)?.is_some() {
            return Ok(false);
        }
        self.conn.execute(INSERT_SEWADAR, params![sewadar.id, sewadar.name])?;
        Ok(true)
    }

    pub fn fetch(&mut self, id: &str) -> Result<Option<Sewadar>> {
        let sewadar = self
            .conn
            .query_row(SELECT_BY_ID, params![id], |row| {
                Ok(Sewadar {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;
        Ok(sewadar)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Sewadar>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let sewadar_iter = stmt.query_map([], |row| {
            Ok(Sewadar {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        let mut sewadars = Vec::new();
        for sewadar in sewadar_iter {
            sewadars.push(sewadar?);
        }
        Ok(sewadars)
    }
}
