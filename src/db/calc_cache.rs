//! Day calculation cache: one row per settled day.
//!
//! A row exists only for days whose (worked, target) pair has been computed
//! since the last invalidation; absence means "recompute". Worked minutes
//! stored here already contain the day's FLEX adjustments, so summing
//! `worked - target` over any span reproduces the balance exactly.
//! Invalidation is forward-looking: editing an event on day `d` deletes
//! every row with date >= `d`, since later days can depend on earlier carry
//! state but never the other way around.

use super::db::Db;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use std::error::Error;

const SCHEMA_CALC_CACHE: &str = "CREATE TABLE IF NOT EXISTS calc_cache (
    date DATE NOT NULL PRIMARY KEY,
    worked_minutes INTEGER NOT NULL,
    target_minutes INTEGER NOT NULL
);";
const SELECT_ENTRY: &str = "SELECT date, worked_minutes, target_minutes FROM calc_cache WHERE date = ?1";
const PUT_ENTRY: &str = "INSERT OR REPLACE INTO calc_cache (date, worked_minutes, target_minutes) VALUES (?1, ?2, ?3)";
const DELETE_FROM: &str = "DELETE FROM calc_cache WHERE date >= ?1";
const DELETE_ALL: &str = "DELETE FROM calc_cache";
const COUNT_ENTRIES: &str = "SELECT COUNT(*) FROM calc_cache";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcCacheEntry {
    pub day: NaiveDate,
    /// Worked minutes with FLEX folded in.
    pub worked_minutes: i64,
    pub target_minutes: i64,
}

impl CalcCacheEntry {
    pub fn delta_minutes(&self) -> i64 {
        self.worked_minutes - self.target_minutes
    }
}

pub struct CalcCache {
    pub conn: Connection,
}

impl CalcCache {
    pub fn new() -> Result<CalcCache, Box<dyn Error>> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_CALC_CACHE, [])?;

        Ok(CalcCache { conn: db.conn })
    }

    pub fn get(&mut self, day: NaiveDate) -> Result<Option<CalcCacheEntry>, Box<dyn Error>> {
        let entry = self.conn.query_row(SELECT_ENTRY, params![day], row_to_entry).optional()?;
        Ok(entry)
    }

    pub fn put(&mut self, entry: &CalcCacheEntry) -> Result<(), Box<dyn Error>> {
        self.conn
            .execute(PUT_ENTRY, params![entry.day, entry.worked_minutes, entry.target_minutes])?;
        Ok(())
    }

    /// Deletes every entry with date >= `day`.
    pub fn delete_from(&mut self, day: NaiveDate) -> Result<usize, Box<dyn Error>> {
        let deleted = self.conn.execute(DELETE_FROM, params![day])?;
        Ok(deleted)
    }

    pub fn clear(&mut self) -> Result<(), Box<dyn Error>> {
        self.conn.execute(DELETE_ALL, [])?;
        Ok(())
    }

    pub fn len(&mut self) -> Result<i64, Box<dyn Error>> {
        let count = self.conn.query_row(COUNT_ENTRIES, [], |row| row.get(0))?;
        Ok(count)
    }
}

fn row_to_entry(row: &Row) -> Result<CalcCacheEntry> {
    Ok(CalcCacheEntry {
        day: row.get(0)?,
        worked_minutes: row.get(1)?,
        target_minutes: row.get(2)?,
    })
}
