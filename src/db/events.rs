//! Event store: every clock-in, clock-out and FLEX adjustment as one row.
//!
//! Timestamps are stored as local wall time with whole-second precision so
//! the ISO text representation sorts chronologically; all range queries
//! rely on that. Query order is always `(timestamp, id)`, the id breaking
//! ties between equal timestamps.

use super::db::Db;
use crate::libs::event::{Event, EventKind};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use std::error::Error;

const SCHEMA_EVENTS: &str = "CREATE TABLE IF NOT EXISTS events (
    id INTEGER NOT NULL PRIMARY KEY,
    timestamp TIMESTAMP NOT NULL,
    kind TEXT NOT NULL,
    task_id INTEGER,
    note TEXT,
    flex_minutes INTEGER
);";
const EVENT_FIELDS: &str = "id, timestamp, kind, task_id, note, flex_minutes";
const INSERT_EVENT: &str = "INSERT INTO events (timestamp, kind, task_id, note, flex_minutes) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_EVENT: &str = "UPDATE events SET timestamp = ?1, kind = ?2, task_id = ?3, note = ?4, flex_minutes = ?5 WHERE id = ?6";
const DELETE_EVENT: &str = "DELETE FROM events WHERE id = ?1";
const DELETE_ALL_EVENTS: &str = "DELETE FROM events";

/// Fields a caller provides when recording an event; the id is assigned by
/// the store and returned in the stored [`Event`].
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub timestamp: NaiveDateTime,
    pub kind: EventKind,
    pub task_id: Option<i64>,
    pub note: Option<String>,
    pub flex_minutes: Option<i64>,
}

impl NewEvent {
    pub fn clock_in(timestamp: NaiveDateTime, task_id: Option<i64>, note: Option<String>) -> Self {
        NewEvent {
            timestamp,
            kind: EventKind::In,
            task_id,
            note,
            flex_minutes: None,
        }
    }

    pub fn clock_out(timestamp: NaiveDateTime) -> Self {
        NewEvent {
            timestamp,
            kind: EventKind::Out,
            task_id: None,
            note: None,
            flex_minutes: None,
        }
    }

    pub fn flex(timestamp: NaiveDateTime, minutes: i64) -> Self {
        NewEvent {
            timestamp,
            kind: EventKind::Flex,
            task_id: None,
            note: None,
            flex_minutes: Some(minutes),
        }
    }
}

pub struct Events {
    pub conn: Connection,
}

impl Events {
    pub fn new() -> Result<Events, Box<dyn Error>> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_EVENTS, [])?;

        Ok(Events { conn: db.conn })
    }

    /// Stores a new event and returns the persisted record with its id.
    pub fn insert(&mut self, new: &NewEvent) -> Result<Event, Box<dyn Error>> {
        self.conn.execute(
            INSERT_EVENT,
            params![new.timestamp, new.kind.as_code(), new.task_id, new.note, new.flex_minutes],
        )?;
        Ok(Event {
            id: self.conn.last_insert_rowid(),
            timestamp: new.timestamp,
            kind: new.kind,
            task_id: new.task_id,
            note: new.note.clone(),
            flex_minutes: new.flex_minutes,
        })
    }

    /// Overwrites every stored field of the event with `event.id`.
    pub fn update(&mut self, event: &Event) -> Result<(), Box<dyn Error>> {
        self.conn.execute(
            UPDATE_EVENT,
            params![event.timestamp, event.kind.as_code(), event.task_id, event.note, event.flex_minutes, event.id],
        )?;
        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> Result<(), Box<dyn Error>> {
        self.conn.execute(DELETE_EVENT, params![id])?;
        Ok(())
    }

    pub fn delete_all(&mut self) -> Result<(), Box<dyn Error>> {
        self.conn.execute(DELETE_ALL_EVENTS, [])?;
        Ok(())
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Event>, Box<dyn Error>> {
        let sql = format!("SELECT {} FROM events WHERE id = ?1", EVENT_FIELDS);
        let event = self.conn.query_row(&sql, params![id], row_to_event).optional()?;
        Ok(event)
    }

    /// All events of one calendar day, ordered.
    pub fn events_on_day(&mut self, day: NaiveDate) -> Result<Vec<Event>, Box<dyn Error>> {
        let sql = format!("SELECT {} FROM events WHERE date(timestamp) = ?1 ORDER BY timestamp, id", EVENT_FIELDS);
        self.collect(&sql, params![day])
    }

    /// Events with `start <= timestamp <= end`, ordered.
    pub fn events_between(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Event>, Box<dyn Error>> {
        let sql = format!(
            "SELECT {} FROM events WHERE timestamp >= ?1 AND timestamp <= ?2 ORDER BY timestamp, id",
            EVENT_FIELDS
        );
        self.collect(&sql, params![start, end])
    }

    /// Every stored event, ordered.
    pub fn all(&mut self) -> Result<Vec<Event>, Box<dyn Error>> {
        let sql = format!("SELECT {} FROM events ORDER BY timestamp, id", EVENT_FIELDS);
        self.collect(&sql, [])
    }

    /// Latest event strictly before `timestamp`, any kind.
    pub fn last_event_before(&mut self, timestamp: NaiveDateTime) -> Result<Option<Event>, Box<dyn Error>> {
        let sql = format!(
            "SELECT {} FROM events WHERE timestamp < ?1 ORDER BY timestamp DESC, id DESC LIMIT 1",
            EVENT_FIELDS
        );
        let event = self.conn.query_row(&sql, params![timestamp], row_to_event).optional()?;
        Ok(event)
    }

    /// Latest clock-in or clock-out strictly before `timestamp`; FLEX rows
    /// never carry interval state and are skipped.
    pub fn last_clocking_before(&mut self, timestamp: NaiveDateTime) -> Result<Option<Event>, Box<dyn Error>> {
        let sql = format!(
            "SELECT {} FROM events WHERE timestamp < ?1 AND kind != 'FLEX' ORDER BY timestamp DESC, id DESC LIMIT 1",
            EVENT_FIELDS
        );
        let event = self.conn.query_row(&sql, params![timestamp], row_to_event).optional()?;
        Ok(event)
    }

    pub fn latest_event(&mut self) -> Result<Option<Event>, Box<dyn Error>> {
        let sql = format!("SELECT {} FROM events ORDER BY timestamp DESC, id DESC LIMIT 1", EVENT_FIELDS);
        let event = self.conn.query_row(&sql, [], row_to_event).optional()?;
        Ok(event)
    }

    pub fn latest_clocking(&mut self) -> Result<Option<Event>, Box<dyn Error>> {
        let sql = format!(
            "SELECT {} FROM events WHERE kind != 'FLEX' ORDER BY timestamp DESC, id DESC LIMIT 1",
            EVENT_FIELDS
        );
        let event = self.conn.query_row(&sql, [], row_to_event).optional()?;
        Ok(event)
    }

    pub fn first_event(&mut self) -> Result<Option<Event>, Box<dyn Error>> {
        let sql = format!("SELECT {} FROM events ORDER BY timestamp, id LIMIT 1", EVENT_FIELDS);
        let event = self.conn.query_row(&sql, [], row_to_event).optional()?;
        Ok(event)
    }

    /// Number of events booked on a task; deletion guard for tasks.
    pub fn count_for_task(&mut self, task_id: i64) -> Result<i64, Box<dyn Error>> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM events WHERE task_id = ?1", params![task_id], |row| row.get(0))?;
        Ok(count)
    }

    fn collect(&mut self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Event>, Box<dyn Error>> {
        let mut stmt = self.conn.prepare(sql)?;
        let event_iter = stmt.query_map(params, row_to_event)?;

        let mut events = vec![];
        for event in event_iter {
            events.push(event?);
        }

        Ok(events)
    }
}

/// Maps a row to an [`Event`]; an unknown kind code surfaces as a column
/// conversion failure instead of a crash.
fn row_to_event(row: &Row) -> Result<Event> {
    let code: String = row.get(2)?;
    let kind = EventKind::from_code(&code).map_err(|err| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(err)))?;
    Ok(Event {
        id: row.get(0)?,
        timestamp: row.get(1)?,
        kind,
        task_id: row.get(3)?,
        note: row.get(4)?,
        flex_minutes: row.get(5)?,
    })
}
