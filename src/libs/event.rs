//! Clock event model: the persisted record of every clock-in, clock-out and
//! flexitime adjustment. Events are totally ordered by `(timestamp, id)`;
//! the id breaks ties between equal timestamps.

use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown event kind '{0}'")]
pub struct UnknownEventKind(pub String);

#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    In,
    Out,
    Flex,
}

impl EventKind {
    /// Stable code used in the database column and the backup artifact.
    pub fn as_code(&self) -> &'static str {
        match self {
            EventKind::In => "CLOCK_IN",
            EventKind::Out => "CLOCK_OUT",
            EventKind::Flex => "FLEX",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, UnknownEventKind> {
        match code {
            "CLOCK_IN" => Ok(EventKind::In),
            "CLOCK_OUT" => Ok(EventKind::Out),
            "FLEX" => Ok(EventKind::Flex),
            other => Err(UnknownEventKind(other.to_string())),
        }
    }

    /// Clocking events open or close work intervals; FLEX rows do not.
    pub fn is_clocking(&self) -> bool {
        matches!(self, EventKind::In | EventKind::Out)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// One persisted clock event. Constructed from a store read and never
/// mutated in place; edits write a fresh record back.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub timestamp: NaiveDateTime,
    pub kind: EventKind,
    /// Task reference, present only on clock-in.
    pub task_id: Option<i64>,
    /// Free text, present only on clock-in; automatic triggers record their
    /// source label here.
    pub note: Option<String>,
    /// Signed minutes, present only on FLEX events.
    pub flex_minutes: Option<i64>,
}

impl Event {
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// Row shape for table display of events.
#[derive(Debug, Clone)]
pub struct EventRow {
    pub id: i64,
    pub time: String,
    pub kind: String,
    pub task: String,
    pub detail: String,
}

pub trait FormatEvents {
    /// Resolves task ids against `task_names` and renders display rows.
    fn format(&self, task_names: &HashMap<i64, String>) -> Vec<EventRow>;
}

impl FormatEvents for [Event] {
    fn format(&self, task_names: &HashMap<i64, String>) -> Vec<EventRow> {
        self.iter()
            .map(|event| EventRow {
                id: event.id,
                time: event.timestamp.format("%Y-%m-%d %H:%M").to_string(),
                kind: event.kind.to_string(),
                task: event
                    .task_id
                    .map(|id| {
                        task_names
                            .get(&id)
                            .cloned()
                            .unwrap_or_else(|| format!("#{}", id))
                    })
                    .unwrap_or_default(),
                detail: match event.kind {
                    EventKind::Flex => {
                        format!("{:+} min", event.flex_minutes.unwrap_or(0))
                    }
                    _ => event.note.clone().unwrap_or_default(),
                },
            })
            .collect()
    }
}
