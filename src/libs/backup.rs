//! Delimited backup artifact: full export and restore of tasks and events.
//!
//! The file is semicolon-delimited text with two sections, each opened by
//! its header line: tasks (`taskId;name;active;ordering;isDefault`) and
//! events (`type;time;task;text`). FLEX events carry their signed minutes
//! in the text column, clock-ins their note. Timestamps are written as
//! local wall time with the UTC offset attached; reading also accepts the
//! legacy offset-less variants (space or `T` separator, with or without a
//! fractional part), whose wall time is taken verbatim as home-zone time.

use crate::db::calc_cache::CalcCache;
use crate::db::events::{Events, NewEvent};
use crate::db::tasks::Tasks;
use crate::libs::event::{Event, EventKind};
use crate::libs::task::{Task, TaskFilter};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::error::Error;
use std::path::Path;
use thiserror::Error as ThisError;

const TASK_HEADER: [&str; 5] = ["taskId", "name", "active", "ordering", "isDefault"];
const EVENT_HEADER: [&str; 4] = ["type", "time", "task", "text"];

const WRITE_ZONED: &str = "%Y-%m-%d %H:%M:%S%.f %z";
const WRITE_NAIVE: &str = "%Y-%m-%d %H:%M:%S%.f";
// `%.f` also matches an absent fraction and the legacy 4-digit one.
const READ_ZONED: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f %z", "%Y-%m-%dT%H:%M:%S%.f%z"];
const READ_NAIVE: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, ThisError)]
pub enum BackupError {
    #[error("unrecognized backup line starting with '{0}'")]
    UnknownRecord(String),
    #[error("unparseable backup timestamp '{0}'")]
    Timestamp(String),
    #[error("invalid value '{1}' in backup field '{0}'")]
    Field(&'static str, String),
}

/// Row counts of a completed restore.
#[derive(Debug, Clone, Copy)]
pub struct ImportSummary {
    pub tasks: usize,
    pub events: usize,
}

pub struct Backup {
    events: Events,
    tasks: Tasks,
    cache: CalcCache,
}

impl Backup {
    pub fn new(events: Events, tasks: Tasks, cache: CalcCache) -> Self {
        Backup { events, tasks, cache }
    }

    /// Writes every task and event to `path`.
    pub fn export_to(&mut self, path: &Path) -> Result<(), Box<dyn Error>> {
        let tasks = self.tasks.fetch(TaskFilter::All)?;
        let events = self.events.all()?;

        let mut wtr = WriterBuilder::new().delimiter(b';').flexible(true).from_path(path)?;

        wtr.write_record(TASK_HEADER)?;
        for task in &tasks {
            wtr.write_record([
                task.id.map(|id| id.to_string()).unwrap_or_default(),
                task.name.clone(),
                flag(task.active).to_string(),
                task.ordering.to_string(),
                flag(task.is_default).to_string(),
            ])?;
        }

        wtr.write_record(EVENT_HEADER)?;
        for event in &events {
            wtr.write_record([
                event.kind.as_code().to_string(),
                format_timestamp(event.timestamp),
                event.task_id.map(|id| id.to_string()).unwrap_or_default(),
                event_text(event),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Restores tasks and events from `path`, replacing everything stored.
    ///
    /// The whole file is parsed before anything is deleted, so a malformed
    /// file leaves the store untouched. Task ids are restored verbatim,
    /// keeping the task references inside events valid; events are
    /// re-inserted in file order. The calculation cache is cleared.
    pub fn import_from(&mut self, path: &Path) -> Result<ImportSummary, Box<dyn Error>> {
        let mut rdr = ReaderBuilder::new().delimiter(b';').flexible(true).has_headers(false).from_path(path)?;
        let mut tasks: Vec<Task> = vec![];
        let mut events: Vec<NewEvent> = vec![];

        for record in rdr.records() {
            let record = record?;
            if is_blank(&record) || is_header(&record) {
                continue;
            }
            let first = field(&record, 0);
            if EventKind::from_code(first).is_ok() {
                events.push(parse_event_record(&record)?);
            } else if first.parse::<i64>().is_ok() {
                tasks.push(parse_task_record(&record)?);
            } else {
                return Err(BackupError::UnknownRecord(first.to_string()).into());
            }
        }

        self.tasks.delete_all()?;
        self.events.delete_all()?;
        self.cache.clear()?;

        for task in &tasks {
            self.tasks.insert_with_id(task)?;
        }
        for event in &events {
            self.events.insert(event)?;
        }

        Ok(ImportSummary {
            tasks: tasks.len(),
            events: events.len(),
        })
    }
}

/// Local wall time with its UTC offset. A wall time inside a DST gap has
/// no zoned form and is written naked.
fn format_timestamp(timestamp: NaiveDateTime) -> String {
    match Local.from_local_datetime(&timestamp).earliest() {
        Some(zoned) => zoned.format(WRITE_ZONED).to_string(),
        None => timestamp.format(WRITE_NAIVE).to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, BackupError> {
    for format in READ_ZONED {
        if let Ok(zoned) = DateTime::parse_from_str(raw, format) {
            return Ok(zoned.with_timezone(&Local).naive_local());
        }
    }
    for format in READ_NAIVE {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive);
        }
    }
    Err(BackupError::Timestamp(raw.to_string()))
}

fn event_text(event: &Event) -> String {
    match event.kind {
        EventKind::Flex => event.flex_minutes.unwrap_or(0).to_string(),
        _ => event.note.clone().unwrap_or_default(),
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("").trim()
}

fn is_header(record: &StringRecord) -> bool {
    let first = field(record, 0);
    first.eq_ignore_ascii_case("taskId") || first.eq_ignore_ascii_case("type")
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

fn parse_event_record(record: &StringRecord) -> Result<NewEvent, BackupError> {
    let first = field(record, 0);
    let kind = EventKind::from_code(first).map_err(|_| BackupError::UnknownRecord(first.to_string()))?;
    let timestamp = parse_timestamp(field(record, 1))?;
    let task_id = match field(record, 2) {
        "" => None,
        raw => Some(raw.parse::<i64>().map_err(|_| BackupError::Field("task", raw.to_string()))?),
    };
    let text = field(record, 3);

    let (note, flex_minutes) = match kind {
        EventKind::Flex => {
            let minutes = text.parse::<i64>().map_err(|_| BackupError::Field("text", text.to_string()))?;
            (None, Some(minutes))
        }
        _ if text.is_empty() => (None, None),
        _ => (Some(text.to_string()), None),
    };

    Ok(NewEvent {
        timestamp,
        kind,
        task_id,
        note,
        flex_minutes,
    })
}

fn parse_task_record(record: &StringRecord) -> Result<Task, BackupError> {
    let raw_id = field(record, 0);
    let id = raw_id.parse::<i64>().map_err(|_| BackupError::Field("taskId", raw_id.to_string()))?;
    let raw_ordering = field(record, 3);
    let ordering = match raw_ordering {
        "" => 0,
        raw => raw.parse::<i64>().map_err(|_| BackupError::Field("ordering", raw.to_string()))?,
    };

    Ok(Task {
        id: Some(id),
        name: field(record, 1).to_string(),
        active: parse_flag(field(record, 2), "active")?,
        ordering,
        is_default: parse_flag(field(record, 4), "isDefault")?,
    })
}

fn parse_flag(raw: &str, name: &'static str) -> Result<bool, BackupError> {
    match raw {
        "1" => Ok(true),
        "0" | "" => Ok(false),
        other if other.eq_ignore_ascii_case("true") => Ok(true),
        other if other.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(BackupError::Field(name, other.to_string())),
    }
}
