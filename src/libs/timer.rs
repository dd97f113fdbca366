//! Timer: the single mutation path for clock events.
//!
//! Every insert, update and delete of an event goes through here so the
//! calculation cache is invalidated in the same call, before any
//! subsequent balance query can observe stale rows. Clock state is judged
//! from the latest clocking event; FLEX adjustments never change it.

use crate::db::calc_cache::CalcCache;
use crate::db::events::{Events, NewEvent};
use crate::libs::event::{Event, EventKind};
use chrono::{NaiveDateTime, Timelike};
use std::cmp;
use std::error::Error;

pub struct Timer {
    events: Events,
    cache: CalcCache,
}

impl Timer {
    pub fn new(events: Events, cache: CalcCache) -> Self {
        Timer { events, cache }
    }

    /// True when the latest clocking event is a clock-in.
    pub fn clocked_in(&mut self) -> Result<bool, Box<dyn Error>> {
        Ok(matches!(self.events.latest_clocking()?, Some(event) if event.kind == EventKind::In))
    }

    /// The clock-in the user is currently inside, if any.
    pub fn open_clock_in(&mut self) -> Result<Option<Event>, Box<dyn Error>> {
        match self.events.latest_clocking()? {
            Some(event) if event.kind == EventKind::In => Ok(Some(event)),
            _ => Ok(None),
        }
    }

    pub fn latest_event(&mut self) -> Result<Option<Event>, Box<dyn Error>> {
        self.events.latest_event()
    }

    /// Records a clock-in at `now`. Returns `None` without writing when
    /// already clocked in.
    pub fn clock_in(&mut self, now: NaiveDateTime, task_id: Option<i64>, note: Option<String>) -> Result<Option<Event>, Box<dyn Error>> {
        if self.clocked_in()? {
            return Ok(None);
        }
        let event = self.events.insert(&NewEvent::clock_in(truncate(now), task_id, note))?;
        self.cache.delete_from(event.day())?;
        Ok(Some(event))
    }

    /// Records a clock-out at `now`. Returns `None` without writing when
    /// not clocked in.
    pub fn clock_out(&mut self, now: NaiveDateTime) -> Result<Option<Event>, Box<dyn Error>> {
        if !self.clocked_in()? {
            return Ok(None);
        }
        let event = self.events.insert(&NewEvent::clock_out(truncate(now)))?;
        self.cache.delete_from(event.day())?;
        Ok(Some(event))
    }

    /// Records a signed FLEX adjustment at `now`.
    pub fn record_flex(&mut self, now: NaiveDateTime, minutes: i64) -> Result<Event, Box<dyn Error>> {
        let event = self.events.insert(&NewEvent::flex(truncate(now), minutes))?;
        self.cache.delete_from(event.day())?;
        Ok(event)
    }

    /// Rewrites an event. Invalidation starts at the earlier of the old
    /// and new day, since moving an event across midnight affects both.
    /// Returns the previous record, or `None` when the id is unknown.
    pub fn update_event(&mut self, updated: &Event) -> Result<Option<Event>, Box<dyn Error>> {
        let old = match self.events.get(updated.id)? {
            Some(event) => event,
            None => return Ok(None),
        };
        let updated = Event {
            timestamp: truncate(updated.timestamp),
            ..updated.clone()
        };
        self.events.update(&updated)?;
        self.cache.delete_from(cmp::min(old.day(), updated.day()))?;
        Ok(Some(old))
    }

    /// Deletes an event and returns it, or `None` when the id is unknown.
    pub fn delete_event(&mut self, id: i64) -> Result<Option<Event>, Box<dyn Error>> {
        let old = match self.events.get(id)? {
            Some(event) => event,
            None => return Ok(None),
        };
        self.events.delete(id)?;
        self.cache.delete_from(old.day())?;
        Ok(Some(old))
    }
}

/// Whole-second wall time; sub-second noise would break the uniform text
/// ordering in the store.
fn truncate(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}
