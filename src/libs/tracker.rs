//! Automatic clock-in/out triggered by location or Wi-Fi signals.
//!
//! Platform listeners (geofence exits, SSID changes) are outside this
//! crate; callers feed their firings in here. Both operations are
//! idempotent, so a burst of identical triggers records at most one
//! event, and anything arriving inside the configured ignore period
//! after the latest event is dropped to absorb signal flapping.

use crate::db::tasks::Tasks;
use crate::libs::task::Task;
use crate::libs::timer::Timer;
use crate::msg_debug;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use std::error::Error;
use std::fmt;

/// Where an automatic trigger came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriggerSource {
    Location,
    Wifi,
}

impl TriggerSource {
    /// Stable label recorded in the event note.
    pub fn label(&self) -> &'static str {
        match self {
            TriggerSource::Location => "LOCATION",
            TriggerSource::Wifi => "WIFI",
        }
    }
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub struct Tracker {
    timer: Timer,
    tasks: Tasks,
    ignore_minutes: i64,
}

impl Tracker {
    pub fn new(timer: Timer, tasks: Tasks, ignore_minutes: i64) -> Self {
        Tracker {
            timer,
            tasks,
            ignore_minutes,
        }
    }

    /// True when the latest event is closer to `now` than the ignore
    /// period. Both directions count, so an event a tester planted in
    /// the near future also suppresses triggers.
    pub fn in_ignore_period(&mut self, now: NaiveDateTime) -> Result<bool, Box<dyn Error>> {
        match self.timer.latest_event()? {
            Some(event) => {
                let elapsed = (now - event.timestamp).num_minutes().abs();
                Ok(elapsed < self.ignore_minutes)
            }
            None => Ok(false),
        }
    }

    /// Handles an arrival trigger. Returns whether clock state changed.
    pub fn clock_in_with_source(&mut self, source: TriggerSource, now: NaiveDateTime) -> Result<bool, Box<dyn Error>> {
        if self.in_ignore_period(now)? {
            msg_debug!("{} trigger inside ignore period, dropped", source);
            return Ok(false);
        }
        let task_id = self.tasks.default_task()?.and_then(|task: Task| task.id);
        let event = self.timer.clock_in(now, task_id, Some(source.label().to_string()))?;
        Ok(event.is_some())
    }

    /// Handles a departure trigger. Returns whether clock state changed.
    pub fn clock_out_with_source(&mut self, source: TriggerSource, now: NaiveDateTime) -> Result<bool, Box<dyn Error>> {
        if self.in_ignore_period(now)? {
            msg_debug!("{} trigger inside ignore period, dropped", source);
            return Ok(false);
        }
        let event = self.timer.clock_out(now)?;
        Ok(event.is_some())
    }
}
