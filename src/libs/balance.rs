//! Balance engine: folds per-day deltas into the running flexitime balance.
//!
//! The balance at a day is the sum of (worked - target) minutes over every
//! day from the reset boundary through that day, inclusive. The engine
//! walks that span day by day, consulting the calculation cache first and
//! falling back to the day calculator on a miss. Settled days (strictly
//! before today) are cached after computation; the day containing "now" is
//! always computed fresh, since an open interval keeps growing until it is
//! closed.
//!
//! Store failures surface to the caller; the engine never substitutes a
//! zero balance for a day it could not load.

use crate::db::calc_cache::{CalcCache, CalcCacheEntry};
use crate::db::events::Events;
use crate::libs::config::{Config, WeekPlan};
use crate::libs::day_calc::{calculate_day, carry_from_last_clocking, DayOutcome};
use crate::libs::flexi_reset::FlexiReset;
use crate::libs::time_sum::TimeSum;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp;
use std::error::Error;

pub struct Balance {
    events: Events,
    cache: CalcCache,
    week: WeekPlan,
    reset: FlexiReset,
}

impl Balance {
    pub fn new(events: Events, cache: CalcCache, config: &Config) -> Self {
        Balance {
            events,
            cache,
            week: config.week,
            reset: config.flexi_reset,
        }
    }

    /// Cumulative balance since the reset boundary at or before `day`,
    /// inclusive of `day` itself. With no recorded events the balance is
    /// zero regardless of the week plan.
    pub fn flexi_balance_at(&mut self, day: NaiveDate, now: NaiveDateTime) -> Result<TimeSum, Box<dyn Error>> {
        let first = match self.events.first_event()? {
            Some(event) => event,
            None => return Ok(TimeSum::new()),
        };

        let mut cursor = cmp::max(self.reset.last_reset_day(day), first.day());
        let mut total = 0i64;
        while cursor <= day {
            total += self.day_delta(cursor, now)?;
            cursor = match cursor.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(TimeSum::from_minutes(total))
    }

    /// First day the current accumulation window can cover: the reset
    /// boundary, clamped to the first recorded day. `None` with an empty
    /// store.
    pub fn window_start(&mut self, day: NaiveDate) -> Result<Option<NaiveDate>, Box<dyn Error>> {
        let first = match self.events.first_event()? {
            Some(event) => event,
            None => return Ok(None),
        };
        Ok(Some(cmp::max(self.reset.last_reset_day(day), first.day())))
    }

    /// Calculates one day from the stores: the day's events plus the carry
    /// judged from the last clocking event before it.
    pub fn day_outcome(&mut self, day: NaiveDate, now: NaiveDateTime) -> Result<DayOutcome, Box<dyn Error>> {
        let events = self.events.events_on_day(day)?;
        let prior = self.events.last_clocking_before(NaiveDateTime::new(day, NaiveTime::MIN))?;
        let carry = carry_from_last_clocking(prior.as_ref());
        Ok(calculate_day(day, &events, carry, now, &self.week))
    }

    /// Delta of one day, served from cache when the day is settled.
    fn day_delta(&mut self, day: NaiveDate, now: NaiveDateTime) -> Result<i64, Box<dyn Error>> {
        if day < now.date() {
            if let Some(entry) = self.cache.get(day)? {
                return Ok(entry.delta_minutes());
            }
            let outcome = self.day_outcome(day, now)?;
            let entry = CalcCacheEntry {
                day,
                worked_minutes: outcome.line.cached_worked_minutes(),
                target_minutes: outcome.line.target_minutes,
            };
            self.cache.put(&entry)?;
            Ok(entry.delta_minutes())
        } else {
            // The day containing "now" is volatile and never cached.
            let outcome = self.day_outcome(day, now)?;
            Ok(outcome.line.delta_minutes())
        }
    }
}
