//! Period range calculation for reports.
//!
//! Maps a symbolic range (current, last, both, or everything) and a unit
//! (week, month, year) to absolute inclusive timestamps. Weeks run Monday
//! through Sunday; ends sit at 23:59:59.999 of the closing day.

use crate::db::events::Events;
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use clap::ValueEnum;
use std::error::Error;
use std::fmt;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RangeKind {
    #[default]
    Current,
    Last,
    #[value(alias = "both")]
    LastAndCurrent,
    #[value(alias = "all")]
    AllData,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RangeUnit {
    #[default]
    Week,
    Month,
    Year,
}

/// Inclusive timestamp range covering whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodRange {
    /// The unit instance containing `today`.
    pub fn current(unit: RangeUnit, today: NaiveDate) -> Self {
        let start = unit_start(unit, today);
        PeriodRange {
            start: start_of_day(start),
            end: end_of_day(unit_end_day(unit, start)),
        }
    }

    /// The unit instance immediately before the one containing `today`.
    pub fn last(unit: RangeUnit, today: NaiveDate) -> Self {
        let current_start = unit_start(unit, today);
        let previous_day = current_start.pred_opt().unwrap_or(current_start);
        let start = unit_start(unit, previous_day);
        PeriodRange {
            start: start_of_day(start),
            end: end_of_day(unit_end_day(unit, start)),
        }
    }

    /// From the start of the previous unit instance through the end of the
    /// current one.
    pub fn last_and_current(unit: RangeUnit, today: NaiveDate) -> Self {
        PeriodRange {
            start: Self::last(unit, today).start,
            end: Self::current(unit, today).end,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date()
    }
}

impl fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {}", self.first_day(), self.last_day())
    }
}

/// Range calculator over the event store; only the all-data range actually
/// consults it.
pub struct PeriodCalc<'a> {
    events: &'a mut Events,
}

impl<'a> PeriodCalc<'a> {
    pub fn new(events: &'a mut Events) -> Self {
        PeriodCalc { events }
    }

    /// Resolves the symbolic range to absolute timestamps. The all-data
    /// range spans the first recorded day through the last and ignores
    /// `unit`; with zero recorded events it is undefined and yields `None`.
    pub fn calculate_begin_and_end(&mut self, range: RangeKind, unit: RangeUnit, today: NaiveDate) -> Result<Option<PeriodRange>, Box<dyn Error>> {
        match range {
            RangeKind::Current => Ok(Some(PeriodRange::current(unit, today))),
            RangeKind::Last => Ok(Some(PeriodRange::last(unit, today))),
            RangeKind::LastAndCurrent => Ok(Some(PeriodRange::last_and_current(unit, today))),
            RangeKind::AllData => {
                let first = self.events.first_event()?;
                let latest = self.events.latest_event()?;
                match (first, latest) {
                    (Some(first), Some(latest)) => Ok(Some(PeriodRange {
                        start: start_of_day(first.day()),
                        end: end_of_day(latest.day()),
                    })),
                    _ => Ok(None),
                }
            }
        }
    }
}

fn unit_start(unit: RangeUnit, day: NaiveDate) -> NaiveDate {
    match unit {
        RangeUnit::Week => day - Duration::days(day.weekday().num_days_from_monday() as i64),
        RangeUnit::Month => day.with_day(1).unwrap_or(day),
        RangeUnit::Year => day.with_ordinal(1).unwrap_or(day),
    }
}

fn unit_end_day(unit: RangeUnit, start: NaiveDate) -> NaiveDate {
    match unit {
        RangeUnit::Week => start + Duration::days(6),
        RangeUnit::Month => start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(start),
        RangeUnit::Year => start.with_month(12).and_then(|last| last.with_day(31)).unwrap_or(start),
    }
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(day, NaiveTime::MIN)
}

fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(day, NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN))
}
