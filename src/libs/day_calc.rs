//! Single-day work time calculation.
//!
//! Folds one day's ordered events into effective clock boundaries and
//! worked minutes against the weekly target. Scan rules: a clock-in opens
//! an interval unless one is already open, a clock-out closes the open
//! interval or is an orphan, FLEX events add their signed minutes verbatim
//! and are transparent to interval pairing. An interval still open at the
//! end of the scan is closed at a projected boundary, never by writing an
//! event.
//!
//! The fold also reports whether the day ends inside an open interval, so
//! a multi-day walk can thread overnight work through as carry state: a
//! carried-in day without events counts in full.

use crate::libs::config::WeekPlan;
use crate::libs::event::{Event, EventKind};
use crate::libs::time_sum::TimeSum;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::cmp;

/// Whether a day boundary sits inside an open work interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarryState {
    #[default]
    Closed,
    Open,
}

/// Close of a work interval. `Projected` closes exist only in memory for
/// calculation and display; they are never written to the event store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutBoundary {
    Recorded(NaiveDateTime),
    Projected(NaiveDateTime),
}

impl OutBoundary {
    pub fn time(&self) -> NaiveDateTime {
        match self {
            OutBoundary::Recorded(time) | OutBoundary::Projected(time) => *time,
        }
    }

    pub fn is_projected(&self) -> bool {
        matches!(self, OutBoundary::Projected(_))
    }
}

/// Event sequence irregularities found while scanning a day. The scan
/// resolves them deterministically and records them instead of printing;
/// command layers decide how to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAnomaly {
    /// Clock-in while an interval was already open; the later one is ignored.
    DoubledIn(NaiveDateTime),
    /// Clock-out without an open interval; ignored.
    OrphanOut(NaiveDateTime),
}

/// One calculated day. Produced fresh on every calculation, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayLine {
    pub day: NaiveDate,
    /// Effective clock-in: midnight for a carried-in day, otherwise the
    /// first accepted clock-in. `None` when no interval opened.
    pub clock_in: Option<NaiveDateTime>,
    /// Close of the last interval, recorded or projected.
    pub clock_out: Option<OutBoundary>,
    /// Minutes inside clocked intervals; FLEX excluded.
    pub worked_minutes: i64,
    /// Signed FLEX total of the day.
    pub flex_minutes: i64,
    pub target_minutes: i64,
}

impl DayLine {
    /// Day's contribution to the running balance.
    pub fn delta_minutes(&self) -> i64 {
        self.worked_minutes + self.flex_minutes - self.target_minutes
    }

    /// Minutes the balance cache stores as worked, FLEX folded in so that
    /// summing cached (worked - target) pairs reproduces the balance.
    pub fn cached_worked_minutes(&self) -> i64 {
        self.worked_minutes + self.flex_minutes
    }

    pub fn worked(&self) -> TimeSum {
        TimeSum::from_minutes(self.worked_minutes)
    }

    pub fn flexi_delta(&self) -> TimeSum {
        TimeSum::from_minutes(self.delta_minutes())
    }
}

/// Full result of scanning one day.
#[derive(Debug, Clone)]
pub struct DayOutcome {
    pub line: DayLine,
    /// State at the end of the day, input for the following day's scan.
    pub carry_out: CarryState,
    pub anomalies: Vec<DayAnomaly>,
}

fn day_start(day: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(day, NaiveTime::MIN)
}

fn day_end(day: NaiveDate) -> NaiveDateTime {
    day.succ_opt().map(|next| NaiveDateTime::new(next, NaiveTime::MIN)).unwrap_or(NaiveDateTime::MAX)
}

/// Scans one day's events into a [`DayOutcome`].
///
/// `events` must belong to `day` and be ordered by `(timestamp, id)`.
/// `carry_in` says whether the previous day ended clocked in; if so the
/// scan opens an interval at midnight before looking at any event, unless
/// the day's first clocking event is itself a clock-in, in which case the
/// fresh clock-in supersedes the stale overnight one. An interval still
/// open after the scan is closed at the earlier of `now` and the end of
/// the day.
///
/// A day with no events and no carry yields zero worked minutes, which on
/// a workday settles as the negative of the target. A carried-in day with
/// no events counts all twenty-four hours.
pub fn calculate_day(day: NaiveDate, events: &[Event], carry_in: CarryState, now: NaiveDateTime, week: &WeekPlan) -> DayOutcome {
    let target = week.target_for(day);
    let target_minutes = if target.workday { target.minutes } else { 0 };

    let first_clocking_is_in = events
        .iter()
        .find(|event| event.kind.is_clocking())
        .map(|event| event.kind == EventKind::In)
        .unwrap_or(false);

    let mut open: Option<NaiveDateTime> = match carry_in {
        CarryState::Open if !first_clocking_is_in => Some(day_start(day)),
        _ => None,
    };
    let mut clock_in = open;
    let mut clock_out: Option<OutBoundary> = None;
    let mut worked_minutes = 0i64;
    let mut flex_minutes = 0i64;
    let mut anomalies = Vec::new();

    for event in events {
        match event.kind {
            EventKind::In => match open {
                Some(_) => anomalies.push(DayAnomaly::DoubledIn(event.timestamp)),
                None => {
                    open = Some(event.timestamp);
                    clock_in.get_or_insert(event.timestamp);
                }
            },
            EventKind::Out => match open.take() {
                Some(start) => {
                    worked_minutes += event.timestamp.signed_duration_since(start).num_minutes();
                    clock_out = Some(OutBoundary::Recorded(event.timestamp));
                }
                None => anomalies.push(DayAnomaly::OrphanOut(event.timestamp)),
            },
            EventKind::Flex => flex_minutes += event.flex_minutes.unwrap_or(0),
        }
    }

    let carry_out = match open {
        Some(start) => {
            let boundary = cmp::max(start, cmp::min(now, day_end(day)));
            worked_minutes += boundary.signed_duration_since(start).num_minutes();
            clock_out = Some(OutBoundary::Projected(boundary));
            CarryState::Open
        }
        None => CarryState::Closed,
    };

    DayOutcome {
        line: DayLine {
            day,
            clock_in,
            clock_out,
            worked_minutes,
            flex_minutes,
            target_minutes,
        },
        carry_out,
        anomalies,
    }
}

/// Carry state heading into a day, judged from the last clocking event
/// strictly before it. FLEX events are transparent to carry.
pub fn carry_from_last_clocking(last: Option<&Event>) -> CarryState {
    match last {
        Some(event) if event.kind == EventKind::In => CarryState::Open,
        _ => CarryState::Closed,
    }
}

/// Splits minutes as `H:MM` for table cells; negative totals render a
/// leading minus on the hour part.
pub fn format_minutes(total: i64) -> String {
    let sign = if total < 0 { "-" } else { "" };
    let absolute = total.abs();
    format!("{}{}:{:02}", sign, absolute / 60, absolute % 60)
}
