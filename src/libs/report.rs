//! Shared logic for period report generation.

use crate::libs::balance::Balance;
use crate::libs::day_calc::{format_minutes, DayAnomaly, DayLine};
use crate::libs::period::PeriodRange;
use chrono::NaiveDateTime;
use std::cmp;
use std::error::Error;
use std::path::Path;

/// Sums over all lines of a report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportTotals {
    pub worked_minutes: i64,
    pub flex_minutes: i64,
    pub target_minutes: i64,
}

impl ReportTotals {
    pub fn delta_minutes(&self) -> i64 {
        self.worked_minutes + self.flex_minutes - self.target_minutes
    }
}

/// One calculated line per day of a period, plus totals and any event
/// sequence anomalies found along the way.
pub struct PeriodReport {
    pub range: PeriodRange,
    pub lines: Vec<DayLine>,
    pub anomalies: Vec<DayAnomaly>,
    pub totals: ReportTotals,
}

/// Calculates a report over `range`, one line per day up to today.
/// Future days of the period are left out; they would only pad the table
/// with empty negative lines.
pub fn build_report(balance: &mut Balance, range: PeriodRange, now: NaiveDateTime) -> Result<PeriodReport, Box<dyn Error>> {
    let mut lines = Vec::new();
    let mut anomalies = Vec::new();
    let last = cmp::min(range.last_day(), now.date());
    let mut day = range.first_day();

    while day <= last {
        let outcome = balance.day_outcome(day, now)?;
        anomalies.extend(outcome.anomalies);
        lines.push(outcome.line);
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let mut totals = ReportTotals::default();
    for line in &lines {
        totals.worked_minutes += line.worked_minutes;
        totals.flex_minutes += line.flex_minutes;
        totals.target_minutes += line.target_minutes;
    }

    Ok(PeriodReport {
        range,
        lines,
        anomalies,
        totals,
    })
}

impl PeriodReport {
    /// Writes the report as a CSV table, one record per day and a final
    /// totals record.
    pub fn write_csv(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["Date", "In", "Out", "Worked", "Flex", "Target", "Delta"])?;

        for line in &self.lines {
            let clock_in = line.clock_in.map(|time| time.format("%H:%M").to_string()).unwrap_or_default();
            let clock_out = line
                .clock_out
                .map(|boundary| {
                    let formatted = boundary.time().format("%H:%M").to_string();
                    if boundary.is_projected() {
                        format!("{}*", formatted)
                    } else {
                        formatted
                    }
                })
                .unwrap_or_default();
            wtr.write_record([
                line.day.format("%Y-%m-%d").to_string(),
                clock_in,
                clock_out,
                format_minutes(line.worked_minutes),
                format_minutes(line.flex_minutes),
                format_minutes(line.target_minutes),
                format_minutes(line.delta_minutes()),
            ])?;
        }

        wtr.write_record([
            "Total".to_string(),
            String::new(),
            String::new(),
            format_minutes(self.totals.worked_minutes),
            format_minutes(self.totals.flex_minutes),
            format_minutes(self.totals.target_minutes),
            format_minutes(self.totals.delta_minutes()),
        ])?;

        wtr.flush()?;
        Ok(())
    }
}
