use super::day_calc::{format_minutes, DayLine};
use super::event::EventRow;
use super::report::PeriodReport;
use super::task::Task;
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ACTIVE", "DEFAULT"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.name,
                if task.active { "yes" } else { "no" },
                if task.is_default { "*" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn events(events: &[EventRow]) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TIME", "TYPE", "TASK", "DETAIL"]);
        for event in events {
            table.add_row(row![event.id, event.time, event.kind, event.task, event.detail]);
        }
        table.printstd();

        Ok(())
    }

    /// One row per day plus a totals row. Projected clock-outs are marked
    /// with a trailing `*`.
    pub fn report(report: &PeriodReport) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "DAY", "IN", "OUT", "WORKED", "FLEX", "TARGET", "DELTA"]);
        for line in &report.lines {
            table.add_row(row![
                line.day.format("%Y-%m-%d"),
                line.day.format("%a"),
                Self::clock_in_cell(line),
                Self::clock_out_cell(line),
                format_minutes(line.worked_minutes),
                format_minutes(line.flex_minutes),
                format_minutes(line.target_minutes),
                format_minutes(line.delta_minutes())
            ]);
        }
        table.add_row(row![
            "TOTAL",
            "",
            "",
            "",
            format_minutes(report.totals.worked_minutes),
            format_minutes(report.totals.flex_minutes),
            format_minutes(report.totals.target_minutes),
            format_minutes(report.totals.delta_minutes())
        ]);
        table.printstd();

        Ok(())
    }

    fn clock_in_cell(line: &DayLine) -> String {
        line.clock_in.map(|time| time.format("%H:%M").to_string()).unwrap_or_default()
    }

    fn clock_out_cell(line: &DayLine) -> String {
        match line.clock_out {
            Some(boundary) if boundary.is_projected() => format!("{}*", boundary.time().format("%H:%M")),
            Some(boundary) => boundary.time().format("%H:%M").to_string(),
            None => String::new(),
        }
    }
}
