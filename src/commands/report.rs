use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::libs::balance::Balance;
use crate::libs::config::Config;
use crate::libs::day_calc::DayAnomaly;
use crate::libs::messages::Message;
use crate::libs::period::{PeriodCalc, RangeKind, RangeUnit};
use crate::libs::report::build_report;
use crate::libs::view::View;
use crate::{msg_print, msg_success, msg_warning};
use chrono::Local;
use clap::Args;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Which period relative to today
    #[arg(long, value_enum, default_value_t = RangeKind::Current)]
    range: RangeKind,
    /// Period unit
    #[arg(long, value_enum, default_value_t = RangeUnit::Week)]
    unit: RangeUnit,
    /// Also write the report to this CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs) -> Result<(), Box<dyn Error>> {
    let now = Local::now().naive_local();
    let config = Config::read()?;

    let mut events = Events::new()?;
    let mut periods = PeriodCalc::new(&mut events);
    let range = match periods.calculate_begin_and_end(args.range, args.unit, now.date())? {
        Some(range) => range,
        None => {
            msg_warning!(Message::ReportEmptyRange);
            return Ok(());
        }
    };

    let mut balance = Balance::new(Events::new()?, CalcCache::new()?, &config);
    let report = build_report(&mut balance, range, now)?;

    msg_print!(Message::ReportHeader(
        range.first_day().format("%Y-%m-%d").to_string(),
        range.last_day().format("%Y-%m-%d").to_string()
    ));
    if report.lines.is_empty() {
        msg_warning!(Message::ReportEmptyRange);
        return Ok(());
    }
    View::report(&report)?;

    for anomaly in &report.anomalies {
        match anomaly {
            DayAnomaly::DoubledIn(time) => {
                msg_warning!(Message::AnomalyDoubledIn(time.format("%Y-%m-%d %H:%M").to_string()))
            }
            DayAnomaly::OrphanOut(time) => {
                msg_warning!(Message::AnomalyOrphanOut(time.format("%Y-%m-%d %H:%M").to_string()))
            }
        }
    }

    if let Some(path) = args.csv {
        report.write_csv(&path)?;
        msg_success!(Message::ExportCompleted(path.display().to_string()));
    }

    Ok(())
}
