use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::libs::messages::Message;
use crate::libs::time_sum::TimeSum;
use crate::libs::timer::Timer;
use crate::{msg_success, msg_warning};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::error::Error;

#[derive(Debug, Args)]
pub struct FlexArgs {
    /// Signed adjustment, minutes or H:MM (e.g. -30, 1:15, -0:45)
    #[arg(required = true, allow_hyphen_values = true)]
    amount: String,
    /// Book the adjustment on this date instead of today
    #[arg(long, value_name = "DATE")]
    on: Option<NaiveDate>,
}

pub fn cmd(args: FlexArgs) -> Result<(), Box<dyn Error>> {
    let sum: TimeSum = args.amount.parse()?;
    if sum.as_minutes() == 0 {
        msg_warning!(Message::FlexZeroIgnored);
        return Ok(());
    }

    let now = Local::now().naive_local();
    // Past-day adjustments get a fixed noon timestamp; FLEX is summed per
    // day, the time only has to be deterministic.
    let timestamp = match args.on {
        Some(day) => day.and_hms_opt(12, 0, 0).unwrap_or(now),
        None => now,
    };

    let mut timer = Timer::new(Events::new()?, CalcCache::new()?);
    timer.record_flex(timestamp, sum.as_minutes())?;
    msg_success!(Message::FlexRecorded(sum.to_string()));

    Ok(())
}
