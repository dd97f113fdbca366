use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::libs::balance::Balance;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::timer::Timer;
use crate::{msg_success, msg_warning};
use chrono::{Local, NaiveTime};
use clap::Args;
use std::error::Error;

#[derive(Debug, Args)]
pub struct OutArgs {
    /// Clock out at this wall time today instead of now
    #[arg(long, value_name = "HH:MM")]
    at: Option<NaiveTime>,
}

pub fn cmd(args: OutArgs) -> Result<(), Box<dyn Error>> {
    let now = Local::now().naive_local();
    let timestamp = match args.at {
        Some(time) => now.date().and_time(time),
        None => now,
    };

    let mut timer = Timer::new(Events::new()?, CalcCache::new()?);
    match timer.clock_out(timestamp)? {
        Some(event) => {
            let config = Config::read()?;
            let mut balance = Balance::new(Events::new()?, CalcCache::new()?, &config);
            let outcome = balance.day_outcome(event.day(), now)?;
            msg_success!(Message::ClockedOut(
                event.timestamp.format("%H:%M").to_string(),
                outcome.line.worked().to_string()
            ));
        }
        None => msg_warning!(Message::NotClockedIn),
    }

    Ok(())
}
