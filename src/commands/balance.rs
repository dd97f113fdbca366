use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::libs::balance::Balance;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_print;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::error::Error;

#[derive(Debug, Args)]
pub struct BalanceArgs {
    /// Balance through this date instead of today
    #[arg(long, value_name = "DATE")]
    on: Option<NaiveDate>,
}

pub fn cmd(args: BalanceArgs) -> Result<(), Box<dyn Error>> {
    let now = Local::now().naive_local();
    let day = args.on.unwrap_or(now.date());
    let config = Config::read()?;

    let mut balance = Balance::new(Events::new()?, CalcCache::new()?, &config);
    let sum = balance.flexi_balance_at(day, now)?;

    msg_print!(Message::BalanceHeader(config.flexi_reset.to_string()));
    msg_print!(Message::BalanceAt(day.format("%Y-%m-%d").to_string(), sum.to_string()));

    Ok(())
}
