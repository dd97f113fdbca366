use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::db::tasks::Tasks;
use crate::libs::balance::Balance;
use crate::libs::config::Config;
use crate::libs::day_calc::format_minutes;
use crate::libs::messages::Message;
use crate::libs::timer::Timer;
use crate::msg_print;
use chrono::Local;
use std::error::Error;

pub fn cmd() -> Result<(), Box<dyn Error>> {
    let now = Local::now().naive_local();
    let config = Config::read()?;

    let mut timer = Timer::new(Events::new()?, CalcCache::new()?);
    match timer.open_clock_in()? {
        Some(event) => {
            let since = if event.day() == now.date() {
                event.timestamp.format("%H:%M").to_string()
            } else {
                event.timestamp.format("%Y-%m-%d %H:%M").to_string()
            };
            match event.task_id {
                Some(id) => {
                    let name = Tasks::new()?.get(id)?.map(|task| task.name).unwrap_or_else(|| format!("#{}", id));
                    msg_print!(Message::StatusClockedInSinceOnTask(since, name));
                }
                None => msg_print!(Message::StatusClockedInSince(since)),
            }
        }
        None => msg_print!(Message::StatusNotClockedIn),
    }

    let mut balance = Balance::new(Events::new()?, CalcCache::new()?, &config);
    let outcome = balance.day_outcome(now.date(), now)?;
    msg_print!(Message::StatusWorkedToday(
        outcome.line.worked().to_string(),
        format_minutes(outcome.line.target_minutes)
    ));

    let sum = balance.flexi_balance_at(now.date(), now)?;
    msg_print!(Message::BalanceAt(now.date().format("%Y-%m-%d").to_string(), sum.to_string()));

    Ok(())
}
