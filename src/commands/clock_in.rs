use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::timer::Timer;
use crate::{msg_error, msg_success, msg_warning};
use chrono::{Local, NaiveTime};
use clap::Args;
use std::error::Error;

#[derive(Debug, Args)]
pub struct InArgs {
    /// Task to book the session on, by name or id
    #[arg(short, long)]
    task: Option<String>,
    /// Free-text note stored on the clock-in
    #[arg(short, long)]
    note: Option<String>,
    /// Clock in at this wall time today instead of now
    #[arg(long, value_name = "HH:MM")]
    at: Option<NaiveTime>,
}

pub fn cmd(args: InArgs) -> Result<(), Box<dyn Error>> {
    let now = Local::now().naive_local();
    let timestamp = match args.at {
        Some(time) => now.date().and_time(time),
        None => now,
    };

    let task = match &args.task {
        Some(reference) => match resolve_task(reference)? {
            Some(task) => Some(task),
            None => {
                msg_error!(Message::TaskNotFound(reference.clone()));
                return Ok(());
            }
        },
        None => Tasks::new()?.default_task()?,
    };
    let task_id = task.as_ref().and_then(|task| task.id);

    let mut timer = Timer::new(Events::new()?, CalcCache::new()?);
    match timer.clock_in(timestamp, task_id, args.note)? {
        Some(event) => {
            let time = event.timestamp.format("%H:%M").to_string();
            match task {
                Some(task) => msg_success!(Message::ClockedInOnTask(time, task.name)),
                None => msg_success!(Message::ClockedIn(time)),
            }
        }
        None => {
            let since = timer
                .open_clock_in()?
                .map(|event| event.timestamp.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            msg_warning!(Message::AlreadyClockedIn(since));
        }
    }

    Ok(())
}

fn resolve_task(reference: &str) -> Result<Option<Task>, Box<dyn Error>> {
    let mut tasks = Tasks::new()?;
    match reference.parse::<i64>() {
        Ok(id) => tasks.get(id),
        Err(_) => tasks.find_by_name(reference),
    }
}
