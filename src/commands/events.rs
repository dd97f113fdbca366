use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::db::tasks::Tasks;
use crate::libs::event::{EventKind, FormatEvents};
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::timer::Timer;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::collections::HashMap;
use std::error::Error;

#[derive(Debug, Args)]
pub struct EventsArgs {
    /// List events of this date (default today)
    #[arg(long, value_name = "DATE")]
    on: Option<NaiveDate>,
    /// List every stored event instead of one day
    #[arg(long)]
    all: bool,
    #[command(subcommand)]
    command: Option<EventsCommand>,
}

#[derive(Debug, Subcommand)]
enum EventsCommand {
    /// Edit a stored event
    Edit {
        /// Event ID
        id: i64,
        /// New timestamp, "YYYY-MM-DD HH:MM[:SS]"
        #[arg(long, value_name = "DATETIME")]
        at: Option<String>,
        /// New task reference (clock-ins only)
        #[arg(long)]
        task: Option<i64>,
        /// New note text, empty to clear (clock-ins only)
        #[arg(long)]
        note: Option<String>,
        /// New signed minutes (FLEX events only)
        #[arg(long, allow_hyphen_values = true)]
        minutes: Option<i64>,
    },
    /// Delete a stored event
    Delete {
        /// Event ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub fn cmd(args: EventsArgs) -> Result<(), Box<dyn Error>> {
    match args.command {
        Some(EventsCommand::Edit { id, at, task, note, minutes }) => handle_edit(id, at, task, note, minutes),
        Some(EventsCommand::Delete { id, force }) => handle_delete(id, force),
        None => handle_list(args.on, args.all),
    }
}

fn handle_list(on: Option<NaiveDate>, all: bool) -> Result<(), Box<dyn Error>> {
    let mut events_db = Events::new()?;
    let (events, label) = if all {
        (events_db.all()?, "all time".to_string())
    } else {
        let day = on.unwrap_or_else(|| Local::now().date_naive());
        (events_db.events_on_day(day)?, day.format("%Y-%m-%d").to_string())
    };

    if events.is_empty() {
        msg_info!(Message::NoEventsFound);
        return Ok(());
    }

    let task_names: HashMap<i64, String> = Tasks::new()?
        .fetch(TaskFilter::All)?
        .into_iter()
        .filter_map(|task| task.id.map(|id| (id, task.name)))
        .collect();

    msg_print!(Message::EventsHeader(label), true);
    View::events(&events.format(&task_names))?;
    Ok(())
}

fn handle_edit(id: i64, at: Option<String>, task: Option<i64>, note: Option<String>, minutes: Option<i64>) -> Result<(), Box<dyn Error>> {
    let mut timer = Timer::new(Events::new()?, CalcCache::new()?);
    let mut event = match Events::new()?.get(id)? {
        Some(event) => event,
        None => {
            msg_error!(Message::EventNotFoundWithId(id));
            return Ok(());
        }
    };

    if let Some(raw) = at {
        event.timestamp = parse_datetime(&raw)?;
    }
    if let Some(task_id) = task {
        if event.kind == EventKind::In {
            if Tasks::new()?.get(task_id)?.is_none() {
                msg_error!(Message::TaskNotFoundWithId(task_id));
                return Ok(());
            }
            event.task_id = Some(task_id);
        } else {
            msg_warning!(Message::EventFieldIgnored("task".to_string(), event.kind.to_string()));
        }
    }
    if let Some(text) = note {
        if event.kind == EventKind::In {
            event.note = if text.is_empty() { None } else { Some(text) };
        } else {
            msg_warning!(Message::EventFieldIgnored("note".to_string(), event.kind.to_string()));
        }
    }
    if let Some(value) = minutes {
        if event.kind == EventKind::Flex {
            event.flex_minutes = Some(value);
        } else {
            msg_warning!(Message::EventFieldIgnored("minutes".to_string(), event.kind.to_string()));
        }
    }

    match timer.update_event(&event)? {
        Some(_) => msg_success!(Message::EventUpdated(id)),
        None => msg_error!(Message::EventNotFoundWithId(id)),
    }
    Ok(())
}

fn handle_delete(id: i64, force: bool) -> Result<(), Box<dyn Error>> {
    if !force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEvent(id).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut timer = Timer::new(Events::new()?, CalcCache::new()?);
    match timer.delete_event(id)? {
        Some(_) => msg_success!(Message::EventDeleted(id)),
        None => msg_error!(Message::EventNotFoundWithId(id)),
    }
    Ok(())
}

fn parse_datetime(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
}
