use crate::db::events::Events;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::error::Error;

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Add {
        /// Task name; prompted for when omitted
        name: Option<String>,
        /// Make it the default for automatic clock-ins
        #[arg(long)]
        default: bool,
    },
    /// List tasks
    List {
        /// Include archived tasks
        #[arg(long)]
        all: bool,
    },
    /// Rename a task
    Rename {
        /// Task name or ID
        task: String,
        new_name: String,
    },
    /// Make a task the default for automatic clock-ins
    SetDefault {
        /// Task name or ID
        task: String,
    },
    /// Archive a task, or bring it back with --restore
    Archive {
        /// Task name or ID
        task: String,
        #[arg(long)]
        restore: bool,
    },
    /// Change a task's position in listings
    Reorder {
        /// Task name or ID
        task: String,
        position: i64,
    },
    /// Delete a task that has no recorded events
    Delete {
        /// Task name or ID
        task: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

pub fn cmd(args: TaskArgs) -> Result<(), Box<dyn Error>> {
    match args.command {
        Some(TaskCommand::Add { name, default }) => handle_add(name, default),
        Some(TaskCommand::List { all }) => handle_list(all),
        Some(TaskCommand::Rename { task, new_name }) => handle_rename(task, new_name),
        Some(TaskCommand::SetDefault { task }) => handle_set_default(task),
        Some(TaskCommand::Archive { task, restore }) => handle_archive(task, restore),
        Some(TaskCommand::Reorder { task, position }) => handle_reorder(task, position),
        Some(TaskCommand::Delete { task, force }) => handle_delete(task, force),
        None => handle_list(false),
    }
}

fn handle_add(name: Option<String>, default: bool) -> Result<(), Box<dyn Error>> {
    let name: String = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .interact_text()?,
    };

    let mut tasks_db = Tasks::new()?;
    let created = tasks_db.insert(&Task::new(&name))?;
    msg_success!(Message::TaskCreated(created.name.clone()));

    if default {
        if let Some(id) = created.id {
            tasks_db.set_default(id)?;
            msg_success!(Message::TaskSetDefault(created.name));
        }
    }
    Ok(())
}

fn handle_list(all: bool) -> Result<(), Box<dyn Error>> {
    let filter = if all { TaskFilter::All } else { TaskFilter::Active };
    let tasks = Tasks::new()?.fetch(filter)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;
    Ok(())
}

fn handle_rename(reference: String, new_name: String) -> Result<(), Box<dyn Error>> {
    let mut tasks_db = Tasks::new()?;
    let task = match resolve(&mut tasks_db, &reference)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(reference));
            return Ok(());
        }
    };

    let renamed = Task { name: new_name.clone(), ..task };
    tasks_db.update(&renamed)?;
    msg_success!(Message::TaskUpdated(new_name));
    Ok(())
}

fn handle_set_default(reference: String) -> Result<(), Box<dyn Error>> {
    let mut tasks_db = Tasks::new()?;
    let task = match resolve(&mut tasks_db, &reference)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(reference));
            return Ok(());
        }
    };

    match task.id {
        Some(id) => {
            tasks_db.set_default(id)?;
            msg_success!(Message::TaskSetDefault(task.name));
        }
        None => msg_error!(Message::TaskNotFound(reference)),
    }
    Ok(())
}

fn handle_archive(reference: String, restore: bool) -> Result<(), Box<dyn Error>> {
    let mut tasks_db = Tasks::new()?;
    let task = match resolve(&mut tasks_db, &reference)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(reference));
            return Ok(());
        }
    };

    let updated = Task { active: restore, ..task };
    tasks_db.update(&updated)?;
    msg_success!(Message::TaskSetActive(updated.name, restore));
    Ok(())
}

fn handle_reorder(reference: String, position: i64) -> Result<(), Box<dyn Error>> {
    let mut tasks_db = Tasks::new()?;
    let task = match resolve(&mut tasks_db, &reference)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(reference));
            return Ok(());
        }
    };

    let updated = Task { ordering: position, ..task };
    tasks_db.update(&updated)?;
    msg_success!(Message::TaskUpdated(updated.name));
    Ok(())
}

fn handle_delete(reference: String, force: bool) -> Result<(), Box<dyn Error>> {
    let mut tasks_db = Tasks::new()?;
    let task = match resolve(&mut tasks_db, &reference)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFound(reference));
            return Ok(());
        }
    };
    let id = match task.id {
        Some(id) => id,
        None => return Ok(()),
    };

    // Events keep their task reference; a referenced task can only be
    // archived, never deleted.
    let references = Events::new()?.count_for_task(id)?;
    if references > 0 {
        msg_error!(Message::TaskInUse(task.name, references));
        return Ok(());
    }

    if !force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    tasks_db.delete(id)?;
    msg_success!(Message::TaskDeleted(task.name));
    Ok(())
}

fn resolve(tasks_db: &mut Tasks, reference: &str) -> Result<Option<Task>, Box<dyn Error>> {
    match reference.parse::<i64>() {
        Ok(id) => tasks_db.get(id),
        Err(_) => tasks_db.find_by_name(reference),
    }
}
