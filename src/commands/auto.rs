//! Entry point for platform-level automatic tracking.
//!
//! Geofence and Wi-Fi watchers run outside this program; whatever hooks
//! them up (systemd units, NetworkManager dispatcher scripts, shortcuts)
//! calls `stempel auto in|out --source ...` when a signal fires. The
//! tracker keeps the calls idempotent, so noisy signal sources are safe.

use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::db::tasks::Tasks;
use crate::libs::config::{Config, TrackingConfig};
use crate::libs::messages::Message;
use crate::libs::timer::Timer;
use crate::libs::tracker::{Tracker, TriggerSource};
use crate::{msg_info, msg_print, msg_success, msg_warning};
use chrono::Local;
use clap::{Args, Subcommand};
use std::error::Error;

#[derive(Debug, Args)]
pub struct AutoArgs {
    #[command(subcommand)]
    command: AutoCommand,
}

#[derive(Debug, Subcommand)]
enum AutoCommand {
    /// Arrival trigger: clock in unless already clocked in
    In {
        /// Signal source firing the trigger
        #[arg(long, value_enum)]
        source: TriggerSource,
    },
    /// Departure trigger: clock out unless already clocked out
    Out {
        /// Signal source firing the trigger
        #[arg(long, value_enum)]
        source: TriggerSource,
    },
    /// Show trigger configuration and ignore-period state
    Status,
}

pub fn cmd(args: AutoArgs) -> Result<(), Box<dyn Error>> {
    match args.command {
        AutoCommand::In { source } => handle_trigger(source, true),
        AutoCommand::Out { source } => handle_trigger(source, false),
        AutoCommand::Status => handle_status(),
    }
}

fn handle_trigger(source: TriggerSource, arriving: bool) -> Result<(), Box<dyn Error>> {
    let tracking = match configured_tracking()? {
        Some(tracking) => tracking,
        None => return Ok(()),
    };

    let now = Local::now().naive_local();
    let timer = Timer::new(Events::new()?, CalcCache::new()?);
    let mut tracker = Tracker::new(timer, Tasks::new()?, tracking.ignore_period_minutes);

    if tracker.in_ignore_period(now)? {
        msg_info!(Message::AutoIgnoredRecentEvent(source.to_string(), tracking.ignore_period_minutes));
        return Ok(());
    }

    let changed = if arriving {
        tracker.clock_in_with_source(source, now)?
    } else {
        tracker.clock_out_with_source(source, now)?
    };

    if changed && arriving {
        msg_success!(Message::AutoClockIn(source.to_string()));
    } else if changed {
        msg_success!(Message::AutoClockOut(source.to_string()));
    } else {
        msg_info!(Message::AutoNoChange(source.to_string()));
    }
    Ok(())
}

fn handle_status() -> Result<(), Box<dyn Error>> {
    let tracking = match configured_tracking()? {
        Some(tracking) => tracking,
        None => return Ok(()),
    };

    let now = Local::now().naive_local();
    let timer = Timer::new(Events::new()?, CalcCache::new()?);
    let mut tracker = Tracker::new(timer, Tasks::new()?, tracking.ignore_period_minutes);

    msg_print!(Message::AutoIgnoreWindow(tracking.ignore_period_minutes));
    if tracker.in_ignore_period(now)? {
        msg_print!(Message::AutoTriggersSuppressed);
    } else {
        msg_print!(Message::AutoTriggersActive);
    }
    match Tasks::new()?.default_task()? {
        Some(task) => msg_print!(Message::AutoDefaultTask(task.name)),
        None => msg_print!(Message::AutoNoDefaultTask),
    }
    Ok(())
}

fn configured_tracking() -> Result<Option<TrackingConfig>, Box<dyn Error>> {
    let config = Config::read()?;
    if config.tracking.is_none() {
        msg_warning!(Message::AutoTrackingNotConfigured);
    }
    Ok(config.tracking)
}
