//! Application configuration initialization command.
//!
//! Provides the interactive setup wizard that configures stempel for
//! first-time use: weekday targets, the flexitime reset policy and
//! automatic tracking behavior.

use crate::libs::config::{Config, CONFIG_FILE_NAME};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use clap::Args;
use std::error::Error;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of running the wizard
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(args: InitArgs) -> Result<(), Box<dyn Error>> {
    let storage = DataStorage::new();

    if args.delete {
        let config_path = storage.get_path(CONFIG_FILE_NAME)?;
        if config_path.exists() {
            fs::remove_file(config_path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    msg_print!(Message::DataDirectory(storage.base_path().display().to_string()));
    Ok(())
}
