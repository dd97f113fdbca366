use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::db::tasks::Tasks;
use crate::libs::backup::Backup;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Backup file to restore from
    #[arg(required = true)]
    file: PathBuf,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(args: ImportArgs) -> Result<(), Box<dyn Error>> {
    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmImportWipe.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let mut backup = Backup::new(Events::new()?, Tasks::new()?, CalcCache::new()?);
    let summary = backup.import_from(&args.file)?;

    msg_success!(Message::ImportCompleted(summary.tasks, summary.events));
    Ok(())
}
