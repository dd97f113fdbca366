use crate::db::calc_cache::CalcCache;
use crate::db::events::Events;
use crate::db::tasks::Tasks;
use crate::libs::backup::Backup;
use crate::libs::messages::Message;
use crate::msg_success;
use chrono::Local;
use clap::Args;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file; a timestamped name in the current directory when omitted
    file: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<(), Box<dyn Error>> {
    let path = args
        .file
        .unwrap_or_else(|| PathBuf::from(format!("stempel_backup_{}.csv", Local::now().format("%Y%m%d_%H%M%S"))));

    let mut backup = Backup::new(Events::new()?, Tasks::new()?, CalcCache::new()?);
    backup.export_to(&path)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
