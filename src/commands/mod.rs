pub mod auto;
pub mod balance;
pub mod clock_in;
pub mod clock_out;
pub mod events;
pub mod export;
pub mod flex;
pub mod import;
pub mod init;
pub mod report;
pub mod status;
pub mod task;

use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive configuration wizard")]
    Init(init::InitArgs),
    #[command(about = "Clock in")]
    In(clock_in::InArgs),
    #[command(about = "Clock out")]
    Out(clock_out::OutArgs),
    #[command(about = "Record a signed flexitime adjustment")]
    Flex(flex::FlexArgs),
    #[command(about = "Show clock state and today's numbers")]
    Status,
    #[command(about = "Show the flexitime balance")]
    Balance(balance::BalanceArgs),
    #[command(about = "Per-day report over a period")]
    Report(report::ReportArgs),
    #[command(about = "List, edit or delete events")]
    Events(events::EventsArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Automatic tracking triggers")]
    Auto(auto::AutoArgs),
    #[command(about = "Export all data to a backup file")]
    Export(export::ExportArgs),
    #[command(about = "Restore all data from a backup file")]
    Import(import::ImportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<(), Box<dyn Error>> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::In(args) => clock_in::cmd(args),
            Commands::Out(args) => clock_out::cmd(args),
            Commands::Flex(args) => flex::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Balance(args) => balance::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Events(args) => events::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Auto(args) => auto::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
        }
    }
}
