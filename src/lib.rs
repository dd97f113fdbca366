//! # Stempel - Flexitime Clock and Balance Tracking
//!
//! A command-line utility for punching a work clock, deriving per-day
//! worked time against weekly targets, and keeping a running flexitime
//! balance with configurable reset policies.
//!
//! ## Features
//!
//! - **Clock Events**: Manual and automatic clock-in/out, FLEX adjustments
//! - **Balance Engine**: Cached per-day balance since the last reset boundary
//! - **Task Management**: Book sessions on tasks, default task for triggers
//! - **Report Generation**: Per-day tables over symbolic periods, CSV export
//! - **Backup**: Delimited full export and restore of tasks and events
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stempel::commands::Cli;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
