//! Core library modules for the stempel application.
//!
//! Serves as the main entry point for all stempel library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Time Engine**: Day calculation, flexitime balance, period ranges
//! - **Tracking**: Manual timer operations, automatic trigger handling
//! - **Data Management**: Task lifecycle, reporting, backup artifacts
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stempel::db::events::Events;
//! use stempel::db::calc_cache::CalcCache;
//! use stempel::libs::timer::Timer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut timer = Timer::new(Events::new()?, CalcCache::new()?);
//! timer.clock_in(chrono::Local::now().naive_local(), None, None)?;
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod balance;
pub mod config;
pub mod data_storage;
pub mod day_calc;
pub mod event;
pub mod flexi_reset;
pub mod messages;
pub mod period;
pub mod report;
pub mod task;
pub mod time_sum;
pub mod timer;
pub mod tracker;
pub mod view;
