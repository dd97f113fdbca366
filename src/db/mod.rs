//! Database layer for the stempel application.
//!
//! SQLite-backed stores, one module per table, each owning its own
//! connection to the shared database file. Schemas are created lazily with
//! `CREATE TABLE IF NOT EXISTS` on first store construction.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stempel::db::events::{Events, NewEvent};
//! use chrono::Local;
//!
//! let mut events = Events::new()?;
//! events.insert(&NewEvent::clock_out(Local::now().naive_local()))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Core database connection module; resolves the database file inside the
/// platform data directory.
pub mod db;

/// Clock event records.
pub mod events;

/// Per-day (worked, target) cache rows for the balance walk.
pub mod calc_cache;

/// Task records.
pub mod tasks;
