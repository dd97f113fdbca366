//! Application configuration: weekly work targets, the flexitime reset
//! policy and automatic tracking behavior.
//!
//! ## Storage
//!
//! Configuration lives in a JSON file inside the platform application data
//! directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\webersys\stempel\config.json`
//! - **macOS**: `~/Library/Application Support/webersys/stempel/config.json`
//! - **Linux**: `~/.local/share/webersys/stempel/config.json`
//!
//! Every section carries a default, so a missing or partial file still
//! yields a working configuration: Monday through Friday at eight hours,
//! no balance reset, automatic tracking off.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stempel::libs::config::Config;
//!
//! let config = Config::read()?;
//! let target = config.week.target_for(chrono::Local::now().date_naive());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::flexi_reset::FlexiReset;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::{Datelike, NaiveDate, Weekday};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Daily target applied to workdays when none has been configured yet.
const DEFAULT_WORKDAY_MINUTES: i64 = 480;

/// Wizard ordering of weekdays, matching the `WeekPlan` field order.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const WEEKDAY_NAMES: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// A configurable section shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: &'static str,
    pub name: &'static str,
}

/// Work requirement for a single weekday.
///
/// Free days keep a zero target; on them the balance can only grow. The
/// `workday` flag is what the day calculator consults when deciding whether
/// a day without events still owes its target.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayTarget {
    pub workday: bool,
    /// Required minutes; zero on free days.
    pub minutes: i64,
}

impl DayTarget {
    pub fn working(minutes: i64) -> Self {
        Self { workday: true, minutes }
    }

    pub fn free() -> Self {
        Self { workday: false, minutes: 0 }
    }
}

/// Per-weekday targets for one week, applied uniformly to every calendar
/// week. There is no notion of holidays; a day off is modelled by clocking
/// nothing and absorbing the negative delta, or by a FLEX adjustment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekPlan {
    pub monday: DayTarget,
    pub tuesday: DayTarget,
    pub wednesday: DayTarget,
    pub thursday: DayTarget,
    pub friday: DayTarget,
    pub saturday: DayTarget,
    pub sunday: DayTarget,
}

impl Default for WeekPlan {
    /// Monday through Friday at eight hours, weekend free.
    fn default() -> Self {
        WeekPlan {
            monday: DayTarget::working(DEFAULT_WORKDAY_MINUTES),
            tuesday: DayTarget::working(DEFAULT_WORKDAY_MINUTES),
            wednesday: DayTarget::working(DEFAULT_WORKDAY_MINUTES),
            thursday: DayTarget::working(DEFAULT_WORKDAY_MINUTES),
            friday: DayTarget::working(DEFAULT_WORKDAY_MINUTES),
            saturday: DayTarget::free(),
            sunday: DayTarget::free(),
        }
    }
}

impl WeekPlan {
    pub fn for_weekday(&self, weekday: Weekday) -> DayTarget {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Target for a concrete calendar day.
    pub fn target_for(&self, day: NaiveDate) -> DayTarget {
        self.for_weekday(day.weekday())
    }

    fn set_weekday(&mut self, weekday: Weekday, target: DayTarget) {
        match weekday {
            Weekday::Mon => self.monday = target,
            Weekday::Tue => self.tuesday = target,
            Weekday::Wed => self.wednesday = target,
            Weekday::Thu => self.thursday = target,
            Weekday::Fri => self.friday = target,
            Weekday::Sat => self.saturday = target,
            Weekday::Sun => self.sunday = target,
        }
    }
}

/// Automatic tracking trigger settings.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackingConfig {
    /// Triggers arriving within this many minutes of the latest recorded
    /// event are dropped, absorbing signal flapping at a boundary.
    pub ignore_period_minutes: i64,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        TrackingConfig { ignore_period_minutes: 5 }
    }
}

/// Root configuration object.
///
/// The week plan and reset policy always carry values so the engine never
/// has to deal with a half-configured setup. Automatic tracking stays
/// `None` until explicitly enabled; `skip_serializing_if` keeps it out of
/// the JSON file until then.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub week: WeekPlan,

    #[serde(default)]
    pub flexi_reset: FlexiReset,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<TrackingConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error; it yields `Config::default()`. A
    /// present but unparsable file is reported, so a typo in a hand-edited
    /// file never silently falls back to defaults.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|err| msg_error_anyhow!(Message::ConfigParseError(err.to_string())))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data
    /// directory on first use.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard.
    ///
    /// Presents the configurable sections, collects values for the selected
    /// ones with current settings as defaults, and returns the updated
    /// configuration for the caller to save.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule { key: "week", name: "Week plan" },
            ConfigModule { key: "balance", name: "Balance reset" },
            ConfigModule { key: "tracking", name: "Automatic tracking" },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key {
                "week" => {
                    msg_print!(Message::ConfigModuleWeek);
                    let checked: Vec<bool> = WEEKDAYS.iter().map(|&weekday| config.week.for_weekday(weekday).workday).collect();
                    let workdays = MultiSelect::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSelectWorkdays.to_string())
                        .items(&WEEKDAY_NAMES)
                        .defaults(&checked)
                        .interact()?;

                    let current = config.week.for_weekday(Weekday::Mon);
                    let minutes: i64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptWorkdayTarget.to_string())
                        .default(if current.workday { current.minutes } else { DEFAULT_WORKDAY_MINUTES })
                        .interact_text()?;

                    let mut week = WeekPlan::default();
                    for (index, &weekday) in WEEKDAYS.iter().enumerate() {
                        let target = if workdays.contains(&index) { DayTarget::working(minutes) } else { DayTarget::free() };
                        week.set_weekday(weekday, target);
                    }
                    config.week = week;
                }

                "balance" => {
                    msg_print!(Message::ConfigModuleBalance);
                    let policies = [
                        FlexiReset::None,
                        FlexiReset::Daily,
                        FlexiReset::Weekly,
                        FlexiReset::Monthly,
                        FlexiReset::Quarterly,
                        FlexiReset::HalfYearly,
                        FlexiReset::Yearly,
                    ];
                    let labels: Vec<String> = policies.iter().map(|policy| policy.to_string()).collect();
                    let current = policies.iter().position(|&policy| policy == config.flexi_reset).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptFlexiReset.to_string())
                        .items(&labels)
                        .default(current)
                        .interact()?;
                    config.flexi_reset = policies[choice];
                }

                "tracking" => {
                    msg_print!(Message::ConfigModuleTracking);
                    let default = config.tracking.unwrap_or_default();
                    config.tracking = Some(TrackingConfig {
                        ignore_period_minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTrackingIgnore.to_string())
                            .default(default.ignore_period_minutes)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
