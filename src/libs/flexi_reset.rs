//! Flexitime reset policy: how often the running balance snaps back to zero.
//!
//! The policy answers two questions for any calendar day: is this day a
//! reset day, and on which day did the accumulation window containing it
//! begin. Both are total functions over valid dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlexiReset {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl FlexiReset {
    /// True when the balance restarts from zero at the beginning of `day`.
    ///
    /// Weeks reset on Monday, months on the 1st, quarters on Jan/Apr/Jul/Oct
    /// 1st, half years on Jan/Jul 1st, years on January 1st.
    pub fn is_reset_day(&self, day: NaiveDate) -> bool {
        match self {
            FlexiReset::None => false,
            FlexiReset::Daily => true,
            FlexiReset::Weekly => day.weekday() == Weekday::Mon,
            FlexiReset::Monthly => day.day() == 1,
            FlexiReset::Quarterly => day.month() % 3 == 1 && day.day() == 1,
            FlexiReset::HalfYearly => day.month() % 6 == 1 && day.day() == 1,
            FlexiReset::Yearly => day.ordinal() == 1,
        }
    }

    /// First day of the accumulation window containing `day`.
    ///
    /// `None` anchors at the origin. `Yearly` deliberately does the same
    /// rather than returning Jan 1 of `day`'s year; its yearly marker only
    /// affects [`FlexiReset::is_reset_day`]. Callers clamp the result to
    /// their first recorded day before walking.
    pub fn last_reset_day(&self, day: NaiveDate) -> NaiveDate {
        match self {
            FlexiReset::None | FlexiReset::Yearly => NaiveDate::MIN,
            FlexiReset::Daily => day,
            FlexiReset::Weekly => day - Duration::days(day.weekday().num_days_from_monday() as i64),
            FlexiReset::Monthly => day.with_day(1).unwrap_or(day),
            FlexiReset::Quarterly => interval_start(day, 3),
            FlexiReset::HalfYearly => interval_start(day, 6),
        }
    }
}

/// First day of the `months`-long interval containing `day`, with intervals
/// anchored at January.
fn interval_start(day: NaiveDate, months: u32) -> NaiveDate {
    let start_month = ((day.month() - 1) / months) * months + 1;
    day.with_day(1).and_then(|first| first.with_month(start_month)).unwrap_or(day)
}

impl fmt::Display for FlexiReset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            FlexiReset::None => "NONE",
            FlexiReset::Daily => "DAILY",
            FlexiReset::Weekly => "WEEKLY",
            FlexiReset::Monthly => "MONTHLY",
            FlexiReset::Quarterly => "QUARTERLY",
            FlexiReset::HalfYearly => "HALF_YEARLY",
            FlexiReset::Yearly => "YEARLY",
        };
        write!(f, "{}", label)
    }
}
