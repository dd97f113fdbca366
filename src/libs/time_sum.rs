//! Signed duration arithmetic for flexitime balances.
//!
//! A [`TimeSum`] keeps hours and minutes in a carry form optimized for
//! repeated add/subtract without per-step sign handling: after balancing,
//! minutes are always in `0..60` and the hour field carries the sign. A
//! quarter hour of deficit is therefore stored as `hours = -1, minutes = 45`
//! and only [`TimeSum::as_minutes`] or the `Display` impl recover the human
//! reading `-0:15`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeSumError {
    #[error("duration components must not be negative: {hours}h {minutes}m")]
    NegativeComponent { hours: i64, minutes: i64 },
    #[error("minutes must be in 0..=59, got {0}")]
    MinutesOutOfRange(i64),
    #[error("malformed duration '{0}', expected H:MM or minutes")]
    Malformed(String),
}

/// Accumulated signed duration in carry form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSum {
    hours: i64,
    minutes: i64,
}

impl TimeSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sum from a signed minute total, already in canonical form.
    pub fn from_minutes(total: i64) -> Self {
        TimeSum {
            hours: total.div_euclid(60),
            minutes: total.rem_euclid(60),
        }
    }

    /// Adds a non-negative amount. Negative components are an error, not a
    /// subtraction in disguise.
    pub fn add(&mut self, hours: i64, minutes: i64) -> Result<(), TimeSumError> {
        if hours < 0 || minutes < 0 {
            return Err(TimeSumError::NegativeComponent { hours, minutes });
        }
        self.hours += hours;
        self.minutes += minutes;
        self.balance();
        Ok(())
    }

    /// Subtracts a non-negative amount.
    pub fn subtract(&mut self, hours: i64, minutes: i64) -> Result<(), TimeSumError> {
        if hours < 0 || minutes < 0 {
            return Err(TimeSumError::NegativeComponent { hours, minutes });
        }
        self.hours -= hours;
        self.minutes -= minutes;
        self.balance();
        Ok(())
    }

    /// Folds another sum in with its own sign. Adding the raw carry-form
    /// fields is exact for negative sums as well, so `None` aside this never
    /// fails.
    pub fn add_or_subtract(&mut self, other: Option<&TimeSum>) {
        if let Some(other) = other {
            self.hours += other.hours;
            self.minutes += other.minutes;
            self.balance();
        }
    }

    /// Assigns from the human form: minutes in `0..=59`, sign on the hours.
    /// A negative hour part with non-zero minutes is converted into carry
    /// form, so `set(-2, 5)` stores negative two hours five minutes.
    pub fn set(&mut self, hours: i64, minutes: i64) -> Result<(), TimeSumError> {
        if !(0..=59).contains(&minutes) {
            return Err(TimeSumError::MinutesOutOfRange(minutes));
        }
        if hours < 0 && minutes > 0 {
            self.hours = hours - 1;
            self.minutes = 60 - minutes;
        } else {
            self.hours = hours;
            self.minutes = minutes;
        }
        Ok(())
    }

    /// Exact signed total in minutes, computed from the carry form.
    pub fn as_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }

    pub fn is_negative(&self) -> bool {
        self.as_minutes() < 0
    }

    fn balance(&mut self) {
        while self.minutes >= 60 {
            self.hours += 1;
            self.minutes -= 60;
        }
        while self.minutes < 0 {
            self.hours -= 1;
            self.minutes += 60;
        }
    }
}

impl fmt::Display for TimeSum {
    /// Renders `H:MM` or `-H:MM`, converting the carry form back into the
    /// human reading. The explicit minus is only needed when the displayed
    /// hour part is zero; otherwise the hour field carries it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hours < 0 {
            let (hours, minutes) = if self.minutes != 0 {
                (self.hours + 1, 60 - self.minutes)
            } else {
                (self.hours, 0)
            };
            if hours == 0 {
                write!(f, "-0:{:02}", minutes)
            } else {
                write!(f, "{}:{:02}", hours, minutes)
            }
        } else {
            write!(f, "{}:{:02}", self.hours, self.minutes)
        }
    }
}

impl FromStr for TimeSum {
    type Err = TimeSumError;

    /// Parses `H:MM`, `-H:MM` or a plain (optionally signed) minute count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        if rest.is_empty() {
            return Err(TimeSumError::Malformed(s.to_string()));
        }
        let total = match rest.split_once(':') {
            Some((h, m)) => {
                let hours: i64 = h.parse().map_err(|_| TimeSumError::Malformed(s.to_string()))?;
                if m.len() != 2 {
                    return Err(TimeSumError::Malformed(s.to_string()));
                }
                let minutes: i64 = m.parse().map_err(|_| TimeSumError::Malformed(s.to_string()))?;
                if hours < 0 || !(0..=59).contains(&minutes) {
                    return Err(TimeSumError::Malformed(s.to_string()));
                }
                hours * 60 + minutes
            }
            None => rest.parse().map_err(|_| TimeSumError::Malformed(s.to_string()))?,
        };
        Ok(TimeSum::from_minutes(if negative { -total } else { total }))
    }
}
