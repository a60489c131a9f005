use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Academic week number.
pub type Week = u32;
/// Overlap magnitudes and meeting durations.
pub type Minutes = u32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TimeParseError {
    #[error("unknown weekday `{0}`")]
    UnknownWeekday(String),
    #[error("malformed clock value `{0}`")]
    MalformedClock(String),
    #[error("clock value {0} out of range")]
    ClockOutOfRange(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(Weekday::Monday),
            "tuesday" => Ok(Weekday::Tuesday),
            "wednesday" => Ok(Weekday::Wednesday),
            "thursday" => Ok(Weekday::Thursday),
            "friday" => Ok(Weekday::Friday),
            "saturday" => Ok(Weekday::Saturday),
            "sunday" => Ok(Weekday::Sunday),
            _ => Err(TimeParseError::UnknownWeekday(s.to_string())),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time of day as minutes since midnight.
///
/// Catalog data carries 4-digit 24h clock values ("1400"); those are parsed
/// here exactly once, so every later comparison is numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Parse a 4-digit clock string, e.g. "1400" -> 840 minutes.
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeParseError::MalformedClock(s.to_string()));
        }
        let clock = s
            .parse::<u16>()
            .map_err(|_| TimeParseError::MalformedClock(s.to_string()))?;
        Self::from_clock(clock)
    }

    /// Numeric 4-digit clock value, e.g. 1400 -> 840 minutes.
    pub fn from_clock(clock: u16) -> Result<Self, TimeParseError> {
        let (hour, minute) = (clock / 100, clock % 100);
        if hour >= 24 || minute >= 60 {
            return Err(TimeParseError::ClockOutOfRange(clock));
        }
        Ok(TimeOfDay(hour * 60 + minute))
    }

    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, TimeParseError> {
        if hour >= 24 || minute >= 60 {
            return Err(TimeParseError::ClockOutOfRange(hour * 100 + minute));
        }
        Ok(TimeOfDay(hour * 60 + minute))
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour(), self.minute())
    }
}
