// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::macros::format_description;

/// The fixed-width ISO date format used everywhere in the system.
///
/// Because the format is zero-padded, lexicographic comparison of the
/// string form agrees with chronological ordering.
const DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// A wall-clock time of day with minute resolution.
///
/// Times are naive "HH:MM" values in an implicit local timezone; the system
/// performs no timezone normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    /// Minutes since midnight (0..=1439).
    minutes: u16,
}

impl ClockTime {
    /// Creates a `ClockTime` from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClockTime` if `minutes` is 1440 or more.
    pub fn from_minutes(minutes: u16) -> Result<Self, DomainError> {
        if minutes >= 24 * 60 {
            return Err(DomainError::InvalidClockTime(format!("{minutes} minutes")));
        }
        Ok(Self { minutes })
    }

    /// Returns the number of minutes since midnight.
    #[must_use]
    pub const fn minutes_from_midnight(&self) -> u16 {
        self.minutes
    }

    /// Returns the hour component (0..=23).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    /// Returns the minute component (0..=59).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }
}

impl FromStr for ClockTime {
    type Err = DomainError;

    /// Parses a 24-hour "HH:MM" time string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidClockTime(s.to_string());

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(invalid)?;
        if hour_part.len() != 2 || minute_part.len() != 2 {
            return Err(invalid());
        }
        let hour: u16 = hour_part.parse().map_err(|_| invalid())?;
        let minute: u16 = minute_part.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A calendar date in ISO "YYYY-MM-DD" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate {
    date: time::Date,
}

impl BookingDate {
    /// Creates a `BookingDate` from a `time::Date`.
    #[must_use]
    pub const fn new(date: time::Date) -> Self {
        Self { date }
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn date(&self) -> time::Date {
        self.date
    }

    /// Returns the ISO "YYYY-MM-DD" string form.
    #[must_use]
    pub fn iso_string(&self) -> String {
        self.to_string()
    }

    /// Returns the Sunday-aligned start of the week containing this date.
    ///
    /// Week periods run Sunday through Saturday: the week start is this
    /// date minus its Sunday-based weekday number.
    #[must_use]
    pub fn week_start(&self) -> Self {
        let days_from_sunday = i64::from(self.date.weekday().number_days_from_sunday());
        Self {
            date: self.date.saturating_sub(time::Duration::days(days_from_sunday)),
        }
    }
}

impl FromStr for BookingDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = time::Date::parse(s, DATE_FORMAT).map_err(|e| DomainError::InvalidDate {
            date_string: s.to_string(),
            error: e.to_string(),
        })?;
        Ok(Self { date })
    }
}

impl std::fmt::Display for BookingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.date.year(),
            u8::from(self.date.month()),
            self.date.day()
        )
    }
}

impl Serialize for BookingDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BookingDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A half-open `[start, end)` reservation window within a single day.
///
/// Construction enforces that the end falls strictly after the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSlot {
    start: ClockTime,
    end: ClockTime,
}

impl TimeSlot {
    /// Creates a new `TimeSlot`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeRange` if `end` is not strictly
    /// after `start` in minutes-since-midnight terms.
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self, DomainError> {
        if end.minutes_from_midnight() <= start.minutes_from_midnight() {
            return Err(DomainError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a slot from "HH:MM" start and end strings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidClockTime` if either string is not a
    /// valid time, or `DomainError::InvalidTimeRange` if the end does not
    /// fall strictly after the start.
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        Self::new(start.parse()?, end.parse()?)
    }

    /// Returns the start time.
    #[must_use]
    pub const fn start(&self) -> ClockTime {
        self.start
    }

    /// Returns the end time.
    #[must_use]
    pub const fn end(&self) -> ClockTime {
        self.end
    }

    /// Returns the slot length in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u16 {
        self.end.minutes_from_midnight() - self.start.minutes_from_midnight()
    }

    /// Tests whether two half-open intervals share at least one minute.
    ///
    /// `[s1, e1)` and `[s2, e2)` overlap iff `NOT (e1 <= s2 OR s1 >= e2)`.
    /// Boundary-touching slots (one ends exactly where the other starts)
    /// do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.end.minutes_from_midnight() <= other.start.minutes_from_midnight()
            || self.start.minutes_from_midnight() >= other.end.minutes_from_midnight())
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
