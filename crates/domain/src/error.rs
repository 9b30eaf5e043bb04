// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::times::ClockTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A wall-clock time string could not be parsed as "HH:MM".
    InvalidClockTime(String),
    /// A calendar date string could not be parsed as "YYYY-MM-DD".
    InvalidDate {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A time slot's end does not fall strictly after its start.
    InvalidTimeRange {
        /// The requested start time.
        start: ClockTime,
        /// The requested end time.
        end: ClockTime,
    },
    /// A booking status string is not recognized.
    InvalidStatus(String),
    /// A canceled-by string is not recognized.
    InvalidCanceledBy(String),
    /// A booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: &'static str,
        /// The requested status.
        to: &'static str,
    },
    /// A requester or creator identifier is empty.
    InvalidActorId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime(value) => {
                write!(f, "Invalid time '{value}': expected \"HH:MM\" (24-hour)")
            }
            Self::InvalidDate { date_string, error } => {
                write!(f, "Invalid date '{date_string}': {error}")
            }
            Self::InvalidTimeRange { start, end } => {
                write!(f, "Invalid time range: end {end} must be after start {start}")
            }
            Self::InvalidStatus(value) => write!(f, "Invalid booking status: {value}"),
            Self::InvalidCanceledBy(value) => write!(f, "Invalid canceled-by value: {value}"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Booking status cannot transition from '{from}' to '{to}'")
            }
            Self::InvalidActorId(msg) => write!(f, "Invalid actor id: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
