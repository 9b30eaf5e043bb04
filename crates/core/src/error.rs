// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::{BookingDate, DomainError, RoomId, TimeSlot};

/// Errors that can occur during reservation decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated (invalid time range, terminal status, ...).
    DomainViolation(DomainError),
    /// The requested slot conflicts with an existing active booking.
    SlotConflict {
        /// The room that was requested.
        room: RoomId,
        /// The date that was requested.
        date: BookingDate,
        /// The requested time window.
        slot: TimeSlot,
    },
    /// The acting user is not permitted to perform this operation.
    Forbidden {
        /// The action that was attempted.
        action: &'static str,
        /// A human-readable description of the violation.
        reason: String,
    },
    /// An operation required a persisted booking but got one without an id.
    UnpersistedBooking,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::SlotConflict { room, date, slot } => {
                write!(f, "Room {room} is unavailable on {date} for {slot}")
            }
            Self::Forbidden { action, reason } => {
                write!(f, "Forbidden: '{action}': {reason}")
            }
            Self::UnpersistedBooking => {
                write!(f, "Operation requires a booking with a persisted id")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
