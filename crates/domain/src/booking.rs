// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::times::{BookingDate, TimeSlot};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical identifier of a room.
///
/// Rooms are owned by an external directory; the booking core only ever
/// checks that a given id resolves to an existing room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId {
    value: i64,
}

impl RoomId {
    /// Creates a new `RoomId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the numeric identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Lifecycle state of a booking.
///
/// The state machine has exactly two states: `booked` (initial, set after
/// the availability check passes) and `cancelled` (terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    /// Active reservation. Participates in overlap detection.
    #[default]
    #[serde(rename = "booked")]
    Booked,
    /// Cancelled reservation. Terminal; excluded from overlap detection.
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl BookingStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Cancelled => "cancelled",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// The only valid transition is `booked` → `cancelled`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!((self, target), (Self::Booked, Self::Cancelled))
    }

    /// Returns whether this booking counts toward overlap detection.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Booked)
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booked" => Ok(Self::Booked),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which kind of actor performed a cancellation.
///
/// Set exactly once, at the `booked` → `cancelled` transition, and
/// immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanceledBy {
    /// Cancelled by an admin-role actor.
    #[serde(rename = "admin")]
    Admin,
    /// Cancelled by the owning hr-role actor.
    #[serde(rename = "user")]
    User,
}

impl CanceledBy {
    /// Converts this value to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for CanceledBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(DomainError::InvalidCanceledBy(s.to_string())),
        }
    }
}

impl std::fmt::Display for CanceledBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A room reservation for a single date and time slot.
///
/// `booking_id` is the canonical identifier assigned by the persistence
/// layer; `None` indicates the booking has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    /// Canonical numeric identifier. `None` before first persistence.
    pub booking_id: Option<i64>,
    /// The room this booking reserves.
    pub room: RoomId,
    /// The user who owns the booking.
    pub requester: String,
    /// The calendar date of the reservation.
    pub date: BookingDate,
    /// The reserved `[start, end)` window.
    pub slot: TimeSlot,
    /// Free-text purpose (optional).
    pub purpose: Option<String>,
    /// Expected number of attendees.
    pub attendees_count: u32,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Who cancelled the booking, set only on cancellation.
    pub canceled_by: Option<CanceledBy>,
    /// Cancellation timestamp (ISO 8601), set only on cancellation.
    pub canceled_at: Option<String>,
    /// The acting user at creation time.
    pub created_by: String,
    /// Creation timestamp (ISO 8601), assigned by persistence.
    pub created_at: Option<String>,
    /// Last-update timestamp (ISO 8601), assigned by persistence.
    pub updated_at: Option<String>,
}

impl Booking {
    /// Creates a new unpersisted `Booking` with status `booked`.
    ///
    /// # Arguments
    ///
    /// * `room` - The room to reserve
    /// * `requester` - The owning user's identifier
    /// * `date` - The reservation date
    /// * `slot` - The reserved time window
    /// * `purpose` - Optional free-text purpose
    /// * `attendees_count` - Expected number of attendees
    /// * `created_by` - The acting user's identifier
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        room: RoomId,
        requester: String,
        date: BookingDate,
        slot: TimeSlot,
        purpose: Option<String>,
        attendees_count: u32,
        created_by: String,
    ) -> Self {
        Self {
            booking_id: None,
            room,
            requester,
            date,
            slot,
            purpose,
            attendees_count,
            status: BookingStatus::Booked,
            canceled_by: None,
            canceled_at: None,
            created_by,
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns whether this booking participates in overlap detection.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Applies the `booked` → `cancelled` transition.
    ///
    /// Sets `canceled_by` according to the cancelling actor. The
    /// cancellation timestamp is assigned by the persistence layer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the booking is
    /// already cancelled; `cancelled` is terminal.
    pub fn cancel(&mut self, by: CanceledBy) -> Result<(), DomainError> {
        if !self.status.can_transition_to(BookingStatus::Cancelled) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status.as_str(),
                to: BookingStatus::Cancelled.as_str(),
            });
        }
        self.status = BookingStatus::Cancelled;
        self.canceled_by = Some(by);
        Ok(())
    }
}
