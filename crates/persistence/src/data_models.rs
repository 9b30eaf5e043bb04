// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use roombook_domain::{
    Booking, BookingDate, BookingStatus, CanceledBy, ClockTime, RoomId, TimeSlot,
};

use crate::error::PersistenceError;

/// A room row as stored in the database.
#[derive(Debug, Clone, Queryable)]
pub struct RoomData {
    pub room_id: i64,
    pub name: String,
    pub created_at: String,
}

/// A booking row as stored in the database.
///
/// Times are stored as minutes since midnight; `into_domain` converts
/// them back to validated domain values.
#[derive(Debug, Clone, Queryable)]
pub struct BookingRow {
    pub booking_id: i64,
    pub room_id: i64,
    pub requester_id: String,
    pub booking_date: String,
    pub start_minute: i32,
    pub end_minute: i32,
    pub purpose: Option<String>,
    pub attendees_count: i32,
    pub status: String,
    pub canceled_by: Option<String>,
    pub canceled_at: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

impl BookingRow {
    /// Converts a stored row back into a domain `Booking`.
    ///
    /// # Errors
    ///
    /// Returns `ReconstructionError` if any stored field fails domain
    /// validation. This indicates database corruption or a schema mismatch.
    pub fn into_domain(self) -> Result<Booking, PersistenceError> {
        let date: BookingDate = self.booking_date.parse().map_err(reconstruction_error)?;
        let start: ClockTime = minute_field(self.start_minute, "start_minute")?;
        let end: ClockTime = minute_field(self.end_minute, "end_minute")?;
        let slot: TimeSlot = TimeSlot::new(start, end).map_err(reconstruction_error)?;
        let status: BookingStatus = self.status.parse().map_err(reconstruction_error)?;
        let canceled_by: Option<CanceledBy> = self
            .canceled_by
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(reconstruction_error)?;
        let attendees_count: u32 = u32::try_from(self.attendees_count).map_err(|_| {
            PersistenceError::ReconstructionError(format!(
                "attendees_count out of range: {}",
                self.attendees_count
            ))
        })?;

        let mut booking: Booking = Booking::new(
            RoomId::new(self.room_id),
            self.requester_id,
            date,
            slot,
            self.purpose,
            attendees_count,
            self.created_by,
        );
        booking.booking_id = Some(self.booking_id);
        booking.status = status;
        booking.canceled_by = canceled_by;
        booking.canceled_at = self.canceled_at;
        booking.created_at = Some(self.created_at);
        booking.updated_at = Some(self.updated_at);

        Ok(booking)
    }
}

fn reconstruction_error<E: std::fmt::Display>(err: E) -> PersistenceError {
    PersistenceError::ReconstructionError(err.to_string())
}

fn minute_field(value: i32, field: &str) -> Result<ClockTime, PersistenceError> {
    let minutes: u16 = u16::try_from(value).map_err(|_| {
        PersistenceError::ReconstructionError(format!("{field} out of range: {value}"))
    })?;
    ClockTime::from_minutes(minutes).map_err(reconstruction_error)
}
