// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations.
//!
//! Creation re-validates availability inside a write transaction. The
//! engine-level check is advisory only; between it and the insert another
//! writer may have taken the slot, so the conflict predicate runs again
//! here under `BEGIN IMMEDIATE` where it cannot race.

use diesel::prelude::*;
use diesel::SqliteConnection;
use roombook_domain::{Booking, BookingStatus, CanceledBy};
use tracing::{debug, info};

use crate::diesel_schema::{bookings, rooms};
use crate::error::PersistenceError;
use crate::queries;
use crate::sqlite;

/// Persists a new booking after re-checking slot availability.
///
/// Runs inside an immediate transaction: the room-existence check, the
/// overlap re-query, and the insert observe one consistent snapshot and
/// hold the write lock until commit.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking` - The validated, unpersisted booking to store
///
/// # Returns
///
/// The stored booking with its canonical `booking_id` and timestamps.
///
/// # Errors
///
/// Returns `RoomNotFound` if the room does not exist, `SlotConflict` if
/// an active booking for the same room and date overlaps the requested
/// slot, or a database error if the insert fails.
pub fn create_booking(
    conn: &mut SqliteConnection,
    booking: &Booking,
) -> Result<Booking, PersistenceError> {
    let room_id: i64 = booking.room.value();
    let date_string: String = booking.date.iso_string();
    let start: i32 = i32::from(booking.slot.start().minutes_from_midnight());
    let end: i32 = i32::from(booking.slot.end().minutes_from_midnight());

    debug!(
        room_id,
        date = %date_string,
        slot = %booking.slot,
        "Persisting booking"
    );

    conn.immediate_transaction(|conn| {
        let room_exists: i64 = rooms::table
            .filter(rooms::room_id.eq(room_id))
            .count()
            .get_result(conn)?;
        if room_exists == 0 {
            return Err(PersistenceError::RoomNotFound(room_id));
        }

        // Half-open overlap: [s1, e1) and [s2, e2) collide iff
        // e2 > s1 AND s2 < e1. Cancelled rows never count.
        let conflicting: i64 = bookings::table
            .filter(bookings::room_id.eq(room_id))
            .filter(bookings::booking_date.eq(&date_string))
            .filter(bookings::status.eq(BookingStatus::Booked.as_str()))
            .filter(bookings::end_minute.gt(start))
            .filter(bookings::start_minute.lt(end))
            .count()
            .get_result(conn)?;
        if conflicting > 0 {
            return Err(PersistenceError::SlotConflict {
                room_id,
                booking_date: date_string.clone(),
            });
        }

        let attendees: i32 = i32::try_from(booking.attendees_count).map_err(|_| {
            PersistenceError::QueryFailed(format!(
                "attendees_count out of range: {}",
                booking.attendees_count
            ))
        })?;

        diesel::insert_into(bookings::table)
            .values((
                bookings::room_id.eq(room_id),
                bookings::requester_id.eq(&booking.requester),
                bookings::booking_date.eq(&date_string),
                bookings::start_minute.eq(start),
                bookings::end_minute.eq(end),
                bookings::purpose.eq(booking.purpose.as_deref()),
                bookings::attendees_count.eq(attendees),
                bookings::status.eq(BookingStatus::Booked.as_str()),
                bookings::created_by.eq(&booking.created_by),
            ))
            .execute(conn)?;

        let booking_id: i64 = sqlite::get_last_insert_rowid(conn)?;

        info!(booking_id, room_id, "Booking created successfully");
        queries::bookings::get_booking(conn, booking_id)
    })
}

/// Applies the `booked` → `cancelled` transition to a stored booking.
///
/// The update is guarded on the current status so the transition is
/// applied at most once even under concurrent cancellation attempts.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `booking_id` - The booking to cancel
/// * `canceled_by` - Which kind of actor performed the cancellation
///
/// # Returns
///
/// The booking in its cancelled state.
///
/// # Errors
///
/// Returns `BookingNotFound` if no such booking exists, or
/// `BookingAlreadyCancelled` if the transition was already applied.
pub fn cancel_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
    canceled_by: CanceledBy,
) -> Result<Booking, PersistenceError> {
    debug!(booking_id, canceled_by = %canceled_by, "Cancelling booking");

    conn.immediate_transaction(|conn| {
        let updated: usize = diesel::update(bookings::table)
            .filter(bookings::booking_id.eq(booking_id))
            .filter(bookings::status.eq(BookingStatus::Booked.as_str()))
            .set((
                bookings::status.eq(BookingStatus::Cancelled.as_str()),
                bookings::canceled_by.eq(canceled_by.as_str()),
                bookings::canceled_at.eq(diesel::dsl::sql::<
                    diesel::sql_types::Nullable<diesel::sql_types::Text>,
                >("CURRENT_TIMESTAMP")),
                bookings::updated_at
                    .eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
            ))
            .execute(conn)?;

        if updated == 0 {
            let exists: i64 = bookings::table
                .filter(bookings::booking_id.eq(booking_id))
                .count()
                .get_result(conn)?;
            if exists == 0 {
                return Err(PersistenceError::BookingNotFound(booking_id));
            }
            return Err(PersistenceError::BookingAlreadyCancelled(booking_id));
        }

        info!(booking_id, "Booking cancelled");
        queries::bookings::get_booking(conn, booking_id)
    })
}
