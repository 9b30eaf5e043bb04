// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use roombook_domain::{Booking, BookingDate, BookingStatus, RoomId};

use crate::data_models::BookingRow;
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Optional criteria for listing bookings.
///
/// `None` fields match everything. Date bounds are inclusive; because the
/// stored date strings are zero-padded ISO dates, string comparison agrees
/// with chronological order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingFilter {
    pub start_date: Option<BookingDate>,
    pub end_date: Option<BookingDate>,
    pub status: Option<BookingStatus>,
    pub room: Option<RoomId>,
}

/// Retrieves a booking by ID.
///
/// # Errors
///
/// Returns `BookingNotFound` if no such booking exists, or
/// `ReconstructionError` if the stored row fails domain validation.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Booking, PersistenceError> {
    let row: BookingRow = bookings::table
        .filter(bookings::booking_id.eq(booking_id))
        .first::<BookingRow>(conn)
        .optional()?
        .ok_or(PersistenceError::BookingNotFound(booking_id))?;
    row.into_domain()
}

/// Lists the active (`booked`) bookings for a room on a date.
///
/// This is the candidate set for availability checks: cancelled rows
/// never participate in overlap detection.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row fails domain
/// validation.
pub fn list_active_for_room_date(
    conn: &mut SqliteConnection,
    room: RoomId,
    date: BookingDate,
) -> Result<Vec<Booking>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::room_id.eq(room.value()))
        .filter(bookings::booking_date.eq(date.iso_string()))
        .filter(bookings::status.eq(BookingStatus::Booked.as_str()))
        .order(bookings::start_minute.asc())
        .load(conn)?;
    rows.into_iter().map(BookingRow::into_domain).collect()
}

/// Lists bookings matching the given filter, ordered by date then start
/// time then ID.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row fails domain
/// validation.
pub fn list_bookings(
    conn: &mut SqliteConnection,
    filter: &BookingFilter,
) -> Result<Vec<Booking>, PersistenceError> {
    let mut query = bookings::table.into_boxed();

    if let Some(start) = filter.start_date {
        query = query.filter(bookings::booking_date.ge(start.iso_string()));
    }
    if let Some(end) = filter.end_date {
        query = query.filter(bookings::booking_date.le(end.iso_string()));
    }
    if let Some(status) = filter.status {
        query = query.filter(bookings::status.eq(status.as_str()));
    }
    if let Some(room) = filter.room {
        query = query.filter(bookings::room_id.eq(room.value()));
    }

    let rows: Vec<BookingRow> = query
        .order((
            bookings::booking_date.asc(),
            bookings::start_minute.asc(),
            bookings::booking_id.asc(),
        ))
        .load(conn)?;
    rows.into_iter().map(BookingRow::into_domain).collect()
}
