// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the roombook system.
//!
//! This crate stores rooms and bookings in `SQLite` via Diesel. It owns the
//! authoritative availability check: booking creation re-validates the
//! requested slot inside a write transaction, so the engine-level check can
//! never admit a conflicting reservation through a race.
//!
//! ## Storage Representation
//!
//! Slot times are stored as integer minutes since midnight rather than
//! "HH:MM" strings. The overlap re-check then reduces to two integer
//! comparisons that `SQLite` can evaluate against the
//! `(room_id, booking_date, status)` index.
//!
//! ## Testing
//!
//! Tests run against unique shared in-memory databases. Each
//! `new_in_memory()` call receives a sequentially-numbered database name,
//! so parallel tests never observe each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use roombook_domain::{Booking, BookingDate, CanceledBy, RoomId};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::RoomData;
pub use error::PersistenceError;
pub use queries::BookingFilter;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based collisions.
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for rooms and bookings.
///
/// Owns a single `SQLite` connection; all reads and writes go through it.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;

        // WAL mode for better read concurrency on file-based databases.
        sqlite::enable_wal_mode(&mut conn)?;

        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure
    /// referential integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Rooms
    // ========================================================================

    /// Creates a new room.
    ///
    /// # Arguments
    ///
    /// * `name` - The room's display name (unique)
    ///
    /// # Returns
    ///
    /// The canonical `room_id` assigned to the new room.
    ///
    /// # Errors
    ///
    /// Returns `RoomNameTaken` if a room with this name already exists.
    pub fn create_room(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::create_room(&mut self.conn, name)
    }

    /// Checks whether a room with the given ID exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn room_exists(&mut self, room: RoomId) -> Result<bool, PersistenceError> {
        queries::room_exists(&mut self.conn, room.value())
    }

    /// Retrieves a room by ID.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if no such room exists.
    pub fn get_room(&mut self, room: RoomId) -> Result<RoomData, PersistenceError> {
        queries::get_room(&mut self.conn, room.value())
    }

    /// Lists all rooms ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_rooms(&mut self) -> Result<Vec<RoomData>, PersistenceError> {
        queries::list_rooms(&mut self.conn)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Persists a new booking after re-checking slot availability.
    ///
    /// The room-existence check, the overlap re-query, and the insert run
    /// inside one immediate transaction.
    ///
    /// # Arguments
    ///
    /// * `booking` - The validated, unpersisted booking to store
    ///
    /// # Returns
    ///
    /// The stored booking with its canonical `booking_id` and timestamps.
    ///
    /// # Errors
    ///
    /// Returns `RoomNotFound` if the room does not exist, or `SlotConflict`
    /// if an active booking overlaps the requested slot.
    pub fn create_booking(&mut self, booking: &Booking) -> Result<Booking, PersistenceError> {
        mutations::create_booking(&mut self.conn, booking)
    }

    /// Applies the `booked` → `cancelled` transition to a stored booking.
    ///
    /// # Arguments
    ///
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
    /// `BookingAlreadyCancelled` if it was already cancelled.
    pub fn cancel_booking(
        &mut self,
        booking_id: i64,
        canceled_by: CanceledBy,
    ) -> Result<Booking, PersistenceError> {
        mutations::cancel_booking(&mut self.conn, booking_id, canceled_by)
    }

    /// Retrieves a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` if no such booking exists.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<Booking, PersistenceError> {
        queries::get_booking(&mut self.conn, booking_id)
    }

    /// Lists the active (`booked`) bookings for a room on a date.
    ///
    /// This is the candidate set for engine-level availability checks.
    ///
    /// # Arguments
    ///
    /// * `room` - The room to check
    /// * `date` - The date to check
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_active_for_room_date(
        &mut self,
        room: RoomId,
        date: BookingDate,
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::list_active_for_room_date(&mut self.conn, room, date)
    }

    /// Lists bookings matching the given filter.
    ///
    /// # Arguments
    ///
    /// * `filter` - Optional date-range, status, and room criteria
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_bookings(&mut self, filter: &BookingFilter) -> Result<Vec<Booking>, PersistenceError> {
        queries::list_bookings(&mut self.conn, filter)
    }
}
