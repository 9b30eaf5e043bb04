// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::rooms;
use crate::error::PersistenceError;
use crate::sqlite;

/// Creates a new room.
///
/// Room names are unique; attempting to reuse a name fails with
/// `RoomNameTaken`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The room's display name
///
/// # Returns
///
/// The canonical `room_id` assigned to the new room.
///
/// # Errors
///
/// Returns an error if the name is already taken or the insert fails.
pub fn create_room(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    info!("Creating room: {}", name);

    let inserted: usize = diesel::insert_into(rooms::table)
        .values(rooms::name.eq(name))
        .execute(conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => PersistenceError::RoomNameTaken(name.to_string()),
            other => other.into(),
        })?;

    if inserted == 0 {
        return Err(PersistenceError::QueryFailed(format!(
            "Room insert affected no rows for name: {name}"
        )));
    }

    let room_id: i64 = sqlite::get_last_insert_rowid(conn)?;

    info!(room_id, "Room created successfully");
    Ok(room_id)
}
