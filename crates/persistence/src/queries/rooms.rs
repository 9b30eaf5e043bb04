// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::RoomData;
use crate::diesel_schema::rooms;
use crate::error::PersistenceError;

/// Checks whether a room with the given ID exists.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn room_exists(conn: &mut SqliteConnection, room_id: i64) -> Result<bool, PersistenceError> {
    let count: i64 = rooms::table
        .filter(rooms::room_id.eq(room_id))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Retrieves a room by ID.
///
/// # Errors
///
/// Returns `RoomNotFound` if no such room exists.
pub fn get_room(conn: &mut SqliteConnection, room_id: i64) -> Result<RoomData, PersistenceError> {
    rooms::table
        .filter(rooms::room_id.eq(room_id))
        .first::<RoomData>(conn)
        .optional()?
        .ok_or(PersistenceError::RoomNotFound(room_id))
}

/// Lists all rooms ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rooms(conn: &mut SqliteConnection) -> Result<Vec<RoomData>, PersistenceError> {
    Ok(rooms::table.order(rooms::room_id.asc()).load(conn)?)
}
