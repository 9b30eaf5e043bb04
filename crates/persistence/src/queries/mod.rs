// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-path operations.

pub mod bookings;
pub mod rooms;

pub use bookings::{BookingFilter, get_booking, list_active_for_room_date, list_bookings};
pub use rooms::{get_room, list_rooms, room_exists};
