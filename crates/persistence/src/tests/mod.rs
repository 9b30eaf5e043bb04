// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod conflict_tests;
mod initialization_tests;

use roombook_domain::{Booking, BookingDate, RoomId, TimeSlot};

use crate::Persistence;

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn test_date() -> BookingDate {
    "2024-06-10".parse().unwrap()
}

pub fn test_slot(start: &str, end: &str) -> TimeSlot {
    TimeSlot::parse(start, end).unwrap()
}

pub fn test_booking(room_id: i64, requester: &str, start: &str, end: &str) -> Booking {
    Booking::new(
        RoomId::new(room_id),
        requester.to_string(),
        test_date(),
        test_slot(start, end),
        Some("Standup".to_string()),
        4,
        requester.to_string(),
    )
}
