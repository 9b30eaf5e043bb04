// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ActorContext, ActorRole};
use roombook_domain::{Booking, CanceledBy, RoomId, TimeSlot};

/// Builds a persisted active booking for one room/date/slot.
pub fn create_test_booking(
    booking_id: i64,
    room: i64,
    requester: &str,
    date: &str,
    start: &str,
    end: &str,
) -> Booking {
    let mut booking: Booking = Booking::new(
        RoomId::new(room),
        String::from(requester),
        date.parse().unwrap(),
        TimeSlot::parse(start, end).unwrap(),
        None,
        0,
        String::from(requester),
    );
    booking.booking_id = Some(booking_id);
    booking
}

/// Builds a persisted cancelled booking for one room/date/slot.
pub fn create_cancelled_booking(
    booking_id: i64,
    room: i64,
    requester: &str,
    date: &str,
    start: &str,
    end: &str,
) -> Booking {
    let mut booking: Booking = create_test_booking(booking_id, room, requester, date, start, end);
    booking.cancel(CanceledBy::User).unwrap();
    booking
}

pub fn create_admin_actor(actor_id: &str) -> ActorContext {
    ActorContext::new(String::from(actor_id), ActorRole::Admin)
}

pub fn create_hr_actor(actor_id: &str) -> ActorContext {
    ActorContext::new(String::from(actor_id), ActorRole::Hr)
}
