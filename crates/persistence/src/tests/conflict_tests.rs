// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the write-boundary availability re-check.
//!
//! These exercise the overlap predicate as evaluated in SQL during
//! `create_booking`, independent of any engine-level pre-check.

use rand::RngExt;
use roombook_domain::{Booking, CanceledBy, RoomId};

use super::{test_booking, test_date, test_persistence};
use crate::{Persistence, PersistenceError};

fn persistence_with_room() -> (Persistence, i64) {
    let mut persistence = test_persistence();
    let room_id: i64 = persistence.create_room("Aurora").unwrap();
    (persistence, room_id)
}

#[test]
fn test_overlapping_booking_is_rejected() {
    let (mut persistence, room_id) = persistence_with_room();

    persistence
        .create_booking(&test_booking(room_id, "hr-1", "09:00", "11:00"))
        .unwrap();
    let result = persistence.create_booking(&test_booking(room_id, "hr-2", "10:00", "12:00"));

    assert_eq!(
        result.err(),
        Some(PersistenceError::SlotConflict {
            room_id,
            booking_date: test_date().iso_string(),
        })
    );
}

#[test]
fn test_contained_slot_is_rejected() {
    let (mut persistence, room_id) = persistence_with_room();

    persistence
        .create_booking(&test_booking(room_id, "hr-1", "09:00", "12:00"))
        .unwrap();
    let result = persistence.create_booking(&test_booking(room_id, "hr-2", "10:00", "11:00"));

    assert!(matches!(
        result,
        Err(PersistenceError::SlotConflict { .. })
    ));
}

#[test]
fn test_boundary_touching_slots_do_not_conflict() {
    let (mut persistence, room_id) = persistence_with_room();

    persistence
        .create_booking(&test_booking(room_id, "hr-1", "09:00", "10:00"))
        .unwrap();

    // [start, end) windows: one ending exactly where the next starts is fine.
    assert!(
        persistence
            .create_booking(&test_booking(room_id, "hr-2", "10:00", "11:00"))
            .is_ok()
    );
    assert!(
        persistence
            .create_booking(&test_booking(room_id, "hr-3", "08:00", "09:00"))
            .is_ok()
    );
}

#[test]
fn test_cancelled_booking_frees_the_slot() {
    let (mut persistence, room_id) = persistence_with_room();

    let first: Booking = persistence
        .create_booking(&test_booking(room_id, "hr-1", "09:00", "10:00"))
        .unwrap();
    persistence
        .cancel_booking(first.booking_id.unwrap(), CanceledBy::User)
        .unwrap();

    let rebooked = persistence.create_booking(&test_booking(room_id, "hr-2", "09:00", "10:00"));
    assert!(rebooked.is_ok());
}

#[test]
fn test_same_slot_in_other_room_does_not_conflict() {
    let mut persistence = test_persistence();
    let aurora: i64 = persistence.create_room("Aurora").unwrap();
    let borealis: i64 = persistence.create_room("Borealis").unwrap();

    persistence
        .create_booking(&test_booking(aurora, "hr-1", "09:00", "10:00"))
        .unwrap();
    let result = persistence.create_booking(&test_booking(borealis, "hr-2", "09:00", "10:00"));

    assert!(result.is_ok());
}

#[test]
fn test_same_slot_on_other_date_does_not_conflict() {
    let (mut persistence, room_id) = persistence_with_room();

    persistence
        .create_booking(&test_booking(room_id, "hr-1", "09:00", "10:00"))
        .unwrap();

    let mut next_day: Booking = test_booking(room_id, "hr-2", "09:00", "10:00");
    next_day.date = "2024-06-11".parse().unwrap();
    assert!(persistence.create_booking(&next_day).is_ok());
}

/// Randomized invariant check: after any sequence of insert attempts,
/// no two stored active bookings for the same room and date overlap.
#[test]
fn test_random_insert_sequence_never_stores_overlap() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut rng = rand::rng();

    for _ in 0..200 {
        let start: u16 = rng.random_range(8 * 60..18 * 60);
        let duration: u16 = rng.random_range(1..=120);
        let end: u16 = (start + duration).min(19 * 60);

        let mut booking: Booking = test_booking(room_id, "hr-1", "09:00", "10:00");
        booking.slot = roombook_domain::TimeSlot::new(
            roombook_domain::ClockTime::from_minutes(start).unwrap(),
            roombook_domain::ClockTime::from_minutes(end).unwrap(),
        )
        .unwrap();

        // Either outcome is fine; the invariant below is what matters.
        let _ = persistence.create_booking(&booking);
    }

    let active = persistence
        .list_active_for_room_date(RoomId::new(room_id), test_date())
        .unwrap();
    for (i, left) in active.iter().enumerate() {
        for right in &active[i + 1..] {
            assert!(
                !left.slot.overlaps(&right.slot),
                "stored active bookings overlap: {} and {}",
                left.slot,
                right.slot
            );
        }
    }
}
