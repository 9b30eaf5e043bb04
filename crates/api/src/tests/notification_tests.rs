// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification routing and best-effort delivery tests.

use roombook_notify::{NotificationKind, Recipient};

use super::helpers::{
    RecordingNotifier, booking_request, create_test_admin, create_test_hr, persistence_with_room,
};
use crate::{CancelBookingRequest, cancel_booking, create_booking};

#[test]
fn test_creation_notifies_admins_and_requester() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();

    let created = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &create_test_hr("hr-1"),
    )
    .unwrap();

    assert_eq!(notifier.delivered.len(), 2);
    assert!(
        notifier
            .delivered
            .iter()
            .all(|n| n.kind == NotificationKind::BookingCreated
                && n.booking_id == created.booking.booking_id)
    );
    assert!(
        notifier
            .delivered
            .iter()
            .any(|n| n.recipient == Recipient::AllAdmins)
    );
    assert!(
        notifier
            .delivered
            .iter()
            .any(|n| n.recipient == Recipient::User(String::from("hr-1")))
    );
}

#[test]
fn test_admin_cancellation_notifies_requester_only() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();

    let created = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &create_test_hr("hr-1"),
    )
    .unwrap();
    notifier.delivered.clear();

    cancel_booking(
        &mut persistence,
        &mut notifier,
        &CancelBookingRequest {
            booking_id: created.booking.booking_id,
        },
        &create_test_admin(),
    )
    .unwrap();

    assert_eq!(notifier.delivered.len(), 1);
    assert_eq!(notifier.delivered[0].kind, NotificationKind::BookingCanceled);
    assert_eq!(
        notifier.delivered[0].recipient,
        Recipient::User(String::from("hr-1"))
    );
}

#[test]
fn test_self_cancellation_notifies_admins_only() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();
    let hr = create_test_hr("hr-1");

    let created = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &hr,
    )
    .unwrap();
    notifier.delivered.clear();

    cancel_booking(
        &mut persistence,
        &mut notifier,
        &CancelBookingRequest {
            booking_id: created.booking.booking_id,
        },
        &hr,
    )
    .unwrap();

    assert_eq!(notifier.delivered.len(), 1);
    assert_eq!(notifier.delivered[0].recipient, Recipient::AllAdmins);
}

#[test]
fn test_delivery_failure_does_not_fail_the_operation() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::failing();

    let result = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &create_test_hr("hr-1"),
    );

    assert!(result.is_ok());
    // The booking landed despite the outage.
    let booking_id: i64 = result.unwrap().booking.booking_id;
    assert!(persistence.get_booking(booking_id).unwrap().is_active());
}
