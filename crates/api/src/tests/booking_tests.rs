// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end booking lifecycle tests through the API handlers.

use super::helpers::{
    RecordingNotifier, booking_request, create_test_admin, create_test_hr, persistence_with_room,
};
use crate::error::ApiError;
use crate::{
    CancelBookingRequest, CheckAvailabilityRequest, ListBookingsRequest, cancel_booking,
    check_availability, create_booking, list_bookings,
};

#[test]
fn test_create_booking_succeeds_for_free_slot() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();
    let hr = create_test_hr("hr-1");

    let response = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &hr,
    )
    .unwrap();

    assert!(response.booking.booking_id > 0);
    assert_eq!(response.booking.status, "booked");
    assert_eq!(response.booking.requester, "hr-1");
    assert_eq!(response.booking.created_by, "hr-1");
    assert_eq!(response.booking.start_time, "09:00");
    assert_eq!(response.booking.end_time, "10:00");
}

#[test]
fn test_create_booking_rejects_overlap() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();
    let hr = create_test_hr("hr-1");

    create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "11:00"),
        &hr,
    )
    .unwrap();

    let result = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "10:00", "12:00"),
        &create_test_hr("hr-2"),
    );

    assert!(matches!(result, Err(ApiError::RoomUnavailable { .. })));
}

#[test]
fn test_create_booking_allows_boundary_touch() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();

    create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &create_test_hr("hr-1"),
    )
    .unwrap();

    let result = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "10:00", "11:00"),
        &create_test_hr("hr-2"),
    );

    assert!(result.is_ok());
}

#[test]
fn test_create_booking_for_missing_room_fails() {
    let mut persistence = roombook_persistence::Persistence::new_in_memory().unwrap();
    let mut notifier = RecordingNotifier::new();

    let result = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(42, "09:00", "10:00"),
        &create_test_hr("hr-1"),
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_create_booking_rejects_inverted_window() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();

    let result = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "10:00", "09:00"),
        &create_test_hr("hr-1"),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "end_time"
    ));
}

#[test]
fn test_create_booking_rejects_malformed_time() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();

    let mut request = booking_request(room_id, "9:00", "10:00");
    request.start_time = String::from("9:00");

    let result = create_booking(
        &mut persistence,
        &mut notifier,
        &request,
        &create_test_hr("hr-1"),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "time"
    ));
}

#[test]
fn test_cancel_frees_slot_for_rebooking() {
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

    let cancelled = cancel_booking(
        &mut persistence,
        &mut notifier,
        &CancelBookingRequest {
            booking_id: created.booking.booking_id,
        },
        &hr,
    )
    .unwrap();
    assert_eq!(cancelled.booking.status, "cancelled");
    assert_eq!(cancelled.booking.canceled_by.as_deref(), Some("user"));
    assert!(cancelled.booking.canceled_at.is_some());

    let rebooked = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &create_test_hr("hr-2"),
    );
    assert!(rebooked.is_ok());
}

#[test]
fn test_cancel_is_terminal() {
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
    let request = CancelBookingRequest {
        booking_id: created.booking.booking_id,
    };

    cancel_booking(&mut persistence, &mut notifier, &request, &hr).unwrap();
    let second = cancel_booking(&mut persistence, &mut notifier, &request, &create_test_admin());

    assert!(matches!(
        second,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "terminal_cancellation"
    ));
}

#[test]
fn test_cancel_missing_booking_fails() {
    let mut persistence = roombook_persistence::Persistence::new_in_memory().unwrap();
    let mut notifier = RecordingNotifier::new();

    let result = cancel_booking(
        &mut persistence,
        &mut notifier,
        &CancelBookingRequest { booking_id: 7 },
        &create_test_admin(),
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_check_availability_reflects_bookings() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();

    create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &create_test_hr("hr-1"),
    )
    .unwrap();

    let check = |persistence: &mut roombook_persistence::Persistence, start: &str, end: &str| {
        check_availability(
            persistence,
            &CheckAvailabilityRequest {
                room_id,
                date: String::from("2024-06-10"),
                start_time: start.to_string(),
                end_time: end.to_string(),
            },
        )
        .unwrap()
        .available
    };

    assert!(!check(&mut persistence, "09:30", "10:30"));
    assert!(check(&mut persistence, "10:00", "11:00"));
    assert!(check(&mut persistence, "08:00", "09:00"));
}

#[test]
fn test_list_bookings_applies_status_filter() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();
    let hr = create_test_hr("hr-1");

    let first = create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "09:00", "10:00"),
        &hr,
    )
    .unwrap();
    create_booking(
        &mut persistence,
        &mut notifier,
        &booking_request(room_id, "10:00", "11:00"),
        &hr,
    )
    .unwrap();
    cancel_booking(
        &mut persistence,
        &mut notifier,
        &CancelBookingRequest {
            booking_id: first.booking.booking_id,
        },
        &hr,
    )
    .unwrap();

    let booked = list_bookings(
        &mut persistence,
        &ListBookingsRequest {
            status: Some(String::from("booked")),
            ..ListBookingsRequest::default()
        },
    )
    .unwrap();

    assert_eq!(booked.bookings.len(), 1);
    assert_eq!(booked.bookings[0].start_time, "10:00");
}

#[test]
fn test_list_bookings_rejects_unknown_status() {
    let mut persistence = roombook_persistence::Persistence::new_in_memory().unwrap();

    let result = list_bookings(
        &mut persistence,
        &ListBookingsRequest {
            status: Some(String::from("pending")),
            ..ListBookingsRequest::default()
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "status"
    ));
}
