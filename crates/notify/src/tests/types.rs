// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DeliveryError, Notification, NotificationKind, Notifier, Recipient};

#[test]
fn test_notification_kind_wire_strings() {
    assert_eq!(NotificationKind::BookingCreated.as_str(), "booking_created");
    assert_eq!(NotificationKind::BookingCanceled.as_str(), "booking_canceled");
    assert_eq!(NotificationKind::BookingCreated.to_string(), "booking_created");
}

#[test]
fn test_notification_creation() {
    let notification: Notification = Notification::new(
        Recipient::User(String::from("hr-1")),
        NotificationKind::BookingCreated,
        String::from("Booking confirmed"),
        String::from("Room 1 on 2024-06-01 09:00-10:00"),
        7,
    );

    assert_eq!(notification.recipient, Recipient::User(String::from("hr-1")));
    assert_eq!(notification.kind, NotificationKind::BookingCreated);
    assert_eq!(notification.booking_id, 7);
}

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn deliver(&mut self, _notification: &Notification) -> Result<(), DeliveryError> {
        Err(DeliveryError {
            message: String::from("downstream unavailable"),
        })
    }
}

#[test]
fn test_delivery_error_display() {
    let mut notifier: FailingNotifier = FailingNotifier;
    let notification: Notification = Notification::new(
        Recipient::AllAdmins,
        NotificationKind::BookingCanceled,
        String::from("Booking cancelled"),
        String::from("Booking 7 was cancelled"),
        7,
    );

    let err: DeliveryError = notifier.deliver(&notification).unwrap_err();
    assert!(err.to_string().contains("downstream unavailable"));
}
