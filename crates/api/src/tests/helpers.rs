// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use roombook_notify::{DeliveryError, Notification, Notifier};
use roombook_persistence::Persistence;

use crate::{AuthenticatedActor, CreateBookingRequest, Role};

/// Records every delivered notification for later inspection.
pub struct RecordingNotifier {
    pub delivered: Vec<Notification>,
    pub fail_deliveries: bool,
}

impl RecordingNotifier {
    pub const fn new() -> Self {
        Self {
            delivered: Vec::new(),
            fail_deliveries: false,
        }
    }

    pub const fn failing() -> Self {
        Self {
            delivered: Vec::new(),
            fail_deliveries: true,
        }
    }
}

impl Notifier for RecordingNotifier {
    fn deliver(&mut self, notification: &Notification) -> Result<(), DeliveryError> {
        if self.fail_deliveries {
            return Err(DeliveryError {
                message: String::from("simulated outage"),
            });
        }
        self.delivered.push(notification.clone());
        Ok(())
    }
}

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-1"), Role::Admin)
}

pub fn create_test_hr(id: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(id.to_string(), Role::Hr)
}

pub fn persistence_with_room() -> (Persistence, i64) {
    let mut persistence = Persistence::new_in_memory().unwrap();
    let room_id: i64 = persistence.create_room("Aurora").unwrap();
    (persistence, room_id)
}

pub fn booking_request(room_id: i64, start: &str, end: &str) -> CreateBookingRequest {
    CreateBookingRequest {
        room_id,
        date: String::from("2024-06-10"),
        start_time: start.to_string(),
        end_time: end.to_string(),
        purpose: Some(String::from("Planning")),
        attendees_count: 5,
    }
}
