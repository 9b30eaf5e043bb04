// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report handler tests.
//!
//! Aggregation arithmetic is covered in the engine crate; these tests
//! exercise filter parsing and DTO mapping through the handler.

use time::PrimitiveDateTime;
use time::macros::datetime;

use super::helpers::{RecordingNotifier, create_test_hr, persistence_with_room};
use crate::error::ApiError;
use crate::{CancelBookingRequest, CreateBookingRequest, MeetingReportRequest, cancel_booking, create_booking, meeting_report};

const NOW: PrimitiveDateTime = datetime!(2024-07-01 12:00);

fn seed_booking(
    persistence: &mut roombook_persistence::Persistence,
    room_id: i64,
    date: &str,
    start: &str,
    end: &str,
) -> i64 {
    let mut notifier = RecordingNotifier::new();
    create_booking(
        persistence,
        &mut notifier,
        &CreateBookingRequest {
            room_id,
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            purpose: None,
            attendees_count: 3,
        },
        &create_test_hr("hr-1"),
    )
    .unwrap()
    .booking
    .booking_id
}

#[test]
fn test_report_over_mixed_statuses() {
    let (mut persistence, room_id) = persistence_with_room();
    let mut notifier = RecordingNotifier::new();

    // Two completed meetings and one cancelled one.
    seed_booking(&mut persistence, room_id, "2024-06-10", "09:00", "10:00");
    seed_booking(&mut persistence, room_id, "2024-06-11", "09:00", "11:00");
    let cancelled_id: i64 =
        seed_booking(&mut persistence, room_id, "2024-06-12", "09:00", "10:00");
    cancel_booking(
        &mut persistence,
        &mut notifier,
        &CancelBookingRequest {
            booking_id: cancelled_id,
        },
        &create_test_hr("hr-1"),
    )
    .unwrap();

    let report = meeting_report(
        &mut persistence,
        &MeetingReportRequest::default(),
        NOW,
    )
    .unwrap();

    assert_eq!(report.total_meetings, 3);
    // Durations 60 and 120: mean 90, upper median 120.
    assert!((report.average_duration - 90.0).abs() < f64::EPSILON);
    assert_eq!(report.median_duration, 120);
    assert!((report.cancellation_rate - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(report.meetings_over_time.len(), 3);
    assert_eq!(report.meetings_over_time[0].period, "2024-06-10");
    assert_eq!(report.meetings_over_time[0].count, 1);
    // 2024-06-10 through 2024-06-12 all fall in the week of Sunday 2024-06-09.
    assert_eq!(report.meetings_per_period.len(), 1);
    assert_eq!(report.meetings_per_period[0].period, "2024-06-09");
    assert_eq!(report.meetings_per_period[0].count, 3);
}

#[test]
fn test_report_date_filter_excludes_outside_range() {
    let (mut persistence, room_id) = persistence_with_room();

    seed_booking(&mut persistence, room_id, "2024-06-10", "09:00", "10:00");
    seed_booking(&mut persistence, room_id, "2024-07-10", "09:00", "10:00");

    let report = meeting_report(
        &mut persistence,
        &MeetingReportRequest {
            start_date: Some(String::from("2024-06-01")),
            end_date: Some(String::from("2024-06-30")),
            ..MeetingReportRequest::default()
        },
        NOW,
    )
    .unwrap();

    assert_eq!(report.total_meetings, 1);
}

#[test]
fn test_report_classifies_upcoming_and_completed() {
    let (mut persistence, room_id) = persistence_with_room();

    // One booking well before NOW, one after.
    seed_booking(&mut persistence, room_id, "2024-06-10", "09:00", "10:00");
    seed_booking(&mut persistence, room_id, "2024-07-02", "09:00", "10:00");

    let report = meeting_report(
        &mut persistence,
        &MeetingReportRequest::default(),
        NOW,
    )
    .unwrap();

    let completed: u64 = report
        .status_distribution
        .iter()
        .find(|entry| entry.status == "Completed")
        .map_or(0, |entry| entry.count);
    let upcoming: u64 = report
        .status_distribution
        .iter()
        .find(|entry| entry.status == "Upcoming")
        .map_or(0, |entry| entry.count);

    assert_eq!(completed, 1);
    assert_eq!(upcoming, 1);
}

#[test]
fn test_report_on_empty_set_is_all_zeroes() {
    let mut persistence = roombook_persistence::Persistence::new_in_memory().unwrap();

    let report = meeting_report(
        &mut persistence,
        &MeetingReportRequest::default(),
        NOW,
    )
    .unwrap();

    assert_eq!(report.total_meetings, 0);
    assert!(report.average_duration.abs() < f64::EPSILON);
    assert_eq!(report.median_duration, 0);
    assert!(report.cancellation_rate.abs() < f64::EPSILON);
    assert!(report.meetings_over_time.is_empty());
    assert!(report.status_distribution.is_empty());
}

#[test]
fn test_report_rejects_malformed_date_filter() {
    let mut persistence = roombook_persistence::Persistence::new_in_memory().unwrap();

    let result = meeting_report(
        &mut persistence,
        &MeetingReportRequest {
            start_date: Some(String::from("June 1, 2024")),
            ..MeetingReportRequest::default()
        },
        NOW,
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));
}
