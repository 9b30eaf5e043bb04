// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract: dates are "YYYY-MM-DD" strings and times are 24-hour
//! "HH:MM" strings, validated at the boundary.

use roombook_domain::Booking;

/// API request to create a new room.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateRoomRequest {
    /// The room's display name (unique).
    pub name: String,
}

/// API response for a successful room creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateRoomResponse {
    /// The canonical numeric identifier.
    pub room_id: i64,
    /// The room's display name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// Room information for listing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RoomInfo {
    /// The canonical numeric identifier.
    pub room_id: i64,
    /// The room's display name.
    pub name: String,
}

/// API response for listing rooms.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListRoomsResponse {
    /// All known rooms, ordered by ID.
    pub rooms: Vec<RoomInfo>,
}

/// API request to create a new booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingRequest {
    /// The room to reserve.
    pub room_id: i64,
    /// The reservation date ("YYYY-MM-DD").
    pub date: String,
    /// The start time ("HH:MM", inclusive).
    pub start_time: String,
    /// The end time ("HH:MM", exclusive).
    pub end_time: String,
    /// Optional free-text purpose.
    pub purpose: Option<String>,
    /// Expected number of attendees.
    pub attendees_count: u32,
}

/// Serializable view of a booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The canonical numeric identifier.
    pub booking_id: i64,
    /// The reserved room.
    pub room_id: i64,
    /// The user who owns the booking.
    pub requester: String,
    /// The reservation date ("YYYY-MM-DD").
    pub date: String,
    /// The start time ("HH:MM", inclusive).
    pub start_time: String,
    /// The end time ("HH:MM", exclusive).
    pub end_time: String,
    /// Free-text purpose (optional).
    pub purpose: Option<String>,
    /// Expected number of attendees.
    pub attendees_count: u32,
    /// Lifecycle status ("booked" or "cancelled").
    pub status: String,
    /// Who cancelled the booking ("admin" or "user"), if cancelled.
    pub canceled_by: Option<String>,
    /// Cancellation timestamp, if cancelled.
    pub canceled_at: Option<String>,
    /// The acting user at creation time.
    pub created_by: String,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last-update timestamp.
    pub updated_at: Option<String>,
}

impl BookingInfo {
    /// Builds the API view of a persisted booking.
    ///
    /// Unpersisted bookings never cross the API boundary, so a missing
    /// id maps to 0 rather than an error here.
    #[must_use]
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id.unwrap_or(0),
            room_id: booking.room.value(),
            requester: booking.requester.clone(),
            date: booking.date.iso_string(),
            start_time: booking.slot.start().to_string(),
            end_time: booking.slot.end().to_string(),
            purpose: booking.purpose.clone(),
            attendees_count: booking.attendees_count,
            status: booking.status.as_str().to_string(),
            canceled_by: booking.canceled_by.map(|c| c.as_str().to_string()),
            canceled_at: booking.canceled_at.clone(),
            created_by: booking.created_by.clone(),
            created_at: booking.created_at.clone(),
            updated_at: booking.updated_at.clone(),
        }
    }
}

/// API response for a successful booking creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingResponse {
    /// The created booking.
    pub booking: BookingInfo,
    /// A success message.
    pub message: String,
}

/// API request to cancel a booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelBookingRequest {
    /// The booking to cancel.
    pub booking_id: i64,
}

/// API response for a successful cancellation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelBookingResponse {
    /// The booking in its cancelled state.
    pub booking: BookingInfo,
    /// A success message.
    pub message: String,
}

/// API request to check slot availability.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckAvailabilityRequest {
    /// The room to check.
    pub room_id: i64,
    /// The date to check ("YYYY-MM-DD").
    pub date: String,
    /// The start time ("HH:MM", inclusive).
    pub start_time: String,
    /// The end time ("HH:MM", exclusive).
    pub end_time: String,
}

/// API response for an availability check.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckAvailabilityResponse {
    /// The room that was checked.
    pub room_id: i64,
    /// The date that was checked.
    pub date: String,
    /// Whether the requested slot is free.
    pub available: bool,
}

/// API request to list bookings.
///
/// All fields are optional criteria; omitted fields match everything.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct ListBookingsRequest {
    /// Only bookings on or after this date ("YYYY-MM-DD").
    pub start_date: Option<String>,
    /// Only bookings on or before this date ("YYYY-MM-DD").
    pub end_date: Option<String>,
    /// Only bookings with this status ("booked" or "cancelled").
    pub status: Option<String>,
    /// Only bookings for this room.
    pub room_id: Option<i64>,
}

/// API response for listing bookings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListBookingsResponse {
    /// The matching bookings, ordered by date then start time.
    pub bookings: Vec<BookingInfo>,
}

/// API request for a meeting report.
///
/// Shares the filter shape of `ListBookingsRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct MeetingReportRequest {
    /// Only bookings on or after this date ("YYYY-MM-DD").
    pub start_date: Option<String>,
    /// Only bookings on or before this date ("YYYY-MM-DD").
    pub end_date: Option<String>,
    /// Only bookings with this status ("booked" or "cancelled").
    pub status: Option<String>,
    /// Only bookings for this room.
    pub room_id: Option<i64>,
}

/// One point in a counted time series.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeriesPoint {
    /// The date or week-start date ("YYYY-MM-DD").
    pub period: String,
    /// The booking count for that period.
    pub count: u64,
}

/// One entry of the status distribution.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusCount {
    /// The status bucket label ("Canceled", "Upcoming", or "Completed").
    pub status: String,
    /// The booking count for that bucket.
    pub count: u64,
}

/// API response carrying the meeting report.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MeetingReportResponse {
    /// Count of matched bookings.
    pub total_meetings: u64,
    /// Mean duration in minutes over non-cancelled bookings.
    pub average_duration: f64,
    /// Upper median duration in minutes.
    pub median_duration: u32,
    /// Percentage of matched bookings that are cancelled.
    pub cancellation_rate: f64,
    /// Booking counts per exact date, ascending.
    pub meetings_over_time: Vec<SeriesPoint>,
    /// Booking counts per Sunday-aligned week, ascending.
    pub meetings_per_period: Vec<SeriesPoint>,
    /// Non-zero status buckets with their counts.
    pub status_distribution: Vec<StatusCount>,
}
