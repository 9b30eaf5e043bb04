// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for booking, room, and report operations.

use roombook_core::{
    ActorContext, BookingRequest, MeetingReport, ReportFilter, creation_notifications,
    plan_booking, plan_cancellation, slot_is_available,
};
use roombook_domain::{Booking, BookingDate, BookingStatus, RoomId, TimeSlot};
use roombook_notify::{Notification, Notifier};
use roombook_persistence::{BookingFilter, Persistence};
use time::PrimitiveDateTime;
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    BookingInfo, CancelBookingRequest, CancelBookingResponse, CheckAvailabilityRequest,
    CheckAvailabilityResponse, CreateBookingRequest, CreateBookingResponse, CreateRoomRequest,
    CreateRoomResponse, ListBookingsRequest, ListBookingsResponse, ListRoomsResponse,
    MeetingReportRequest, MeetingReportResponse, RoomInfo, SeriesPoint, StatusCount,
};

/// Parses a "YYYY-MM-DD" date field.
fn parse_date(value: &str) -> Result<BookingDate, ApiError> {
    value.parse().map_err(translate_domain_error)
}

/// Parses an "HH:MM" start/end pair into a validated slot.
fn parse_slot(start: &str, end: &str) -> Result<TimeSlot, ApiError> {
    TimeSlot::parse(start, end).map_err(translate_domain_error)
}

/// Parses an optional status string.
fn parse_status(value: Option<&str>) -> Result<Option<BookingStatus>, ApiError> {
    value
        .map(str::parse)
        .transpose()
        .map_err(translate_domain_error)
}

/// Delivers notifications best effort.
///
/// Delivery failures are logged and swallowed: the booking operation
/// that produced them has already succeeded and is never rolled back.
fn dispatch_notifications(notifier: &mut dyn Notifier, notifications: &[Notification]) {
    for notification in notifications {
        if let Err(err) = notifier.deliver(notification) {
            warn!(
                booking_id = notification.booking_id,
                kind = %notification.kind,
                error = %err,
                "Notification delivery failed"
            );
        }
    }
}

/// Creates a new room via the API boundary.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The API request to create a room
/// * `actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if the actor is not an Admin or the room name is
/// already taken.
pub fn create_room(
    persistence: &mut Persistence,
    request: &CreateRoomRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateRoomResponse, ApiError> {
    AuthorizationService::authorize_create_room(actor)?;

    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Room name cannot be empty"),
        });
    }

    let room_id: i64 = persistence
        .create_room(&request.name)
        .map_err(translate_persistence_error)?;

    info!(room_id, name = %request.name, "Room created");

    Ok(CreateRoomResponse {
        room_id,
        name: request.name.clone(),
        message: format!("Created room '{}'", request.name),
    })
}

/// Lists all rooms.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_rooms(persistence: &mut Persistence) -> Result<ListRoomsResponse, ApiError> {
    let rooms: Vec<RoomInfo> = persistence
        .list_rooms()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|room| RoomInfo {
            room_id: room.room_id,
            name: room.name,
        })
        .collect();

    Ok(ListRoomsResponse { rooms })
}

/// Creates a new booking via the API boundary.
///
/// This function:
/// - Validates the date and time window at the boundary
/// - Verifies the room exists
/// - Consults the reservation engine against the room's active bookings
/// - Persists the booking (availability is re-checked at the write boundary)
/// - Dispatches creation notifications best effort
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `notifier` - The notification delivery collaborator
/// * `request` - The API request to create a booking
/// * `actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if validation fails, the room does not exist, or
/// the requested slot overlaps an existing active booking.
pub fn create_booking(
    persistence: &mut Persistence,
    notifier: &mut dyn Notifier,
    request: &CreateBookingRequest,
    actor: &AuthenticatedActor,
) -> Result<CreateBookingResponse, ApiError> {
    let room: RoomId = RoomId::new(request.room_id);
    let date: BookingDate = parse_date(&request.date)?;
    let slot: TimeSlot = parse_slot(&request.start_time, &request.end_time)?;

    let room_found: bool = persistence
        .room_exists(room)
        .map_err(translate_persistence_error)?;
    if !room_found {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {} does not exist", request.room_id),
        });
    }

    let existing: Vec<Booking> = persistence
        .list_active_for_room_date(room, date)
        .map_err(translate_persistence_error)?;

    let context: ActorContext = actor.to_actor_context();
    let booking_request: BookingRequest = BookingRequest {
        room,
        date,
        slot,
        purpose: request.purpose.clone(),
        attendees_count: request.attendees_count,
    };
    let planned: Booking =
        plan_booking(&existing, booking_request, &context).map_err(translate_core_error)?;

    let stored: Booking = persistence
        .create_booking(&planned)
        .map_err(translate_persistence_error)?;

    let notifications: Vec<Notification> =
        creation_notifications(&stored).map_err(translate_core_error)?;
    dispatch_notifications(notifier, &notifications);

    info!(
        booking_id = stored.booking_id,
        room_id = request.room_id,
        requester = %stored.requester,
        "Booking created"
    );

    Ok(CreateBookingResponse {
        booking: BookingInfo::from_booking(&stored),
        message: format!(
            "Booked room {} on {} {}",
            request.room_id, stored.date, stored.slot
        ),
    })
}

/// Cancels a booking via the API boundary.
///
/// The reservation engine decides whether the actor may cancel: admins
/// may cancel any booking, hr actors only their own. The engine also
/// produces the single notification the transition emits.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `notifier` - The notification delivery collaborator
/// * `request` - The API request to cancel a booking
/// * `actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if the booking does not exist, the actor is not
/// permitted to cancel it, or it is already cancelled.
pub fn cancel_booking(
    persistence: &mut Persistence,
    notifier: &mut dyn Notifier,
    request: &CancelBookingRequest,
    actor: &AuthenticatedActor,
) -> Result<CancelBookingResponse, ApiError> {
    let booking: Booking = persistence
        .get_booking(request.booking_id)
        .map_err(translate_persistence_error)?;

    let context: ActorContext = actor.to_actor_context();
    let plan = plan_cancellation(&booking, &context).map_err(translate_core_error)?;

    let stored: Booking = persistence
        .cancel_booking(request.booking_id, plan.canceled_by)
        .map_err(translate_persistence_error)?;

    dispatch_notifications(notifier, &plan.notifications);

    info!(
        booking_id = request.booking_id,
        canceled_by = plan.canceled_by.as_str(),
        "Booking cancelled"
    );

    Ok(CancelBookingResponse {
        booking: BookingInfo::from_booking(&stored),
        message: format!("Cancelled booking {}", request.booking_id),
    })
}

/// Checks whether a slot is free for a room on a date.
///
/// This is the advisory read-path check; booking creation re-validates
/// at the write boundary regardless of the answer given here.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The API request describing the slot to check
///
/// # Errors
///
/// Returns an error if validation fails or the room does not exist.
pub fn check_availability(
    persistence: &mut Persistence,
    request: &CheckAvailabilityRequest,
) -> Result<CheckAvailabilityResponse, ApiError> {
    let room: RoomId = RoomId::new(request.room_id);
    let date: BookingDate = parse_date(&request.date)?;
    let slot: TimeSlot = parse_slot(&request.start_time, &request.end_time)?;

    let room_found: bool = persistence
        .room_exists(room)
        .map_err(translate_persistence_error)?;
    if !room_found {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {} does not exist", request.room_id),
        });
    }

    let existing: Vec<Booking> = persistence
        .list_active_for_room_date(room, date)
        .map_err(translate_persistence_error)?;

    Ok(CheckAvailabilityResponse {
        room_id: request.room_id,
        date: request.date.clone(),
        available: slot_is_available(&existing, slot, None),
    })
}

/// Lists bookings matching the given criteria.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - Optional date-range, status, and room criteria
///
/// # Errors
///
/// Returns an error if a filter field fails validation.
pub fn list_bookings(
    persistence: &mut Persistence,
    request: &ListBookingsRequest,
) -> Result<ListBookingsResponse, ApiError> {
    let filter: BookingFilter = BookingFilter {
        start_date: request.start_date.as_deref().map(parse_date).transpose()?,
        end_date: request.end_date.as_deref().map(parse_date).transpose()?,
        status: parse_status(request.status.as_deref())?,
        room: request.room_id.map(RoomId::new),
    };

    let bookings: Vec<BookingInfo> = persistence
        .list_bookings(&filter)
        .map_err(translate_persistence_error)?
        .iter()
        .map(BookingInfo::from_booking)
        .collect();

    Ok(ListBookingsResponse { bookings })
}

/// Produces the meeting report over the bookings matching the filter.
///
/// The report is recomputed from the full booking set on every call and
/// never cached. `now` drives only the Upcoming/Completed classification;
/// the server supplies it explicitly so identical inputs give identical
/// reports.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - Optional date-range, status, and room criteria
/// * `now` - The instant used to classify active bookings
///
/// # Errors
///
/// Returns an error if a filter field fails validation.
pub fn meeting_report(
    persistence: &mut Persistence,
    request: &MeetingReportRequest,
    now: PrimitiveDateTime,
) -> Result<MeetingReportResponse, ApiError> {
    let filter: ReportFilter = ReportFilter {
        start_date: request.start_date.as_deref().map(parse_date).transpose()?,
        end_date: request.end_date.as_deref().map(parse_date).transpose()?,
        status: parse_status(request.status.as_deref())?,
        room: request.room_id.map(RoomId::new),
    };

    let bookings: Vec<Booking> = persistence
        .list_bookings(&BookingFilter::default())
        .map_err(translate_persistence_error)?;

    let report: MeetingReport = roombook_core::summarize(&bookings, &filter, now);

    Ok(MeetingReportResponse {
        total_meetings: report.total_meetings,
        average_duration: report.average_duration,
        median_duration: report.median_duration,
        cancellation_rate: report.cancellation_rate,
        meetings_over_time: report
            .meetings_over_time
            .into_iter()
            .map(|(period, count)| SeriesPoint { period, count })
            .collect(),
        meetings_per_period: report
            .meetings_per_period
            .into_iter()
            .map(|(period, count)| SeriesPoint { period, count })
            .collect(),
        status_distribution: report
            .status_distribution
            .into_iter()
            .map(|(bucket, count)| StatusCount {
                status: bucket.as_str().to_string(),
                count,
            })
            .collect(),
    })
}
