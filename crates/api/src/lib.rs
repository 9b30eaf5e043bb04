// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the roombook system.
//!
//! Handlers in this crate translate external requests into domain types,
//! enforce authorization, drive the reservation engine, persist the
//! outcome, and dispatch notifications. Domain and persistence errors are
//! translated into `ApiError` at this boundary and never leak through.
//!
//! Notification delivery is best effort: a failed delivery is logged and
//! the operation that produced it still succeeds.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{ApiError, AuthError};
pub use handlers::{
    cancel_booking, check_availability, create_booking, create_room, list_bookings, list_rooms,
    meeting_report,
};
pub use request_response::{
    BookingInfo, CancelBookingRequest, CancelBookingResponse, CheckAvailabilityRequest,
    CheckAvailabilityResponse, CreateBookingRequest, CreateBookingResponse, CreateRoomRequest,
    CreateRoomResponse, ListBookingsRequest, ListBookingsResponse, ListRoomsResponse,
    MeetingReportRequest, MeetingReportResponse, RoomInfo, SeriesPoint, StatusCount,
};
