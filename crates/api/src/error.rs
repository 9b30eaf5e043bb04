// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use roombook_core::CoreError;
use roombook_domain::DomainError;
use roombook_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The reason the action was refused.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The requested slot overlaps an existing active booking.
    RoomUnavailable {
        /// The room that was requested.
        room_id: i64,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, reason } => {
                write!(f, "Unauthorized: '{action}': {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::RoomUnavailable { room_id, message } => {
                write!(f, "Room {room_id} unavailable: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                reason: format!("requires {required_role} role"),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidClockTime(value) => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("Invalid time '{value}': expected 24-hour HH:MM"),
        },
        DomainError::InvalidDate { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Invalid date '{date_string}': {error}"),
        },
        DomainError::InvalidTimeRange { start, end } => ApiError::InvalidInput {
            field: String::from("end_time"),
            message: format!("End time {end} must be after start time {start}"),
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid status '{value}': expected 'booked' or 'cancelled'"),
        },
        DomainError::InvalidCanceledBy(value) => ApiError::InvalidInput {
            field: String::from("canceled_by"),
            message: format!("Invalid canceled_by '{value}': expected 'admin' or 'user'"),
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::DomainRuleViolation {
            rule: String::from("terminal_cancellation"),
            message: format!("Cannot transition a booking from '{from}' to '{to}'"),
        },
        DomainError::InvalidActorId(value) => ApiError::InvalidInput {
            field: String::from("actor_id"),
            message: format!("Invalid actor id '{value}'"),
        },
    }
}

/// Translates a core engine error into an API error.
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::SlotConflict { room, date, slot } => ApiError::RoomUnavailable {
            room_id: room.value(),
            message: format!("{slot} on {date} overlaps an existing booking"),
        },
        CoreError::Forbidden { action, reason } => ApiError::Unauthorized {
            action: action.to_string(),
            reason,
        },
        CoreError::UnpersistedBooking => ApiError::Internal {
            message: String::from("Operation requires a booking with a persisted id"),
        },
    }
}

/// Translates a persistence error into an API error.
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::RoomNotFound(room_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room {room_id} does not exist"),
        },
        PersistenceError::RoomNameTaken(name) => ApiError::DomainRuleViolation {
            rule: String::from("unique_room_name"),
            message: format!("Room name '{name}' is already taken"),
        },
        PersistenceError::BookingNotFound(booking_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking {booking_id} does not exist"),
        },
        PersistenceError::BookingAlreadyCancelled(booking_id) => ApiError::DomainRuleViolation {
            rule: String::from("terminal_cancellation"),
            message: format!("Booking {booking_id} is already cancelled"),
        },
        PersistenceError::SlotConflict {
            room_id,
            booking_date,
        } => ApiError::RoomUnavailable {
            room_id,
            message: format!("The slot on {booking_date} overlaps an existing booking"),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
