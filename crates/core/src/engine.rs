// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use roombook_domain::{Booking, BookingDate, CanceledBy, RoomId, TimeSlot};
use roombook_notify::{Notification, NotificationKind, Recipient};

/// Actor roles for authorization decisions.
///
/// Roles apply to the acting user on every engine call; the actor context
/// arrives pre-authenticated from an external collaborator and is always
/// passed explicitly, never read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    /// Admin role: facility managers with corrective authority.
    ///
    /// Admins may cancel any booking.
    Admin,
    /// Hr role: users who create bookings.
    ///
    /// Hr actors may cancel only their own bookings.
    Hr,
}

impl ActorRole {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Hr => "hr",
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The acting user's identity and role, threaded into every engine call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    /// The unique identifier of the acting user.
    pub actor_id: String,
    /// The role assigned to the acting user.
    pub role: ActorRole,
}

impl ActorContext {
    /// Creates a new `ActorContext`.
    #[must_use]
    pub const fn new(actor_id: String, role: ActorRole) -> Self {
        Self { actor_id, role }
    }
}

/// A validated booking request.
///
/// The time window has already passed `TimeSlot` construction, so the
/// end-after-start invariant holds before the engine is consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// The room to reserve.
    pub room: RoomId,
    /// The reservation date.
    pub date: BookingDate,
    /// The requested time window.
    pub slot: TimeSlot,
    /// Optional free-text purpose.
    pub purpose: Option<String>,
    /// Expected number of attendees.
    pub attendees_count: u32,
}

/// Checks whether a slot is free among a set of same-room, same-date
/// bookings.
///
/// Only active (`booked`) bookings participate; a booking whose id equals
/// `exclude_booking_id` is ignored, which callers use when re-validating an
/// existing booking against its own row.
///
/// This is an O(n) scan. Booking volume per room per day is small and
/// bounded, so no sorted-interval structure is warranted.
#[must_use]
pub fn slot_is_available(
    existing: &[Booking],
    slot: TimeSlot,
    exclude_booking_id: Option<i64>,
) -> bool {
    !existing
        .iter()
        .filter(|candidate| candidate.is_active())
        .filter(|candidate| match (candidate.booking_id, exclude_booking_id) {
            (Some(id), Some(excluded)) => id != excluded,
            _ => true,
        })
        .any(|candidate| candidate.slot.overlaps(&slot))
}

/// Decides whether a booking may be created against the given same-room,
/// same-date booking set, and if so produces the booking to persist.
///
/// The returned booking has `status = booked`, with `requester` and
/// `created_by` set to the acting user. Room existence is the caller's
/// precondition; the overlap decision made here is advisory and must be
/// re-validated by the persistence layer at insert time.
///
/// # Errors
///
/// Returns `CoreError::SlotConflict` if the requested slot overlaps an
/// existing active booking.
pub fn plan_booking(
    existing: &[Booking],
    request: BookingRequest,
    actor: &ActorContext,
) -> Result<Booking, CoreError> {
    if !slot_is_available(existing, request.slot, None) {
        return Err(CoreError::SlotConflict {
            room: request.room,
            date: request.date,
            slot: request.slot,
        });
    }

    Ok(Booking::new(
        request.room,
        actor.actor_id.clone(),
        request.date,
        request.slot,
        request.purpose,
        request.attendees_count,
        actor.actor_id.clone(),
    ))
}

/// Builds the notification pair for a freshly persisted booking: one to
/// all admins, one confirming to the requester.
///
/// # Errors
///
/// Returns `CoreError::UnpersistedBooking` if the booking has no id yet.
pub fn creation_notifications(booking: &Booking) -> Result<Vec<Notification>, CoreError> {
    let booking_id: i64 = booking.booking_id.ok_or(CoreError::UnpersistedBooking)?;
    let summary: String = format!(
        "Room {} on {} {}",
        booking.room, booking.date, booking.slot
    );

    Ok(vec![
        Notification::new(
            Recipient::AllAdmins,
            NotificationKind::BookingCreated,
            String::from("New booking"),
            format!("{} booked {summary}", booking.requester),
            booking_id,
        ),
        Notification::new(
            Recipient::User(booking.requester.clone()),
            NotificationKind::BookingCreated,
            String::from("Booking confirmed"),
            format!("Your booking is confirmed: {summary}"),
            booking_id,
        ),
    ])
}

/// The outcome of a permitted cancellation: the cancelled booking to
/// persist and the single notification the transition produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationPlan {
    /// The booking with the `cancelled` transition applied.
    pub booking: Booking,
    /// Who performed the cancellation, by role.
    pub canceled_by: CanceledBy,
    /// Exactly one notification: to the requester when an admin cancels,
    /// to all admins when the owning hr user cancels.
    pub notifications: Vec<Notification>,
}

/// Decides whether the acting user may cancel the given booking and, if
/// so, produces the cancelled booking plus its notification.
///
/// An admin may cancel any booking; an hr actor only their own. The
/// `booked` → `cancelled` transition is terminal: cancelling an already
/// cancelled booking is rejected as a domain violation.
///
/// # Errors
///
/// * `CoreError::Forbidden` if an hr actor targets another user's booking
/// * `CoreError::DomainViolation` if the booking is already cancelled
/// * `CoreError::UnpersistedBooking` if the booking has no id yet
pub fn plan_cancellation(
    booking: &Booking,
    actor: &ActorContext,
) -> Result<CancellationPlan, CoreError> {
    let booking_id: i64 = booking.booking_id.ok_or(CoreError::UnpersistedBooking)?;

    let canceled_by: CanceledBy = match actor.role {
        ActorRole::Admin => CanceledBy::Admin,
        ActorRole::Hr => {
            if booking.requester != actor.actor_id {
                return Err(CoreError::Forbidden {
                    action: "cancel_booking",
                    reason: format!(
                        "hr actor '{}' may only cancel their own bookings",
                        actor.actor_id
                    ),
                });
            }
            CanceledBy::User
        }
    };

    let mut cancelled: Booking = booking.clone();
    cancelled.cancel(canceled_by)?;

    let summary: String = format!(
        "Room {} on {} {}",
        booking.room, booking.date, booking.slot
    );
    let notification: Notification = match canceled_by {
        CanceledBy::Admin => Notification::new(
            Recipient::User(booking.requester.clone()),
            NotificationKind::BookingCanceled,
            String::from("Booking cancelled"),
            format!("An admin cancelled your booking: {summary}"),
            booking_id,
        ),
        CanceledBy::User => Notification::new(
            Recipient::AllAdmins,
            NotificationKind::BookingCanceled,
            String::from("Booking cancelled"),
            format!("{} cancelled their booking: {summary}", booking.requester),
            booking_id,
        ),
    };

    Ok(CancellationPlan {
        booking: cancelled,
        canceled_by,
        notifications: vec![notification],
    })
}
