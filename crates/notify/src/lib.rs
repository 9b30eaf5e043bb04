// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Notification event types and the delivery contract.
//!
//! The booking core emits notification events as plain data; delivery is
//! the concern of an external collaborator behind the [`Notifier`] trait.
//! Delivery is best-effort: callers log and discard failures, and a failed
//! delivery never rolls back the booking operation that produced it.

#[cfg(test)]
mod tests;

/// Selects who receives a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Every admin-role user.
    AllAdmins,
    /// A single user, identified by their actor id.
    User(String),
}

/// The kind of booking event being announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A booking was created.
    BookingCreated,
    /// A booking was cancelled.
    BookingCanceled,
}

impl NotificationKind {
    /// Converts this kind to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BookingCreated => "booking_created",
            Self::BookingCanceled => "booking_canceled",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single outbound notification.
///
/// Notifications are immutable once created and carry everything the
/// delivery collaborator needs: who to tell, what happened, and the
/// booking the event refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Who should receive this notification.
    pub recipient: Recipient,
    /// The event being announced.
    pub kind: NotificationKind,
    /// Short human-readable title.
    pub title: String,
    /// Human-readable message body.
    pub message: String,
    /// The booking this notification refers to.
    pub booking_id: i64,
}

impl Notification {
    /// Creates a new `Notification`.
    ///
    /// # Arguments
    ///
    /// * `recipient` - Who should receive this notification
    /// * `kind` - The event being announced
    /// * `title` - Short human-readable title
    /// * `message` - Human-readable message body
    /// * `booking_id` - The booking this notification refers to
    #[must_use]
    pub const fn new(
        recipient: Recipient,
        kind: NotificationKind,
        title: String,
        message: String,
        booking_id: i64,
    ) -> Self {
        Self {
            recipient,
            kind,
            title,
            message,
            booking_id,
        }
    }
}

/// Error produced by a failed delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryError {
    /// A description of the delivery failure.
    pub message: String,
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Notification delivery failed: {}", self.message)
    }
}

impl std::error::Error for DeliveryError {}

/// Delivery contract for the external notification collaborator.
///
/// Implementations deliver a single notification and report failure via
/// [`DeliveryError`]. Callers must treat failures as non-fatal.
pub trait Notifier {
    /// Delivers one notification.
    ///
    /// # Errors
    ///
    /// Returns a `DeliveryError` if delivery fails. Callers log and
    /// discard the error; it never propagates into booking results.
    fn deliver(&mut self, notification: &Notification) -> Result<(), DeliveryError>;
}
