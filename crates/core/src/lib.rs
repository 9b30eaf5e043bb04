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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! The booking core: conflict detection, reservation lifecycle, and
//! meeting analytics.
//!
//! Every function in this crate is pure: it consumes booking slices and
//! explicit actor/clock context, and produces decisions as data (a booking
//! to persist, a cancellation to apply, notifications to emit, a report).
//! Persistence and delivery are the caller's concern. The read-only
//! availability check here is advisory only; the authoritative overlap
//! check is re-run at the storage-write boundary by the persistence layer.

mod engine;
mod error;
mod report;

#[cfg(test)]
mod tests;

pub use engine::{
    ActorContext, ActorRole, BookingRequest, CancellationPlan, creation_notifications,
    plan_booking, plan_cancellation, slot_is_available,
};
pub use error::CoreError;
pub use report::{MeetingReport, ReportFilter, StatusBucket, summarize};
