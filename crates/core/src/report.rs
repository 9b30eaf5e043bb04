// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roombook_domain::{Booking, BookingDate, BookingStatus, RoomId};
use std::collections::BTreeMap;
use time::PrimitiveDateTime;

/// Filter over the booking set for report generation.
///
/// A booking matches iff every present field matches. Date-range bounds
/// are inclusive; because the date format is fixed-width and zero-padded,
/// the ordering used here agrees with lexicographic comparison of the
/// string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportFilter {
    /// Only bookings on or after this date.
    pub start_date: Option<BookingDate>,
    /// Only bookings on or before this date.
    pub end_date: Option<BookingDate>,
    /// Only bookings with this status.
    pub status: Option<BookingStatus>,
    /// Only bookings for this room.
    pub room: Option<RoomId>,
}

impl ReportFilter {
    /// Tests whether a booking matches this filter.
    #[must_use]
    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(start) = self.start_date
            && booking.date < start
        {
            return false;
        }
        if let Some(end) = self.end_date
            && booking.date > end
        {
            return false;
        }
        if let Some(status) = self.status
            && booking.status != status
        {
            return false;
        }
        if let Some(room) = self.room
            && booking.room != room
        {
            return false;
        }
        true
    }
}

/// Status classification buckets for the report's distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    /// The booking was cancelled.
    Canceled,
    /// The booking is active and its end instant is still in the future.
    Upcoming,
    /// The booking is active and its end instant has passed.
    Completed,
}

impl StatusBucket {
    /// Converts this bucket to its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Canceled => "Canceled",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The ephemeral aggregate produced over a filtered booking set.
///
/// Reports are recomputed from scratch on every request and never
/// persisted or cached.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetingReport {
    /// Count of matched bookings.
    pub total_meetings: u64,
    /// Arithmetic mean duration (minutes) over non-cancelled bookings
    /// with positive duration; 0 if there are none.
    pub average_duration: f64,
    /// Upper median of the ascending-sorted duration list (the element at
    /// index `n / 2`); 0 if the list is empty.
    pub median_duration: u32,
    /// `100 * cancelled / total`; 0 if no bookings matched.
    pub cancellation_rate: f64,
    /// Booking counts per exact date, ascending by date.
    pub meetings_over_time: Vec<(String, u64)>,
    /// Booking counts per Sunday-aligned week start date, ascending.
    pub meetings_per_period: Vec<(String, u64)>,
    /// Non-zero status buckets with their counts.
    pub status_distribution: Vec<(StatusBucket, u64)>,
}

/// Returns the booking's end instant on its calendar date.
fn end_instant(booking: &Booking) -> PrimitiveDateTime {
    let end = booking.slot.end();
    // Hour and minute are range-checked by ClockTime; from_hms cannot fail.
    let end_time = time::Time::from_hms(end.hour(), end.minute(), 0)
        .unwrap_or(time::Time::MIDNIGHT);
    PrimitiveDateTime::new(booking.date.date(), end_time)
}

/// Produces a deterministic summary over the bookings matching `filter`.
///
/// `now` is the only clock input: it drives the `Upcoming` / `Completed`
/// classification and nothing else. Identical inputs against an unchanged
/// booking set always yield identical output.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn summarize(
    bookings: &[Booking],
    filter: &ReportFilter,
    now: PrimitiveDateTime,
) -> MeetingReport {
    let matched: Vec<&Booking> = bookings.iter().filter(|b| filter.matches(b)).collect();

    let total_meetings: u64 = matched.len() as u64;
    let canceled_count: u64 = matched
        .iter()
        .filter(|b| b.status == BookingStatus::Cancelled)
        .count() as u64;

    let cancellation_rate: f64 = if total_meetings == 0 {
        0.0
    } else {
        100.0 * canceled_count as f64 / total_meetings as f64
    };

    // Duration list: non-cancelled bookings with positive duration,
    // sorted ascending. Feeds both the mean and the upper median.
    let mut durations: Vec<u32> = matched
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .map(|b| u32::from(b.slot.duration_minutes()))
        .filter(|&d| d > 0)
        .collect();
    durations.sort_unstable();

    let average_duration: f64 = if durations.is_empty() {
        0.0
    } else {
        f64::from(durations.iter().sum::<u32>()) / durations.len() as f64
    };
    let median_duration: u32 = durations.get(durations.len() / 2).copied().unwrap_or(0);

    let mut by_date: BTreeMap<String, u64> = BTreeMap::new();
    let mut by_week: BTreeMap<String, u64> = BTreeMap::new();
    for booking in &matched {
        *by_date.entry(booking.date.iso_string()).or_insert(0) += 1;
        *by_week
            .entry(booking.date.week_start().iso_string())
            .or_insert(0) += 1;
    }

    let mut canceled: u64 = 0;
    let mut upcoming: u64 = 0;
    let mut completed: u64 = 0;
    for booking in &matched {
        if booking.status == BookingStatus::Cancelled {
            canceled += 1;
        } else if now < end_instant(booking) {
            upcoming += 1;
        } else {
            completed += 1;
        }
    }
    let status_distribution: Vec<(StatusBucket, u64)> = [
        (StatusBucket::Canceled, canceled),
        (StatusBucket::Upcoming, upcoming),
        (StatusBucket::Completed, completed),
    ]
    .into_iter()
    .filter(|&(_, count)| count > 0)
    .collect();

    MeetingReport {
        total_meetings,
        average_duration,
        median_duration,
        cancellation_rate,
        meetings_over_time: by_date.into_iter().collect(),
        meetings_per_period: by_week.into_iter().collect(),
        status_distribution,
    }
}
