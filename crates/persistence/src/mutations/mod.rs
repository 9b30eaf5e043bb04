// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-path operations.
//!
//! All mutations that must observe a consistent view of existing rows
//! (booking creation in particular) run inside an immediate transaction
//! so the availability re-check and the insert are atomic.

pub mod bookings;
pub mod rooms;

pub use bookings::{cancel_booking, create_booking};
pub use rooms::create_room;
