// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tick Range Module
//!
//! This crate provides an immutable, enumerable range of evenly-spaced
//! UTC time points ("ticks") between two timestamps, so that calling code
//! can treat "every hour between X and Y" as a read-only sequence without
//! computing bounds, rounding, or iteration logic by hand.
//!
//! # Core types
//!
//! - [`TickRange`] — normalised `[from, to]` range producing one tick per
//!   unit; supports size, membership, equality, hashing, and rendering.
//! - [`TickUnit`] — fixed-duration granularity used both to truncate the
//!   endpoints and to step between ticks.
//! - [`Ticks`] — lazy, restartable iterator over the ticks of a range.
//! - [`UnsupportedOperation`] — rejection returned by the mutating half
//!   of the collection surface.
//!
//! # Tick units
//!
//! | Unit | Step |
//! |------|------|
//! | [`TickUnit::Milliseconds`] | 1 ms |
//! | [`TickUnit::Seconds`] | 1 s |
//! | [`TickUnit::Minutes`] | 60 s |
//! | [`TickUnit::Hours`] | 3 600 s |
//! | [`TickUnit::Days`] | 86 400 s |
//!
//! Calendar units coarser than a day vary in length and cannot be
//! expressed as a fixed step, so they are not representable.
//!
//! # Normalisation
//!
//! The constructor does all the work up front: absent inputs are
//! defaulted (unit to hours, `to` to now, `from` to one unit before now),
//! both endpoints are truncated to the start of their unit, and the
//! endpoints are reordered so that `from <= to` always holds. The
//! resulting value never changes and is safe to share across threads.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tickrange::{TickRange, TickUnit};
//!
//! let range = TickRange::new(
//!     Some(Utc.with_ymd_and_hms(2016, 2, 14, 3, 17, 27).unwrap()),
//!     Some(Utc.with_ymd_and_hms(2016, 2, 14, 5, 43, 17).unwrap()),
//!     Some(TickUnit::Hours),
//! );
//!
//! let ticks: Vec<_> = range.iter().collect();
//! assert_eq!(ticks[0], Utc.with_ymd_and_hms(2016, 2, 14, 3, 0, 0).unwrap());
//! assert_eq!(ticks[1], Utc.with_ymd_and_hms(2016, 2, 14, 4, 0, 0).unwrap());
//! assert_eq!(ticks[2], Utc.with_ymd_and_hms(2016, 2, 14, 5, 0, 0).unwrap());
//! ```

mod error;
mod iter;
mod range;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{ParseUnitError, UnsupportedOperation};
pub use iter::Ticks;
pub use range::TickRange;
pub use unit::TickUnit;
