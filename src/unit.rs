// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tick granularity units.
//!
//! A [`TickUnit`] is a fixed-duration step used both to truncate the
//! endpoints of a [`TickRange`](crate::TickRange) and to advance from one
//! tick to the next.
//!
//! | Unit | Step |
//! |------|------|
//! | [`TickUnit::Milliseconds`] | 1 ms |
//! | [`TickUnit::Seconds`] | 1 s |
//! | [`TickUnit::Minutes`] | 60 s |
//! | [`TickUnit::Hours`] | 3 600 s |
//! | [`TickUnit::Days`] | 86 400 s |
//!
//! Calendar units coarser than a day (months, years) have no fixed
//! duration and therefore no `TickUnit` variant; a day is the coarsest
//! supported step.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ParseUnitError;

/// A fixed-duration tick granularity.
///
/// The unit plays two roles: endpoints of a range are truncated to the
/// start of their unit, and successive ticks are spaced exactly one unit
/// apart. The default unit is [`TickUnit::Hours`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TickUnit {
    /// One millisecond per tick.
    Milliseconds,
    /// One second per tick.
    Seconds,
    /// One minute per tick.
    Minutes,
    /// One hour per tick.
    #[default]
    Hours,
    /// One day per tick. Days are fixed 86 400-second steps on the UTC
    /// axis, not calendar days subject to zone transitions.
    Days,
}

impl TickUnit {
    /// Every supported unit, finest first.
    pub const ALL: [Self; 5] = [
        Self::Milliseconds,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
    ];

    /// The exact step length of one tick.
    #[inline]
    pub fn duration(self) -> Duration {
        match self {
            Self::Milliseconds => Duration::milliseconds(1),
            Self::Seconds => Duration::seconds(1),
            Self::Minutes => Duration::minutes(1),
            Self::Hours => Duration::hours(1),
            Self::Days => Duration::days(1),
        }
    }

    /// Align `instant` to the start of its unit, zeroing every finer
    /// field.
    ///
    /// Truncation floors toward the past, also for pre-epoch timestamps:
    /// `1969-12-31T22:47:13Z` truncated to hours is
    /// `1969-12-31T22:00:00Z`, not `23:00:00Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tickrange::TickUnit;
    ///
    /// let instant = Utc.with_ymd_and_hms(2016, 2, 14, 3, 17, 27).unwrap();
    /// assert_eq!(
    ///     TickUnit::Hours.truncate(instant),
    ///     Utc.with_ymd_and_hms(2016, 2, 14, 3, 0, 0).unwrap(),
    /// );
    /// ```
    pub fn truncate(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let step = self.duration().num_milliseconds();
        let millis = instant.timestamp_millis();
        let aligned = millis - millis.rem_euclid(step);
        // Flooring moves the instant earlier by less than one unit; the
        // only way out of chrono's representable range is within one day
        // of its minimum, where the aligned minimum is the right answer.
        DateTime::from_timestamp_millis(aligned).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Canonical unit name, as rendered by `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }
}

impl Display for TickUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TickUnit {
    type Err = ParseUnitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ms" | "millis" | "milliseconds" => Ok(Self::Milliseconds),
            "s" | "sec" | "seconds" => Ok(Self::Seconds),
            "m" | "min" | "minutes" => Ok(Self::Minutes),
            "h" | "hour" | "hours" => Ok(Self::Hours),
            "d" | "day" | "days" => Ok(Self::Days),
            other => Err(ParseUnitError {
                value: other.to_owned(),
            }),
        }
    }
}
