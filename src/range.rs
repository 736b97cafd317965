// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The tick range value type.
//!
//! This module provides:
//! - [`TickRange`]: an immutable `[from, to]` range of UTC timestamps
//!   emitting one tick per [`TickUnit`]
//! - the read-only collection surface (size, membership, iteration) and
//!   the mutating surface that exists only to be refused

use std::fmt;

use chrono::{DateTime, Duration, Utc};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::{TickUnit, Ticks, UnsupportedOperation};

/// An immutable range of evenly-spaced time ticks.
///
/// A `TickRange` owns two normalised endpoints and a granularity. The
/// constructor performs all normalisation: absent inputs are defaulted,
/// both endpoints are truncated to the start of their unit, and the
/// endpoints are reordered so that `from <= to` always holds. After
/// construction the range never changes.
///
/// Ticks run from `from` to `to` inclusive, one [`TickUnit`] apart. For
/// example, `2016-02-14T03:17:27Z` to `2016-02-14T05:43:17Z` with an
/// hourly tick spans `{03:00:00Z, 04:00:00Z, 05:00:00Z}`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use tickrange::{TickRange, TickUnit};
///
/// let range = TickRange::new(
///     Some(Utc.with_ymd_and_hms(2016, 2, 14, 3, 17, 27).unwrap()),
///     Some(Utc.with_ymd_and_hms(2016, 2, 14, 5, 43, 17).unwrap()),
///     Some(TickUnit::Hours),
/// );
///
/// assert_eq!(range.from(), Utc.with_ymd_and_hms(2016, 2, 14, 3, 0, 0).unwrap());
/// assert_eq!(range.to(), Utc.with_ymd_and_hms(2016, 2, 14, 5, 0, 0).unwrap());
/// assert_eq!(range.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    unit: TickUnit,
}

impl TickRange {
    /// Creates a range which will tick across the specified unit.
    ///
    /// Normalisation rules:
    /// - absent `unit` defaults to [`TickUnit::Hours`];
    /// - absent `from` defaults to one unit before now, absent `to` to
    ///   now (the wall clock is read only when a default is needed);
    /// - both endpoints are truncated to the start of their unit;
    /// - the endpoints are then ordered, so swapping `from` and `to`
    ///   yields an identical range.
    ///
    /// Construction never fails: every input combination produces a
    /// valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tickrange::{TickRange, TickUnit};
    ///
    /// let a = Utc.with_ymd_and_hms(2016, 2, 14, 3, 17, 27).unwrap();
    /// let b = Utc.with_ymd_and_hms(2016, 2, 14, 5, 43, 17).unwrap();
    ///
    /// let forward = TickRange::new(Some(a), Some(b), Some(TickUnit::Hours));
    /// let reversed = TickRange::new(Some(b), Some(a), Some(TickUnit::Hours));
    /// assert_eq!(forward, reversed);
    ///
    /// // All defaults: the last hour, at hourly granularity.
    /// let last_hour = TickRange::new(None, None, None);
    /// assert!(last_hour.from() < last_hour.to());
    /// assert_eq!(last_hour.unit(), TickUnit::Hours);
    /// ```
    pub fn new(
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        unit: Option<TickUnit>,
    ) -> Self {
        let unit = unit.unwrap_or_default();

        let (trial_from, trial_to) = match (from, to) {
            (Some(f), Some(t)) => (f, t),
            _ => {
                let now = Utc::now();
                (
                    from.unwrap_or_else(|| now - unit.duration()),
                    to.unwrap_or(now),
                )
            }
        };

        let a = unit.truncate(trial_from);
        let b = unit.truncate(trial_to);
        if a <= b {
            Self {
                from: a,
                to: b,
                unit,
            }
        } else {
            Self {
                from: b,
                to: a,
                unit,
            }
        }
    }

    /// The normalised start of the range.
    #[inline]
    pub const fn from(&self) -> DateTime<Utc> {
        self.from
    }

    /// The normalised end of the range.
    #[inline]
    pub const fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// The tick granularity in use.
    #[inline]
    pub const fn unit(&self) -> TickUnit {
        self.unit
    }

    /// Elapsed wall time between the normalised endpoints.
    #[inline]
    pub fn span(&self) -> Duration {
        self.to - self.from
    }

    /// Number of ticks in the inclusive range: whole elapsed units
    /// between `from` and `to`, plus one for the starting tick.
    ///
    /// Note that this is not completely in agreement with
    /// [`is_empty`](Self::is_empty): a degenerate range (`from == to`)
    /// reports itself empty yet still has exactly one tick.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tickrange::{TickRange, TickUnit};
    ///
    /// let range = TickRange::new(
    ///     Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
    ///     Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()),
    ///     Some(TickUnit::Hours),
    /// );
    /// assert_eq!(range.len(), 11);
    /// ```
    pub fn len(&self) -> u64 {
        let step = self.unit.duration().num_milliseconds();
        let elapsed = (self.to - self.from).num_milliseconds();
        (elapsed / step) as u64 + 1
    }

    /// Whether the range spans zero elapsed time (`from == to`).
    ///
    /// Deliberately not `len() == 0`: an empty range still yields its
    /// single shared endpoint when iterated, so `len()` is never zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Returns a fresh, lazy traversal of the ticks, earliest first.
    ///
    /// Every call starts over from `from`; consuming one traversal does
    /// not affect the range or any other traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use tickrange::{TickRange, TickUnit};
    ///
    /// let range = TickRange::new(
    ///     Some(Utc.with_ymd_and_hms(2016, 2, 14, 3, 0, 0).unwrap()),
    ///     Some(Utc.with_ymd_and_hms(2016, 2, 14, 5, 0, 0).unwrap()),
    ///     Some(TickUnit::Hours),
    /// );
    ///
    /// let ticks: Vec<_> = range.iter().collect();
    /// assert_eq!(ticks.len(), 3);
    /// assert_eq!(ticks[1], Utc.with_ymd_and_hms(2016, 2, 14, 4, 0, 0).unwrap());
    /// ```
    #[inline]
    pub fn iter(&self) -> Ticks {
        Ticks::new(self)
    }

    /// Whether `candidate` falls inside the range.
    ///
    /// True when the candidate equals `from`, equals `to`, or lies
    /// strictly between the two; an absent candidate is never contained.
    /// Containment does not require alignment to the tick grid: any
    /// timestamp between the endpoints counts, even one that no
    /// traversal would ever yield. Callers probing with un-truncated
    /// timestamps rely on this looseness.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{DateTime, TimeZone, Utc};
    /// use tickrange::{TickRange, TickUnit};
    ///
    /// let range = TickRange::new(
    ///     Some(Utc.with_ymd_and_hms(2016, 2, 14, 3, 0, 0).unwrap()),
    ///     Some(Utc.with_ymd_and_hms(2016, 2, 14, 5, 0, 0).unwrap()),
    ///     Some(TickUnit::Hours),
    /// );
    ///
    /// assert!(range.contains(range.from()));
    /// // Off-grid, but between the endpoints.
    /// assert!(range.contains(Utc.with_ymd_and_hms(2016, 2, 14, 4, 17, 42).unwrap()));
    /// assert!(!range.contains(Utc.with_ymd_and_hms(2016, 2, 14, 6, 0, 0).unwrap()));
    /// assert!(!range.contains(None::<DateTime<Utc>>));
    /// ```
    pub fn contains<T>(&self, candidate: T) -> bool
    where
        T: Into<Option<DateTime<Utc>>>,
    {
        match candidate.into() {
            Some(t) => self.from <= t && t <= self.to,
            None => false,
        }
    }

    /// Whether every candidate falls inside the range.
    ///
    /// An absent collection automatically returns false; an empty one
    /// is trivially all-contained.
    pub fn contains_all<I>(&self, candidates: Option<I>) -> bool
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        match candidates {
            Some(items) => items.into_iter().all(|t| self.contains(t)),
            None => false,
        }
    }

    // ── rejected mutation ─────────────────────────────────────────────
    //
    // The mutating half of the collection surface is present for callers
    // that expect it, and every entry point refuses with no partial
    // effect.

    /// Modifying the range is not supported; always returns
    /// [`UnsupportedOperation`].
    pub fn insert(&mut self, _tick: DateTime<Utc>) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("insert"))
    }

    /// Modifying the range is not supported; always returns
    /// [`UnsupportedOperation`].
    pub fn remove(&mut self, _tick: DateTime<Utc>) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("remove"))
    }

    /// Modifying the range is not supported; always returns
    /// [`UnsupportedOperation`].
    pub fn insert_all<I>(&mut self, _ticks: I) -> Result<(), UnsupportedOperation>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        Err(UnsupportedOperation::new("insert_all"))
    }

    /// Modifying the range is not supported; always returns
    /// [`UnsupportedOperation`].
    pub fn remove_all<I>(&mut self, _ticks: I) -> Result<(), UnsupportedOperation>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        Err(UnsupportedOperation::new("remove_all"))
    }

    /// Modifying the range is not supported; always returns
    /// [`UnsupportedOperation`].
    pub fn retain<F>(&mut self, _keep: F) -> Result<(), UnsupportedOperation>
    where
        F: FnMut(&DateTime<Utc>) -> bool,
    {
        Err(UnsupportedOperation::new("retain"))
    }

    /// Modifying the range is not supported; always returns
    /// [`UnsupportedOperation`].
    pub fn clear(&mut self) -> Result<(), UnsupportedOperation> {
        Err(UnsupportedOperation::new("clear"))
    }
}

/// The last hour at hourly granularity, equivalent to
/// `TickRange::new(None, None, None)`.
impl Default for TickRange {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} by {}", self.from, self.to, self.unit)
    }
}

// Serde support for TickRange.
//
// Deserialisation routes through `TickRange::new` so arbitrary input is
// re-normalised and the `from <= to` invariant always holds.
#[cfg(feature = "serde")]
impl Serialize for TickRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TickRange", 3)?;
        s.serialize_field("from", &self.from)?;
        s.serialize_field("to", &self.to)?;
        s.serialize_field("unit", &self.unit)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TickRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            from: DateTime<Utc>,
            to: DateTime<Utc>,
            unit: TickUnit,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(TickRange::new(Some(raw.from), Some(raw.to), Some(raw.unit)))
    }
}
