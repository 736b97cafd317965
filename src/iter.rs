// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lazy iteration over the ticks of a range.

use std::iter::FusedIterator;

use chrono::{DateTime, Duration, Utc};

use crate::TickRange;

/// Iterator over the ticks of a [`TickRange`], earliest first.
///
/// Each traversal owns its own cursor, so iterating never mutates the
/// parent range and a fresh call to [`TickRange::iter`] restarts from the
/// beginning. The sequence is `from, from + 1·unit, …, to` inclusive; a
/// degenerate range (`from == to`) still yields its single shared
/// endpoint.
#[derive(Debug, Clone)]
pub struct Ticks {
    cursor: Option<DateTime<Utc>>,
    end: DateTime<Utc>,
    step: Duration,
}

impl Ticks {
    pub(crate) fn new(range: &TickRange) -> Self {
        Self {
            cursor: Some(range.from()),
            end: range.to(),
            step: range.unit().duration(),
        }
    }
}

impl Iterator for Ticks {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        // Emit the cursor, then advance; anything strictly past the end
        // terminates the traversal.
        self.cursor = match current.checked_add_signed(self.step) {
            Some(next) if next <= self.end => Some(next),
            _ => None,
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.cursor {
            // The cursor stays on the tick grid, so the division is exact.
            Some(cursor) => {
                ((self.end - cursor).num_milliseconds() / self.step.num_milliseconds()) as u64 + 1
            }
            None => 0,
        };
        (
            usize::try_from(remaining).unwrap_or(usize::MAX),
            usize::try_from(remaining).ok(),
        )
    }
}

impl FusedIterator for Ticks {}

impl IntoIterator for TickRange {
    type Item = DateTime<Utc>;
    type IntoIter = Ticks;

    fn into_iter(self) -> Self::IntoIter {
        Ticks::new(&self)
    }
}

impl IntoIterator for &TickRange {
    type Item = DateTime<Utc>;
    type IntoIter = Ticks;

    fn into_iter(self) -> Self::IntoIter {
        Ticks::new(self)
    }
}
