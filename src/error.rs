// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the tick-range API.

use thiserror::Error;

/// Rejection raised by every mutating entry point of
/// [`TickRange`](crate::TickRange).
///
/// A tick range is immutable for its entire lifetime; the mutating half of
/// the collection surface exists only to refuse, synchronously and with no
/// partial effect.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("tick ranges are immutable: '{operation}' is not supported")]
pub struct UnsupportedOperation {
    operation: &'static str,
}

impl UnsupportedOperation {
    pub(crate) const fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    /// Name of the rejected operation.
    pub const fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Unknown granularity name passed to [`TickUnit`](crate::TickUnit)'s
/// `FromStr` implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid tick unit '{value}', expected one of ms, s, m, h, d")]
pub struct ParseUnitError {
    pub(crate) value: String,
}

impl ParseUnitError {
    /// The input that failed to parse.
    pub fn value(&self) -> &str {
        &self.value
    }
}
