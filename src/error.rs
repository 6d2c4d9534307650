// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised by the conversion chain.
//!
//! Each stage validates its own inputs and returns a [`ConversionError`]; the
//! orchestrating [`ConversionService`](crate::ConversionService) propagates
//! them unchanged.  Callers that only need the violated constraint (e.g. an
//! HTTP layer building its own payload) use [`ConversionError::kind`].

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result alias used across the crate.
pub type ConversionResult<T> = Result<T, ConversionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The civil timestamp could not be parsed or names an impossible date/time.
    #[error("invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    /// Latitude outside `[-90, 90]` degrees, or not finite.
    #[error("latitude {0}° is outside [-90, 90]")]
    InvalidLatitude(f64),

    /// Longitude outside the accepted `[-180, 360]` degree domain, or not finite.
    #[error("longitude {0}° is outside [-180, 360]")]
    InvalidLongitude(f64),

    /// A stage produced a non-finite value.
    #[error("non-finite value produced by {stage}")]
    NumericOverflow { stage: &'static str },
}

impl ConversionError {
    pub fn invalid_timestamp(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn numeric_overflow(stage: &'static str) -> Self {
        Self::NumericOverflow { stage }
    }

    /// The structured kind of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTimestamp { .. } => ErrorKind::InvalidTimestamp,
            Self::InvalidLatitude(_) => ErrorKind::InvalidLatitude,
            Self::InvalidLongitude(_) => ErrorKind::InvalidLongitude,
            Self::NumericOverflow { .. } => ErrorKind::NumericOverflow,
        }
    }
}

/// Payload-free discriminant of [`ConversionError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    InvalidTimestamp,
    InvalidLatitude,
    InvalidLongitude,
    NumericOverflow,
}

impl ErrorKind {
    /// Name of the violated constraint.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidTimestamp => "InvalidTimestamp",
            Self::InvalidLatitude => "InvalidLatitude",
            Self::InvalidLongitude => "InvalidLongitude",
            Self::NumericOverflow => "NumericOverflow",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `value` when finite, otherwise a [`ConversionError::NumericOverflow`]
/// attributed to `stage`.
#[inline]
pub(crate) fn ensure_finite(value: f64, stage: &'static str) -> ConversionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::numeric_overflow(stage))
    }
}
