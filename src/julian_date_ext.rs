// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch constants and helpers on the TT and UTC Julian-day axes.

use qtty::*;

use super::instant::Time;
use super::scales::{TT, UTC};

impl Time<TT> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Days elapsed since J2000.0 on the TT axis (Mars24's `ΔtJ2000`).
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        *self - Self::J2000
    }
}

impl Time<UTC> {
    /// Unix epoch, 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self::from_days(super::instant::UNIX_EPOCH_JD);

    /// Fraction of the civil day elapsed since 00:00 UTC, in `[0, 1)`.
    ///
    /// Julian days start at noon, so midnight sits on the `.5` boundary.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        (self.value() + 0.5).rem_euclid(1.0)
    }
}
