// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time of sol on the 24-hour Mars clock.
//!
//! Mars clocks divide each sol into 24 "Mars hours" of 60 minutes of 60
//! seconds.  [`SolarTime`] is the common representation for Coordinated Mars
//! Time (MTC), Local Mean Solar Time (LMST) and Local True Solar Time (LTST);
//! it always holds a value in `[0, 24)`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub(crate) const HOURS_PER_SOL: f64 = 24.0;
pub(crate) const DEGREES_PER_HOUR: f64 = 15.0;
const SECONDS_PER_SOL: u32 = 86_400;

/// Euclidean remainder into `[0, period)`.
///
/// `rem_euclid` can round up to exactly `period` for tiny negative inputs;
/// that case folds back to zero.
#[inline]
pub(crate) fn wrap(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

/// A time of sol in Mars hours, `[0, 24)`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SolarTime {
    hours: f64,
}

impl SolarTime {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self { hours: 0.0 };

    /// 12:00:00.
    pub const NOON: Self = Self { hours: 12.0 };

    /// Wrap an arbitrary hour value onto the clock.
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self {
            hours: wrap(hours, HOURS_PER_SOL),
        }
    }

    /// Hours past midnight, `[0, 24)`.
    #[inline]
    pub const fn hours(&self) -> f64 {
        self.hours
    }

    /// The same instant expressed as an hour angle in degrees, `[0, 360)`.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.hours * DEGREES_PER_HOUR
    }

    /// Shift by a signed number of hours, wrapping around midnight.
    #[inline]
    pub fn offset_by(self, hours: f64) -> Self {
        Self::from_hours(self.hours + hours)
    }

    /// Hours to advance from `self` to reach `later`, in `[0, 24)`.
    #[inline]
    pub fn hours_until(self, later: Self) -> f64 {
        wrap(later.hours - self.hours, HOURS_PER_SOL)
    }

    /// `(hour, minute, second)`, rounded to the nearest second.
    ///
    /// Rounding carries into minutes and hours; 23:59:59.6 reads 00:00:00.
    pub fn hms(&self) -> (u8, u8, u8) {
        let total = (self.hours * 3_600.0).round() as u32 % SECONDS_PER_SOL;
        (
            (total / 3_600) as u8,
            (total % 3_600 / 60) as u8,
            (total % 60) as u8,
        )
    }
}

impl fmt::Display for SolarTime {
    /// `HH:MM:SS`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.hms();
        write!(f, "{h:02}:{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negative_and_overflowing_values() {
        assert_eq!(wrap(-1.0, 24.0), 23.0);
        assert_eq!(wrap(25.5, 24.0), 1.5);
        assert_eq!(wrap(24.0, 24.0), 0.0);
        assert_eq!(wrap(-360.0, 360.0), 0.0);
        let tiny = wrap(-1e-18, 24.0);
        assert!((0.0..24.0).contains(&tiny), "{tiny}");
    }

    #[test]
    fn from_hours_always_lands_on_the_clock() {
        for h in [-48.25, -0.5, 0.0, 11.999, 23.999_999, 24.0, 1e6 + 0.25] {
            let t = SolarTime::from_hours(h);
            assert!((0.0..24.0).contains(&t.hours()), "{h} -> {}", t.hours());
        }
    }

    #[test]
    fn formats_as_hh_mm_ss() {
        assert_eq!(SolarTime::MIDNIGHT.to_string(), "00:00:00");
        assert_eq!(SolarTime::NOON.to_string(), "12:00:00");
        assert_eq!(SolarTime::from_hours(9.5).to_string(), "09:30:00");
        assert_eq!(SolarTime::from_hours(-0.25).to_string(), "23:45:00");
    }

    #[test]
    fn rounding_carries_into_minutes_and_hours() {
        let just_before = 10.0 + 59.0 / 60.0 + 59.6 / 3_600.0;
        assert_eq!(SolarTime::from_hours(just_before).to_string(), "11:00:00");
        let end_of_sol = 23.0 + 59.0 / 60.0 + 59.7 / 3_600.0;
        assert_eq!(SolarTime::from_hours(end_of_sol).to_string(), "00:00:00");
        assert_eq!(SolarTime::from_hours(1.0 + 0.4 / 3_600.0).hms(), (1, 0, 0));
    }

    #[test]
    fn offsets_and_intervals_wrap() {
        let t = SolarTime::from_hours(23.0);
        assert_eq!(t.offset_by(2.0).hours(), 1.0);
        assert_eq!(t.offset_by(-24.0).hours(), 23.0);
        assert_eq!(t.hours_until(SolarTime::from_hours(1.0)), 2.0);
        assert_eq!(SolarTime::from_hours(1.0).hours_until(t), 22.0);
    }

    #[test]
    fn degrees_are_fifteen_per_hour() {
        assert_eq!(SolarTime::from_hours(6.0).degrees(), 90.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_hours() {
        let json = serde_json::to_string(&SolarTime::from_hours(6.5)).unwrap();
        assert_eq!(json, "6.5");
    }
}
