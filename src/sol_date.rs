// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mars Sol Date and Coordinated Mars Time
//!
//! The Mars Sol Date (MSD) is a continuous count of mean solar days on Mars,
//! the Martian analogue of the Julian Date.  Sol 0 is pinned so that MSD
//! 44 796.0 falls near midnight at the Airy-0 meridian on 2000-01-06:
//!
//! ```text
//! MSD = (JD(TT) − 2 451 549.5) / 1.027 491 251 7 + 44 796.0 − 0.000 962 6
//! MTC = 24 h × frac(MSD)
//! ```
//!
//! The `0.000 962 6` sol term is the calibration adjustment that aligns the
//! count with the Airy-0 transit; the leap-second correction happens earlier,
//! on the UTC → TT step.
//!
//! ## Quick Example
//! ```rust
//! use areochron::{JulianDate, MarsSolDate};
//!
//! let jd = JulianDate::new(2_451_549.5); // 2000-01-06T00:00:00Z
//! let msd = MarsSolDate::from_julian_date(jd).unwrap();
//! assert!((msd.value() - 44_796.0).abs() < 1e-3);
//! println!("{msd}, MTC {}", msd.coordinated_time());
//! ```
//!
//! ## Scientific References
//! * Allison & McEwen (2000), Planet. Space Sci. 48, 215, eqs. C-2.
//! * NASA GISS *Mars24 Sunclock* algorithm notes, §C.

use qtty::*;
use std::fmt;

use crate::error::{ensure_finite, ConversionResult};
use crate::instant::Time;
use crate::scales::{TT, UTC};
use crate::solar_time::{SolarTime, HOURS_PER_SOL};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A continuous count of Mars mean solar days.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct MarsSolDate {
    sols: f64,
}

impl MarsSolDate {
    /// JD(TT) at which the linear scale is anchored.
    pub const EPOCH: Time<TT> = Time::new(2_451_549.5);

    /// MSD value at [`Self::EPOCH`], before calibration.
    pub const SOLS_AT_EPOCH: f64 = 44_796.0;

    /// Airy-0 transit calibration, in sols.
    pub const CALIBRATION: f64 = 0.000_962_6;

    /// Length of one mean sol in Earth days.
    pub const SOL: Days = Days::new(1.027_491_251_7);

    /// Wrap a raw sol count.
    #[inline]
    pub const fn new(sols: f64) -> Self {
        Self { sols }
    }

    /// Mars Sol Date of an instant on the TT axis.
    ///
    /// Fails only for a non-finite Julian Date.
    pub fn from_terrestrial(jd_tt: Time<TT>) -> ConversionResult<Self> {
        let elapsed = ((jd_tt - Self::EPOCH) / Self::SOL).simplify().value();
        let sols = elapsed + Self::SOLS_AT_EPOCH - Self::CALIBRATION;
        ensure_finite(sols, "mars sol date").map(Self::new)
    }

    /// Mars Sol Date of a civil Julian Date (UTC axis); leap seconds are
    /// applied on the way to TT.
    #[inline]
    pub fn from_julian_date(jd: Time<UTC>) -> ConversionResult<Self> {
        Self::from_terrestrial(jd.to::<TT>())
    }

    /// Inverse of [`Self::from_terrestrial`].
    pub fn to_terrestrial(&self) -> Time<TT> {
        let elapsed = self.sols - Self::SOLS_AT_EPOCH + Self::CALIBRATION;
        Self::EPOCH + Days::new(elapsed * Self::SOL.value())
    }

    /// Raw sol count.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.sols
    }

    /// Integer sol number (floor of the MSD).
    #[inline]
    pub fn sol_number(&self) -> i64 {
        self.sols.floor() as i64
    }

    /// Fraction of the current sol elapsed at the prime meridian, `[0, 1)`.
    #[inline]
    pub fn fraction(&self) -> f64 {
        crate::solar_time::wrap(self.sols, 1.0)
    }

    /// Coordinated Mars Time (MTC): mean solar time at Airy-0.
    #[inline]
    pub fn coordinated_time(&self) -> SolarTime {
        SolarTime::from_hours(HOURS_PER_SOL * self.fraction())
    }

    /// Advance by a (possibly fractional, possibly negative) number of sols.
    #[inline]
    pub fn add_sols(self, sols: f64) -> Self {
        Self::new(self.sols + sols)
    }
}

impl fmt::Display for MarsSolDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MSD {:.5}", self.sols)
    }
}

/// Mars Sol Date and Coordinated Mars Time for a civil Julian Date.
pub fn mars_sol_date(jd: Time<UTC>) -> ConversionResult<(MarsSolDate, SolarTime)> {
    let msd = MarsSolDate::from_julian_date(jd)?;
    Ok((msd, msd.coordinated_time()))
}
