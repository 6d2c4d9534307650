// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mars orbital position and the Equation of Time
//!
//! Mean solar time runs uniformly; the real Sun does not.  Two effects make
//! the apparent Sun drift against the mean clock:
//!
//! * **orbital eccentricity** (e ≈ 0.0934): captured by the *equation of
//!   center* `ν − M`, the gap between true and mean anomaly;
//! * **axial tilt** (≈ 25.2°): captured by the `sin 2Ls`, `sin 4Ls`,
//!   `sin 6Ls` reduction-to-equator series.
//!
//! Their sum is the Equation of Time (EOT), bounded to roughly −51 / +40
//! minutes on Mars.  All angles in this module are **degrees**; conversion to
//! radians happens exactly at each trigonometric call.
//!
//! ## Algorithm (Mars24, Allison & McEwen 2000)
//!
//! With `Δt = JD(TT) − 2 451 545.0`:
//!
//! | Eq. | Quantity |
//! |-----|----------|
//! | B-1 | `M = 19.3871° + 0.524 020 73° Δt` |
//! | B-2 | `α_FMS = 270.3871° + 0.524 038 496° Δt` |
//! | B-3 | `PBS = Σ Aᵢ cos(0.985 626° Δt / τᵢ + φᵢ)` |
//! | B-4 | `ν − M = (10.691 + 3.0×10⁻⁷ Δt) sin M + 0.623 sin 2M + 0.050 sin 3M + 0.005 sin 4M + 0.0005 sin 5M + PBS` |
//! | B-5 | `Ls = α_FMS + (ν − M)` |
//! | C-1 | `EOT = 2.861 sin 2Ls − 0.071 sin 4Ls + 0.002 sin 6Ls − (ν − M)` |
//!
//! ## Scientific References
//! * Allison & McEwen (2000), Planet. Space Sci. 48, 215.
//! * Allison (1997), Geophys. Res. Lett. 24, 1967.

use qtty::Days;
use std::fmt;

use crate::instant::Time;
use crate::scales::{TT, UTC};
use crate::solar_time::{wrap, DEGREES_PER_HOUR};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FULL_CIRCLE: f64 = 360.0;

/// Minutes of clock time per degree of hour angle (24 h × 60 / 360).
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Earth days in one Mars tropical year (668.6 sols).
pub const MARS_YEAR: Days = Days::new(686.971);

/// Planetary perturbation terms for B-3: `(Aᵢ [deg], τᵢ [Julian yr], φᵢ [deg])`.
#[rustfmt::skip]
const PERTURBERS: [(f64, f64, f64); 7] = [
    (0.0071,  2.2353,  49.409),
    (0.0057,  2.7543, 168.173),
    (0.0039,  1.1177, 191.837),
    (0.0037, 15.7866,  21.736),
    (0.0021,  2.1354,  15.704),
    (0.0020,  2.4694,  95.528),
    (0.0018, 32.8493,  49.095),
];

// ------------------------------------------------------------------------------------
// Value types
// ------------------------------------------------------------------------------------

/// Areocentric solar longitude `Ls`, degrees in `[0, 360)`.
///
/// `Ls = 0°` is the Mars northern vernal equinox; 90°, 180° and 270° are the
/// northern summer solstice, autumn equinox and winter solstice.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct SolarLongitude {
    degrees: f64,
}

impl SolarLongitude {
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: wrap(degrees, FULL_CIRCLE),
        }
    }

    #[inline]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.degrees.to_radians()
    }
}

impl fmt::Display for SolarLongitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ls {:.3}°", self.degrees)
    }
}

/// Signed offset of true from mean solar time.
///
/// Positive values mean the true Sun is ahead of the mean Sun (sundial time
/// later than mean time).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct EquationOfTime {
    degrees: f64,
}

impl EquationOfTime {
    #[inline]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self { degrees }
    }

    #[inline]
    pub fn from_minutes(minutes: f64) -> Self {
        Self::from_degrees(minutes / MINUTES_PER_DEGREE)
    }

    /// Offset as an hour angle in degrees.
    #[inline]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Offset in Mars clock minutes.
    #[inline]
    pub fn minutes(&self) -> f64 {
        self.degrees * MINUTES_PER_DEGREE
    }

    /// Offset in Mars clock hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.degrees / DEGREES_PER_HOUR
    }
}

impl fmt::Display for EquationOfTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EOT {:+.2} min", self.minutes())
    }
}

// ------------------------------------------------------------------------------------
// Orbital terms
// ------------------------------------------------------------------------------------

/// **B-1** Mars mean anomaly, degrees (unwrapped).
#[inline]
fn mean_anomaly(dt: f64) -> f64 {
    19.3871 + 0.524_020_73 * dt
}

/// **B-2** Angle of the Fictitious Mean Sun, degrees (unwrapped).
#[inline]
fn fictitious_mean_sun(dt: f64) -> f64 {
    270.3871 + 0.524_038_496 * dt
}

/// **B-3** Sum of planetary perturbations, degrees.
#[inline]
fn perturbers(dt: f64) -> f64 {
    PERTURBERS
        .iter()
        .map(|&(a, tau, phi)| a * ((0.985_626 * dt / tau) + phi).to_radians().cos())
        .sum()
}

/// **B-4** Equation of center `ν − M`, degrees.
#[inline]
fn equation_of_center(dt: f64, m_deg: f64, pbs: f64) -> f64 {
    let m = m_deg.to_radians();
    (10.691 + 3.0e-7 * dt) * m.sin()
        + 0.623 * (2.0 * m).sin()
        + 0.050 * (3.0 * m).sin()
        + 0.005 * (4.0 * m).sin()
        + 0.0005 * (5.0 * m).sin()
        + pbs
}

/// **C-1** Equation of time, degrees.
#[inline]
fn equation_of_time_degrees(ls: SolarLongitude, center: f64) -> f64 {
    let ls = ls.radians();
    2.861 * (2.0 * ls).sin() - 0.071 * (4.0 * ls).sin() + 0.002 * (6.0 * ls).sin() - center
}

/// Every intermediate of the Mars24 solar-position chain at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalState {
    /// Days since J2000.0 on the TT axis.
    pub days_since_j2000: f64,
    /// Mean anomaly, degrees in `[0, 360)`.
    pub mean_anomaly: f64,
    /// Fictitious Mean Sun, degrees in `[0, 360)`.
    pub fictitious_mean_sun: f64,
    /// Perturbation sum, degrees.
    pub perturbers: f64,
    /// Equation of center `ν − M`, degrees.
    pub equation_of_center: f64,
    pub solar_longitude: SolarLongitude,
    pub equation_of_time: EquationOfTime,
}

impl OrbitalState {
    /// Evaluate the chain at an instant on the TT axis.
    pub fn at(jd_tt: Time<TT>) -> Self {
        let dt = jd_tt.days_since_j2000().value();

        let m = mean_anomaly(dt);
        let alpha_fms = fictitious_mean_sun(dt);
        let pbs = perturbers(dt);
        let center = equation_of_center(dt, m, pbs);
        let ls = SolarLongitude::from_degrees(alpha_fms + center);
        let eot = EquationOfTime::from_degrees(equation_of_time_degrees(ls, center));

        Self {
            days_since_j2000: dt,
            mean_anomaly: wrap(m, FULL_CIRCLE),
            fictitious_mean_sun: wrap(alpha_fms, FULL_CIRCLE),
            perturbers: pbs,
            equation_of_center: center,
            solar_longitude: ls,
            equation_of_time: eot,
        }
    }

    /// Evaluate the chain at a civil Julian Date (UTC axis).
    #[inline]
    pub fn at_julian_date(jd: Time<UTC>) -> Self {
        Self::at(jd.to::<TT>())
    }

    /// True anomaly `ν = M + (ν − M)`, degrees in `[0, 360)`.
    #[inline]
    pub fn true_anomaly(&self) -> f64 {
        wrap(self.mean_anomaly + self.equation_of_center, FULL_CIRCLE)
    }

    /// `true` if every field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.days_since_j2000,
            self.mean_anomaly,
            self.fictitious_mean_sun,
            self.perturbers,
            self.equation_of_center,
            self.solar_longitude.degrees(),
            self.equation_of_time.degrees(),
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Areocentric solar longitude and Equation of Time at a civil Julian Date.
pub fn equation_of_time(jd: Time<UTC>) -> (SolarLongitude, EquationOfTime) {
    let state = OrbitalState::at_julian_date(jd);
    (state.solar_longitude, state.equation_of_time)
}
