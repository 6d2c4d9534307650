// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Surface coordinates and local solar time.
//!
//! # Longitude convention
//!
//! Longitudes are **planetocentric, east-positive**, stored in `[0, 360)`.
//! This is the IAU/MOLA cartographic convention used by current Mars maps and
//! rover ground data.  Input is accepted in `[-180, 360]`, which covers both
//! the `±180` and the `0..360` east-longitude notations; anything else is
//! rejected rather than silently wrapped.
//!
//! Mars24 and older planetographic products quote **west** longitude.  Use
//! [`Longitude::west`] for those; it negates before normalising.
//!
//! ```text
//! LMST = wrap24(MTC + λ_E / 15)
//! LTST = wrap24(LMST + EOT_min / 60)
//! ```
//!
//! So moving 15° east advances local time by exactly one Mars hour.

use std::fmt;

use crate::equation_of_time::EquationOfTime;
use crate::error::{ConversionError, ConversionResult};
use crate::solar_time::{wrap, SolarTime, DEGREES_PER_HOUR};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FULL_CIRCLE: f64 = 360.0;

/// East longitude on Mars, degrees in `[0, 360)`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Longitude {
    east: f64,
}

impl Longitude {
    /// Smallest accepted input, degrees.
    pub const MIN_INPUT: f64 = -180.0;
    /// Largest accepted input, degrees.
    pub const MAX_INPUT: f64 = 360.0;

    /// The Airy-0 prime meridian.
    pub const PRIME_MERIDIAN: Self = Self { east: 0.0 };

    fn check(degrees: f64) -> ConversionResult<f64> {
        if degrees.is_finite() && (Self::MIN_INPUT..=Self::MAX_INPUT).contains(&degrees) {
            Ok(degrees)
        } else {
            Err(ConversionError::InvalidLongitude(degrees))
        }
    }

    /// From an east-positive longitude in `[-180, 360]`.
    pub fn east(degrees: f64) -> ConversionResult<Self> {
        let degrees = Self::check(degrees)?;
        Ok(Self {
            east: wrap(degrees, FULL_CIRCLE),
        })
    }

    /// From a west-positive longitude in `[-180, 360]`.
    pub fn west(degrees: f64) -> ConversionResult<Self> {
        let degrees = Self::check(degrees)?;
        Ok(Self {
            east: wrap(-degrees, FULL_CIRCLE),
        })
    }

    #[inline]
    pub const fn degrees_east(&self) -> f64 {
        self.east
    }

    #[inline]
    pub fn degrees_west(&self) -> f64 {
        wrap(-self.east, FULL_CIRCLE)
    }

    /// East longitude folded into `(-180, 180]`.
    #[inline]
    pub fn signed_degrees(&self) -> f64 {
        if self.east > 180.0 {
            self.east - FULL_CIRCLE
        } else {
            self.east
        }
    }

    /// Mars hours ahead of the prime meridian, `[0, 24)`.
    #[inline]
    pub fn hour_offset(&self) -> f64 {
        self.east / DEGREES_PER_HOUR
    }
}

impl TryFrom<f64> for Longitude {
    type Error = ConversionError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::east(degrees)
    }
}

impl From<Longitude> for f64 {
    fn from(longitude: Longitude) -> Self {
        longitude.east
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}°E", self.east)
    }
}

/// Planetocentric latitude, degrees in `[-90, 90]`.
///
/// Solar time does not depend on latitude; it is validated and carried so a
/// station's full position travels with its reading.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Latitude {
    degrees: f64,
}

impl Latitude {
    pub fn new(degrees: f64) -> ConversionResult<Self> {
        if degrees.is_finite() && (-90.0..=90.0).contains(&degrees) {
            Ok(Self { degrees })
        } else {
            Err(ConversionError::InvalidLatitude(degrees))
        }
    }

    #[inline]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }
}

impl TryFrom<f64> for Latitude {
    type Error = ConversionError;

    fn try_from(degrees: f64) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl From<Latitude> for f64 {
    fn from(latitude: Latitude) -> Self {
        latitude.degrees
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hemisphere = if self.degrees < 0.0 { 'S' } else { 'N' };
        write!(f, "{:.3}°{hemisphere}", self.degrees.abs())
    }
}

/// Local Mean Solar Time: MTC shifted by the longitude's hour offset.
#[inline]
pub fn local_mean_solar_time(mtc: SolarTime, longitude: Longitude) -> SolarTime {
    mtc.offset_by(longitude.hour_offset())
}

/// Local True Solar Time from a mean solar time and the Equation of Time.
#[inline]
pub fn true_from_mean(lmst: SolarTime, eot: EquationOfTime) -> SolarTime {
    lmst.offset_by(eot.hours())
}

/// Local True Solar Time at `longitude`.
#[inline]
pub fn local_true_solar_time(
    mtc: SolarTime,
    longitude: Longitude,
    eot: EquationOfTime,
) -> SolarTime {
    true_from_mean(local_mean_solar_time(mtc, longitude), eot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn east(deg: f64) -> Longitude {
        Longitude::east(deg).unwrap()
    }

    #[test]
    fn gale_crater_2024_06_01_noon_utc() {
        let mtc = SolarTime::from_hours(0.308_398_08);
        let eot = EquationOfTime::from_minutes(-9.019_376_23);
        let lmst = local_mean_solar_time(mtc, east(137.4));
        let ltst = local_true_solar_time(mtc, east(137.4), eot);
        assert!((lmst.hours() - 9.468_398_08).abs() < 1e-7);
        assert!((ltst.hours() - 9.318_075_14).abs() < 1e-7);
        assert_eq!(lmst.to_string(), "09:28:06");
        assert_eq!(ltst.to_string(), "09:19:05");
    }

    #[test]
    fn fifteen_degrees_east_is_one_hour_later() {
        let mtc = SolarTime::from_hours(20.666_479_8);
        let eot = EquationOfTime::from_minutes(35.888);
        for lon in [-180.0, -97.5, 0.0, 77.5, 137.4, 300.0, 345.0] {
            let here = local_true_solar_time(mtc, east(lon), eot);
            let there = local_true_solar_time(mtc, east(lon + 15.0), eot);
            let gap = here.hours_until(there);
            assert!((gap - 1.0).abs() < 1e-9, "lon {lon}: gap {gap}");
        }
    }

    #[test]
    fn boundary_longitudes_normalize() {
        assert_eq!(east(360.0), east(0.0));
        assert_eq!(east(-180.0), east(180.0));
        assert_eq!(east(-90.0).degrees_east(), 270.0);
        assert_eq!(Longitude::PRIME_MERIDIAN, east(0.0));

        let mtc = SolarTime::from_hours(3.25);
        let eot = EquationOfTime::from_minutes(-12.0);
        assert_eq!(
            local_true_solar_time(mtc, east(360.0), eot),
            local_true_solar_time(mtc, east(0.0), eot)
        );
    }

    #[test]
    fn west_longitude_is_negated() {
        assert_eq!(Longitude::west(90.0).unwrap().degrees_east(), 270.0);
        assert_eq!(Longitude::west(0.0).unwrap(), east(0.0));
        assert!((east(137.4).degrees_west() - 222.6).abs() < 1e-9);
        assert!((east(222.6).signed_degrees() - (-137.4)).abs() < 1e-9);
        assert_eq!(east(180.0).signed_degrees(), 180.0);
    }

    #[test]
    fn out_of_domain_longitudes_are_rejected() {
        for bad in [400.0, 360.000_001, -180.5, f64::NAN, f64::INFINITY] {
            let err = Longitude::east(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidLongitude, "{bad}");
        }
        assert!(Longitude::west(-200.0).is_err());
        assert_eq!(
            Longitude::try_from(400.0),
            Err(ConversionError::InvalidLongitude(400.0))
        );
    }

    #[test]
    fn latitude_is_validated() {
        assert_eq!(Latitude::new(-4.5).unwrap().degrees(), -4.5);
        assert!(Latitude::new(90.0).is_ok());
        assert!(Latitude::new(-90.0).is_ok());
        assert_eq!(Latitude::new(91.0), Err(ConversionError::InvalidLatitude(91.0)));
        assert!(Latitude::new(f64::NAN).is_err());
    }

    #[test]
    fn display_forms() {
        assert_eq!(east(137.4).to_string(), "137.400°E");
        assert_eq!(Latitude::new(-4.5).unwrap().to_string(), "4.500°S");
        assert_eq!(Latitude::new(18.4).unwrap().to_string(), "18.400°N");
    }

    #[test]
    fn results_always_on_the_clock() {
        let eot = EquationOfTime::from_minutes(-51.0);
        for k in 0..96 {
            let mtc = SolarTime::from_hours(k as f64 * 0.25);
            for lon in [-180.0, 0.0, 359.9] {
                let t = local_true_solar_time(mtc, east(lon), eot);
                assert!((0.0..24.0).contains(&t.hours()));
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_validates_coordinates() {
        let lon: Longitude = serde_json::from_str("-90.0").unwrap();
        assert_eq!(lon.degrees_east(), 270.0);
        assert!(serde_json::from_str::<Longitude>("400.0").is_err());
        assert!(serde_json::from_str::<Latitude>("91.0").is_err());
        assert_eq!(serde_json::to_string(&lon).unwrap(), "270.0");
    }
}
