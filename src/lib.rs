// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars solar time
//!
//! This crate converts an Earth UTC timestamp and a Martian surface location
//! into the Local True Solar Time (LTST) at that location, following the
//! Mars24 algorithm of Allison & McEwen (2000).
//!
//! # Conversion chain
//!
//! | Stage | Entry point | Output |
//! |-------|-------------|--------|
//! | civil time → Julian Date | [`civil::julian_date`] | [`JulianDate`] (UTC axis) |
//! | UTC → TT (leap seconds) | [`Time::to`] | [`TerrestrialTime`] |
//! | Mars epoch | [`MarsSolDate::from_terrestrial`] | [`MarsSolDate`], [`MarsCoordinatedTime`] |
//! | orbit | [`OrbitalState::at`] | [`SolarLongitude`], [`EquationOfTime`] |
//! | local time | [`local_true_solar_time`] | [`LocalMeanSolarTime`], [`LocalTrueSolarTime`] |
//!
//! [`ConversionService`] runs the chain end to end and validates inputs.
//!
//! # Core types
//!
//! - [`Time<S>`]: generic instant parameterised by a [`TimeScale`] marker.
//! - [`TimeScale`]: trait that relates a scale to JD(TT).
//! - [`SolarTime`]: a time of sol on the 24-hour Mars clock.
//! - [`Longitude`] / [`Latitude`]: validated planetocentric coordinates,
//!   longitude **east-positive**.
//! - [`ConversionError`]: every failure, with a payload-free [`ErrorKind`].
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`UTC`] | Coordinated Universal Time |
//! | [`TAI`] | International Atomic Time |
//! | [`TT`] | Terrestrial Time |
//!
//! # Example
//!
//! ```rust
//! use areochron::{stations, ConversionService};
//!
//! let service = ConversionService::new();
//! let gale = stations::GALE_CRATER;
//! let ltst = service
//!     .convert(gale.latitude, gale.longitude_east, "2024-06-01T12:00:00Z")
//!     .unwrap();
//! assert_eq!(ltst.to_string(), "09:19:05");
//! ```

pub mod civil;
mod equation_of_time;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod local_time;
pub(crate) mod scales;
mod service;
mod sol_date;
mod solar_time;
pub mod stations;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use civil::{julian_date, julian_date_from_calendar, parse_timestamp};
pub use equation_of_time::{
    equation_of_time, EquationOfTime, OrbitalState, SolarLongitude, MARS_YEAR,
};
pub use error::{ConversionError, ConversionResult, ErrorKind};
pub use instant::{Time, TimeScale};
pub use local_time::{
    local_mean_solar_time, local_true_solar_time, true_from_mean, Latitude, Longitude,
};
pub use scales::{tai_minus_utc, tt_minus_utc, TAI, TT, UTC};
pub use service::{ConversionService, MarsClockReading, StationClock};
pub use sol_date::{mars_sol_date, MarsSolDate};
pub use solar_time::SolarTime;
pub use stations::Station;

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date on the civil (UTC) axis.
///
/// This is a type alias for [`Time<UTC>`].
pub type JulianDate = Time<UTC>;

/// Julian Date on the Terrestrial Time axis, the argument of the orbital terms.
///
/// This is a type alias for [`Time<TT>`].
pub type TerrestrialTime = Time<TT>;

/// Mean solar time at the Airy-0 prime meridian.
pub type MarsCoordinatedTime = SolarTime;

/// Mean solar time at a given longitude.
pub type LocalMeanSolarTime = SolarTime;

/// Apparent (sundial) solar time at a given longitude.
pub type LocalTrueSolarTime = SolarTime;
