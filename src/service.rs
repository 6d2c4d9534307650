// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! End-to-end Earth UTC → Mars Local True Solar Time conversion.
//!
//! [`ConversionService`] runs the whole chain for one request:
//!
//! ```text
//! timestamp ─► JD(UTC) ─► JD(TT) ─► MSD ─► MTC ─┐
//!                           │                   ├─► LMST ─► LTST
//!                           └─► Ls, EOT ────────┘
//! ```
//!
//! Inputs are validated in order (latitude, longitude, timestamp) and the
//! first failure is returned unchanged.  Every intermediate is checked for
//! finiteness.  Nothing is cached and no clock is read: each call is a pure
//! function of its arguments, so the service is freely shareable across
//! threads.

use chrono::{DateTime, Utc};

use crate::civil::{julian_date_from_datetime, parse_timestamp};
use crate::equation_of_time::{EquationOfTime, OrbitalState, SolarLongitude};
use crate::error::{ensure_finite, ConversionError, ConversionResult};
use crate::instant::Time;
use crate::local_time::{local_mean_solar_time, true_from_mean, Latitude, Longitude};
use crate::scales::{TT, UTC};
use crate::sol_date::MarsSolDate;
use crate::solar_time::SolarTime;
use crate::stations::Station;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every stage of one conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarsClockReading {
    /// Civil instant the reading was taken for.
    pub utc: DateTime<Utc>,
    pub julian_date: Time<UTC>,
    pub terrestrial: Time<TT>,
    pub sol_date: MarsSolDate,
    /// Integer sol number.
    pub sol: i64,
    /// Coordinated Mars Time at Airy-0.
    pub mtc: SolarTime,
    pub solar_longitude: SolarLongitude,
    pub equation_of_time: EquationOfTime,
    pub lmst: SolarTime,
    pub ltst: SolarTime,
    pub latitude: Latitude,
    pub longitude: Longitude,
}

/// Local solar time of one catalog station at a shared instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StationClock {
    pub station: Station,
    pub lmst: SolarTime,
    pub ltst: SolarTime,
}

/// Stateless orchestrator for the conversion chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConversionService;

impl ConversionService {
    pub const fn new() -> Self {
        Self
    }

    /// Local True Solar Time at `(latitude, longitude)` for a civil UTC
    /// timestamp string.  Longitude is degrees east.
    ///
    /// # Errors
    ///
    /// * [`ConversionError::InvalidLatitude`] outside `[-90, 90]`.
    /// * [`ConversionError::InvalidLongitude`] outside `[-180, 360]`.
    /// * [`ConversionError::InvalidTimestamp`] for unparseable or impossible
    ///   dates.
    /// * [`ConversionError::NumericOverflow`] if any stage goes non-finite.
    pub fn convert(
        &self,
        latitude: f64,
        longitude: f64,
        utc_timestamp: &str,
    ) -> ConversionResult<SolarTime> {
        self.reading(latitude, longitude, utc_timestamp)
            .map(|r| r.ltst)
    }

    /// As [`Self::convert`], for an already-parsed instant.
    pub fn convert_at(
        &self,
        latitude: f64,
        longitude: f64,
        utc: DateTime<Utc>,
    ) -> ConversionResult<SolarTime> {
        self.reading_at(latitude, longitude, utc).map(|r| r.ltst)
    }

    /// Full stage-by-stage breakdown for a timestamp string.
    pub fn reading(
        &self,
        latitude: f64,
        longitude: f64,
        utc_timestamp: &str,
    ) -> ConversionResult<MarsClockReading> {
        let (latitude, longitude) = validate(latitude, longitude)?;
        let utc = parse_timestamp(utc_timestamp)?;
        run_chain(latitude, longitude, utc)
    }

    /// Full stage-by-stage breakdown for an instant.
    pub fn reading_at(
        &self,
        latitude: f64,
        longitude: f64,
        utc: DateTime<Utc>,
    ) -> ConversionResult<MarsClockReading> {
        let (latitude, longitude) = validate(latitude, longitude)?;
        run_chain(latitude, longitude, utc)
    }

    /// Clocks for every station at one instant, in input order.
    pub fn station_clocks(
        &self,
        stations: &[Station],
        utc: DateTime<Utc>,
    ) -> ConversionResult<Vec<StationClock>> {
        stations
            .iter()
            .map(|station| {
                let (latitude, longitude) = station.coordinates()?;
                let reading = run_chain(latitude, longitude, utc)?;
                Ok(StationClock {
                    station: *station,
                    lmst: reading.lmst,
                    ltst: reading.ltst,
                })
            })
            .collect()
    }
}

fn validate(latitude: f64, longitude: f64) -> ConversionResult<(Latitude, Longitude)> {
    Ok((Latitude::new(latitude)?, Longitude::east(longitude)?))
}

fn run_chain(
    latitude: Latitude,
    longitude: Longitude,
    utc: DateTime<Utc>,
) -> ConversionResult<MarsClockReading> {
    let julian_date = julian_date_from_datetime(&utc)?;
    ensure_finite(julian_date.value(), "julian date")?;

    let terrestrial = julian_date.to::<TT>();
    ensure_finite(terrestrial.value(), "terrestrial time")?;

    let sol_date = MarsSolDate::from_terrestrial(terrestrial)?;
    let mtc = sol_date.coordinated_time();

    let orbit = OrbitalState::at(terrestrial);
    if !orbit.is_finite() {
        return Err(ConversionError::numeric_overflow("equation of time"));
    }

    let lmst = local_mean_solar_time(mtc, longitude);
    let ltst = true_from_mean(lmst, orbit.equation_of_time);
    ensure_finite(ltst.hours(), "local solar time")?;

    Ok(MarsClockReading {
        utc,
        julian_date,
        terrestrial,
        sol_date,
        sol: sol_date.sol_number(),
        mtc,
        solar_longitude: orbit.solar_longitude,
        equation_of_time: orbit.equation_of_time,
        lmst,
        ltst,
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::stations::{CATALOG, GALE_CRATER, JEZERO_CRATER};
    use chrono::TimeZone;

    const SERVICE: ConversionService = ConversionService::new();

    #[test]
    fn gale_crater_local_true_solar_time() {
        let ltst = SERVICE.convert(-4.5, 137.4, "2024-06-01T12:00:00Z").unwrap();
        assert_eq!(ltst.to_string(), "09:19:05");
    }

    #[test]
    fn jezero_crater_landing_day() {
        // Perseverance touchdown, 2021-02-18T20:55Z.
        let r = SERVICE.reading(18.4, 77.5, "2021-02-18T20:55:00Z").unwrap();
        assert!((r.sol_date.value() - 52_304.454_526_2).abs() < 1e-5);
        assert!((r.solar_longitude.degrees() - 5.648_514).abs() < 1e-4);
        assert!((r.equation_of_time.minutes() - (-37.915_42)).abs() < 1e-3);
        assert_eq!(r.lmst.to_string(), "16:04:31");
        assert_eq!(r.ltst.to_string(), "15:26:36");
    }

    #[test]
    fn reference_epoch_breakdown() {
        let r = SERVICE.reading(0.0, 0.0, "2000-01-06T00:00:00Z").unwrap();
        assert_eq!(r.julian_date.value(), 2_451_549.5);
        assert!((r.sol_date.value() - 44_796.0).abs() < 1e-3);
        assert_eq!(r.sol, 44_795);
        assert_eq!(r.mtc.to_string(), "23:59:39");
        assert_eq!(r.lmst, r.mtc);
        assert!((r.ltst.hours() - 23.648_399_74).abs() < 1e-5);
        let tt_minus_utc = (r.terrestrial - Time::<TT>::new(2_451_549.5)).value() * 86_400.0;
        assert!((tt_minus_utc - 64.184).abs() < 1e-3, "{tt_minus_utc}");
    }

    #[test]
    fn string_and_typed_paths_agree() {
        let at = Utc.with_ymd_and_hms(2025, 10, 25, 0, 10, 25).unwrap();
        let typed = SERVICE.convert_at(-4.5, 137.4, at).unwrap();
        let parsed = SERVICE.convert(-4.5, 137.4, "2025-10-25T00:10:25Z").unwrap();
        assert_eq!(typed, parsed);
        assert_eq!(typed.to_string(), "06:25:29");
    }

    #[test]
    fn latitude_does_not_move_the_clock() {
        let at = "2024-06-01T12:00:00Z";
        let equator = SERVICE.convert(0.0, 137.4, at).unwrap();
        let pole = SERVICE.convert(-90.0, 137.4, at).unwrap();
        assert_eq!(equator, pole);
    }

    #[test]
    fn errors_name_the_violated_constraint() {
        let at = "2024-06-01T12:00:00Z";
        assert_eq!(
            SERVICE.convert(91.0, 0.0, at),
            Err(ConversionError::InvalidLatitude(91.0))
        );
        assert_eq!(
            SERVICE.convert(0.0, 400.0, at),
            Err(ConversionError::InvalidLongitude(400.0))
        );
        assert_eq!(
            SERVICE
                .convert(0.0, 0.0, "2024-13-40T25:00:00Z")
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidTimestamp
        );
    }

    #[test]
    fn latitude_is_checked_before_longitude_and_timestamp() {
        let err = SERVICE.convert(f64::NAN, 999.0, "garbage").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLatitude);
        let err = SERVICE.convert(0.0, 999.0, "garbage").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLongitude);
    }

    #[test]
    fn station_board_matches_single_conversions() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let board = SERVICE.station_clocks(&CATALOG, at).unwrap();
        assert_eq!(board.len(), CATALOG.len());
        for clock in &board {
            let single = SERVICE
                .convert_at(clock.station.latitude, clock.station.longitude_east, at)
                .unwrap();
            assert_eq!(clock.ltst, single, "{}", clock.station.name);
        }
        let gale = board.iter().find(|c| c.station == GALE_CRATER).unwrap();
        assert_eq!(gale.ltst.to_string(), "09:19:05");
        assert!(board.iter().any(|c| c.station == JEZERO_CRATER));
    }

    #[test]
    fn station_board_rejects_invalid_stations() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let bad = [GALE_CRATER, Station::new("Nowhere", 0.0, 500.0)];
        assert_eq!(
            SERVICE.station_clocks(&bad, at).unwrap_err().kind(),
            ErrorKind::InvalidLongitude
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reading_serializes_every_stage() {
        let r = SERVICE.reading(-4.5, 137.4, "2024-06-01T12:00:00Z").unwrap();
        let json = serde_json::to_value(r).unwrap();
        for key in [
            "utc",
            "julian_date",
            "terrestrial",
            "sol_date",
            "sol",
            "mtc",
            "solar_longitude",
            "equation_of_time",
            "lmst",
            "ltst",
            "latitude",
            "longitude",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["julian_date"], 2_460_463.0);
    }
}
