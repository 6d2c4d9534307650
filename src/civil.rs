// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil timestamps → Julian Date on the UTC axis.
//!
//! This is the entry stage of the conversion chain: it turns a wall-clock
//! UTC timestamp (string or calendar fields) into a continuous
//! [`JulianDate`](crate::JulianDate) whose fractional part encodes the time
//! of day.  Everything is pure; no clock is read here.
//!
//! # Accepted string forms
//!
//! | Form | Example | Interpretation |
//! |------|---------|----------------|
//! | RFC 3339 | `2024-06-01T12:00:00Z`, `2024-06-01T14:00:00+02:00` | converted to UTC |
//! | ISO-8601 with offset | `2024-06-01T12:00Z`, `2024-06-01T14:00:00+0200`, `20240601T120000Z` | converted to UTC |
//! | offset-less ISO-8601 | `2024-06-01T12:00:00.250`, `2024-06-01 12:00:00`, `20240601T120000` | taken as UTC |
//! | minutes only | `2024-06-01T12:00` | taken as UTC |
//! | date only | `2024-06-01` | midnight UTC |

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};
use qtty::Days;

use crate::error::{ConversionError, ConversionResult};
use crate::instant::Time;
use crate::scales::UTC;

/// ISO-8601 layouts with an offset that RFC 3339 does not cover (minute
/// precision, `+hhmm` offsets, basic format).  `%#z` also accepts `Z`.
const OFFSET_LAYOUTS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

/// Offset-less layouts, taken as UTC.
const NAIVE_LAYOUTS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Earliest year the integer Gregorian algorithm is valid for.
const MIN_YEAR: i32 = -4799;

/// MJD zero point: `JD = MJD + 2 400 000.5`.
const MJD_ZERO_POINT: f64 = 2_400_000.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a civil UTC timestamp.
///
/// Leading and trailing whitespace is ignored.  Offsets other than `Z` are
/// honoured and folded into UTC.
pub fn parse_timestamp(input: &str) -> ConversionResult<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ConversionError::invalid_timestamp(input, "empty input"));
    }

    let rfc3339_err = match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    for layout in OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(s, layout) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for layout in NAIVE_LAYOUTS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(ConversionError::invalid_timestamp(
        input,
        rfc3339_err.to_string(),
    ))
}

/// Julian Date (UTC axis) of a proleptic-Gregorian calendar date and time.
///
/// Uses the integer Gregorian day-number algorithm (as in ERFA `cal2jd`)
/// for the date and adds the fractional day from `hour:minute:second`.
///
/// # Errors
///
/// [`ConversionError::InvalidTimestamp`] if the date does not exist
/// (e.g. day 32, February 30 outside a leap year), the year is before
/// −4799, or the time fields are out of range (`hour < 24`, `minute < 60`,
/// `0 ≤ second < 60`).
pub fn julian_date_from_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> ConversionResult<Time<UTC>> {
    let describe = || format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second}");

    if year < MIN_YEAR {
        return Err(ConversionError::invalid_timestamp(
            describe(),
            format!("year before {MIN_YEAR}"),
        ));
    }
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(ConversionError::invalid_timestamp(
            describe(),
            "no such calendar date",
        ));
    }
    if hour >= 24 || minute >= 60 || !(0.0..60.0).contains(&second) {
        return Err(ConversionError::invalid_timestamp(
            describe(),
            "time of day out of range",
        ));
    }

    let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
    let my = (m - 14) / 12;
    let iypmy = y + my;
    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (m - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + d
        - 2_432_076;

    let day_fraction = (f64::from(3600 * hour + 60 * minute) + second) / SECONDS_PER_DAY;
    Ok(Time::<UTC>::from_days(Days::new(
        MJD_ZERO_POINT + mjd as f64 + day_fraction,
    )))
}

/// Julian Date (UTC axis) of a chrono timestamp, via its calendar fields.
pub fn julian_date_from_datetime(datetime: &DateTime<Utc>) -> ConversionResult<Time<UTC>> {
    let second = f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9;
    julian_date_from_calendar(
        datetime.year(),
        datetime.month(),
        datetime.day(),
        datetime.hour(),
        datetime.minute(),
        // chrono encodes a leap second as nanosecond >= 1e9; clamp into the minute.
        second.min(60.0 - 1e-9),
    )
}

/// Parse a timestamp string straight to its Julian Date.
pub fn julian_date(input: &str) -> ConversionResult<Time<UTC>> {
    julian_date_from_datetime(&parse_timestamp(input)?)
}

impl Time<UTC> {
    /// Parse a civil UTC timestamp string.  See [`parse_timestamp`].
    #[inline]
    pub fn parse(input: &str) -> ConversionResult<Self> {
        julian_date(input)
    }

    /// Build from calendar fields.  See [`julian_date_from_calendar`].
    #[inline]
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> ConversionResult<Self> {
        julian_date_from_calendar(year, month, day, hour, minute, second)
    }
}

impl std::str::FromStr for Time<UTC> {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        julian_date(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::TimeZone;

    fn jd(s: &str) -> f64 {
        julian_date(s).expect("valid timestamp").value()
    }

    #[test]
    fn mars24_reference_epoch() {
        assert_eq!(jd("2000-01-06T00:00:00Z"), 2_451_549.5);
    }

    #[test]
    fn j2000_noon_and_unix_epoch() {
        assert_eq!(jd("2000-01-01T12:00:00Z"), 2_451_545.0);
        assert_eq!(jd("1970-01-01T00:00:00Z"), 2_440_587.5);
    }

    #[test]
    fn gregorian_reform_and_leap_days() {
        // First Gregorian day, 1582-10-15, is JD 2299160.5 (Meeus ch. 7).
        assert_eq!(jd("1582-10-15"), 2_299_160.5);
        assert_eq!(jd("2024-03-01") - jd("2024-02-28"), 2.0);
        assert_eq!(jd("2023-03-01") - jd("2023-02-28"), 1.0);
        assert_eq!(jd("2000-03-01") - jd("2000-02-28"), 2.0);
        assert_eq!(jd("1900-03-01") - jd("1900-02-28"), 1.0);
    }

    #[test]
    fn fractional_day_from_time_of_day() {
        let base = jd("2024-06-01T00:00:00Z");
        assert!((jd("2024-06-01T06:00:00Z") - base - 0.25).abs() < 1e-9);
        assert!((jd("2024-06-01T18:30:00Z") - base - 0.770_833_333).abs() < 1e-8);
        let parsed = julian_date("2024-06-01T06:00:00Z").unwrap();
        assert!((parsed.day_fraction() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn offsets_are_folded_into_utc() {
        assert_eq!(jd("2024-06-01T14:00:00+02:00"), jd("2024-06-01T12:00:00Z"));
        assert_eq!(jd("2024-06-01T07:00:00-05:00"), jd("2024-06-01T12:00:00Z"));
        assert_eq!(jd("2024-06-01T14:00:00+0200"), jd("2024-06-01T12:00:00Z"));
        assert_eq!(jd("2024-06-01 14:00:00+02"), jd("2024-06-01T12:00:00Z"));
        assert_eq!(jd("2024-06-01T12:00Z"), jd("2024-06-01T12:00:00Z"));
        assert_eq!(jd("2024-06-01T13:30+01:30"), jd("2024-06-01T12:00:00Z"));
    }

    #[test]
    fn basic_iso_format_is_accepted() {
        let z = jd("2024-06-01T12:00:00Z");
        assert_eq!(jd("20240601T120000Z"), z);
        assert_eq!(jd("20240601T140000+0200"), z);
        assert_eq!(jd("20240601T1200Z"), z);
        assert_eq!(jd("20240601T120000"), z);
    }

    #[test]
    fn offsetless_forms_are_utc() {
        let z = jd("2024-06-01T12:00:00Z");
        assert_eq!(jd("2024-06-01T12:00:00"), z);
        assert_eq!(jd("2024-06-01 12:00:00"), z);
        assert_eq!(jd("2024-06-01T12:00"), z);
        assert_eq!(jd("  2024-06-01T12:00:00Z \n"), z);
        assert!((jd("2024-06-01T12:00:00.500") - z - 0.5 / 86_400.0).abs() < 1e-8);
    }

    #[test]
    fn calendar_path_matches_timestamp_path() {
        for (y, mo, d, h, mi, s) in [
            (1999, 12, 31, 23, 59, 59),
            (2000, 1, 6, 0, 0, 0),
            (2012, 8, 6, 5, 17, 57),
            (2024, 2, 29, 13, 45, 10),
        ] {
            let dt = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap();
            let via_calendar = julian_date_from_datetime(&dt).unwrap();
            let via_timestamp = Time::<UTC>::from_utc(dt);
            assert!(
                (via_calendar - via_timestamp).abs() < Days::new(1e-8),
                "{dt}: {via_calendar} vs {via_timestamp}"
            );
        }
    }

    #[test]
    fn strictly_increasing_with_the_instant() {
        let samples = [
            "1969-07-20T20:17:40Z",
            "1999-12-31T23:59:59Z",
            "2000-01-01T00:00:00Z",
            "2000-01-01T00:00:00.001Z",
            "2012-08-06T05:17:57Z",
            "2024-06-01T12:00:00Z",
        ];
        for pair in samples.windows(2) {
            assert!(jd(pair[0]) < jd(pair[1]), "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn impossible_dates_are_rejected() {
        for bad in [
            "2024-13-40T25:00:00Z",
            "2024-01-32T00:00:00Z",
            "2023-02-29T00:00:00Z",
            "2024-06-01T24:00:01Z",
            "not a timestamp",
            "",
            "   ",
        ] {
            let err = julian_date(bad).expect_err(bad);
            assert_eq!(err.kind(), ErrorKind::InvalidTimestamp, "{bad}");
        }
    }

    #[test]
    fn calendar_fields_are_validated() {
        assert!(julian_date_from_calendar(2024, 2, 30, 0, 0, 0.0).is_err());
        assert!(julian_date_from_calendar(2024, 0, 1, 0, 0, 0.0).is_err());
        assert!(julian_date_from_calendar(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(julian_date_from_calendar(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(julian_date_from_calendar(2024, 1, 1, 0, 0, 60.0).is_err());
        assert!(julian_date_from_calendar(2024, 1, 1, 0, 0, -0.5).is_err());
        assert!(julian_date_from_calendar(2024, 1, 1, 0, 0, f64::NAN).is_err());
        assert!(julian_date_from_calendar(-5000, 1, 1, 0, 0, 0.0).is_err());
        assert!(julian_date_from_calendar(2024, 1, 1, 0, 0, 59.999).is_ok());
    }

    #[test]
    fn from_str_and_parse_agree() {
        let a: Time<UTC> = "2000-01-06T00:00:00Z".parse().unwrap();
        let b = Time::<UTC>::parse("2000-01-06T00:00:00Z").unwrap();
        let c = Time::<UTC>::from_calendar(2000, 1, 6, 0, 0, 0.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
