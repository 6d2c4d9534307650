// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a specific Earth time scale and encodes
//! how a Julian Date on that scale's axis relates to the canonical
//! **Julian Date in TT** (Terrestrial Time), which is the argument of every
//! Mars orbital formula in this crate.
//!
//! | Marker | Description | `JD(TT) − JD(scale)` |
//! |--------|-------------|----------------------|
//! | [`UTC`] | Coordinated Universal Time (civil clocks) | `TAI−UTC + 32.184 s` |
//! | [`TAI`] | International Atomic Time | `32.184 s` |
//! | [`TT`]  | Terrestrial Time | `0` |

use super::instant::TimeScale;
use qtty::{Day, Days, Seconds};

/// `TT = TAI + 32.184 s`.
const TT_MINUS_TAI: Seconds = Seconds::new(32.184);

// ---------------------------------------------------------------------------
// Uniform scales
// ---------------------------------------------------------------------------

/// Terrestrial Time: the identity scale.
///
/// `to_jd_tt(v) = v`, i.e. the quantity *is* a Julian Day number on the TT
/// axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "JD(TT)";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// International Atomic Time.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TAI;

impl TimeScale for TAI {
    const LABEL: &'static str = "JD(TAI)";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value + TT_MINUS_TAI.to::<Day>()
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt - TT_MINUS_TAI.to::<Day>()
    }
}

// ---------------------------------------------------------------------------
// Coordinated Universal Time
// ---------------------------------------------------------------------------

/// Coordinated Universal Time: Julian Date on the civil UTC axis.
///
/// This is the scale a wall-clock timestamp lands on: 2000-01-06T00:00:00Z is
/// exactly `Time::<UTC>::new(2_451_549.5)`.  Conversion to TT adds the
/// cumulative leap-second count from IERS Bulletin C plus 32.184 s.
///
/// ## References
/// * IERS Bulletin C (leap second announcements)
/// * Allison & McEwen (2000), Planet. Space Sci. 48, 215, eq. A-5
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UTC;

/// Leap-second table: (JD of leap-second insertion, cumulative TAI−UTC after).
///
/// Entries are the JD of 00:00:00 UTC on the day the new offset takes effect.
const LEAP_SECONDS: [(f64, f64); 28] = [
    (2_441_317.5, 10.0), // 1972-01-01
    (2_441_499.5, 11.0), // 1972-07-01
    (2_441_683.5, 12.0), // 1973-01-01
    (2_442_048.5, 13.0), // 1974-01-01
    (2_442_413.5, 14.0), // 1975-01-01
    (2_442_778.5, 15.0), // 1976-01-01
    (2_443_144.5, 16.0), // 1977-01-01
    (2_443_509.5, 17.0), // 1978-01-01
    (2_443_874.5, 18.0), // 1979-01-01
    (2_444_239.5, 19.0), // 1980-01-01
    (2_444_786.5, 20.0), // 1981-07-01
    (2_445_151.5, 21.0), // 1982-07-01
    (2_445_516.5, 22.0), // 1983-07-01
    (2_446_247.5, 23.0), // 1985-07-01
    (2_447_161.5, 24.0), // 1988-01-01
    (2_447_892.5, 25.0), // 1990-01-01
    (2_448_257.5, 26.0), // 1991-01-01
    (2_448_804.5, 27.0), // 1992-07-01
    (2_449_169.5, 28.0), // 1993-07-01
    (2_449_534.5, 29.0), // 1994-07-01
    (2_450_083.5, 30.0), // 1996-01-01
    (2_450_630.5, 31.0), // 1997-07-01
    (2_451_179.5, 32.0), // 1999-01-01
    (2_453_736.5, 33.0), // 2006-01-01
    (2_454_832.5, 34.0), // 2009-01-01
    (2_456_109.5, 35.0), // 2012-07-01
    (2_457_204.5, 36.0), // 2015-07-01
    (2_457_754.5, 37.0), // 2017-01-01
];

/// Cumulative TAI − UTC in effect at a Julian Date on the UTC axis.
///
/// The table covers 1972–2017 (28 insertions); the last value is held for
/// later dates.  Before 1972 the conventional initial offset of 10 s is
/// returned.
#[inline]
pub fn tai_minus_utc(jd_utc: Days) -> Seconds {
    let jd = jd_utc.value();
    let after = LEAP_SECONDS.partition_point(|&(start, _)| start <= jd);
    Seconds::new(LEAP_SECONDS[after.saturating_sub(1)].1)
}

/// `TT − UTC` at a Julian Date on the UTC axis.
#[inline]
pub fn tt_minus_utc(jd_utc: Days) -> Seconds {
    tai_minus_utc(jd_utc) + TT_MINUS_TAI
}

impl TimeScale for UTC {
    const LABEL: &'static str = "JD(UTC)";

    #[inline]
    fn to_jd_tt(value: Days) -> Days {
        value + tt_minus_utc(value).to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        // Start from the largest offset and refine twice: the first guess can
        // land before a leap-second insertion that the true UTC instant follows.
        let largest = Seconds::new(LEAP_SECONDS[LEAP_SECONDS.len() - 1].1) + TT_MINUS_TAI;
        let approx_utc = jd_tt - largest.to::<Day>();
        let guess = jd_tt - tt_minus_utc(approx_utc).to::<Day>();
        jd_tt - tt_minus_utc(guess).to::<Day>()
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(UTC, TAI, TT);
