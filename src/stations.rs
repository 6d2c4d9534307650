// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Named surface sites for the station-clock board.
//!
//! Coordinates are planetocentric, longitude east-positive (see
//! [`crate::local_time`]).

use crate::error::ConversionResult;
use crate::local_time::{Latitude, Longitude};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A fixed surface location with a display name.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Station {
    pub name: &'static str,
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude_east: f64,
}

impl Station {
    pub const fn new(name: &'static str, latitude: f64, longitude_east: f64) -> Self {
        Self {
            name,
            latitude,
            longitude_east,
        }
    }

    /// Validated coordinates of this station.
    pub fn coordinates(&self) -> ConversionResult<(Latitude, Longitude)> {
        Ok((
            Latitude::new(self.latitude)?,
            Longitude::east(self.longitude_east)?,
        ))
    }
}

/// Opportunity landing region.
pub const MERIDIANI_PLANUM: Station = Station::new("Meridiani Planum", -1.95, 6.1);
/// Curiosity landing site.
pub const GALE_CRATER: Station = Station::new("Gale Crater", -4.5, 137.4);
/// Perseverance landing site.
pub const JEZERO_CRATER: Station = Station::new("Jezero Crater", 18.4, 77.5);
/// InSight landing site.
pub const ELYSIUM_PLANITIA: Station = Station::new("Elysium Planitia", 4.5, 135.9);
pub const OLYMPUS_MONS: Station = Station::new("Olympus Mons", 18.65, 226.2);
pub const VALLES_MARINERIS: Station = Station::new("Valles Marineris", -10.0, 286.0);

/// Built-in station catalog, west to east.
pub static CATALOG: [Station; 6] = [
    MERIDIANI_PLANUM,
    JEZERO_CRATER,
    ELYSIUM_PLANITIA,
    GALE_CRATER,
    OLYMPUS_MONS,
    VALLES_MARINERIS,
];

/// Look up a catalog station by name, ignoring ASCII case and surrounding
/// whitespace.
pub fn find(name: &str) -> Option<&'static Station> {
    let name = name.trim();
    CATALOG.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}
