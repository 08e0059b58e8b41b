use std::fmt;

use serde::{Deserialize, Serialize};
use walkers::Position;

/// A geographic coordinate in degrees: latitude in [-90, 90], longitude in
/// [-180, 180]. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Position of this coordinate on the walkers map.
    pub fn position(&self) -> Position {
        Position::from_lat_lon(self.lat, self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}
