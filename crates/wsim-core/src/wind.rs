//! Wind directions and the attitude-to-speed rule.
//!
//! A ship's attitude is the compass point its bow faces. Comparing it with the
//! prevailing wind gives the number of hexes the ship may move this turn:
//!
//! | angular distance | point of sail | speed |
//! |------------------|---------------|-------|
//! | 0                | running       | full  |
//! | 2                | wind across   | reduced |
//! | anything else    | in irons      | 0     |
//!
//! The reduced speed is `max(1, full / 2)`. With a full speed of one hex it
//! evaluates to 1, so the reduced and full rows are numerically identical in
//! the current rule set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hexes moved per turn with the wind directly astern.
pub const FULL_SPEED: u32 = 1;

/// Speed with the wind across the beam.
pub const REDUCED_SPEED: u32 = if FULL_SPEED / 2 > 1 { FULL_SPEED / 2 } else { 1 };

/// One of the eight compass points, ordered clockwise from north.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    /// North (ordinal 0)
    #[default]
    N,
    /// North-east (ordinal 1)
    NE,
    /// East (ordinal 2)
    E,
    /// South-east (ordinal 3)
    SE,
    /// South (ordinal 4)
    S,
    /// South-west (ordinal 5)
    SW,
    /// West (ordinal 6)
    W,
    /// North-west (ordinal 7)
    NW,
}

impl WindDirection {
    /// All compass points in ordinal order.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Position of this point around the compass, `0..8`.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Minimal number of compass steps between two points, `0..=4`.
    #[must_use]
    pub const fn angular_distance(self, other: Self) -> u8 {
        let diff = self.ordinal().abs_diff(other.ordinal());
        if diff > 4 {
            8 - diff
        } else {
            diff
        }
    }

    /// The compass point directly opposite.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[((self.ordinal() + 4) % 8) as usize]
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        };
        f.write_str(name)
    }
}

/// Hexes a ship facing `attitude` may move under `wind`.
///
/// Total over all 64 combinations; never fails.
#[must_use]
pub const fn speed_for(attitude: WindDirection, wind: WindDirection) -> u32 {
    match attitude.angular_distance(wind) {
        0 => FULL_SPEED,
        2 => REDUCED_SPEED,
        _ => 0,
    }
}
