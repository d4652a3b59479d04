//! The ship entity.
//!
//! A [`Ship`] owns everything about one vessel: its identity, its damage
//! pools, where it sits on the board, which way its bow points relative to the
//! wind, and a plain-text action log. Movement and damage are applied in place.
//!
//! The action log is for observability only. Nothing in the rules reads it
//! back, and damage application does not write to it.
//!
//! # Example
//!
//! ```
//! use wsim_core::damage::{Broadside, Crew, DamageType, ShipStats};
//! use wsim_core::hex::CubeCoordinate;
//! use wsim_core::ship::{CrewQuality, Ship, ShipClass};
//! use wsim_core::wind::WindDirection;
//!
//! let stats = ShipStats::new(
//!     16,
//!     12,
//!     Broadside::new(20, 20),
//!     Broadside::new(4, 4),
//!     Crew::new(200, [67, 67, 66]),
//! );
//! let mut ship = Ship::new("USS Constellation", ShipClass::Frigate, CrewQuality::Elite, stats);
//!
//! ship.take_damage(DamageType::Hull, 3);
//! ship.move_ship(CubeCoordinate::new(1, -1, 0).unwrap(), WindDirection::N);
//!
//! assert_eq!(ship.stats().hull, 13);
//! assert_eq!(ship.position(), CubeCoordinate::new(1, -1, 0).unwrap());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::damage::{Crew, DamageType, ShipStats};
use crate::hex::CubeCoordinate;
use crate::wind::{speed_for, WindDirection};

/// Training and experience of a ship's company, worst to best.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CrewQuality {
    /// Pressed landsmen
    Poor,
    /// Inexperienced
    Green,
    /// Ordinary seamen
    Average,
    /// Well drilled
    Crack,
    /// The best afloat
    Elite,
}

impl fmt::Display for CrewQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Poor => "Poor",
            Self::Green => "Green",
            Self::Average => "Average",
            Self::Crack => "Crack",
            Self::Elite => "Elite",
        };
        f.write_str(name)
    }
}

/// Rate of a ship. Classification only for now.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    /// Single-decked cruiser
    Frigate,
    /// Two or three decks, fit for the line of battle
    ShipOfTheLine,
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frigate => write!(f, "Frigate"),
            Self::ShipOfTheLine => write!(f, "Ship of the Line"),
        }
    }
}

/// A single vessel on the board.
///
/// # Invariants
///
/// - `name` is the identity key; the roster holding the ship relies on it
///   never changing, so there is no setter.
/// - The log only grows, in call order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    name: String,
    ship_class: ShipClass,
    crew_quality: CrewQuality,
    stats: ShipStats,
    position: CubeCoordinate,
    attitude_to_wind: WindDirection,
    log: Vec<String>,
}

impl Ship {
    /// Creates a ship at the origin, bow to the north, with an empty log.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ship_class: ShipClass,
        crew_quality: CrewQuality,
        stats: ShipStats,
    ) -> Self {
        Self {
            name: name.into(),
            ship_class,
            crew_quality,
            stats,
            position: CubeCoordinate::ORIGIN,
            attitude_to_wind: WindDirection::N,
            log: Vec::new(),
        }
    }

    /// Places the ship at `position` without writing to the log.
    #[must_use]
    pub fn with_position(mut self, position: CubeCoordinate) -> Self {
        self.position = position;
        self
    }

    /// Points the ship's bow without writing to the log.
    #[must_use]
    pub fn with_attitude(mut self, attitude: WindDirection) -> Self {
        self.attitude_to_wind = attitude;
        self
    }

    /// Ship name, unique within a game.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ship rate.
    #[must_use]
    pub const fn ship_class(&self) -> ShipClass {
        self.ship_class
    }

    /// Crew quality.
    #[must_use]
    pub const fn crew_quality(&self) -> CrewQuality {
        self.crew_quality
    }

    /// Current damage pools.
    #[must_use]
    pub const fn stats(&self) -> &ShipStats {
        &self.stats
    }

    /// Current hex.
    #[must_use]
    pub const fn position(&self) -> CubeCoordinate {
        self.position
    }

    /// Compass point the bow faces.
    #[must_use]
    pub const fn attitude_to_wind(&self) -> WindDirection {
        self.attitude_to_wind
    }

    /// Action log entries, oldest first.
    #[must_use]
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Moves the ship to `position` and records it in the log.
    pub fn set_position(&mut self, position: CubeCoordinate) {
        self.position = position;
        self.log_action(format!("Positioned at {position}"));
    }

    /// Turns the bow to `attitude` and records it in the log.
    pub fn set_attitude(&mut self, attitude: WindDirection) {
        self.attitude_to_wind = attitude;
        self.log_action(format!("Turned to face {attitude}"));
    }

    /// Replaces the crew with `total` men split evenly over three sections.
    pub fn set_crew(&mut self, total: u32) {
        self.stats.crew = Crew::even(total);
    }

    /// Hexes this ship may move under `wind` given its current attitude.
    #[must_use]
    pub const fn calculate_speed(&self, wind: WindDirection) -> u32 {
        speed_for(self.attitude_to_wind, wind)
    }

    /// Sails `speed` hexes along `direction`, where `speed` comes from the
    /// wind.
    ///
    /// `direction` is expected to be a unit vector. In irons the ship stays
    /// put and the failure is logged; the same happens when the move would
    /// carry the ship outside the coordinate range.
    pub fn move_ship(&mut self, direction: CubeCoordinate, wind: WindDirection) {
        let speed = self.calculate_speed(wind);
        if speed == 0 {
            debug!(ship = %self.name, attitude = %self.attitude_to_wind, %wind, "ship in irons");
            self.log_action(format!(
                "Failed to move: facing {} cannot make way against wind {wind}",
                self.attitude_to_wind
            ));
            return;
        }

        // Speed is a handful of hexes at most.
        #[allow(clippy::cast_possible_wrap)]
        let hexes = speed as i32;
        let from = self.position;
        let Some(to) = direction
            .checked_scale(hexes)
            .and_then(|step| from.checked_add(step))
        else {
            warn!(ship = %self.name, %from, %direction, "move leaves the coordinate range");
            self.log_action(format!(
                "Failed to move: {from} has no neighbor in direction {direction}"
            ));
            return;
        };
        self.position = to;
        info!(ship = %self.name, %from, to = %self.position, speed, "ship moved");
        self.log_action(format!("Moved {speed} hex(es) in direction {direction}"));
    }

    /// Applies damage to this ship's stats. Does not write to the log.
    pub fn take_damage(&mut self, damage_type: DamageType, amount: u32) {
        debug!(ship = %self.name, %damage_type, amount, "taking damage");
        self.stats.apply_damage(damage_type, amount);
    }

    /// Appends an entry to the action log.
    pub fn log_action(&mut self, action: impl Into<String>) {
        self.log.push(action.into());
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.stats.crew.sections;
        write!(
            f,
            "Ship({}, Class: {}, Hull: {}, Rigging: {}, Crew: [{a}, {b}, {c}], Guns: Left={}, Right={})",
            self.name,
            self.ship_class,
            self.stats.hull,
            self.stats.rigging,
            self.stats.guns.left,
            self.stats.guns.right,
        )
    }
}
