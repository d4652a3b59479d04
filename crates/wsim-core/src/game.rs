//! The game roster.
//!
//! [`Game`] owns every ship in play, keyed by name, together with the
//! prevailing wind, the board size, the gunnery rules and the dice. All
//! game-level operations look ships up by name and fail with
//! [`WsimError::ShipNotFound`] for names that were never added.
//!
//! Ships are stored in a `BTreeMap`, so iteration (and the `Display` dump) is
//! always in name order.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, info, warn};

use crate::combat::{FireOutcome, HitTable};
use crate::config::GameConfig;
use crate::dice::Dice;
use crate::error::{Result, WsimError};
use crate::hex::CubeCoordinate;
use crate::ship::Ship;
use crate::wind::WindDirection;

/// A single engagement: ships, wind and rules.
///
/// # Example
///
/// ```
/// use wsim_core::config::GameConfig;
/// use wsim_core::game::Game;
/// use wsim_core::hex::CubeCoordinate;
/// # use wsim_core::damage::{Broadside, Crew, ShipStats};
/// # use wsim_core::ship::{CrewQuality, Ship, ShipClass};
/// # let stats = ShipStats::new(16, 12, Broadside::new(20, 20), Broadside::new(4, 4), Crew::new(200, [67, 67, 66]));
/// # let ship = Ship::new("USS Constellation", ShipClass::Frigate, CrewQuality::Elite, stats);
///
/// let mut game = Game::new(GameConfig::default());
/// game.add_ship(ship, CubeCoordinate::new(0, 1, -1)?);
/// game.move_ship("USS Constellation", CubeCoordinate::new(1, -1, 0)?)?;
///
/// assert_eq!(
///     game.get_ship_position("USS Constellation")?,
///     CubeCoordinate::new(1, 0, -1)?,
/// );
/// # Ok::<(), wsim_core::WsimError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    ships: BTreeMap<String, Ship>,
    wind: WindDirection,
    board_size: (u32, u32),
    hit_table: HitTable,
    dice: Dice,
}

impl Game {
    /// Creates an empty game from `config`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            ships: BTreeMap::new(),
            wind: config.wind,
            board_size: config.board_size,
            hit_table: config.hit_table,
            dice: Dice::new(config.seed),
        }
    }

    /// Places `ship` at `position` and adds it to the roster.
    ///
    /// A ship already registered under the same name is replaced and
    /// returned.
    pub fn add_ship(&mut self, mut ship: Ship, position: CubeCoordinate) -> Option<Ship> {
        ship.set_position(position);
        info!(ship = ship.name(), %position, "ship added");
        let replaced = self.ships.insert(ship.name().to_owned(), ship);
        if let Some(old) = &replaced {
            warn!(ship = old.name(), "ship replaced in roster");
        }
        replaced
    }

    /// Looks up a ship by name.
    ///
    /// # Errors
    ///
    /// Returns [`WsimError::ShipNotFound`] if no such ship was added.
    pub fn get_ship(&self, name: &str) -> Result<&Ship> {
        self.ships
            .get(name)
            .ok_or_else(|| WsimError::ShipNotFound(name.to_owned()))
    }

    /// Looks up a ship by name for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`WsimError::ShipNotFound`] if no such ship was added.
    pub fn get_ship_mut(&mut self, name: &str) -> Result<&mut Ship> {
        self.ships
            .get_mut(name)
            .ok_or_else(|| WsimError::ShipNotFound(name.to_owned()))
    }

    /// Current hex of the named ship.
    ///
    /// # Errors
    ///
    /// Returns [`WsimError::ShipNotFound`] if no such ship was added.
    pub fn get_ship_position(&self, name: &str) -> Result<CubeCoordinate> {
        self.get_ship(name).map(Ship::position)
    }

    /// Sails the named ship along `direction` under the current wind.
    ///
    /// # Errors
    ///
    /// Returns [`WsimError::ShipNotFound`] if no such ship was added.
    pub fn move_ship(&mut self, name: &str, direction: CubeCoordinate) -> Result<()> {
        let wind = self.wind;
        self.get_ship_mut(name)?.move_ship(direction, wind);
        Ok(())
    }

    /// Hex distance between two named ships.
    ///
    /// # Errors
    ///
    /// Returns [`WsimError::ShipNotFound`] if either ship is unknown.
    pub fn range_between(&self, from: &str, to: &str) -> Result<u32> {
        let a = self.get_ship_position(from)?;
        let b = self.get_ship_position(to)?;
        Ok(a.distance(b))
    }

    /// Fires `attacker` at `target` with a caller-supplied roll.
    ///
    /// The range is the hex distance between the two ships.
    ///
    /// # Errors
    ///
    /// Returns [`WsimError::ShipNotFound`] if either ship is unknown, or
    /// [`WsimError::SelfTarget`] if both names are the same.
    pub fn fire(&mut self, attacker: &str, target: &str, dice_roll: i32) -> Result<FireOutcome> {
        if attacker == target {
            return Err(WsimError::SelfTarget(attacker.to_owned()));
        }
        let range = self.range_between(attacker, target)?;

        let mut target_ship = self
            .ships
            .remove(target)
            .ok_or_else(|| WsimError::ShipNotFound(target.to_owned()))?;
        let outcome = self
            .ships
            .get_mut(attacker)
            .map(|ship| self.hit_table.fire(ship, &mut target_ship, range, dice_roll));
        self.ships.insert(target.to_owned(), target_ship);

        outcome.ok_or_else(|| WsimError::ShipNotFound(attacker.to_owned()))
    }

    /// Fires `attacker` at `target`, rolling 2d6 from the game's dice.
    ///
    /// # Errors
    ///
    /// Same as [`Game::fire`]. No die is rolled when the call fails.
    pub fn fire_with_dice(&mut self, attacker: &str, target: &str) -> Result<FireOutcome> {
        if attacker == target {
            return Err(WsimError::SelfTarget(attacker.to_owned()));
        }
        self.range_between(attacker, target)?;
        let roll = self.dice.roll_2d6();
        debug!(attacker, target, roll, "dice rolled");
        self.fire(attacker, target, roll)
    }

    /// Changes the prevailing wind.
    pub fn update_wind(&mut self, wind: WindDirection) {
        info!(from = %self.wind, to = %wind, "wind shifted");
        self.wind = wind;
    }

    /// Prevailing wind.
    #[must_use]
    pub const fn wind(&self) -> WindDirection {
        self.wind
    }

    /// Board width and height in hexes.
    #[must_use]
    pub const fn board_size(&self) -> (u32, u32) {
        self.board_size
    }

    /// Gunnery rules in force.
    #[must_use]
    pub const fn hit_table(&self) -> &HitTable {
        &self.hit_table
    }

    /// Ships in name order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    /// Number of ships in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Returns true if no ships have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.board_size;
        writeln!(
            f,
            "Game State: Board size ({width}, {height}), Wind: {}",
            self.wind
        )?;
        for (name, ship) in &self.ships {
            writeln!(f, "{name} at position {} | {ship}", ship.position())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::HitResult;
    use crate::tests::helpers::{constellation, cube, game_with_two_ships, victory};

    mod roster_tests {
        use super::*;

        #[test]
        fn ship_positions_are_recorded() {
            let game = game_with_two_ships();
            assert_eq!(game.get_ship_position("USS Constellation").unwrap(), cube(0, 1, -1));
            assert_eq!(game.get_ship_position("HMS Victory").unwrap(), cube(1, 0, -1));
        }

        #[test]
        fn add_ship_logs_position() {
            let game = game_with_two_ships();
            let ship = game.get_ship("HMS Victory").unwrap();
            assert_eq!(ship.log(), ["Positioned at (1, 0, -1)"]);
        }

        #[test]
        fn unknown_ship_is_not_found() {
            let game = game_with_two_ships();
            let err = game.get_ship("Bonhomme Richard").unwrap_err();
            assert_eq!(err, WsimError::ShipNotFound("Bonhomme Richard".to_string()));
            assert!(game.get_ship_position("Bonhomme Richard").is_err());
        }

        #[test]
        fn re_adding_a_name_replaces_the_ship() {
            let mut game = game_with_two_ships();
            let replaced = game.add_ship(constellation(), cube(-2, 2, 0));
            assert!(replaced.is_some());
            assert_eq!(game.len(), 2);
            assert_eq!(game.get_ship_position("USS Constellation").unwrap(), cube(-2, 2, 0));
        }

        #[test]
        fn ships_iterate_in_name_order() {
            let game = game_with_two_ships();
            let names: Vec<&str> = game.ships().map(Ship::name).collect();
            assert_eq!(names, ["HMS Victory", "USS Constellation"]);
        }

        #[test]
        fn empty_game() {
            let game = Game::default();
            assert!(game.is_empty());
            assert_eq!(game.board_size(), (10, 10));
            assert_eq!(game.wind(), WindDirection::N);
        }
    }

    mod movement_tests {
        use super::*;

        #[test]
        fn move_ship_with_the_wind() {
            let mut game = game_with_two_ships();
            game.move_ship("USS Constellation", cube(1, -1, 0)).unwrap();
            assert_eq!(game.get_ship_position("USS Constellation").unwrap(), cube(1, 0, -1));
        }

        #[test]
        fn move_ship_into_the_wind_stays_put() {
            let mut game = game_with_two_ships();
            game.update_wind(WindDirection::S);
            game.move_ship("USS Constellation", cube(1, -1, 0)).unwrap();

            assert_eq!(game.get_ship_position("USS Constellation").unwrap(), cube(0, 1, -1));
            let log = game.get_ship("USS Constellation").unwrap().log();
            assert!(log.last().unwrap().starts_with("Failed to move"));
        }

        #[test]
        fn move_unknown_ship_fails() {
            let mut game = game_with_two_ships();
            let err = game.move_ship("Bonhomme Richard", cube(1, -1, 0)).unwrap_err();
            assert!(matches!(err, WsimError::ShipNotFound(_)));
        }
    }

    mod fire_tests {
        use super::*;

        #[test]
        fn range_is_hex_distance() {
            let game = game_with_two_ships();
            assert_eq!(game.range_between("USS Constellation", "HMS Victory").unwrap(), 1);
        }

        #[test]
        fn fire_across_opposite_edges_is_out_of_range() {
            let mut game = Game::default();
            game.add_ship(constellation(), cube(i32::MAX, -i32::MAX, 0));
            game.add_ship(victory(), cube(-i32::MAX, i32::MAX, 0));

            let outcome = game.fire("USS Constellation", "HMS Victory", 12).unwrap();
            assert_eq!(
                outcome,
                FireOutcome::OutOfRange {
                    range: u32::MAX - 1
                }
            );
            assert_eq!(game.get_ship("HMS Victory").unwrap().stats().hull, 16);
        }

        #[test]
        fn fire_damages_target_in_roster() {
            let mut game = game_with_two_ships();
            let outcome = game.fire("USS Constellation", "HMS Victory", 12).unwrap();

            assert_eq!(outcome, FireOutcome::Resolved(HitResult::HullHit));
            assert_eq!(game.get_ship("HMS Victory").unwrap().stats().hull, 14);
            assert_eq!(game.get_ship("USS Constellation").unwrap().stats().hull, 16);
            assert_eq!(game.len(), 2);
        }

        #[test]
        fn fire_beyond_range_is_logged() {
            let mut game = Game::default();
            game.add_ship(constellation(), cube(0, 0, 0));
            game.add_ship(victory(), cube(6, -6, 0));

            let outcome = game.fire("USS Constellation", "HMS Victory", 12).unwrap();
            assert_eq!(outcome, FireOutcome::OutOfRange { range: 6 });
            assert_eq!(game.get_ship("HMS Victory").unwrap().stats().hull, 16);
        }

        #[test]
        fn fire_at_self_is_rejected() {
            let mut game = game_with_two_ships();
            let err = game.fire("HMS Victory", "HMS Victory", 12).unwrap_err();
            assert_eq!(err, WsimError::SelfTarget("HMS Victory".to_string()));
        }

        #[test]
        fn fire_with_unknown_ship_keeps_roster_intact() {
            let mut game = game_with_two_ships();
            assert!(game.fire("Bonhomme Richard", "HMS Victory", 12).is_err());
            assert!(game.fire("HMS Victory", "Bonhomme Richard", 12).is_err());
            assert_eq!(game.len(), 2);
            assert!(game.get_ship("HMS Victory").is_ok());
        }

        #[test]
        fn fire_with_dice_is_reproducible() {
            let mut a = game_with_two_ships();
            let mut b = game_with_two_ships();
            for _ in 0..10 {
                let outcome_a = a.fire_with_dice("USS Constellation", "HMS Victory").unwrap();
                let outcome_b = b.fire_with_dice("USS Constellation", "HMS Victory").unwrap();
                assert_eq!(outcome_a, outcome_b);
            }
            assert_eq!(
                a.get_ship("HMS Victory").unwrap().stats(),
                b.get_ship("HMS Victory").unwrap().stats()
            );
        }
    }

    #[test]
    fn display_lists_ships_in_name_order() {
        let game = game_with_two_ships();
        let text = game.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Game State: Board size (10, 10), Wind: N");
        assert!(lines[1].starts_with("HMS Victory at position (1, 0, -1) | Ship(HMS Victory"));
        assert!(lines[2].starts_with("USS Constellation at position (0, 1, -1) | Ship("));
        assert_eq!(lines.len(), 3);
    }
}
