//! # WSIM Core
//!
//! Rules core for turn-based age-of-sail naval combat on a hex board.
//!
//! The crate is a deterministic rules engine: given the same ships, wind,
//! moves and dice rolls it always produces the same positions, damage and
//! logs. It is meant to be driven by a game loop, a UI or an AI agent.
//!
//! ## Modules
//!
//! - [`hex`]: cube coordinates, hex directions and distance
//! - [`wind`]: compass points and the attitude-to-speed rule
//! - [`damage`]: resource pools and damage application
//! - [`ship`]: the ship entity and its action log
//! - [`combat`]: range check, hit table and damage dispatch
//! - [`game`]: roster of named ships with wind, rules and dice
//! - [`dice`]: seeded dice for gunnery rolls
//! - [`config`]: game configuration
//!
//! ## Threading
//!
//! Nothing in this crate is internally synchronized. Each [`Game`] (and each
//! [`Ship`]) must be mutated by one turn-processing task at a time. All types
//! are `Send`, so independent games can run on separate threads as long as
//! they share no mutable state.
//!
//! ## Usage
//!
//! ```
//! use wsim_core::{Game, GameConfig, CubeCoordinate};
//! # use wsim_core::damage::{Broadside, Crew, ShipStats};
//! # use wsim_core::ship::{CrewQuality, Ship, ShipClass};
//! # let stats = ShipStats::new(16, 12, Broadside::new(20, 20), Broadside::new(4, 4), Crew::new(200, [67, 67, 66]));
//! # let frigate = Ship::new("USS Constellation", ShipClass::Frigate, CrewQuality::Elite, stats.clone());
//! # let liner = Ship::new("HMS Victory", ShipClass::ShipOfTheLine, CrewQuality::Crack, stats);
//!
//! let mut game = Game::new(GameConfig::default());
//! game.add_ship(frigate, CubeCoordinate::new(0, 1, -1)?);
//! game.add_ship(liner, CubeCoordinate::new(1, 0, -1)?);
//!
//! game.fire("USS Constellation", "HMS Victory", 8)?;
//! assert_eq!(game.get_ship("HMS Victory")?.stats().rigging, 11);
//! # Ok::<(), wsim_core::WsimError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod combat;
pub mod config;
pub mod damage;
pub mod dice;
pub mod error;
pub mod game;
pub mod hex;
pub mod ship;
pub mod wind;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use combat::{FireOutcome, HitResult, HitTable};
pub use config::GameConfig;
pub use damage::{Broadside, Crew, DamageType, ShipStats};
pub use error::{Result, WsimError};
pub use game::Game;
pub use hex::{CubeCoordinate, HexDirection};
pub use ship::{CrewQuality, Ship, ShipClass};
pub use wind::WindDirection;
