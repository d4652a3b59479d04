//! Factories for the ships and games used across tests.

use crate::config::GameConfig;
use crate::damage::{Broadside, Crew, ShipStats};
use crate::game::Game;
use crate::hex::CubeCoordinate;
use crate::ship::{CrewQuality, Ship, ShipClass};

// =============================================================================
// Geometry
// =============================================================================

/// Shorthand for a coordinate known to be valid.
pub fn cube(q: i32, r: i32, s: i32) -> CubeCoordinate {
    CubeCoordinate::new(q, r, s).expect("test coordinate must sum to zero")
}

// =============================================================================
// Ship Factory Functions
// =============================================================================

/// Stats of a heavy frigate: hull 16, rigging 12, 200 crew.
pub fn frigate_stats() -> ShipStats {
    ShipStats::new(
        16,
        12,
        Broadside::new(20, 20),
        Broadside::new(4, 4),
        Crew::new(200, [67, 67, 66]),
    )
}

/// USS Constellation at the origin, bow north.
pub fn constellation() -> Ship {
    Ship::new(
        "USS Constellation",
        ShipClass::Frigate,
        CrewQuality::Elite,
        frigate_stats(),
    )
}

/// HMS Victory at the origin, bow north, with frigate stats.
pub fn victory() -> Ship {
    Ship::new(
        "HMS Victory",
        ShipClass::ShipOfTheLine,
        CrewQuality::Crack,
        frigate_stats(),
    )
}

// =============================================================================
// Game Scenario Setup
// =============================================================================

/// Default game with Constellation at `(0, 1, -1)` and Victory at `(1, 0, -1)`.
pub fn game_with_two_ships() -> Game {
    let mut game = Game::new(GameConfig::with_board_size(10, 10));
    game.add_ship(constellation(), cube(0, 1, -1));
    game.add_ship(victory(), cube(1, 0, -1));
    game
}
