//! Sample session for the WSIM rules core.
//!
//! Usage: `wsim-demo [config.json]`
//!
//! Damages and logs a lone frigate, then stages a short two-ship engagement
//! using the optional game configuration. Set `RUST_LOG=debug` to see every
//! rule transition.

use anyhow::{Context, Result};
use tracing::info;
use wsim_core::damage::{Broadside, Crew, DamageType, ShipStats};
use wsim_core::{CrewQuality, CubeCoordinate, Game, GameConfig, HexDirection, Ship, ShipClass};

fn frigate_stats() -> ShipStats {
    ShipStats::new(
        16,
        12,
        Broadside::new(20, 20),
        Broadside::new(4, 4),
        Crew::new(200, [67, 67, 66]),
    )
}

fn load_config() -> Result<GameConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading game config from {path}"))?;
    let config = GameConfig::from_json(&json)?;
    info!(%path, "loaded game config");
    Ok(config)
}

fn damage_report() {
    let mut constellation = Ship::new(
        "USS Constellation",
        ShipClass::Frigate,
        CrewQuality::Elite,
        frigate_stats(),
    );

    constellation.take_damage(DamageType::Hull, 3);
    constellation.take_damage(DamageType::Rigging, 2);
    constellation.take_damage(DamageType::Crew, 5);

    constellation.log_action("Moved to hex (4, 5)");
    constellation.log_action("Engaged enemy ship");

    println!("{constellation}");
}

fn engagement(config: GameConfig) -> Result<()> {
    let mut game = Game::new(config);
    game.add_ship(
        Ship::new(
            "USS Constellation",
            ShipClass::Frigate,
            CrewQuality::Elite,
            frigate_stats(),
        ),
        CubeCoordinate::new(0, 1, -1)?,
    );
    game.add_ship(
        Ship::new(
            "HMS Victory",
            ShipClass::ShipOfTheLine,
            CrewQuality::Crack,
            frigate_stats(),
        ),
        CubeCoordinate::new(4, -3, -1)?,
    );

    game.move_ship("USS Constellation", HexDirection::NorthEast.vector())?;
    let outcome = game.fire_with_dice("USS Constellation", "HMS Victory")?;
    info!(?outcome, "opening broadside");
    let reply = game.fire_with_dice("HMS Victory", "USS Constellation")?;
    info!(outcome = ?reply, "reply");

    print!("{game}");
    for ship in game.ships() {
        println!("-- log of {}", ship.name());
        for entry in ship.log() {
            println!("   {entry}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config()?;

    damage_report();
    engagement(config)
}
