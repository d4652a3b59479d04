//! Crate-level scenario and property tests.
//!
//! - `helpers.rs`: ship and game factories shared by every test module
//! - `integration.rs`: end-to-end engagements through the roster
//! - `determinism.rs`: same seed and same calls give the same game
//! - `properties.rs`: proptest invariants for geometry, damage and combat

pub(crate) mod helpers;

/// Games run one per thread; everything a game owns must move across threads.
#[test]
fn core_types_are_send() {
    fn assert_send<T: Send>() {}

    assert_send::<crate::game::Game>();
    assert_send::<crate::ship::Ship>();
    assert_send::<crate::damage::ShipStats>();
    assert_send::<crate::dice::Dice>();
    assert_send::<crate::config::GameConfig>();
    assert_send::<crate::combat::FireOutcome>();
    assert_send::<crate::hex::CubeCoordinate>();
    assert_send::<crate::error::WsimError>();
}
