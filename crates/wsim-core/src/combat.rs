//! Gunnery resolution between two ships.
//!
//! Firing is a one-shot transition with no state of its own:
//!
//! 1. **Range check**: beyond [`HitTable::max_range`] the shot is abandoned and
//!    the attacker logs it. Nothing else happens.
//! 2. **Hit table**: the dice roll is looked up to give a [`HitResult`]. The
//!    attacker logs the attempt and its result.
//! 3. **Damage**: hull and rigging hits are applied to the target; a miss is
//!    logged on the attacker and the target is untouched.
//!
//! Everything is determined by the two ships, the range and the roll, so the
//! same inputs always produce the same outcome.
//!
//! # Example
//!
//! ```
//! use wsim_core::combat::{fire_at, FireOutcome, HitResult};
//! # use wsim_core::damage::{Broadside, Crew, ShipStats};
//! # use wsim_core::ship::{CrewQuality, Ship, ShipClass};
//! # let stats = ShipStats::new(16, 12, Broadside::new(20, 20), Broadside::new(4, 4), Crew::new(200, [67, 67, 66]));
//! # let mut attacker = Ship::new("USS Constellation", ShipClass::Frigate, CrewQuality::Elite, stats.clone());
//! # let mut target = Ship::new("HMS Victory", ShipClass::ShipOfTheLine, CrewQuality::Crack, stats);
//!
//! let outcome = fire_at(&mut attacker, &mut target, 3, 11);
//!
//! assert_eq!(outcome, FireOutcome::Resolved(HitResult::HullHit));
//! assert_eq!(target.stats().hull, 14);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::damage::DamageType;
use crate::ship::Ship;

/// Outcome category of one broadside.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitResult {
    /// No effect on the target
    Miss,
    /// Shot struck the hull
    HullHit,
    /// Shot struck masts and rigging
    RiggingHit,
}

impl fmt::Display for HitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Miss => write!(f, "miss"),
            Self::HullHit => write!(f, "hull hit"),
            Self::RiggingHit => write!(f, "rigging hit"),
        }
    }
}

/// What a call to fire actually did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireOutcome {
    /// Target beyond maximum range; no roll was consulted.
    OutOfRange {
        /// Range to the target in hexes
        range: u32,
    },
    /// The hit table was consulted and its result applied.
    Resolved(HitResult),
}

impl FireOutcome {
    /// The hit table result, if the shot was taken.
    #[must_use]
    pub const fn hit_result(self) -> Option<HitResult> {
        match self {
            Self::OutOfRange { .. } => None,
            Self::Resolved(result) => Some(result),
        }
    }
}

/// Range limit, roll thresholds and damage amounts for gunnery.
///
/// The default table is the standard rule set: anything within 5 hexes may be
/// engaged, a roll above 10 hits the hull for 2, a roll above 5 hits the
/// rigging for 1, anything lower misses. Range does not yet shift the
/// thresholds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitTable {
    /// Furthest range, in hexes, at which a ship may fire
    pub max_range: u32,
    /// Rolls strictly above this hit the hull
    pub hull_threshold: i32,
    /// Rolls strictly above this (and not above `hull_threshold`) hit the rigging
    pub rigging_threshold: i32,
    /// Hull boxes removed by a hull hit
    pub hull_damage: u32,
    /// Rigging boxes removed by a rigging hit
    pub rigging_damage: u32,
}

impl Default for HitTable {
    fn default() -> Self {
        Self {
            max_range: 5,
            hull_threshold: 10,
            rigging_threshold: 5,
            hull_damage: 2,
            rigging_damage: 1,
        }
    }
}

impl HitTable {
    /// Looks up the result of `dice_roll` at `range` hexes.
    #[must_use]
    pub const fn consult(&self, _range: u32, dice_roll: i32) -> HitResult {
        if dice_roll > self.hull_threshold {
            HitResult::HullHit
        } else if dice_roll > self.rigging_threshold {
            HitResult::RiggingHit
        } else {
            HitResult::Miss
        }
    }

    /// Dispatches `result` to the target. A miss is logged on the attacker.
    pub fn apply(&self, attacker: &mut Ship, target: &mut Ship, result: HitResult) {
        match result {
            HitResult::HullHit => target.take_damage(DamageType::Hull, self.hull_damage),
            HitResult::RiggingHit => {
                target.take_damage(DamageType::Rigging, self.rigging_damage);
            }
            HitResult::Miss => {
                attacker.log_action(format!("Shot at {} missed", target.name()));
            }
        }
    }

    /// Resolves one broadside from `attacker` at `target`.
    pub fn fire(
        &self,
        attacker: &mut Ship,
        target: &mut Ship,
        range: u32,
        dice_roll: i32,
    ) -> FireOutcome {
        if range > self.max_range {
            debug!(
                attacker = attacker.name(),
                target = target.name(),
                range,
                max_range = self.max_range,
                "target out of range"
            );
            attacker.log_action(format!(
                "Target {} at range {range} is out of range (max {})",
                target.name(),
                self.max_range
            ));
            return FireOutcome::OutOfRange { range };
        }

        let result = self.consult(range, dice_roll);
        info!(
            attacker = attacker.name(),
            target = target.name(),
            range,
            dice_roll,
            %result,
            "broadside resolved"
        );
        attacker.log_action(format!(
            "Fired at {} at range {range}: rolled {dice_roll}, {result}",
            target.name()
        ));
        self.apply(attacker, target, result);
        FireOutcome::Resolved(result)
    }
}

/// Hit table lookup using the standard rule set.
#[must_use]
pub fn consult_hit_table(range: u32, dice_roll: i32) -> HitResult {
    HitTable::default().consult(range, dice_roll)
}

/// Applies `result` to `target` using the standard damage amounts.
pub fn apply_damage_to_target(attacker: &mut Ship, target: &mut Ship, result: HitResult) {
    HitTable::default().apply(attacker, target, result);
}

/// Fires `attacker` at `target` using the standard rule set.
pub fn fire_at(attacker: &mut Ship, target: &mut Ship, range: u32, dice_roll: i32) -> FireOutcome {
    HitTable::default().fire(attacker, target, range, dice_roll)
}
