//! Ship resource pools and damage application.
//!
//! Every pool only ever decreases and bottoms out at zero. Over-damage is
//! clamped, never reported. Crew losses are special: they are taken one man at
//! a time from the first crew section that still has anyone left, so section 0
//! is emptied before section 1 is touched.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of crew sections aboard every ship.
pub const CREW_SECTIONS: usize = 3;

/// Selects which resource pool a hit lands on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    /// Hull boxes
    Hull,
    /// Rigging boxes
    Rigging,
    /// Crew, spread over the three sections
    Crew,
    /// Port battery guns
    GunsLeft,
    /// Starboard battery guns
    GunsRight,
    /// Port carronades
    CarronadesLeft,
    /// Starboard carronades
    CarronadesRight,
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hull => "hull",
            Self::Rigging => "rigging",
            Self::Crew => "crew",
            Self::GunsLeft => "guns_left",
            Self::GunsRight => "guns_right",
            Self::CarronadesLeft => "carronades_left",
            Self::CarronadesRight => "carronades_right",
        };
        f.write_str(name)
    }
}

/// A pair of port and starboard batteries.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Broadside {
    /// Port side
    pub left: u32,
    /// Starboard side
    pub right: u32,
}

impl Broadside {
    /// Creates a battery pair.
    #[must_use]
    pub const fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }
}

/// Crew complement and its three fighting sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    /// Total crew carried
    pub total: u32,
    /// Men in each section, depleted in index order
    pub sections: [u32; CREW_SECTIONS],
}

impl Crew {
    /// Creates a crew with explicit sections.
    ///
    /// Sections summing to more than `total` are accepted; see
    /// [`Crew::is_consistent`].
    #[must_use]
    pub const fn new(total: u32, sections: [u32; CREW_SECTIONS]) -> Self {
        Self { total, sections }
    }

    /// Creates a crew divided into three equal sections of `total / 3`.
    ///
    /// The remainder of the division is left unassigned.
    #[must_use]
    pub const fn even(total: u32) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let section = total / CREW_SECTIONS as u32;
        Self::new(total, [section; CREW_SECTIONS])
    }

    /// Men still standing across all sections.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.sections.iter().sum()
    }

    /// Whether the sections fit inside the total complement.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.remaining() <= self.total
    }

    /// Removes `casualties` men, one at a time, from the first non-empty
    /// section. Casualties beyond the last man are absorbed.
    pub fn take_casualties(&mut self, casualties: u32) {
        for _ in 0..casualties {
            match self.sections.iter_mut().find(|section| **section > 0) {
                Some(section) => *section -= 1,
                None => break,
            }
        }
    }
}

/// All damageable pools of a ship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStats {
    /// Hull boxes remaining
    pub hull: u32,
    /// Rigging boxes remaining
    pub rigging: u32,
    /// Long guns per side
    pub guns: Broadside,
    /// Carronades per side
    pub carronades: Broadside,
    /// Crew complement
    pub crew: Crew,
}

impl ShipStats {
    /// Creates a full set of stats.
    #[must_use]
    pub const fn new(
        hull: u32,
        rigging: u32,
        guns: Broadside,
        carronades: Broadside,
        crew: Crew,
    ) -> Self {
        Self {
            hull,
            rigging,
            guns,
            carronades,
            crew,
        }
    }

    /// Applies `amount` points of damage to the pool selected by `damage_type`.
    ///
    /// Never fails: pools clamp at zero and surplus crew casualties vanish.
    pub fn apply_damage(&mut self, damage_type: DamageType, amount: u32) {
        let pool = match damage_type {
            DamageType::Hull => &mut self.hull,
            DamageType::Rigging => &mut self.rigging,
            DamageType::GunsLeft => &mut self.guns.left,
            DamageType::GunsRight => &mut self.guns.right,
            DamageType::CarronadesLeft => &mut self.carronades.left,
            DamageType::CarronadesRight => &mut self.carronades.right,
            DamageType::Crew => {
                self.crew.take_casualties(amount);
                debug!(
                    %damage_type,
                    amount,
                    sections = ?self.crew.sections,
                    "crew casualties applied"
                );
                return;
            }
        };
        *pool = pool.saturating_sub(amount);
        debug!(%damage_type, amount, remaining = *pool, "damage applied");
    }
}

/// Applies damage to `stats` in place. See [`ShipStats::apply_damage`].
pub fn apply_damage(stats: &mut ShipStats, damage_type: DamageType, amount: u32) {
    stats.apply_damage(damage_type, amount);
}
