//! Combat odds and the enemy side of an exchange.
//!
//! The dude side of the exchange (attack, defense, rewards) lives on
//! [`Dude`](crate::dude::Dude); this module holds the pure formulas and the
//! opponent abstraction.

mod chance;
mod enemy;

pub use chance::{crit_chance, dodge_chance, logistic, miss_chance};
pub use enemy::{Combatant, Enemy};

/// Result of pushing damage into a dude.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageTaken {
    /// Hit points actually removed after defense.
    pub amount: i32,
    pub dodged: bool,
}

impl DamageTaken {
    pub const NONE: Self = Self {
        amount: 0,
        dodged: false,
    };
}

/// Result of a dude's attack roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackRoll {
    pub damage: i32,
    pub crit: bool,
}
