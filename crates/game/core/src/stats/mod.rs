//! Attribute blocks shared by dudes, equipment and enemies.
//!
//! A single [`Stats`] type is used everywhere: a dude's base attributes,
//! the bonus an item contributes, and an enemy's combat profile. Calculated
//! stats are always `base + sum(equipped bonuses)`.

mod core;
mod growth;

pub use self::core::Stats;
pub use growth::LevelCurve;
