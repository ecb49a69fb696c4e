//! Leveled, quality-scaled gear.
//!
//! Equipment is always owned by exactly one place: a dude's slot array, a
//! dude's inventory, or a loose pool held by the driver. Moving an item is a
//! move of the value, never a copy.

mod catalog;
mod item;
mod quality;
mod slots;

pub use catalog::{EquipmentOracle, EquipmentTemplate};
pub use item::Equipment;
pub use quality::{EquipmentKind, Quality};
pub use slots::EquipmentSlots;
