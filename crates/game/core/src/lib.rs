//! Rules engine for the tower's adventurers.
//!
//! `tower-core` owns everything that decides what a dude does: stats and
//! their growth, equipment and perks, professions, the per-tick activity
//! state machine and the combat, progression and curse rules. It performs no
//! I/O. The driver lends it geometry, the current room, an rng and two
//! feedback sinks through [`env::Env`] and the oracle traits, and reacts to
//! the [`ActivityRequest`]s and [`Activity`] signals it hands back.
pub mod combat;
pub mod config;
pub mod dude;
pub mod env;
pub mod equipment;
pub mod error;
pub mod event;
pub mod ids;
pub mod perk;
pub mod profession;
pub mod stats;

#[cfg(test)]
mod test_support;

pub use combat::{AttackRoll, Combatant, DamageTaken, Enemy};
pub use config::{CombatRules, GameConfig, MovementRules};
pub use dude::{CurseReport, Dirty, Dude, DudeActivity, Pose, SortProperty, sort_dudes};
pub use env::{
    Activity, ActivityRequest, ActivityRequests, Env, FloatingText, FloatingTextSink, Message,
    MessageKind, MessageSink, MoveHook, MoveRequest, PcgRng, Point, Rgba, RngOracle, RoomOracle,
    StoryGeometry, derive_seed, normalize_angle,
};
pub use equipment::{
    Equipment, EquipmentKind, EquipmentOracle, EquipmentSlots, EquipmentTemplate, Quality,
};
pub use error::CatalogError;
pub use event::{Event, EventKind};
pub use ids::{DudeId, EnemyId, RoomId, StoryId};
pub use perk::{Perk, PerkOutcome, PerkQuality, perk_by_name, random_perk};
pub use profession::{
    Profession, ProfessionKind, random_profession_kind, weighted_random_profession_kind,
};
pub use stats::{LevelCurve, Stats};
