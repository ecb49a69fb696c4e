use crate::combat::Combatant;
use crate::dude::Dude;
use crate::equipment::Equipment;
use crate::event::Event;
use crate::ids::EnemyId;

use super::{Activity, Env};

/// The room a dude is currently in, as seen from the dude.
///
/// Owned by the driver. The dude only holds handles into it and borrows it
/// for the duration of a single event.
pub trait RoomOracle {
    fn level(&self) -> i32;

    /// Resolves an enemy handle the dude holds.
    fn enemy_mut(&mut self, enemy: EnemyId) -> Option<&mut dyn Combatant>;

    /// Releases an enemy slot once it has been defeated.
    fn remove_enemy(&mut self, enemy: EnemyId);

    /// Rolls a loot drop for a kill made with the given luck.
    fn roll_loot(&mut self, luck: i32, env: &mut Env<'_>) -> Option<Equipment>;

    /// Applies the room's own reaction to a room event.
    fn room_effect(&mut self, event: &Event, dude: &mut Dude, env: &mut Env<'_>)
    -> Option<Activity>;
}

