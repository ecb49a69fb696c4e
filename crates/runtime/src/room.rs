//! Rooms and the effects they have on dudes passing through.

use std::collections::HashSet;

use tower_core::{
    Activity, Combatant, Dude, DudeActivity, DudeId, EnemyId, Enemy, Env, Equipment,
    EquipmentOracle, Event, GameConfig, PerkQuality, Quality, RoomOracle,
};

/// What a room does.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumCount,
)]
#[strum(serialize_all = "lowercase")]
pub enum RoomKind {
    #[default]
    Empty,
    /// Spawns a monster for every dude that walks in.
    Combat,
    /// Springs once per visit.
    Trap,
    Curse,
    Heal,
    Treasure,
    /// Leads to the next story, or out through the portal on the top one.
    Stairs,
}

impl RoomKind {
    /// Rooms where the dude gets a combat tick every tick it stays inside.
    pub fn is_hostile(self) -> bool {
        matches!(self, RoomKind::Combat | RoomKind::Trap)
    }
}

const MONSTERS: &[&str] = &["Rat", "Goblin", "Skeleton", "Slime", "Bat", "Cultist", "Ghoul"];

/// A room on a story.
#[derive(Clone, Debug)]
pub struct Room {
    kind: RoomKind,
    level: i32,
    enemies: Vec<Option<Enemy>>,
    sprung: HashSet<DudeId>,
}

impl Room {
    pub fn new(kind: RoomKind, level: i32) -> Self {
        Self {
            kind,
            level,
            enemies: Vec::new(),
            sprung: HashSet::new(),
        }
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    /// Enemies currently alive in the room.
    pub fn enemy_count(&self) -> usize {
        self.enemies.iter().flatten().count()
    }

    /// Places an enemy in the first free slot.
    pub fn spawn(&mut self, enemy: Enemy) -> EnemyId {
        let slot = match self.enemies.iter().position(Option::is_none) {
            Some(slot) => {
                self.enemies[slot] = Some(enemy);
                slot
            }
            None => {
                self.enemies.push(Some(enemy));
                self.enemies.len() - 1
            }
        };
        EnemyId(slot as u32)
    }

    pub fn enemy(&self, enemy: EnemyId) -> Option<&Enemy> {
        self.enemies.get(enemy.index())?.as_ref()
    }

    pub(crate) fn remove_enemy(&mut self, enemy: EnemyId) {
        if let Some(slot) = self.enemies.get_mut(enemy.index()) {
            *slot = None;
        }
    }

    /// Clears enemies and per-visit state between runs.
    pub fn reset(&mut self) {
        self.enemies.clear();
        self.sprung.clear();
    }

    /// Chance a kill here drops loot.
    ///
    /// # Formula
    ///
    /// ```text
    /// min(0.6, 0.1 + 0.05 * level + 0.01 * luck)
    /// ```
    pub fn loot_chance(&self, luck: i32) -> f64 {
        (0.1 + 0.05 * f64::from(self.level) + 0.01 * f64::from(luck.max(0))).min(0.6)
    }
}

/// A room lent to a dude for one event, together with what it needs to
/// resolve loot and stairs.
pub struct ActiveRoom<'a> {
    pub room: &'a mut Room,
    pub catalog: &'a dyn EquipmentOracle,
    pub top_story: bool,
}

impl ActiveRoom<'_> {
    fn on_enter(&mut self, dude: &mut Dude, env: &mut Env<'_>) -> Option<Activity> {
        if self.room.kind != RoomKind::Combat || dude.enemy().is_some() {
            return None;
        }
        let name = MONSTERS[env.rng().below(MONSTERS.len() as u32) as usize];
        let enemy = Enemy::scaled(name, self.room.level);
        tracing::debug!(dude = %dude.id(), enemy = name, level = self.room.level, "enemy spawned");
        let id = self.room.spawn(enemy);
        dude.engage(id);
        None
    }

    fn on_center(&mut self, dude: &mut Dude, env: &mut Env<'_>) -> Option<Activity> {
        match self.room.kind {
            RoomKind::Curse => {
                dude.cursify(self.room.level, env);
            }
            RoomKind::Heal => {
                dude.full_heal(env);
                dude.restore_uses(env);
            }
            RoomKind::Treasure => {
                let cap = Quality::from_index_clamped(self.room.level);
                dude.level_up_equipment(1, cap, env);
                dude.perkify(perk_cap(self.room.level), env);
            }
            RoomKind::Stairs if self.top_story => dude.set_activity(DudeActivity::EnterPortal),
            RoomKind::Stairs => dude.set_activity(DudeActivity::StairsToUp),
            RoomKind::Empty | RoomKind::Combat | RoomKind::Trap => {}
        }
        None
    }

    fn on_combat(&mut self, dude: &mut Dude, env: &mut Env<'_>) -> Option<Activity> {
        if self.room.kind != RoomKind::Trap || !self.room.sprung.insert(dude.id()) {
            return None;
        }
        dude.trap_damage(self.room.level, env)
    }

    fn on_leave(&mut self, dude: &mut Dude) -> Option<Activity> {
        self.room.sprung.remove(&dude.id());
        // A surviving enemy stays behind and is dropped.
        if let Some(enemy) = dude.disengage() {
            self.room.remove_enemy(enemy);
        }
        None
    }
}

fn perk_cap(level: i32) -> PerkQuality {
    match level {
        i32::MIN..=1 => PerkQuality::Common,
        2 => PerkQuality::Uncommon,
        3 => PerkQuality::Rare,
        4 => PerkQuality::Epic,
        _ => PerkQuality::Legendary,
    }
}

impl RoomOracle for ActiveRoom<'_> {
    fn level(&self) -> i32 {
        self.room.level
    }

    fn enemy_mut(&mut self, enemy: EnemyId) -> Option<&mut dyn Combatant> {
        self.room
            .enemies
            .get_mut(enemy.index())?
            .as_mut()
            .map(|enemy| enemy as &mut dyn Combatant)
    }

    fn remove_enemy(&mut self, enemy: EnemyId) {
        self.room.remove_enemy(enemy);
    }

    fn roll_loot(&mut self, luck: i32, env: &mut Env<'_>) -> Option<Equipment> {
        if !env.rng().chance(self.room.loot_chance(luck)) {
            return None;
        }
        let names = self.catalog.names();
        if names.is_empty() {
            return None;
        }
        let name = names[env.rng().below(names.len() as u32) as usize];
        let best = (self.room.level / 2).clamp(0, Quality::Legendary.index());
        let quality = Quality::from_index_clamped(env.rng().below(best as u32 + 1) as i32);
        let level = env.rng().below(GameConfig::EQUIPMENT_LEVEL_CAP as u32) as i32;

        match self.catalog.instantiate(name, level, quality, None) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(%err, "loot roll skipped");
                None
            }
        }
    }

    fn room_effect(&mut self, event: &Event, dude: &mut Dude, env: &mut Env<'_>) -> Option<Activity> {
        match event {
            Event::EnterRoom => self.on_enter(dude, env),
            Event::CenterRoom => self.on_center(dude, env),
            Event::CombatRoom => self.on_combat(dude, env),
            Event::LeaveRoom => self.on_leave(dude),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use tower_content::EquipmentLoader;
    use tower_core::{FloatingText, Message, PcgRng, ProfessionKind, Stats};

    use super::*;

    struct Fixture {
        config: GameConfig,
        rng: PcgRng,
        messages: Vec<Message>,
        texts: Vec<FloatingText>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                config: GameConfig::default(),
                rng: PcgRng::new(11),
                messages: Vec::new(),
                texts: Vec::new(),
            }
        }

        fn env(&mut self) -> Env<'_> {
            Env::new(&self.config, &mut self.rng, &mut self.messages, &mut self.texts)
        }
    }

    fn knight(fixture: &mut Fixture, catalog: &dyn EquipmentOracle) -> Dude {
        Dude::new(DudeId(1), "Gareth", ProfessionKind::Knight, 1, catalog, &fixture.config, &mut fixture.rng)
            .unwrap()
    }

    #[test]
    fn combat_room_spawns_and_engages_then_drops_on_leave() {
        let catalog = EquipmentLoader::builtin().unwrap();
        let mut fixture = Fixture::new();
        let mut dude = knight(&mut fixture, &catalog);
        let mut room = Room::new(RoomKind::Combat, 2);

        let mut active = ActiveRoom { room: &mut room, catalog: &catalog, top_story: false };
        dude.trigger(&Event::EnterRoom, &mut active, &mut fixture.env());
        let enemy = dude.enemy().expect("engaged on entry");
        assert_eq!(active.room.enemy(enemy).unwrap().stats().strength, 3);

        dude.trigger(&Event::LeaveRoom, &mut active, &mut fixture.env());
        assert_eq!(dude.enemy(), None);
        assert_eq!(room.enemy_count(), 0);
    }

    #[test]
    fn trap_springs_once_per_visit() {
        let catalog = EquipmentLoader::builtin().unwrap();
        let mut fixture = Fixture::new();
        let mut dude = knight(&mut fixture, &catalog);
        let mut room = Room::new(RoomKind::Trap, 1);
        let mut active = ActiveRoom { room: &mut room, catalog: &catalog, top_story: false };

        dude.trigger(&Event::CombatRoom, &mut active, &mut fixture.env());
        let after_first = fixture.messages.len();
        assert_eq!(after_first, 1, "trap hit or avoided exactly once");
        dude.trigger(&Event::CombatRoom, &mut active, &mut fixture.env());
        assert_eq!(fixture.messages.len(), after_first);

        dude.trigger(&Event::LeaveRoom, &mut active, &mut fixture.env());
        dude.trigger(&Event::CombatRoom, &mut active, &mut fixture.env());
        assert!(fixture.messages.len() > after_first);
    }

    #[test]
    fn stairs_route_up_or_out() {
        let catalog = EquipmentLoader::builtin().unwrap();
        let mut fixture = Fixture::new();
        let mut dude = knight(&mut fixture, &catalog);
        let mut room = Room::new(RoomKind::Stairs, 1);

        let mut lower = ActiveRoom { room: &mut room, catalog: &catalog, top_story: false };
        dude.trigger(&Event::CenterRoom, &mut lower, &mut fixture.env());
        assert_eq!(dude.activity(), DudeActivity::StairsToUp);

        let mut top = ActiveRoom { room: &mut room, catalog: &catalog, top_story: true };
        dude.trigger(&Event::CenterRoom, &mut top, &mut fixture.env());
        assert_eq!(dude.activity(), DudeActivity::EnterPortal);
    }

    #[test]
    fn heal_room_restores_health() {
        let catalog = EquipmentLoader::builtin().unwrap();
        let mut fixture = Fixture::new();
        let mut dude = knight(&mut fixture, &catalog);
        // Plate raises total hp above the base pool.
        assert!(dude.stats().current_hp < dude.calculated_stats().total_hp);

        let mut room = Room::new(RoomKind::Heal, 1);
        let mut heal = ActiveRoom { room: &mut room, catalog: &catalog, top_story: false };
        dude.trigger(&Event::CenterRoom, &mut heal, &mut fixture.env());
        assert_eq!(dude.stats().current_hp, dude.calculated_stats().total_hp);
    }

    #[test]
    fn treasure_room_improves_gear() {
        let catalog = EquipmentLoader::builtin().unwrap();
        let mut fixture = Fixture::new();
        let mut dude = knight(&mut fixture, &catalog);
        let before: Vec<i32> = dude.equipped().iter().map(|item| item.level()).collect();

        let mut room = Room::new(RoomKind::Treasure, 3);
        let mut active = ActiveRoom { room: &mut room, catalog: &catalog, top_story: false };
        dude.trigger(&Event::CenterRoom, &mut active, &mut fixture.env());

        let after: Vec<i32> = dude.equipped().iter().map(|item| item.level()).collect();
        assert_eq!(after.iter().sum::<i32>(), before.iter().sum::<i32>() + 1);
        assert_eq!(dude.equipped().iter().filter(|item| item.perk().is_some()).count(), 1);
    }

    #[test]
    fn loot_chance_is_capped() {
        let room = Room::new(RoomKind::Combat, 2);
        assert!((room.loot_chance(0) - 0.2).abs() < 1e-12);
        assert_eq!(Room::new(RoomKind::Combat, 40).loot_chance(100), 0.6);
    }

    #[test]
    fn loot_comes_from_catalog_within_quality_band() {
        let catalog = EquipmentLoader::builtin().unwrap();
        let mut fixture = Fixture::new();
        let mut room = Room::new(RoomKind::Combat, 2);
        let mut active = ActiveRoom { room: &mut room, catalog: &catalog, top_story: false };
        let drops: Vec<Equipment> = (0..200)
            .filter_map(|_| active.roll_loot(1000, &mut fixture.env()))
            .collect();
        assert!(!drops.is_empty());
        assert!(drops.iter().all(|item| item.quality() <= Quality::Uncommon));
        assert!(drops.iter().all(|item| catalog.template(item.name()).is_some()));
    }

    #[test]
    fn spawn_reuses_free_slots() {
        let mut room = Room::new(RoomKind::Combat, 0);
        let a = room.spawn(Enemy::new("A", Stats::default(), 0, 0));
        let b = room.spawn(Enemy::new("B", Stats::default(), 0, 0));
        room.remove_enemy(a);
        let c = room.spawn(Enemy::new("C", Stats::default(), 0, 0));
        assert_eq!(c, a);
        assert_ne!(b, c);
        assert_eq!(room.enemy_count(), 2);
    }
}
