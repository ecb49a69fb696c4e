//! Shared fixtures for unit tests.

use std::collections::VecDeque;

use crate::combat::{Combatant, Enemy};
use crate::config::GameConfig;
use crate::dude::Dude;
use crate::env::{Activity, Env, FloatingText, Message, Point, RngOracle, RoomOracle, StoryGeometry, normalize_angle};
use crate::equipment::{Equipment, EquipmentKind, EquipmentOracle, EquipmentTemplate, Quality};
use crate::event::Event;
use crate::ids::{DudeId, EnemyId};
use crate::profession::ProfessionKind;
use crate::stats::Stats;

/// Rng that replays queued values.
///
/// Floats feed `next_f64` (and therefore every probability check), ints
/// feed `next_u32` and `below`. Once a queue runs dry floats return 0.99
/// (every check fails) and ints return 0.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    floats: VecDeque<f64>,
    uints: VecDeque<u32>,
    floats_consumed: usize,
}

impl ScriptedRng {
    pub fn with_floats(floats: Vec<f64>) -> Self {
        Self {
            floats: floats.into(),
            ..Self::default()
        }
    }

    pub fn with_uints(uints: Vec<u32>) -> Self {
        Self {
            uints: uints.into(),
            ..Self::default()
        }
    }

    pub fn and_floats(mut self, floats: Vec<f64>) -> Self {
        self.floats.extend(floats);
        self
    }

    pub fn floats_consumed(&self) -> usize {
        self.floats_consumed
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.uints.pop_front().unwrap_or(0)
    }

    fn next_f64(&mut self) -> f64 {
        self.floats_consumed += 1;
        self.floats.pop_front().unwrap_or(0.99)
    }

    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next_u32() % bound
    }
}

fn template(name: &str, kind: EquipmentKind, stats: Stats, only: &[ProfessionKind]) -> EquipmentTemplate {
    let mut template = EquipmentTemplate::new(name, kind, stats);
    template.professions = only.to_vec();
    template
}

/// Every starting item, with small flat stats.
pub fn starter_catalog() -> Vec<EquipmentTemplate> {
    use EquipmentKind::{Accessory, Armor, Weapon};
    use ProfessionKind::{Cleric, Knight, Ranger, Vagabond};

    vec![
        template("Plate", Armor, Stats { total_hp: 2, defense: 2, ..Stats::default() }, &[Knight]),
        template("Sword", Weapon, Stats { strength: 2, ..Stats::default() }, &[]),
        template("Shield", Accessory, Stats { defense: 1, ..Stats::default() }, &[Knight]),
        template("Staff", Weapon, Stats { wisdom: 2, ..Stats::default() }, &[Cleric]),
        template("Robe", Armor, Stats { wisdom: 1, defense: 1, ..Stats::default() }, &[]),
        template("Dagger", Weapon, Stats { strength: 1, agility: 1, ..Stats::default() }, &[Vagabond, Ranger]),
        template("Leather", Armor, Stats { defense: 1, agility: 1, ..Stats::default() }, &[]),
        template("Bow", Weapon, Stats { strength: 2, agility: 1, ..Stats::default() }, &[Ranger]),
    ]
}

pub fn dude_named(name: &str, profession: ProfessionKind, level: i32) -> Dude {
    let config = GameConfig::default();
    let mut rng = ScriptedRng::default();
    Dude::new(DudeId(1), name, profession, level, &starter_catalog(), &config, &mut rng)
        .expect("starter catalog covers every profession")
}

pub fn dude_of(profession: ProfessionKind, level: i32) -> Dude {
    dude_named("Tester", profession, level)
}

pub fn knight(level: i32) -> Dude {
    dude_named("Gareth", ProfessionKind::Knight, level)
}

/// Owns everything an [`Env`] borrows.
pub struct Harness {
    pub rng: ScriptedRng,
    pub messages: Vec<Message>,
    pub texts: Vec<FloatingText>,
    pub config: GameConfig,
}

impl Harness {
    pub fn new(rng: ScriptedRng) -> Self {
        Self {
            rng,
            messages: Vec::new(),
            texts: Vec::new(),
            config: GameConfig::default(),
        }
    }

    pub fn env(&mut self) -> Env<'_> {
        Env::new(&self.config, &mut self.rng, &mut self.messages, &mut self.texts)
    }
}

/// A story centered on the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatGeometry;

impl StoryGeometry for FlatGeometry {
    fn distance_from_center(&self, point: Point) -> f64 {
        point.distance_to(Point::default())
    }

    fn angle_from_center(&self, point: Point) -> f64 {
        normalize_angle(point.y.atan2(point.x))
    }

    fn position_from_center(&self, angle: f64, distance: f64) -> Point {
        Point::new(angle.cos() * distance, angle.sin() * distance)
    }
}

/// Room that records the effects it is asked for and hands out scripted
/// loot.
#[derive(Debug, Default)]
pub struct TestRoom {
    pub level: i32,
    pub enemies: Vec<Option<Enemy>>,
    pub effects: Vec<Event>,
    pub loot: Vec<(&'static str, i32, Quality)>,
}

impl TestRoom {
    pub fn spawn(&mut self, enemy: Enemy) -> EnemyId {
        self.enemies.push(Some(enemy));
        EnemyId((self.enemies.len() - 1) as u32)
    }
}

impl RoomOracle for TestRoom {
    fn level(&self) -> i32 {
        self.level
    }

    fn enemy_mut(&mut self, enemy: EnemyId) -> Option<&mut dyn Combatant> {
        self.enemies
            .get_mut(enemy.index())?
            .as_mut()
            .map(|enemy| enemy as &mut dyn Combatant)
    }

    fn remove_enemy(&mut self, enemy: EnemyId) {
        if let Some(slot) = self.enemies.get_mut(enemy.index()) {
            *slot = None;
        }
    }

    fn roll_loot(&mut self, _luck: i32, _env: &mut Env<'_>) -> Option<Equipment> {
        if self.loot.is_empty() {
            return None;
        }
        let (name, level, quality) = self.loot.remove(0);
        starter_catalog().instantiate(name, level, quality, None).ok()
    }

    fn room_effect(&mut self, event: &Event, _dude: &mut Dude, _env: &mut Env<'_>) -> Option<Activity> {
        self.effects.push(event.clone());
        None
    }
}
