//! Adventurer units and everything that happens to them.
//!
//! A [`Dude`] owns its stats, gear and inventory outright. Rooms, stories
//! and enemies are referenced through handles only; the driver owns them
//! and lends the current room to [`Dude::trigger`] for one event at a time.
//!
//! The behavior is split by concern:
//! - [`activity`]: the per-tick movement state machine
//! - [`trigger`]: event dispatch and the combat exchange
//! - [`combat`]: attack and defense rolls
//! - [`progression`]: experience, healing, gold and gear management
//! - [`curse`]: curse and trap resolution
//! - [`sort`]: roster ordering

pub mod activity;
mod combat;
mod curse;
mod progression;
mod sort;
mod trigger;

pub use activity::DudeActivity;
pub use curse::CurseReport;
pub use sort::{SortProperty, sort_dudes};

use crate::config::{GameConfig, MovementRules};
use crate::env::{Env, FloatingText, MoveHook, MoveRequest, Point, Rgba, RngOracle};
use crate::equipment::{Equipment, EquipmentOracle, EquipmentSlots};
use crate::error::CatalogError;
use crate::ids::{DudeId, EnemyId, RoomId, StoryId};
use crate::profession::{Profession, ProfessionKind};
use crate::stats::Stats;

bitflags::bitflags! {
    /// Views a renderer should refresh since it last looked.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Dirty: u8 {
        const EQUIPMENT = 1 << 0;
        const STATS     = 1 << 1;
        const POSE      = 1 << 2;
    }
}

/// Sprite animation the pose plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Animation {
    #[default]
    Base,
    Ded,
}

/// Render-facing pose. Equipment stacks copy this on every sync.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub animation: Animation,
    pub height_offset: f64,
    pub vgroup_offset: u32,
    pub slice_offset: i32,
    pub max_slice_index: i32,
    pub slice_count: i32,
    pub transparency: f32,
}

impl Pose {
    /// Height a dude drops in from when entering the tower.
    pub const ENTRY_HEIGHT: f64 = 1.5;

    fn new(slice_count: i32) -> Self {
        Self {
            animation: Animation::Base,
            height_offset: 0.0,
            vgroup_offset: 1,
            slice_offset: 0,
            max_slice_index: 0,
            slice_count,
            transparency: 0.0,
        }
    }
}

/// An adventurer.
#[derive(Debug)]
pub struct Dude {
    id: DudeId,
    name: String,
    profession: ProfessionKind,
    invincible: bool,
    xp: i32,
    gold: i32,
    stats: Stats,
    equipped: EquipmentSlots,
    inventory: Vec<Equipment>,
    activity: DudeActivity,
    timer: u32,
    variation: f64,
    enemy: Option<EnemyId>,
    story: Option<StoryId>,
    room: Option<RoomId>,
    position: Point,
    rotation: f64,
    true_rotation: f64,
    pose: Pose,
    dirty: Dirty,
}

impl Dude {
    /// Creates a dude of `profession` at `level`.
    ///
    /// Starting gear is looked up in `catalog` and equipped without raising
    /// events. A missing catalog entry aborts construction.
    pub fn new(
        id: DudeId,
        name: impl Into<String>,
        profession: ProfessionKind,
        level: i32,
        catalog: &dyn EquipmentOracle,
        config: &GameConfig,
        rng: &mut dyn RngOracle,
    ) -> Result<Self, CatalogError> {
        let template = Profession::for_kind(profession);

        let mut stats = template.starting_stats;
        for _ in 1..level {
            stats.level_up(false);
        }

        let mut equipped = EquipmentSlots::new();
        for item in template.starting_items(catalog)? {
            equipped.insert(item);
        }

        let range = f64::from(config.movement.variation_range);
        let variation = -range + rng.next_f64() * range * 2.0;

        Ok(Self {
            id,
            name: name.into(),
            profession,
            invincible: false,
            xp: 0,
            gold: 0,
            stats,
            equipped,
            inventory: Vec::new(),
            activity: DudeActivity::Idle,
            timer: 0,
            variation,
            enemy: None,
            story: None,
            room: None,
            position: Point::default(),
            rotation: 0.0,
            true_rotation: 0.0,
            pose: Pose::new(config.movement.slice_count),
            dirty: Dirty::all(),
        })
    }

    pub fn id(&self) -> DudeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profession(&self) -> ProfessionKind {
        self.profession
    }

    pub fn level(&self) -> i32 {
        self.stats.level
    }

    pub fn xp(&self) -> i32 {
        self.xp
    }

    pub fn next_level_xp(&self, config: &GameConfig) -> i32 {
        config.combat.xp_per_level * self.level()
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    /// Base stats without equipment.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Base stats plus every equipped item, keeping the live hit points.
    pub fn calculated_stats(&self) -> Stats {
        let mut stats = self
            .equipped
            .iter()
            .fold(self.stats, |total, item| total + item.stats());
        stats.current_hp = self.stats.current_hp;
        stats
    }

    pub fn equipped(&self) -> &EquipmentSlots {
        &self.equipped
    }

    pub fn inventory(&self) -> &[Equipment] {
        &self.inventory
    }

    pub fn activity(&self) -> DudeActivity {
        self.activity
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn variation(&self) -> f64 {
        self.variation
    }

    pub fn set_variation(&mut self, variation: f64) {
        self.variation = variation;
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    pub fn set_invincible(&mut self, invincible: bool) {
        self.invincible = invincible;
    }

    pub fn enemy(&self) -> Option<EnemyId> {
        self.enemy
    }

    pub fn engage(&mut self, enemy: EnemyId) {
        self.enemy = Some(enemy);
    }

    /// Drops the enemy reference, returning it.
    pub fn disengage(&mut self) -> Option<EnemyId> {
        self.enemy.take()
    }

    pub fn story(&self) -> Option<StoryId> {
        self.story
    }

    pub fn set_story(&mut self, story: Option<StoryId>) {
        self.story = story;
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn set_room(&mut self, room: Option<RoomId>) {
        self.room = room;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Direction of travel, ignoring any facing override.
    pub fn true_rotation(&self) -> f64 {
        self.true_rotation
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// Returns and clears the dirty flags.
    pub fn take_dirty(&mut self) -> Dirty {
        std::mem::take(&mut self.dirty)
    }

    /// Places the dude at the tower entrance of `story`, dropping in from
    /// above.
    pub fn enter_tower(&mut self, story: StoryId, room: RoomId, position: Point) {
        self.story = Some(story);
        self.room = Some(room);
        self.position = position;
        self.pose.height_offset = Pose::ENTRY_HEIGHT;
        self.pose.transparency = 0.0;
        self.set_activity(DudeActivity::FirstEntering);
    }

    /// Detaches the dude from the tower after it left or the run ended.
    pub fn leave_tower(&mut self) {
        self.story = None;
        self.room = None;
        self.enemy = None;
    }

    /// Switches activity and resets the per-activity timer.
    pub fn set_activity(&mut self, activity: DudeActivity) {
        tracing::debug!(
            dude = %self.id,
            from = %self.activity,
            to = %activity,
            "activity changed"
        );
        self.activity = activity;
        self.timer = 0;
        match activity {
            DudeActivity::Ded => self.pose.animation = Animation::Ded,
            DudeActivity::BornAgain => self.pose.animation = Animation::Base,
            _ => {}
        }
        self.dirty |= Dirty::POSE;
    }

    /// Angular step per tick.
    ///
    /// # Formula
    ///
    /// ```text
    /// engaged:  base * combat_factor
    /// walking:  base * (1 + (agility / 10) * scale)
    /// ```
    pub fn speed(&self, rules: &MovementRules) -> f64 {
        if self.enemy.is_some() {
            return rules.base_speed * rules.combat_speed_factor;
        }
        let agility = self.calculated_stats().agility;
        rules.base_speed * (1.0 + f64::from(agility / 10) * rules.speed_scale)
    }

    /// Reports the outcome of a move request issued by [`Dude::update`].
    pub fn complete_move(&mut self, request: &MoveRequest, success: bool) {
        if success {
            self.position = request.target;
            self.rotation = request.face;
        }
        match request.hook {
            MoveHook::Sync => self.sync_pose(),
            MoveHook::SyncOnSuccess if success => self.sync_pose(),
            MoveHook::SyncOnSuccess => {}
            MoveHook::Descend => {
                self.pose.height_offset = (self.pose.height_offset - 0.15).max(0.0);
                self.sync_pose();
            }
        }
    }

    fn sync_pose(&mut self) {
        self.dirty |= Dirty::POSE;
    }

    /// Floating texts only make sense while the dude stands in a story.
    fn float_text(
        &self,
        env: &mut Env<'_>,
        text: impl Into<String>,
        color: Rgba,
        lifetime: u32,
        speed: f64,
    ) {
        if self.story.is_none() {
            return;
        }
        env.float_text(FloatingText {
            dude: self.id,
            text: text.into(),
            color,
            lifetime,
            speed,
            origin: self.position,
        });
    }
}
