//! The tower driver.
//!
//! [`Tower`] owns the stories and every dude inside. Each tick it advances
//! dudes in roster order, resolves the requests they queue and raises the
//! room events their movement implies. Dudes that walk out through the
//! portal move to the returned list; dead dudes stay where they fell.
//! The views each dude changed during the tick are collected in
//! [`Tower::changes`].

use tower_content::EquipmentCatalog;
use tower_core::{
    Activity, ActivityRequest, ActivityRequests, Dirty, Dude, DudeActivity, DudeId, Env, Event,
    GameConfig, RngOracle, RoomId, StoryGeometry, StoryId,
};

use crate::error::{Result, RuntimeError};
use crate::room::ActiveRoom;
use crate::story::Story;

/// Fewest rooms a story may have: the entry room and the stairs.
pub const MIN_ROOMS: usize = 2;

/// How far outside the ring a dude appears when dropped into the tower.
const ENTRY_MARGIN: f64 = 20.0;

pub struct Tower {
    stories: Vec<Story>,
    dudes: Vec<Dude>,
    returned: Vec<Dude>,
    catalog: EquipmentCatalog,
    requests: ActivityRequests,
    changes: Vec<(DudeId, Dirty)>,
}

impl Tower {
    pub fn new(stories: Vec<Story>, catalog: EquipmentCatalog) -> Result<Self> {
        let fewest = stories.iter().map(|story| story.rooms().len()).min().unwrap_or(0);
        if stories.is_empty() || fewest < MIN_ROOMS {
            return Err(RuntimeError::EmptyTower {
                stories: stories.len(),
                rooms: fewest,
                min: MIN_ROOMS,
            });
        }
        Ok(Self {
            stories,
            dudes: Vec::new(),
            returned: Vec::new(),
            catalog,
            requests: ActivityRequests::new(),
            changes: Vec::new(),
        })
    }

    /// Random tower with `story_count` stories of `rooms_per_story` rooms.
    pub fn generate(
        story_count: usize,
        rooms_per_story: usize,
        catalog: EquipmentCatalog,
        rng: &mut dyn RngOracle,
    ) -> Result<Self> {
        if story_count == 0 || rooms_per_story < MIN_ROOMS {
            return Err(RuntimeError::EmptyTower {
                stories: story_count,
                rooms: rooms_per_story,
                min: MIN_ROOMS,
            });
        }
        let stories = (0..story_count)
            .map(|level| Story::generate(StoryId(level as u32), rooms_per_story, rng))
            .collect();
        Self::new(stories, catalog)
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    /// Dudes still inside, dead ones included.
    pub fn dudes(&self) -> &[Dude] {
        &self.dudes
    }

    /// Dudes that walked out through the portal.
    pub fn returned(&self) -> &[Dude] {
        &self.returned
    }

    /// Views each dude changed during the last tick.
    pub fn changes(&self) -> &[(DudeId, Dirty)] {
        &self.changes
    }

    pub fn dude(&self, id: DudeId) -> Option<&Dude> {
        self.dudes.iter().find(|dude| dude.id() == id)
    }

    /// Living dudes still inside.
    pub fn active_count(&self) -> usize {
        self.dudes.iter().filter(|dude| !dude.is_dead()).count()
    }

    /// Drops `dudes` into the entry room of the ground floor.
    pub fn enter(&mut self, dudes: impl IntoIterator<Item = Dude>, config: &GameConfig) {
        let ground = &self.stories[0];
        let distance = config.movement.room_path + ENTRY_MARGIN;
        let incoming: Vec<Dude> = dudes.into_iter().collect();
        let count = incoming.len().max(1) as f64;

        for (slot, mut dude) in incoming.into_iter().enumerate() {
            // Spread arrivals over the middle half of the entry room.
            let offset = (slot as f64 / count - 0.5) * ground.arc() * 0.5;
            dude.enter_tower(StoryId(0), RoomId(0), ground.entrance(distance, offset));
            tracing::debug!(dude = %dude.id(), name = dude.name(), "entered the tower");
            self.dudes.push(dude);
        }
    }

    /// Pulls a dude out of the tower, wherever it stands.
    pub fn remove(&mut self, id: DudeId) -> Result<Dude> {
        let index = self
            .dudes
            .iter()
            .position(|dude| dude.id() == id)
            .ok_or(RuntimeError::UnknownDude(id))?;
        let mut dude = self.dudes.remove(index);
        if let (Some(story), Some(room), Some(enemy)) = (dude.story(), dude.room(), dude.enemy()) {
            let room = self
                .stories
                .get_mut(story.index())
                .and_then(|story| story.room_mut(room));
            if let Some(room) = room {
                room.remove_enemy(enemy);
            }
        }
        dude.leave_tower();
        Ok(dude)
    }

    /// Empties the tower, returning the returned dudes and everyone still
    /// inside.
    pub fn drain(&mut self) -> (Vec<Dude>, Vec<Dude>) {
        let inside = std::mem::take(&mut self.dudes)
            .into_iter()
            .map(|mut dude| {
                dude.leave_tower();
                dude
            })
            .collect();
        for story in &mut self.stories {
            story.reset();
        }
        (std::mem::take(&mut self.returned), inside)
    }

    /// Advances every dude inside by one tick.
    pub fn tick(&mut self, env: &mut Env<'_>) -> Vec<Activity> {
        let mut activities = Vec::new();
        let mut index = 0;
        self.changes.clear();

        while index < self.dudes.len() {
            let dude = &mut self.dudes[index];
            if dude.is_dead() || dude.story().is_none() {
                index += 1;
                continue;
            }

            let left = step_dude(
                dude,
                &mut self.stories,
                &self.catalog,
                &mut self.requests,
                env,
                &mut activities,
            );
            let changed = dude.take_dirty();
            if !changed.is_empty() {
                self.changes.push((dude.id(), changed));
            }
            if left {
                let dude = self.dudes.remove(index);
                tracing::info!(dude = %dude.id(), name = dude.name(), gold = dude.gold(), "left the tower");
                self.returned.push(dude);
            } else {
                index += 1;
            }
        }

        activities
    }
}

/// One dude's tick. Returns whether the dude walked out of the tower.
fn step_dude(
    dude: &mut Dude,
    stories: &mut [Story],
    catalog: &EquipmentCatalog,
    requests: &mut ActivityRequests,
    env: &mut Env<'_>,
    activities: &mut Vec<Activity>,
) -> bool {
    let story_id = dude.story().expect("ticked dude must stand on a story");
    let geometry = *stories
        .get(story_id.index())
        .expect("dude's story must exist in the tower")
        .geometry();
    let before = geometry.angle_from_center(dude.position());

    dude.update(&geometry, env.config(), requests);

    let mut left = false;
    for request in requests.drain() {
        if request.dude() != dude.id() {
            tracing::warn!(dude = %dude.id(), request = ?request, "request for another dude dropped");
            continue;
        }
        match request {
            ActivityRequest::Move(request) => dude.complete_move(&request, true),
            ActivityRequest::EnterNextStory { .. } => {
                climb(dude, stories, catalog, env, activities);
            }
            ActivityRequest::LeaveTower { .. } => {
                dude.leave_tower();
                left = true;
            }
        }
    }
    if left {
        return true;
    }
    if dude.is_dead() || dude.activity() != DudeActivity::Moving {
        return false;
    }

    let story_id = dude.story().expect("moving dude must stand on a story");
    let top_story = story_id.index() + 1 == stories.len();
    let story = &mut stories[story_id.index()];
    let after = story.geometry().angle_from_center(dude.position());
    let current = story.room_at(after);

    match dude.room() {
        Some(room) if room == current => {
            if story.crossed_center(current, before, after) {
                let died = fire(dude, story, current, top_story, catalog, Event::CenterRoom, env);
                if let Some(activity) = died {
                    activities.push(activity);
                    return false;
                }
            }
        }
        previous => {
            if let Some(previous) = previous {
                let died = fire(dude, story, previous, top_story, catalog, Event::LeaveRoom, env);
                if let Some(activity) = died {
                    activities.push(activity);
                    return false;
                }
            }
            dude.set_room(Some(current));
            let died = fire(dude, story, current, top_story, catalog, Event::EnterRoom, env);
            if let Some(activity) = died {
                activities.push(activity);
                return false;
            }
        }
    }

    let hostile = story.room(current).is_some_and(|room| room.kind().is_hostile());
    if hostile && dude.activity() == DudeActivity::Moving {
        activities.extend(fire(dude, story, current, top_story, catalog, Event::CombatRoom, env));
    }
    false
}

/// Moves a dude from the stairs to the story above, or into the portal
/// when there is none.
fn climb(
    dude: &mut Dude,
    stories: &mut [Story],
    catalog: &EquipmentCatalog,
    env: &mut Env<'_>,
    activities: &mut Vec<Activity>,
) {
    let from = dude.story().expect("climbing dude must stand on a story");
    let above = from.above();
    if above.index() >= stories.len() {
        dude.set_activity(DudeActivity::EnterPortal);
        return;
    }

    let top_story = above.index() + 1 == stories.len();
    let (lower, upper) = stories.split_at_mut(above.index());
    if let Some(room) = dude.room() {
        let died = fire(dude, &mut lower[from.index()], room, false, catalog, Event::LeaveRoom, env);
        if let Some(activity) = died {
            activities.push(activity);
            return;
        }
    }

    let story = &mut upper[0];
    let room = story.room_at(story.geometry().angle_from_center(dude.position()));
    dude.set_story(Some(above));
    dude.set_room(Some(room));
    tracing::debug!(dude = %dude.id(), story = %above, "climbed");
    activities.extend(fire(dude, story, room, top_story, catalog, Event::EnterRoom, env));
}

/// Raises a room event at a dude standing in `room` of `story`. A death
/// also drops the enemy the dude was fighting.
fn fire(
    dude: &mut Dude,
    story: &mut Story,
    room: RoomId,
    top_story: bool,
    catalog: &EquipmentCatalog,
    event: Event,
    env: &mut Env<'_>,
) -> Option<Activity> {
    let room = story
        .room_mut(room)
        .expect("dude's room must exist on its story");
    let mut active = ActiveRoom {
        room,
        catalog,
        top_story,
    };
    let activity = dude.trigger(&event, &mut active, env)?;
    if let Some(enemy) = dude.disengage() {
        active.room.remove_enemy(enemy);
    }
    Some(activity)
}
