//! A ring of rooms at one height of the tower.

use std::f64::consts::TAU;

use tower_core::{Point, RngOracle, RoomId, StoryGeometry, StoryId, normalize_angle};

use crate::geometry::RingGeometry;
use crate::room::{Room, RoomKind};

/// Relative odds of each kind for generated rooms past the fixed ones.
const ROOM_WEIGHTS: [(RoomKind, u32); 6] = [
    (RoomKind::Combat, 6),
    (RoomKind::Trap, 2),
    (RoomKind::Curse, 1),
    (RoomKind::Heal, 1),
    (RoomKind::Treasure, 1),
    (RoomKind::Empty, 1),
];

#[derive(Clone, Debug)]
pub struct Story {
    level: StoryId,
    rooms: Vec<Room>,
    geometry: RingGeometry,
}

impl Story {
    /// Builds a story from explicit rooms. Room `i` spans the arc starting
    /// at `i * TAU / n`.
    pub fn new(level: StoryId, rooms: Vec<Room>, geometry: RingGeometry) -> Self {
        Self {
            level,
            rooms,
            geometry,
        }
    }

    /// Random story layout.
    ///
    /// Dudes walk toward decreasing angles, so after arriving in room 0
    /// (always empty) they visit room 1 last. Room 1 holds the stairs.
    pub fn generate(level: StoryId, room_count: usize, rng: &mut dyn RngOracle) -> Self {
        let room_level = level.index() as i32 + 1;
        let total: u32 = ROOM_WEIGHTS.iter().map(|(_, weight)| weight).sum();

        let rooms = (0..room_count)
            .map(|index| {
                let kind = match index {
                    0 => RoomKind::Empty,
                    1 => RoomKind::Stairs,
                    _ => {
                        let mut pick = rng.below(total);
                        ROOM_WEIGHTS
                            .iter()
                            .find(|(_, weight)| {
                                let hit = pick < *weight;
                                pick = pick.saturating_sub(*weight);
                                hit
                            })
                            .map_or(RoomKind::Empty, |(kind, _)| *kind)
                    }
                };
                Room::new(kind, room_level)
            })
            .collect();

        Self::new(level, rooms, RingGeometry::default())
    }

    pub fn level(&self) -> StoryId {
        self.level
    }

    pub fn geometry(&self) -> &RingGeometry {
        &self.geometry
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.index())
    }

    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id.index())
    }

    /// Angular width of every room.
    pub fn arc(&self) -> f64 {
        TAU / self.rooms.len().max(1) as f64
    }

    /// Room covering `angle`.
    pub fn room_at(&self, angle: f64) -> RoomId {
        let index = (normalize_angle(angle) / self.arc()) as usize;
        RoomId(index.min(self.rooms.len().saturating_sub(1)) as u32)
    }

    /// Angle of a room's middle.
    pub fn room_center(&self, id: RoomId) -> f64 {
        (id.index() as f64 + 0.5) * self.arc()
    }

    /// Whether a step from `before` down to `after` passed the middle of
    /// `room`.
    pub fn crossed_center(&self, room: RoomId, before: f64, after: f64) -> bool {
        let center = self.room_center(room);
        before > center && after <= center && before - after < self.arc()
    }

    /// Where a dude appears when sent into this story.
    pub fn entrance(&self, distance: f64, offset: f64) -> Point {
        self.geometry
            .position_from_center(self.room_center(RoomId(0)) + offset, distance)
    }

    pub fn reset(&mut self) {
        for room in &mut self.rooms {
            room.reset();
        }
    }
}
