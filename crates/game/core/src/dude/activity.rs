//! Per-tick movement state machine.
//!
//! Each tick the driver calls [`Dude::update`] once. The dude never moves
//! itself: it computes the next target and queues a [`MoveRequest`], and
//! the driver reports back through [`Dude::complete_move`].

use crate::config::GameConfig;
use crate::env::{ActivityRequest, ActivityRequests, MoveHook, MoveRequest, Point, StoryGeometry};

use super::Dude;

/// State-machine tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DudeActivity {
    #[default]
    Idle,
    /// Dropping in and walking toward the ring.
    FirstEntering,
    StairsToUp,
    StairsFromDown,
    GoingUp,
    /// Walking outward onto the ring.
    Centering,
    /// Orbiting the ring counter-clockwise.
    Moving,
    Leaving,
    GoingDown,
    EnterPortal,
    Ded,
    BornAgain,
    Waiting,
    FightBoss,
}

impl Dude {
    /// Advances the state machine by one tick.
    pub fn update(
        &mut self,
        geometry: &dyn StoryGeometry,
        config: &GameConfig,
        requests: &mut ActivityRequests,
    ) {
        match self.activity {
            DudeActivity::Idle
            | DudeActivity::Ded
            | DudeActivity::Leaving
            | DudeActivity::GoingDown
            | DudeActivity::Waiting
            | DudeActivity::FightBoss => {}
            DudeActivity::BornAgain => self.set_activity(DudeActivity::Moving),
            DudeActivity::FirstEntering => self.step_first_entering(geometry, config, requests),
            DudeActivity::StairsToUp => self.step_stairs_to_up(geometry, config, requests),
            DudeActivity::StairsFromDown => self.step_stairs_from_down(geometry, config, requests),
            DudeActivity::GoingUp => self.step_going_up(geometry, config, requests),
            DudeActivity::Centering => self.step_centering(geometry, config, requests),
            DudeActivity::Moving => self.step_moving(geometry, config, requests),
            DudeActivity::EnterPortal => self.step_enter_portal(geometry, config, requests),
        }
    }

    /// Angle of the current position, nudged by the per-dude jitter.
    fn jittered_angle(&self, geometry: &dyn StoryGeometry) -> f64 {
        geometry.angle_from_center(self.position) + self.variation / 5000.0
    }

    fn ring_radius(&self, config: &GameConfig) -> f64 {
        config.movement.room_path + self.variation
    }

    fn request_move(
        &mut self,
        target: Point,
        face_override: Option<f64>,
        hook: MoveHook,
        requests: &mut ActivityRequests,
    ) {
        let face = self.position.heading_to(target);
        self.true_rotation = face;
        requests.add(ActivityRequest::Move(MoveRequest {
            dude: self.id,
            target,
            face: face_override.unwrap_or(face),
            hook,
        }));
    }

    fn step_first_entering(
        &mut self,
        geometry: &dyn StoryGeometry,
        config: &GameConfig,
        requests: &mut ActivityRequests,
    ) {
        let distance = geometry.distance_from_center(self.position);
        if distance < config.movement.entry_threshold + self.variation {
            self.set_activity(DudeActivity::Centering);
            self.pose.height_offset = 0.0;
            return;
        }
        let angle = self.jittered_angle(geometry);
        let step = self.speed(&config.movement) * 100.0;
        let target = geometry.position_from_center(angle, distance - step);
        self.request_move(target, None, MoveHook::Descend, requests);
    }

    fn step_stairs_to_up(
        &mut self,
        geometry: &dyn StoryGeometry,
        config: &GameConfig,
        requests: &mut ActivityRequests,
    ) {
        self.timer += 1;
        if self.timer < config.movement.stairs_climb_ticks {
            let angle = self.jittered_angle(geometry);
            let target = geometry.position_from_center(angle - 0.005, self.ring_radius(config));
            self.pose.vgroup_offset = self.timer / 2;
            self.request_move(target, None, MoveHook::SyncOnSuccess, requests);
        } else {
            requests.add(ActivityRequest::EnterNextStory { dude: self.id });
            self.pose.vgroup_offset = 0;
            self.set_activity(DudeActivity::StairsFromDown);
        }
    }

    fn step_stairs_from_down(
        &mut self,
        geometry: &dyn StoryGeometry,
        config: &GameConfig,
        requests: &mut ActivityRequests,
    ) {
        self.timer += 1;
        if self.pose.slice_offset == 0 {
            self.pose.slice_offset = self.pose.slice_count;
            self.pose.max_slice_index = 1;
        }
        let angle = self.jittered_angle(geometry);
        let target = geometry.position_from_center(angle - 0.01, self.ring_radius(config));
        self.request_move(target, None, MoveHook::Sync, requests);

        if self.timer >= config.movement.slice_step_ticks {
            self.pose.slice_offset -= 1;
            self.pose.max_slice_index += 1;
            self.timer = 0;
        }
        if self.pose.slice_offset <= 0 {
            self.pose.slice_offset = 0;
            self.pose.max_slice_index = 0;
            self.set_activity(DudeActivity::Moving);
        }
    }

    fn step_going_up(
        &mut self,
        geometry: &dyn StoryGeometry,
        config: &GameConfig,
        requests: &mut ActivityRequests,
    ) {
        self.timer += 1;
        if self.pose.slice_offset == 0 {
            self.pose.slice_offset = self.pose.slice_count;
            self.pose.max_slice_index = 1;
            let distance = geometry.distance_from_center(self.position);
            let angle = geometry.angle_from_center(self.position);
            let step = self.speed(&config.movement) * 100.0;
            let target = geometry.position_from_center(angle, distance + step);
            self.request_move(target, None, MoveHook::Sync, requests);
        }
        if self.timer >= config.movement.reveal_step_ticks {
            self.pose.slice_offset -= 1;
            self.pose.max_slice_index += 1;
            self.timer = 0;
        }
        if self.pose.slice_offset <= 0 {
            self.pose.slice_offset = 0;
            self.pose.max_slice_index = 0;
            self.set_activity(DudeActivity::Centering);
        }
    }

    fn step_centering(
        &mut self,
        geometry: &dyn StoryGeometry,
        config: &GameConfig,
        requests: &mut ActivityRequests,
    ) {
        let distance = geometry.distance_from_center(self.position);
        if distance >= self.ring_radius(config) {
            self.set_activity(DudeActivity::Moving);
            return;
        }
        let angle = self.jittered_angle(geometry);
        let step = self.speed(&config.movement) * 100.0;
        let target = geometry.position_from_center(angle, distance + step);
        self.request_move(target, None, MoveHook::SyncOnSuccess, requests);
    }

    fn step_moving(
        &mut self,
        geometry: &dyn StoryGeometry,
        config: &GameConfig,
        requests: &mut ActivityRequests,
    ) {
        let angle = self.jittered_angle(geometry) - self.speed(&config.movement);
        let target = geometry.position_from_center(angle, self.ring_radius(config));

        // Engaged dudes face inward, toward the enemy.
        let face = self.enemy.map(|_| {
            let inward = geometry.position_from_center(angle, self.variation);
            self.position.heading_to(inward)
        });
        self.request_move(target, face, MoveHook::SyncOnSuccess, requests);
    }

    fn step_enter_portal(
        &mut self,
        geometry: &dyn StoryGeometry,
        config: &GameConfig,
        requests: &mut ActivityRequests,
    ) {
        let rules = &config.movement;
        self.timer += 1;
        if self.timer < rules.portal_delay_ticks {
            return;
        }

        let faded = (self.timer - rules.portal_delay_ticks) as f32;
        self.pose.transparency = (faded / rules.portal_fade_ticks.max(1) as f32).min(1.0);

        let distance = geometry.distance_from_center(self.position);
        if distance < rules.portal_distance - 4.0 + self.variation {
            self.pose.transparency = 1.0;
            self.set_activity(DudeActivity::Idle);
            if !self.is_dead() {
                requests.add(ActivityRequest::LeaveTower { dude: self.id });
            }
            return;
        }
        let angle = geometry.angle_from_center(self.position);
        let target = geometry.position_from_center(angle, distance - rules.portal_step);
        self.request_move(target, None, MoveHook::Sync, requests);
    }
}
