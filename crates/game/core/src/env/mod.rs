//! Traits and types describing the world outside a single dude.
//!
//! A dude never reaches into global state. Everything it may read or write
//! during an operation is handed in explicitly: the RNG, the feedback
//! sinks, the rules, and (for room events) the current room.

mod geometry;
mod requests;
mod rng;
mod room;
mod sink;

pub use geometry::{Point, StoryGeometry, normalize_angle};
pub use requests::{Activity, ActivityRequest, ActivityRequests, MoveHook, MoveRequest};
pub use rng::{PcgRng, RngOracle, derive_seed};
pub use room::RoomOracle;
pub use sink::{FloatingText, FloatingTextSink, Message, MessageKind, MessageSink, Rgba};

use crate::config::GameConfig;

/// Per-call bundle of collaborators.
pub struct Env<'a> {
    config: &'a GameConfig,
    rng: &'a mut dyn RngOracle,
    messages: &'a mut dyn MessageSink,
    texts: &'a mut dyn FloatingTextSink,
}

impl<'a> Env<'a> {
    pub fn new(
        config: &'a GameConfig,
        rng: &'a mut dyn RngOracle,
        messages: &'a mut dyn MessageSink,
        texts: &'a mut dyn FloatingTextSink,
    ) -> Self {
        Self {
            config,
            rng,
            messages,
            texts,
        }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&mut self) -> &mut dyn RngOracle {
        &mut *self.rng
    }

    pub fn message(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.messages.push_message(kind, text.into());
    }

    pub fn float_text(&mut self, text: FloatingText) {
        self.texts.push_text(text);
    }
}
