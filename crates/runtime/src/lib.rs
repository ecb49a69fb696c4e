//! Reference driver for the tower.
//!
//! This crate owns what `tower-core` only borrows: the stories and their
//! rooms, the roster, the rng and the feedback buffers. It ticks every dude,
//! resolves the requests they queue and turns their movement into room
//! events.
//!
//! Modules are organized by responsibility:
//! - [`simulation`] runs a seeded roster through a generated tower
//! - [`tower`] ticks dudes and raises room events
//! - [`story`] and [`room`] hold the ring layout and room effects
//! - [`feed`] buffers the player-facing messages and floating texts
//! - [`config`] reads run settings from the environment
pub mod config;
pub mod error;
pub mod feed;
pub mod geometry;
pub mod room;
pub mod simulation;
pub mod story;
pub mod tower;

pub use config::SimConfig;
pub use error::{Result, RuntimeError};
pub use feed::{FloatingTextBuffer, MessageLog};
pub use geometry::RingGeometry;
pub use room::{ActiveRoom, Room, RoomKind};
pub use simulation::{Outcome, RunSummary, Simulation};
pub use story::Story;
pub use tower::{MIN_ROOMS, Tower};
