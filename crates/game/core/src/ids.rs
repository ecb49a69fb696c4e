//! Typed handles for dudes and the containers they point into.
//!
//! A dude never owns the room, story or enemy it refers to. It stores one of
//! these handles and the driver resolves it against its own arenas.

use std::fmt;

/// Unique identifier of a dude on the roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DudeId(pub u32);

impl fmt::Display for DudeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dude#{}", self.0)
    }
}

/// Slot of an enemy inside the arena of the room that spawned it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

impl EnemyId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a room within its story's ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomId(pub u32);

impl RoomId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Story (floor) of the tower, 0 being the ground floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoryId(pub u32);

impl StoryId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The story directly above this one.
    #[inline]
    pub const fn above(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "story {}", self.0)
    }
}
