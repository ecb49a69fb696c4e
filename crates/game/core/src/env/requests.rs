//! Data-only requests from a dude to its driver, and the follow-on signals
//! the driver must observe.

use crate::env::Point;
use crate::ids::DudeId;

/// Post-move hook the driver reports back through
/// [`Dude::complete_move`](crate::dude::Dude::complete_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveHook {
    /// Re-sync the pose whatever the outcome.
    Sync,
    /// Re-sync the pose only when the move went through.
    SyncOnSuccess,
    /// Lower the entry height offset, then re-sync.
    Descend,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRequest {
    pub dude: DudeId,
    pub target: Point,
    /// Facing to adopt once the move lands.
    pub face: f64,
    pub hook: MoveHook,
}

/// Request queued during a dude's update.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityRequest {
    Move(MoveRequest),
    /// Climb to the next story (or into the portal on the top floor).
    EnterNextStory { dude: DudeId },
    /// The dude walked out through the portal alive.
    LeaveTower { dude: DudeId },
}

impl ActivityRequest {
    pub fn dude(&self) -> DudeId {
        match self {
            ActivityRequest::Move(request) => request.dude,
            ActivityRequest::EnterNextStory { dude } | ActivityRequest::LeaveTower { dude } => {
                *dude
            }
        }
    }
}

/// Ordered queue of pending requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityRequests {
    pending: Vec<ActivityRequest>,
}

impl ActivityRequests {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, request: ActivityRequest) {
        self.pending.push(request);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityRequest> {
        self.pending.iter()
    }

    /// Removes and yields every request in submission order.
    pub fn drain(&mut self) -> impl Iterator<Item = ActivityRequest> + '_ {
        self.pending.drain(..)
    }
}

/// Follow-on signal returned by event handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activity {
    /// The dude died and must leave the active roster.
    DudeDied { dude: DudeId },
}
