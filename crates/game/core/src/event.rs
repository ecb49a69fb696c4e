//! Typed events raised at a dude.
//!
//! Events flow through every equipped perk first and then into the dude's
//! own handler. Payloads carry names and amounts only; they never borrow the
//! dude or the enemy they describe.

/// Something that happened to (or was done by) a dude.
#[derive(Clone, Debug, PartialEq, Eq, strum::EnumDiscriminants)]
#[strum_discriminants(name(EventKind), derive(Hash, strum::Display))]
pub enum Event {
    /// Raised every tick while the dude is inside a combat or trap room.
    CombatRoom,
    EnterRoom,
    /// Raised once per visit when the dude crosses the room's center line.
    CenterRoom,
    LeaveRoom,
    Equip { equipment: String },
    Unequip { equipment: String },
    GoldGain { amount: i32 },
    GoldLoss { amount: i32 },
    DudeHit { amount: i32 },
    DudeMiss { enemy: String },
    DudeCrit { enemy: String, amount: i32 },
    DudeDodge { enemy: String },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        EventKind::from(self)
    }
}
