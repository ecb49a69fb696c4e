//! Player-facing feedback channels.
//!
//! Messages go to the running feed; floating texts hover above a dude for a
//! few frames. Both are fire-and-forget.

use crate::env::Point;
use crate::ids::DudeId;

/// Category of a feed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    Neutral,
    Good,
    Bad,
    Loot,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

pub trait MessageSink {
    fn push_message(&mut self, kind: MessageKind, text: String);
}

impl MessageSink for Vec<Message> {
    fn push_message(&mut self, kind: MessageKind, text: String) {
        self.push(Message { kind, text });
    }
}

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const CRIT: Rgba = Rgba(255, 128, 255, 128);
    pub const MISS: Rgba = Rgba(128, 128, 128, 128);
    pub const DODGE: Rgba = Rgba(255, 255, 0, 128);
    pub const DAMAGE: Rgba = Rgba(255, 0, 0, 255);
    pub const DEATH: Rgba = Rgba(64, 64, 64, 255);
    pub const HEAL: Rgba = Rgba(0, 255, 0, 255);
    pub const GOLD: Rgba = Rgba(255, 255, 0, 255);
    pub const GOLD_LOSS: Rgba = Rgba(255, 255, 0, 200);
    pub const XP: Rgba = Rgba(100, 200, 200, 200);
    pub const LEVEL_UP: Rgba = Rgba(100, 255, 255, 255);
    pub const LEVEL_DOWN: Rgba = Rgba(100, 0, 0, 200);
    pub const EQUIP: Rgba = Rgba(100, 200, 200, 255);
    pub const UNEQUIP: Rgba = Rgba(200, 100, 100, 255);
    pub const LOOT: Rgba = Rgba(200, 200, 50, 128);
    pub const RESTORE: Rgba = Rgba(0, 128, 255, 200);
    pub const UPGRADE: Rgba = Rgba(128, 128, 255, 255);
    pub const PERK: Rgba = Rgba(128, 255, 128, 255);
    pub const CURSE: Rgba = Rgba(200, 200, 32, 200);
}

/// Transient label drifting up from a dude.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatingText {
    pub dude: DudeId,
    pub text: String,
    pub color: Rgba,
    /// Frames until the text disappears.
    pub lifetime: u32,
    pub speed: f64,
    pub origin: Point,
}

pub trait FloatingTextSink {
    fn push_text(&mut self, text: FloatingText);
}

impl FloatingTextSink for Vec<FloatingText> {
    fn push_text(&mut self, text: FloatingText) {
        self.push(text);
    }
}
