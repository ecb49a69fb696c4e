use crate::event::Event;

use super::{Perk, PerkOutcome, PerkQuality};

/// Display names of every perk, in catalog order.
pub const PERK_NAMES: [&str; 4] = ["Heal On Room Enter", "Prospector", "Bloodlust", "Nimble"];

/// Heals the owner whenever they walk into a room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealOnRoomEnter {
    quality: PerkQuality,
}

impl HealOnRoomEnter {
    pub fn new(quality: PerkQuality) -> Self {
        Self { quality }
    }
}

impl Perk for HealOnRoomEnter {
    fn check(&self, event: &Event) -> Option<PerkOutcome> {
        match event {
            Event::EnterRoom => Some(PerkOutcome::Heal(1 + self.quality.index())),
            _ => None,
        }
    }

    fn level_up(&mut self, max_quality: PerkQuality) -> bool {
        self.quality.raise(max_quality)
    }

    fn level_down(&mut self) -> bool {
        self.quality.lower()
    }

    fn name(&self) -> &'static str {
        PERK_NAMES[0]
    }

    fn quality(&self) -> PerkQuality {
        self.quality
    }
}

/// Adds a share of every gold gain on top.
///
/// # Formula
///
/// ```text
/// bonus = max(1, amount * (quality + 1) / 10)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prospector {
    quality: PerkQuality,
}

impl Prospector {
    pub fn new(quality: PerkQuality) -> Self {
        Self { quality }
    }
}

impl Perk for Prospector {
    fn check(&self, event: &Event) -> Option<PerkOutcome> {
        match event {
            Event::GoldGain { amount } if *amount > 0 => {
                let bonus = (amount * (self.quality.index() + 1) / 10).max(1);
                Some(PerkOutcome::Gold(bonus))
            }
            _ => None,
        }
    }

    fn level_up(&mut self, max_quality: PerkQuality) -> bool {
        self.quality.raise(max_quality)
    }

    fn level_down(&mut self) -> bool {
        self.quality.lower()
    }

    fn name(&self) -> &'static str {
        PERK_NAMES[1]
    }

    fn quality(&self) -> PerkQuality {
        self.quality
    }
}

/// Heals the owner on a critical hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bloodlust {
    quality: PerkQuality,
}

impl Bloodlust {
    pub fn new(quality: PerkQuality) -> Self {
        Self { quality }
    }
}

impl Perk for Bloodlust {
    fn check(&self, event: &Event) -> Option<PerkOutcome> {
        match event {
            Event::DudeCrit { .. } => Some(PerkOutcome::Heal(1 + self.quality.index())),
            _ => None,
        }
    }

    fn level_up(&mut self, max_quality: PerkQuality) -> bool {
        self.quality.raise(max_quality)
    }

    fn level_down(&mut self) -> bool {
        self.quality.lower()
    }

    fn name(&self) -> &'static str {
        PERK_NAMES[2]
    }

    fn quality(&self) -> PerkQuality {
        self.quality
    }
}

/// Grants experience for every dodged attack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nimble {
    quality: PerkQuality,
}

impl Nimble {
    pub fn new(quality: PerkQuality) -> Self {
        Self { quality }
    }
}

impl Perk for Nimble {
    fn check(&self, event: &Event) -> Option<PerkOutcome> {
        match event {
            Event::DudeDodge { .. } => Some(PerkOutcome::Xp(self.quality.index() + 1)),
            _ => None,
        }
    }

    fn level_up(&mut self, max_quality: PerkQuality) -> bool {
        self.quality.raise(max_quality)
    }

    fn level_down(&mut self) -> bool {
        self.quality.lower()
    }

    fn name(&self) -> &'static str {
        PERK_NAMES[3]
    }

    fn quality(&self) -> PerkQuality {
        self.quality
    }
}
