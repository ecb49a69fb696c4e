use std::fmt;

use crate::config::GameConfig;
use crate::event::Event;
use crate::perk::{Perk, PerkOutcome};
use crate::profession::ProfessionKind;
use crate::stats::Stats;

use super::{EquipmentKind, Quality};

/// A single piece of gear.
///
/// Levels run from 0 to 4 within a quality tier. Crossing the top promotes
/// the item and crossing the bottom demotes it; quality itself is clamped
/// to `[Common, Legendary]`, and beyond either end the item trades uses
/// instead.
#[derive(Debug)]
pub struct Equipment {
    name: String,
    description: String,
    kind: EquipmentKind,
    level: i32,
    quality: Quality,
    uses: i32,
    total_uses: i32,
    perk: Option<Box<dyn Perk>>,
    base_stats: Stats,
    professions: Vec<ProfessionKind>,
}

impl Equipment {
    /// Creates a Common, level 0 item with full uses.
    pub fn new(name: impl Into<String>, kind: EquipmentKind, base_stats: Stats) -> Self {
        let quality = Quality::Common;
        Self {
            name: name.into(),
            description: String::new(),
            kind,
            level: 0,
            quality,
            uses: quality.total_uses(),
            total_uses: quality.total_uses(),
            perk: None,
            base_stats,
            professions: Vec::new(),
        }
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets the tier and refills uses to that tier's ceiling.
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self.total_uses = quality.total_uses();
        self.uses = self.total_uses;
        self
    }

    pub fn with_perk(mut self, perk: Box<dyn Perk>) -> Self {
        self.perk = Some(perk);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_professions(mut self, professions: Vec<ProfessionKind>) -> Self {
        self.professions = professions;
        self
    }

    /// Base name without the quality suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with the quality suffix, e.g. `Sword (Rare)`.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.quality)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> EquipmentKind {
        self.kind
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn uses(&self) -> i32 {
        self.uses
    }

    pub fn total_uses(&self) -> i32 {
        self.total_uses
    }

    pub fn perk(&self) -> Option<&dyn Perk> {
        self.perk.as_deref()
    }

    pub fn perk_mut(&mut self) -> Option<&mut (dyn Perk + 'static)> {
        self.perk.as_deref_mut()
    }

    /// Attaches a perk, returning the one it replaces.
    pub fn set_perk(&mut self, perk: Box<dyn Perk>) -> Option<Box<dyn Perk>> {
        self.perk.replace(perk)
    }

    pub fn professions(&self) -> &[ProfessionKind] {
        &self.professions
    }

    /// An empty profession list means anyone may wear the item.
    pub fn allows(&self, profession: ProfessionKind) -> bool {
        self.professions.is_empty() || self.professions.contains(&profession)
    }

    /// Composite rank used when comparing two items for the same slot.
    pub fn level_with_quality(&self) -> i32 {
        self.quality.index() * GameConfig::EQUIPMENT_LEVEL_CAP + self.level
    }

    /// Shifts quality by `delta` tiers.
    ///
    /// Steps are applied one at a time. Below Common a step consumes a use,
    /// above Legendary it restores one.
    pub fn change_quality(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }
        if delta.abs() > 1 {
            for _ in 0..delta.abs() {
                self.change_quality(delta.signum());
            }
            return;
        }

        let target = if delta > 0 {
            self.quality.next()
        } else {
            self.quality.prev()
        };
        match target {
            Some(quality) => {
                self.quality = quality;
                self.total_uses += delta;
                self.uses = (self.uses + delta).clamp(0, self.total_uses);
            }
            None if delta > 0 => self.uses = (self.uses + 1).min(self.total_uses),
            None => self.uses = (self.uses - 1).max(0),
        }
    }

    /// Levels up with no quality ceiling.
    pub fn level_up(&mut self) -> bool {
        self.level_up_capped(Quality::Legendary)
    }

    /// Levels up, promoting quality on reaching the level cap.
    ///
    /// A promotion beyond `max_quality` is refused and the level is left as
    /// is. Legendary items keep climbing past the cap and get a use back
    /// when they cross it. Returns whether anything changed.
    pub fn level_up_capped(&mut self, max_quality: Quality) -> bool {
        let next = self.level + 1;
        if next < GameConfig::EQUIPMENT_LEVEL_CAP {
            self.level = next;
            return true;
        }

        if self.quality == Quality::Legendary {
            if next == GameConfig::EQUIPMENT_LEVEL_CAP {
                self.change_quality(1);
            }
            self.level = next;
            return true;
        }
        if self.quality >= max_quality {
            return false;
        }

        self.change_quality(1);
        self.level = 0;
        true
    }

    /// Levels down, demoting quality below level 0.
    ///
    /// At Common the level clamps to 0 and a use is consumed instead.
    pub fn level_down(&mut self) -> bool {
        if self.level > 0 {
            self.level -= 1;
            return true;
        }

        if self.quality > Quality::Common {
            self.change_quality(-1);
            self.level = GameConfig::EQUIPMENT_DEMOTED_LEVEL;
            return true;
        }

        let before = (self.level, self.uses);
        self.level = 0;
        self.change_quality(-1);
        before != (self.level, self.uses)
    }

    /// Refills uses to the tier ceiling. Returns whether anything changed.
    pub fn restore_uses(&mut self) -> bool {
        if self.uses >= self.total_uses {
            return false;
        }
        self.uses = self.total_uses;
        true
    }

    /// Offers `event` to the perk. A reaction consumes one use.
    pub fn activate(&mut self, event: &Event) -> Option<PerkOutcome> {
        if self.uses <= 0 {
            return None;
        }
        let outcome = self.perk.as_ref()?.check(event)?;
        self.uses = (self.uses - 1).max(0);
        Some(outcome)
    }

    /// Contribution to the wearer's stats.
    ///
    /// # Formula
    ///
    /// ```text
    /// m = (1 + 0.15 * quality) * (1 + 0.02 * level)
    /// stat = floor(base * m)
    /// ```
    pub fn stats(&self) -> Stats {
        let multiplier =
            (1.0 + 0.15 * f64::from(self.quality.index())) * (1.0 + 0.02 * f64::from(self.level));
        let scale = |value: i32| (f64::from(value) * multiplier).floor() as i32;
        let base = &self.base_stats;
        Stats {
            level: 0,
            total_hp: scale(base.total_hp),
            current_hp: 0,
            strength: scale(base.strength),
            wisdom: scale(base.wisdom),
            defense: scale(base.defense),
            agility: scale(base.agility),
            confidence: scale(base.confidence),
            luck: scale(base.luck),
        }
    }

    pub fn base_stats(&self) -> &Stats {
        &self.base_stats
    }

    /// Sale value.
    pub fn gold_value(&self) -> i32 {
        self.level * (1 + self.quality.index())
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.quality)
    }
}
