//! Curse and trap resolution.

use crate::config::GameConfig;
use crate::env::{Activity, Env, MessageKind, Rgba};
use crate::equipment::EquipmentKind;
use crate::event::Event;

use super::{Dirty, Dude, DudeActivity};

/// What a curse did to a dude. Effects are nested: each one implies every
/// effect listed before it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurseReport {
    pub cursed: bool,
    pub gold_lost: i32,
    pub equipment_deleveled: Option<String>,
    pub perk_deleveled: Option<String>,
    pub dude_deleveled: bool,
}

impl CurseReport {
    pub const SPARED: CurseReport = CurseReport {
        cursed: false,
        gold_lost: 0,
        equipment_deleveled: None,
        perk_deleveled: None,
        dude_deleveled: false,
    };
}

/// `1 - log10(roll + 1)`: the higher the roll, the smaller the threshold.
fn roll_threshold(roll: u32) -> f64 {
    1.0 - (f64::from(roll) + 1.0).log10()
}

impl Dude {
    /// Rolls a curse scaled by `room_level`.
    ///
    /// Wisdom and luck each roll in `1..=stat` and the higher roll sets the
    /// threshold. A single draw under the threshold curses the dude; the same
    /// draw is then compared against 0.75, 0.5, 0.25 and 0.1 of the threshold
    /// for gold loss, equipment delevel, perk delevel and dude delevel.
    pub fn cursify(&mut self, room_level: i32, env: &mut Env<'_>) -> CurseReport {
        let stats = self.calculated_stats();
        let wisdom = stats.wisdom.max(1) as u32;
        let luck = stats.luck.max(1) as u32;

        let wisdom_roll = env.rng().below(wisdom) + 1;
        let luck_roll = env.rng().below(luck) + 1;
        let threshold = roll_threshold(wisdom_roll.max(luck_roll));

        let curse_roll = env.rng().next_f64();
        if curse_roll > threshold {
            tracing::debug!(dude = %self.id, curse_roll, threshold, "curse spared");
            return CurseReport::SPARED;
        }

        let mut report = CurseReport {
            cursed: true,
            ..CurseReport::default()
        };

        if curse_roll <= threshold * 0.75 {
            let amount = room_level.max(0) * GameConfig::CURSE_GOLD_PER_LEVEL;
            self.notify(&Event::GoldLoss { amount }, env);
            env.message(MessageKind::Bad, format!("{} lost {}gp", self.name, amount));
            report.gold_lost = amount;
        }

        if curse_roll <= threshold * 0.5 {
            let slot = env.rng().below(EquipmentKind::ALL.len() as u32) as usize;
            if let Some(item) = self.equipped.get_mut(EquipmentKind::ALL[slot]) {
                item.level_down();
                let label = item.display_name();
                self.float_text(env, format!("-eq level {label}"), Rgba::CURSE, 50, 0.5);
                env.message(
                    MessageKind::Bad,
                    format!("{} lost a level on {}", self.name, label),
                );
                report.equipment_deleveled = Some(label);
            }
            self.dirty |= Dirty::EQUIPMENT | Dirty::STATS;
        }

        if curse_roll <= threshold * 0.25 {
            let with_perks: Vec<EquipmentKind> = self
                .equipped
                .iter()
                .filter(|item| item.perk().is_some())
                .map(|item| item.kind())
                .collect();
            if !with_perks.is_empty() {
                let pick = env.rng().below(with_perks.len() as u32) as usize;
                if let Some(item) = self.equipped.get_mut(with_perks[pick]) {
                    if let Some(perk) = item.perk_mut() {
                        perk.level_down();
                    }
                    let label = item.display_name();
                    self.float_text(env, format!("-eq perk {label}"), Rgba::CURSE, 50, 0.5);
                    env.message(
                        MessageKind::Bad,
                        format!("{} lost a perk level on {}", self.name, label),
                    );
                    report.perk_deleveled = Some(label);
                }
            }
            self.dirty |= Dirty::EQUIPMENT | Dirty::STATS;
        }

        if curse_roll <= threshold * 0.1 {
            self.stats.level_down();
            self.float_text(env, "-level", Rgba::LEVEL_DOWN, 50, 0.5);
            env.message(
                MessageKind::Bad,
                format!(
                    "{} lost a level and is now level {}",
                    self.name,
                    self.level()
                ),
            );
            report.dude_deleveled = true;
            self.dirty |= Dirty::STATS;
        }

        tracing::debug!(dude = %self.id, ?report, "cursed");
        report
    }

    /// Springs a trap scaled by `room_level`.
    ///
    /// Base agility rolls in `0..=agility` to set the threshold; a draw over
    /// it avoids the trap. Otherwise `(room_level + 1) * 3` damage goes
    /// through the normal dodge and defense rules.
    pub fn trap_damage(&mut self, room_level: i32, env: &mut Env<'_>) -> Option<Activity> {
        if self.is_dead() {
            self.set_activity(DudeActivity::Ded);
            return Some(Activity::DudeDied { dude: self.id });
        }

        let agility = self.stats.agility.max(0) as u32;
        let threshold = roll_threshold(env.rng().below(agility + 1));
        if env.rng().next_f64() > threshold {
            env.message(
                MessageKind::Neutral,
                format!("{} dodged damage from a trap", self.name),
            );
            return None;
        }

        let damage = (room_level + 1) * 3;
        let taken = self.apply_damage(damage, env);
        if !taken.dodged && !self.is_dead() {
            env.message(
                MessageKind::Neutral,
                format!("{} took {} damage from a trap", self.name, taken.amount),
            );
        }

        if self.is_dead() {
            return Some(Activity::DudeDied { dude: self.id });
        }
        None
    }
}
