use crate::combat::{AttackRoll, DamageTaken, crit_chance, dodge_chance, miss_chance};
use crate::env::{Env, MessageKind, Rgba};

use super::{DudeActivity, Dude};

impl Dude {
    /// Rolls the dude's attack.
    ///
    /// One draw tests for a crit (double damage, +1 xp). Only when that
    /// fails does a second draw test for a miss (no damage).
    pub fn roll_attack(&mut self, env: &mut Env<'_>) -> AttackRoll {
        let stats = self.calculated_stats();
        let rules = &env.config().combat;

        let mut multiplier = 1;
        let mut crit = false;
        if env.rng().chance(crit_chance(stats.luck, rules)) {
            self.add_xp(1, env);
            self.float_text(env, "*CRIT*", Rgba::CRIT, 60, 1.0);
            multiplier = rules.crit_multiplier;
            crit = true;
        } else if env.rng().chance(miss_chance(stats.luck, rules)) {
            self.float_text(env, "*miss*", Rgba::MISS, 30, 0.5);
            multiplier = 0;
        }

        AttackRoll {
            damage: stats.strength.max(0) * multiplier,
            crit,
        }
    }

    /// Pushes `amount` raw damage into the dude through dodge and defense.
    ///
    /// A dead dude takes nothing. Hitting exactly zero hit points switches
    /// to [`DudeActivity::Ded`] unless the dude is invincible, in which case
    /// it is restored to full health instead.
    pub fn apply_damage(&mut self, amount: i32, env: &mut Env<'_>) -> DamageTaken {
        if self.is_dead() {
            return DamageTaken::NONE;
        }

        let stats = self.calculated_stats();
        let rules = &env.config().combat;
        if env
            .rng()
            .chance(dodge_chance(stats.luck, stats.agility, rules))
        {
            self.add_xp(1, env);
            self.float_text(env, "*dodge*", Rgba::DODGE, 30, 0.5);
            env.message(MessageKind::Neutral, format!("{} dodged an attack", self.name));
            return DamageTaken {
                amount: 0,
                dodged: true,
            };
        }

        let amount = stats.apply_defense(amount, rules);
        self.stats.current_hp -= amount;
        if self.stats.current_hp <= 0 {
            self.stats.current_hp = if self.invincible {
                self.stats.total_hp
            } else {
                0
            };
        }

        if self.stats.current_hp == 0 {
            self.set_activity(DudeActivity::Ded);
            self.float_text(env, "RIP", Rgba::DEATH, 80, 1.0);
            env.message(
                MessageKind::Bad,
                format!("{} took {} damage and was defeated", self.name, amount),
            );
            tracing::info!(dude = %self.id, name = %self.name, "dude died");
        } else {
            self.float_text(env, format!("{}", -amount), Rgba::DAMAGE, 40, 0.5);
        }
        self.dirty |= super::Dirty::STATS;

        DamageTaken {
            amount,
            dodged: false,
        }
    }

    /// Zero hit points or the `Ded` activity.
    pub fn is_dead(&self) -> bool {
        self.stats.current_hp <= 0 || self.activity == DudeActivity::Ded
    }
}
