use std::ops::Add;

use crate::config::CombatRules;

use super::LevelCurve;

/// Attribute block.
///
/// `current_hp` is only meaningful for base stats; on item bonuses it is
/// ignored when summing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stats {
    pub level: i32,
    pub total_hp: i32,
    pub current_hp: i32,
    pub strength: i32,
    pub wisdom: i32,
    pub defense: i32,
    pub agility: i32,
    pub confidence: i32,
    pub luck: i32,
}

impl Stats {
    /// Builds a level 1 block at full health.
    pub const fn starting(
        total_hp: i32,
        strength: i32,
        wisdom: i32,
        defense: i32,
        agility: i32,
        confidence: i32,
        luck: i32,
    ) -> Self {
        Self {
            level: 1,
            total_hp,
            current_hp: total_hp,
            strength,
            wisdom,
            defense,
            agility,
            confidence,
            luck,
        }
    }

    /// Reduces incoming damage by defense.
    ///
    /// # Formula
    ///
    /// ```text
    /// reduced = max(min_damage, raw * k / (k + defense))   when raw > 0
    /// reduced = 0                                          otherwise
    /// ```
    pub fn apply_defense(&self, raw: i32, rules: &CombatRules) -> i32 {
        if raw <= 0 {
            return 0;
        }
        let k = i64::from(rules.defense_scale);
        let defense = i64::from(self.defense.max(0));
        let reduced = i64::from(raw) * k / (k + defense).max(1);
        (reduced as i32).max(rules.min_damage)
    }

    /// Advances one level along the standard curve.
    ///
    /// A boss reward doubles the hp and luck gains.
    pub fn level_up(&mut self, boss: bool) {
        let curve = if boss {
            LevelCurve::BOSS
        } else {
            LevelCurve::STANDARD
        };
        curve.apply(self);
    }

    /// Reverses one standard level, never dropping below the floors
    /// (level 1, 1 total hp, 0 for everything else).
    pub fn level_down(&mut self) {
        LevelCurve::STANDARD.revert(self);
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            level: self.level.saturating_add(rhs.level),
            total_hp: self.total_hp.saturating_add(rhs.total_hp),
            current_hp: self.current_hp.saturating_add(rhs.current_hp),
            strength: self.strength.saturating_add(rhs.strength),
            wisdom: self.wisdom.saturating_add(rhs.wisdom),
            defense: self.defense.saturating_add(rhs.defense),
            agility: self.agility.saturating_add(rhs.agility),
            confidence: self.confidence.saturating_add(rhs.confidence),
            luck: self.luck.saturating_add(rhs.luck),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defense_reduces_damage_hyperbolically() {
        let rules = CombatRules::default();
        let stats = Stats {
            defense: 20,
            ..Stats::default()
        };
        assert_eq!(stats.apply_defense(10, &rules), 5);
        assert_eq!(stats.apply_defense(1, &rules), 1);
        assert_eq!(stats.apply_defense(0, &rules), 0);
        assert_eq!(stats.apply_defense(-4, &rules), 0);
    }

    #[test]
    fn defense_result_stays_within_bounds() {
        let rules = CombatRules::default();
        for defense in [0, 1, 5, 20, 100, 10_000] {
            let stats = Stats {
                defense,
                ..Stats::default()
            };
            for raw in 1..200 {
                let reduced = stats.apply_defense(raw, &rules);
                assert!(reduced >= 1, "defense {defense} raw {raw}");
                assert!(reduced <= raw, "defense {defense} raw {raw}");
            }
        }
    }

    #[test]
    fn zero_defense_passes_damage_through() {
        let rules = CombatRules::default();
        assert_eq!(Stats::default().apply_defense(17, &rules), 17);
    }

    #[test]
    fn level_down_clamps_at_floors() {
        let mut stats = Stats::starting(2, 0, 1, 0, 0, 0, 0);
        stats.level_down();
        assert_eq!(stats.level, 1);
        assert_eq!(stats.total_hp, 1);
        assert_eq!(stats.current_hp, 1);
        assert_eq!(stats.wisdom, 0);
        assert_eq!(stats.strength, 0);
    }

    #[test]
    fn level_down_never_revives() {
        let mut stats = Stats::starting(20, 3, 3, 3, 3, 3, 3);
        stats.level_up(false);
        stats.current_hp = 0;
        stats.level_down();
        assert_eq!(stats.current_hp, 0);
        assert_eq!(stats.total_hp, 20);

        stats.current_hp = -4;
        stats.level_down();
        assert_eq!(stats.current_hp, 0);
    }

    #[test]
    fn boss_level_doubles_hp_and_luck() {
        let mut normal = Stats::starting(5, 1, 1, 1, 1, 1, 0);
        let mut boss = normal;
        normal.level_up(false);
        boss.level_up(true);
        assert_eq!(normal.total_hp, 8);
        assert_eq!(boss.total_hp, 11);
        assert_eq!(normal.luck, 1);
        assert_eq!(boss.luck, 2);
        assert_eq!(boss.strength, normal.strength);
        assert_eq!(boss.level, 2);
    }

    #[test]
    fn sum_has_zero_identity_and_commutes() {
        let blocks = [
            Stats::starting(7, 2, 1, 3, 1, 5, 0),
            Stats::starting(30, 9, 4, 12, 6, 2, 8),
            Stats {
                level: 0,
                total_hp: 4,
                current_hp: 0,
                strength: -2,
                wisdom: 0,
                defense: 11,
                agility: 1,
                confidence: -1,
                luck: 5,
            },
            Stats {
                strength: 14,
                agility: 4,
                luck: 1,
                ..Stats::default()
            },
        ];
        for a in blocks {
            assert_eq!(a + Stats::default(), a);
            assert_eq!(Stats::default() + a, a);
            for b in blocks {
                assert_eq!(a + b, b + a);
            }
        }
    }

    #[test]
    fn sum_adds_every_attribute() {
        let base = Stats::starting(7, 2, 1, 3, 1, 5, 0);
        let bonus = Stats {
            total_hp: 2,
            defense: 1,
            luck: 3,
            ..Stats::default()
        };
        let sum = base + bonus;
        assert_eq!(sum.total_hp, 9);
        assert_eq!(sum.defense, 4);
        assert_eq!(sum.luck, 3);
        assert_eq!(sum.strength, 2);
    }
}
