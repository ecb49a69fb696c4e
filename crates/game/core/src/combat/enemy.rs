use crate::stats::Stats;

/// Opponent a dude can be engaged with.
pub trait Combatant {
    fn name(&self) -> &str;

    /// Applies damage. Returns whether the hit was lethal.
    fn damage(&mut self, amount: i32) -> bool;

    /// Raw damage of the next retaliation.
    fn hit(&mut self) -> i32;

    fn xp(&self) -> i32;

    fn gold(&self) -> i32;

    fn is_dead(&self) -> bool;
}

/// Standard room monster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    name: String,
    stats: Stats,
    xp: i32,
    gold: i32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, stats: Stats, xp: i32, gold: i32) -> Self {
        Self {
            name: name.into(),
            stats,
            xp,
            gold,
        }
    }

    /// Builds a monster whose strength, health and rewards grow with the
    /// room level.
    pub fn scaled(name: impl Into<String>, room_level: i32) -> Self {
        let level = room_level.max(0);
        let total_hp = 4 + level * 3;
        let stats = Stats {
            level: level + 1,
            total_hp,
            current_hp: total_hp,
            strength: 1 + level,
            defense: level / 2,
            ..Stats::default()
        };
        Self::new(name, stats, 5 + level * 5, 2 + level * 3)
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn damage(&mut self, amount: i32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.stats.current_hp = (self.stats.current_hp - amount.max(0)).max(0);
        self.is_dead()
    }

    fn hit(&mut self) -> i32 {
        self.stats.strength
    }

    fn xp(&self) -> i32 {
        self.xp
    }

    fn gold(&self) -> i32 {
        self.gold
    }

    fn is_dead(&self) -> bool {
        self.stats.current_hp <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lethal_hit_reports_kill_once() {
        let mut rat = Enemy::scaled("Rat", 0);
        assert!(!rat.damage(3));
        assert!(rat.damage(10));
        assert!(!rat.damage(10));
        assert!(rat.is_dead());
    }

    #[test]
    fn deeper_rooms_breed_tougher_enemies() {
        let shallow = Enemy::scaled("Rat", 0);
        let deep = Enemy::scaled("Rat", 4);
        assert!(deep.stats().total_hp > shallow.stats().total_hp);
        assert!(deep.xp() > shallow.xp());
        assert_eq!(shallow.clone().hit(), 1);
    }
}
