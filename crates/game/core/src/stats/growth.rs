use super::Stats;

/// Per-level attribute gains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelCurve {
    pub hp: i32,
    pub strength: i32,
    pub wisdom: i32,
    pub defense: i32,
    pub agility: i32,
    pub confidence: i32,
    pub luck: i32,
}

impl LevelCurve {
    pub const STANDARD: Self = Self {
        hp: 3,
        strength: 1,
        wisdom: 1,
        defense: 1,
        agility: 1,
        confidence: 1,
        luck: 1,
    };

    pub const BOSS: Self = Self {
        hp: 6,
        luck: 2,
        ..Self::STANDARD
    };

    pub fn apply(&self, stats: &mut Stats) {
        stats.level += 1;
        stats.total_hp += self.hp;
        stats.current_hp += self.hp;
        stats.strength += self.strength;
        stats.wisdom += self.wisdom;
        stats.defense += self.defense;
        stats.agility += self.agility;
        stats.confidence += self.confidence;
        stats.luck += self.luck;
    }

    pub fn revert(&self, stats: &mut Stats) {
        stats.level = (stats.level - 1).max(1);
        stats.total_hp = (stats.total_hp - self.hp).max(1);
        // A living block keeps 1 hp, a dead one stays dead.
        let floor = stats.current_hp.clamp(0, 1);
        stats.current_hp = (stats.current_hp - self.hp).clamp(floor, stats.total_hp);
        stats.strength = (stats.strength - self.strength).max(0);
        stats.wisdom = (stats.wisdom - self.wisdom).max(0);
        stats.defense = (stats.defense - self.defense).max(0);
        stats.agility = (stats.agility - self.agility).max(0);
        stats.confidence = (stats.confidence - self.confidence).max(0);
        stats.luck = (stats.luck - self.luck).max(0);
    }
}
