use crate::config::CombatRules;

/// Logistic curve centered on the luck midpoint.
///
/// # Formula
///
/// ```text
/// logistic(x, max) = max / (1 + e^(-s * (x - midpoint)))
/// ```
pub fn logistic(x: f64, max: f64, rules: &CombatRules) -> f64 {
    max / (1.0 + (-rules.luck_scaling * (x - rules.luck_midpoint)).exp())
}

/// Chance for an attack to deal double damage.
pub fn crit_chance(luck: i32, rules: &CombatRules) -> f64 {
    rules.crit_base + logistic(f64::from(luck), rules.crit_max - rules.crit_base, rules)
}

/// Chance for an attack to deal no damage.
pub fn miss_chance(luck: i32, rules: &CombatRules) -> f64 {
    let reduction = logistic(f64::from(luck), rules.miss_base - rules.miss_min, rules);
    (rules.miss_base - reduction).max(rules.miss_min)
}

/// Chance to avoid an incoming hit entirely.
pub fn dodge_chance(luck: i32, agility: i32, rules: &CombatRules) -> f64 {
    let chance = rules.dodge_base
        + f64::from(luck) * rules.dodge_per_luck
        + f64::from(agility) * rules.dodge_per_agility;
    chance.min(rules.dodge_cap)
}
