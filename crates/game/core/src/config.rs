/// Game configuration constants and tunable parameters.
///
/// Every number that shapes movement, pacing or combat odds lives here so a
/// driver can load an override file without touching the rules themselves.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub movement: MovementRules,
    pub combat: CombatRules,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Equipment levels per quality tier. Reaching this level promotes quality.
    pub const EQUIPMENT_LEVEL_CAP: i32 = 5;
    /// Level an item lands on after being demoted a quality tier.
    pub const EQUIPMENT_DEMOTED_LEVEL: i32 = 4;
    /// Gold lost per room level when a curse takes gold.
    pub const CURSE_GOLD_PER_LEVEL: i32 = 5;

    pub fn new() -> Self {
        Self::default()
    }
}

/// Distances, speeds and tick counts for the activity state machine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementRules {
    /// Radius of the walking ring, measured from the story center.
    pub room_path: f64,
    /// Radius at which the exit portal sits.
    pub portal_distance: f64,
    /// Distance a dude must descend to before entering the ring.
    pub entry_threshold: f64,
    /// Angular step per tick before agility scaling.
    pub base_speed: f64,
    /// Fraction of speed added per ten points of agility.
    pub speed_scale: f64,
    /// Multiplier applied to base speed while engaged in combat.
    pub combat_speed_factor: f64,
    /// Radial step per tick while walking into the portal.
    pub portal_step: f64,
    pub stairs_climb_ticks: u32,
    pub slice_step_ticks: u32,
    pub reveal_step_ticks: u32,
    pub portal_delay_ticks: u32,
    pub portal_fade_ticks: u32,
    /// Upper bound of the per-dude radial offset, exclusive.
    pub variation_range: u32,
    /// Number of render slices revealed when arriving on a story.
    pub slice_count: i32,
}

impl MovementRules {
    pub const DEFAULT_ROOM_PATH: f64 = 60.0;
    pub const DEFAULT_PORTAL_DISTANCE: f64 = 20.0;
    pub const DEFAULT_ENTRY_THRESHOLD: f64 = 50.0;
    pub const DEFAULT_BASE_SPEED: f64 = 0.01;
    pub const DEFAULT_SPEED_SCALE: f64 = 0.1;
    pub const DEFAULT_COMBAT_SPEED_FACTOR: f64 = 1.1;
    pub const DEFAULT_PORTAL_STEP: f64 = 0.5;
}

impl Default for MovementRules {
    fn default() -> Self {
        Self {
            room_path: Self::DEFAULT_ROOM_PATH,
            portal_distance: Self::DEFAULT_PORTAL_DISTANCE,
            entry_threshold: Self::DEFAULT_ENTRY_THRESHOLD,
            base_speed: Self::DEFAULT_BASE_SPEED,
            speed_scale: Self::DEFAULT_SPEED_SCALE,
            combat_speed_factor: Self::DEFAULT_COMBAT_SPEED_FACTOR,
            portal_step: Self::DEFAULT_PORTAL_STEP,
            stairs_climb_ticks: 40,
            slice_step_ticks: 2,
            reveal_step_ticks: 15,
            portal_delay_ticks: 30,
            portal_fade_ticks: 20,
            variation_range: 6,
            slice_count: 8,
        }
    }
}

/// Odds and scaling constants for combat resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    /// Defense scaling constant `k` in `raw * k / (k + defense)`.
    pub defense_scale: i32,
    /// Smallest damage a positive hit can be reduced to.
    pub min_damage: i32,
    pub crit_base: f64,
    pub crit_max: f64,
    pub miss_base: f64,
    pub miss_min: f64,
    /// Steepness of the luck logistic curve.
    pub luck_scaling: f64,
    pub dodge_base: f64,
    pub dodge_per_luck: f64,
    pub dodge_per_agility: f64,
    pub dodge_cap: f64,
    /// Experience needed per current level to advance.
    pub xp_per_level: i32,
    pub crit_multiplier: i32,
    /// Luck at which the logistic curves reach their midpoint.
    pub luck_midpoint: f64,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            defense_scale: 20,
            min_damage: 1,
            crit_base: 0.05,
            crit_max: 0.25,
            miss_base: 0.10,
            miss_min: 0.01,
            luck_scaling: 0.1,
            dodge_base: 0.05,
            dodge_per_luck: 0.005,
            dodge_per_agility: 0.01,
            dodge_cap: 0.5,
            xp_per_level: 50,
            crit_multiplier: 2,
            luck_midpoint: 50.0,
        }
    }
}
