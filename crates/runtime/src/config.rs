//! Simulation settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Knobs for one headless run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Fixed seed. `None` lets the caller pick one.
    pub seed: Option<u64>,
    pub stories: usize,
    pub rooms_per_story: usize,
    pub dudes: usize,
    pub max_ticks: u64,
    pub invincible: bool,
    pub message_capacity: usize,
    /// Optional TOML file with game rule overrides.
    pub config_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            stories: 3,
            rooms_per_story: 8,
            dudes: 4,
            max_ticks: 20_000,
            invincible: false,
            message_capacity: 200,
            config_path: None,
        }
    }
}

impl SimConfig {
    /// Construct simulation configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TOWER_SEED` - Run seed (default: caller chooses)
    /// - `TOWER_STORIES` - Number of stories (default: 3)
    /// - `TOWER_ROOMS_PER_STORY` - Rooms per story (default: 8, min: 2)
    /// - `TOWER_DUDES` - Roster size (default: 4)
    /// - `TOWER_MAX_TICKS` - Tick limit (default: 20000)
    /// - `TOWER_INVINCIBLE` - Dudes cannot die (default: false)
    /// - `TOWER_MESSAGE_CAPACITY` - Retained feed messages (default: 200)
    /// - `TOWER_CONFIG` - Path to a game-rules TOML file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] with a custom variable source.
    /// Unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(seed) = read::<u64>(&lookup, "TOWER_SEED") {
            config.seed = Some(seed);
        }
        if let Some(stories) = read::<usize>(&lookup, "TOWER_STORIES") {
            config.stories = stories.max(1);
        }
        if let Some(rooms) = read::<usize>(&lookup, "TOWER_ROOMS_PER_STORY") {
            config.rooms_per_story = rooms.max(2);
        }
        if let Some(dudes) = read::<usize>(&lookup, "TOWER_DUDES") {
            config.dudes = dudes;
        }
        if let Some(ticks) = read::<u64>(&lookup, "TOWER_MAX_TICKS") {
            config.max_ticks = ticks;
        }
        if let Some(invincible) = read::<bool>(&lookup, "TOWER_INVINCIBLE") {
            config.invincible = invincible;
        }
        if let Some(capacity) = read::<usize>(&lookup, "TOWER_MESSAGE_CAPACITY") {
            config.message_capacity = capacity;
        }
        if let Some(path) = lookup("TOWER_CONFIG").filter(|path| !path.is_empty()) {
            config.config_path = Some(PathBuf::from(path));
        }

        config
    }
}

fn read<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(SimConfig::from_lookup(lookup(&[])), SimConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = SimConfig::from_lookup(lookup(&[
            ("TOWER_SEED", "42"),
            ("TOWER_STORIES", "5"),
            ("TOWER_ROOMS_PER_STORY", "6"),
            ("TOWER_DUDES", "2"),
            ("TOWER_MAX_TICKS", "900"),
            ("TOWER_INVINCIBLE", "true"),
            ("TOWER_MESSAGE_CAPACITY", "10"),
            ("TOWER_CONFIG", "rules.toml"),
        ]));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.stories, 5);
        assert_eq!(config.rooms_per_story, 6);
        assert_eq!(config.dudes, 2);
        assert_eq!(config.max_ticks, 900);
        assert!(config.invincible);
        assert_eq!(config.message_capacity, 10);
        assert_eq!(config.config_path, Some(PathBuf::from("rules.toml")));
    }

    #[test]
    fn bad_values_keep_defaults_and_minimums_apply() {
        let config = SimConfig::from_lookup(lookup(&[
            ("TOWER_SEED", "soon"),
            ("TOWER_STORIES", "0"),
            ("TOWER_ROOMS_PER_STORY", "1"),
            ("TOWER_CONFIG", ""),
        ]));
        assert_eq!(config.seed, None);
        assert_eq!(config.stories, 1);
        assert_eq!(config.rooms_per_story, 2);
        assert_eq!(config.config_path, None);
    }
}
