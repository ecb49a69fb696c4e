//! Game configuration loader.

use std::path::Path;

use tower_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing tables and keys fall back to their defaults, so a file only
    /// needs to name the rules it changes.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        tracing::debug!(?config, "game config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse(
            r#"
            [combat]
            xp_per_level = 80

            [movement]
            stairs_climb_ticks = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.combat.xp_per_level, 80);
        assert_eq!(config.combat.defense_scale, 20);
        assert_eq!(config.movement.stairs_climb_ticks, 10);
        assert_eq!(config.movement.room_path, 60.0);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[combat]\ncrit_max = 0.5").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.combat.crit_max, 0.5);
    }

    #[test]
    fn reports_bad_toml_and_missing_files() {
        let err = ConfigLoader::parse("[combat\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config TOML"));

        let err = ConfigLoader::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
