//! Content factory for loading everything a run needs from a data directory.

use std::path::{Path, PathBuf};

use tower_core::GameConfig;

use crate::catalog::EquipmentCatalog;
use crate::loaders::{ConfigLoader, EquipmentLoader, LoadResult, NameLoader};
use crate::names::NamePool;

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── equipment.ron
/// └── names.ron
/// ```
///
/// Every file is optional. A missing file falls back to the built-in
/// content; a present but malformed file is an error.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the equipment catalog from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<EquipmentCatalog> {
        let path = self.data_dir.join("equipment.ron");
        if !path.exists() {
            return EquipmentLoader::builtin();
        }
        EquipmentLoader::load(&path)
    }

    /// Load the name pool from `names.ron`.
    pub fn load_names(&self) -> LoadResult<NamePool> {
        let path = self.data_dir.join("names.ron");
        if !path.exists() {
            return Ok(NamePool::builtin());
        }
        NameLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
