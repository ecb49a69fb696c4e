//! Name list loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::names::NamePool;

/// Name list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameFile {
    pub names: Vec<String>,
}

/// Loader for dude name lists from RON files.
pub struct NameLoader;

impl NameLoader {
    pub fn load(path: &Path) -> LoadResult<NamePool> {
        let content = read_file(path)?;
        let file: NameFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse name list RON: {}", e))?;
        if file.names.is_empty() {
            anyhow::bail!("Name list {} is empty", path.display());
        }
        Ok(NamePool::new(file.names))
    }
}
