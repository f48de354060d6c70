//! Monster catalog loader.

use std::path::Path;

use game_core::MonsterTemplate;
use serde::{Deserialize, Serialize};

use crate::catalog::MonsterCatalog;
use crate::loaders::{LoadResult, ensure_unique_names, read_file};

/// Monster catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterFile {
    pub monsters: Vec<MonsterTemplate>,
}

/// Loader for the monster catalog from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    /// Load the monster catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, duplicate names, and templates
    /// with no health.
    pub fn load(path: &Path) -> LoadResult<MonsterCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MonsterCatalog> {
        let file: MonsterFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;

        ensure_unique_names("monster", file.monsters.iter().map(|m| m.name.as_str()))?;
        for monster in &file.monsters {
            if monster.max_health <= 0 {
                anyhow::bail!(
                    "monster '{}' has non-positive max_health {}",
                    monster.name,
                    monster.max_health
                );
            }
        }

        Ok(MonsterCatalog::new(file.monsters))
    }
}
