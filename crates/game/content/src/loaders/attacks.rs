//! Attack catalog loader.

use std::path::Path;

use game_core::AttackDefinition;
use serde::{Deserialize, Serialize};

use crate::catalog::AttackCatalog;
use crate::loaders::{LoadResult, ensure_unique_names, read_file};

/// Attack catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackFile {
    pub attacks: Vec<AttackDefinition>,
}

pub struct AttackLoader;

impl AttackLoader {
    pub fn load(path: &Path) -> LoadResult<AttackCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AttackCatalog> {
        let file: AttackFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse attack catalog RON: {}", e))?;

        ensure_unique_names("attack", file.attacks.iter().map(|a| a.name.as_str()))?;
        Ok(AttackCatalog::new(file.attacks))
    }
}
