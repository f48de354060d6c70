//! Mission definitions loader.

use std::path::Path;

use game_core::Mission;
use serde::{Deserialize, Serialize};

use crate::catalog::MonsterCatalog;
use crate::loaders::{LoadResult, ensure_unique_names, read_file};

/// Mission list structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionFile {
    pub missions: Vec<Mission>,
}

/// Loader for mission definitions from RON files.
pub struct MissionLoader;

impl MissionLoader {
    /// Load mission definitions from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Mission>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Mission>> {
        let file: MissionFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse mission list RON: {}", e))?;

        ensure_unique_names("mission", file.missions.iter().map(|m| m.name.as_str()))?;
        for mission in &file.missions {
            if mission.monster_count == 0 {
                anyhow::bail!("mission '{}' has no monsters to fight", mission.name);
            }
        }
        Ok(file.missions)
    }

    /// Names of missions whose monster is absent from `monsters`.
    ///
    /// Such missions still load; starting one fails with a setup error.
    pub fn dangling<'a>(missions: &'a [Mission], monsters: &MonsterCatalog) -> Vec<&'a str> {
        missions
            .iter()
            .filter(|m| monsters.find(&m.monster_name).is_none())
            .map(|m| m.name.as_str())
            .collect()
    }
}
