//! Content factory for loading every catalog from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, Mission};

use crate::catalog::{AttackCatalog, MonsterCatalog, ShopCatalog};
use crate::loaders::{
    AttackLoader, ConfigLoader, LoadResult, MissionLoader, MonsterLoader, ShopLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── monsters.ron
/// ├── missions.ron
/// ├── shop.ron
/// └── attacks.ron
/// ```
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Directory holding the data files shipped with this crate.
    pub const BUNDLED_DATA_DIR: &'static str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory reading the bundled data files.
    pub fn bundled() -> Self {
        Self::new(Self::BUNDLED_DATA_DIR)
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load monster templates from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<MonsterCatalog> {
        MonsterLoader::load(&self.data_dir.join("monsters.ron"))
    }

    /// Load mission definitions from `missions.ron`.
    pub fn load_missions(&self) -> LoadResult<Vec<Mission>> {
        MissionLoader::load(&self.data_dir.join("missions.ron"))
    }

    /// Load the shop inventory from `shop.ron`.
    pub fn load_shop(&self) -> LoadResult<ShopCatalog> {
        ShopLoader::load(&self.data_dir.join("shop.ron"))
    }

    /// Load attack definitions from `attacks.ron`.
    pub fn load_attacks(&self) -> LoadResult<AttackCatalog> {
        AttackLoader::load(&self.data_dir.join("attacks.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
