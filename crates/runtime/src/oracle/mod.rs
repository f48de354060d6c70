//! Static game content bundled for the session.
//!
//! [`ContentOracles`] holds every catalog the game reads but never writes.
//! Loading tolerates broken files: the failure is logged and the affected
//! feature runs with an empty catalog, so one bad file never stops the game.

use game_content::{
    AttackCatalog, ContentFactory, LoadResult, MissionLoader, MonsterCatalog, ShopCatalog,
};
use game_core::{GameConfig, Mission, MonsterOracle, MonsterTemplate};

/// Immutable catalogs plus the rules config.
#[derive(Clone, Debug, Default)]
pub struct ContentOracles {
    pub config: GameConfig,
    pub monsters: MonsterCatalog,
    /// Mission definitions as shipped; progress lives in the mission repository.
    pub missions: Vec<Mission>,
    pub shop: ShopCatalog,
    pub attacks: AttackCatalog,
}

impl ContentOracles {
    /// Load everything from `factory`, falling back per catalog on failure.
    pub fn load(factory: &ContentFactory) -> Self {
        let oracles = Self {
            config: or_default("config", factory.load_config()),
            monsters: or_default("monsters", factory.load_monsters()),
            missions: or_default("missions", factory.load_missions()),
            shop: or_default("shop", factory.load_shop()),
            attacks: or_default("attacks", factory.load_attacks()),
        };

        for name in MissionLoader::dangling(&oracles.missions, &oracles.monsters) {
            tracing::warn!("Mission '{}' references an unknown monster", name);
        }

        tracing::info!(
            "Loaded content from {}: {} monsters, {} missions, {} shop items, {} attacks",
            factory.data_dir().display(),
            oracles.monsters.len(),
            oracles.missions.len(),
            oracles.shop.items().len(),
            oracles.attacks.all().len()
        );
        oracles
    }
}

impl MonsterOracle for ContentOracles {
    fn monster(&self, name: &str) -> Option<&MonsterTemplate> {
        self.monsters.find(name)
    }
}

fn or_default<T: Default>(what: &str, loaded: LoadResult<T>) -> T {
    match loaded {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to load {} content, continuing without it: {:#}", what, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_fall_back_to_empty_catalogs() {
        let oracles = ContentOracles::load(&ContentFactory::new("/nonexistent/donjon"));
        assert!(oracles.monsters.is_empty());
        assert!(oracles.missions.is_empty());
        assert_eq!(oracles.config, GameConfig::default());
    }

    #[test]
    fn missions_with_unknown_monsters_still_load() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("missions.ron"),
            r#"(missions: [(name: "Haunt", reward_xp: 5, reward_gold: 5,
                monster_name: "Phantom", monster_count: 2)])"#,
        )
        .unwrap();

        let oracles = ContentOracles::load(&ContentFactory::new(dir.path()));
        assert_eq!(oracles.missions.len(), 1);
        assert_eq!(
            MissionLoader::dangling(&oracles.missions, &oracles.monsters),
            ["Haunt"]
        );
        assert!(oracles.monster("Phantom").is_none());
    }

    #[test]
    fn bundled_content_resolves_mission_monsters() {
        let oracles = ContentOracles::load(&ContentFactory::bundled());
        for mission in &oracles.missions {
            assert!(oracles.monster(&mission.monster_name).is_some());
        }
    }
}
