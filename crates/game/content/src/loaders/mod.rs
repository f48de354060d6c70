//! Content loaders for reading game data from files.
//!
//! Catalogs are RON files wrapping a single list; the rules config is TOML.
//! Every loader validates what it read, so a bad file fails here instead of
//! halfway through a fight.

pub mod attacks;
pub mod config;
pub mod factory;
pub mod missions;
pub mod monsters;
pub mod shop;

pub use attacks::AttackLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use missions::MissionLoader;
pub use monsters::MonsterLoader;
pub use shop::ShopLoader;

use std::collections::HashSet;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reject blank or repeated names in a catalog.
pub(crate) fn ensure_unique_names<'a>(
    kind: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            anyhow::bail!("{} catalog contains an entry with an empty name", kind);
        }
        if !seen.insert(name) {
            anyhow::bail!("{} catalog lists '{}' more than once", kind, name);
        }
    }
    Ok(())
}
