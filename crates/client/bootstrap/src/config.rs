//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_content::ContentFactory;

/// Configuration required to bootstrap a session and its front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `config.toml` and the RON catalogs.
    pub data_dir: PathBuf,
    /// Directory holding character saves and mission progress.
    pub save_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Fixed RNG seed; `None` draws one per session.
    pub seed: Option<u64>,
    pub missions_per_page: usize,
}

impl ClientConfig {
    pub const DEFAULT_MISSIONS_PER_PAGE: usize = 10;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DONJON_DATA_DIR` - Content data directory (default: bundled `data/`)
    /// - `DONJON_SAVE_DIR` - Save directory (default: platform data dir)
    /// - `DONJON_LOG_DIR` - Log directory (default: platform cache dir + `logs`)
    /// - `DONJON_SEED` - RNG seed for reproducible sessions (default: random)
    /// - `DONJON_MISSIONS_PER_PAGE` - Missions shown per page (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("DONJON_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env::var_os("DONJON_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }
        if let Some(dir) = env::var_os("DONJON_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config.seed = read_env::<u64>("DONJON_SEED");

        if let Some(per_page) = read_env::<usize>("DONJON_MISSIONS_PER_PAGE") {
            config.missions_per_page = per_page.max(1);
        }

        config
    }

    /// Where character files live.
    pub fn characters_dir(&self) -> PathBuf {
        self.save_dir.join("characters")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(ContentFactory::BUNDLED_DATA_DIR),
            save_dir: default_save_dir(),
            log_dir: default_log_dir(),
            seed: None,
            missions_per_page: Self::DEFAULT_MISSIONS_PER_PAGE,
        }
    }
}

/// Platform data directory, e.g. `~/.local/share/donjon` on Linux.
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "donjon")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

/// Platform cache directory plus `logs`, e.g. `~/.cache/donjon/logs` on Linux.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "donjon")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/donjon"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
