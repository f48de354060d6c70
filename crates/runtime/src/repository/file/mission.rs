//! File-based MissionRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use game_core::Mission;
use serde::{Deserialize, Serialize};

use crate::repository::{MissionProgress, MissionRepository, RepositoryError, Result, SaveHeader};

use super::write_json_atomic;

#[derive(Debug, Serialize, Deserialize)]
struct ProgressFile {
    header: SaveHeader,
    progress: MissionProgress,
}

/// Mission definitions from the content catalog plus completion flags kept
/// in `missions.json`.
///
/// Definitions always come from the catalog, so editing `missions.ron`
/// takes effect without touching saves. Progress for missions that no
/// longer exist is kept but ignored.
pub struct FileMissionRepository {
    path: PathBuf,
    missions: Vec<Mission>,
    progress: RwLock<MissionProgress>,
}

impl FileMissionRepository {
    pub const FILE_NAME: &'static str = "missions.json";

    /// Open the progress file in `base_dir`, creating the directory if needed.
    pub fn open(base_dir: impl AsRef<Path>, missions: Vec<Mission>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        let path = base_dir.join(Self::FILE_NAME);

        let progress = if path.exists() {
            let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
            let file: ProgressFile =
                serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;
            file.header.validate()?;
            tracing::debug!(
                "Loaded mission progress ({} completed) from {}",
                file.progress.completed.len(),
                path.display()
            );
            file.progress
        } else {
            MissionProgress::default()
        };

        Ok(Self {
            path,
            missions,
            progress: RwLock::new(progress),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MissionRepository for FileMissionRepository {
    fn load_all(&self) -> Result<Vec<Mission>> {
        let progress = self
            .progress
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(progress.apply(&self.missions))
    }

    fn mark_completed(&self, name: &str) -> Result<bool> {
        let Some(mission) = self.missions.iter().find(|m| m.name == name) else {
            return Ok(false);
        };
        if mission.repeatable {
            return Ok(true);
        }

        let mut progress = self
            .progress
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if progress.completed.contains(name) {
            return Ok(true);
        }

        // Memory changes only once the file holds the new record.
        let mut updated = progress.clone();
        updated.completed.insert(name.to_owned());
        let file = ProgressFile {
            header: SaveHeader::now(),
            progress: updated,
        };
        write_json_atomic(&self.path, &file)?;
        *progress = file.progress;
        tracing::debug!("Marked mission '{}' completed in {}", name, self.path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog() -> Vec<Mission> {
        vec![
            Mission::new("Rats", "Rat", 3).repeatable(),
            Mission::new("Goblins", "Goblin", 2),
        ]
    }

    #[test]
    fn completion_survives_reopening() {
        let dir = TempDir::new().unwrap();
        let repo = FileMissionRepository::open(dir.path(), catalog()).unwrap();
        assert!(repo.load_all().unwrap().iter().all(|m| !m.completed));

        assert!(repo.mark_completed("Goblins").unwrap());
        drop(repo);

        let reopened = FileMissionRepository::open(dir.path(), catalog()).unwrap();
        let goblins = reopened.find("Goblins").unwrap().unwrap();
        assert!(goblins.completed);
    }

    #[test]
    fn repeatable_and_unknown_missions_are_not_recorded() {
        let dir = TempDir::new().unwrap();
        let repo = FileMissionRepository::open(dir.path(), catalog()).unwrap();

        assert!(repo.mark_completed("Rats").unwrap());
        assert!(!repo.mark_completed("Dragons").unwrap());
        assert!(!repo.path().exists());
        assert!(!repo.find("Rats").unwrap().unwrap().completed);
    }

    #[test]
    fn failed_write_leaves_progress_unchanged() {
        let dir = TempDir::new().unwrap();
        let saves = dir.path().join("saves");
        let repo = FileMissionRepository::open(&saves, catalog()).unwrap();
        fs::remove_dir_all(&saves).unwrap();

        assert!(matches!(
            repo.mark_completed("Goblins"),
            Err(RepositoryError::Io(_))
        ));
        assert!(!repo.find("Goblins").unwrap().unwrap().completed);
    }

    #[test]
    fn corrupt_progress_file_fails_to_open() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(FileMissionRepository::FILE_NAME), "oops").unwrap();
        assert!(FileMissionRepository::open(dir.path(), catalog()).is_err());
    }
}
