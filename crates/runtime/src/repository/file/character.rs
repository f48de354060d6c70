//! File-based CharacterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::Character;

use crate::repository::{
    CharacterRepository, RepositoryError, Result, SaveHeader, SavedCharacter,
    character_file_stem, same_character_name,
};

use super::write_json_atomic;

/// File-based implementation of CharacterRepository.
///
/// # File Format
///
/// One `<name>.json` per character holding a [`SavedCharacter`]: a
/// [`SaveHeader`] followed by the character record. A file only answers to
/// the name stored inside it; a different name that maps to the same file
/// is refused on save and not found on load.
pub struct FileCharacterRepository {
    base_dir: PathBuf,
}

impl FileCharacterRepository {
    /// Create a new file-based character repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a character file.
    fn character_path(&self, name: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.json", character_file_stem(name)))
    }

    fn read(path: &Path) -> Result<SavedCharacter> {
        let json = fs::read_to_string(path).map_err(RepositoryError::Io)?;
        let saved: SavedCharacter =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;
        saved.header.validate()?;
        Ok(saved)
    }
}

impl CharacterRepository for FileCharacterRepository {
    fn save(&self, character: &Character) -> Result<()> {
        let path = self.character_path(&character.name);
        if path.exists()
            && let Ok(existing) = Self::read(&path)
            && !same_character_name(&existing.character.name, &character.name)
        {
            return Err(RepositoryError::NameClash {
                name: character.name.clone(),
                existing: existing.character.name,
            });
        }

        let saved = SavedCharacter {
            header: SaveHeader::now(),
            character: character.clone(),
        };
        write_json_atomic(&path, &saved)?;

        tracing::debug!("Saved character '{}' to {}", character.name, path.display());

        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<Character>> {
        let path = self.character_path(name);

        if !path.exists() {
            return Ok(None);
        }

        let saved = Self::read(&path)?;
        if !same_character_name(&saved.character.name, name) {
            tracing::debug!(
                "{} belongs to '{}', not '{}'",
                path.display(),
                saved.character.name,
                name
            );
            return Ok(None);
        }

        tracing::debug!(
            "Loaded character '{}' saved at {}",
            saved.character.name,
            saved.header.saved_at
        );

        Ok(Some(saved.character))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            match Self::read(&path) {
                Ok(saved) => names.push(saved.character.name),
                Err(e) => tracing::warn!("Skipping unreadable save {}: {}", path.display(), e),
            }
        }

        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> Result<bool> {
        let path = self.character_path(name);

        if !path.exists() {
            return Ok(false);
        }
        if let Ok(saved) = Self::read(&path)
            && !same_character_name(&saved.character.name, name)
        {
            return Ok(false);
        }

        fs::remove_file(&path).map_err(RepositoryError::Io)?;
        tracing::info!("Deleted character save: {}", path.display());
        Ok(true)
    }
}
