//! In-memory CharacterRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use game_core::Character;

use crate::repository::{
    CharacterRepository, RepositoryError, Result, character_file_stem, same_character_name,
};

/// In-memory implementation of CharacterRepository.
///
/// Keys follow the same normalization as the file repository, so both treat
/// names identically.
#[derive(Default)]
pub struct InMemoryCharacterRepository {
    characters: RwLock<BTreeMap<String, Character>>,
}

impl InMemoryCharacterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterRepository for InMemoryCharacterRepository {
    fn save(&self, character: &Character) -> Result<()> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let key = character_file_stem(&character.name);
        if let Some(existing) = characters.get(&key)
            && !same_character_name(&existing.name, &character.name)
        {
            return Err(RepositoryError::NameClash {
                name: character.name.clone(),
                existing: existing.name.clone(),
            });
        }
        characters.insert(key, character.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<Character>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(characters
            .get(&character_file_stem(name))
            .filter(|c| same_character_name(&c.name, name))
            .cloned())
    }

    fn list(&self) -> Result<Vec<String>> {
        let characters = self
            .characters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut names: Vec<String> = characters.values().map(|c| c.name.clone()).collect();
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> Result<bool> {
        let mut characters = self
            .characters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let key = character_file_stem(name);
        let owned = characters
            .get(&key)
            .is_some_and(|c| same_character_name(&c.name, name));
        Ok(owned && characters.remove(&key).is_some())
    }
}
