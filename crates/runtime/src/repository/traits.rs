//! Repository contracts for saving and loading mutable game records.

use game_core::{Character, Mission};

use super::Result;

/// Persistence for character records, keyed by character name.
pub trait CharacterRepository: Send + Sync {
    /// Save a character, replacing any previous record with the same name.
    fn save(&self, character: &Character) -> Result<()>;

    /// Load a character by name.
    fn load(&self, name: &str) -> Result<Option<Character>>;

    /// Names of every saved character, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Delete a character. Returns whether a record existed.
    fn delete(&self, name: &str) -> Result<bool>;

    /// Check if a character exists
    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.load(name)?.is_some())
    }
}

/// Mission definitions together with their completion flags.
pub trait MissionRepository: Send + Sync {
    /// Every mission, in catalog order, with `completed` filled in.
    fn load_all(&self) -> Result<Vec<Mission>>;

    /// Record that a mission was won.
    ///
    /// Returns `false` when no mission has that name. Repeatable missions are
    /// never marked.
    fn mark_completed(&self, name: &str) -> Result<bool>;

    /// Look up one mission by exact name.
    fn find(&self, name: &str) -> Result<Option<Mission>> {
        Ok(self.load_all()?.into_iter().find(|m| m.name == name))
    }
}
