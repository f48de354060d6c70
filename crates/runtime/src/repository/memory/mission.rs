//! In-memory MissionRepository implementation for tests and local runs.

use std::sync::RwLock;

use game_core::Mission;

use crate::repository::{MissionRepository, RepositoryError, Result};

/// In-memory implementation of MissionRepository.
pub struct InMemoryMissionRepository {
    missions: RwLock<Vec<Mission>>,
}

impl InMemoryMissionRepository {
    pub fn new(missions: Vec<Mission>) -> Self {
        Self {
            missions: RwLock::new(missions),
        }
    }
}

impl MissionRepository for InMemoryMissionRepository {
    fn load_all(&self) -> Result<Vec<Mission>> {
        let missions = self
            .missions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(missions.clone())
    }

    fn mark_completed(&self, name: &str) -> Result<bool> {
        let mut missions = self
            .missions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let Some(mission) = missions.iter_mut().find(|m| m.name == name) else {
            return Ok(false);
        };
        if !mission.repeatable {
            mission.completed = true;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_only_non_repeatable_missions() {
        let repo = InMemoryMissionRepository::new(vec![
            Mission::new("Rats", "Rat", 3).repeatable(),
            Mission::new("Goblins", "Goblin", 2),
        ]);
        assert!(repo.mark_completed("Rats").unwrap());
        assert!(repo.mark_completed("Goblins").unwrap());
        assert!(!repo.mark_completed("Dragons").unwrap());

        let missions = repo.load_all().unwrap();
        assert!(!missions[0].completed);
        assert!(missions[1].completed);
    }
}
