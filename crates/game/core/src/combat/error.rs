//! Errors raised while setting up a fight.

use crate::error::{ErrorSeverity, GameError};

/// A fight could not be assembled. Raised before any state changes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatSetupError {
    /// The mission names a monster missing from the catalog.
    #[error("monster template not found: {name}")]
    MonsterNotFound { name: String },

    /// The encounter would contain no monsters.
    #[error("encounter with {name} has no monsters")]
    NoMonsters { name: String },
}

impl GameError for CombatSetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MonsterNotFound { .. } => "COMBAT_MONSTER_NOT_FOUND",
            Self::NoMonsters { .. } => "COMBAT_NO_MONSTERS",
        }
    }
}
