//! Unified error type surfaced by the runtime API.
//!
//! Wraps rule violations from `game-core` and repository failures so the
//! client can report them with one match.

use thiserror::Error;

use game_core::{
    CharacterError, CombatSetupError, CreationError, ErrorSeverity, GameError, ShopError,
};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("no character is loaded")]
    NoCharacter,

    #[error("no saved character named '{name}'")]
    CharacterNotFound { name: String },

    #[error("no mission named '{name}'")]
    MissionNotFound { name: String },

    #[error("mission '{name}' is not available to {character}")]
    MissionUnavailable { name: String, character: String },

    #[error("the shop has no item #{index}")]
    ShopItemNotFound { index: usize },

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error(transparent)]
    Shop(#[from] ShopError),

    #[error("cannot start mission: {0}")]
    CombatSetup(#[from] CombatSetupError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Whether the failure comes from the loaded character being dead.
    pub fn is_dead_character(&self) -> bool {
        matches!(
            self,
            Self::Character(CharacterError::Dead { .. })
                | Self::Shop(ShopError::Character(CharacterError::Dead { .. }))
        )
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoCharacter | Self::CharacterNotFound { .. } | Self::MissionNotFound { .. } => {
                ErrorSeverity::Validation
            }
            Self::MissionUnavailable { .. } | Self::ShopItemNotFound { .. } => {
                ErrorSeverity::Recoverable
            }
            Self::Character(e) => e.severity(),
            Self::Creation(e) => e.severity(),
            Self::Shop(e) => e.severity(),
            Self::CombatSetup(e) => e.severity(),
            Self::Repository(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoCharacter => "RUNTIME_NO_CHARACTER",
            Self::CharacterNotFound { .. } => "RUNTIME_CHARACTER_NOT_FOUND",
            Self::MissionNotFound { .. } => "RUNTIME_MISSION_NOT_FOUND",
            Self::MissionUnavailable { .. } => "RUNTIME_MISSION_UNAVAILABLE",
            Self::ShopItemNotFound { .. } => "RUNTIME_SHOP_ITEM_NOT_FOUND",
            Self::Character(e) => e.error_code(),
            Self::Creation(e) => e.error_code(),
            Self::Shop(e) => e.error_code(),
            Self::CombatSetup(e) => e.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
        }
    }
}
