//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`CharacterError`, `ShopError`, `CombatSetupError`)
//! are defined next to the rules they guard. They all implement [`GameError`]
//! so callers can classify failures without matching every variant.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the player can pick another option and carry on
/// - **Validation**: the request itself was invalid
/// - **Internal**: catalog or record data contradicts the rules
/// - **Fatal**: the session cannot continue with this character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry with a different choice.
    ///
    /// Examples: not enough gold, slot occupied
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: item index out of range, item cannot be equipped
    Validation,

    /// Internal error - content or record inconsistency.
    ///
    /// Examples: mission references an unknown monster
    Internal,

    /// Fatal error - the character can no longer act.
    ///
    /// Examples: character is dead
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates broken data rather than player input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and tests. Defaults to the type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
