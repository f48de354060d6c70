//! Rules of the Donjon game, free of I/O.
//!
//! `game-core` defines the records (characters, items, monsters, missions),
//! derives combat numbers from them, and resolves fights. Catalog data and
//! randomness come in through the traits in [`env`]; persistence and menus
//! live in the runtime and client crates.
pub mod combat;
pub mod config;
pub mod creation;
pub mod env;
pub mod error;
pub mod shop;
pub mod state;
pub mod stats;

pub use combat::{
    CombatController, CombatEngine, CombatEvent, CombatObserver, CombatOutcome, CombatReport,
    CombatSetupError, CombatState, Controller, FirstAliveTarget, MonsterInstance, OutcomeEffects,
    TargetCandidate, TargetSelector, apply_outcome, instantiate, spawn_encounter,
};
pub use config::GameConfig;
pub use creation::{CreationError, create_character, roll_attributes, starter_kit};
pub use env::{MonsterOracle, PcgRng, RngOracle, SequenceRng};
pub use error::{ErrorSeverity, GameError};
pub use shop::{ShopError, buy, sell};
pub use state::{
    AttackDefinition, AttackKind, Attribute, Attributes, Character, CharacterClass,
    CharacterError, CreationMode, Element, EquipSlot, Item, ItemKind, ItemStats, Mission,
    MonsterTemplate,
};
pub use stats::CombatProfile;
