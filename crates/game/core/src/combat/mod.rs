//! Combat resolution.
//!
//! A fight goes through four stages:
//!
//! - **Stat derivation**: [`crate::stats::CombatProfile::derive`]
//! - **Instantiation**: [`spawn_encounter`] copies catalog templates into
//!   [`MonsterInstance`]s
//! - **Turn loop**: [`CombatEngine`] plays turns until victory, defeat or
//!   stalemate and returns a [`CombatReport`]
//! - **Outcome**: [`apply_outcome`] writes health and rewards back to the
//!   character
//!
//! All randomness goes through [`crate::env::RngOracle`].

pub mod damage;
pub mod engine;
pub mod error;
pub mod event;
pub mod instance;
pub mod outcome;
pub mod targeting;

pub use damage::{monster_damage, player_damage};
pub use engine::{
    CombatController, CombatEngine, CombatOutcome, CombatReport, CombatState, Controller,
};
pub use error::CombatSetupError;
pub use event::{CombatEvent, CombatObserver};
pub use instance::{MonsterInstance, instantiate, spawn_encounter};
pub use outcome::{OutcomeEffects, apply_outcome};
pub use targeting::{FirstAliveTarget, TargetCandidate, TargetSelector};
