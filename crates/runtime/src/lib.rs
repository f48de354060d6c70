//! Runtime orchestration for a play session.
//!
//! This crate wires the pure rules of `game-core` to content catalogs and
//! persistent storage. Consumers create a [`Session`] and drive it from a
//! front end.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the explicit play context
//! - [`mission`] resolves a mission through the combat engine
//! - [`oracle`] bundles the static catalogs
//! - [`repository`] persists characters and mission progress
pub mod error;
pub mod mission;
pub mod oracle;
pub mod repository;
pub mod session;

pub use error::{Result, RuntimeError};
pub use mission::{MissionReport, resolve_mission};
pub use oracle::ContentOracles;
pub use repository::{
    CharacterRepository, FileCharacterRepository, FileMissionRepository,
    InMemoryCharacterRepository, InMemoryMissionRepository, MissionRepository, RepositoryError,
};
pub use session::Session;
