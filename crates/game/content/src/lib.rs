//! Data-driven content catalogs and loaders.
//!
//! This crate houses the static game content and the loaders that read it:
//! - Monster templates (RON)
//! - Mission definitions (RON), the seed for the mission repository
//! - Shop items (RON)
//! - Attack definitions (RON)
//! - Game rules configuration (TOML)
//!
//! Catalogs are read-only. Mission progress is tracked by the runtime's
//! repositories, never written back here.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{AttackCatalog, MonsterCatalog, ShopCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{
    AttackLoader, ConfigLoader, ContentFactory, LoadResult, MissionLoader, MonsterLoader,
    ShopLoader,
};
