//! Repository layer for data that changes during play.
//!
//! Repositories handle:
//! - Character records (create, save after rest and combat, load, list)
//! - Mission progress (which non-repeatable missions are done)
//!
//! Static game content (monsters, shop, attacks) is handled by the content
//! catalogs, not repositories.

mod error;
pub mod file;
pub mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::{FileCharacterRepository, FileMissionRepository};
pub use memory::{InMemoryCharacterRepository, InMemoryMissionRepository};
pub use traits::{CharacterRepository, MissionRepository};
pub use types::{
    MissionProgress, SaveHeader, SavedCharacter, character_file_stem, same_character_name,
};
