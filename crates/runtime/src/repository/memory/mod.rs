//! In-memory repository implementations for testing and development.

mod character;
mod mission;

pub use character::InMemoryCharacterRepository;
pub use mission::InMemoryMissionRepository;
