//! Monster template lookup.

use crate::state::MonsterTemplate;

/// Provides monster templates by exact name.
///
/// Implemented by the content catalog; tests usually pass a plain slice.
pub trait MonsterOracle {
    fn monster(&self, name: &str) -> Option<&MonsterTemplate>;
}

impl MonsterOracle for [MonsterTemplate] {
    fn monster(&self, name: &str) -> Option<&MonsterTemplate> {
        self.iter().find(|template| template.name == name)
    }
}

impl MonsterOracle for Vec<MonsterTemplate> {
    fn monster(&self, name: &str) -> Option<&MonsterTemplate> {
        self.as_slice().monster(name)
    }
}
