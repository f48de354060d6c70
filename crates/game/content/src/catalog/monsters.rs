use std::str::FromStr;

use game_core::{Element, MonsterOracle, MonsterTemplate};

use super::same_name;

/// Every monster template, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonsterCatalog {
    monsters: Vec<MonsterTemplate>,
}

impl MonsterCatalog {
    pub fn new(monsters: Vec<MonsterTemplate>) -> Self {
        Self { monsters }
    }

    pub fn all(&self) -> &[MonsterTemplate] {
        &self.monsters
    }

    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Exact lookup, as used by missions.
    pub fn find(&self, name: &str) -> Option<&MonsterTemplate> {
        self.monsters.iter().find(|m| m.name == name)
    }

    /// Lookup ignoring case and surrounding whitespace, as typed by a player.
    pub fn search(&self, name: &str) -> Option<&MonsterTemplate> {
        self.monsters.iter().find(|m| same_name(&m.name, name))
    }

    pub fn by_element(&self, element: Element) -> impl Iterator<Item = &MonsterTemplate> {
        self.monsters.iter().filter(move |m| m.element == element)
    }

    /// Filter by an element typed as text. Unknown elements match nothing.
    pub fn by_element_name(&self, element: &str) -> Vec<&MonsterTemplate> {
        match Element::from_str(element.trim()) {
            Ok(element) => self.by_element(element).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl MonsterOracle for MonsterCatalog {
    fn monster(&self, name: &str) -> Option<&MonsterTemplate> {
        self.find(name)
    }
}
