//! The persisted character record and its inventory rules.

use crate::error::{ErrorSeverity, GameError};
use crate::stats::CombatProfile;

use super::{Attribute, Attributes, Item};

/// Character class. Decides optimized attribute primaries and mission access.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CharacterClass {
    Warrior,
    Paladin,
    Barbarian,
    Druid,
    Rogue,
    Mage,
}

impl CharacterClass {
    /// The two attributes maxed out by optimized creation.
    pub const fn primaries(self) -> [Attribute; 2] {
        match self {
            Self::Warrior | Self::Barbarian => [Attribute::Force, Attribute::Endurance],
            Self::Paladin => [Attribute::Charisma, Attribute::Wisdom],
            Self::Rogue => [Attribute::Dexterity, Attribute::Endurance],
            Self::Druid => [Attribute::Wisdom, Attribute::Intelligence],
            Self::Mage => [Attribute::Intelligence, Attribute::Charisma],
        }
    }
}

/// How the attributes were rolled.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CreationMode {
    Random,
    Optimized,
}

/// Errors raised by character actions outside combat.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    #[error("{name} is dead; create or load another character")]
    Dead { name: String },

    #[error("no item at inventory position {index}")]
    ItemNotFound { index: usize },

    #[error("{name} cannot be equipped")]
    NotEquippable { name: String },

    #[error("{name} is already equipped")]
    AlreadyWorn { name: String },

    #[error("{name} is not equipped")]
    NotWorn { name: String },
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Dead { .. } => ErrorSeverity::Fatal,
            Self::ItemNotFound { .. } | Self::NotEquippable { .. } => ErrorSeverity::Validation,
            Self::AlreadyWorn { .. } | Self::NotWorn { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Dead { .. } => "CHARACTER_DEAD",
            Self::ItemNotFound { .. } => "CHARACTER_ITEM_NOT_FOUND",
            Self::NotEquippable { .. } => "CHARACTER_NOT_EQUIPPABLE",
            Self::AlreadyWorn { .. } => "CHARACTER_ALREADY_WORN",
            Self::NotWorn { .. } => "CHARACTER_NOT_WORN",
        }
    }
}

/// A player character.
///
/// `current_health` is signed: a defeat can leave it below zero, and any
/// value `<= 0` marks the character as permanently dead.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub attributes: Attributes,
    pub creation_mode: CreationMode,
    pub experience: u32,
    pub gold: u32,
    pub inventory: Vec<Item>,
    pub current_health: i32,
}

impl Character {
    /// Bare character at full health with no gold or items.
    pub fn new(
        name: impl Into<String>,
        class: CharacterClass,
        attributes: Attributes,
        creation_mode: CreationMode,
    ) -> Self {
        let current_health = CombatProfile::derive(&attributes, &[]).max_health;
        Self {
            name: name.into(),
            class,
            attributes,
            creation_mode,
            experience: 0,
            gold: 0,
            inventory: Vec::new(),
            current_health,
        }
    }

    /// Combat profile from attributes and worn items.
    pub fn profile(&self) -> CombatProfile {
        CombatProfile::derive(&self.attributes, &self.inventory)
    }

    pub fn max_health(&self) -> i32 {
        self.profile().max_health
    }

    pub fn is_dead(&self) -> bool {
        self.current_health <= 0
    }

    /// Gate for every action a dead character may not take.
    pub fn ensure_alive(&self) -> Result<(), CharacterError> {
        if self.is_dead() {
            return Err(CharacterError::Dead {
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    pub fn item(&self, index: usize) -> Result<&Item, CharacterError> {
        self.inventory
            .get(index)
            .ok_or(CharacterError::ItemNotFound { index })
    }

    /// Worn items with their inventory positions.
    pub fn worn_items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.inventory.iter().enumerate().filter(|(_, item)| item.worn)
    }

    /// Carried but not worn items with their inventory positions.
    pub fn unworn_items(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.inventory.iter().enumerate().filter(|(_, item)| !item.worn)
    }

    /// Wear the item at `index`.
    ///
    /// Any worn item whose slot conflicts is taken off first.
    ///
    /// # Returns
    ///
    /// Names of the items that were taken off, in inventory order.
    pub fn equip(&mut self, index: usize) -> Result<Vec<String>, CharacterError> {
        self.ensure_alive()?;
        let item = self.item(index)?;
        if item.worn {
            return Err(CharacterError::AlreadyWorn {
                name: item.name.clone(),
            });
        }
        let Some(slot) = item.slot else {
            return Err(CharacterError::NotEquippable {
                name: item.name.clone(),
            });
        };

        let mut displaced = Vec::new();
        for other in self.inventory.iter_mut().filter(|other| other.worn) {
            if other.slot.is_some_and(|worn_slot| slot.conflicts_with(worn_slot)) {
                other.worn = false;
                displaced.push(other.name.clone());
            }
        }
        self.inventory[index].worn = true;
        Ok(displaced)
    }

    /// Take off the item at `index`.
    pub fn unequip(&mut self, index: usize) -> Result<(), CharacterError> {
        self.ensure_alive()?;
        let item = self.item(index)?;
        if !item.worn {
            return Err(CharacterError::NotWorn {
                name: item.name.clone(),
            });
        }
        self.inventory[index].worn = false;
        Ok(())
    }

    /// Restore health to the derived maximum.
    ///
    /// # Returns
    ///
    /// Health points recovered; zero when already at full health.
    pub fn rest(&mut self) -> Result<i32, CharacterError> {
        self.ensure_alive()?;
        let max = self.max_health();
        let healed = (max - self.current_health).max(0);
        if healed > 0 {
            self.current_health = max;
        }
        Ok(healed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EquipSlot, ItemKind};

    fn knight() -> Character {
        let mut c = Character::new(
            "Aldric",
            CharacterClass::Warrior,
            Attributes::uniform(3),
            CreationMode::Optimized,
        );
        c.inventory = vec![
            Item::new("Sword", ItemKind::Weapon, 30)
                .with_slot(EquipSlot::MainHand)
                .with_damage(4)
                .worn(),
            Item::new("Buckler", ItemKind::Shield, 20)
                .with_slot(EquipSlot::OffHand)
                .with_defense(2)
                .worn(),
            Item::new("Greataxe", ItemKind::Weapon, 80)
                .with_slot(EquipSlot::TwoHands)
                .with_damage(8),
            Item::new("Axe", ItemKind::Weapon, 25)
                .with_slot(EquipSlot::MainHand)
                .with_damage(5),
            Item::new("Potion", ItemKind::Consumable, 10),
        ];
        c
    }

    #[test]
    fn new_character_starts_at_derived_max_health() {
        let c = knight();
        assert_eq!(c.current_health, 10 + 3 * 3);
    }

    #[test]
    fn equipping_same_slot_swaps_items() {
        let mut c = knight();
        let displaced = c.equip(3).unwrap();
        assert_eq!(displaced, vec!["Sword".to_string()]);
        assert!(c.inventory[3].worn);
        assert!(!c.inventory[0].worn);
        assert!(c.inventory[1].worn);
    }

    #[test]
    fn two_handed_item_frees_both_hands() {
        let mut c = knight();
        let displaced = c.equip(2).unwrap();
        assert_eq!(displaced, vec!["Sword".to_string(), "Buckler".to_string()]);
        assert_eq!(c.worn_items().count(), 1);

        let displaced = c.equip(1).unwrap();
        assert_eq!(displaced, vec!["Greataxe".to_string()]);
    }

    #[test]
    fn equip_rejects_invalid_requests() {
        let mut c = knight();
        assert_eq!(c.equip(9), Err(CharacterError::ItemNotFound { index: 9 }));
        assert!(matches!(c.equip(4), Err(CharacterError::NotEquippable { .. })));
        assert!(matches!(c.equip(0), Err(CharacterError::AlreadyWorn { .. })));
        assert!(matches!(c.unequip(3), Err(CharacterError::NotWorn { .. })));
    }

    #[test]
    fn unequip_removes_bonus() {
        let mut c = knight();
        let before = c.profile().attack;
        c.unequip(0).unwrap();
        assert_eq!(c.profile().attack, before - 4);
    }

    #[test]
    fn rest_restores_to_max_and_reports_amount() {
        let mut c = knight();
        c.current_health = 4;
        assert_eq!(c.rest().unwrap(), 15);
        assert_eq!(c.current_health, 19);
        assert_eq!(c.rest().unwrap(), 0);
    }

    #[test]
    fn dead_character_is_refused() {
        let mut c = knight();
        c.current_health = -2;
        assert!(c.is_dead());
        assert_eq!(c.rest().unwrap_err().severity(), ErrorSeverity::Fatal);
        assert!(matches!(c.equip(3), Err(CharacterError::Dead { .. })));
        assert!(matches!(c.unequip(0), Err(CharacterError::Dead { .. })));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::creation::starter_kit;

    #[test]
    fn dead_character_survives_json() {
        let mut zoe = Character::new(
            "Zoé",
            CharacterClass::Druid,
            Attributes::uniform(4),
            CreationMode::Optimized,
        );
        zoe.inventory = starter_kit();
        zoe.gold = 12;
        zoe.experience = 80;
        zoe.current_health = -4;

        let json = serde_json::to_string(&zoe).unwrap();
        assert!(json.contains("\"class\":\"Druid\""));
        assert!(json.contains("\"current_health\":-4"));

        let back: Character = serde_json::from_str(&json).unwrap();
        assert!(back.is_dead());
        assert_eq!(back, zoe);
    }
}
