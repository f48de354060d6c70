//! Persistent game records: characters, items, monsters, missions, attacks.
//!
//! Everything here is plain data plus the small rules that keep it
//! consistent. Combat state lives in [`crate::combat`] and is never stored.

pub mod attack;
pub mod attributes;
pub mod character;
pub mod item;
pub mod mission;
pub mod monster;

pub use attack::{AttackDefinition, AttackKind};
pub use attributes::{Attribute, Attributes};
pub use character::{Character, CharacterClass, CharacterError, CreationMode};
pub use item::{EquipSlot, Item, ItemKind, ItemStats};
pub use mission::Mission;
pub use monster::{Element, MonsterTemplate};
