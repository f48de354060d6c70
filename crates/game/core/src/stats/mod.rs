//! Stat derivation.
//!
//! Combat numbers are never stored. They are recomputed from base attributes
//! and worn equipment at the start of every fight, so changing gear between
//! fights takes effect immediately.
//!
//! ```text
//! [ Attributes (stored) ] + [ worn Items ]
//!            ↓
//!     [ CombatProfile ]
//! ```

use crate::state::{Attributes, Item};

/// Derived combat numbers of a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombatProfile {
    pub max_health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl CombatProfile {
    pub const BASE_HEALTH: i32 = 10;
    pub const HEALTH_PER_ENDURANCE: i32 = 3;
    pub const BASE_ATTACK: i32 = 5;
    pub const BASE_DEFENSE: i32 = 2;

    /// Derive the profile from attributes and inventory.
    ///
    /// # Formula
    ///
    /// ```text
    /// max_health = 10 + 3 × endurance
    /// attack     = 5 + force       + Σ damage  of worn items
    /// defense    = 2 + ⌊endurance / 2⌋ + Σ defense of worn items
    /// ```
    ///
    /// Unworn items are ignored. Bonuses are additive and uncapped.
    pub fn derive(attributes: &Attributes, inventory: &[Item]) -> Self {
        let mut profile = Self {
            max_health: Self::BASE_HEALTH + Self::HEALTH_PER_ENDURANCE * attributes.endurance,
            attack: Self::BASE_ATTACK + attributes.force,
            defense: Self::BASE_DEFENSE + attributes.endurance.div_euclid(2),
        };

        for item in inventory.iter().filter(|item| item.worn) {
            profile.attack += item.damage_bonus();
            profile.defense += item.defense_bonus();
        }

        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EquipSlot, ItemKind};

    fn attrs(force: i32, endurance: i32) -> Attributes {
        Attributes {
            force,
            endurance,
            ..Attributes::uniform(1)
        }
    }

    #[test]
    fn base_profile_without_items() {
        let profile = CombatProfile::derive(&attrs(4, 3), &[]);
        assert_eq!(
            profile,
            CombatProfile {
                max_health: 19,
                attack: 9,
                defense: 3,
            }
        );
    }

    #[test]
    fn only_worn_items_contribute() {
        let inventory = vec![
            Item::new("Dagger", ItemKind::Weapon, 15)
                .with_slot(EquipSlot::MainHand)
                .with_damage(3)
                .worn(),
            Item::new("Clothes", ItemKind::Armor, 0)
                .with_slot(EquipSlot::Torso)
                .with_defense(1)
                .worn(),
            Item::new("Spear", ItemKind::Weapon, 40)
                .with_slot(EquipSlot::TwoHands)
                .with_damage(6),
        ];
        let profile = CombatProfile::derive(&attrs(2, 5), &inventory);
        assert_eq!(profile.attack, 5 + 2 + 3);
        assert_eq!(profile.defense, 2 + 2 + 1);
        assert_eq!(profile.max_health, 25);
    }

    #[test]
    fn item_with_both_modifiers_adds_to_both() {
        let inventory = vec![
            Item::new("Spiked shield", ItemKind::Shield, 60)
                .with_slot(EquipSlot::OffHand)
                .with_damage(2)
                .with_defense(3)
                .worn(),
        ];
        let profile = CombatProfile::derive(&attrs(1, 1), &inventory);
        assert_eq!(profile.attack, 8);
        assert_eq!(profile.defense, 5);
    }
}
