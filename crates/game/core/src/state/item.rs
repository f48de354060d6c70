//! Inventory items and equipment slots.

/// Broad item category, used for display and shop grouping.
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
pub enum ItemKind {
    Weapon,
    Armor,
    Shield,
    Accessory,
    Consumable,
}

/// Body location an equippable item occupies.
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
pub enum EquipSlot {
    Head,
    Torso,
    Legs,
    Feet,
    Hands,
    MainHand,
    OffHand,
    TwoHands,
    Neck,
    Finger,
}

impl EquipSlot {
    /// Whether the slot is held in a hand (main, off or both).
    pub const fn is_hand(self) -> bool {
        matches!(self, Self::MainHand | Self::OffHand | Self::TwoHands)
    }

    /// Whether an item in `self` and a worn item in `other` cannot be worn together.
    ///
    /// Same slot always conflicts. A two-handed item conflicts with both
    /// single-hand slots and the reverse.
    pub const fn conflicts_with(self, other: EquipSlot) -> bool {
        match (self, other) {
            (Self::TwoHands, Self::MainHand | Self::OffHand)
            | (Self::MainHand | Self::OffHand, Self::TwoHands) => true,
            _ => self as u8 == other as u8,
        }
    }
}

/// Optional numeric modifiers of an item.
///
/// Only `damage` and `defense` feed the combat profile; `accuracy` is shown on
/// the sheet and in the shop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemStats {
    pub damage: Option<i32>,
    pub defense: Option<i32>,
    pub accuracy: Option<i32>,
}

/// An item owned by a character or offered by the shop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
    /// Purchase price in gold. Zero means the item cannot be sold.
    pub price: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: ItemStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// `None` for items that cannot be equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slot: Option<EquipSlot>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub worn: bool,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: ItemKind, price: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            price,
            stats: ItemStats::default(),
            description: String::new(),
            slot: None,
            worn: false,
        }
    }

    pub fn with_slot(mut self, slot: EquipSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_damage(mut self, damage: i32) -> Self {
        self.stats.damage = Some(damage);
        self
    }

    pub fn with_defense(mut self, defense: i32) -> Self {
        self.stats.defense = Some(defense);
        self
    }

    pub fn with_accuracy(mut self, accuracy: i32) -> Self {
        self.stats.accuracy = Some(accuracy);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn worn(mut self) -> Self {
        self.worn = true;
        self
    }

    pub fn is_equippable(&self) -> bool {
        self.slot.is_some()
    }

    /// Attack bonus contributed while worn.
    pub fn damage_bonus(&self) -> i32 {
        self.stats.damage.unwrap_or(0)
    }

    /// Defense bonus contributed while worn.
    pub fn defense_bonus(&self) -> i32 {
        self.stats.defense.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_hands_conflicts_with_single_hands_both_ways() {
        assert!(EquipSlot::TwoHands.conflicts_with(EquipSlot::MainHand));
        assert!(EquipSlot::TwoHands.conflicts_with(EquipSlot::OffHand));
        assert!(EquipSlot::MainHand.conflicts_with(EquipSlot::TwoHands));
        assert!(EquipSlot::OffHand.conflicts_with(EquipSlot::TwoHands));
        assert!(!EquipSlot::MainHand.conflicts_with(EquipSlot::OffHand));
    }

    #[test]
    fn same_slot_conflicts() {
        assert!(EquipSlot::Head.conflicts_with(EquipSlot::Head));
        assert!(!EquipSlot::Head.conflicts_with(EquipSlot::Torso));
    }

    #[test]
    fn missing_modifiers_count_as_zero() {
        let ring = Item::new("Ring", ItemKind::Accessory, 40).with_slot(EquipSlot::Finger);
        assert_eq!(ring.damage_bonus(), 0);
        assert_eq!(ring.defense_bonus(), 0);
        assert!(ring.is_equippable());
    }
}
