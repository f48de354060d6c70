//! The six base attributes of a character.

/// One of the six base attributes.
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
pub enum Attribute {
    /// Raw physical power. Feeds attack.
    Force,
    Dexterity,
    /// Toughness. Feeds health and defense.
    Endurance,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Force,
        Attribute::Dexterity,
        Attribute::Endurance,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];
}

/// Base attribute values of a character.
///
/// Values are stored as `i32` so derived formulas never have to cast. Creation
/// keeps each value inside the configured `[attribute_min, attribute_max]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub force: i32,
    pub dexterity: i32,
    pub endurance: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl Attributes {
    /// Every attribute set to `value`.
    pub fn uniform(value: i32) -> Self {
        Self {
            force: value,
            dexterity: value,
            endurance: value,
            intelligence: value,
            wisdom: value,
            charisma: value,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Force => self.force,
            Attribute::Dexterity => self.dexterity,
            Attribute::Endurance => self.endurance,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Force => &mut self.force,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Charisma => &mut self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        *self.get_mut(attribute) = value;
    }

    /// Sum of all six values.
    pub fn total(&self) -> i32 {
        Attribute::ALL.iter().map(|&a| self.get(a)).sum()
    }

    /// Iterate `(attribute, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.iter().map(move |&a| (a, self.get(a)))
    }
}
