//! Monster templates as stored in the catalog.

/// Elemental affinity of a monster or attack.
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
pub enum Element {
    Neutral,
    Fire,
    Nature,
    Water,
    Electricity,
    Light,
    Darkness,
    Good,
    Evil,
    Earth,
}

/// Immutable description of a monster kind.
///
/// Combat never touches a template directly; each fight works on
/// [`MonsterInstance`](crate::combat::MonsterInstance) copies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub max_health: i32,
    pub initiative: i32,
    pub element: Element,
    pub primary_attack: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary_attack: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tertiary_attack: Option<String>,
    pub gold_reward: u32,
    pub xp_reward: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub capturable: bool,
}

impl MonsterTemplate {
    /// Minimal template for tests and ad-hoc encounters.
    pub fn new(name: impl Into<String>, max_health: i32) -> Self {
        Self {
            name: name.into(),
            max_health,
            initiative: 0,
            element: Element::Neutral,
            primary_attack: String::from("Strike"),
            secondary_attack: None,
            tertiary_attack: None,
            gold_reward: 0,
            xp_reward: 0,
            capturable: false,
        }
    }

    /// Attack names in slot order, skipping empty slots.
    pub fn attacks(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.primary_attack.as_str())
            .chain(self.secondary_attack.as_deref())
            .chain(self.tertiary_attack.as_deref())
    }
}
