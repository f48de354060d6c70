//! Attack catalog entries.
//!
//! Monsters reference attacks by name. Combat does not read these yet; they
//! back the catalog browser.

use super::Element;

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
pub enum AttackKind {
    Physical,
    Magical,
    Ranged,
    Healing,
    Buff,
    Control,
    Poison,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackDefinition {
    pub name: String,
    pub kind: AttackKind,
    pub damage: i32,
    /// Hit chance in percent.
    pub accuracy: i32,
    pub element: Element,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Free-form secondary effect ("stun 1 turn", "poison 2/turn").
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<String>,
}
