//! Mission records.

use super::{Character, CharacterClass};

/// A quest: fight `monster_count` copies of one monster for a reward.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// `None` opens the mission to every class.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_class: Option<CharacterClass>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_xp: u32,
    pub reward_xp: u32,
    pub reward_gold: u32,
    pub monster_name: String,
    pub monster_count: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub repeatable: bool,
    /// Set once a non-repeatable mission has been won.
    #[cfg_attr(feature = "serde", serde(default))]
    pub completed: bool,
}

impl Mission {
    pub fn new(
        name: impl Into<String>,
        monster_name: impl Into<String>,
        monster_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            required_class: None,
            required_xp: 0,
            reward_xp: 0,
            reward_gold: 0,
            monster_name: monster_name.into(),
            monster_count,
            repeatable: false,
            completed: false,
        }
    }

    pub fn with_rewards(mut self, reward_xp: u32, reward_gold: u32) -> Self {
        self.reward_xp = reward_xp;
        self.reward_gold = reward_gold;
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Whether `character` may start this mission.
    ///
    /// Class must match (or be open), experience must reach the threshold,
    /// and a won non-repeatable mission never comes back.
    pub fn is_available_for(&self, character: &Character) -> bool {
        let class_ok = self
            .required_class
            .is_none_or(|class| class == character.class);
        let xp_ok = character.experience >= self.required_xp;
        let open = !self.completed || self.repeatable;
        class_ok && xp_ok && open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Attributes, CreationMode};

    fn rogue(experience: u32) -> Character {
        let mut c = Character::new(
            "Vex",
            CharacterClass::Rogue,
            Attributes::uniform(3),
            CreationMode::Random,
        );
        c.experience = experience;
        c
    }

    #[test]
    fn class_and_experience_gate_availability() {
        let mut mission = Mission::new("Crypt", "Skeleton", 2);
        mission.required_class = Some(CharacterClass::Mage);
        assert!(!mission.is_available_for(&rogue(100)));

        mission.required_class = Some(CharacterClass::Rogue);
        mission.required_xp = 50;
        assert!(!mission.is_available_for(&rogue(49)));
        assert!(mission.is_available_for(&rogue(50)));
    }

    #[test]
    fn completed_missions_stay_hidden_unless_repeatable() {
        let mut mission = Mission::new("Rats", "Rat", 3);
        mission.completed = true;
        assert!(!mission.is_available_for(&rogue(0)));

        mission.repeatable = true;
        assert!(mission.is_available_for(&rogue(0)));
    }
}
