//! Character creation.
//!
//! Attributes start at the configured minimum and the remaining points are
//! handed out one at a time to random attributes that still have room.
//! Optimized creation first maxes out the class's two primary attributes.

use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    Attribute, Attributes, Character, CharacterClass, CreationMode, EquipSlot, Item, ItemKind,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CreationError {
    #[error("character name cannot be empty")]
    EmptyName,

    #[error("{points} attribute points cannot fill 6 attributes between {min} and {max}")]
    InvalidPointBudget { points: u32, min: u8, max: u8 },
}

impl GameError for CreationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyName => ErrorSeverity::Validation,
            Self::InvalidPointBudget { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "CREATION_EMPTY_NAME",
            Self::InvalidPointBudget { .. } => "CREATION_INVALID_POINT_BUDGET",
        }
    }
}

/// Items every new character starts with, already worn.
pub fn starter_kit() -> Vec<Item> {
    vec![
        Item::new("Clothes", ItemKind::Armor, 0)
            .with_slot(EquipSlot::Torso)
            .with_defense(1)
            .with_description("Plain travelling clothes.")
            .worn(),
        Item::new("Dagger", ItemKind::Weapon, 15)
            .with_slot(EquipSlot::MainHand)
            .with_damage(3)
            .with_accuracy(85)
            .with_description("A short blade, better than bare hands.")
            .worn(),
    ]
}

/// Roll attributes for `class`.
///
/// # Errors
///
/// [`CreationError::InvalidPointBudget`] when `config.attribute_points` is
/// below `6 × min` or above `6 × max`.
pub fn roll_attributes(
    class: CharacterClass,
    mode: CreationMode,
    rng: &mut (impl RngOracle + ?Sized),
    config: &GameConfig,
) -> Result<Attributes, CreationError> {
    let min = i32::from(config.attribute_min);
    let max = i32::from(config.attribute_max);
    let points = config.attribute_points as i32;
    let count = Attribute::ALL.len() as i32;
    if min > max || points < min * count || points > max * count {
        return Err(CreationError::InvalidPointBudget {
            points: config.attribute_points,
            min: config.attribute_min,
            max: config.attribute_max,
        });
    }

    let mut attributes = Attributes::uniform(min);
    if mode == CreationMode::Optimized {
        for primary in class.primaries() {
            attributes.set(primary, max);
        }
    }

    let mut remaining = (points - attributes.total()).max(0);
    while remaining > 0 {
        let open: Vec<Attribute> = Attribute::ALL
            .into_iter()
            .filter(|&a| attributes.get(a) < max)
            .collect();
        if open.is_empty() {
            break;
        }
        let pick = open[rng.index(open.len())];
        *attributes.get_mut(pick) += 1;
        remaining -= 1;
    }

    Ok(attributes)
}

/// Create a fresh character with the starter kit, starting gold and full health.
pub fn create_character(
    name: &str,
    class: CharacterClass,
    mode: CreationMode,
    rng: &mut (impl RngOracle + ?Sized),
    config: &GameConfig,
) -> Result<Character, CreationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CreationError::EmptyName);
    }

    let attributes = roll_attributes(class, mode, rng, config)?;
    let mut character = Character::new(name, class, attributes, mode);
    character.inventory = starter_kit();
    character.gold = config.starting_gold;
    character.current_health = character.max_health();
    Ok(character)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, SequenceRng};

    #[test]
    fn random_attributes_respect_budget_and_bounds() {
        let config = GameConfig::default();
        for seed in 0..100 {
            let mut rng = PcgRng::new(seed);
            let attrs =
                roll_attributes(CharacterClass::Rogue, CreationMode::Random, &mut rng, &config)
                    .unwrap();
            assert_eq!(attrs.total(), 18);
            assert!(attrs.iter().all(|(_, v)| (1..=5).contains(&v)));
        }
    }

    #[test]
    fn optimized_maxes_class_primaries() {
        let config = GameConfig::default();
        let mut rng = PcgRng::new(3);
        let attrs =
            roll_attributes(CharacterClass::Mage, CreationMode::Optimized, &mut rng, &config)
                .unwrap();
        assert_eq!(attrs.intelligence, 5);
        assert_eq!(attrs.charisma, 5);
        assert_eq!(attrs.total(), 18);
    }

    #[test]
    fn full_attributes_stop_receiving_points() {
        let config = GameConfig::default();
        // Always pick the first open attribute.
        let mut rng = SequenceRng::constant(0);
        let attrs =
            roll_attributes(CharacterClass::Warrior, CreationMode::Random, &mut rng, &config)
                .unwrap();
        assert_eq!(attrs.force, 5);
        assert_eq!(attrs.dexterity, 5);
        assert_eq!(attrs.endurance, 5);
        assert_eq!(attrs.intelligence, 1);
    }

    #[test]
    fn impossible_budget_is_rejected() {
        let config = GameConfig {
            attribute_points: 40,
            ..GameConfig::default()
        };
        let mut rng = PcgRng::new(1);
        assert!(matches!(
            roll_attributes(CharacterClass::Druid, CreationMode::Random, &mut rng, &config),
            Err(CreationError::InvalidPointBudget { points: 40, .. })
        ));
    }

    #[test]
    fn new_character_gets_kit_gold_and_full_health() {
        let config = GameConfig::default();
        let mut rng = PcgRng::new(11);
        let hero = create_character(
            "  Brann ",
            CharacterClass::Barbarian,
            CreationMode::Optimized,
            &mut rng,
            &config,
        )
        .unwrap();

        assert_eq!(hero.name, "Brann");
        assert_eq!(hero.gold, 50);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.attributes.endurance, 5);
        assert_eq!(hero.current_health, 25);
        assert_eq!(hero.worn_items().count(), 2);

        let profile = hero.profile();
        assert_eq!(profile.attack, 5 + 5 + 3);
        assert_eq!(profile.defense, 2 + 2 + 1);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut rng = PcgRng::new(0);
        assert_eq!(
            create_character(
                "   ",
                CharacterClass::Mage,
                CreationMode::Random,
                &mut rng,
                &GameConfig::default()
            ),
            Err(CreationError::EmptyName)
        );
    }
}
