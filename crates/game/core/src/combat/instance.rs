//! Per-fight monster copies.

use crate::env::MonsterOracle;
use crate::state::MonsterTemplate;

use super::CombatSetupError;

/// One monster taking part in a fight.
///
/// Created fresh for every attempt and dropped afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterInstance {
    /// Name of the template this copy was made from.
    pub template: String,
    /// Template name plus a 1-based ordinal, e.g. `"Goblin 2"`.
    pub display_name: String,
    pub max_health: i32,
    pub current_health: i32,
    pub alive: bool,
}

impl MonsterInstance {
    pub fn new(template: &MonsterTemplate, ordinal: u32) -> Self {
        Self {
            template: template.name.clone(),
            display_name: format!("{} {}", template.name, ordinal),
            max_health: template.max_health,
            current_health: template.max_health,
            alive: true,
        }
    }

    /// Subtract `damage` and mark the instance dead at zero or below.
    ///
    /// # Returns
    ///
    /// `true` if this hit killed it.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        self.current_health -= damage;
        if self.alive && self.current_health <= 0 {
            self.alive = false;
            return true;
        }
        false
    }
}

/// Build `count` independent copies of `template`.
pub fn instantiate(template: &MonsterTemplate, count: u32) -> Vec<MonsterInstance> {
    (1..=count)
        .map(|ordinal| MonsterInstance::new(template, ordinal))
        .collect()
}

/// Look up `name` and build an encounter of `count` monsters.
///
/// # Errors
///
/// - [`CombatSetupError::MonsterNotFound`] if the oracle has no such template
/// - [`CombatSetupError::NoMonsters`] if `count` is zero
pub fn spawn_encounter(
    monsters: &(impl MonsterOracle + ?Sized),
    name: &str,
    count: u32,
) -> Result<Vec<MonsterInstance>, CombatSetupError> {
    let template = monsters
        .monster(name)
        .ok_or_else(|| CombatSetupError::MonsterNotFound {
            name: name.to_owned(),
        })?;
    if count == 0 {
        return Err(CombatSetupError::NoMonsters {
            name: name.to_owned(),
        });
    }
    Ok(instantiate(template, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_are_numbered_and_independent() {
        let goblin = MonsterTemplate::new("Goblin", 8);
        let mut pack = instantiate(&goblin, 3);
        let names: Vec<_> = pack.iter().map(|m| m.display_name.as_str()).collect();
        assert_eq!(names, ["Goblin 1", "Goblin 2", "Goblin 3"]);

        assert!(pack[1].take_damage(9));
        assert!(!pack[1].alive);
        assert!(pack[0].alive && pack[2].alive);
        assert_eq!(pack[0].current_health, 8);
        assert_eq!(goblin.max_health, 8);
    }

    #[test]
    fn take_damage_reports_kill_once() {
        let mut rat = MonsterInstance::new(&MonsterTemplate::new("Rat", 3), 1);
        assert!(!rat.take_damage(2));
        assert!(rat.take_damage(1));
        assert!(!rat.take_damage(1));
        assert_eq!(rat.current_health, -1);
    }

    #[test]
    fn spawn_encounter_rejects_unknown_and_empty() {
        let catalog = vec![MonsterTemplate::new("Wolf", 10)];
        assert_eq!(
            spawn_encounter(&catalog, "Dragon", 1),
            Err(CombatSetupError::MonsterNotFound {
                name: "Dragon".into()
            })
        );
        assert!(matches!(
            spawn_encounter(&catalog, "Wolf", 0),
            Err(CombatSetupError::NoMonsters { .. })
        ));
        assert_eq!(spawn_encounter(&catalog, "Wolf", 2).unwrap().len(), 2);
    }
}
