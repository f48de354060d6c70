//! Running one mission from start to finish.
//!
//! Stat derivation, instantiation, the turn loop and outcome application all
//! live in `game-core`; this module strings them together. Persistence is the
//! caller's job (see [`crate::Session::run_mission`]).

use game_core::{
    Character, CombatController, CombatEngine, CombatReport, GameConfig, Mission, MonsterOracle,
    OutcomeEffects, RngOracle, apply_outcome, spawn_encounter,
};

use crate::error::Result;

/// Result of a resolved mission.
#[derive(Clone, Debug)]
pub struct MissionReport {
    pub mission: Mission,
    pub report: CombatReport,
    pub effects: OutcomeEffects,
}

/// Fight `mission` with `character` and apply the outcome to it.
///
/// # Errors
///
/// Fails before touching the character if it is dead, or if the mission's
/// monster is unknown or the encounter is empty.
pub fn resolve_mission<C>(
    character: &mut Character,
    mission: &Mission,
    monsters: &(impl MonsterOracle + ?Sized),
    config: &GameConfig,
    rng: &mut dyn RngOracle,
    controller: &mut C,
) -> Result<MissionReport>
where
    C: CombatController + ?Sized,
{
    character.ensure_alive()?;
    let encounter = spawn_encounter(monsters, &mission.monster_name, mission.monster_count)?;
    let profile = character.profile();

    tracing::info!(
        "Mission '{}' started: {} vs {}x {} (attack {}, defense {}, health {})",
        mission.name,
        character.name,
        mission.monster_count,
        mission.monster_name,
        profile.attack,
        profile.defense,
        character.current_health
    );

    let engine = CombatEngine::new(
        profile,
        character.current_health,
        encounter,
        config.turn_limit,
    )?;
    let report = engine.run(rng, controller);
    let effects = apply_outcome(&report, mission, character);

    tracing::info!(
        "Mission '{}' ended in {} after {} turns (health {}, +{} xp, +{} gold)",
        mission.name,
        report.outcome,
        report.turns,
        report.final_health,
        effects.experience_gained,
        effects.gold_gained
    );

    Ok(MissionReport {
        mission: mission.clone(),
        report,
        effects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        Attributes, CharacterClass, CombatOutcome, Controller, CreationMode, FirstAliveTarget,
        MonsterTemplate, SequenceRng,
    };

    use crate::error::RuntimeError;

    fn fighter() -> Character {
        Character::new(
            "Kara",
            CharacterClass::Warrior,
            Attributes::uniform(3),
            CreationMode::Random,
        )
    }

    #[test]
    fn unknown_monster_fails_before_any_change() {
        let mut hero = fighter();
        let before = hero.clone();
        let mission = Mission::new("Hunt", "Chimera", 1).with_rewards(10, 10);
        let monsters: Vec<MonsterTemplate> = Vec::new();
        let mut rng = SequenceRng::constant(0);

        let err = resolve_mission(
            &mut hero,
            &mission,
            &monsters,
            &GameConfig::default(),
            &mut rng,
            &mut Controller::new(FirstAliveTarget, ()),
        )
        .unwrap_err();

        assert!(matches!(err, RuntimeError::CombatSetup(_)));
        assert_eq!(hero, before);
    }

    #[test]
    fn victory_updates_the_character() {
        let mut hero = fighter();
        let mission = Mission::new("Cellar", "Rat", 2).with_rewards(10, 4);
        let monsters = vec![MonsterTemplate::new("Rat", 3)];
        let mut rng = SequenceRng::constant(0);

        let outcome = resolve_mission(
            &mut hero,
            &mission,
            &monsters,
            &GameConfig::default(),
            &mut rng,
            &mut Controller::new(FirstAliveTarget, ()),
        )
        .unwrap();

        assert_eq!(outcome.report.outcome, CombatOutcome::Victory);
        assert_eq!(hero.experience, 10);
        assert_eq!(hero.gold, 4);
        assert_eq!(hero.current_health, outcome.report.final_health);
        assert_eq!(outcome.effects.completed_mission.as_deref(), Some("Cellar"));
    }

    #[test]
    fn dead_character_cannot_start() {
        let mut hero = fighter();
        hero.current_health = 0;
        let mission = Mission::new("Cellar", "Rat", 1);
        let monsters = vec![MonsterTemplate::new("Rat", 3)];
        let mut rng = SequenceRng::constant(0);

        let err = resolve_mission(
            &mut hero,
            &mission,
            &monsters,
            &GameConfig::default(),
            &mut rng,
            &mut Controller::new(FirstAliveTarget, ()),
        )
        .unwrap_err();
        assert!(err.is_dead_character());
    }
}
