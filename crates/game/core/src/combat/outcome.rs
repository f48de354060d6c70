//! Applying a finished fight to the character record.

use crate::state::{Character, Mission};

use super::{CombatOutcome, CombatReport};

/// What changed on the character, plus the mission update the caller owes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeEffects {
    pub outcome: CombatOutcome,
    pub experience_gained: u32,
    pub gold_gained: u32,
    /// Name of a mission that must now be marked completed.
    pub completed_mission: Option<String>,
    pub final_health: i32,
}

impl OutcomeEffects {
    pub fn character_died(&self) -> bool {
        self.final_health <= 0
    }
}

/// Write the result of `report` into `character`.
///
/// Health is always carried over, even below zero. Only a victory grants the
/// mission rewards, and only a victory on a non-repeatable mission asks for
/// it to be marked completed. Defeat and stalemate grant nothing.
pub fn apply_outcome(
    report: &CombatReport,
    mission: &Mission,
    character: &mut Character,
) -> OutcomeEffects {
    character.current_health = report.final_health;

    let mut effects = OutcomeEffects {
        outcome: report.outcome,
        experience_gained: 0,
        gold_gained: 0,
        completed_mission: None,
        final_health: report.final_health,
    };

    if report.outcome == CombatOutcome::Victory {
        character.experience = character.experience.saturating_add(mission.reward_xp);
        character.gold = character.gold.saturating_add(mission.reward_gold);
        effects.experience_gained = mission.reward_xp;
        effects.gold_gained = mission.reward_gold;
        if !mission.repeatable {
            effects.completed_mission = Some(mission.name.clone());
        }
    }

    effects
}
