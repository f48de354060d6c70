//! Narrative events emitted while a fight resolves.

use super::CombatOutcome;

/// Something that happened during a fight, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    TurnStarted {
        turn: u32,
    },
    /// The selector gave no usable answer; the first alive monster was used.
    TargetFallback {
        requested: Option<usize>,
        target: String,
    },
    PlayerAttacked {
        target: String,
        damage: i32,
        remaining: i32,
    },
    MonsterDefeated {
        name: String,
    },
    MonsterAttacked {
        attacker: String,
        damage: i32,
        player_health: i32,
    },
    /// Turn limit reached with both sides standing.
    MonstersFled {
        turns: u32,
    },
    CombatEnded {
        outcome: CombatOutcome,
    },
}

/// Receives events as the fight unfolds.
///
/// The default implementation ignores everything.
pub trait CombatObserver {
    fn on_event(&mut self, _event: &CombatEvent) {}
}

/// Discards every event.
impl CombatObserver for () {}

/// Collects every event.
impl CombatObserver for Vec<CombatEvent> {
    fn on_event(&mut self, event: &CombatEvent) {
        self.push(event.clone());
    }
}
