//! Interactive side of a fight: target prompts and narration.

use std::io::{self, BufRead, Write};

use game_core::{CombatEvent, CombatObserver, CombatOutcome, TargetCandidate, TargetSelector};

use crate::input::Prompt;

/// Asks the player for a target each turn and prints what happens.
///
/// The combat traits cannot fail, so the first I/O error is kept and
/// returned by [`CliCombatant::finish`].
pub struct CliCombatant<'p, R, W> {
    prompt: &'p mut Prompt<R, W>,
    error: Option<io::Error>,
}

impl<'p, R: BufRead, W: Write> CliCombatant<'p, R, W> {
    pub fn new(prompt: &'p mut Prompt<R, W>) -> Self {
        Self {
            prompt,
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn keep<T>(&mut self, result: io::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.error.get_or_insert(e);
                None
            }
        }
    }

    fn say(&mut self, text: String) {
        let result = self.prompt.say(text);
        self.keep(result);
    }
}

impl<R: BufRead, W: Write> TargetSelector for CliCombatant<'_, R, W> {
    /// A single answer per turn. Anything unusable is passed on as-is and
    /// the engine attacks the first monster instead.
    fn select_target(&mut self, _turn: u32, candidates: &[TargetCandidate<'_>]) -> Option<usize> {
        for (position, candidate) in candidates.iter().enumerate() {
            self.say(format!(
                "  {}) {} ({}/{} HP)",
                position + 1,
                candidate.name,
                candidate.current_health,
                candidate.max_health
            ));
        }
        let answer = self.prompt.ask("Attack which monster?");
        let answer = self.keep(answer).flatten()?;
        answer.parse::<usize>().ok()?.checked_sub(1)
    }

    fn name(&self) -> &'static str {
        "Player"
    }
}

impl<R: BufRead, W: Write> CombatObserver for CliCombatant<'_, R, W> {
    fn on_event(&mut self, event: &CombatEvent) {
        tracing::debug!("Combat event: {:?}", event);
        let line = match event {
            CombatEvent::TurnStarted { turn } => format!("--- Turn {} ---", turn),
            CombatEvent::TargetFallback { target, .. } => {
                format!("No valid target chosen, you attack {}.", target)
            }
            CombatEvent::PlayerAttacked {
                target,
                damage,
                remaining,
            } => format!(
                "You hit {} for {} damage ({} HP left).",
                target,
                damage,
                (*remaining).max(0)
            ),
            CombatEvent::MonsterDefeated { name } => format!("{} is defeated!", name),
            CombatEvent::MonsterAttacked {
                attacker,
                damage,
                player_health,
            } => format!(
                "{} hits you for {} damage ({} HP left).",
                attacker, damage, player_health
            ),
            CombatEvent::MonstersFled { turns } => {
                format!("After {} turns the monsters flee.", turns)
            }
            CombatEvent::CombatEnded { outcome } => match outcome {
                CombatOutcome::Victory => "Victory!".to_owned(),
                CombatOutcome::Defeat => "You have fallen.".to_owned(),
                CombatOutcome::Stalemate => "Stalemate: nobody wins.".to_owned(),
            },
        };
        self.say(line);
    }
}
