//! Mission board and the fights behind it.

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::{CombatOutcome, Mission};

use crate::app::CliApp;
use crate::combat::CliCombatant;
use crate::format;
use crate::page::Page;

impl<R: BufRead, W: Write> CliApp<R, W> {
    /// Page through the missions open to the current character.
    pub(crate) fn missions_menu(&mut self) -> Result<()> {
        let available = self.session.available_missions();
        let Some(missions) = self.check(available)? else {
            return Ok(());
        };
        if missions.is_empty() {
            self.prompt.say("No missions available right now.")?;
            return Ok(());
        }

        let mut page_number = 0;
        loop {
            let page = Page::of(&missions, page_number, self.missions_per_page);
            self.prompt
                .say(format!("Missions (page {}/{})", page.number + 1, page.count))?;
            for (position, mission) in page.items.iter().enumerate() {
                self.prompt
                    .say(format!("{:>2}) {}", position + 1, format::mission_line(mission)))?;
            }

            let mut hints = Vec::new();
            if page.has_previous() {
                hints.push("p) previous");
            }
            if page.has_next() {
                hints.push("n) next");
            }
            hints.push("0) back");
            self.prompt.say(hints.join("  "))?;

            let Some(answer) = self.prompt.ask("Mission:")? else {
                return Ok(());
            };
            match answer.to_lowercase().as_str() {
                "" | "0" => return Ok(()),
                "n" if page.has_next() => page_number += 1,
                "p" if page.has_previous() => page_number -= 1,
                other => match other.parse::<usize>() {
                    Ok(n) if (1..=page.items.len()).contains(&n) => {
                        let mission = page.items[n - 1].clone();
                        return self.play_mission(&mission);
                    }
                    _ => self.prompt.say("Unknown choice.")?,
                },
            }
        }
    }

    fn play_mission(&mut self, mission: &Mission) -> Result<()> {
        if !mission.description.is_empty() {
            self.prompt.say(&mission.description)?;
        }
        self.prompt.say(format!(
            "You will face {} x {}.",
            mission.monster_count, mission.monster_name
        ))?;
        if !self.prompt.confirm("Enter the fight?")? {
            return Ok(());
        }

        let mut combatant = CliCombatant::new(&mut self.prompt);
        let played = self.session.run_mission(&mission.name, &mut combatant);
        combatant.finish()?;
        let Some(played) = self.check(played)? else {
            return Ok(());
        };

        let effects = &played.effects;
        match effects.outcome {
            CombatOutcome::Victory => {
                self.prompt.say(format!(
                    "You earn {} experience and {} gold.",
                    effects.experience_gained, effects.gold_gained
                ))?;
                if let Some(name) = &effects.completed_mission {
                    self.prompt.say(format!("Mission '{}' completed.", name))?;
                }
            }
            CombatOutcome::Defeat => {}
            CombatOutcome::Stalemate => self.prompt.say("No reward this time.")?,
        }

        if let Some(character) = self.session.current() {
            let line = if character.is_dead() {
                format!(
                    "{} has died. Create a new character or load another one.",
                    character.name
                )
            } else {
                format!(
                    "Health {}/{}. Progress saved.",
                    character.current_health,
                    character.max_health()
                )
            };
            self.prompt.say(line)?;
        }
        Ok(())
    }
}
