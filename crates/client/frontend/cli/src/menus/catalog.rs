//! Read-only browsing of the monster and attack catalogs.

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::{AttackKind, Element};
use strum::IntoEnumIterator;

use crate::app::CliApp;
use crate::format;

fn names<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    fn browse_options(&mut self, filter: &str) -> Result<Option<usize>> {
        self.prompt.say("1) List all")?;
        self.prompt.say("2) Find by name")?;
        self.prompt.say(format!("3) Filter by {}", filter))?;
        self.prompt.say("0) Back")?;
        Ok(self.prompt.choose("Catalog:", 3)?)
    }

    pub(crate) fn monster_catalog(&mut self) -> Result<()> {
        while let Some(choice) = self.browse_options("element")? {
            let lines: Vec<String> = match choice {
                0 => {
                    let monsters = self.session.content().monsters.all();
                    monsters.iter().map(format::monster_line).collect()
                }
                1 => {
                    let Some(name) = self.prompt.ask("Monster name:")? else {
                        continue;
                    };
                    match self.session.content().monsters.search(&name) {
                        Some(monster) => vec![format::monster_line(monster)],
                        None => vec![format!("No monster named '{}'.", name)],
                    }
                }
                _ => {
                    self.prompt
                        .say(format!("Elements: {}", names(Element::iter())))?;
                    let Some(element) = self.prompt.ask("Element:")? else {
                        continue;
                    };
                    let found = self.session.content().monsters.by_element_name(&element);
                    if found.is_empty() {
                        vec![format!("No monster with element '{}'.", element)]
                    } else {
                        found.into_iter().map(format::monster_line).collect()
                    }
                }
            };
            if lines.is_empty() {
                self.prompt.say("The catalog is empty.")?;
            }
            for line in lines {
                self.prompt.say(line)?;
            }
        }
        Ok(())
    }

    pub(crate) fn attack_catalog(&mut self) -> Result<()> {
        while let Some(choice) = self.browse_options("kind")? {
            let lines: Vec<String> = match choice {
                0 => {
                    let attacks = self.session.content().attacks.all();
                    attacks.iter().map(format::attack_line).collect()
                }
                1 => {
                    let Some(name) = self.prompt.ask("Attack name:")? else {
                        continue;
                    };
                    match self.session.content().attacks.search(&name) {
                        Some(attack) => vec![format::attack_line(attack)],
                        None => vec![format!("No attack named '{}'.", name)],
                    }
                }
                _ => {
                    self.prompt
                        .say(format!("Kinds: {}", names(AttackKind::iter())))?;
                    let Some(kind) = self.prompt.ask("Kind:")? else {
                        continue;
                    };
                    let found = self.session.content().attacks.by_kind_name(&kind);
                    if found.is_empty() {
                        vec![format!("No attack of kind '{}'.", kind)]
                    } else {
                        found.into_iter().map(format::attack_line).collect()
                    }
                }
            };
            if lines.is_empty() {
                self.prompt.say("The catalog is empty.")?;
            }
            for line in lines {
                self.prompt.say(line)?;
            }
        }
        Ok(())
    }
}
