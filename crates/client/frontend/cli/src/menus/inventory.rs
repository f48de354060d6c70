//! Inventory listing and equipment changes.

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::Item;

use crate::app::CliApp;
use crate::format;

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub(crate) fn inventory_menu(&mut self) -> Result<()> {
        loop {
            let Some(character) = self.loaded()? else {
                return Ok(());
            };
            if character.inventory.is_empty() {
                self.prompt.say("Your bag is empty.")?;
            }
            for item in &character.inventory {
                self.prompt.say(format!("- {}", format::item_line(item)))?;
            }

            self.prompt.say("1) Equip")?;
            self.prompt.say("2) Unequip")?;
            self.prompt.say("0) Back")?;
            match self.prompt.choose("Inventory:", 2)? {
                Some(0) => {
                    let unworn = character
                        .unworn_items()
                        .filter(|(_, item)| item.slot.is_some())
                        .collect::<Vec<_>>();
                    self.equip(&unworn)?;
                }
                Some(_) => {
                    let worn = character.worn_items().collect::<Vec<_>>();
                    self.unequip(&worn)?;
                }
                None => return Ok(()),
            }
        }
    }

    /// Let the player pick among `(inventory index, item)` pairs.
    ///
    /// Returns the inventory index and name of the pick.
    fn pick_item(
        &mut self,
        items: &[(usize, &Item)],
        question: &str,
    ) -> Result<Option<(usize, String)>> {
        for (position, (_, item)) in items.iter().enumerate() {
            self.prompt
                .say(format!("{:>2}) {}", position + 1, format::item_line(item)))?;
        }
        Ok(self.prompt.choose(question, items.len())?.map(|position| {
            let (index, item) = items[position];
            (index, item.name.clone())
        }))
    }

    fn equip(&mut self, candidates: &[(usize, &Item)]) -> Result<()> {
        if candidates.is_empty() {
            self.prompt.say("Nothing to equip.")?;
            return Ok(());
        }
        let Some((index, name)) = self.pick_item(candidates, "Equip which item?")? else {
            return Ok(());
        };
        let equipped = self.session.equip(index);
        if let Some(displaced) = self.check(equipped)? {
            self.prompt.say(format!("You equip {}.", name))?;
            if !displaced.is_empty() {
                self.prompt
                    .say(format!("You take off {}.", displaced.join(", ")))?;
            }
        }
        Ok(())
    }

    fn unequip(&mut self, candidates: &[(usize, &Item)]) -> Result<()> {
        if candidates.is_empty() {
            self.prompt.say("Nothing is equipped.")?;
            return Ok(());
        }
        let Some((index, name)) = self.pick_item(candidates, "Take off which item?")? else {
            return Ok(());
        };
        let unequipped = self.session.unequip(index);
        if self.check(unequipped)?.is_some() {
            self.prompt.say(format!("You take off {}.", name))?;
        }
        Ok(())
    }
}
