//! Creating, loading and looking after characters.

use std::io::{BufRead, Write};

use anyhow::Result;
use game_core::{CharacterClass, CreationMode};
use strum::IntoEnumIterator;

use crate::app::CliApp;
use crate::format;

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub(crate) fn create_character(&mut self) -> Result<()> {
        let Some(name) = self.prompt.ask("Character name:")? else {
            return Ok(());
        };

        let classes: Vec<CharacterClass> = CharacterClass::iter().collect();
        for (position, class) in classes.iter().enumerate() {
            self.prompt.say(format!("{}) {}", position + 1, class))?;
        }
        let Some(class) = self.prompt.choose("Class:", classes.len())? else {
            return Ok(());
        };

        self.prompt.say("1) Random attributes")?;
        self.prompt.say("2) Optimized for the class")?;
        let Some(mode) = self.prompt.choose("Attributes:", 2)? else {
            return Ok(());
        };
        let mode = if mode == 0 {
            CreationMode::Random
        } else {
            CreationMode::Optimized
        };

        let created = self
            .session
            .create_character(&name, classes[class], mode)
            .map(format::character_sheet);
        let Some(sheet) = self.check(created)? else {
            return Ok(());
        };
        self.prompt.say(sheet)?;

        if self.prompt.confirm("Save this character now?")? {
            self.save()?;
        }
        Ok(())
    }

    /// Pick one of the saved names. `None` when there is nothing to pick.
    fn pick_saved(&mut self, question: &str) -> Result<Option<String>> {
        let listed = self.session.list_characters();
        let Some(mut names) = self.check(listed)? else {
            return Ok(None);
        };
        if names.is_empty() {
            self.prompt.say("No saved characters.")?;
            return Ok(None);
        }
        for (position, name) in names.iter().enumerate() {
            self.prompt.say(format!("{}) {}", position + 1, name))?;
        }
        Ok(self
            .prompt
            .choose(question, names.len())?
            .map(|index| names.swap_remove(index)))
    }

    pub(crate) fn load_character(&mut self) -> Result<()> {
        let Some(name) = self.pick_saved("Load which character?")? else {
            return Ok(());
        };
        let loaded = self.session.load_character(&name).map(format::character_sheet);
        if let Some(sheet) = self.check(loaded)? {
            self.prompt.say(format!("Loaded {}.", name))?;
            self.prompt.say(sheet)?;
        }
        Ok(())
    }

    pub(crate) fn list_characters(&mut self) -> Result<()> {
        let listed = self.session.list_characters();
        let Some(names) = self.check(listed)? else {
            return Ok(());
        };
        if names.is_empty() {
            self.prompt.say("No saved characters.")?;
        }
        for name in names {
            self.prompt.say(format!("- {}", name))?;
        }
        Ok(())
    }

    pub(crate) fn delete_character(&mut self) -> Result<()> {
        let Some(name) = self.pick_saved("Delete which character?")? else {
            return Ok(());
        };
        if !self.prompt.confirm(&format!("Delete {} for good?", name))? {
            return Ok(());
        }
        let deleted = self.session.delete_character(&name);
        if let Some(true) = self.check(deleted)? {
            self.prompt.say(format!("Deleted {}.", name))?;
        }
        Ok(())
    }

    pub(crate) fn show_sheet(&mut self) -> Result<()> {
        if let Some(character) = self.loaded()? {
            self.prompt.say(format::character_sheet(&character))?;
        }
        Ok(())
    }

    pub(crate) fn rest(&mut self) -> Result<()> {
        let rested = self.session.rest();
        match self.check(rested)? {
            Some(0) => self.prompt.say("You are already at full health.")?,
            Some(healed) => self
                .prompt
                .say(format!("You rest and recover {} health. Progress saved.", healed))?,
            None => {}
        }
        Ok(())
    }

    pub(crate) fn save(&mut self) -> Result<()> {
        let saved = self.session.save_character();
        if self.check(saved)?.is_some()
            && let Some(character) = self.session.current()
        {
            let line = format!("Saved {}.", character.name);
            self.prompt.say(line)?;
        }
        Ok(())
    }
}
