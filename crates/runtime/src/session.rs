//! The play session: the loaded character plus everything it acts on.
//!
//! [`Session`] replaces any notion of a global "current character". Every
//! operation that needs a character goes through it and fails with
//! [`RuntimeError::NoCharacter`] when none is loaded.
//!
//! Saves happen at fixed checkpoints only: on request, after resting and
//! after every mission, won or lost.

use game_core::{
    Character, CharacterClass, CombatController, CreationMode, GameConfig, Item, Mission, PcgRng,
    create_character,
};

use crate::error::{Result, RuntimeError};
use crate::mission::{MissionReport, resolve_mission};
use crate::oracle::ContentOracles;
use crate::repository::{CharacterRepository, MissionRepository};

pub struct Session {
    content: ContentOracles,
    characters: Box<dyn CharacterRepository>,
    missions: Box<dyn MissionRepository>,
    rng: PcgRng,
    seed: u64,
    current: Option<Character>,
}

impl Session {
    /// Start a session. Without a seed one is drawn from system entropy.
    pub fn new(
        content: ContentOracles,
        characters: Box<dyn CharacterRepository>,
        missions: Box<dyn MissionRepository>,
        seed: Option<u64>,
    ) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        tracing::info!("Session started with rng seed {}", seed);
        Self {
            content,
            characters,
            missions,
            rng: PcgRng::new(seed),
            seed,
            current: None,
        }
    }

    pub fn content(&self) -> &ContentOracles {
        &self.content
    }

    pub fn config(&self) -> &GameConfig {
        &self.content.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current(&self) -> Option<&Character> {
        self.current.as_ref()
    }

    fn character(&self) -> Result<&Character> {
        self.current.as_ref().ok_or(RuntimeError::NoCharacter)
    }

    fn character_mut(&mut self) -> Result<&mut Character> {
        self.current.as_mut().ok_or(RuntimeError::NoCharacter)
    }

    // ========================================================================
    // Character management
    // ========================================================================

    /// Create a character and make it current. Nothing is saved yet.
    pub fn create_character(
        &mut self,
        name: &str,
        class: CharacterClass,
        mode: CreationMode,
    ) -> Result<&Character> {
        let character = create_character(name, class, mode, &mut self.rng, &self.content.config)?;
        tracing::info!(
            "Created {} '{}' ({} attributes)",
            character.class,
            character.name,
            character.creation_mode
        );
        Ok(self.current.insert(character))
    }

    /// Save the current character.
    pub fn save_character(&self) -> Result<()> {
        let character = self.character()?;
        self.characters.save(character)?;
        tracing::info!("Saved character '{}'", character.name);
        Ok(())
    }

    /// Load a saved character and make it current.
    ///
    /// Dead characters load fine; they just cannot act.
    pub fn load_character(&mut self, name: &str) -> Result<&Character> {
        let character = self
            .characters
            .load(name)?
            .ok_or_else(|| RuntimeError::CharacterNotFound {
                name: name.to_owned(),
            })?;
        tracing::info!(
            "Loaded character '{}' ({} xp, {} health)",
            character.name,
            character.experience,
            character.current_health
        );
        Ok(self.current.insert(character))
    }

    pub fn list_characters(&self) -> Result<Vec<String>> {
        Ok(self.characters.list()?)
    }

    /// Delete a saved character. The current character stays loaded.
    pub fn delete_character(&mut self, name: &str) -> Result<bool> {
        let deleted = self.characters.delete(name)?;
        if deleted {
            tracing::info!("Deleted character '{}'", name);
        }
        Ok(deleted)
    }

    /// Drop the current character without saving.
    pub fn unload(&mut self) -> Option<Character> {
        self.current.take()
    }

    /// Restore the current character to full health and save.
    ///
    /// # Returns
    ///
    /// Health recovered. Zero means the character was already at full health
    /// and nothing was saved.
    pub fn rest(&mut self) -> Result<i32> {
        let healed = self.character_mut()?.rest()?;
        if healed > 0 {
            self.save_character()?;
        }
        Ok(healed)
    }

    // ========================================================================
    // Shop and inventory
    // ========================================================================

    /// Buy the shop item at `shop_index`.
    pub fn buy(&mut self, shop_index: usize) -> Result<Item> {
        let item = self
            .content
            .shop
            .get(shop_index)
            .cloned()
            .ok_or(RuntimeError::ShopItemNotFound { index: shop_index })?;
        let character = self.character_mut()?;
        game_core::buy(character, &item)?;
        tracing::debug!("'{}' bought {} for {}", character.name, item.name, item.price);
        Ok(item)
    }

    /// Sell the inventory item at `index`.
    ///
    /// # Returns
    ///
    /// The sold item and the gold received.
    pub fn sell(&mut self, index: usize) -> Result<(Item, u32)> {
        let divisor = self.content.config.sell_divisor;
        let character = self.character_mut()?;
        let (item, proceeds) = game_core::sell(character, index, divisor)?;
        tracing::debug!("'{}' sold {} for {}", character.name, item.name, proceeds);
        Ok((item, proceeds))
    }

    /// Wear the inventory item at `index`; returns the names of items taken off.
    pub fn equip(&mut self, index: usize) -> Result<Vec<String>> {
        Ok(self.character_mut()?.equip(index)?)
    }

    pub fn unequip(&mut self, index: usize) -> Result<()> {
        Ok(self.character_mut()?.unequip(index)?)
    }

    // ========================================================================
    // Missions
    // ========================================================================

    /// Every mission with its completion flag.
    pub fn missions(&self) -> Result<Vec<Mission>> {
        Ok(self.missions.load_all()?)
    }

    /// Missions the current character may start.
    pub fn available_missions(&self) -> Result<Vec<Mission>> {
        let character = self.character()?;
        character.ensure_alive()?;
        Ok(self
            .missions
            .load_all()?
            .into_iter()
            .filter(|m| m.is_available_for(character))
            .collect())
    }

    /// Play a mission with the current character.
    ///
    /// Afterwards the character is saved whatever the outcome and a won
    /// non-repeatable mission is marked completed. Both writes are attempted;
    /// the first failure is returned.
    pub fn run_mission<C>(&mut self, name: &str, controller: &mut C) -> Result<MissionReport>
    where
        C: CombatController + ?Sized,
    {
        let mission = self
            .missions
            .find(name)?
            .ok_or_else(|| RuntimeError::MissionNotFound {
                name: name.to_owned(),
            })?;

        let character = self.current.as_mut().ok_or(RuntimeError::NoCharacter)?;
        character.ensure_alive()?;
        if !mission.is_available_for(character) {
            return Err(RuntimeError::MissionUnavailable {
                name: mission.name,
                character: character.name.clone(),
            });
        }

        let outcome = resolve_mission(
            character,
            &mission,
            &self.content,
            &self.content.config,
            &mut self.rng,
            controller,
        )?;

        // The character is saved even when recording the mission fails.
        let saved = self.characters.save(character);
        let marked = match &outcome.effects.completed_mission {
            Some(completed) => self.missions.mark_completed(completed).map(|_| ()),
            None => Ok(()),
        };
        if outcome.effects.character_died() {
            tracing::info!("'{}' died during '{}'", character.name, mission.name);
        }
        if let Err(e) = &marked {
            tracing::warn!("Could not record '{}' as completed: {}", mission.name, e);
        }

        saved?;
        marked?;
        Ok(outcome)
    }
}
