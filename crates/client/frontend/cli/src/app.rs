//! Main menu loop and shared helpers for the sub-menus.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use client_bootstrap::SessionSetup;
use game_core::{Character, ErrorSeverity, GameError};
use runtime::{RuntimeError, Session};

use crate::input::Prompt;

const MAIN_MENU: [&str; 12] = [
    "New character",
    "Load character",
    "List saved characters",
    "Delete a saved character",
    "Character sheet",
    "Missions",
    "Shop",
    "Inventory",
    "Rest",
    "Save",
    "Monster catalog",
    "Attack catalog",
];

/// Terminal front end driving one [`Session`].
pub struct CliApp<R, W> {
    pub(crate) session: Session,
    pub(crate) prompt: Prompt<R, W>,
    pub(crate) missions_per_page: usize,
}

impl CliApp<io::StdinLock<'static>, io::Stdout> {
    /// App reading stdin and writing stdout.
    pub fn stdio(setup: SessionSetup) -> Self {
        let prompt = Prompt::new(io::stdin().lock(), io::stdout());
        Self::new(setup.session, prompt, setup.config.missions_per_page)
    }
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(session: Session, prompt: Prompt<R, W>, missions_per_page: usize) -> Self {
        Self {
            session,
            prompt,
            missions_per_page: missions_per_page.max(1),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn prompt(&self) -> &Prompt<R, W> {
        &self.prompt
    }

    /// Run the main menu until the player quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        self.prompt.say("Welcome to Donjon.")?;
        loop {
            self.show_status()?;
            for (position, label) in MAIN_MENU.iter().enumerate() {
                self.prompt.say(format!("{:>2}) {}", position + 1, label))?;
            }
            self.prompt.say(" 0) Quit")?;

            let Some(choice) = self.prompt.choose("Choice:", MAIN_MENU.len())? else {
                break;
            };
            self.dispatch(choice)?;
        }
        self.quit()
    }

    fn dispatch(&mut self, choice: usize) -> Result<()> {
        match choice {
            0 => self.create_character(),
            1 => self.load_character(),
            2 => self.list_characters(),
            3 => self.delete_character(),
            4 => self.show_sheet(),
            5 => self.missions_menu(),
            6 => self.shop_menu(),
            7 => self.inventory_menu(),
            8 => self.rest(),
            9 => self.save(),
            10 => self.monster_catalog(),
            _ => self.attack_catalog(),
        }
    }

    fn show_status(&mut self) -> io::Result<()> {
        let status = match self.session.current() {
            Some(c) => format!(
                "[{} | {} | {}/{} HP | {} gold | {} xp]",
                c.name,
                c.class,
                c.current_health,
                c.max_health(),
                c.gold,
                c.experience
            ),
            None => "[no character loaded]".to_owned(),
        };
        self.prompt.say("")?;
        self.prompt.say(status)
    }

    fn quit(&mut self) -> Result<()> {
        let alive = self.session.current().is_some_and(|c| !c.is_dead());
        if alive && self.prompt.confirm("Save before quitting?")? {
            self.save()?;
        }
        tracing::info!("Player quit");
        self.prompt.say("Farewell.")?;
        Ok(())
    }

    // ========================================================================
    // Helpers shared by the menus
    // ========================================================================

    /// Tell the player what went wrong.
    pub(crate) fn report(&mut self, error: &RuntimeError) -> io::Result<()> {
        match error.severity() {
            ErrorSeverity::Internal => {
                tracing::warn!("{} ({})", error, error.error_code())
            }
            _ => tracing::debug!("Refused: {} ({})", error, error.error_code()),
        }
        self.prompt.say(format!("! {}", error))?;
        if error.is_dead_character() {
            self.prompt
                .say("Create a new character or load another one.")?;
        }
        Ok(())
    }

    /// Unwrap a session result, reporting the error and yielding `None` on failure.
    pub(crate) fn check<T>(&mut self, result: runtime::Result<T>) -> io::Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                self.report(&e)?;
                Ok(None)
            }
        }
    }

    /// Snapshot of the loaded character, or a notice when there is none.
    pub(crate) fn loaded(&mut self) -> io::Result<Option<Character>> {
        match self.session.current() {
            Some(character) => Ok(Some(character.clone())),
            None => {
                self.prompt.say("No character loaded.")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::{MonsterCatalog, ShopCatalog};
    use game_core::{
        Attributes, CharacterClass, CreationMode, Element, EquipSlot, GameConfig, Item, ItemKind,
        Mission, MonsterTemplate,
    };
    use runtime::{
        CharacterRepository, ContentOracles, InMemoryCharacterRepository,
        InMemoryMissionRepository,
    };

    type TestApp = CliApp<&'static [u8], Vec<u8>>;

    fn content(missions: Vec<Mission>) -> ContentOracles {
        let mut imp = MonsterTemplate::new("Fire Imp", 12);
        imp.element = Element::Fire;
        ContentOracles {
            config: GameConfig::default(),
            monsters: MonsterCatalog::new(vec![MonsterTemplate::new("Paper Rat", 1), imp]),
            missions,
            shop: ShopCatalog::new(vec![
                Item::new("Tower Shield", ItemKind::Shield, 40)
                    .with_slot(EquipSlot::OffHand)
                    .with_defense(3),
                Item::new("Crown", ItemKind::Accessory, 5_000).with_slot(EquipSlot::Head),
            ]),
            attacks: Default::default(),
        }
    }

    fn app_with(
        input: &'static str,
        characters: InMemoryCharacterRepository,
        missions: Vec<Mission>,
    ) -> TestApp {
        let session = Session::new(
            content(missions.clone()),
            Box::new(characters),
            Box::new(InMemoryMissionRepository::new(missions)),
            Some(3),
        );
        CliApp::new(session, Prompt::new(input.as_bytes(), Vec::new()), 10)
    }

    fn app(input: &'static str) -> TestApp {
        app_with(input, InMemoryCharacterRepository::new(), Vec::new())
    }

    fn printed(app: &TestApp) -> String {
        String::from_utf8_lossy(app.prompt().output()).into_owned()
    }

    #[test]
    fn create_save_and_quit() {
        let mut app = app("1\nAda\n1\n2\ny\n0\nn\n");
        app.run().unwrap();

        let out = printed(&app);
        assert!(out.contains("=== Ada the Warrior ==="));
        assert!(out.contains("Saved Ada."));
        assert!(out.ends_with("Farewell.\n"));
        assert_eq!(app.session().list_characters().unwrap(), vec!["Ada".to_string()]);
    }

    #[test]
    fn closed_input_quits_cleanly() {
        let mut app = app("");
        app.run().unwrap();
        assert!(printed(&app).ends_with("Farewell.\n"));
    }

    #[test]
    fn missions_are_paged_and_playable() {
        let missions = (1..=12)
            .map(|n| Mission::new(format!("Errand {n}"), "Paper Rat", 1).with_rewards(1, 1))
            .collect();
        let mut app = app_with(
            "1\nBo\n1\n1\nn\n6\nn\n2\ny\n0\nn\n",
            InMemoryCharacterRepository::new(),
            missions,
        );
        app.run().unwrap();

        let out = printed(&app);
        assert!(out.contains("Missions (page 1/2)"));
        assert!(out.contains("Missions (page 2/2)"));
        assert!(out.contains(" 2) Errand 12: Paper Rat x1 | 1 xp, 1 gold"));
        assert!(out.contains("Victory!"));
        assert!(out.contains("Mission 'Errand 12' completed."));

        let hero = app.session().current().unwrap();
        assert_eq!(hero.experience, 1);
        assert_eq!(hero.gold, 51);
        assert!(
            app.session()
                .missions()
                .unwrap()
                .iter()
                .any(|m| m.name == "Errand 12" && m.completed)
        );
    }

    #[test]
    fn dead_character_is_sent_away() {
        let characters = InMemoryCharacterRepository::new();
        let mut mort = Character::new(
            "Mort",
            CharacterClass::Rogue,
            Attributes::uniform(3),
            CreationMode::Random,
        );
        mort.current_health = -3;
        characters.save(&mort).unwrap();

        let mut app = app_with("2\n1\n6\n9\n0\n", characters, Vec::new());
        app.run().unwrap();

        let out = printed(&app);
        assert!(out.contains("Mort is dead."));
        assert_eq!(
            out.matches("Create a new character or load another one.")
                .count(),
            2
        );
        assert!(!out.contains("Save before quitting?"));
    }

    #[test]
    fn menus_need_a_character() {
        let mut app = app("6\n7\n1\n0\n0\n");
        app.run().unwrap();

        let out = printed(&app);
        assert!(out.contains("! no character is loaded"));
        assert!(out.contains("No character loaded."));
    }

    #[test]
    fn buy_then_equip_from_the_menus() {
        let mut app = app("1\nCid\n1\n2\nn\n7\n1\n1\n0\n8\n1\n1\n0\n0\nn\n");
        app.run().unwrap();

        let out = printed(&app);
        assert!(out.contains("You bought Tower Shield for 40 gold (10 left)."));
        assert!(out.contains("You equip Tower Shield."));

        let hero = app.session().current().unwrap();
        assert!(
            hero.worn_items()
                .any(|(_, item)| item.name == "Tower Shield")
        );
    }

    #[test]
    fn catalog_lookups() {
        let mut app = app("11\n2\nfire imp\n3\nfire\n3\nice\n0\n0\n");
        app.run().unwrap();

        let out = printed(&app);
        assert_eq!(out.matches("Fire Imp (Fire) 12 HP").count(), 2);
        assert!(out.contains("No monster with element 'ice'."));
    }
}
