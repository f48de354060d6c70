//! Line-oriented terminal front end for Donjon.
//!
//! The front end owns a [`runtime::Session`] and drives it from numbered
//! menus read line by line, so it works the same over a terminal, a pipe or
//! a scripted test input.
//!
//! # Architecture
//!
//! - [`CliApp`] runs the main menu and dispatches to the sub-menus
//! - [`Prompt`] wraps the input/output pair
//! - [`CliCombatant`] asks for targets and narrates the fight
mod app;
mod combat;
mod format;
mod input;
pub mod logging;
mod menus;
mod page;

pub use app::CliApp;
pub use combat::CliCombatant;
pub use input::Prompt;
pub use page::Page;
