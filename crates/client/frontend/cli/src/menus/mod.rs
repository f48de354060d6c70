//! Sub-menus of [`crate::CliApp`], one file per area.

mod catalog;
mod character;
mod inventory;
mod missions;
mod shop;
