//! In-memory catalogs with the lookups the menus need.

mod attacks;
mod monsters;
mod shop;

pub use attacks::AttackCatalog;
pub use monsters::MonsterCatalog;
pub use shop::ShopCatalog;

/// Case-insensitive name comparison used by every catalog search.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
