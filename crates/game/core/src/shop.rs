//! Buying and selling.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Character, CharacterError, Item};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("{item} costs {price} gold but only {available} is available")]
    InsufficientFunds {
        item: String,
        price: u32,
        available: u32,
    },

    #[error("{item} cannot be sold")]
    NotForSale { item: String },

    #[error(transparent)]
    Character(#[from] CharacterError),
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } | Self::NotForSale { .. } => ErrorSeverity::Recoverable,
            Self::Character(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "SHOP_INSUFFICIENT_FUNDS",
            Self::NotForSale { .. } => "SHOP_NOT_FOR_SALE",
            Self::Character(inner) => inner.error_code(),
        }
    }
}

/// Pay for `item` and add an unworn copy to the inventory.
pub fn buy(character: &mut Character, item: &Item) -> Result<(), ShopError> {
    character.ensure_alive()?;
    if item.price > character.gold {
        return Err(ShopError::InsufficientFunds {
            item: item.name.clone(),
            price: item.price,
            available: character.gold,
        });
    }

    character.gold -= item.price;
    let mut bought = item.clone();
    bought.worn = false;
    character.inventory.push(bought);
    Ok(())
}

/// Sell the item at `index` for `price / sell_divisor` gold.
///
/// A worn item is taken off before it leaves the inventory.
///
/// # Returns
///
/// The sold item and the gold received.
pub fn sell(
    character: &mut Character,
    index: usize,
    sell_divisor: u32,
) -> Result<(Item, u32), ShopError> {
    character.ensure_alive()?;
    let item = character.item(index)?;
    if item.price == 0 {
        return Err(ShopError::NotForSale {
            item: item.name.clone(),
        });
    }

    let proceeds = item.price / sell_divisor.max(1);
    let mut sold = character.inventory.remove(index);
    sold.worn = false;
    character.gold = character.gold.saturating_add(proceeds);
    Ok((sold, proceeds))
}
