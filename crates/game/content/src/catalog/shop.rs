use game_core::Item;

/// Items on sale, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShopCatalog {
    items: Vec<Item>,
}

impl ShopCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items priced at or below `gold`.
    pub fn affordable(&self, gold: u32) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.price <= gold)
    }
}
