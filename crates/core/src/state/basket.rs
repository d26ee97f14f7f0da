//! The shopper's basket.

use serde::Serialize;

use crate::types::{CartId, Price, Product};

/// Source of basket entry ids.
///
/// Implementations must never hand out the same id twice for the lifetime of
/// one shopper's store.
pub trait CartIdSource: Send {
    /// Produce the next unused id.
    fn next_cart_id(&mut self) -> CartId;
}

/// Monotonic counter starting at 1.
#[derive(Debug, Default, Clone)]
pub struct SequentialCartIds {
    last: u64,
}

impl CartIdSource for SequentialCartIds {
    fn next_cart_id(&mut self) -> CartId {
        self.last += 1;
        CartId::new(self.last)
    }
}

/// One entry in the basket: a copy of the product plus its own id.
///
/// The same product added twice yields two entries with different `cart_id`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasketItem {
    pub cart_id: CartId,
    #[serde(flatten)]
    pub product: Product,
}

impl BasketItem {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.product.price
    }
}

/// Items the shopper intends to buy, in the order they were added.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Basket {
    items: Vec<BasketItem>,
}

impl Basket {
    /// Append a new entry for `product`. Never deduplicates.
    pub fn add(&mut self, product: &Product, ids: &mut dyn CartIdSource) -> CartId {
        let cart_id = ids.next_cart_id();
        debug_assert!(
            self.get(cart_id).is_none(),
            "cart id source reused {cart_id}"
        );
        self.items.push(BasketItem {
            cart_id,
            product: product.clone(),
        });
        cart_id
    }

    /// Remove the entry with `cart_id`, if any.
    ///
    /// An unknown id leaves the basket untouched.
    pub fn remove(&mut self, cart_id: CartId) -> Option<BasketItem> {
        let index = self.items.iter().position(|item| item.cart_id == cart_id)?;
        Some(self.items.remove(index))
    }

    /// Sum of the prices of every entry, computed on each call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(BasketItem::price).sum()
    }

    #[must_use]
    pub fn items(&self) -> &[BasketItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, cart_id: CartId) -> Option<&BasketItem> {
        self.items.iter().find(|item| item.cart_id == cart_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
