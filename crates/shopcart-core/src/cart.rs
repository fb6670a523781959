//! # Cart
//!
//! The cart value and its pure transitions.
//!
//! ## Transition Model
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                 Per-line-item state machine                      │
//! │                                                                  │
//! │   ABSENT ──────with_item──────► PRESENT(amount = 1)              │
//! │                                      │        ▲                  │
//! │                            with_amount(a')    │ with_amount      │
//! │                                      ▼        │                  │
//! │                                 PRESENT(amount = a')             │
//! │                                      │                           │
//! │                               without_item                       │
//! │                                      ▼                           │
//! │                                   ABSENT                         │
//! │                                                                  │
//! │   No transition ever produces PRESENT(amount < 1) or a           │
//! │   duplicate id.                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition returns a NEW `Cart`; the receiver is never mutated.
//! Callers holding a reference to the previous value can never observe a
//! half-updated item.

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::types::{LineItem, ProductId};

/// An ordered sequence of line items.
///
/// ## Invariants
/// - No two line items share the same `id`
/// - Every line item's `amount` is >= 1
/// - Item order is insertion order and survives every transition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Returns the line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line item by product id.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    /// Checks whether a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Returns the held amount for a product, if present.
    pub fn amount_of(&self, product_id: ProductId) -> Option<u32> {
        self.get(product_id).map(|item| item.amount)
    }

    /// Returns the number of line items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a new cart with `item` appended.
    ///
    /// The caller must have established that `item.id` is not already in
    /// the cart; appending a duplicate would break the unique-id invariant.
    pub fn with_item(&self, item: LineItem) -> Cart {
        debug_assert!(!self.contains(item.id), "duplicate line item id");
        debug_assert!(item.amount >= 1, "line item amount below 1");

        let mut items = self.items.clone();
        items.push(item);
        Cart { items }
    }

    /// Returns a new cart with the item for `product_id` excluded, the
    /// order of the remaining items preserved.
    ///
    /// ## Errors
    /// `NotFoundInCart` if no line item has this id.
    pub fn without_item(&self, product_id: ProductId) -> CartResult<Cart> {
        if !self.contains(product_id) {
            return Err(CartError::NotFoundInCart { product_id });
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect();
        Ok(Cart { items })
    }

    /// Returns a new cart with the amount of `product_id` set to `amount`,
    /// all other items and their order untouched.
    ///
    /// ## Errors
    /// `NotFoundInCart` if no line item has this id.
    pub fn with_amount(&self, product_id: ProductId, amount: u32) -> CartResult<Cart> {
        debug_assert!(amount >= 1, "line item amount below 1");

        if !self.contains(product_id) {
            return Err(CartError::NotFoundInCart { product_id });
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == product_id {
                    let mut updated = item.clone();
                    updated.amount = amount;
                    updated
                } else {
                    item.clone()
                }
            })
            .collect();
        Ok(Cart { items })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogRecord;

    fn item(id: ProductId) -> LineItem {
        let record = CatalogRecord::new(id)
            .with_attr("name", format!("Product {}", id))
            .with_attr("price", 10.0 * id as f64);
        LineItem::from_record(&record)
    }

    #[test]
    fn with_item_appends_and_leaves_original_untouched() {
        let empty = Cart::new();
        let one = empty.with_item(item(1));

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(one.amount_of(1), Some(1));
    }

    #[test]
    fn without_item_preserves_order_of_remaining_items() {
        let cart = Cart::new()
            .with_item(item(1))
            .with_item(item(2))
            .with_item(item(3));

        let cart = cart.without_item(2).unwrap();

        let ids: Vec<ProductId> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn without_item_rejects_missing_id() {
        let cart = Cart::new().with_item(item(1));

        let err = cart.without_item(99).unwrap_err();

        assert_eq!(err, CartError::NotFoundInCart { product_id: 99 });
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn with_amount_touches_only_the_target_item() {
        let cart = Cart::new().with_item(item(1)).with_item(item(2));

        let updated = cart.with_amount(2, 5).unwrap();

        assert_eq!(updated.amount_of(1), Some(1));
        assert_eq!(updated.amount_of(2), Some(5));
        // The original value is a fully independent snapshot
        assert_eq!(cart.amount_of(2), Some(1));
    }

    #[test]
    fn with_amount_rejects_missing_id() {
        let cart = Cart::new();

        let err = cart.with_amount(1, 2).unwrap_err();

        assert_eq!(err, CartError::NotFoundInCart { product_id: 1 });
    }

    #[test]
    fn transitions_never_duplicate_ids() {
        let cart = Cart::new()
            .with_item(item(1))
            .with_item(item(2))
            .with_amount(1, 4)
            .unwrap()
            .without_item(2)
            .unwrap()
            .with_item(item(2));

        let mut ids: Vec<ProductId> = cart.items().iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.len());
        assert!(cart.items().iter().all(|i| i.amount >= 1));
    }

    #[test]
    fn cart_round_trips_through_json() {
        let cart = Cart::new().with_item(item(1)).with_item(item(2));
        let cart = cart.with_amount(2, 3).unwrap();

        let blob = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&blob).unwrap();

        assert_eq!(back, cart);
    }
}
