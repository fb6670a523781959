//! # Cart Engine
//!
//! The stateful engine behind the three cart operations.
//!
//! ## Operation Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      Operation Flow                              │
//! │                                                                  │
//! │  UI action            Engine call              State change      │
//! │  ─────────            ───────────              ────────────      │
//! │                                                                  │
//! │  Click product ─────► add_product() ─────────► append item       │
//! │                         (already in cart:                        │
//! │                          delegates to the                        │
//! │                          amount path below)                      │
//! │                                                                  │
//! │  Change quantity ───► update_product_amount()► item.amount = n   │
//! │                         (gated by a fresh                        │
//! │                          stock fetch)                            │
//! │                                                                  │
//! │  Click remove ──────► remove_product() ──────► item excluded     │
//! │                                                                  │
//! │  View cart ─────────► cart() / snapshot() ───► (read only)       │
//! │                                                                  │
//! │  Every successful mutation replaces the cart wholesale and       │
//! │  persists the new value; every failure leaves both the in-memory │
//! │  cart and the persisted copy untouched.                          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use shopcart_core::{Cart, CartError, CartResult, LineItem, ProductId};

use crate::catalog::Catalog;
use crate::store::BlobStore;
use crate::CART_STORAGE_KEY;

/// The cart engine.
///
/// Owns the in-memory [`Cart`] exclusively; the catalog lookup and the
/// durable store are injected at construction. Mutating operations take
/// `&mut self`, so the borrow checker guarantees one mutation at a time
/// without any locking inside the engine.
#[derive(Debug)]
pub struct CartEngine<C, S> {
    cart: Cart,
    catalog: C,
    store: S,
}

impl<C, S> CartEngine<C, S>
where
    C: Catalog,
    S: BlobStore,
{
    /// Creates an engine, rehydrating the cart from the store.
    ///
    /// ## Rehydration
    /// - Key absent: start with an empty cart
    /// - Key present, blob decodes: trust it as-is, no further validation
    /// - Key present, blob unreadable: log a warning and start empty
    pub fn new(catalog: C, store: S) -> Self {
        let cart = match store.get(CART_STORAGE_KEY) {
            Some(blob) => match serde_json::from_str(&blob) {
                Ok(cart) => cart,
                Err(err) => {
                    warn!(error = %err, "persisted cart is unreadable, starting empty");
                    Cart::new()
                }
            },
            None => Cart::new(),
        };

        CartEngine {
            cart,
            catalog,
            store,
        }
    }

    /// Returns the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Returns an owned snapshot of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.cart.clone()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: delegates to [`update_product_amount`]
    ///   with `held + 1`, which re-runs the stock gate
    /// - Product not in cart: fetches the catalog record and appends a
    ///   line item with amount 1. No stock check happens on this first
    ///   add; only increments are gated
    ///
    /// ## Errors
    /// - `ProductLookup` if the catalog fetch fails (not found or
    ///   transport), cart unchanged
    /// - Whatever the delegated amount path returns for an existing item
    ///
    /// [`update_product_amount`]: CartEngine::update_product_amount
    pub async fn add_product(&mut self, product_id: ProductId) -> CartResult<Cart> {
        debug!(product_id = %product_id, "add_product");

        if let Some(held) = self.cart.amount_of(product_id) {
            return self.update_product_amount(product_id, held + 1).await;
        }

        let record = self
            .catalog
            .product(product_id)
            .await
            .map_err(|source| CartError::ProductLookup { product_id, source })?;

        let next = self.cart.with_item(LineItem::from_record(&record));
        Ok(self.commit(next))
    }

    /// Removes a product from the cart.
    ///
    /// Purely local: no lookup, never suspends, hence not `async`.
    ///
    /// ## Errors
    /// `NotFoundInCart` if the product is not in the cart; calling twice
    /// for the same id removes it once and fails the second time.
    pub fn remove_product(&mut self, product_id: ProductId) -> CartResult<Cart> {
        debug!(product_id = %product_id, "remove_product");

        let next = self.cart.without_item(product_id)?;
        Ok(self.commit(next))
    }

    /// Sets the held amount of a product to an absolute value.
    ///
    /// ## Behavior
    /// - `amount < 1`: silent no-op. The cart is returned unchanged and no
    ///   error is raised; a decrement button pressed at amount 1 must not
    ///   remove the item implicitly
    /// - Product in cart: fetches a fresh stock record and applies the
    ///   amount only if `amount <= stock.amount`
    ///
    /// ## Errors
    /// - `NotFoundInCart` if the product is not in the cart
    /// - `StockLookup` if the stock fetch fails, cart unchanged
    /// - `OutOfStock` if the requested amount exceeds available stock,
    ///   cart unchanged
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: u32,
    ) -> CartResult<Cart> {
        debug!(product_id = %product_id, amount = %amount, "update_product_amount");

        if amount < 1 {
            return Ok(self.snapshot());
        }

        if !self.cart.contains(product_id) {
            return Err(CartError::NotFoundInCart { product_id });
        }

        let stock = self
            .catalog
            .stock(product_id)
            .await
            .map_err(|source| CartError::StockLookup { product_id, source })?;

        if amount > stock.amount {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        let next = self.cart.with_amount(product_id, amount)?;
        Ok(self.commit(next))
    }

    /// Replaces the in-memory cart and persists it wholesale.
    ///
    /// The successor cart is fully computed before this point, so a
    /// failure anywhere earlier leaves both copies untouched.
    fn commit(&mut self, next: Cart) -> Cart {
        self.cart = next;
        let blob = serde_json::to_string(&self.cart).expect("cart serialization cannot fail");
        self.store.set(CART_STORAGE_KEY, blob);
        self.cart.clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::store::MemoryStore;
    use shopcart_core::{CatalogRecord, LookupError, StockRecord};

    fn catalog_with(id: ProductId, stock: u32) -> MemoryCatalog {
        let catalog = MemoryCatalog::new();
        catalog.put_product(
            CatalogRecord::new(id)
                .with_attr("name", format!("Product {}", id))
                .with_attr("price", 49.9),
        );
        catalog.put_stock(StockRecord { id, amount: stock });
        catalog
    }

    #[tokio::test]
    async fn add_product_appends_with_amount_one() {
        let mut engine = CartEngine::new(catalog_with(1, 5), MemoryStore::new());

        let cart = engine.add_product(1).await.unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(1), Some(1));
        assert_eq!(
            cart.get(1).unwrap().attrs.get("name"),
            Some(&serde_json::json!("Product 1"))
        );
    }

    #[tokio::test]
    async fn add_product_unknown_id_fails_and_leaves_cart_unchanged() {
        let mut engine = CartEngine::new(MemoryCatalog::new(), MemoryStore::new());

        let err = engine.add_product(42).await.unwrap_err();

        assert_eq!(
            err,
            CartError::ProductLookup {
                product_id: 42,
                source: LookupError::NotFound { product_id: 42 },
            }
        );
        assert!(engine.cart().is_empty());
    }

    #[tokio::test]
    async fn add_product_existing_item_increments_through_stock_gate() {
        let mut engine = CartEngine::new(catalog_with(1, 5), MemoryStore::new());

        engine.add_product(1).await.unwrap();
        let cart = engine.add_product(1).await.unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.amount_of(1), Some(2));
    }

    #[tokio::test]
    async fn add_product_increment_beyond_stock_is_rejected() {
        // One unit in stock: the first add is NOT stock-checked, the
        // increment is
        let mut engine = CartEngine::new(catalog_with(1, 1), MemoryStore::new());

        engine.add_product(1).await.unwrap();
        let err = engine.add_product(1).await.unwrap_err();

        assert_eq!(
            err,
            CartError::OutOfStock {
                product_id: 1,
                requested: 2,
                available: 1,
            }
        );
        assert_eq!(engine.cart().amount_of(1), Some(1));
    }

    #[tokio::test]
    async fn first_add_is_not_stock_checked() {
        // Zero stock: the first unit still goes in; only increments are
        // gated
        let mut engine = CartEngine::new(catalog_with(1, 0), MemoryStore::new());

        let cart = engine.add_product(1).await.unwrap();

        assert_eq!(cart.amount_of(1), Some(1));
    }

    #[tokio::test]
    async fn update_amount_applies_within_stock() {
        let mut engine = CartEngine::new(catalog_with(1, 5), MemoryStore::new());
        engine.add_product(1).await.unwrap();

        let cart = engine.update_product_amount(1, 4).await.unwrap();

        assert_eq!(cart.amount_of(1), Some(4));
    }

    #[tokio::test]
    async fn update_amount_beyond_stock_leaves_cart_unchanged() {
        let mut engine = CartEngine::new(catalog_with(1, 2), MemoryStore::new());
        engine.add_product(1).await.unwrap();
        engine.update_product_amount(1, 2).await.unwrap();

        let err = engine.update_product_amount(1, 3).await.unwrap_err();

        assert_eq!(
            err,
            CartError::OutOfStock {
                product_id: 1,
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(engine.cart().amount_of(1), Some(2));
    }

    #[tokio::test]
    async fn update_amount_below_one_is_a_silent_noop() {
        let mut engine = CartEngine::new(catalog_with(1, 5), MemoryStore::new());
        engine.add_product(1).await.unwrap();
        let before = engine.snapshot();

        let after = engine.update_product_amount(1, 0).await.unwrap();

        assert_eq!(after, before);
        assert_eq!(engine.cart().amount_of(1), Some(1));
    }

    #[tokio::test]
    async fn update_amount_missing_item_fails() {
        let mut engine = CartEngine::new(catalog_with(1, 5), MemoryStore::new());

        let err = engine.update_product_amount(1, 2).await.unwrap_err();

        assert_eq!(err, CartError::NotFoundInCart { product_id: 1 });
    }

    #[tokio::test]
    async fn remove_product_is_idempotent_in_effect_not_in_result() {
        let mut engine = CartEngine::new(catalog_with(1, 5), MemoryStore::new());
        engine.add_product(1).await.unwrap();

        let cart = engine.remove_product(1).unwrap();
        assert!(cart.is_empty());

        let err = engine.remove_product(1).unwrap_err();
        assert_eq!(err, CartError::NotFoundInCart { product_id: 1 });
        assert!(engine.cart().is_empty());
    }
}
