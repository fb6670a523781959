//! # Catalog Seam
//!
//! The injected lookup the engine validates against.
//!
//! ## Lookup Usage
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     Who fetches what                             │
//! │                                                                  │
//! │  add_product (new item) ──────────► product(id)                  │
//! │  add_product (already in cart) ───► stock(id)   (via delegation) │
//! │  update_product_amount ───────────► stock(id)                    │
//! │  remove_product ──────────────────► (no lookup, purely local)    │
//! │                                                                  │
//! │  Stock is fetched fresh on every quantity-affecting operation    │
//! │  and never cached by the engine.                                 │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use shopcart_core::{CatalogRecord, LookupError, ProductId, StockRecord};

/// Read-only product and stock lookup.
///
/// Implementations typically wrap an HTTP client against the shop backend;
/// [`MemoryCatalog`] ships for tests and embedded use. Both methods may
/// fail with [`LookupError::NotFound`] or [`LookupError::Transport`]; the
/// engine treats the two identically.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches the product record for `id`.
    async fn product(&self, id: ProductId) -> Result<CatalogRecord, LookupError>;

    /// Fetches the current stock record for `id`.
    async fn stock(&self, id: ProductId) -> Result<StockRecord, LookupError>;
}

/// In-memory catalog backed by two maps.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = MemoryCatalog::new();
/// catalog.put_product(CatalogRecord::new(1).with_attr("name", "Sneaker"));
/// catalog.put_stock(StockRecord { id: 1, amount: 5 });
/// ```
///
/// Missing entries surface as [`LookupError::NotFound`], the same way a
/// real backend answers for an unknown id.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: Mutex<HashMap<ProductId, CatalogRecord>>,
    stock: Mutex<HashMap<ProductId, u32>>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a product record.
    pub fn put_product(&self, record: CatalogRecord) {
        let mut products = self.products.lock().expect("catalog mutex poisoned");
        products.insert(record.id, record);
    }

    /// Inserts or replaces the stock level for a product.
    pub fn put_stock(&self, record: StockRecord) {
        let mut stock = self.stock.lock().expect("catalog mutex poisoned");
        stock.insert(record.id, record.amount);
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn product(&self, id: ProductId) -> Result<CatalogRecord, LookupError> {
        debug!(product_id = %id, "memory catalog product fetch");

        let products = self.products.lock().expect("catalog mutex poisoned");
        products
            .get(&id)
            .cloned()
            .ok_or(LookupError::NotFound { product_id: id })
    }

    async fn stock(&self, id: ProductId) -> Result<StockRecord, LookupError> {
        debug!(product_id = %id, "memory catalog stock fetch");

        let stock = self.stock.lock().expect("catalog mutex poisoned");
        stock
            .get(&id)
            .map(|&amount| StockRecord { id, amount })
            .ok_or(LookupError::NotFound { product_id: id })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
