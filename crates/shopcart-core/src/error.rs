//! # Error Types
//!
//! The cart error taxonomy.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                       Error Propagation                          │
//! │                                                                  │
//! │  Catalog / stock fetch fails                                     │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  LookupError (this module) ← transport vs. not-found             │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  CartError (this module)   ← which operation path it hit         │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  Caller maps to a user-facing notification (shopcart-engine)     │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to exactly one user-facing message

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Lookup Error
// =============================================================================

/// Failure of a catalog or stock fetch.
///
/// The cart draws no distinction between transient and permanent lookup
/// failures; both variants surface through the same generic failure path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The remote source has no record for this product id.
    #[error("no record for product {product_id}")]
    NotFound { product_id: ProductId },

    /// The fetch itself failed (connection refused, timeout, bad payload).
    #[error("lookup transport failed: {0}")]
    Transport(String),
}

// =============================================================================
// Cart Error
// =============================================================================

/// Failure of a cart operation.
///
/// Every operation is all-or-nothing: when one of these is returned, the
/// in-memory cart and the persisted copy are both unchanged.
///
/// `ProductLookup` and `StockLookup` are separate variants so the caller
/// can tell the add path from the quantity path without extra context
/// when choosing a notification message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The operation targeted a product that is not in the cart.
    #[error("product {product_id} is not in the cart")]
    NotFoundInCart { product_id: ProductId },

    /// The catalog fetch on the add path failed.
    #[error("catalog lookup for product {product_id} failed: {source}")]
    ProductLookup {
        product_id: ProductId,
        source: LookupError,
    },

    /// The stock fetch on a quantity-affecting path failed.
    #[error("stock lookup for product {product_id} failed: {source}")]
    StockLookup {
        product_id: ProductId,
        source: LookupError,
    },

    /// The requested quantity exceeds the available stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Set amount to 5
    ///      │
    ///      ▼
    /// Fetch stock: available=3
    ///      │
    ///      ▼
    /// OutOfStock { product_id: 1, requested: 5, available: 3 }
    ///      │
    ///      ▼
    /// UI shows: "Requested quantity is out of stock"
    /// ```
    #[error("stock for product {product_id} exceeded: available {available}, requested {requested}")]
    OutOfStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
