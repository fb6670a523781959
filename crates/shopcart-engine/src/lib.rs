//! # shopcart-engine: The Cart Engine
//!
//! This crate provides the stateful cart engine: the three cart operations
//! (`add_product`, `remove_product`, `update_product_amount`), their
//! validation against a remote stock source, and wholesale persistence of
//! the cart to a durable blob store.
//!
//! ## Data Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                      Shopcart Data Flow                           │
//! │                                                                   │
//! │  UI action (add / remove / change amount)                         │
//! │       │                                                           │
//! │       ▼                                                           │
//! │  ┌─────────────────────────────────────────────────────────────┐  │
//! │  │                  shopcart-engine (THIS CRATE)               │  │
//! │  │                                                             │  │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   │  │
//! │  │   │  CartEngine  │   │   Catalog    │   │  BlobStore   │   │  │
//! │  │   │ (engine.rs)  │◄──│ (catalog.rs) │   │ (store.rs)   │   │  │
//! │  │   │              │   │              │   │              │   │  │
//! │  │   │ owns Cart    │   │ product /    │   │ get / set    │   │  │
//! │  │   │ validates    │   │ stock fetch  │   │ one blob     │   │  │
//! │  │   └──────┬───────┘   └──────────────┘   └──────▲───────┘   │  │
//! │  │          │                                    │            │  │
//! │  │          └────── persist wholesale on success ┘            │  │
//! │  └─────────────────────────────────────────────────────────────┘  │
//! │       │                                                           │
//! │       ▼                                                           │
//! │  Tagged result; caller maps failures to notifications (notify.rs) │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`engine`] - The `CartEngine` and its three operations
//! - [`catalog`] - The injected `Catalog` lookup trait + in-memory double
//! - [`store`] - The injected `BlobStore` trait + in-memory implementation
//! - [`notify`] - Caller-side notification sink and message mapping
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopcart_engine::{CartEngine, MemoryCatalog, MemoryStore};
//!
//! let catalog = MemoryCatalog::new();
//! let store = MemoryStore::new();
//!
//! // Rehydrates from the store, or starts empty
//! let mut engine = CartEngine::new(catalog, store);
//!
//! let cart = engine.add_product(1).await?;
//! assert_eq!(cart.amount_of(1), Some(1));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod engine;
pub mod notify;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{Catalog, MemoryCatalog};
pub use engine::CartEngine;
pub use notify::{
    failure_message, Notifier, Operation, MSG_ADD_FAILED, MSG_AMOUNT_FAILED, MSG_OUT_OF_STOCK,
    MSG_REMOVE_FAILED,
};
pub use store::{BlobStore, MemoryStore};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key under which the serialized cart lives in the blob store.
///
/// Namespaced so the cart blob cannot collide with other application data
/// sharing the same store.
pub const CART_STORAGE_KEY: &str = "shopcart:cart";
