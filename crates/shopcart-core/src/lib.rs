//! # shopcart-core: Pure Cart Logic for Shopcart
//!
//! This crate is the heart of the cart: the line-item data model, the cart
//! invariants, and the error taxonomy, all as pure values with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                     Shopcart Architecture                         │
//! │                                                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐ │
//! │  │                   UI / embedding layer                      │ │
//! │  │     product listing ──► cart panel ──► notifications        │ │
//! │  └───────────────────────────┬─────────────────────────────────┘ │
//! │                              │                                   │
//! │  ┌───────────────────────────▼─────────────────────────────────┐ │
//! │  │                  shopcart-engine                            │ │
//! │  │   CartEngine + injected Catalog / BlobStore / Notifier      │ │
//! │  └───────────────────────────┬─────────────────────────────────┘ │
//! │                              │                                   │
//! │  ┌───────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ shopcart-core (THIS CRATE) ★                 │ │
//! │  │                                                             │ │
//! │  │   ┌───────────┐   ┌───────────┐   ┌───────────┐            │ │
//! │  │   │   types   │   │   cart    │   │   error   │            │ │
//! │  │   │ LineItem  │   │   Cart    │   │ CartError │            │ │
//! │  │   │ records   │   │ transitions│  │LookupError│            │ │
//! │  │   └───────────┘   └───────────┘   └───────────┘            │ │
//! │  │                                                             │ │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE VALUES           │ │
//! │  └─────────────────────────────────────────────────────────────┘ │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, CatalogRecord, StockRecord)
//! - [`cart`] - The Cart value and its pure transitions
//! - [`error`] - The cart error taxonomy
//!
//! ## Design Principles
//!
//! 1. **Pure Values**: Every cart transition produces a new, fully
//!    independent `Cart` value; the previous value is never mutated in
//!    place.
//! 2. **No I/O**: Network, storage, and notification access is FORBIDDEN
//!    here; those live behind seams in `shopcart-engine`.
//! 3. **Explicit Errors**: All failures are typed enum variants, never
//!    strings or panics.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopcart_core::Cart` instead of
// `use shopcart_core::cart::Cart`

pub use cart::Cart;
pub use error::{CartError, CartResult, LookupError};
pub use types::{CatalogRecord, LineItem, ProductId, StockRecord};
