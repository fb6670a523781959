//! # Domain Types
//!
//! Core domain types shared by the cart and the engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                              │
//! │                                                                  │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │ CatalogRecord   │  │  StockRecord    │  │    LineItem     │  │
//! │  │ ─────────────   │  │  ─────────────  │  │  ─────────────  │  │
//! │  │ id              │  │  id             │  │  id             │  │
//! │  │ attrs (opaque)  │  │  amount (max    │  │  amount (>= 1)  │  │
//! │  │                 │  │   purchasable)  │  │  added_at       │  │
//! │  │                 │  │                 │  │  attrs (frozen) │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Opaque Attribute Pass-Through
//! The catalog record carries product attributes (name, price, image, ...)
//! that the cart never interprets. They are held as a flattened
//! `serde_json` map so a line item serializes with the same shape the
//! catalog delivered, and round-trips through the durable store verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a product in the catalog, unique within the cart.
pub type ProductId = u64;

// =============================================================================
// Catalog Record
// =============================================================================

/// A product record as delivered by the catalog lookup.
///
/// ## Attribute Freezing
/// Everything except `id` is opaque to the cart. The attributes are copied
/// verbatim onto the line item at add-time and never refreshed afterwards,
/// so the cart keeps displaying the data the shopper saw when adding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Product ID
    pub id: ProductId,

    /// Opaque product attributes (name, price, image, ...), passed through
    /// untouched
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl CatalogRecord {
    /// Creates a record with the given id and no attributes.
    pub fn new(id: ProductId) -> Self {
        CatalogRecord {
            id,
            attrs: Map::new(),
        }
    }

    /// Adds an opaque attribute (builder style, mainly for tests and
    /// catalog doubles).
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// Stock Record
// =============================================================================

/// Available stock for one product, as delivered by the stock lookup.
///
/// Fetched fresh on every quantity-affecting operation and never cached by
/// the cart engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    /// Product ID
    pub id: ProductId,

    /// Maximum purchasable quantity currently available
    pub amount: u32,
}

// =============================================================================
// Line Item
// =============================================================================

/// One product held in the cart.
///
/// ## Invariants
/// - `id` is unique within the cart
/// - `amount` is always >= 1; an item never sits in the cart at amount 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product ID (unique within the cart)
    pub id: ProductId,

    /// Quantity held in the cart, always >= 1
    pub amount: u32,

    /// When this item was added to the cart
    pub added_at: DateTime<Utc>,

    /// Product attributes frozen at add-time (name, price, image, ...)
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl LineItem {
    /// Creates a line item from a catalog record with an initial amount
    /// of 1.
    ///
    /// ## Attribute Freezing
    /// The record's attributes are captured at this moment. If the catalog
    /// changes afterwards, this line item keeps the original data.
    pub fn from_record(record: &CatalogRecord) -> Self {
        LineItem {
            id: record.id,
            amount: 1,
            added_at: Utc::now(),
            attrs: record.attrs.clone(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn line_item_freezes_record_attributes() {
        let record = CatalogRecord::new(7)
            .with_attr("name", "Trail Sneaker")
            .with_attr("price", 179.9);

        let item = LineItem::from_record(&record);

        assert_eq!(item.id, 7);
        assert_eq!(item.amount, 1);
        assert_eq!(item.attrs.get("name"), Some(&json!("Trail Sneaker")));
        assert_eq!(item.attrs.get("price"), Some(&json!(179.9)));
    }

    #[test]
    fn line_item_serializes_attributes_flattened() {
        let record = CatalogRecord::new(3).with_attr("name", "Canvas Tote");
        let item = LineItem::from_record(&record);

        let value = serde_json::to_value(&item).unwrap();

        // Attributes sit next to id/amount, not nested under "attrs"
        assert_eq!(value["id"], json!(3));
        assert_eq!(value["amount"], json!(1));
        assert_eq!(value["name"], json!("Canvas Tote"));
        assert!(value.get("attrs").is_none());
    }

    #[test]
    fn line_item_round_trips_through_json() {
        let record = CatalogRecord::new(12)
            .with_attr("name", "Wool Beanie")
            .with_attr("image", "https://cdn.example.com/beanie.png");
        let item = LineItem::from_record(&record);

        let blob = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&blob).unwrap();

        assert_eq!(back, item);
    }
}
