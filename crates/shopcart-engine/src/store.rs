//! # Durable Store Seam
//!
//! The blob store the cart persists into.
//!
//! ## Persistence Model
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      Persistence Model                           │
//! │                                                                  │
//! │  Successful mutation                                             │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  serialize WHOLE cart ──► set("shopcart:cart", blob)             │
//! │                                                                  │
//! │  Startup                                                         │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  get("shopcart:cart") ──► Some(blob): deserialize                │
//! │                       └─► None:       start empty                │
//! │                                                                  │
//! │  Always a wholesale overwrite; no partial or delta writes.       │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Synchronous string-keyed blob store.
///
/// Writes are assumed infallible (browser local storage, an in-memory map,
/// a settings file already opened for write). Implementations that can
/// genuinely fail should handle that internally; the engine defines no
/// failure path for persistence.
pub trait BlobStore: Send {
    /// Reads the blob under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `blob` under `key`, replacing any previous value.
    fn set(&self, key: &str, blob: String);
}

/// In-memory blob store.
///
/// ## Shared Handles
/// Cloning a `MemoryStore` clones the handle, not the contents: both
/// clones see the same blobs. Tests hand one clone to the engine and keep
/// the other to inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let blobs = self.blobs.lock().expect("store mutex poisoned");
        blobs.get(key).cloned()
    }

    fn set(&self, key: &str, blob: String) {
        let mut blobs = self.blobs.lock().expect("store mutex poisoned");
        blobs.insert(key.to_string(), blob);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
