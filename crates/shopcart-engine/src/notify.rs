//! # Notification Sink
//!
//! Caller-side mapping from typed cart errors to user-facing messages.
//!
//! The engine itself never talks to a notification sink; it returns tagged
//! results and leaves presentation to the caller. This module carries the
//! four fixed message strings and the mapping a UI layer applies on the
//! failure branch:
//!
//! ```rust,ignore
//! match engine.add_product(id).await {
//!     Ok(cart) => render(cart),
//!     Err(err) => sink.notify(failure_message(Operation::Add, &err)),
//! }
//! ```

use shopcart_core::CartError;

/// Fire-and-forget sink for user-facing messages.
///
/// No return value, not awaited for correctness. Any `Fn(&str)` closure
/// qualifies, which is what tests and small embeddings use.
pub trait Notifier {
    /// Surfaces `message` to the user.
    fn notify(&self, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

// =============================================================================
// Fixed Messages
// =============================================================================

/// Shown when adding a product fails.
pub const MSG_ADD_FAILED: &str = "Could not add the product";

/// Shown when removing a product fails.
pub const MSG_REMOVE_FAILED: &str = "Could not remove the product";

/// Shown when changing a product amount fails.
pub const MSG_AMOUNT_FAILED: &str = "Could not change the product amount";

/// Shown when the requested quantity exceeds available stock.
pub const MSG_OUT_OF_STOCK: &str = "Requested quantity is out of stock";

// =============================================================================
// Message Mapping
// =============================================================================

/// Which engine operation the caller invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Remove,
    UpdateAmount,
}

/// Maps a failed operation to its user-facing message.
///
/// ## Mapping
/// - `OutOfStock` always gets the out-of-stock message
/// - `ProductLookup` only arises on the add path
/// - `StockLookup` only arises on the quantity path; an add that delegated
///   into it surfaces the amount message, matching the message the shopper
///   would see for a direct amount change
/// - `NotFoundInCart` reads as a removal failure for `remove_product` and
///   as an amount failure otherwise
pub fn failure_message(op: Operation, err: &CartError) -> &'static str {
    match err {
        CartError::OutOfStock { .. } => MSG_OUT_OF_STOCK,
        CartError::ProductLookup { .. } => MSG_ADD_FAILED,
        CartError::StockLookup { .. } => MSG_AMOUNT_FAILED,
        CartError::NotFoundInCart { .. } => match op {
            Operation::Remove => MSG_REMOVE_FAILED,
            Operation::Add | Operation::UpdateAmount => MSG_AMOUNT_FAILED,
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopcart_core::LookupError;

    #[test]
    fn out_of_stock_maps_to_out_of_stock_regardless_of_operation() {
        let err = CartError::OutOfStock {
            product_id: 1,
            requested: 3,
            available: 2,
        };

        for op in [Operation::Add, Operation::UpdateAmount] {
            assert_eq!(failure_message(op, &err), MSG_OUT_OF_STOCK);
        }
    }

    #[test]
    fn lookup_failures_map_by_path_not_operation() {
        let product = CartError::ProductLookup {
            product_id: 1,
            source: LookupError::Transport("timeout".to_string()),
        };
        let stock = CartError::StockLookup {
            product_id: 1,
            source: LookupError::NotFound { product_id: 1 },
        };

        assert_eq!(failure_message(Operation::Add, &product), MSG_ADD_FAILED);
        // A delegated add that failed fetching stock reads as an amount
        // failure
        assert_eq!(failure_message(Operation::Add, &stock), MSG_AMOUNT_FAILED);
        assert_eq!(
            failure_message(Operation::UpdateAmount, &stock),
            MSG_AMOUNT_FAILED
        );
    }

    #[test]
    fn not_found_reads_per_operation() {
        let err = CartError::NotFoundInCart { product_id: 9 };

        assert_eq!(failure_message(Operation::Remove, &err), MSG_REMOVE_FAILED);
        assert_eq!(
            failure_message(Operation::UpdateAmount, &err),
            MSG_AMOUNT_FAILED
        );
    }

    #[test]
    fn closures_are_notifiers() {
        let seen = std::cell::RefCell::new(Vec::new());
        let sink = |message: &str| seen.borrow_mut().push(message.to_string());

        sink.notify(MSG_ADD_FAILED);

        assert_eq!(seen.borrow().as_slice(), [MSG_ADD_FAILED.to_string()]);
    }
}
