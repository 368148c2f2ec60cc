//! The flat session facade.

use crate::payload::{CartLinePayload, ItemPayload, LinePayload, ReceiptPayload};
use grocer_commerce::error::GrocerError;
use grocer_commerce::ids::ItemId;
use grocer_commerce::money::{Currency, Money};
use grocer_commerce::store::GroceryStore;
use tracing::{debug, info};

/// One shopping session behind a flat call surface.
///
/// Compound results come back as owned UTF-8 JSON strings so embedding
/// hosts can consume them across a language boundary; scalar results come
/// back as plain values. All state lives in the wrapped
/// [`GroceryStore`]: create one session per caller and keep it
/// single-threaded.
#[derive(Debug, Default)]
pub struct GrocerySession {
    store: GroceryStore,
}

impl GrocerySession {
    /// Start a fresh session with the default catalog.
    pub fn new() -> Self {
        Self {
            store: GroceryStore::new(),
        }
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &GroceryStore {
        &self.store
    }

    // Frequent items

    /// Number of ranked items (at most 10).
    pub fn frequent_items_count(&self) -> usize {
        self.store.catalog().ranked_view().len()
    }

    /// One ranked item by position, or `None` for an out-of-range index.
    pub fn frequent_item(&self, index: usize) -> Result<Option<String>, GrocerError> {
        match self.store.catalog().ranked().get(index) {
            Some(item) => Ok(Some(serde_json::to_string(&ItemPayload::from(item))?)),
            None => Ok(None),
        }
    }

    /// All ranked items, most purchased first.
    pub fn all_frequent_items(&self) -> Result<String, GrocerError> {
        let items: Vec<ItemPayload> = self
            .store
            .catalog()
            .ranked_view()
            .iter()
            .map(ItemPayload::from)
            .collect();
        Ok(serde_json::to_string(&items)?)
    }

    /// Add one purchase to a ranked item. Returns `false` when the identity
    /// is not ranked.
    pub fn increment_purchase_count(&mut self, item_id: i32) -> bool {
        self.store.increment_by_id(ItemId::new(item_id))
    }

    // Cart

    /// Number of cart lines.
    pub fn cart_size(&self) -> usize {
        self.store.cart().len()
    }

    /// Check if the cart is empty.
    pub fn is_cart_empty(&self) -> bool {
        self.store.cart().is_empty()
    }

    /// Sum of quantities across cart lines.
    pub fn cart_total_quantity(&self) -> u32 {
        self.store.cart().total_quantity()
    }

    /// All cart lines, in insertion order.
    pub fn cart_items(&self) -> Result<String, GrocerError> {
        let lines: Vec<CartLinePayload> = self
            .store
            .cart()
            .lines()
            .iter()
            .map(CartLinePayload::from)
            .collect();
        Ok(serde_json::to_string(&lines)?)
    }

    /// Add an item to the cart (and the undo history). An omitted price is
    /// resolved from the catalog.
    pub fn add_to_cart(
        &mut self,
        name: &str,
        price: Option<f64>,
        quantity: i64,
        item_id: i32,
    ) -> Result<(), GrocerError> {
        debug!(name, quantity, item_id, "add to cart");
        let price = price.map(|p| Money::from_decimal(p, Currency::INR));
        self.store
            .add_to_cart(name, price, quantity, ItemId::new(item_id))
    }

    /// Remove the cart line at a 1-indexed position; `None` when the
    /// position is out of range.
    pub fn remove_from_cart(&mut self, position: usize) -> Result<Option<String>, GrocerError> {
        match self.store.remove_from_cart(position) {
            Some(line) => Ok(Some(serde_json::to_string(&CartLinePayload::from(&line))?)),
            None => Ok(None),
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.store.clear_cart();
    }

    // Undo stack

    /// Number of undoable additions.
    pub fn undo_stack_size(&self) -> usize {
        self.store.undo_history().len()
    }

    /// Check if there is anything to undo.
    pub fn is_undo_stack_empty(&self) -> bool {
        self.store.undo_history().is_empty()
    }

    /// Recorded additions, most recent first.
    pub fn undo_stack_items(&self) -> Result<String, GrocerError> {
        let entries: Vec<LinePayload> = self
            .store
            .undo_history()
            .entries()
            .map(LinePayload::from)
            .collect();
        Ok(serde_json::to_string(&entries)?)
    }

    /// Reverse the most recent cart addition. An empty history yields the
    /// explicit error payload rather than a failure.
    pub fn undo_last_action(&mut self) -> Result<String, GrocerError> {
        match self.store.undo_last() {
            Ok(line) => {
                debug!(name = %line.name, "undid cart addition");
                Ok(serde_json::to_string(&LinePayload::from(&line))?)
            }
            Err(GrocerError::NothingToUndo) => {
                Ok(serde_json::to_string(&serde_json::json!({
                    "error": "No actions to undo"
                }))?)
            }
            Err(e) => Err(e),
        }
    }

    /// Forget all recorded additions.
    pub fn clear_undo_stack(&mut self) {
        self.store.clear_undo_history();
    }

    // Checkout queue

    /// Number of staged lines.
    pub fn queue_size(&self) -> usize {
        self.store.checkout_queue().len()
    }

    /// Staged lines front-to-back, without consuming them.
    pub fn queue_items(&self) -> Result<String, GrocerError> {
        let lines: Vec<LinePayload> = self
            .store
            .checkout_queue()
            .iter()
            .map(LinePayload::from)
            .collect();
        Ok(serde_json::to_string(&lines)?)
    }

    /// Stage the cart for processing, update purchase counters, and run the
    /// promotion policy. Returns the number of lines staged.
    pub fn start_checkout(&mut self) -> usize {
        let staged = self.store.start_checkout();
        info!(staged, "checkout started");
        staged
    }

    /// Drain the queue and return the receipt payload.
    pub fn process_checkout(&mut self) -> Result<String, GrocerError> {
        let receipt = self.store.process_checkout();
        info!(
            total_items = receipt.total_items,
            grand_total = receipt.grand_total.to_decimal(),
            "checkout processed"
        );
        Ok(serde_json::to_string(&ReceiptPayload::from(&receipt))?)
    }

    // Restore and resets

    /// Rebuild one item's purchase history from persisted data. Returns the
    /// identity under which the item now lives.
    pub fn restore_item(&mut self, name: &str, price: f64, count: u32, item_id: i32) -> i32 {
        debug!(name, count, item_id, "restoring item");
        self.store
            .restore_item(
                name,
                Money::from_decimal(price, Currency::INR),
                count,
                ItemId::new(item_id),
            )
            .raw()
    }

    /// Clear transient state only (cart, undo, queue, pending pool).
    pub fn reset_all(&mut self) {
        info!("reset all transient state");
        self.store.reset_all();
    }

    /// Clear everything and restore the catalog defaults.
    pub fn factory_reset(&mut self) {
        info!("factory reset");
        self.store.factory_reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_defaults() {
        let session = GrocerySession::new();
        assert_eq!(session.frequent_items_count(), 10);
        assert!(session.is_cart_empty());
        assert!(session.is_undo_stack_empty());
        assert_eq!(session.queue_size(), 0);
    }

    #[test]
    fn test_frequent_item_out_of_range() {
        let session = GrocerySession::new();
        assert!(session.frequent_item(10).unwrap().is_none());
        assert!(session.frequent_item(0).unwrap().is_some());
    }

    #[test]
    fn test_undo_empty_returns_error_payload() {
        let mut session = GrocerySession::new();
        let payload = session.undo_last_action().unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["error"], "No actions to undo");
    }

    #[test]
    fn test_remove_from_cart_out_of_range() {
        let mut session = GrocerySession::new();
        assert!(session.remove_from_cart(1).unwrap().is_none());
        assert!(session.remove_from_cart(0).unwrap().is_none());
    }

    #[test]
    fn test_cart_items_payload() {
        let mut session = GrocerySession::new();
        session.add_to_cart("Milk (1 Liter)", None, 2, 0).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&session.cart_items().unwrap()).unwrap();
        assert_eq!(value[0]["name"], "Milk (1 Liter)");
        assert_eq!(value[0]["quantity"], 2);
        assert_eq!(value[0]["itemId"], 0);
    }

    #[test]
    fn test_increment_purchase_count_unknown_id() {
        let mut session = GrocerySession::new();
        assert!(!session.increment_purchase_count(999));
        assert!(session.increment_purchase_count(0));
    }
}
