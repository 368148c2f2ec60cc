//! Session-owned store orchestrating catalog, cart, undo, and checkout.

use crate::cart::{Cart, CartLine, UndoHistory};
use crate::catalog::Catalog;
use crate::checkout::{CheckoutQueue, Receipt};
use crate::error::GrocerError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};

/// All state for one shopping session.
///
/// Explicitly owned rather than global: create one per session and drive it
/// from a single caller. The store is not synchronized: callers that share
/// one across threads must wrap the whole store in a lock, since checkout
/// touches every component in one sweep.
#[derive(Debug, Clone, Default)]
pub struct GroceryStore {
    catalog: Catalog,
    cart: Cart,
    undo: UndoHistory,
    queue: CheckoutQueue,
}

impl GroceryStore {
    /// Create a store with the default catalog and everything else empty.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            cart: Cart::new(),
            undo: UndoHistory::new(),
            queue: CheckoutQueue::new(),
        }
    }

    /// The item catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The undo history.
    pub fn undo_history(&self) -> &UndoHistory {
        &self.undo
    }

    /// The checkout queue.
    pub fn checkout_queue(&self) -> &CheckoutQueue {
        &self.queue
    }

    /// Add one purchase to a ranked catalog item. Returns `false` when the
    /// identity is not ranked.
    pub fn increment_by_id(&mut self, id: ItemId) -> bool {
        self.catalog.increment_by_id(id)
    }

    /// Add an item to the cart, merging by name, and record the addition in
    /// the undo history.
    ///
    /// When no price is supplied it is resolved from the catalog (ranked
    /// record first, then the pending pool), falling back to zero for a
    /// never-seen ad-hoc name.
    pub fn add_to_cart(
        &mut self,
        name: &str,
        price: Option<Money>,
        quantity: i64,
        item_id: ItemId,
    ) -> Result<(), GrocerError> {
        if quantity < 1 {
            return Err(GrocerError::InvalidQuantity(quantity));
        }
        let price = price
            .or_else(|| self.catalog.price_of(item_id))
            .or_else(|| self.catalog.pending().find_by_name(name).map(|i| i.price))
            .unwrap_or_else(|| Money::zero(Currency::INR));

        let line = CartLine::new(name, quantity as u32, item_id, price);
        self.undo.record(line.clone());
        self.cart.add_or_merge(line);
        Ok(())
    }

    /// Remove the cart line at a 1-indexed position. Out-of-range positions
    /// are ignored. Not recorded in the undo history.
    pub fn remove_from_cart(&mut self, position: usize) -> Option<CartLine> {
        self.cart.remove_at(position)
    }

    /// Empty the cart (the undo history is left alone).
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Reverse the most recent cart addition.
    ///
    /// Pops the undo history and removes the matching cart line by name. If
    /// additions were merged, the whole merged line is removed; undo is
    /// name-grained, not quantity-grained.
    pub fn undo_last(&mut self) -> Result<CartLine, GrocerError> {
        let last = self.undo.pop_last().ok_or(GrocerError::NothingToUndo)?;
        self.cart.remove_by_name(&last.name);
        Ok(last)
    }

    /// Forget all recorded additions without touching the cart.
    pub fn clear_undo_history(&mut self) {
        self.undo.clear();
    }

    /// Stage the cart for receipt processing and update purchase counters.
    ///
    /// Every cart line is enqueued in cart order, then classified by
    /// identity: default-range ids increment the ranked counter once per
    /// unit of quantity; custom or unassigned ids accumulate their full
    /// quantity in one call. The promotion policy runs exactly once at the
    /// end, after which the cart and undo history are cleared. Returns the
    /// number of lines staged.
    pub fn start_checkout(&mut self) -> usize {
        let lines: Vec<CartLine> = self.cart.lines().to_vec();
        let staged = lines.len();

        for line in lines {
            self.queue.enqueue(line.clone());
            if line.item_id.is_default() {
                for _ in 0..line.quantity {
                    self.catalog.increment_by_id(line.item_id);
                }
            } else {
                self.catalog
                    .add_or_increment(&line.name, line.price, line.quantity, line.item_id);
            }
        }

        self.catalog.promote_if_due();
        self.cart.clear();
        self.undo.clear();
        staged
    }

    /// Drain the checkout queue in FIFO order into a receipt. The queue is
    /// empty afterwards.
    pub fn process_checkout(&mut self) -> Receipt {
        let mut drained = Vec::with_capacity(self.queue.len());
        while let Some(line) = self.queue.dequeue() {
            drained.push(line);
        }
        Receipt::from_lines(drained)
    }

    /// Rebuild one item's purchase history from persisted data. See
    /// [`Catalog::restore_item`].
    pub fn restore_item(&mut self, name: &str, price: Money, count: u32, id: ItemId) -> ItemId {
        self.catalog.restore_item(name, price, count, id)
    }

    /// Clear transient state: cart, undo history, checkout queue, and the
    /// pending custom pool. The ranking keeps its counts.
    pub fn reset_all(&mut self) {
        self.cart.clear();
        self.undo.clear();
        self.queue.clear();
        self.catalog.clear_pending();
    }

    /// Clear transient state and restore the catalog to factory defaults.
    pub fn factory_reset(&mut self) {
        self.reset_all();
        self.catalog.reset_to_defaults();
    }
}
