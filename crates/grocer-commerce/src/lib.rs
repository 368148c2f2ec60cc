//! Grocery cart domain types and logic for Grocer.
//!
//! This crate provides the core of a grocery shopping session:
//!
//! - **Catalog**: bounded frequent-items ranking, ad-hoc item pool, promotion policy
//! - **Cart**: ordered line items with quantity merge and undo history
//! - **Checkout**: FIFO staging queue and receipt accumulation
//! - **Store**: session-owned orchestration of all of the above
//!
//! # Example
//!
//! ```rust
//! use grocer_commerce::prelude::*;
//!
//! let mut store = GroceryStore::new();
//!
//! // Add a default item (id 0 = Milk) and an ad-hoc one.
//! store.add_to_cart("Milk (1 Liter)", None, 2, ItemId::new(0)).unwrap();
//! store
//!     .add_to_cart("Kale", Some(Money::from_decimal(40.0, Currency::INR)), 1, ItemId::UNASSIGNED)
//!     .unwrap();
//!
//! // Stage and process the checkout.
//! store.start_checkout();
//! let receipt = store.process_checkout();
//! assert_eq!(receipt.total_items, 3);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod store;

pub use error::GrocerError;
pub use ids::{ItemId, CUSTOM_ID_BASE};
pub use money::{Currency, Money};
pub use store::GroceryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::GrocerError;
    pub use crate::ids::{ItemId, CUSTOM_ID_BASE};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogItem, PendingCustoms, PendingItem, RankedItems, MAX_RANKED_ITEMS,
        PROMOTED_ICON,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, UndoHistory};

    // Checkout
    pub use crate::checkout::{CheckoutQueue, Receipt, ReceiptLine};

    // Store
    pub use crate::store::GroceryStore;
}
