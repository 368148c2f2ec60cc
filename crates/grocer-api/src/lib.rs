//! # Grocer API
//!
//! Flat session facade over the [`grocer_commerce`] domain crate.
//!
//! The surface is built for embedding: one method per operation on
//! [`GrocerySession`], with compound results serialized to owned UTF-8 JSON
//! strings (camelCase keys, decimal prices) that a host on the other side of
//! a language boundary can parse without sharing Rust types.
//!
//! ```rust
//! use grocer_api::GrocerySession;
//!
//! let mut session = GrocerySession::new();
//! session.add_to_cart("Milk (1 Liter)", None, 2, 0).unwrap();
//! session.start_checkout();
//! let receipt_json = session.process_checkout().unwrap();
//! assert!(receipt_json.contains("\"totalItems\":2"));
//! ```

pub mod payload;
pub mod session;

pub use payload::{CartLinePayload, ItemPayload, LinePayload, ReceiptLinePayload, ReceiptPayload};
pub use session::GrocerySession;

// Re-export the domain crate for callers that need direct store access.
pub use grocer_commerce;
