//! Shopping cart module.
//!
//! Contains the cart, its line items, and the undo history that mirrors
//! cart additions.

mod cart;
mod history;

pub use cart::{Cart, CartLine};
pub use history::UndoHistory;
