//! Checkout module.
//!
//! Contains the FIFO staging queue and receipt accumulation.

mod queue;
mod receipt;

pub use queue::CheckoutQueue;
pub use receipt::{
    Receipt, ReceiptLine, DISCOUNT_PERCENT, DISCOUNT_THRESHOLD_MINOR, TAX_PERCENT,
};
