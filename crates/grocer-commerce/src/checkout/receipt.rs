//! Receipt accumulation.

use crate::cart::CartLine;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Tax applied to every receipt, in percent.
pub const TAX_PERCENT: f64 = 8.0;

/// Discount applied when the subtotal crosses the threshold, in percent.
pub const DISCOUNT_PERCENT: f64 = 5.0;

/// Subtotal (exclusive) above which the discount kicks in: ₹500.
pub const DISCOUNT_THRESHOLD_MINOR: i64 = 50_000;

/// One processed line on a receipt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReceiptLine {
    /// Item name.
    pub name: String,
    /// Quantity purchased.
    pub quantity: u32,
    /// Unit price.
    pub unit_price: Money,
    /// Line total.
    pub line_total: Money,
}

/// The outcome of processing a checkout queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// Processed lines, in the order they were dequeued.
    pub lines: Vec<ReceiptLine>,
    /// Sum of quantities across all lines.
    pub total_items: u32,
    /// Sum of line totals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Discount (zero below the threshold).
    pub discount: Money,
    /// Subtotal plus tax minus discount.
    pub grand_total: Money,
}

impl Receipt {
    /// Build a receipt from lines consumed off the checkout queue.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let currency = Currency::INR;
        let mut receipt_lines = Vec::new();
        let mut total_items = 0u32;
        let mut subtotal = Money::zero(currency);

        for line in lines {
            let line_total = line.total();
            total_items += line.quantity;
            subtotal = subtotal + line_total;
            receipt_lines.push(ReceiptLine {
                name: line.name,
                quantity: line.quantity,
                unit_price: line.price,
                line_total,
            });
        }

        let tax = subtotal.percentage(TAX_PERCENT);
        let discount = if subtotal.amount_minor > DISCOUNT_THRESHOLD_MINOR {
            subtotal.percentage(DISCOUNT_PERCENT)
        } else {
            Money::zero(currency)
        };
        let grand_total = subtotal + tax - discount;

        Self {
            lines: receipt_lines,
            total_items,
            subtotal,
            tax,
            discount,
            grand_total,
        }
    }

    /// An empty receipt (processing an empty queue).
    pub fn empty() -> Self {
        Self::from_lines(std::iter::empty())
    }
}
