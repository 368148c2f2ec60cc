//! Cart and line item types.

use crate::catalog::name_eq;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line in the cart or the checkout queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Item name (the merge key, case-insensitive).
    pub name: String,
    /// Quantity, at least one.
    pub quantity: u32,
    /// Catalog identity, or [`ItemId::UNASSIGNED`] for a brand-new entry.
    pub item_id: ItemId,
    /// Unit price.
    pub price: Money,
}

impl CartLine {
    /// Create a new line.
    pub fn new(name: impl Into<String>, quantity: u32, item_id: ItemId, price: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            item_id,
            price,
        }
    }

    /// Line total (unit price times quantity).
    pub fn total(&self) -> Money {
        self.price.multiply(self.quantity as i64)
    }
}

/// The shopping cart: an ordered, mutable collection of line items.
///
/// Lines keep insertion order. Adding a name already in the cart merges into
/// the existing line by bumping its quantity. Positional operations are
/// 1-indexed; positions outside `[1, len]` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Number of lines (not units).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find a line by case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| name_eq(&l.name, name))
    }

    /// Add a line, merging by name: if the name is already in the cart its
    /// quantity grows by the new line's quantity instead of appending.
    pub fn add_or_merge(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| name_eq(&l.name, &line.name)) {
            existing.quantity += line.quantity;
            return;
        }
        self.lines.push(line);
    }

    /// Remove and return the line at a 1-indexed position. Positions outside
    /// `[1, len]` leave the cart untouched and yield `None`.
    pub fn remove_at(&mut self, position: usize) -> Option<CartLine> {
        if position < 1 || position > self.lines.len() {
            return None;
        }
        Some(self.lines.remove(position - 1))
    }

    /// Remove the line with the given case-insensitive name.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        match self.lines.iter().position(|l| name_eq(&l.name, name)) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(Currency::INR), |acc, l| acc + l.total())
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, quantity: u32, id: i32) -> CartLine {
        CartLine::new(
            name,
            quantity,
            ItemId::new(id),
            Money::from_decimal(80.0, Currency::INR),
        )
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut cart = Cart::new();
        cart.add_or_merge(line("Milk", 1, 0));
        cart.add_or_merge(line("Bread", 1, 1));
        cart.add_or_merge(line("Eggs", 1, 2));
        let names: Vec<&str> = cart.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Bread", "Eggs"]);
    }

    #[test]
    fn test_merge_by_name() {
        let mut cart = Cart::new();
        cart.add_or_merge(line("Milk", 2, 0));
        cart.add_or_merge(line("Milk", 3, 0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_merge_is_case_insensitive() {
        let mut cart = Cart::new();
        cart.add_or_merge(line("milk", 1, 0));
        cart.add_or_merge(line("MILK", 1, 0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        // The first spelling wins.
        assert_eq!(cart.lines()[0].name, "milk");
    }

    #[test]
    fn test_remove_at_is_one_indexed() {
        let mut cart = Cart::new();
        cart.add_or_merge(line("Milk", 1, 0));
        cart.add_or_merge(line("Bread", 1, 1));
        let removed = cart.remove_at(1).unwrap();
        assert_eq!(removed.name, "Milk");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut cart = Cart::new();
        cart.add_or_merge(line("Milk", 1, 0));
        assert!(cart.remove_at(0).is_none());
        assert!(cart.remove_at(2).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_by_name() {
        let mut cart = Cart::new();
        cart.add_or_merge(line("Milk", 1, 0));
        assert!(cart.remove_by_name("MILK"));
        assert!(!cart.remove_by_name("Milk"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_quantity() {
        let mut cart = Cart::new();
        cart.add_or_merge(line("Milk", 2, 0));
        cart.add_or_merge(line("Bread", 3, 1));
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_line_total() {
        let l = line("Milk", 3, 0);
        assert_eq!(l.total().amount_minor, 24000); // 3 × ₹80.00
    }
}
