//! Catalog item record.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Case-insensitive name comparison, used everywhere item names are matched.
///
/// "milk" and "MILK" refer to the same item in the catalog, the pending
/// pool, and the cart.
pub fn name_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// An item tracked by the catalog.
///
/// `purchase_count` drives the frequency ranking; `id` is the stable key
/// that survives re-sorting (see [`ItemId`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Stable identity.
    pub id: ItemId,
    /// Display name, unique under case-insensitive comparison.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Display tag shown next to the item (emoji in the stock seed).
    pub icon: String,
    /// Number of units purchased across all checkouts.
    pub purchase_count: u32,
    /// True for items promoted from the ad-hoc pool.
    pub is_custom: bool,
}

impl CatalogItem {
    /// Create a catalog item with a zero purchase count.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: Money,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            icon: icon.into(),
            purchase_count: 0,
            is_custom: false,
        }
    }

    /// Check whether this record answers to the given name.
    pub fn matches_name(&self, name: &str) -> bool {
        name_eq(&self.name, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_name_eq_ignores_case() {
        assert!(name_eq("Milk (1 Liter)", "milk (1 liter)"));
        assert!(name_eq("KALE", "kale"));
        assert!(!name_eq("Kale", "Kale Chips"));
    }

    #[test]
    fn test_matches_name() {
        let item = CatalogItem::new(
            ItemId::new(0),
            "Milk (1 Liter)",
            Money::from_decimal(80.0, Currency::INR),
            "\u{1f95b}",
        );
        assert!(item.matches_name("MILK (1 LITER)"));
        assert!(!item.matches_name("Bread"));
        assert_eq!(item.purchase_count, 0);
        assert!(!item.is_custom);
    }
}
