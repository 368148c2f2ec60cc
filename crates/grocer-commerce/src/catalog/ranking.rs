//! Bounded frequency ranking of catalog items.

use crate::catalog::item::CatalogItem;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum number of items surfaced in the frequent-items ranking.
pub const MAX_RANKED_ITEMS: usize = 10;

/// The stock item set the ranking is seeded with (ids 0–9, zero counts).
pub fn default_items() -> Vec<CatalogItem> {
    let seed: [(i32, &str, f64, &str); MAX_RANKED_ITEMS] = [
        (0, "Milk (1 Liter)", 80.0, "\u{1f95b}"),
        (1, "Bread (Whole Wheat)", 60.0, "\u{1f35e}"),
        (2, "Eggs (Dozen)", 120.0, "\u{1f95a}"),
        (3, "Butter", 150.0, "\u{1f9c8}"),
        (4, "Cheese (Cheddar)", 250.0, "\u{1f9c0}"),
        (5, "Chicken Breast", 350.0, "\u{1f357}"),
        (6, "Rice (5 kg bag)", 450.0, "\u{1f35a}"),
        (7, "Pasta", 90.0, "\u{1f35d}"),
        (8, "Tomato Sauce", 70.0, "\u{1f96b}"),
        (9, "Orange Juice", 180.0, "\u{1f34a}"),
    ];
    seed.iter()
        .map(|(id, name, price, icon)| {
            CatalogItem::new(
                ItemId::new(*id),
                *name,
                Money::from_decimal(*price, Currency::INR),
                *icon,
            )
        })
        .collect()
}

/// The bounded, frequency-sorted item ranking.
///
/// Holds at most [`MAX_RANKED_ITEMS`] records, kept sorted by
/// `purchase_count` descending after every mutation. The sort is stable, so
/// ties keep their relative order, and sorting only reorders records; it
/// never touches the id stored inside one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedItems {
    items: Vec<CatalogItem>,
}

impl RankedItems {
    /// Create a ranking seeded with the default item set.
    pub fn new() -> Self {
        Self {
            items: default_items(),
        }
    }

    /// Number of ranked items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the ranking is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The ranked view, most purchased first.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Get the item at a ranked position. Out-of-range indices yield `None`.
    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Find a ranked item's position by case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|i| i.matches_name(name))
    }

    /// Find a ranked item's position by identity.
    pub fn find_by_id(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// The least popular ranked item: the last slot, since the ranking is
    /// always sorted. This is the promotion displacement target.
    pub fn least_popular(&self) -> Option<&CatalogItem> {
        self.items.last()
    }

    /// Add one purchase to the record with the given identity, then re-sort.
    /// Returns `false` when no record carries that id.
    pub fn increment_by_id(&mut self, id: ItemId) -> bool {
        self.add_count_by_id(id, 1)
    }

    /// Add `count` purchases to the record with the given identity, then
    /// re-sort. Used by the restore path to replay persisted counts in one
    /// call. Returns `false` when no record carries that id.
    pub fn add_count_by_id(&mut self, id: ItemId, count: u32) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.purchase_count += count;
                self.sort_by_frequency();
                true
            }
            None => false,
        }
    }

    /// Overwrite the ranked slot at `index` with `item`, marking it custom.
    ///
    /// If a record with the same name already sits elsewhere in the ranking,
    /// the counts are merged into that record instead of creating a
    /// duplicate. Returns `false` for out-of-range indices.
    pub fn replace(&mut self, index: usize, mut item: CatalogItem) -> bool {
        if index >= self.items.len() {
            return false;
        }
        if let Some(existing) = self.find_by_name(&item.name) {
            if existing != index {
                self.items[existing].purchase_count += item.purchase_count;
                self.sort_by_frequency();
                return true;
            }
        }
        item.is_custom = true;
        self.items[index] = item;
        self.sort_by_frequency();
        true
    }

    /// Clear all records and re-seed the default set with zero counts.
    pub fn reset_to_defaults(&mut self) {
        self.items = default_items();
    }

    /// Stable descending sort by purchase count. Ties keep their relative
    /// order, so freshly seeded defaults stay in seed order.
    fn sort_by_frequency(&mut self) {
        self.items
            .sort_by(|a, b| b.purchase_count.cmp(&a.purchase_count));
    }
}

impl Default for RankedItems {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ranking: &RankedItems) -> Vec<i32> {
        ranking.items().iter().map(|i| i.id.raw()).collect()
    }

    #[test]
    fn test_seeded_with_defaults() {
        let ranking = RankedItems::new();
        assert_eq!(ranking.len(), MAX_RANKED_ITEMS);
        assert_eq!(ids(&ranking), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(ranking.items().iter().all(|i| i.purchase_count == 0));
    }

    #[test]
    fn test_increment_resorts() {
        let mut ranking = RankedItems::new();
        assert!(ranking.increment_by_id(ItemId::new(7)));
        assert_eq!(ranking.items()[0].id, ItemId::new(7));
        assert_eq!(ranking.items()[0].purchase_count, 1);
    }

    #[test]
    fn test_increment_unknown_id() {
        let mut ranking = RankedItems::new();
        assert!(!ranking.increment_by_id(ItemId::new(42)));
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut ranking = RankedItems::new();
        // Same count for two items: seed order must be preserved between them.
        ranking.increment_by_id(ItemId::new(3));
        ranking.increment_by_id(ItemId::new(8));
        assert_eq!(&ids(&ranking)[..2], &[3, 8]);
    }

    #[test]
    fn test_identity_survives_resort() {
        let mut ranking = RankedItems::new();
        for _ in 0..5 {
            ranking.increment_by_id(ItemId::new(9));
        }
        let index = ranking.find_by_id(ItemId::new(9)).unwrap();
        assert_eq!(index, 0);
        assert_eq!(ranking.items()[index].name, "Orange Juice");
        assert_eq!(ranking.items()[index].purchase_count, 5);
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let ranking = RankedItems::new();
        assert!(ranking.find_by_name("pasta").is_some());
        assert!(ranking.find_by_name("PASTA").is_some());
        assert!(ranking.find_by_name("Quinoa").is_none());
    }

    #[test]
    fn test_least_popular_is_last() {
        let mut ranking = RankedItems::new();
        for id in 0..9 {
            ranking.increment_by_id(ItemId::new(id));
        }
        // Item 9 never purchased, so it holds the last slot.
        assert_eq!(ranking.least_popular().unwrap().id, ItemId::new(9));
    }

    #[test]
    fn test_replace_marks_custom() {
        let mut ranking = RankedItems::new();
        let mut kale = CatalogItem::new(
            ItemId::new(1000),
            "Kale",
            Money::from_decimal(40.0, Currency::INR),
            "\u{1f195}",
        );
        kale.purchase_count = 4;
        assert!(ranking.replace(MAX_RANKED_ITEMS - 1, kale));
        let slot = ranking.find_by_id(ItemId::new(1000)).unwrap();
        assert!(ranking.items()[slot].is_custom);
        // Count 4 beats the zero-count defaults, so it sorts to the top.
        assert_eq!(slot, 0);
    }

    #[test]
    fn test_replace_merges_duplicate_name() {
        let mut ranking = RankedItems::new();
        ranking.increment_by_id(ItemId::new(7));
        let mut dup = CatalogItem::new(
            ItemId::new(1001),
            "pasta",
            Money::from_decimal(90.0, Currency::INR),
            "\u{1f195}",
        );
        dup.purchase_count = 3;
        assert!(ranking.replace(MAX_RANKED_ITEMS - 1, dup));
        // Merged into the existing Pasta record, no new id 1001 slot.
        assert!(ranking.find_by_id(ItemId::new(1001)).is_none());
        let pasta = ranking.find_by_id(ItemId::new(7)).unwrap();
        assert_eq!(ranking.items()[pasta].purchase_count, 4);
        assert_eq!(ranking.len(), MAX_RANKED_ITEMS);
    }

    #[test]
    fn test_replace_out_of_range() {
        let mut ranking = RankedItems::new();
        let item = CatalogItem::new(
            ItemId::new(1000),
            "Kale",
            Money::zero(Currency::INR),
            "\u{1f195}",
        );
        assert!(!ranking.replace(MAX_RANKED_ITEMS, item));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut ranking = RankedItems::new();
        ranking.increment_by_id(ItemId::new(4));
        ranking.reset_to_defaults();
        assert_eq!(ids(&ranking), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(ranking.items().iter().all(|i| i.purchase_count == 0));
    }
}
