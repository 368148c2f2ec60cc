//! Unranked pool of ad-hoc custom items.

use crate::catalog::item::name_eq;
use crate::ids::{ItemId, CUSTOM_ID_BASE};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A custom item accumulating purchases while waiting for promotion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingItem {
    /// Assigned identity, always in the custom range.
    pub id: ItemId,
    /// Display name, unique in the pool under case-insensitive comparison.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Units purchased so far.
    pub purchase_count: u32,
}

/// The unbounded pool of not-yet-ranked custom items.
///
/// Owns the identity generator for ad-hoc items. `clear` empties the pool
/// but keeps the generator position, so identities handed out earlier in the
/// session are never reissued; a full `reset` rewinds it to
/// [`CUSTOM_ID_BASE`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingCustoms {
    items: Vec<PendingItem>,
    next_id: i32,
}

impl PendingCustoms {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: CUSTOM_ID_BASE,
        }
    }

    /// Number of pooled items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The pooled items, in insertion order.
    pub fn items(&self) -> &[PendingItem] {
        &self.items
    }

    /// Find a pooled item by case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<&PendingItem> {
        self.items.iter().find(|i| name_eq(&i.name, name))
    }

    /// Check whether an identity is already taken by a pooled item.
    pub fn is_id_used(&self, id: ItemId) -> bool {
        self.items.iter().any(|i| i.id == id)
    }

    /// Merge `quantity` purchases into the item with the given name, or
    /// insert a new item when the name is unknown. New items take
    /// `forced_id` when it is a free custom-range id, otherwise the next
    /// generated identity. Returns the identity of the affected item.
    pub fn add_or_increment(
        &mut self,
        name: &str,
        price: Money,
        quantity: u32,
        forced_id: Option<ItemId>,
    ) -> ItemId {
        if let Some(existing) = self.items.iter_mut().find(|i| name_eq(&i.name, name)) {
            existing.purchase_count += quantity;
            return existing.id;
        }

        let id = match forced_id {
            Some(forced) if forced.raw() >= CUSTOM_ID_BASE && !self.is_id_used(forced) => {
                // Keep the generator ahead of restored identities.
                if forced.raw() >= self.next_id {
                    self.next_id = forced.raw() + 1;
                }
                forced
            }
            _ => self.generate_id(),
        };

        self.items.push(PendingItem {
            id,
            name: name.to_string(),
            price,
            purchase_count: quantity,
        });
        id
    }

    /// The promotion challenger: the pooled item with the strictly highest
    /// purchase count. Ties go to the earliest-inserted item.
    pub fn most_popular(&self) -> Option<&PendingItem> {
        let mut best: Option<&PendingItem> = None;
        for item in &self.items {
            match best {
                Some(current) if item.purchase_count <= current.purchase_count => {}
                _ => best = Some(item),
            }
        }
        best
    }

    /// Remove an item by case-insensitive name.
    pub fn remove(&mut self, name: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| !name_eq(&i.name, name));
        self.items.len() < len_before
    }

    /// Empty the pool, keeping the identity generator position.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Empty the pool and rewind the identity generator.
    pub fn reset(&mut self) {
        self.items.clear();
        self.next_id = CUSTOM_ID_BASE;
    }

    fn generate_id(&mut self) -> ItemId {
        while self.is_id_used(ItemId::new(self.next_id)) {
            self.next_id += 1;
        }
        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for PendingCustoms {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn price(amount: f64) -> Money {
        Money::from_decimal(amount, Currency::INR)
    }

    #[test]
    fn test_first_id_is_custom_base() {
        let mut pool = PendingCustoms::new();
        let id = pool.add_or_increment("Kale", price(40.0), 1, None);
        assert_eq!(id, ItemId::new(CUSTOM_ID_BASE));
    }

    #[test]
    fn test_merge_by_name_keeps_id() {
        let mut pool = PendingCustoms::new();
        let first = pool.add_or_increment("Kale", price(40.0), 2, None);
        let second = pool.add_or_increment("KALE", price(40.0), 3, None);
        assert_eq!(first, second);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.items()[0].purchase_count, 5);
    }

    #[test]
    fn test_forced_id_respected() {
        let mut pool = PendingCustoms::new();
        let id = pool.add_or_increment("Tofu", price(55.0), 1, Some(ItemId::new(1007)));
        assert_eq!(id, ItemId::new(1007));
        // Generator moves past the forced id.
        let next = pool.add_or_increment("Kimchi", price(99.0), 1, None);
        assert_eq!(next, ItemId::new(1008));
    }

    #[test]
    fn test_forced_id_outside_custom_range_ignored() {
        let mut pool = PendingCustoms::new();
        let id = pool.add_or_increment("Tofu", price(55.0), 1, Some(ItemId::new(3)));
        assert_eq!(id, ItemId::new(CUSTOM_ID_BASE));
    }

    #[test]
    fn test_most_popular_prefers_earliest_on_tie() {
        let mut pool = PendingCustoms::new();
        pool.add_or_increment("Kale", price(40.0), 3, None);
        pool.add_or_increment("Tofu", price(55.0), 3, None);
        assert_eq!(pool.most_popular().unwrap().name, "Kale");
    }

    #[test]
    fn test_most_popular_empty_pool() {
        let pool = PendingCustoms::new();
        assert!(pool.most_popular().is_none());
    }

    #[test]
    fn test_remove_case_insensitive() {
        let mut pool = PendingCustoms::new();
        pool.add_or_increment("Kale", price(40.0), 1, None);
        assert!(pool.remove("kale"));
        assert!(pool.is_empty());
        assert!(!pool.remove("kale"));
    }

    #[test]
    fn test_clear_keeps_generator_position() {
        let mut pool = PendingCustoms::new();
        pool.add_or_increment("Kale", price(40.0), 1, None);
        pool.clear();
        let id = pool.add_or_increment("Tofu", price(55.0), 1, None);
        assert_eq!(id, ItemId::new(CUSTOM_ID_BASE + 1));
    }

    #[test]
    fn test_reset_rewinds_generator() {
        let mut pool = PendingCustoms::new();
        pool.add_or_increment("Kale", price(40.0), 1, None);
        pool.reset();
        let id = pool.add_or_increment("Tofu", price(55.0), 1, None);
        assert_eq!(id, ItemId::new(CUSTOM_ID_BASE));
    }
}
