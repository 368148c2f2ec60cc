//! Catalog storage and the promotion policy.

use crate::catalog::item::CatalogItem;
use crate::catalog::pending::PendingCustoms;
use crate::catalog::ranking::RankedItems;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Display tag given to items promoted out of the ad-hoc pool.
pub const PROMOTED_ICON: &str = "\u{1f195}";

/// The item catalog: a bounded frequency ranking plus an unbounded pool of
/// not-yet-ranked custom items, reconciled by the promotion policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    ranked: RankedItems,
    pending: PendingCustoms,
}

impl Catalog {
    /// Create a catalog seeded with the default item set.
    pub fn new() -> Self {
        Self {
            ranked: RankedItems::new(),
            pending: PendingCustoms::new(),
        }
    }

    /// The bounded ranking.
    pub fn ranked(&self) -> &RankedItems {
        &self.ranked
    }

    /// The unranked custom pool.
    pub fn pending(&self) -> &PendingCustoms {
        &self.pending
    }

    /// The ranked view, most purchased first.
    pub fn ranked_view(&self) -> &[CatalogItem] {
        self.ranked.items()
    }

    /// Find a ranked item's position by case-insensitive name.
    pub fn lookup_by_name(&self, name: &str) -> Option<usize> {
        self.ranked.find_by_name(name)
    }

    /// Find a ranked item's position by identity.
    pub fn lookup_by_id(&self, id: ItemId) -> Option<usize> {
        self.ranked.find_by_id(id)
    }

    /// The unit price for a ranked identity, if known.
    pub fn price_of(&self, id: ItemId) -> Option<Money> {
        self.lookup_by_id(id)
            .and_then(|index| self.ranked.get(index))
            .map(|item| item.price)
    }

    /// Add one purchase to the ranked record with the given identity.
    /// Returns `false` when the id is not ranked.
    pub fn increment_by_id(&mut self, id: ItemId) -> bool {
        self.ranked.increment_by_id(id)
    }

    /// Accumulate purchases for an ad-hoc line.
    ///
    /// Promoted customs live in the ranking under their original id, so the
    /// ranking is consulted first (by id, then by name); only genuinely
    /// unranked names land in the pending pool. The full quantity is applied
    /// in a single call. Returns the identity of the affected record.
    pub fn add_or_increment(
        &mut self,
        name: &str,
        price: Money,
        quantity: u32,
        id: ItemId,
    ) -> ItemId {
        if self.ranked.find_by_id(id).is_some() {
            self.ranked.add_count_by_id(id, quantity);
            return id;
        }
        if let Some(index) = self.ranked.find_by_name(name) {
            let ranked_id = self.ranked.items()[index].id;
            self.ranked.add_count_by_id(ranked_id, quantity);
            return ranked_id;
        }
        let forced = if id.is_unassigned() { None } else { Some(id) };
        self.pending.add_or_increment(name, price, quantity, forced)
    }

    /// Run the promotion policy: at most one pending custom item may
    /// displace the least popular ranked item per invocation.
    ///
    /// The challenger is the most purchased pending item; it wins only with
    /// a strictly greater count than the incumbent. On promotion the
    /// challenger keeps its identity and count, is marked custom, takes the
    /// promoted display tag, and leaves the pool. Returns the promoted id.
    pub fn promote_if_due(&mut self) -> Option<ItemId> {
        let challenger = self.pending.most_popular()?;
        let incumbent = self.ranked.least_popular()?;
        if challenger.purchase_count <= incumbent.purchase_count {
            return None;
        }

        let mut item = CatalogItem::new(
            challenger.id,
            challenger.name.clone(),
            challenger.price,
            PROMOTED_ICON,
        );
        item.purchase_count = challenger.purchase_count;
        item.is_custom = true;

        let id = item.id;
        let name = item.name.clone();
        let last = self.ranked.len() - 1;
        self.ranked.replace(last, item);
        self.pending.remove(&name);
        Some(id)
    }

    /// Rebuild one item's purchase history from persisted data.
    ///
    /// A ranked identity takes the whole count directly; anything else is
    /// accumulated into the pending pool under the persisted id, and the
    /// promotion policy runs immediately.
    pub fn restore_item(&mut self, name: &str, price: Money, count: u32, id: ItemId) -> ItemId {
        if self.ranked.find_by_id(id).is_some() {
            self.ranked.add_count_by_id(id, count);
            return id;
        }
        let forced = if id.is_unassigned() { None } else { Some(id) };
        let assigned = self.pending.add_or_increment(name, price, count, forced);
        self.promote_if_due();
        assigned
    }

    /// Drop the pending pool (identity generator keeps its position).
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Factory state: default ranking, empty pool, generator rewound.
    pub fn reset_to_defaults(&mut self) {
        self.ranked.reset_to_defaults();
        self.pending.reset();
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
