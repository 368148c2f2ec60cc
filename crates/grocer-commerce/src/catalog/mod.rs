//! Item catalog module.
//!
//! Contains the frequency ranking, the pending custom-item pool, and the
//! promotion policy that reconciles the two.

mod catalog;
mod item;
mod pending;
mod ranking;

pub use catalog::{Catalog, PROMOTED_ICON};
pub use item::{name_eq, CatalogItem};
pub use pending::{PendingCustoms, PendingItem};
pub use ranking::{default_items, RankedItems, MAX_RANKED_ITEMS};
