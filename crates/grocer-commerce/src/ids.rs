//! Numeric item identity.
//!
//! Using a newtype keeps item ids from being mixed up with quantities,
//! positions, and other plain integers floating around the cart code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// First identity in the custom (ad-hoc) range. Ids below this value are
/// reserved for the built-in default items.
pub const CUSTOM_ID_BASE: i32 = 1000;

/// Stable numeric key for a catalog item.
///
/// Identity-to-record association never changes: a record keeps its id
/// across every re-sort and promotion. The numeric ranges are part of the
/// external contract and restore logic depends on them:
///
/// - `0..1000`: built-in default items
/// - `>= 1000`: custom (ad-hoc) items
/// - `-1`: unassigned sentinel (brand-new cart entry, no catalog record yet)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i32);

impl ItemId {
    /// Sentinel for a line that has no catalog identity yet.
    pub const UNASSIGNED: ItemId = ItemId(-1);

    /// Create an id from a raw integer.
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Get the raw integer value.
    pub fn raw(&self) -> i32 {
        self.0
    }

    /// Check for the unassigned sentinel.
    pub fn is_unassigned(&self) -> bool {
        self.0 == Self::UNASSIGNED.0
    }

    /// True for ids in the built-in default range.
    pub fn is_default(&self) -> bool {
        self.0 >= 0 && self.0 < CUSTOM_ID_BASE
    }

    /// True for ad-hoc items: generated ids and the unassigned sentinel.
    pub fn is_custom(&self) -> bool {
        !self.is_default()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ItemId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}
