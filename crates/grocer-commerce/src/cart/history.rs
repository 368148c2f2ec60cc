//! Undo history for cart additions.

use crate::cart::CartLine;
use serde::{Deserialize, Serialize};

/// Last-in-first-out record of cart additions.
///
/// Every cart addition is recorded here in lockstep; deletions and checkout
/// are not. Undoing pops the most recent addition and removes the matching
/// cart line by name. If the addition was merged into an existing line, the
/// whole merged line goes: undo is name-grained, not position-exact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UndoHistory {
    entries: Vec<CartLine>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of recorded additions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there is anything to undo.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a cart addition.
    pub fn record(&mut self, line: CartLine) {
        self.entries.push(line);
    }

    /// Pop the most recent addition, if any.
    pub fn pop_last(&mut self) -> Option<CartLine> {
        self.entries.pop()
    }

    /// The recorded additions, most recent first (for visualization).
    pub fn entries(&self) -> impl Iterator<Item = &CartLine> {
        self.entries.iter().rev()
    }

    /// Forget all recorded additions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
