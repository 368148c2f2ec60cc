//! FIFO checkout queue.

use crate::cart::CartLine;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// First-in-first-out staging of cart lines awaiting receipt processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CheckoutQueue {
    lines: VecDeque<CartLine>,
}

impl CheckoutQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            lines: VecDeque::new(),
        }
    }

    /// Number of staged lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Stage a line at the back of the queue.
    pub fn enqueue(&mut self, line: CartLine) {
        self.lines.push_back(line);
    }

    /// Consume the line at the front of the queue, if any.
    pub fn dequeue(&mut self) -> Option<CartLine> {
        self.lines.pop_front()
    }

    /// Peek at the staged lines front-to-back without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Drop all staged lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;
    use crate::money::{Currency, Money};

    fn line(name: &str) -> CartLine {
        CartLine::new(name, 1, ItemId::new(0), Money::zero(Currency::INR))
    }

    #[test]
    fn test_dequeue_is_fifo() {
        let mut queue = CheckoutQueue::new();
        queue.enqueue(line("Milk"));
        queue.enqueue(line("Bread"));
        assert_eq!(queue.dequeue().unwrap().name, "Milk");
        assert_eq!(queue.dequeue().unwrap().name, "Bread");
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn test_iter_does_not_consume() {
        let mut queue = CheckoutQueue::new();
        queue.enqueue(line("Milk"));
        queue.enqueue(line("Bread"));
        let names: Vec<&str> = queue.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Bread"]);
        assert_eq!(queue.len(), 2);
    }
}
