//! Min-priority frontier shared by Dijkstra, A*, and Kruskal
//!
//! Items may be pushed several times with different priorities; callers
//! skip stale entries when they pop an item that is already finalized.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry ordered by priority, then by insertion sequence
#[derive(Debug, Clone)]
pub struct FrontierEntry<T> {
    pub priority: f64,
    seq: u64,
    pub item: T,
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Debug, Clone)]
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<FrontierEntry<T>>>,
    next_seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            seq,
            item,
        }));
    }

    /// Remove the item with the smallest priority; equal priorities come
    /// out in insertion order
    pub fn pop(&mut self) -> Option<T> {
        self.pop_entry().map(|entry| entry.item)
    }

    pub fn pop_entry(&mut self) -> Option<FrontierEntry<T>> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.priority)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
