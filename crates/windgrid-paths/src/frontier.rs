//! Min-priority frontier keyed by `(f, discovery_order)`.

use std::collections::BinaryHeap;

use windgrid_core::Point;

/// A discovered-but-unexpanded cell, ordered by `f` with ties broken by the
/// smaller discovery order (FIFO-like among equal priorities).
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    f: i32,
    order: u32,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.f.cmp(&self.f).then(other.order.cmp(&self.order))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The set of discovered cells awaiting expansion.
///
/// Every cell is pushed at most once (discovery assigns its order and cost
/// for good), so there are no stale entries to skip on pop.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub(crate) fn push(&mut self, pos: Point, f: i32, order: u32) {
        self.heap.push(Entry { f, order, pos });
    }

    /// Remove and return the position with the minimum `(f, order)` key.
    pub(crate) fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|e| e.pos)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
