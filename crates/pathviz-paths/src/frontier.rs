//! Frontier containers for the shared traversal skeleton.
//!
//! Each search variant differs only in how it orders its frontier: FIFO for
//! breadth-first, LIFO for depth-first, and a min-heap keyed by
//! `(score, insertion order)` for the cost-aware variants. Ties in the heap
//! are broken FIFO so that equal-score pops are deterministic.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// A scored heap entry. Lower score pops first; among equal scores, lower
/// insertion sequence (earlier push) pops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    score: i32,
    seq: u64,
    idx: usize,
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural ordering; the heap wraps entries in `Reverse` so the
        // smallest (score, seq) is popped first.
        self.score
            .cmp(&other.score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// The discovered-but-not-finalized set, ordered per search variant.
///
/// Entries are flat grid indices. The `score` argument to
/// [`push`](Self::push) is ignored by the unordered variants.
#[derive(Debug)]
pub(crate) enum Frontier {
    /// Insertion-order queue (breadth-first).
    Fifo(VecDeque<usize>),
    /// Most-recently-pushed-first stack (depth-first).
    Lifo(Vec<usize>),
    /// Min-priority queue (Dijkstra / A*).
    Min {
        heap: BinaryHeap<Reverse<OpenEntry>>,
        seq: u64,
    },
}

impl Frontier {
    pub(crate) fn fifo() -> Self {
        Self::Fifo(VecDeque::new())
    }

    pub(crate) fn lifo() -> Self {
        Self::Lifo(Vec::new())
    }

    pub(crate) fn min_heap() -> Self {
        Self::Min {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, idx: usize, score: i32) {
        match self {
            Self::Fifo(queue) => queue.push_back(idx),
            Self::Lifo(stack) => stack.push(idx),
            Self::Min { heap, seq } => {
                heap.push(Reverse(OpenEntry {
                    score,
                    seq: *seq,
                    idx,
                }));
                *seq += 1;
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::Lifo(stack) => stack.pop(),
            Self::Min { heap, .. } => heap.pop().map(|Reverse(entry)| entry.idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifo_pops_in_insertion_order() {
        let mut f = Frontier::fifo();
        for i in 0..4 {
            f.push(i, 0);
        }
        assert_eq!(f.pop(), Some(0));
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(3));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn lifo_pops_most_recent_first() {
        let mut f = Frontier::lifo();
        for i in 0..3 {
            f.push(i, 0);
        }
        assert_eq!(f.pop(), Some(2));
        assert_eq!(f.pop(), Some(1));
        assert_eq!(f.pop(), Some(0));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn min_heap_pops_lowest_score_first() {
        let mut f = Frontier::min_heap();
        f.push(10, 5);
        f.push(11, 2);
        f.push(12, 7);
        f.push(13, 2);
        assert_eq!(f.pop(), Some(11)); // score 2, pushed first
        assert_eq!(f.pop(), Some(13)); // score 2, pushed second
        assert_eq!(f.pop(), Some(10));
        assert_eq!(f.pop(), Some(12));
        assert_eq!(f.pop(), None);
    }
}
