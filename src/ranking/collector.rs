//! Bounded collection of the best-scoring candidates.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A scored candidate, identified by its position in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// Position of the candidate in the original sequence.
    pub index: usize,
    /// Hybrid score of the candidate.
    pub score: f64,
}

/// Heap entry ordered so that the *worst* candidate is the greatest, which
/// puts it on top of the max-heap and makes it the one evicted.
///
/// Worse means a lower score; between equal scores the later index is
/// worse, so ties resolve in favour of the earlier candidate.
#[derive(Debug, Clone, Copy)]
struct HeapEntry(ScoredCandidate);

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on score: lower scores come first
        other
            .0
            .score
            .total_cmp(&self.0.score)
            .then_with(|| self.0.index.cmp(&other.0.index))
    }
}

/// Keeps the top `capacity` candidates seen so far.
///
/// Each [`collect`](Self::collect) pushes the candidate and, once the heap
/// holds more than `capacity` entries, evicts the worst one, so memory stays
/// `O(capacity)` and a full pass over `C` candidates costs `O(C log n)`.
///
/// # Examples
///
/// ```
/// use simscore::ranking::TopMatchesCollector;
///
/// let mut collector = TopMatchesCollector::new(2);
/// collector.collect(0, 0.2);
/// collector.collect(1, 0.9);
/// collector.collect(2, 0.5);
///
/// let ranked: Vec<usize> = collector.into_ranked().iter().map(|c| c.index).collect();
/// assert_eq!(ranked, vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct TopMatchesCollector {
    /// Maximum number of candidates to keep.
    capacity: usize,
    /// Kept candidates, worst on top.
    heap: BinaryHeap<HeapEntry>,
    /// Total number of candidates offered.
    total_seen: usize,
}

impl TopMatchesCollector {
    /// Create a collector keeping at most `capacity` candidates.
    pub fn new(capacity: usize) -> Self {
        TopMatchesCollector {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1).min(1024)),
            total_seen: 0,
        }
    }

    /// Maximum number of candidates kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of candidates currently kept.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is kept.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of candidates offered so far, kept or not.
    pub fn total_seen(&self) -> usize {
        self.total_seen
    }

    /// Lowest score currently kept, if any.
    pub fn min_score(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.0.score)
    }

    /// Offer a candidate.
    ///
    /// Candidates should be offered in increasing `index` order for the
    /// earliest-wins tie policy to hold.
    pub fn collect(&mut self, index: usize, score: f64) {
        self.total_seen += 1;
        if self.capacity == 0 {
            return;
        }

        self.heap.push(HeapEntry(ScoredCandidate { index, score }));
        if self.heap.len() > self.capacity {
            self.heap.pop();
        }
    }

    /// Drain the collector into descending score order.
    ///
    /// Popping yields the worst candidate first, so the drained sequence is
    /// ascending and is reversed before returning.
    pub fn into_ranked(mut self) -> Vec<ScoredCandidate> {
        let mut ranked = Vec::with_capacity(self.heap.len());
        while let Some(HeapEntry(candidate)) = self.heap.pop() {
            ranked.push(candidate);
        }
        ranked.reverse();
        ranked
    }
}
