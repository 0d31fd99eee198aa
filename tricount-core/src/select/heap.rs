//! Fixed-capacity binary min-heap of ranked entries.
//!
//! ## Layout
//!
//! ```text
//! slots: [e0][e1][e2][e3][e4] ...      children of i: 2i+1, 2i+2
//!         ^ minimum count                parent of i:   (i-1)/2
//! ```
//!
//! Ordering is by count alone; entries with equal counts are
//! interchangeable as far as the heap is concerned.

use tricount_types::{Count, RankedEntry};

/// Array-backed min-heap that never grows past its capacity.
#[derive(Debug, Clone)]
pub struct BoundedMinHeap {
    slots: Vec<RankedEntry>,
    capacity: usize,
}

impl BoundedMinHeap {
    /// Creates an empty heap that will hold at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of entries currently held.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the heap holds nothing.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maximum number of entries.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once `len() == capacity()`.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// The entry with the smallest count.
    #[inline(always)]
    pub fn peek_min(&self) -> Option<&RankedEntry> {
        self.slots.first()
    }

    /// Smallest count currently held.
    #[inline(always)]
    pub fn min_count(&self) -> Option<Count> {
        self.peek_min().map(|e| e.count)
    }

    /// Removes and returns the entry with the smallest count.
    pub fn pop_min(&mut self) -> Option<RankedEntry> {
        let last = self.slots.len().checked_sub(1)?;
        self.slots.swap(0, last);
        let min = self.slots.pop();
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Offers an entry to the heap.
    ///
    /// Below capacity the entry is always admitted. At capacity it replaces
    /// the current minimum only if its count is strictly greater; otherwise
    /// it is discarded. Returns `true` if the entry was admitted.
    pub fn push_bounded(&mut self, entry: RankedEntry) -> bool {
        if self.capacity == 0 {
            return false;
        }

        if !self.is_full() {
            self.slots.push(entry);
            self.sift_up(self.slots.len() - 1);
            return true;
        }

        match self.min_count() {
            Some(min) if entry.count > min => {
                self.slots[0] = entry;
                self.sift_down(0);
                true
            }
            _ => false,
        }
    }

    /// Returns the held entries in heap order.
    pub fn into_vec(self) -> Vec<RankedEntry> {
        self.slots
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.slots[i].count >= self.slots[parent].count {
                break;
            }
            self.slots.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * i + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.slots[right].count < self.slots[left].count {
                right
            } else {
                left
            };
            if self.slots[i].count <= self.slots[smaller].count {
                break;
            }
            self.slots.swap(i, smaller);
            i = smaller;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricount_types::Trigram;

    fn entry(word: &str, count: Count) -> RankedEntry {
        RankedEntry::new(Trigram::new(word, word, word), count)
    }

    fn is_heap(heap: &BoundedMinHeap) -> bool {
        let s = &heap.slots;
        (1..s.len()).all(|i| s[(i - 1) / 2].count <= s[i].count)
    }

    #[test]
    fn pop_min_yields_ascending_counts() {
        let mut heap = BoundedMinHeap::with_capacity(16);
        for (i, c) in [5u64, 3, 9, 1, 7, 2, 8].into_iter().enumerate() {
            heap.push_bounded(entry(&i.to_string(), c));
            assert!(is_heap(&heap));
        }

        let mut counts = Vec::new();
        while let Some(e) = heap.pop_min() {
            assert!(is_heap(&heap));
            counts.push(e.count);
        }
        assert_eq!(counts, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut heap = BoundedMinHeap::with_capacity(3);
        for c in 1..=10u64 {
            heap.push_bounded(entry("w", c));
            assert!(heap.len() <= 3);
        }
        assert!(heap.is_full());
        assert_eq!(heap.min_count(), Some(8));
    }

    #[test]
    fn at_capacity_equal_count_is_discarded() {
        let mut heap = BoundedMinHeap::with_capacity(2);
        assert!(heap.push_bounded(entry("a", 4)));
        assert!(heap.push_bounded(entry("b", 6)));
        assert!(!heap.push_bounded(entry("c", 4)));
        assert!(!heap.push_bounded(entry("d", 1)));
        assert!(heap.push_bounded(entry("e", 5)));

        assert_eq!(heap.peek_min().map(|e| e.trigram.first()), Some("e"));
    }

    #[test]
    fn zero_capacity_admits_nothing() {
        let mut heap = BoundedMinHeap::with_capacity(0);
        assert!(!heap.push_bounded(entry("a", 100)));
        assert!(heap.is_empty());
        assert_eq!(heap.peek_min(), None);
        assert_eq!(heap.pop_min(), None);
    }

    #[test]
    fn pop_from_single_entry() {
        let mut heap = BoundedMinHeap::with_capacity(1);
        heap.push_bounded(entry("only", 1));
        assert_eq!(heap.pop_min().map(|e| e.count), Some(1));
        assert!(heap.is_empty());
    }
}
