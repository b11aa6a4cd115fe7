/*
 * Copyright (c) 2018, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Binary heap implementation

use crate::collections::PriQueue;

/// Heap item information.
struct BinHeapItem<K, V> {
    /// The key associated with this item.
    key: K,
    /// The value (priority) of the item.
    value: V,
    /// Sequence number of the push that created this item.
    seq: usize,
}

impl<K, V> BinHeapItem<K, V>
where
    V: PartialOrd,
{
    /// Return `true` if `self` must leave the heap before `other`.
    ///
    /// Smaller values come first, equal (or incomparable) values are
    /// ordered by their sequence number.
    fn precedes(&self, other: &Self) -> bool {
        if self.value < other.value {
            true
        } else if other.value < self.value {
            false
        } else {
            self.seq < other.seq
        }
    }
}

/// Simple binary min-heap.
///
/// Ties between elements with equal value are broken by insertion order,
/// so the sequence of elements returned by `pop_min` only depends on the
/// sequence of operations.
///
/// # Example
///
/// ```
/// use mst_forest::collections::{BinHeap, PriQueue};
///
/// let mut heap = BinHeap::new();
/// heap.push('a', 3);
/// heap.push('b', 1);
/// heap.push('c', 3);
///
/// assert_eq!(heap.pop_min(), Some(('b', 1)));
/// assert_eq!(heap.pop_min(), Some(('a', 3)));
/// assert_eq!(heap.pop_min(), Some(('c', 3)));
/// assert_eq!(heap.pop_min(), None);
/// ```
pub struct BinHeap<K, V> {
    /// The heap elements.
    heap: Vec<BinHeapItem<K, V>>,
    /// Sequence number of the next pushed element.
    next_seq: usize,
}

impl<K, V> BinHeap<K, V> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Create an empty heap with space for at least `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        BinHeap {
            heap: Vec::with_capacity(cap),
            next_seq: 0,
        }
    }
}

impl<K, V> Default for BinHeap<K, V> {
    fn default() -> Self {
        BinHeap {
            heap: vec![],
            next_seq: 0,
        }
    }
}

impl<K, V> PriQueue<K, V> for BinHeap<K, V>
where
    V: PartialOrd,
{
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    fn push(&mut self, key: K, value: V) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(BinHeapItem { key, value, seq });
        self.upheap(self.heap.len() - 1);
    }

    fn pop_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element, the last element takes its place
        let min_item = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some((min_item.key, min_item.value))
    }

    fn peek_min(&self) -> Option<(&K, &V)> {
        self.heap.first().map(|item| (&item.key, &item.value))
    }
}

impl<K, V> BinHeap<K, V>
where
    V: PartialOrd,
{
    /// Move the element at position `pos` up in the heap until its parent
    /// precedes it or the root is reached.
    fn upheap(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent_pos = (pos - 1) / 2;
            if !self.heap[pos].precedes(&self.heap[parent_pos]) {
                break;
            }
            self.heap.swap(pos, parent_pos);
            pos = parent_pos;
        }
    }

    /// Move the element at position `pos` down in the heap until it
    /// precedes both children.
    fn downheap(&mut self, mut pos: usize) {
        let n = self.heap.len();
        loop {
            let left_pos = 2 * pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos < n && self.heap[right_pos].precedes(&self.heap[left_pos]) {
                right_pos
            } else {
                left_pos
            };

            if !self.heap[next_pos].precedes(&self.heap[pos]) {
                break;
            }

            self.heap.swap(pos, next_pos);
            pos = next_pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BinHeap;
    use crate::collections::PriQueue;

    #[test]
    fn test_sorted_output() {
        let values = [7, 3, 9, 1, 4, 8, 2, 6, 5, 0];
        let mut heap = BinHeap::new();
        for (i, &v) in values.iter().enumerate() {
            heap.push(i, v);
        }
        assert_eq!(heap.len(), values.len());

        let mut popped = vec![];
        while let Some((_, v)) = heap.pop_min() {
            popped.push(v);
        }
        assert_eq!(popped, (0..10).collect::<Vec<_>>());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_ties_in_insertion_order() {
        let mut heap = BinHeap::new();
        for &(k, v) in &[('a', 2), ('b', 1), ('c', 2), ('d', 1), ('e', 2), ('f', 1)] {
            heap.push(k, v);
        }
        let keys: Vec<_> = std::iter::from_fn(|| heap.pop_min().map(|(k, _)| k)).collect();
        assert_eq!(keys, vec!['b', 'd', 'f', 'a', 'c', 'e']);
    }

    #[test]
    fn test_interleaved() {
        let mut heap = BinHeap::with_capacity(4);
        heap.push("x", 5.0);
        heap.push("y", 2.5);
        assert_eq!(heap.peek_min(), Some((&"y", &2.5)));
        assert_eq!(heap.pop_min(), Some(("y", 2.5)));
        heap.push("z", 5.0);
        heap.push("w", -1.0);
        assert_eq!(heap.pop_min(), Some(("w", -1.0)));
        assert_eq!(heap.pop_min(), Some(("x", 5.0)));
        assert_eq!(heap.pop_min(), Some(("z", 5.0)));
        assert_eq!(heap.pop_min(), None);
        assert_eq!(heap.peek_min(), None);
    }

    #[test]
    fn test_clear() {
        let mut heap = BinHeap::new();
        heap.push(1, 1);
        heap.push(2, 0);
        heap.clear();
        assert!(heap.is_empty());
        heap.push(3, 4);
        assert_eq!(heap.pop_min(), Some((3, 4)));
    }
}
