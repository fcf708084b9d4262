//! Indexed binary min-heap used by the shortest-path engine.
//!
//! Alongside the heap array the queue keeps a position map from each key's
//! slot to its heap index. That gives O(1) membership and priority lookup and
//! O(log n) `extract_min` / `decrease_priority`, which a plain
//! [`std::collections::BinaryHeap`] cannot offer without lazy deletion.
//!
//! Keys are small integers (vertex ids), so identity is value equality on the
//! slot returned by [`QueueKey::slot`]. A key that has been extracted is
//! considered settled and may not be inserted again.

use std::collections::TryReserveError;

/// Key type stored in an [`IndexedMinQueue`].
///
/// The slot must be dense and small: the position map is a vector indexed by
/// it.
pub trait QueueKey: Copy {
    fn slot(self) -> usize;
}

impl QueueKey for usize {
    fn slot(self) -> usize {
        self
    }
}

impl QueueKey for u32 {
    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy)]
struct HeapEntry<K, P> {
    key: K,
    priority: P,
    /// Insertion order, used to break priority ties deterministically.
    sequence: u64,
}

impl<K, P: Ord> HeapEntry<K, P> {
    fn precedes(&self, other: &Self) -> bool {
        (&self.priority, self.sequence) < (&other.priority, other.sequence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Vacant,
    Queued(usize),
    Removed,
}

/// Mutable min-priority queue keyed by item identity.
#[derive(Debug, Clone)]
pub struct IndexedMinQueue<K, P> {
    heap: Vec<HeapEntry<K, P>>,
    positions: Vec<Position>,
    next_sequence: u64,
}

impl<K: QueueKey, P: Ord + Copy> IndexedMinQueue<K, P> {
    /// Create a queue sized for keys with slots in `[0, capacity)`.
    ///
    /// Larger slots are still accepted; the position map grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: vec![Position::Vacant; capacity],
            next_sequence: 0,
        }
    }

    /// Like [`with_capacity`](Self::with_capacity), but reports allocation
    /// failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut heap = Vec::new();
        heap.try_reserve_exact(capacity)?;
        let mut positions = Vec::new();
        positions.try_reserve_exact(capacity)?;
        positions.resize(capacity, Position::Vacant);

        Ok(Self {
            heap,
            positions,
            next_sequence: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `key` is currently queued. Settled keys are not members.
    pub fn contains(&self, key: K) -> bool {
        matches!(self.position(key), Position::Queued(_))
    }

    /// Current priority of `key`, or `None` when it is not a member.
    pub fn priority_of(&self, key: K) -> Option<P> {
        match self.position(key) {
            Position::Queued(index) => Some(self.heap[index].priority),
            Position::Vacant | Position::Removed => None,
        }
    }

    /// Add `key` with the given priority.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already queued or has already been extracted.
    pub fn insert(&mut self, key: K, priority: P) {
        let slot = key.slot();
        if slot >= self.positions.len() {
            self.positions.resize(slot + 1, Position::Vacant);
        }
        match self.positions[slot] {
            Position::Vacant => {}
            Position::Queued(_) => panic!("queue key {slot} inserted twice"),
            Position::Removed => panic!("queue key {slot} was already settled"),
        }

        let index = self.heap.len();
        self.heap.push(HeapEntry {
            key,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.positions[slot] = Position::Queued(index);
        self.sift_up(index);
    }

    /// Change the priority of a queued key and restore heap order.
    ///
    /// Relaxation only ever lowers a priority, but the entry is repositioned
    /// correctly in either direction.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not a member of the queue.
    pub fn decrease_priority(&mut self, key: K, priority: P) {
        let Position::Queued(index) = self.position(key) else {
            panic!("queue key {} is not a member", key.slot());
        };

        let previous = self.heap[index].priority;
        self.heap[index].priority = priority;
        if priority < previous {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    /// Remove and return the key with the smallest priority.
    ///
    /// Among equal priorities the earliest inserted key wins.
    pub fn extract_min(&mut self) -> Option<(K, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let entry = self.heap.pop()?;
        self.positions[entry.key.slot()] = Position::Removed;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((entry.key, entry.priority))
    }

    fn position(&self, key: K) -> Position {
        self.positions
            .get(key.slot())
            .copied()
            .unwrap_or(Position::Vacant)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].precedes(&self.heap[parent]) {
                self.swap_entries(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.swap_entries(index, smallest);
            index = smallest;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].key.slot()] = Position::Queued(a);
        self.positions[self.heap[b].key.slot()] = Position::Queued(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut IndexedMinQueue<usize, u64>) -> Vec<(usize, u64)> {
        std::iter::from_fn(|| queue.extract_min()).collect()
    }

    #[test]
    fn extracts_in_priority_order() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(5);
        queue.insert(0, 10);
        queue.insert(1, 3);
        queue.insert(2, 7);
        queue.insert(3, 1);
        queue.insert(4, 8);

        assert_eq!(
            drain(&mut queue),
            vec![(3, 1), (1, 3), (2, 7), (4, 8), (0, 10)]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(4);
        for key in [2, 0, 3, 1] {
            queue.insert(key, u64::MAX);
        }

        let keys: Vec<_> = drain(&mut queue).into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![2, 0, 3, 1]);
    }

    #[test]
    fn decrease_priority_moves_entry_to_front() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(3);
        queue.insert(0, 5);
        queue.insert(1, 6);
        queue.insert(2, 7);

        queue.decrease_priority(2, 1);
        assert_eq!(queue.priority_of(2), Some(1));
        assert_eq!(queue.extract_min(), Some((2, 1)));
    }

    #[test]
    fn raising_priority_repositions_entry() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(3);
        queue.insert(0, 1);
        queue.insert(1, 2);
        queue.insert(2, 3);

        queue.decrease_priority(0, 10);
        assert_eq!(drain(&mut queue), vec![(1, 2), (2, 3), (0, 10)]);
    }

    #[test]
    fn extracted_keys_are_no_longer_members() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(2);
        queue.insert(0, 0);
        queue.insert(1, 4);

        assert!(queue.contains(0));
        queue.extract_min();
        assert!(!queue.contains(0));
        assert_eq!(queue.priority_of(0), None);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn position_map_grows_past_capacity() {
        let mut queue: IndexedMinQueue<u32, u64> = IndexedMinQueue::with_capacity(0);
        queue.insert(9, 2);
        queue.insert(4, 1);

        assert!(queue.contains(9));
        assert_eq!(queue.extract_min(), Some((4, 1)));
    }

    #[test]
    fn try_with_capacity_reports_overflow() {
        assert!(IndexedMinQueue::<usize, u64>::try_with_capacity(usize::MAX).is_err());

        let mut queue = IndexedMinQueue::<u32, u64>::try_with_capacity(2).unwrap();
        queue.insert(1, 3);
        assert_eq!(queue.extract_min(), Some((1, 3)));
    }

    #[test]
    fn empty_queue_yields_none() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(0);
        assert_eq!(queue.extract_min(), None);
    }

    #[test]
    #[should_panic(expected = "inserted twice")]
    fn duplicate_insert_panics() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(1);
        queue.insert(0, 1);
        queue.insert(0, 2);
    }

    #[test]
    #[should_panic(expected = "already settled")]
    fn settled_key_cannot_be_requeued() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(1);
        queue.insert(0, 1);
        queue.extract_min();
        queue.insert(0, 1);
    }

    #[test]
    #[should_panic(expected = "not a member")]
    fn decreasing_non_member_panics() {
        let mut queue: IndexedMinQueue<usize, u64> = IndexedMinQueue::with_capacity(2);
        queue.insert(0, 1);
        queue.decrease_priority(1, 0);
    }
}
