use decision_tree::{StateId, Utility};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    state: StateId,
    priority: Option<Utility>,
    sequence: u64,
}

impl Entry {
    /// Higher priority first; among equal priorities the earlier insertion.
    fn outranks(&self, other: &Entry) -> bool {
        match self.priority.cmp(&other.priority) {
            std::cmp::Ordering::Equal => self.sequence < other.sequence,
            ordering => ordering == std::cmp::Ordering::Greater,
        }
    }
}

/// Binary max-heap of states keyed by expected utility, with a position map
/// so any queued state can be removed by identity in O(log n).
///
/// `None` priorities rank below every `Some`. Removing and pushing a state
/// again counts as a new insertion for tie-breaking.
#[derive(Debug, Default)]
pub(crate) struct StatePriorityQueue {
    heap: Vec<Entry>,
    positions: HashMap<StateId, usize>,
    next_sequence: u64,
}

impl StatePriorityQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.positions.contains_key(&state)
    }

    /// Queues `state`. Returns false, leaving the queue untouched, if the
    /// state is already queued.
    pub fn push(&mut self, state: StateId, priority: Option<Utility>) -> bool {
        if self.contains(state) {
            return false;
        }

        let index = self.heap.len();
        self.heap.push(Entry {
            state,
            priority,
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
        self.positions.insert(state, index);
        self.sift_up(index);
        true
    }

    pub fn pop(&mut self) -> Option<(StateId, Option<Utility>)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.state);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.state, entry.priority))
    }

    /// Takes `state` out of the queue, returning its priority if it was
    /// queued.
    pub fn remove(&mut self, state: StateId) -> Option<Option<Utility>> {
        let index = *self.positions.get(&state)?;
        let last = self.heap.len() - 1;
        self.swap(index, last);
        let entry = self.heap.pop()?;
        self.positions.remove(&entry.state);

        if index < self.heap.len() && !self.sift_up(index) {
            self.sift_down(index);
        }
        Some(entry.priority)
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].state, a);
        self.positions.insert(self.heap[b].state, b);
    }

    /// Returns whether the entry moved.
    fn sift_up(&mut self, mut index: usize) -> bool {
        let start = index;
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.heap[index].outranks(&self.heap[parent]) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
        index != start
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;
            if left < len && self.heap[left].outranks(&self.heap[best]) {
                best = left;
            }
            if right < len && self.heap[right].outranks(&self.heap[best]) {
                best = right;
            }
            if best == index {
                break;
            }
            self.swap(index, best);
            index = best;
        }
    }
}
