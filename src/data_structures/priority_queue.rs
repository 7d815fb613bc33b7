use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over a `BinaryHeap` with no decrease-key.
///
/// Callers push a fresh entry whenever a priority improves and discard stale
/// entries on pop (lazy deletion). Among equal priorities the entry pushed
/// first is popped first.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap: (priority, push sequence, value)
    heap: BinaryHeap<Reverse<(P, u64, V)>>,

    /// Number of pushes so far
    pushed: u64,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the queue, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of entries ever pushed
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Pushes a value with the given priority
    pub fn push(&mut self, value: V, priority: P) {
        self.heap.push(Reverse((priority, self.pushed, value)));
        self.pushed += 1;
    }

    /// Removes the entry with the lowest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, _, value))| (value, priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut queue = MinQueue::new();
        queue.push('a', 5u64);
        queue.push('b', 1);
        queue.push('c', 3);

        assert_eq!(queue.pop(), Some(('b', 1)));
        assert_eq!(queue.pop(), Some(('c', 3)));
        assert_eq!(queue.pop(), Some(('a', 5)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn equal_priorities_pop_in_push_order() {
        let mut queue = MinQueue::new();
        // 'z' sorts after 'a', so only the push sequence can put it first
        queue.push('z', 2u64);
        queue.push('a', 2);
        queue.push('m', 2);

        assert_eq!(queue.pop(), Some(('z', 2)));
        assert_eq!(queue.pop(), Some(('a', 2)));
        assert_eq!(queue.pop(), Some(('m', 2)));
    }

    #[test]
    fn stale_entries_stay_until_popped() {
        let mut queue = MinQueue::new();
        queue.push(1u32, 10u64);
        queue.push(1, 4);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pushed(), 2);
        assert_eq!(queue.pop(), Some((1, 4)));
        assert_eq!(queue.pop(), Some((1, 10)));
        assert!(queue.is_empty());
    }
}
