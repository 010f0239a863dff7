use std::fmt::Debug;

/// An array-backed binary min-heap for priority queue operations in shortest path algorithms
///
/// Every element's priority is `<=` the priorities of both its children.
/// `push` restores that with a sift-up, `pop` and `replace_root` with a
/// sift-down, so each costs O(log n) and `peek` is O(1).
///
/// Elements with equal priorities come out in no particular order.
#[derive(Debug, Clone)]
pub struct MinHeap<V, P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered `(priority, value)` pairs; the children of `i` sit at `2i + 1` and `2i + 2`
    data: Vec<(P, V)>,
}

impl<V, P> MinHeap<V, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, value: V, priority: P) {
        self.data.push((priority, value));
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let (priority, value) = self.data.pop()?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some((value, priority))
    }

    /// Returns the element with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.data.first().map(|(priority, value)| (value, *priority))
    }

    /// Removes the root and inserts `value` in a single sift-down.
    ///
    /// Equivalent to `pop` followed by `push`, but touches at most one
    /// root-to-leaf path. On an empty heap this is a plain `push`.
    pub fn replace_root(&mut self, value: V, priority: P) -> Option<(V, P)> {
        if self.data.is_empty() {
            self.push(value, priority);
            return None;
        }

        let (old_priority, old_value) = std::mem::replace(&mut self.data[0], (priority, value));
        self.sift_down(0);
        Some((old_value, old_priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Checks the heap invariant over the whole array
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].0 <= self.data[i].0)
    }

    /// Moves the element at `idx` up while it is smaller than its parent
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx].0 < self.data[parent].0 {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `idx` down while a child is smaller
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
