use std::fmt::Debug;

use crate::algorithm::path::PathId;
use crate::data_structures::priority_queue::MinHeap;
use crate::graph::Weight;

/// A path record waiting on the frontier: its cumulative cost and a handle
/// to the record in the search's path store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry<W> {
    pub total: W,
    pub path: PathId,
}

impl<W> FrontierEntry<W> {
    pub fn new(total: W, path: PathId) -> Self {
        FrontierEntry { total, path }
    }
}

/// Set of discovered-but-not-finalized routes during a search.
///
/// Implementations differ only in cost: the engine drives both through this
/// contract.
pub trait Frontier<W>: Default + Debug
where
    W: Weight,
{
    /// True when successive `extract_minimum` calls yield non-decreasing
    /// totals, which lets the engine stop at the first extracted record that
    /// reaches the target.
    const ORDERED_EXTRACTION: bool;

    /// Adds a route to the frontier
    fn insert(&mut self, entry: FrontierEntry<W>);

    /// Removes and returns a route with the smallest total
    fn extract_minimum(&mut self) -> Option<FrontierEntry<W>>;

    /// Returns the number of routes on the frontier
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short label used in logs and benchmark output
    fn name() -> &'static str;
}

/// Unordered list scanned in full on every extraction, O(n) each.
///
/// Ties go to the first minimum found in scan order.
#[derive(Debug, Clone)]
pub struct LinearFrontier<W> {
    entries: Vec<FrontierEntry<W>>,
}

impl<W> Default for LinearFrontier<W> {
    fn default() -> Self {
        LinearFrontier { entries: Vec::new() }
    }
}

impl<W> Frontier<W> for LinearFrontier<W>
where
    W: Weight,
{
    // swap_remove reorders the list, and nothing orders it to begin with
    const ORDERED_EXTRACTION: bool = false;

    fn insert(&mut self, entry: FrontierEntry<W>) {
        self.entries.push(entry);
    }

    fn extract_minimum(&mut self) -> Option<FrontierEntry<W>> {
        let mut best: Option<usize> = None;
        for (index, entry) in self.entries.iter().enumerate() {
            match best {
                Some(current) if self.entries[current].total <= entry.total => {}
                _ => best = Some(index),
            }
        }
        best.map(|index| self.entries.swap_remove(index))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn name() -> &'static str {
        "array"
    }
}

/// Binary-heap frontier ordered by total, O(log n) insert and extract
#[derive(Debug, Clone)]
pub struct PriorityFrontier<W>
where
    W: Weight,
{
    heap: MinHeap<PathId, W>,
}

impl<W> PriorityFrontier<W>
where
    W: Weight,
{
    /// Looks at the cheapest route without removing it
    pub fn peek(&self) -> Option<FrontierEntry<W>> {
        self.heap.peek().map(|(path, total)| FrontierEntry::new(total, *path))
    }
}

impl<W> Default for PriorityFrontier<W>
where
    W: Weight,
{
    fn default() -> Self {
        PriorityFrontier { heap: MinHeap::new() }
    }
}

impl<W> Frontier<W> for PriorityFrontier<W>
where
    W: Weight,
{
    const ORDERED_EXTRACTION: bool = true;

    fn insert(&mut self, entry: FrontierEntry<W>) {
        self.heap.push(entry.path, entry.total);
    }

    fn extract_minimum(&mut self) -> Option<FrontierEntry<W>> {
        let (path, total) = self.heap.pop()?;
        Some(FrontierEntry::new(total, path))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn name() -> &'static str {
        "heap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(total: u32, path: usize) -> FrontierEntry<u32> {
        FrontierEntry::new(total, PathId::new(path))
    }

    fn drain<F: Frontier<u32>>(mut frontier: F) -> Vec<u32> {
        let mut totals = Vec::new();
        while let Some(entry) = frontier.extract_minimum() {
            totals.push(entry.total);
        }
        totals
    }

    #[test]
    fn linear_frontier_extracts_minimum() {
        let mut frontier = LinearFrontier::default();
        for (i, total) in [9, 4, 7, 1, 4].into_iter().enumerate() {
            frontier.insert(entry(total, i));
        }
        assert_eq!(frontier.len(), 5);
        assert_eq!(drain(frontier), vec![1, 4, 4, 7, 9]);
    }

    #[test]
    fn linear_frontier_breaks_ties_by_scan_order() {
        let mut frontier = LinearFrontier::default();
        frontier.insert(entry(3, 0));
        frontier.insert(entry(3, 1));
        assert_eq!(frontier.extract_minimum().map(|e| e.path), Some(PathId::new(0)));
    }

    #[test]
    fn priority_frontier_is_monotonic() {
        let mut frontier = PriorityFrontier::default();
        for (i, total) in [50, 20, 80, 10, 20, 60, 0].into_iter().enumerate() {
            frontier.insert(entry(total, i));
        }
        assert_eq!(frontier.peek().map(|e| e.total), Some(0));
        assert_eq!(drain(frontier), vec![0, 10, 20, 20, 50, 60, 80]);
    }

    #[test]
    fn empty_frontiers() {
        let mut linear = LinearFrontier::<u32>::default();
        let mut heap = PriorityFrontier::<u32>::default();
        assert!(linear.is_empty() && heap.is_empty());
        assert_eq!(linear.extract_minimum(), None);
        assert_eq!(heap.extract_minimum(), None);
        assert_eq!(heap.peek(), None);
    }
}
