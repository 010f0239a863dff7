use std::fmt;

use crate::graph::{VertexId, Weight};

/// Handle to a record inside a [`PathStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathId(usize);

impl PathId {
    pub fn new(index: usize) -> Self {
        PathId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One step of a route as stored during a search.
///
/// `total` is the cumulative cost from the source to `destination` and
/// equals the predecessor's total plus the weight of the edge taken.
/// A record with no predecessor starts at the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRecord<W> {
    pub total: W,
    pub destination: VertexId,
    pub previous: Option<PathId>,
}

/// Arena owning every path record created by one search.
///
/// Records are appended and never changed, so a [`PathId`] stays valid for
/// the lifetime of the store. Frontiers and the finalized list only hold IDs.
#[derive(Debug, Clone)]
pub struct PathStore<W> {
    records: Vec<PathRecord<W>>,
}

impl<W> PathStore<W>
where
    W: Weight,
{
    pub fn new() -> Self {
        PathStore { records: Vec::new() }
    }

    pub fn push(&mut self, total: W, destination: VertexId, previous: Option<PathId>) -> PathId {
        let id = PathId(self.records.len());
        self.records.push(PathRecord {
            total,
            destination,
            previous,
        });
        id
    }

    pub fn get(&self, id: PathId) -> Option<&PathRecord<W>> {
        self.records.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copies the chain ending at `id` out of the store as an owned [`Path`].
    ///
    /// The result points backward: its head is the record at `id`, and the
    /// last link is the first hop out of the source.
    pub fn materialize(&self, id: PathId) -> Option<Path<W>> {
        let mut chain = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let record = self.get(current)?;
            chain.push(record);
            cursor = record.previous;
        }

        let mut path: Option<Path<W>> = None;
        for record in chain.into_iter().rev() {
            path = Some(Path::new(record.total, record.destination, path));
        }
        path
    }
}

impl<W> Default for PathStore<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

/// An owned route, one node per vertex reached.
///
/// As returned by a search the chain runs backward from the destination
/// toward the source, and `previous` means "the step before". After
/// [`reverse_path`] it runs forward from the source, and `previous` means
/// "the next step".
pub struct Path<W> {
    total: W,
    destination: VertexId,
    previous: Option<Box<Path<W>>>,
}

impl<W> Path<W> {
    pub fn new(total: W, destination: VertexId, previous: Option<Path<W>>) -> Self {
        Path {
            total,
            destination,
            previous: previous.map(Box::new),
        }
    }

    /// Cumulative cost from the source to this node's destination
    pub fn total(&self) -> W
    where
        W: Copy,
    {
        self.total
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }

    pub fn previous(&self) -> Option<&Path<W>> {
        self.previous.as_deref()
    }

    /// Detaches and returns the rest of the chain
    pub fn into_previous(mut self) -> Option<Path<W>> {
        self.previous.take().map(|node| *node)
    }

    /// Walks the chain from this node along `previous` links
    pub fn iter(&self) -> PathIter<'_, W> {
        PathIter { next: Some(self) }
    }

    /// Destinations in chain order
    pub fn vertices(&self) -> Vec<VertexId> {
        self.iter().map(Path::destination).collect()
    }

    /// Number of nodes in the chain
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Flips every link in place, so the last node becomes the head.
    ///
    /// Walks the chain once with the usual current / previous / next
    /// pointers; totals stay attached to their nodes.
    pub fn reversed(self) -> Path<W> {
        let mut head = Box::new(self);
        let mut rest = head.previous.take();
        while let Some(mut node) = rest {
            rest = node.previous.take();
            node.previous = Some(head);
            head = node;
        }
        *head
    }
}

// Clone, equality and Debug walk the chain in a loop; derived versions
// recurse once per node and overflow the stack on long routes.
impl<W: Clone> Clone for Path<W> {
    fn clone(&self) -> Self {
        let nodes: Vec<&Path<W>> = self.iter().collect();
        let mut path: Option<Path<W>> = None;
        for node in nodes.into_iter().rev() {
            path = Some(Path::new(node.total.clone(), node.destination, path));
        }
        match path {
            Some(path) => path,
            None => Path::new(self.total.clone(), self.destination, None),
        }
    }
}

impl<W: PartialEq> PartialEq for Path<W> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.total == b.total && a.destination == b.destination => {}
                _ => return false,
            }
        }
    }
}

impl<W: Eq> Eq for Path<W> {}

impl<W: fmt::Debug> fmt::Debug for Path<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| (node.destination, &node.total)))
            .finish()
    }
}

impl<W> Drop for Path<W> {
    // Unlink iteratively so dropping a long route cannot overflow the stack.
    fn drop(&mut self) {
        let mut next = self.previous.take();
        while let Some(mut node) = next {
            next = node.previous.take();
        }
    }
}

pub struct PathIter<'a, W> {
    next: Option<&'a Path<W>>,
}

impl<'a, W> Iterator for PathIter<'a, W> {
    type Item = &'a Path<W>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.previous();
        Some(current)
    }
}

/// Turns a backward chain returned by a search into a forward route.
///
/// The result starts with a zero-cost node for `source` followed by every
/// step to the destination. An absent chain, meaning the target was
/// unreachable, stays absent.
pub fn reverse_path<W>(path: Option<Path<W>>, source: VertexId) -> Option<Path<W>>
where
    W: Weight,
{
    let forward = path?.reversed();
    Some(Path::new(W::zero(), source, Some(forward)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    // source v0 -> v1 (2) -> v2 (5) -> v3 (6), stored backward
    fn sample_store() -> (PathStore<u32>, PathId) {
        let mut store = PathStore::new();
        let first = store.push(2, v(1), None);
        let second = store.push(5, v(2), Some(first));
        let third = store.push(6, v(3), Some(second));
        (store, third)
    }

    #[test]
    fn materialize_builds_backward_chain() {
        let (store, last) = sample_store();
        let path = store.materialize(last).unwrap();

        assert_eq!(path.total(), 6);
        assert_eq!(path.vertices(), vec![v(3), v(2), v(1)]);
        assert_eq!(path.len(), 3);
        assert_eq!(store.len(), 3);
        assert!(store.materialize(PathId::new(10)).is_none());
    }

    #[test]
    fn reverse_path_prepends_zero_cost_source() {
        let (store, last) = sample_store();
        let forward = reverse_path(store.materialize(last), v(0)).unwrap();

        assert_eq!(forward.vertices(), vec![v(0), v(1), v(2), v(3)]);
        let totals: Vec<u32> = forward.iter().map(Path::total).collect();
        assert_eq!(totals, vec![0, 2, 5, 6]);
    }

    #[test]
    fn reverse_path_of_nothing_is_nothing() {
        assert!(reverse_path::<u32>(None, v(0)).is_none());
    }

    #[test]
    fn reversing_twice_restores_order() {
        let (store, last) = sample_store();
        let backward = store.materialize(last).unwrap();
        let forward = reverse_path(Some(backward.clone()), v(0)).unwrap();

        let restored = forward.into_previous().unwrap().reversed();
        assert_eq!(restored, backward);
        assert_eq!(restored.total(), 6);
    }

    #[test]
    fn single_node_reversal() {
        let path = Path::new(4u32, v(7), None);
        let reversed = path.clone().reversed();
        assert_eq!(reversed, path);
    }

    #[test]
    fn long_chain_is_handled_without_recursion() {
        let mut path = Path::new(0u64, v(0), None);
        for i in 1..200_000u64 {
            path = Path::new(i, v(i as usize), Some(path));
        }
        assert_eq!(path.len(), 200_000);

        let copy = path.clone();
        assert_eq!(copy.len(), 200_000);
        assert!(copy == path);
        let rendered = format!("{:?}", copy);
        assert!(rendered.starts_with("[(VertexId(199999), 199999)"));
        drop(copy);

        let forward = path.reversed();
        assert_eq!(forward.total(), 0);
        drop(forward);
    }
}
