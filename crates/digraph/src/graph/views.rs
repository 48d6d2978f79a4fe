//! Read-only views over the vertex set and neighbor lists of a [`DiGraph`](super::DiGraph).
//!
//! Views borrow the graph's storage directly; they never copy and cannot be used to mutate it.

use super::entries::{Link, NodeEntry, VertexId};
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// All vertices of a graph, in natural order.
pub struct VertexSet<'a, V> {
    pub(super) index: &'a BTreeMap<V, VertexId>,
}

impl<V> Clone for VertexSet<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for VertexSet<'_, V> {}

impl<'a, V: Ord> VertexSet<'a, V> {
    pub fn iter(&self) -> Vertices<'a, V> {
        Vertices(self.index.keys())
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }
}

impl<'a, V: Ord> IntoIterator for VertexSet<'a, V> {
    type Item = &'a V;
    type IntoIter = Vertices<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Ord + fmt::Debug> fmt::Debug for VertexSet<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

pub struct Vertices<'a, V>(btree_map::Keys<'a, V, VertexId>);

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> DoubleEndedIterator for Vertices<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}

/// Successors or predecessors of one vertex, in natural order.
///
/// Querying an unknown vertex produces an empty set.
pub struct NeighborSet<'a, V> {
    pub(super) nodes: &'a [NodeEntry<V>],
    pub(super) links: &'a [Link],
}

impl<V> Clone for NeighborSet<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for NeighborSet<'_, V> {}

impl<'a, V: Ord> NeighborSet<'a, V> {
    pub(super) fn empty() -> Self {
        Self {
            nodes: &[],
            links: &[],
        }
    }

    pub fn iter(&self) -> Neighbors<'a, V> {
        Neighbors {
            nodes: self.nodes,
            links: self.links.iter(),
        }
    }

    /// Neighbors paired with the weight of the connecting edge.
    pub fn weighted(&self) -> impl DoubleEndedIterator<Item = (&'a V, f64)> + use<'a, V> {
        let nodes = self.nodes;
        self.links
            .iter()
            .map(move |l| (&nodes[l.target.index()].id, l.weight))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn contains(&self, v: &V) -> bool {
        self.links
            .binary_search_by(|l| self.nodes[l.target.index()].id.cmp(v))
            .is_ok()
    }
}

impl<'a, V: Ord> IntoIterator for NeighborSet<'a, V> {
    type Item = &'a V;
    type IntoIter = Neighbors<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Ord + fmt::Debug> fmt::Debug for NeighborSet<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

pub struct Neighbors<'a, V> {
    nodes: &'a [NodeEntry<V>],
    links: std::slice::Iter<'a, Link>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let l = self.links.next()?;
        Some(&self.nodes[l.target.index()].id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.links.size_hint()
    }
}

impl<V> DoubleEndedIterator for Neighbors<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let l = self.links.next_back()?;
        Some(&self.nodes[l.target.index()].id)
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}
