//! Ordered directed graph container.
//!
//! Vertices live in an arena and are addressed by stable indices. Every edge is stored twice:
//! once in the successor list of its source and once in the predecessor list of its target.
//! Both lists hold arena indices sorted by the natural order of the vertices they point to, so
//! every traversal over the graph is deterministic for a given `Ord` on the vertex type.

pub mod alg;
mod entries;
mod views;

use crate::error::{GraphError, Result};
use std::collections::BTreeMap;
use std::fmt;

pub(crate) use entries::{Link, VertexId};
use entries::NodeEntry;
pub use views::{NeighborSet, Neighbors, VertexSet, Vertices};

#[derive(Debug, Clone)]
pub struct DiGraph<V> {
    nodes: Vec<NodeEntry<V>>,
    index: BTreeMap<V, VertexId>,
}

impl<V> Default for DiGraph<V> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl<V: Ord + Clone> DiGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `v` with no incident edges. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        self.insert_vertex(v);
        true
    }

    fn ensure_vertex(&mut self, v: V) -> VertexId {
        match self.index.get(&v) {
            Some(&ix) => ix,
            None => self.insert_vertex(v),
        }
    }

    fn insert_vertex(&mut self, v: V) -> VertexId {
        let ix = VertexId(self.nodes.len());
        self.nodes.push(NodeEntry::new(v.clone()));
        self.index.insert(v, ix);
        ix
    }

    /// Adds the edge `v -> w` with weight `1.0`. See [`DiGraph::add_weighted_edge`].
    pub fn add_edge(&mut self, v: V, w: V) -> bool {
        self.add_weighted_edge(v, w, 1.0)
    }

    /// Adds the edge `v -> w`, inserting missing endpoints first.
    ///
    /// Returns `true` if the edge was new. Re-adding an existing edge only replaces its weight
    /// and returns `false`.
    pub fn add_weighted_edge(&mut self, v: V, w: V, weight: f64) -> bool {
        let v_ix = self.ensure_vertex(v);
        let w_ix = self.ensure_vertex(w);

        let out_slot = self.link_slot(&self.nodes[v_ix.index()].succ, w_ix);
        let in_slot = self.link_slot(&self.nodes[w_ix.index()].pred, v_ix);
        debug_assert_eq!(
            out_slot.is_ok(),
            in_slot.is_ok(),
            "successor and predecessor lists disagree"
        );
        let added = out_slot.is_err() && in_slot.is_err();

        upsert_link(&mut self.nodes[v_ix.index()].succ, out_slot, w_ix, weight);
        upsert_link(&mut self.nodes[w_ix.index()].pred, in_slot, v_ix, weight);
        added
    }

    fn link_slot(&self, links: &[Link], target: VertexId) -> std::result::Result<usize, usize> {
        let key = &self.nodes[target.index()].id;
        links.binary_search_by(|l| self.nodes[l.target.index()].id.cmp(key))
    }

    fn find_link<'a>(&'a self, links: &'a [Link], target: &V) -> Option<&'a Link> {
        links
            .binary_search_by(|l| self.nodes[l.target.index()].id.cmp(target))
            .ok()
            .map(|i| &links[i])
    }

    fn entry(&self, v: &V) -> Option<&NodeEntry<V>> {
        self.index.get(v).map(|ix| &self.nodes[ix.index()])
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Whether `v -> w` exists. Both the successor list of `v` and the predecessor list of `w`
    /// have to agree.
    pub fn contains_edge(&self, v: &V, w: &V) -> bool {
        let (Some(ve), Some(we)) = (self.entry(v), self.entry(w)) else {
            return false;
        };
        self.find_link(&ve.succ, w).is_some() && self.find_link(&we.pred, v).is_some()
    }

    pub fn weight(&self, v: &V, w: &V) -> Result<f64> {
        let link = self
            .entry(v)
            .and_then(|ve| self.find_link(&ve.succ, w))
            .ok_or(GraphError::EdgeNotFound)?;
        debug_assert!(
            self.find_link(&self.nodes[link.target.index()].pred, v)
                .is_some(),
            "successor and predecessor lists disagree"
        );
        Ok(link.weight)
    }

    pub fn in_degree(&self, v: &V) -> Result<usize> {
        self.entry(v)
            .map(|e| e.pred.len())
            .ok_or(GraphError::VertexNotFound)
    }

    pub fn out_degree(&self, v: &V) -> Result<usize> {
        self.entry(v)
            .map(|e| e.succ.len())
            .ok_or(GraphError::VertexNotFound)
    }

    pub fn vertex_set(&self) -> VertexSet<'_, V> {
        VertexSet { index: &self.index }
    }

    pub fn successor_vertex_set(&self, v: &V) -> NeighborSet<'_, V> {
        match self.entry(v) {
            Some(e) => NeighborSet {
                nodes: &self.nodes,
                links: &e.succ,
            },
            None => NeighborSet::empty(),
        }
    }

    pub fn predecessor_vertex_set(&self, v: &V) -> NeighborSet<'_, V> {
        match self.entry(v) {
            Some(e) => NeighborSet {
                nodes: &self.nodes,
                links: &e.pred,
            },
            None => NeighborSet::empty(),
        }
    }

    pub fn number_of_vertices(&self) -> usize {
        self.nodes.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.nodes.iter().map(|e| e.succ.len()).sum()
    }

    /// All edges as `(source, target, weight)`, ordered by source, then target.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, f64)> + '_ {
        self.index.iter().flat_map(move |(v, ix)| {
            self.nodes[ix.index()]
                .succ
                .iter()
                .map(move |l| (v, &self.nodes[l.target.index()].id, l.weight))
        })
    }

    /// Returns the transpose: every edge reversed, weights kept. Vertices without edges are
    /// carried over too.
    ///
    /// The transpose shares arena indices with `self`; `alg` relies on this to walk both graphs
    /// with the same visited bookkeeping.
    pub fn invert(&self) -> Self {
        let nodes = self
            .nodes
            .iter()
            .map(|e| NodeEntry {
                id: e.id.clone(),
                succ: e.pred.clone(),
                pred: e.succ.clone(),
            })
            .collect();
        Self {
            nodes,
            index: self.index.clone(),
        }
    }

    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.index.values().copied()
    }

    pub(crate) fn vertex(&self, ix: VertexId) -> &V {
        &self.nodes[ix.index()].id
    }

    pub(crate) fn out_links(&self, ix: VertexId) -> &[Link] {
        &self.nodes[ix.index()].succ
    }

    pub(crate) fn arena_len(&self) -> usize {
        self.nodes.len()
    }
}

fn upsert_link(
    links: &mut Vec<Link>,
    slot: std::result::Result<usize, usize>,
    target: VertexId,
    weight: f64,
) {
    match slot {
        Ok(i) => links[i].weight = weight,
        Err(i) => links.insert(i, Link { target, weight }),
    }
}

impl<V: Ord + Clone> FromIterator<(V, V)> for DiGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}

impl<V: Ord + Clone> Extend<(V, V)> for DiGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (v, w) in iter {
            self.add_edge(v, w);
        }
    }
}

impl<V: Ord + Clone> Extend<(V, V, f64)> for DiGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V, f64)>>(&mut self, iter: I) {
        for (v, w, weight) in iter {
            self.add_weighted_edge(v, w, weight);
        }
    }
}

impl<V: Ord + Clone + fmt::Display> fmt::Display for DiGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, w, weight) in self.edges() {
            writeln!(f, "{v} --> {w} weight = {weight:?}")?;
        }
        Ok(())
    }
}
