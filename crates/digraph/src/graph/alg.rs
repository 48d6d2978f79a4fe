//! Traversal-based analyses over [`DiGraph`](super::DiGraph).
//!
//! Every search here runs on an explicit stack of `(vertex, cursor)` frames instead of native
//! recursion. The cursor indexes the vertex's successor list, so frames advance through
//! neighbors in exactly the order a recursive search would, and deep graphs only cost heap.

mod depth_first_order;
mod directed_cycle;
mod strong_components;

pub use depth_first_order::DepthFirstOrder;
pub use directed_cycle::DirectedCycle;
pub use strong_components::StrongComponents;

use super::{DiGraph, VertexId};

/// Visited bookkeeping plus the frame stack for one or more depth-first walks.
///
/// A single `Dfs` can be reused across several roots (and across a graph and its transpose,
/// which share arena indices); vertices reached by an earlier walk are never entered again.
pub(crate) struct Dfs {
    visited: Vec<bool>,
    stack: Vec<(VertexId, usize)>,
}

impl Dfs {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            visited: vec![false; len],
            stack: Vec::new(),
        }
    }

    pub(crate) fn is_visited(&self, v: VertexId) -> bool {
        self.visited[v.index()]
    }

    /// Walks everything reachable from `root` that has not been visited yet.
    ///
    /// `on_enter` fires when a vertex is discovered, `on_finish` once all of its successors have
    /// been handled.
    pub(crate) fn walk<V, E, F>(
        &mut self,
        g: &DiGraph<V>,
        root: VertexId,
        mut on_enter: E,
        mut on_finish: F,
    ) where
        V: Ord + Clone,
        E: FnMut(VertexId),
        F: FnMut(VertexId),
    {
        if self.visited[root.index()] {
            return;
        }
        self.visited[root.index()] = true;
        on_enter(root);
        self.stack.push((root, 0));

        while let Some(frame) = self.stack.last_mut() {
            let (v, cursor) = *frame;
            let Some(link) = g.out_links(v).get(cursor) else {
                self.stack.pop();
                on_finish(v);
                continue;
            };
            frame.1 += 1;

            let w = link.target;
            if !self.visited[w.index()] {
                self.visited[w.index()] = true;
                on_enter(w);
                self.stack.push((w, 0));
            }
        }
    }
}
