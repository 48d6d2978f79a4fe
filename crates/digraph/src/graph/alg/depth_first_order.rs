use super::Dfs;
use crate::graph::{DiGraph, VertexId};

/// Pre- and postorder of a full depth-first search.
///
/// A new search tree is started from every vertex not reached yet, taking roots in vertex-set
/// order. Cycles are fine: an already visited vertex is simply not entered again.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder<V> {
    pre: Vec<V>,
    post: Vec<V>,
    trees: usize,
}

impl<V: Ord + Clone> DepthFirstOrder<V> {
    pub fn new(g: &DiGraph<V>) -> Self {
        let (pre, post, trees) = search(g);
        Self {
            pre: pre.into_iter().map(|ix| g.vertex(ix).clone()).collect(),
            post: post.into_iter().map(|ix| g.vertex(ix).clone()).collect(),
            trees,
        }
    }

    /// Vertices in the order they were discovered.
    pub fn pre_order(&self) -> &[V] {
        &self.pre
    }

    /// Vertices in the order their search finished.
    pub fn post_order(&self) -> &[V] {
        &self.post
    }

    /// Number of roots the search had to start from.
    pub fn number_of_trees(&self) -> usize {
        self.trees
    }
}

pub(crate) fn post_order_ids<V: Ord + Clone>(g: &DiGraph<V>) -> Vec<VertexId> {
    search(g).1
}

fn search<V: Ord + Clone>(g: &DiGraph<V>) -> (Vec<VertexId>, Vec<VertexId>, usize) {
    let mut dfs = Dfs::new(g.arena_len());
    let mut pre = Vec::with_capacity(g.arena_len());
    let mut post = Vec::with_capacity(g.arena_len());
    let mut trees = 0usize;

    for root in g.vertex_ids() {
        if dfs.is_visited(root) {
            continue;
        }
        trees += 1;
        dfs.walk(g, root, |v| pre.push(v), |v| post.push(v));
    }

    (pre, post, trees)
}
