use super::Dfs;
use super::depth_first_order::post_order_ids;
use crate::graph::DiGraph;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Strongly connected components (Kosaraju-Sharir).
///
/// 1. Postorder of a full depth-first search over `g`, reversed.
/// 2. Depth-first search over the transpose of `g`, starting a new component at every vertex of
///    the reversed postorder that has not been reached yet.
///
/// Component indices are dense and start at 0; their numbering follows the traversal order.
#[derive(Debug, Clone)]
pub struct StrongComponents<V> {
    components: Vec<BTreeSet<V>>,
    component_of: BTreeMap<V, usize>,
    cyclic: Vec<bool>,
}

impl<V: Ord + Clone> StrongComponents<V> {
    pub fn new(g: &DiGraph<V>) -> Self {
        let post = post_order_ids(g);
        let transpose = g.invert();

        let mut dfs = Dfs::new(transpose.arena_len());
        let mut components: Vec<BTreeSet<V>> = Vec::new();

        for &v in post.iter().rev() {
            if dfs.is_visited(v) {
                continue;
            }
            let mut members = BTreeSet::new();
            dfs.walk(
                &transpose,
                v,
                |_| {},
                |w| {
                    members.insert(transpose.vertex(w).clone());
                },
            );
            components.push(members);
        }

        let mut component_of = BTreeMap::new();
        let mut cyclic = Vec::with_capacity(components.len());
        for (i, members) in components.iter().enumerate() {
            let self_loop = members.iter().any(|v| g.contains_edge(v, v));
            cyclic.push(members.len() > 1 || self_loop);
            for v in members {
                component_of.insert(v.clone(), i);
            }
        }

        tracing::debug!(
            vertices = g.number_of_vertices(),
            components = components.len(),
            "strong components computed"
        );

        Self {
            components,
            component_of,
            cyclic,
        }
    }

    pub fn number_of_components(&self) -> usize {
        self.components.len()
    }

    pub fn component(&self, i: usize) -> Option<&BTreeSet<V>> {
        self.components.get(i)
    }

    /// Components in index order.
    pub fn components(&self) -> &[BTreeSet<V>] {
        &self.components
    }

    pub fn component_of(&self, v: &V) -> Option<usize> {
        self.component_of.get(v).copied()
    }

    /// Whether component `i` contains a cycle: more than one vertex, or a self-loop.
    pub fn is_cyclic(&self, i: usize) -> bool {
        self.cyclic.get(i).copied().unwrap_or(false)
    }
}

impl<V: fmt::Display> fmt::Display for StrongComponents<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, members) in self.components.iter().enumerate() {
            write!(f, "Component {i}: ")?;
            for v in members {
                write!(f, "{v}, ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
