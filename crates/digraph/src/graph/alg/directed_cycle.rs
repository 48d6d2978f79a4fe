use crate::graph::{DiGraph, VertexId};

/// Depth-first cycle search.
///
/// The search stops at the first back edge it finds. The reported cycle is the whole active
/// search path at that moment (root first), so it contains every vertex of the detected cycle
/// but may also start with vertices that merely lead into it.
#[derive(Debug, Clone)]
pub struct DirectedCycle<V> {
    cycle: Vec<V>,
}

struct CycleSearch<'g, V> {
    graph: &'g DiGraph<V>,
    visited: Vec<bool>,
    on_path: Vec<bool>,
    path: Vec<(VertexId, usize)>,
}

impl<'g, V: Ord + Clone> CycleSearch<'g, V> {
    fn new(graph: &'g DiGraph<V>) -> Self {
        let len = graph.arena_len();
        Self {
            graph,
            visited: vec![false; len],
            on_path: vec![false; len],
            path: Vec::new(),
        }
    }

    fn enter(&mut self, v: VertexId) {
        self.visited[v.index()] = true;
        self.on_path[v.index()] = true;
        self.path.push((v, 0));
    }

    /// Returns the active path as soon as an edge leads back onto it.
    fn search_from(&mut self, root: VertexId) -> Option<Vec<VertexId>> {
        self.enter(root);

        while let Some(&(v, cursor)) = self.path.last() {
            let Some(w) = self.graph.out_links(v).get(cursor).map(|l| l.target) else {
                self.path.pop();
                self.on_path[v.index()] = false;
                continue;
            };
            if let Some(frame) = self.path.last_mut() {
                frame.1 += 1;
            }

            if !self.visited[w.index()] {
                self.enter(w);
            } else if self.on_path[w.index()] {
                return Some(self.path.iter().map(|&(ix, _)| ix).collect());
            }
        }

        None
    }
}

impl<V: Ord + Clone> DirectedCycle<V> {
    pub fn new(g: &DiGraph<V>) -> Self {
        let mut search = CycleSearch::new(g);
        let mut found = None;

        for root in g.vertex_ids() {
            if search.visited[root.index()] {
                continue;
            }
            found = search.search_from(root);
            if found.is_some() {
                break;
            }
        }

        let cycle = found
            .unwrap_or_default()
            .into_iter()
            .map(|ix| g.vertex(ix).clone())
            .collect();
        Self { cycle }
    }

    pub fn has_cycle(&self) -> bool {
        !self.cycle.is_empty()
    }

    pub fn cycle(&self) -> Option<&[V]> {
        if self.cycle.is_empty() {
            None
        } else {
            Some(&self.cycle)
        }
    }
}
