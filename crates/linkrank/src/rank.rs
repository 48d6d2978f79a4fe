//! Link rank (PageRank-style) scores.
//!
//! Scores are updated in place while walking the vertex set in natural order, so a vertex sees
//! the scores its predecessors already received earlier in the same pass. Results therefore
//! depend on the vertex order, and are reproducible for a given order.

use crate::config::RankOptions;
use crate::error::Result;
use digraph::DiGraph;
use std::collections::BTreeMap;
use std::fmt;

/// Scores every vertex of `g`.
///
/// Each pass visits the vertices in natural order. A vertex seen for the first time is seeded
/// with `1.0`; afterwards it becomes
///
/// `(1 - alpha) + alpha * sum(score(v) / out_degree(v))` over its predecessors `v`,
///
/// where predecessors without a score yet count as `1.0`.
pub fn page_rank<V: Ord + Clone>(g: &DiGraph<V>, options: &RankOptions) -> Result<RankTable<V>> {
    options.validate()?;
    let alpha = options.alpha;
    let mut scores: BTreeMap<V, f64> = BTreeMap::new();

    for pass in 0..options.iterations {
        for w in g.vertex_set() {
            if !scores.contains_key(w) {
                scores.insert(w.clone(), 1.0);
                continue;
            }

            let mut sum = 0.0;
            for v in g.predecessor_vertex_set(w) {
                // `v -> w` exists, so this is at least 1 while both indexes agree.
                let out = g.out_degree(v)?;
                if out == 0 {
                    continue;
                }
                sum += scores.get(v).copied().unwrap_or(1.0) / out as f64;
            }

            if let Some(score) = scores.get_mut(w) {
                *score = (1.0 - alpha) + alpha * sum;
            }
        }
        tracing::trace!(pass, "rank pass complete");
    }

    tracing::debug!(
        vertices = scores.len(),
        iterations = options.iterations,
        alpha,
        "link rank computed"
    );
    Ok(RankTable { scores })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankTable<V> {
    scores: BTreeMap<V, f64>,
}

impl<V: Ord> RankTable<V> {
    pub fn get(&self, v: &V) -> Option<f64> {
        self.scores.get(v).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores in natural vertex order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&V, f64)> + '_ {
        self.scores.iter().map(|(v, s)| (v, *s))
    }

    /// Scores ascending. Equal scores keep natural vertex order.
    pub fn sorted_ascending(&self) -> Vec<(&V, f64)> {
        let mut entries: Vec<(&V, f64)> = self.iter().collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        entries
    }

    /// The highest score; the last entry of [`RankTable::sorted_ascending`].
    pub fn top(&self) -> Option<(&V, f64)> {
        self.sorted_ascending().pop()
    }

    /// The `n` highest scores, best first.
    pub fn top_n(&self, n: usize) -> Vec<(&V, f64)> {
        let mut entries = self.sorted_ascending();
        entries.reverse();
        entries.truncate(n);
        entries
    }
}

impl<V: Ord + fmt::Display> fmt::Display for RankTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, score) in self.iter() {
            writeln!(f, "{v}: {score}")?;
        }
        Ok(())
    }
}
