//! Internal storage entries for [`DiGraph`](super::DiGraph).

/// Stable arena index of a vertex. Indices are never reused because vertices are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct VertexId(pub(crate) usize);

impl VertexId {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// One half of an edge: the far endpoint plus the edge weight.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Link {
    pub(crate) target: VertexId,
    pub(crate) weight: f64,
}

/// Arena slot. `succ` and `pred` are kept sorted by the natural order of the linked vertices.
#[derive(Debug, Clone)]
pub(crate) struct NodeEntry<V> {
    pub(crate) id: V,
    pub(crate) succ: Vec<Link>,
    pub(crate) pred: Vec<Link>,
}

impl<V> NodeEntry<V> {
    pub(crate) fn new(id: V) -> Self {
        Self {
            id,
            succ: Vec::new(),
            pred: Vec::new(),
        }
    }
}
