#![forbid(unsafe_code)]

//! Ordered directed graphs and the depth-first analyses built on them.
//!
//! [`DiGraph`] keeps successor and predecessor lists for every vertex and iterates everything in
//! the natural order of the vertex type, so traversal-dependent results (postorder, component
//! numbering, the reported cycle) are reproducible.
//!
//! ```
//! use digraph::DiGraph;
//! use digraph::alg::StrongComponents;
//!
//! let g: DiGraph<u32> = [(1, 2), (2, 1), (2, 3)].into_iter().collect();
//! let sc = StrongComponents::new(&g);
//! assert_eq!(sc.number_of_components(), 2);
//! ```

mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::alg;
pub use graph::{DiGraph, NeighborSet, Neighbors, VertexSet, Vertices};
