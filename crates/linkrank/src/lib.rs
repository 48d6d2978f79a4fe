#![forbid(unsafe_code)]

//! Link analysis over a corpus of documents.
//!
//! A directory of pages is turned into a [`digraph::DiGraph`] of hyperlinks
//! ([`corpus::load_site`]), which can then be split into strong components, checked for cycles,
//! and scored with a PageRank-style link rank ([`rank::page_rank`]). [`analysis::analyze`] runs
//! all of it at once.
//!
//! ```
//! use linkrank::{DiGraph, RankOptions, page_rank};
//!
//! let g: DiGraph<&str> = [("a", "b"), ("b", "a"), ("c", "a")].into_iter().collect();
//! let ranks = page_rank(&g, &RankOptions::default()).unwrap();
//! assert_eq!(ranks.top().map(|(page, _)| *page), Some("a"));
//! ```

pub mod analysis;
pub mod config;
pub mod corpus;
mod error;
pub mod rank;

pub use analysis::{SiteReport, analyze};
pub use config::{AnalysisConfig, RankOptions};
pub use corpus::{extract_link, load_site};
pub use digraph::{self, DiGraph, GraphError};
pub use error::{Error, Result};
pub use rank::{RankTable, page_rank};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads the site in `dir` and analyzes it with `config`.
pub fn analyze_dir(dir: impl AsRef<std::path::Path>, config: &AnalysisConfig) -> Result<SiteReport> {
    let g = load_site(dir, &config.link_marker)?;
    analyze(&g, config)
}
