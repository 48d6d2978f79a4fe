//! One-shot analysis of a site graph, serializable as JSON.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::rank::page_rank;
use digraph::DiGraph;
use digraph::alg::{DirectedCycle, StrongComponents};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    pub pages: usize,
    pub links: usize,
    pub component_count: usize,
    pub components: Vec<ComponentReport>,
    pub cycle: Option<Vec<String>>,
    /// Every page with its score, in page-name order.
    pub ranks: Vec<RankedPage>,
    /// The best-scored pages, best first.
    pub top: Vec<RankedPage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentReport {
    pub index: usize,
    pub cyclic: bool,
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPage {
    pub page: String,
    pub score: f64,
}

impl RankedPage {
    fn new(page: &str, score: f64) -> Self {
        Self {
            page: page.to_string(),
            score,
        }
    }
}

pub fn analyze(g: &DiGraph<String>, config: &AnalysisConfig) -> Result<SiteReport> {
    let sc = StrongComponents::new(g);
    let components = sc
        .components()
        .iter()
        .enumerate()
        .map(|(index, members)| ComponentReport {
            index,
            cyclic: sc.is_cyclic(index),
            pages: members.iter().cloned().collect(),
        })
        .collect();

    let cycle = DirectedCycle::new(g).cycle().map(<[String]>::to_vec);

    let table = page_rank(g, &config.rank)?;
    let ranks = table.iter().map(|(p, s)| RankedPage::new(p, s)).collect();
    let top = table
        .top_n(config.top)
        .into_iter()
        .map(|(p, s)| RankedPage::new(p, s))
        .collect();

    Ok(SiteReport {
        pages: g.number_of_vertices(),
        links: g.number_of_edges(),
        component_count: sc.number_of_components(),
        components,
        cycle,
        ranks,
        top,
    })
}
