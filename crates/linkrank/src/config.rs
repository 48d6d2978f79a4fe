//! Analysis settings.
//!
//! Settings are plain JSON objects; every field is optional and falls back to its default:
//!
//! ```json
//! { "rank": { "iterations": 10, "alpha": 0.5 }, "linkMarker": "href", "top": 100 }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    /// Number of passes over the vertex set. The first pass only seeds scores.
    pub iterations: usize,
    /// Damping factor. `0.0` pins every score to `1.0`.
    pub alpha: f64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            iterations: 10,
            alpha: 0.5,
        }
    }
}

impl RankOptions {
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha.is_finite() && (0.0..=1.0).contains(&self.alpha)) {
            return Err(Error::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    pub rank: RankOptions,
    /// Lines containing this marker are treated as links.
    pub link_marker: String,
    /// How many pages the top list keeps.
    pub top: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            rank: RankOptions::default(),
            link_marker: "href".to_string(),
            top: 100,
        }
    }
}

impl AnalysisConfig {
    /// Rejects an out-of-range damping factor and an empty link marker (every line would match).
    pub fn validate(&self) -> Result<()> {
        self.rank.validate()?;
        if self.link_marker.is_empty() {
            return Err(Error::EmptyLinkMarker);
        }
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
