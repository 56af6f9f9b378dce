use crate::finder::LineFinderParams;
use crate::hough::SearchParameters;
use crate::preprocess::EdgeMapOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct HoughToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub search: SearchParameters,
    #[serde(default)]
    pub edges: EdgeMapOptions,
    /// Also run the standard accumulator transform for comparison.
    #[serde(default)]
    pub baseline: bool,
    pub output: HoughOutputConfig,
}

impl HoughToolConfig {
    pub fn finder_params(&self) -> LineFinderParams {
        LineFinderParams {
            search: self.search,
            edges: self.edges,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HoughOutputConfig {
    pub report_json: PathBuf,
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    #[serde(default)]
    pub edge_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<HoughToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<HoughToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}
