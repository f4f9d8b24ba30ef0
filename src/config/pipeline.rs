use crate::error::{ProcessError, Result};
use crate::session::Operation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Batch run: load `input`, apply `operations` in order, save the result.
#[derive(Debug, Deserialize)]
pub struct PipelineConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub operations: Vec<Operation>,
    pub output: PipelineOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct PipelineOutputConfig {
    /// Result image; `.pgm` is written as P5, other extensions via `image`
    pub image: PathBuf,
    /// Optional JSON run report with per-stage timings
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// When set, every Canny step also writes its intermediates here
    #[serde(default)]
    pub canny_stages_dir: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let data = fs::read_to_string(path).map_err(|e| {
        ProcessError::Config(format!("failed to read config {}: {e}", path.display()))
    })?;
    parse_config(&data)
        .map_err(|e| ProcessError::Config(format!("failed to parse config {}: {e}", path.display())))
}

pub fn parse_config(json: &str) -> serde_json::Result<PipelineConfig> {
    serde_json::from_str(json)
}
