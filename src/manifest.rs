//! The `projects.json` data model.
//!
//! The manifest is a JSON array of project records, read once at build start.
//! Records are kept in file order throughout the pipeline — the manifest is
//! the single source of truth for how projects appear on the page.
//!
//! ## Record flags
//!
//! - `featured`: the project highlighted at the top of the home page. When
//!   several records set it, the last one in file order wins.
//! - `compact`: rendered without image assets; asset derivation is skipped
//!   entirely for these records.
//! - `ignore`: the record is excluded from the build altogether.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry of `projects.json`, exactly as written by the site author.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub url: String,
    pub blurb: String,
    /// Source image path, relative to the `projects/` directory.
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub compact: bool,
    #[serde(default)]
    pub ignore: bool,
}

/// Read and parse the manifest. Missing file or malformed JSON is fatal.
pub fn load_manifest(path: &Path) -> Result<Vec<ProjectRecord>, ManifestError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
