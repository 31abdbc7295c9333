use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filesystem layout of the host project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPaths {
  pub root: PathBuf,
  pub sources: PathBuf,
}

impl ProjectPaths {
  pub fn new(root: impl Into<PathBuf>, sources: impl Into<PathBuf>) -> Self {
    ProjectPaths {
      root: root.into(),
      sources: sources.into(),
    }
  }

  /// Paths for a Hardhat-layout project rooted at `root`, with sources
  /// under `contracts/`.
  pub fn hardhat(root: impl Into<PathBuf>) -> Self {
    let root = root.into();
    let sources = root.join("contracts");
    ProjectPaths { root, sources }
  }
}
