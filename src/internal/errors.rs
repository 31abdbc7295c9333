use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Canonical error type used by the crate's public surface.
#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid fe version {version:?}: {source}")]
  InvalidVersion {
    version: String,
    #[source]
    source: semver::Error,
  },

  #[error("failed to scan sources under {}: {source}", .path.display())]
  SourceDiscovery {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  #[error("multiple ingot entry files found: {} and {}", .first.display(), .second.display())]
  MultipleEntryFiles { first: PathBuf, second: PathBuf },

  #[error("failed to create compiler output dir: {source}")]
  OutputDir {
    #[source]
    source: io::Error,
  },

  #[error("failed to read compiler output {}: {source}", .path.display())]
  OutputRead {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("malformed ABI JSON for {contract}: {source}")]
  MalformedAbi {
    contract: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid bytecode hex for {contract}: {source}")]
  InvalidBytecode {
    contract: String,
    #[source]
    source: hex::FromHexError,
  },

  #[error("failed to write artifact {}: {source}", .path.display())]
  ArtifactWrite {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Escape hatch for [`ArtifactStore`](crate::ArtifactStore) implementations
  /// outside this crate.
  #[error("{0}")]
  Store(String),
}

/// Result alias bound to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
