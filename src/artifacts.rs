use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::internal::errors::{Error, Result};

/// Format tag of the host framework's artifact records.
pub const ARTIFACT_FORMAT_VERSION: &str = "hh-sol-artifact-1";

const DEBUG_FORMAT_VERSION: &str = "hh-sol-dbg-1";

/// A compiled-contract record in the host framework's artifact shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
  #[serde(rename = "_format")]
  pub format: String,
  pub contract_name: String,
  pub source_name: String,
  pub abi: Value,
  pub bytecode: String,
  pub deployed_bytecode: String,
  pub link_references: Map<String, Value>,
  pub deployed_link_references: Map<String, Value>,
}

impl Artifact {
  /// Assemble a record from one fe-emitted contract.
  ///
  /// The bytecode is re-encoded so the stored form is always lowercase and
  /// `0x`-prefixed. The fe binary does not emit runtime bytecode, so
  /// `deployed_bytecode` stays empty.
  pub fn from_fe_output(
    source_name: &str,
    contract_name: &str,
    abi: Value,
    bytecode: &[u8],
  ) -> Self {
    Artifact {
      format: ARTIFACT_FORMAT_VERSION.to_owned(),
      contract_name: contract_name.to_owned(),
      source_name: source_name.to_owned(),
      abi,
      bytecode: format!("0x{}", hex::encode(bytecode)),
      deployed_bytecode: String::new(),
      link_references: Map::new(),
      deployed_link_references: Map::new(),
    }
  }
}

/// A (source name, contract names) pair registered once a unit compiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidArtifacts {
  pub source_name: String,
  pub artifacts: Vec<String>,
}

/// Persistence seam towards the host framework's artifact storage.
pub trait ArtifactStore {
  /// Persist one artifact record together with its debug metadata.
  fn save_artifact_and_debug_file(&mut self, artifact: &Artifact) -> Result<()>;

  /// Record which contract names a source file legitimately produced.
  fn add_valid_artifacts(&mut self, entries: &[ValidArtifacts]) -> Result<()>;
}

/// Filesystem store writing the Hardhat artifacts layout:
/// `<dir>/<source name>/<ContractName>.json` plus a `.dbg.json` companion.
#[derive(Debug)]
pub struct DiskArtifacts {
  dir: PathBuf,
  valid: BTreeMap<String, Vec<String>>,
}

impl DiskArtifacts {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    DiskArtifacts {
      dir: dir.into(),
      valid: BTreeMap::new(),
    }
  }

  /// Registered (source name, contract names) pairs, in source-name order.
  pub fn valid_artifacts(&self) -> impl Iterator<Item = (&str, &[String])> {
    self
      .valid
      .iter()
      .map(|(source, names)| (source.as_str(), names.as_slice()))
  }

  fn artifact_path(&self, artifact: &Artifact) -> PathBuf {
    self
      .dir
      .join(&artifact.source_name)
      .join(format!("{}.json", artifact.contract_name))
  }
}

impl ArtifactStore for DiskArtifacts {
  fn save_artifact_and_debug_file(&mut self, artifact: &Artifact) -> Result<()> {
    let path = self.artifact_path(artifact);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(|source| Error::ArtifactWrite {
        path: parent.to_path_buf(),
        source,
      })?;
    }

    let record = serde_json::to_string_pretty(artifact).map_err(|source| {
      Error::Store(format!(
        "failed to encode artifact {}: {source}",
        artifact.contract_name
      ))
    })?;
    fs::write(&path, record).map_err(|source| Error::ArtifactWrite {
      path: path.clone(),
      source,
    })?;

    // No build info is produced here, so the companion only carries the tag.
    let debug_record = json!({ "_format": DEBUG_FORMAT_VERSION, "buildInfo": Value::Null });
    let debug_path = path.with_extension("dbg.json");
    fs::write(&debug_path, debug_record.to_string()).map_err(|source| Error::ArtifactWrite {
      path: debug_path.clone(),
      source,
    })?;

    debug!("saved artifact {}", path.display());
    Ok(())
  }

  fn add_valid_artifacts(&mut self, entries: &[ValidArtifacts]) -> Result<()> {
    for entry in entries {
      self
        .valid
        .insert(entry.source_name.clone(), entry.artifacts.clone());
    }
    Ok(())
  }
}
