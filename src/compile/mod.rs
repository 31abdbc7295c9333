mod command;
mod output;
mod sources;

pub use sources::{collect_targets, discover_sources, CompileTarget};

use std::path::Path;

use log::{debug, info};
use semver::Version;
use tempfile::TempDir;

use crate::artifacts::{Artifact, ArtifactStore, ValidArtifacts};
use crate::internal::errors::{Error, Result};
use crate::internal::fe::parse_version;
use crate::internal::path::local_source_name;
use crate::types::{CompileOutput, ProjectPaths, UnitOutput};

use self::sources::INGOT_ENTRY_FILE;

/// Compile every fe source under `paths.sources` with the binary at
/// `fe_path`, persisting the results through `artifacts`.
///
/// Units are processed sequentially in enumeration order. A failing fe
/// invocation is captured on its [`UnitOutput`] and the run carries on;
/// unreadable or malformed compiler output aborts the call.
pub fn compile(
  fe_path: &Path,
  fe_version: &str,
  paths: &ProjectPaths,
  artifacts: &mut dyn ArtifactStore,
) -> Result<CompileOutput> {
  let version = parse_version(fe_version)?;
  let files = sources::discover_sources(&paths.sources)?;
  debug!("fe sources: {files:?}");

  let targets = sources::collect_targets(&files)?;
  let mut units = Vec::with_capacity(targets.len());
  for target in &targets {
    units.push(compile_target(fe_path, &version, paths, target, artifacts)?);
  }
  Ok(CompileOutput { units })
}

fn compile_target(
  fe_path: &Path,
  version: &Version,
  paths: &ProjectPaths,
  target: &CompileTarget,
  artifacts: &mut dyn ArtifactStore,
) -> Result<UnitOutput> {
  let source_name = match target {
    CompileTarget::Ingot(root) => {
      info!(
        "compiling module {} with fe binary {}",
        root.display(),
        fe_path.display()
      );
      local_source_name(&paths.root, &root.join(INGOT_ENTRY_FILE))
    }
    CompileTarget::File(file) => {
      info!(
        "compiling {} with fe binary {}",
        file.display(),
        fe_path.display()
      );
      local_source_name(&paths.root, file)
    }
  };

  // One scoped output dir per unit; removed on every exit path when dropped.
  let output_dir =
    TempDir::with_prefix("fe_output-").map_err(|source| Error::OutputDir { source })?;

  let invocation = command::build_command(fe_path, version, target.path(), output_dir.path());
  if let Some(error) = command::run_compiler(invocation, target.path()) {
    return Ok(UnitOutput {
      source_name,
      contracts: Vec::new(),
      error: Some(error),
    });
  }

  let build = output::read_binary_build(output_dir.path())?;
  let mut contracts = Vec::with_capacity(build.len());
  for (name, emitted) in build {
    let artifact = Artifact::from_fe_output(&source_name, &name, emitted.abi, &emitted.bytecode);
    debug!(
      "saving artifact {} for {}",
      artifact.contract_name, artifact.source_name
    );
    artifacts.save_artifact_and_debug_file(&artifact)?;
    contracts.push(artifact.contract_name);
  }
  artifacts.add_valid_artifacts(&[ValidArtifacts {
    source_name: source_name.clone(),
    artifacts: contracts.clone(),
  }])?;

  Ok(UnitOutput {
    source_name,
    contracts,
    error: None,
  })
}
