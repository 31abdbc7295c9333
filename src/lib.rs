mod artifacts;
mod compile;
mod internal;
mod types;

pub use artifacts::{
  Artifact, ArtifactStore, DiskArtifacts, ValidArtifacts, ARTIFACT_FORMAT_VERSION,
};
pub use compile::{collect_targets, compile, discover_sources, CompileTarget};
pub use internal::errors::{Error, Result};
pub use internal::fe::{is_legacy_version, parse_version};
pub use internal::path::local_source_name;
pub use types::{CompileOutput, CompilerError, EmittedContract, ProjectPaths, UnitOutput};
