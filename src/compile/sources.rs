use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::internal::errors::{Error, Result};

/// File name whose presence marks a directory as an ingot root.
pub(crate) const INGOT_ENTRY_FILE: &str = "main.fe";

const FE_EXTENSION: &str = "fe";

/// One unit of work for the fe binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileTarget {
  /// A standalone source file.
  File(PathBuf),
  /// An ingot compiled as a whole; the path is the directory containing
  /// `main.fe`.
  Ingot(PathBuf),
}

impl CompileTarget {
  /// The path handed to the fe binary.
  pub fn path(&self) -> &Path {
    match self {
      CompileTarget::File(path) | CompileTarget::Ingot(path) => path,
    }
  }
}

/// Enumerate every `.fe` file under `sources`, recursively, in sorted order.
/// A missing sources directory yields no files rather than an error.
pub fn discover_sources(sources: &Path) -> Result<Vec<PathBuf>> {
  if !sources.exists() {
    return Ok(Vec::new());
  }

  let mut files = Vec::new();
  for entry in WalkDir::new(sources).sort_by_file_name() {
    let entry = entry.map_err(|source| Error::SourceDiscovery {
      path: sources.to_path_buf(),
      source,
    })?;
    let path = entry.path();
    if path.is_file() && path.extension().is_some_and(|ext| ext == FE_EXTENSION) {
      files.push(path.to_path_buf());
    }
  }
  debug!(
    "discovered {} fe sources under {}",
    files.len(),
    sources.display()
  );
  Ok(files)
}

/// Split the enumerated files into compilation targets: one ingot when an
/// entry file is present, otherwise one target per file. Two entry files in
/// the tree are a configuration error.
pub fn collect_targets(files: &[PathBuf]) -> Result<Vec<CompileTarget>> {
  let mut entries = files
    .iter()
    .filter(|path| path.file_name().is_some_and(|name| name == INGOT_ENTRY_FILE));

  match entries.next() {
    Some(entry) => {
      if let Some(second) = entries.next() {
        return Err(Error::MultipleEntryFiles {
          first: entry.clone(),
          second: second.clone(),
        });
      }
      let root = entry.parent().unwrap_or(Path::new(".")).to_path_buf();
      Ok(vec![CompileTarget::Ingot(root)])
    }
    None => Ok(files.iter().cloned().map(CompileTarget::File).collect()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, "").expect("write file");
  }

  #[test]
  fn discovery_is_recursive_sorted_and_extension_filtered() {
    let temp = tempfile::tempdir().expect("tempdir");
    let sources = temp.path().join("contracts");
    touch(&sources.join("Foo.fe"));
    touch(&sources.join("Bar.fe"));
    touch(&sources.join("nested").join("Baz.fe"));
    touch(&sources.join("README.md"));

    let files = discover_sources(&sources).expect("discover");
    let names: Vec<_> = files
      .iter()
      .map(|path| path.strip_prefix(&sources).unwrap().to_string_lossy().into_owned())
      .collect();
    assert_eq!(names, ["Bar.fe", "Foo.fe", "nested/Baz.fe"]);
  }

  #[test]
  fn missing_sources_dir_yields_no_files() {
    let temp = tempfile::tempdir().expect("tempdir");
    let files = discover_sources(&temp.path().join("contracts")).expect("discover");
    assert!(files.is_empty());
  }

  #[test]
  fn every_file_is_its_own_target_without_an_entry_file() {
    let files = vec![PathBuf::from("contracts/Foo.fe"), PathBuf::from("contracts/Bar.fe")];
    let targets = collect_targets(&files).expect("targets");
    assert_eq!(
      targets,
      vec![
        CompileTarget::File(PathBuf::from("contracts/Foo.fe")),
        CompileTarget::File(PathBuf::from("contracts/Bar.fe")),
      ]
    );
  }

  #[test]
  fn an_entry_file_turns_the_tree_into_one_ingot() {
    let files = vec![
      PathBuf::from("contracts/mod/helper.fe"),
      PathBuf::from("contracts/mod/main.fe"),
      PathBuf::from("contracts/mod/extra.fe"),
    ];
    let targets = collect_targets(&files).expect("targets");
    assert_eq!(targets, vec![CompileTarget::Ingot(PathBuf::from("contracts/mod"))]);
  }

  #[test]
  fn a_file_merely_ending_in_the_entry_name_is_not_an_entry() {
    let files = vec![PathBuf::from("contracts/domain.fe")];
    let targets = collect_targets(&files).expect("targets");
    assert_eq!(targets, vec![CompileTarget::File(PathBuf::from("contracts/domain.fe"))]);
  }

  #[test]
  fn two_entry_files_are_a_configuration_error() {
    let files = vec![
      PathBuf::from("contracts/a/main.fe"),
      PathBuf::from("contracts/b/main.fe"),
    ];
    let err = collect_targets(&files).expect_err("should reject");
    assert!(matches!(err, Error::MultipleEntryFiles { .. }));
  }
}
