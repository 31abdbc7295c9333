use std::path::{Component, Path, PathBuf};

/// Best-effort absolute form of `path`. Falls back to joining onto the
/// current directory when canonicalisation fails, e.g. for files that do
/// not exist yet.
pub(crate) fn absolutize(path: &Path) -> PathBuf {
  if let Ok(canonical) = std::fs::canonicalize(path) {
    return canonical;
  }
  if path.is_absolute() {
    path.to_path_buf()
  } else {
    std::env::current_dir()
      .unwrap_or_else(|_| PathBuf::from("."))
      .join(path)
  }
}

/// Resolve the canonical source name of `path` relative to the project
/// `root`: forward slashes on every platform, no leading `./`.
pub fn local_source_name(root: &Path, path: &Path) -> String {
  let root = absolutize(root);
  let path = absolutize(path);
  let relative = path.strip_prefix(&root).unwrap_or(&path);

  let mut name = String::new();
  for component in relative.components() {
    if let Component::Normal(part) = component {
      if !name.is_empty() {
        name.push('/');
      }
      name.push_str(&part.to_string_lossy());
    }
  }
  name
}
