use semver::Version;

use super::errors::{Error, Result};

/// Last fe release line that predates the `build` subcommand.
const LEGACY_DIALECT_MAX_MINOR: u64 = 18;

/// Parse a fe version string, tolerating a leading `v`.
pub fn parse_version(version: &str) -> Result<Version> {
  let trimmed = version.trim().trim_start_matches('v');
  Version::parse(trimmed).map_err(|source| Error::InvalidVersion {
    version: version.to_owned(),
    source,
  })
}

/// Whether `version` predates the `fe build` command-line dialect.
///
/// Releases up to and including the 0.18 line take the source path as the
/// first argument; later releases expect the `build` subcommand.
pub fn is_legacy_version(version: &Version) -> bool {
  version.major == 0 && version.minor <= LEGACY_DIALECT_MAX_MINOR
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn legacy_threshold_matches_release_lines() {
    for legacy in ["0.17.2", "0.18.0-alpha", "v0.18.1"] {
      let version = parse_version(legacy).expect("version should parse");
      assert!(is_legacy_version(&version), "{legacy} should be legacy");
    }
    for current in ["0.19.0", "0.26.0", "1.0.0"] {
      let version = parse_version(current).expect("version should parse");
      assert!(!is_legacy_version(&version), "{current} should be current");
    }
  }

  #[test]
  fn major_version_above_zero_is_never_legacy() {
    let version = parse_version("1.17.0").expect("version should parse");
    assert!(!is_legacy_version(&version));
  }

  #[test]
  fn malformed_versions_are_rejected() {
    assert!(parse_version("").is_err());
    assert!(parse_version("0.18").is_err());
    assert!(parse_version("not-a-version").is_err());
  }
}
