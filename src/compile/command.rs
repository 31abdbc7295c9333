use std::path::Path;
use std::process::Command;

use log::{debug, warn};
use semver::Version;

use crate::internal::fe::is_legacy_version;
use crate::types::CompilerError;

const EMIT_FLAGS: &str = "--emit=abi,bytecode";

/// Stray suffix occasionally left on checked-out unit paths.
const STRAY_SUFFIX: &str = ".git";

/// Build the fe invocation for one compilation unit.
///
/// Legacy releases take the source path directly; newer ones go through the
/// `build` subcommand. Either way the compiler is asked to overwrite in
/// place and emit ABI plus bytecode into `output_dir`.
pub(crate) fn build_command(
  fe_path: &Path,
  version: &Version,
  unit: &Path,
  output_dir: &Path,
) -> Command {
  let mut unit = unit.to_string_lossy().into_owned();
  if let Some(stripped) = unit.strip_suffix(STRAY_SUFFIX) {
    unit = stripped.to_owned();
  }

  let mut command = Command::new(fe_path);
  if !is_legacy_version(version) {
    command.arg("build");
  }
  command
    .arg(unit)
    .arg("--overwrite")
    .arg(EMIT_FLAGS)
    .arg("--output-dir")
    .arg(output_dir);
  command
}

/// Run `command` synchronously with captured stdio. A spawn failure or
/// non-zero exit becomes a [`CompilerError`] instead of aborting the run.
pub(crate) fn run_compiler(mut command: Command, unit: &Path) -> Option<CompilerError> {
  debug!("running {command:?}");
  let unit = unit.display().to_string();
  match command.output() {
    Ok(output) if output.status.success() => None,
    Ok(output) => {
      let mut message = String::from_utf8_lossy(&output.stderr).trim().to_owned();
      if message.is_empty() {
        message = String::from_utf8_lossy(&output.stdout).trim().to_owned();
      }
      warn!("fe failed on {unit}: {message}");
      Some(CompilerError {
        unit,
        message,
        exit_code: output.status.code(),
      })
    }
    Err(err) => {
      warn!("failed to run fe on {unit}: {err}");
      Some(CompilerError {
        unit,
        message: err.to_string(),
        exit_code: None,
      })
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::internal::fe::parse_version;

  fn args_of(command: &Command) -> Vec<String> {
    command
      .get_args()
      .map(|arg| arg.to_string_lossy().into_owned())
      .collect()
  }

  #[test]
  fn current_dialect_uses_the_build_subcommand() {
    let version = parse_version("0.26.0").expect("version");
    let command = build_command(
      Path::new("/usr/local/bin/fe"),
      &version,
      Path::new("contracts/Token.fe"),
      Path::new("/tmp/out"),
    );

    assert_eq!(command.get_program(), "/usr/local/bin/fe");
    assert_eq!(
      args_of(&command),
      [
        "build",
        "contracts/Token.fe",
        "--overwrite",
        "--emit=abi,bytecode",
        "--output-dir",
        "/tmp/out",
      ]
    );
  }

  #[test]
  fn legacy_dialect_omits_the_subcommand() {
    let version = parse_version("0.17.2").expect("version");
    let command = build_command(
      Path::new("fe"),
      &version,
      Path::new("contracts/Token.fe"),
      Path::new("/tmp/out"),
    );

    assert_eq!(args_of(&command)[0], "contracts/Token.fe");
  }

  #[test]
  fn stray_git_suffix_is_stripped_from_the_unit() {
    let version = parse_version("0.26.0").expect("version");
    let command = build_command(
      Path::new("fe"),
      &version,
      Path::new("contracts/Token.fe.git"),
      Path::new("/tmp/out"),
    );

    assert_eq!(args_of(&command)[1], "contracts/Token.fe");
  }

  #[test]
  fn missing_binary_is_reported_not_propagated() {
    let command = Command::new("/nonexistent/fe-binary");
    let error = run_compiler(command, Path::new("contracts/Token.fe")).expect("should fail");
    assert_eq!(error.unit, "contracts/Token.fe");
    assert_eq!(error.exit_code, None);
    assert!(!error.message.is_empty());
  }
}
