use std::collections::BTreeMap;

use serde_json::Value;

/// Diagnostics captured from a failed fe invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerError {
  /// The unit path the compiler was invoked on.
  pub unit: String,
  /// Captured stderr (or stdout when stderr was empty).
  pub message: String,
  /// Exit code, if the process ran at all.
  pub exit_code: Option<i32>,
}

/// One contract emitted by the fe binary.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedContract {
  pub abi: Value,
  pub bytecode: Vec<u8>,
}

/// Everything the fe binary wrote for a single invocation, keyed by emitted
/// contract name.
pub type BinaryBuild = BTreeMap<String, EmittedContract>;

/// Result of one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitOutput {
  pub source_name: String,
  /// Contract names saved to the artifact store, in emission order.
  pub contracts: Vec<String>,
  /// Present when the fe invocation itself failed; the unit then produced
  /// no artifacts.
  pub error: Option<CompilerError>,
}

/// Outcome of a whole orchestration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutput {
  pub units: Vec<UnitOutput>,
}

impl CompileOutput {
  pub fn has_compiler_errors(&self) -> bool {
    self.units.iter().any(|unit| unit.error.is_some())
  }
}
