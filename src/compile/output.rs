use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::internal::errors::{Error, Result};
use crate::types::{BinaryBuild, EmittedContract};

/// Read back everything the fe binary wrote under `output_dir`.
///
/// The binary lays out one directory per emitted contract:
/// `<name>/<name>.bin` holds hex bytecode and `<name>/<name>_abi.json` the
/// JSON ABI array.
pub(crate) fn read_binary_build(output_dir: &Path) -> Result<BinaryBuild> {
  let mut contracts = BinaryBuild::new();
  let entries = fs::read_dir(output_dir).map_err(|source| Error::OutputRead {
    path: output_dir.to_path_buf(),
    source,
  })?;

  for entry in entries {
    let entry = entry.map_err(|source| Error::OutputRead {
      path: output_dir.to_path_buf(),
      source,
    })?;
    let name = entry.file_name().to_string_lossy().into_owned();

    let bin_path = entry.path().join(format!("{name}.bin"));
    let raw = fs::read_to_string(&bin_path).map_err(|source| Error::OutputRead {
      path: bin_path,
      source,
    })?;
    let bytecode = parse_bytecode(raw.trim(), &name)?;

    let abi_path = entry.path().join(format!("{name}_abi.json"));
    let raw = fs::read_to_string(&abi_path).map_err(|source| Error::OutputRead {
      path: abi_path,
      source,
    })?;
    let abi: Value = serde_json::from_str(&raw).map_err(|source| Error::MalformedAbi {
      contract: name.clone(),
      source,
    })?;

    contracts.insert(name, EmittedContract { abi, bytecode });
  }
  Ok(contracts)
}

/// Decode a `.bin` payload, tolerating an optional `0x` prefix in either
/// case.
pub(crate) fn parse_bytecode(raw: &str, contract: &str) -> Result<Vec<u8>> {
  let stripped = raw
    .strip_prefix("0x")
    .or_else(|| raw.strip_prefix("0X"))
    .unwrap_or(raw);
  hex::decode(stripped).map_err(|source| Error::InvalidBytecode {
    contract: contract.to_owned(),
    source,
  })
}
