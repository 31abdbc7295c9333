mod output;
mod paths;

pub use output::{BinaryBuild, CompileOutput, CompilerError, EmittedContract, UnitOutput};
pub use paths::ProjectPaths;
