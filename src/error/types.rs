//! Host-side error type.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported to the embedding host.
///
/// In-language failures (no match, thrown values) never take this path;
/// they travel through the thunk machinery as data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    #[error("type error: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("symbol '{name}' is already defined")]
    AlreadyDefined { name: String },

    #[error("cannot bind {value}: it has no symbol")]
    Unnamed { value: String },

    #[error("module '{module}' exports '{name}', already provided by {existing}")]
    SymbolCollision {
        name: String,
        module: String,
        existing: String,
    },

    #[error("module '{name}' not found on search path [{search_path}]")]
    ModuleNotFound { name: String, search_path: String },

    #[error("failed to load {}: {reason}", path.display())]
    LoadFailed { path: PathBuf, reason: String },

    #[error("{} exports neither egel_module nor egel_imports/egel_exports", path.display())]
    MissingEntryPoint { path: PathBuf },

    #[error("import cycle: {}", chain.join(" -> "))]
    ImportCycle { chain: Vec<String> },

    #[error("module '{module}' imports '{import}', which could not be resolved")]
    UnresolvedImport { module: String, import: String },

    #[error("unsupported operation '{operation}' on {value}")]
    Unsupported { operation: String, value: String },
}

pub type VmResult<T> = Result<T, VmError>;
