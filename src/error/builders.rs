//! Shorthand constructors for `VmError`.

use std::path::Path;

use super::types::VmError;

impl VmError {
    pub fn already_defined(name: impl Into<String>) -> Self {
        VmError::AlreadyDefined { name: name.into() }
    }

    pub fn unnamed(value: impl ToString) -> Self {
        VmError::Unnamed {
            value: value.to_string(),
        }
    }

    pub fn collision(
        name: impl Into<String>,
        module: impl Into<String>,
        existing: impl Into<String>,
    ) -> Self {
        VmError::SymbolCollision {
            name: name.into(),
            module: module.into(),
            existing: existing.into(),
        }
    }

    pub fn load_failed(path: &Path, reason: impl ToString) -> Self {
        VmError::LoadFailed {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn unresolved_import(module: impl Into<String>, import: impl Into<String>) -> Self {
        VmError::UnresolvedImport {
            module: module.into(),
            import: import.into(),
        }
    }

    pub fn unsupported(operation: impl Into<String>, value: impl ToString) -> Self {
        VmError::Unsupported {
            operation: operation.into(),
            value: value.to_string(),
        }
    }
}
