//! Dynamic module loading.
//!
//! A module library (a `cdylib` crate) exports either
//!
//! - `egel_module`, filling in a boxed [`Module`], or
//! - `egel_imports` and `egel_exports`, listing what it needs and what it
//!   provides.
//!
//! The entry points are `extern "C"` for unmangled symbol names only. They
//! pass Rust types, so a library must be built with the same compiler and
//! the same `egel` version as the host.

use std::path::Path;

use libloading::Library;

use crate::error::{VmError, VmResult};
use crate::module::Module;
use crate::value::Value;
use crate::vm::Vm;

pub const MODULE_ENTRY: &[u8] = b"egel_module";
pub const IMPORTS_ENTRY: &[u8] = b"egel_imports";
pub const EXPORTS_ENTRY: &[u8] = b"egel_exports";

#[allow(improper_ctypes_definitions)]
pub type ModuleFn = unsafe extern "C" fn(module: &mut Option<Box<dyn Module>>);
#[allow(improper_ctypes_definitions)]
pub type ImportsFn = unsafe extern "C" fn(imports: &mut Vec<String>);
#[allow(improper_ctypes_definitions)]
pub type ExportsFn = unsafe extern "C" fn(vm: &Vm, exports: &mut Vec<Value>);

/// A library using the `egel_imports`/`egel_exports` pair.
struct LibraryModule {
    name: String,
    imports: Vec<String>,
    exports: ExportsFn,
}

impl Module for LibraryModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn imports(&self) -> Vec<String> {
        self.imports.clone()
    }

    fn exports(&self, vm: &Vm) -> Vec<Value> {
        let mut exports = Vec::new();
        // SAFETY: the library stays mapped for the life of the process.
        unsafe { (self.exports)(vm, &mut exports) };
        exports
    }
}

/// Module name for a library without a module descriptor: the file stem
/// without a `lib` prefix.
pub fn module_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_prefix("lib") {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => stem,
    }
}

/// Open a module library.
///
/// The library handle is leaked: values created by the library may outlive
/// any scope that could unload it.
pub fn open(path: &Path) -> VmResult<Box<dyn Module>> {
    // SAFETY: loading runs the library's initializers; module libraries are
    // trusted code built against this crate.
    let library = unsafe { Library::new(path) }.map_err(|e| VmError::load_failed(path, e))?;

    let factory: Option<ModuleFn> = unsafe { library.get::<ModuleFn>(MODULE_ENTRY) }
        .ok()
        .map(|symbol| *symbol);

    let module: Box<dyn Module> = match factory {
        Some(factory) => {
            let mut slot = None;
            unsafe { factory(&mut slot) };
            slot.ok_or_else(|| VmError::load_failed(path, "egel_module produced no module"))?
        }
        None => {
            let missing = || VmError::MissingEntryPoint {
                path: path.to_path_buf(),
            };
            let imports: ImportsFn = *unsafe { library.get::<ImportsFn>(IMPORTS_ENTRY) }
                .map_err(|_| missing())?;
            let exports: ExportsFn = *unsafe { library.get::<ExportsFn>(EXPORTS_ENTRY) }
                .map_err(|_| missing())?;
            let mut names = Vec::new();
            unsafe { imports(&mut names) };
            Box::new(LibraryModule {
                name: module_name(path),
                imports: names,
                exports,
            })
        }
    };

    log::debug!("opened {} as module {}", path.display(), module.name());
    std::mem::forget(library);
    Ok(module)
}
