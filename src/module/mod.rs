//! Modules: named units that export combinators into the global table.
//!
//! Loading a module resolves its imports first, then checks every export
//! for a collision, and only then binds them. A module that was already
//! loaded under the same name is returned as is. Reloading binds with
//! overwrite semantics instead.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::data::DataTable;
use crate::error::{VmError, VmResult};
use crate::plugin;
use crate::value::{Combinator, CombinatorKind, SymbolId, Value};
use crate::vm::Vm;

/// A unit of exported combinators.
pub trait Module: Send + Sync {
    fn name(&self) -> &str;

    fn docstring(&self) -> &str {
        ""
    }

    /// Qualified names or module names that must be available first.
    fn imports(&self) -> Vec<String> {
        Vec::new()
    }

    /// Combinators to bind, each under its own symbol.
    fn exports(&self, vm: &Vm) -> Vec<Value>;
}

/// A module after loading, as seen through its `Module` combinator.
#[derive(Debug)]
pub struct LoadedModule {
    name: String,
    docstring: String,
    path: Option<PathBuf>,
    imports: Vec<String>,
    exports: Vec<Value>,
}

impl LoadedModule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn docstring(&self) -> &str {
        &self.docstring
    }

    /// Library the module came from; `None` for internal modules.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn exports(&self) -> &[Value] {
        &self.exports
    }
}

/// Registry of loaded modules and of which module owns each export.
#[derive(Default)]
pub struct ModuleManager {
    loaded: Vec<Value>,
    by_name: FxHashMap<String, usize>,
    owners: FxHashMap<SymbolId, String>,
}

fn loaded_of(value: &Value) -> Option<&Arc<LoadedModule>> {
    value.as_combinator().and_then(|c| c.module())
}

impl ModuleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<Value> {
        self.by_name.get(name).map(|&i| self.loaded[i].clone())
    }

    pub fn find_path(&self, path: &Path) -> Option<Value> {
        self.loaded
            .iter()
            .find(|v| loaded_of(v).and_then(|m| m.path()) == Some(path))
            .cloned()
    }

    /// Name of the module that exported `symbol`.
    pub fn owner(&self, symbol: SymbolId) -> Option<&str> {
        self.owners.get(&symbol).map(String::as_str)
    }

    /// Record a module, replacing an earlier one with the same name.
    fn register(&mut self, value: Value, name: &str, symbols: &[SymbolId]) {
        match self.by_name.get(name) {
            Some(&i) => self.loaded[i] = value,
            None => {
                self.by_name.insert(name.to_string(), self.loaded.len());
                self.loaded.push(value);
            }
        }
        for &symbol in symbols {
            self.owners.insert(symbol, name.to_string());
        }
    }

    /// Module combinators in load order.
    pub fn values(&self) -> Vec<Value> {
        self.loaded.clone()
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

impl Vm {
    /// Load an internal module.
    pub fn load_module(&self, module: Box<dyn Module>) -> VmResult<Value> {
        self.install(module.as_ref(), None, false, &mut Vec::new())
    }

    /// Load a dynamic library exposing the module entry points.
    pub fn load_library(&self, path: impl AsRef<Path>) -> VmResult<Value> {
        self.load_library_in(path.as_ref(), &mut Vec::new())
    }

    /// Load a dynamic library again, overwriting the bindings it exports.
    pub fn reload_library(&self, path: impl AsRef<Path>) -> VmResult<Value> {
        let path = path.as_ref();
        let module = plugin::open(path)?;
        self.install(module.as_ref(), Some(path), true, &mut Vec::new())
    }

    /// Load the module `name` from the search path, unless already loaded.
    pub fn import(&self, name: &str) -> VmResult<Value> {
        self.import_in(name, &mut Vec::new())
    }

    pub fn find_module(&self, name: &str) -> Option<Value> {
        self.modules_read().find(name)
    }

    /// Module combinators in load order.
    pub fn modules(&self) -> Vec<Value> {
        self.modules_read().values()
    }

    /// Candidate files for module `name`, in search order.
    pub fn module_candidates(&self, name: &str) -> Vec<PathBuf> {
        let ext = std::env::consts::DLL_EXTENSION;
        let files = [
            name.to_string(),
            format!("{}.{}", name, ext),
            format!("lib{}.{}", name, ext),
        ];
        self.config()
            .search_path
            .iter()
            .flat_map(|dir| files.iter().map(move |file| dir.join(file)))
            .collect()
    }

    fn import_in(&self, name: &str, chain: &mut Vec<String>) -> VmResult<Value> {
        if let Some(module) = self.find_module(name) {
            return Ok(module);
        }
        match self
            .module_candidates(name)
            .into_iter()
            .find(|candidate| candidate.is_file())
        {
            Some(path) => self.load_library_in(&path, chain),
            None => Err(VmError::ModuleNotFound {
                name: name.to_string(),
                search_path: self.config().search_path_display(),
            }),
        }
    }

    fn load_library_in(&self, path: &Path, chain: &mut Vec<String>) -> VmResult<Value> {
        if let Some(module) = self.modules_read().find_path(path) {
            return Ok(module);
        }
        let module = plugin::open(path)?;
        self.install(module.as_ref(), Some(path), false, chain)
    }

    fn resolve_imports(
        &self,
        module: &str,
        imports: &[String],
        chain: &mut Vec<String>,
    ) -> VmResult<()> {
        for import in imports {
            if self.find_module(import).is_some() {
                continue;
            }
            if self.find_symbol(import).is_some_and(|s| self.is_defined(s)) {
                continue;
            }
            match self.import_in(import, chain) {
                Ok(_) => {}
                Err(VmError::ModuleNotFound { .. }) => {
                    return Err(VmError::unresolved_import(module, import.as_str()))
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn install(
        &self,
        module: &dyn Module,
        path: Option<&Path>,
        reload: bool,
        chain: &mut Vec<String>,
    ) -> VmResult<Value> {
        let name = module.name().to_string();
        if chain.contains(&name) {
            let mut cycle = chain.clone();
            cycle.push(name);
            return Err(VmError::ImportCycle { chain: cycle });
        }
        if !reload {
            if let Some(existing) = self.find_module(&name) {
                log::debug!("module {} already loaded", name);
                return Ok(existing);
            }
        }

        let imports = module.imports();
        chain.push(name.clone());
        let resolved = self.resolve_imports(&name, &imports, chain);
        chain.pop();
        resolved?;

        let loaded = Arc::new(LoadedModule {
            name: name.clone(),
            docstring: module.docstring().to_string(),
            path: path.map(Path::to_path_buf),
            imports,
            exports: module.exports(self),
        });
        let symbol = self.enter_symbol_qualified(&["Module"], &name);
        let value = Value::combinator(Combinator::new(
            symbol,
            format!("Module::{}", name),
            CombinatorKind::Module(loaded.clone()),
        ));

        // Check, bind and register under the module lock, then the data lock.
        let mut manager = self.modules_write();
        if !reload {
            if let Some(existing) = manager.find(&name) {
                return Ok(existing);
            }
        }
        let mut data = self.data_write();
        let symbols = check_exports(&manager, &data, &name, loaded.exports(), reload)?;
        for (export, &symbol) in loaded.exports().iter().zip(&symbols) {
            data.overwrite(symbol, &export.to_string(), export.clone());
        }
        manager.register(value.clone(), &name, &symbols);
        drop(data);
        drop(manager);

        match path {
            Some(path) => log::info!(
                "loaded module {} from {} ({} exports)",
                name,
                path.display(),
                symbols.len()
            ),
            None => log::info!("loaded module {} ({} exports)", name, symbols.len()),
        }
        Ok(value)
    }
}

/// Symbols of `exports`, failing on any collision before anything is
/// bound.
///
/// A fresh load needs every symbol unbound. A reload may also rebind the
/// symbols the same module already owns.
fn check_exports(
    manager: &ModuleManager,
    data: &DataTable,
    module: &str,
    exports: &[Value],
    reload: bool,
) -> VmResult<Vec<SymbolId>> {
    let mut seen = FxHashSet::default();
    let mut symbols = Vec::with_capacity(exports.len());
    for value in exports {
        let combinator = value
            .as_combinator()
            .ok_or_else(|| VmError::unnamed(value))?;
        let symbol = combinator.symbol();
        if !seen.insert(symbol) {
            return Err(VmError::collision(combinator.name(), module, module));
        }
        if data.contains(symbol) {
            let owner = manager.owner(symbol);
            if !(reload && owner == Some(module)) {
                let existing = owner.unwrap_or("an earlier definition");
                return Err(VmError::collision(combinator.name(), module, existing));
            }
        }
        symbols.push(symbol);
    }
    Ok(symbols)
}
