//! The shared machine and its handle.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::Config;
use crate::data::DataTable;
use crate::error::{VmError, VmResult};
use crate::module::ModuleManager;
use crate::symbol::{self, SymbolTable, PREDEFINED};
use crate::value::{Array, Bytecode, Combinator, CombinatorKind, SymbolId, Value};

/// Reduces bytecode combinators on behalf of the engine.
///
/// Receives the whole thunk and follows the same contract as a compiled
/// combinator: deposit or rethread, and return the next thunk.
pub trait CodeRunner: Send + Sync {
    fn reduce(
        &self,
        vm: &Vm,
        combinator: &Combinator,
        code: &Bytecode,
        thunk: &Array,
    ) -> Option<Array>;
}

/// Canonical constructors, created once per machine.
pub(crate) struct Canon {
    pub none: Value,
    pub true_: Value,
    pub false_: Value,
    pub tuple: Value,
    pub nil: Value,
    pub cons: Value,
    pub exception: Value,
    pub badargs: Value,
    pub unsupported: Value,
}

impl Canon {
    fn new() -> Canon {
        let constructor = |id: SymbolId| {
            Value::combinator(Combinator::new(
                id,
                PREDEFINED[id.0 as usize],
                CombinatorKind::Data,
            ))
        };
        Canon {
            none: constructor(symbol::SYMBOL_NONE),
            true_: constructor(symbol::SYMBOL_TRUE),
            false_: constructor(symbol::SYMBOL_FALSE),
            tuple: constructor(symbol::SYMBOL_TUPLE),
            nil: constructor(symbol::SYMBOL_NIL),
            cons: constructor(symbol::SYMBOL_CONS),
            exception: constructor(symbol::SYMBOL_EXCEPTION),
            badargs: constructor(symbol::SYMBOL_BADARGS),
            unsupported: constructor(symbol::SYMBOL_UNSUPPORTED),
        }
    }

    fn all(&self) -> [&Value; 9] {
        [
            &self.none,
            &self.true_,
            &self.false_,
            &self.tuple,
            &self.nil,
            &self.cons,
            &self.exception,
            &self.badargs,
            &self.unsupported,
        ]
    }
}

pub(crate) struct Machine {
    symbols: RwLock<SymbolTable>,
    data: RwLock<DataTable>,
    modules: RwLock<ModuleManager>,
    runner: RwLock<Option<Arc<dyn CodeRunner>>>,
    config: Config,
    pub(crate) canon: Canon,
    /// Symbols of the terminal combinators installed by `reduce`.
    pub(crate) result_symbol: SymbolId,
    pub(crate) handler_symbol: SymbolId,
}

/// Handle to a machine. Cheap to clone and safe to send to other threads;
/// every clone sees the same symbols, bindings and modules.
#[derive(Clone)]
pub struct Vm {
    pub(crate) machine: Arc<Machine>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Vm {
    /// Machine configured from the environment.
    pub fn new() -> Vm {
        Vm::with_config(Config::from_env())
    }

    pub fn with_config(config: Config) -> Vm {
        let mut symbols = SymbolTable::new();
        let result_symbol = symbols.intern("System::result");
        let handler_symbol = symbols.intern("System::handler");

        let canon = Canon::new();
        let mut data = DataTable::new();
        for value in canon.all() {
            if let Some(c) = value.as_combinator() {
                data.overwrite(c.symbol(), c.name(), value.clone());
            }
        }
        log::debug!(
            "machine created: {} symbols, search path {:?}",
            symbols.len(),
            config.search_path
        );

        Vm {
            machine: Arc::new(Machine {
                symbols: RwLock::new(symbols),
                data: RwLock::new(data),
                modules: RwLock::new(ModuleManager::new()),
                runner: RwLock::new(None),
                config,
                canon,
                result_symbol,
                handler_symbol,
            }),
        }
    }

    pub fn config(&self) -> &Config {
        &self.machine.config
    }

    pub(crate) fn modules_read(&self) -> RwLockReadGuard<'_, ModuleManager> {
        read(&self.machine.modules)
    }

    pub(crate) fn modules_write(&self) -> RwLockWriteGuard<'_, ModuleManager> {
        write(&self.machine.modules)
    }

    /// Take after the module lock when holding both.
    pub(crate) fn data_write(&self) -> RwLockWriteGuard<'_, DataTable> {
        write(&self.machine.data)
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    pub fn enter_symbol(&self, name: &str) -> SymbolId {
        if let Some(id) = read(&self.machine.symbols).get(name) {
            return id;
        }
        write(&self.machine.symbols).intern(name)
    }

    /// Intern `path::name`.
    pub fn enter_symbol_qualified(&self, path: &[&str], name: &str) -> SymbolId {
        self.enter_symbol(&symbol::qualify(path, name))
    }

    pub fn symbol_name(&self, id: SymbolId) -> Option<String> {
        read(&self.machine.symbols).name(id).map(str::to_string)
    }

    pub(crate) fn shared_symbol_name(&self, id: SymbolId) -> Arc<str> {
        read(&self.machine.symbols)
            .shared_name(id)
            .unwrap_or_else(|| Arc::from(format!("#<symbol {}>", id)))
    }

    /// Look a name up without interning it.
    pub fn find_symbol(&self, name: &str) -> Option<SymbolId> {
        read(&self.machine.symbols).get(name)
    }

    // =========================================================================
    // Bindings
    // =========================================================================

    fn binding_symbol(value: &Value) -> VmResult<(SymbolId, String)> {
        match value.as_combinator() {
            Some(c) => Ok((c.symbol(), c.name().to_string())),
            None => Err(VmError::unnamed(value)),
        }
    }

    /// Bind a combinator under its own symbol. Fails if already bound.
    pub fn define(&self, value: Value) -> VmResult<()> {
        let (symbol, name) = Self::binding_symbol(&value)?;
        write(&self.machine.data).define(symbol, &name, value)?;
        log::debug!("defined {}", name);
        Ok(())
    }

    /// Bind a combinator under its own symbol, replacing any binding.
    pub fn overwrite(&self, value: Value) -> VmResult<()> {
        let (symbol, name) = Self::binding_symbol(&value)?;
        write(&self.machine.data).overwrite(symbol, &name, value);
        Ok(())
    }

    pub fn is_defined(&self, symbol: SymbolId) -> bool {
        read(&self.machine.data).contains(symbol)
    }

    /// The value bound to `symbol`, or a stub standing in for it.
    pub fn get_data(&self, symbol: SymbolId) -> Value {
        if let Some(value) = read(&self.machine.data).get(symbol) {
            return value.clone();
        }
        let name = self.shared_symbol_name(symbol);
        Value::combinator(Combinator::new(symbol, name, CombinatorKind::Stub))
    }

    pub fn get_data_string(&self, name: &str) -> Value {
        let symbol = self.enter_symbol(name);
        self.get_data(symbol)
    }

    /// Bound symbols in ascending order.
    pub fn defined_symbols(&self) -> Vec<SymbolId> {
        read(&self.machine.data).symbols()
    }

    // =========================================================================
    // Bytecode
    // =========================================================================

    pub fn set_code_runner(&self, runner: Arc<dyn CodeRunner>) {
        *write(&self.machine.runner) = Some(runner);
    }

    pub fn code_runner(&self) -> Option<Arc<dyn CodeRunner>> {
        read(&self.machine.runner).clone()
    }
}

impl Default for Vm {
    fn default() -> Self {
        Vm::new()
    }
}
