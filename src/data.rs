//! Global bindings from symbols to their canonical values.

use rustc_hash::FxHashMap;

use crate::error::{VmError, VmResult};
use crate::value::{SymbolId, Value};

#[derive(Debug, Default)]
pub struct DataTable {
    bindings: FxHashMap<SymbolId, Value>,
}

impl DataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `symbol` if it is still free. `name` is only used for the error.
    pub fn define(&mut self, symbol: SymbolId, name: &str, value: Value) -> VmResult<()> {
        if self.bindings.contains_key(&symbol) {
            return Err(VmError::already_defined(name));
        }
        self.bindings.insert(symbol, value);
        Ok(())
    }

    /// Bind `symbol` unconditionally, returning the previous binding.
    pub fn overwrite(&mut self, symbol: SymbolId, name: &str, value: Value) -> Option<Value> {
        let previous = self.bindings.insert(symbol, value);
        if previous.is_some() {
            log::warn!("overwriting binding for {}", name);
        }
        previous
    }

    pub fn get(&self, symbol: SymbolId) -> Option<&Value> {
        self.bindings.get(&symbol)
    }

    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.bindings.contains_key(&symbol)
    }

    /// Bound symbols in ascending id order.
    pub fn symbols(&self) -> Vec<SymbolId> {
        let mut symbols: Vec<SymbolId> = self.bindings.keys().copied().collect();
        symbols.sort();
        symbols
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
