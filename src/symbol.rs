//! Symbol interning.
//!
//! Qualified names (`System::cons`, `Dict::get`) map to dense ids. The
//! table only grows; ids stay valid for the life of the machine.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::value::SymbolId;

/// Separator between the parts of a qualified name.
pub const SEPARATOR: &str = "::";

pub const SYMBOL_INT: SymbolId = SymbolId(0);
pub const SYMBOL_FLOAT: SymbolId = SymbolId(1);
pub const SYMBOL_COMPLEX: SymbolId = SymbolId(2);
pub const SYMBOL_CHAR: SymbolId = SymbolId(3);
pub const SYMBOL_TEXT: SymbolId = SymbolId(4);
pub const SYMBOL_NONE: SymbolId = SymbolId(5);
pub const SYMBOL_TRUE: SymbolId = SymbolId(6);
pub const SYMBOL_FALSE: SymbolId = SymbolId(7);
pub const SYMBOL_TUPLE: SymbolId = SymbolId(8);
pub const SYMBOL_NIL: SymbolId = SymbolId(9);
pub const SYMBOL_CONS: SymbolId = SymbolId(10);
pub const SYMBOL_EXCEPTION: SymbolId = SymbolId(11);
pub const SYMBOL_BADARGS: SymbolId = SymbolId(12);
pub const SYMBOL_UNSUPPORTED: SymbolId = SymbolId(13);

/// Names interned by every table, in id order.
pub const PREDEFINED: [&str; 14] = [
    "System::int",
    "System::float",
    "System::complex",
    "System::char",
    "System::text",
    "System::none",
    "System::true",
    "System::false",
    "System::tuple",
    "System::nil",
    "System::cons",
    "System::exception",
    "System::badargs",
    "System::unsupported",
];

/// Join namespace parts and a local name into a qualified name.
pub fn qualify(path: &[&str], name: &str) -> String {
    let mut qualified = String::new();
    for part in path {
        qualified.push_str(part);
        qualified.push_str(SEPARATOR);
    }
    qualified.push_str(name);
    qualified
}

/// Symbol interning table.
///
/// Names are held once as `Arc<str>` and shared between the lookup map and
/// the id-indexed vector.
#[derive(Debug)]
pub struct SymbolTable {
    map: FxHashMap<Arc<str>, SymbolId>,
    names: Vec<Arc<str>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = SymbolTable {
            map: FxHashMap::default(),
            names: Vec::with_capacity(256),
        };
        for name in PREDEFINED {
            table.intern(name);
        }
        table
    }

    /// Intern a name, returning its id. Idempotent.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.map.get(name) {
            return id;
        }

        let id = SymbolId(self.names.len() as u32);
        let shared: Arc<str> = Arc::from(name);
        self.names.push(shared.clone());
        self.map.insert(shared, id);
        id
    }

    pub fn intern_qualified(&mut self, path: &[&str], name: &str) -> SymbolId {
        self.intern(&qualify(path, name))
    }

    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.names.get(id.0 as usize).map(|s| s.as_ref())
    }

    /// Shared handle to a name, for values that keep it.
    pub fn shared_name(&self, id: SymbolId) -> Option<Arc<str>> {
        self.names.get(id.0 as usize).cloned()
    }

    /// Look a name up without interning it.
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
