//! Egel dict module: mutable dictionaries keyed by any value.
//!
//! Loaded with `import "dict"`. Keys are ordered with the VM's total value
//! order, so any value can be a key.

#![allow(improper_ctypes_definitions)]

use std::any::Any;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use egel::{Opaque, Outcome, SymbolId, Value, Vm};

pub const DICTIONARY: &str = "Dict::dictionary";

/// A dictionary shared by every value that refers to it.
pub struct Dictionary {
    symbol: SymbolId,
    entries: Mutex<BTreeMap<Value, Value>>,
}

impl Dictionary {
    pub fn new(symbol: SymbolId) -> Self {
        Dictionary {
            symbol,
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<Value, Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn has(&self, key: &Value) -> bool {
        self.entries().contains_key(key)
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.entries().get(key).cloned()
    }

    pub fn set(&self, key: Value, value: Value) -> Option<Value> {
        self.entries().insert(key, value)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<Value> {
        self.entries().keys().cloned().collect()
    }
}

impl Opaque for Dictionary {
    fn symbol(&self) -> SymbolId {
        self.symbol
    }

    fn name(&self) -> &str {
        DICTIONARY
    }

    // Identity order: two dictionaries are equal only if they are the same
    // object.
    fn compare(&self, other: &dyn Opaque) -> Ordering {
        let this = self as *const Dictionary as *const () as usize;
        let that = other as *const dyn Opaque as *const () as usize;
        this.cmp(&that)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", DICTIONARY, self.len())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn reject(vm: &Vm, callee: &str, args: &[&Value]) -> Outcome {
    let args: Vec<Value> = args.iter().map(|&v| v.clone()).collect();
    Outcome::Threw(vm.bad_args(&vm.get_data_string(callee), &args))
}

fn with_dictionary(
    vm: &Vm,
    callee: &str,
    args: &[&Value],
    f: impl FnOnce(&Dictionary) -> Outcome,
) -> Outcome {
    match args.first().and_then(|d| d.downcast::<Dictionary>()) {
        Some(dictionary) => f(dictionary),
        None => reject(vm, callee, args),
    }
}

/// The combinators this library binds.
pub fn exports(vm: &Vm) -> Vec<Value> {
    vec![
        vm.medadic("Dict::dict", "Create an empty dictionary.", |vm| {
            let symbol = vm.enter_symbol(DICTIONARY);
            Outcome::Matched(Value::opaque(Dictionary::new(symbol)))
        }),
        vm.dyadic("Dict::has", "Whether the dictionary has key `k`.", |vm, d, k| {
            with_dictionary(vm, "Dict::has", &[d, k], |d| {
                Outcome::Matched(vm.create_bool(d.has(k)))
            })
        }),
        vm.dyadic("Dict::get", "The value stored under key `k`.", |vm, d, k| {
            with_dictionary(vm, "Dict::get", &[d, k], |d| match d.get(k) {
                Some(value) => Outcome::Matched(value),
                None => Outcome::Threw(vm.bad(format!("key not found: {}", k))),
            })
        }),
        vm.triadic(
            "Dict::set",
            "Store `v` under key `k`, returning the dictionary.",
            |vm, d, k, v| {
                with_dictionary(vm, "Dict::set", &[d, k, v], |dictionary| {
                    if dictionary.set(k.clone(), v.clone()).is_some() {
                        log::trace!("dict: replaced value for {}", k);
                    }
                    Outcome::Matched(d.clone())
                })
            },
        ),
        vm.monadic("Dict::keys", "Keys of the dictionary, as a sorted list.", |vm, d| {
            with_dictionary(vm, "Dict::keys", &[d], |dictionary| {
                Outcome::Matched(vm.to_list(dictionary.keys()))
            })
        }),
    ]
}

/// Module entry point: this library needs nothing.
///
/// # Safety
///
/// Called by the module loader after opening the library.
#[no_mangle]
pub unsafe extern "C" fn egel_imports(imports: &mut Vec<String>) {
    imports.clear();
}

/// Module entry point: the dictionary combinators.
///
/// # Safety
///
/// Called by the module loader with the loading machine.
#[no_mangle]
pub unsafe extern "C" fn egel_exports(vm: &Vm, out: &mut Vec<Value>) {
    out.extend(exports(vm));
}
