//! Shared test helpers for the Egel test suite.
//!
//! Provides the canonical machine setup and thunk builders so test files
//! don't need to copy-paste their own variants.

#![allow(dead_code)]

use egel::value::Outcome;
use egel::vm::thunk;
use egel::{register_primitives, Array, Config, Reduction, Value, Vm};

/// Install a test logger once; respects `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A machine with an empty search path and no primitives.
pub fn bare() -> Vm {
    init_logging();
    Vm::with_config(Config::default().with_search_path(Vec::<std::path::PathBuf>::new()))
}

/// A machine with the `system` module loaded.
pub fn setup() -> Vm {
    let vm = bare();
    register_primitives(&vm).expect("system module loads");
    vm
}

/// Reduce and expect a value.
pub fn reduce_value(vm: &Vm, expr: &Value) -> Value {
    match vm.reduce(expr) {
        Reduction::Value(v) => v,
        other => panic!("expected a value from {}, got {:?}", expr, other),
    }
}

/// Reduce and expect an exception.
pub fn reduce_exception(vm: &Vm, expr: &Value) -> Value {
    match vm.reduce(expr) {
        Reduction::Exception(e) => e,
        other => panic!("expected an exception from {}, got {:?}", expr, other),
    }
}

/// `Main::add` over integers only.
pub fn int_add(vm: &Vm) -> Value {
    vm.dyadic("Main::add", "integer addition", |_, a, b| {
        match (a.as_integer(), b.as_integer()) {
            (Some(a), Some(b)) => Outcome::Matched(Value::integer(a + b)),
            _ => Outcome::NoMatch,
        }
    })
}

/// Thunk delivering to `out[5]` under the given continuation and handler
/// frames.
pub fn thunk_into(
    out: &Array,
    continuation: Option<&Array>,
    handler: Option<&Array>,
    callee: Value,
    args: Vec<Value>,
) -> Array {
    thunk::build(
        Some(Value::Array(out.clone())),
        Some(Value::integer(thunk::ARGS as i64)),
        continuation.map(|k| Value::Array(k.clone())),
        handler.map(|h| Value::Array(h.clone())),
        callee,
        args,
    )
}

/// Step a thunk to completion on `vm`.
pub fn run(vm: &Vm, thunk: Array) {
    assert!(vm.run(thunk, &egel::ReducerState::new()));
}
