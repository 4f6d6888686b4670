// Global bindings: define refuses rebinding, overwrite replaces
use egel::{VmError, Value};

use crate::common::bare;

#[test]
fn test_define_twice_is_an_error() {
    let vm = bare();
    let f = vm.data("Main::f");
    vm.define(f.clone()).unwrap();
    assert_eq!(
        vm.define(f),
        Err(VmError::AlreadyDefined {
            name: "Main::f".to_string()
        })
    );
}

#[test]
fn test_overwrite_replaces_binding() {
    let vm = bare();
    vm.define(vm.data("Main::f")).unwrap();
    let replacement = vm.monadic("Main::f", "", |_, v| egel::Outcome::Matched(v.clone()));
    vm.overwrite(replacement).unwrap();
    let bound = vm.get_data_string("Main::f");
    assert!(bound.as_combinator().unwrap().builtin().is_some());
}

#[test]
fn test_only_combinators_bind() {
    let vm = bare();
    assert!(matches!(
        vm.define(Value::text("x")),
        Err(VmError::Unnamed { .. })
    ));
}

#[test]
fn test_unbound_lookup_gives_stub() {
    let vm = bare();
    let stub = vm.get_data_string("Main::later");
    assert!(stub.is_stub());
    assert!(!vm.is_defined(stub.symbol().unwrap()));
}

#[test]
fn test_defined_symbols_are_sorted() {
    let vm = bare();
    vm.define(vm.data("Main::b")).unwrap();
    vm.define(vm.data("Main::a")).unwrap();
    let symbols = vm.defined_symbols();
    assert!(symbols.windows(2).all(|w| w[0] < w[1]));
}
