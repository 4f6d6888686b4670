// Lists and tuples built from arrays
use egel::symbol::{SYMBOL_CONS, SYMBOL_NIL};
use egel::value::list;
use egel::Value;

use crate::common::{bare, reduce_value};

#[test]
fn test_cons_list_converts_to_native_sequence() {
    let vm = bare();
    let cons = vm.get_data(SYMBOL_CONS);
    let nil = vm.get_data(SYMBOL_NIL);

    let inner = Value::apply(cons.clone(), [Value::integer(2), nil]);
    let expr = Value::apply(cons, [Value::integer(1), inner]);
    let list = reduce_value(&vm, &expr);

    assert_eq!(
        vm.from_list(&list),
        Some(vec![Value::integer(1), Value::integer(2)])
    );
    assert_eq!(list.to_string(), "{1, 2}");
}

#[test]
fn test_user_defined_constructor_is_not_a_list() {
    let vm = bare();
    let my_cons = vm.data("Main::cons");
    vm.define(my_cons.clone()).unwrap();
    let cell = Value::apply(my_cons, [Value::integer(1), vm.create_nil()]);
    assert!(!vm.is_list(&cell));
}

#[test]
fn test_malformed_cons_is_not_a_cell() {
    let vm = bare();
    let cons = vm.get_data(SYMBOL_CONS);
    let short = Value::apply(cons.clone(), [Value::integer(1)]);
    assert!(!list::is_cons(&short));
    assert_eq!(short.to_string(), "(System::cons 1)");
}

#[test]
fn test_round_trip_and_empty() {
    let vm = bare();
    assert_eq!(vm.from_list(&vm.to_list(vec![])), Some(vec![]));
    let items: Vec<Value> = "hello".chars().map(Value::char).collect();
    assert_eq!(vm.from_list(&vm.to_list(items.clone())), Some(items));
}

#[test]
fn test_tuples() {
    let vm = bare();
    let t = vm.to_tuple(vec![Value::integer(1), Value::float(2.5)]);
    assert!(vm.is_tuple(&t));
    assert!(!vm.is_list(&t));
    assert_eq!(
        vm.from_tuple(&t),
        Some(vec![Value::integer(1), Value::float(2.5)])
    );
    assert_eq!(vm.from_tuple(&Value::integer(1)), None);
}

#[test]
fn test_long_list_drops_without_stack_overflow() {
    let vm = bare();
    let list = vm.to_list((0..10_000).map(Value::integer).collect());
    assert_eq!(vm.from_list(&list).map(|v| v.len()), Some(10_000));
    drop(list);

    let deep = vm.to_list((0..1_000_000).map(Value::integer).collect());
    drop(deep);
}
