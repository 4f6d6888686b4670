// The system module's combinators, reduced end to end
use egel::Value;

use crate::common::{reduce_exception, reduce_value, setup};

fn call(vm: &egel::Vm, name: &str, args: Vec<Value>) -> Value {
    Value::apply(vm.get_data_string(name), args)
}

#[test]
fn test_arithmetic() {
    let vm = setup();
    let cases = [
        ("System::+", 3, 4, 7),
        ("System::-", 3, 4, -1),
        ("System::*", 3, 4, 12),
        ("System::/", 9, 4, 2),
        ("System::%", 9, 4, 1),
    ];
    for (name, a, b, expected) in cases {
        let expr = call(&vm, name, vec![Value::integer(a), Value::integer(b)]);
        assert_eq!(reduce_value(&vm, &expr), Value::integer(expected), "{}", name);
    }
    let negate = call(&vm, "System::negate", vec![Value::float(1.5)]);
    assert_eq!(reduce_value(&vm, &negate), Value::float(-1.5));
}

#[test]
fn test_division_by_zero_throws() {
    let vm = setup();
    let expr = call(&vm, "System::/", vec![Value::integer(1), Value::integer(0)]);
    let e = reduce_exception(&vm, &expr);
    assert_eq!(e, vm.bad("division by zero"));
}

#[test]
fn test_mismatched_arithmetic_keeps_redex() {
    let vm = setup();
    let expr = call(&vm, "System::+", vec![Value::integer(3), Value::text("x")]);
    assert_eq!(reduce_value(&vm, &expr), expr);
}

#[test]
fn test_comparison_results_are_booleans() {
    let vm = setup();
    let lt = call(&vm, "System::<", vec![Value::integer(1), Value::integer(2)]);
    assert!(vm.is_true(&reduce_value(&vm, &lt)));
    let eq = call(&vm, "System::==", vec![Value::text("a"), Value::text("b")]);
    assert!(vm.is_false(&reduce_value(&vm, &eq)));
}

#[test]
fn test_throw_and_apply() {
    let vm = setup();
    let thrown = call(&vm, "System::throw", vec![Value::text("oops")]);
    assert_eq!(reduce_exception(&vm, &thrown), Value::text("oops"));

    let negate = vm.get_data_string("System::negate");
    let applied = call(&vm, "System::apply", vec![negate, Value::integer(5)]);
    assert_eq!(reduce_value(&vm, &applied), Value::integer(-5));
}

#[test]
fn test_list_collects_arguments() {
    let vm = setup();
    let expr = call(&vm, "System::list", (1..=3).map(Value::integer).collect());
    let list = reduce_value(&vm, &expr);
    assert_eq!(list.to_string(), "{1, 2, 3}");
    let is_list = call(&vm, "System::is_list", vec![list]);
    assert!(vm.is_true(&reduce_value(&vm, &is_list)));
}

#[test]
fn test_par_returns_both_results() {
    let vm = setup();
    let one = vm.monadic("Main::one", "", |_, _| egel::Outcome::Matched(Value::integer(1)));
    let two = vm.monadic("Main::two", "", |_, _| egel::Outcome::Matched(Value::integer(2)));
    let expr = call(&vm, "System::par", vec![one, two]);
    let result = reduce_value(&vm, &expr);
    assert_eq!(
        vm.from_tuple(&result),
        Some(vec![Value::integer(1), Value::integer(2)])
    );
}

#[test]
fn test_par_rethrows() {
    let vm = setup();
    let one = vm.monadic("Main::one", "", |_, _| egel::Outcome::Matched(Value::integer(1)));
    let fail = vm.monadic("Main::fail", "", |vm, _| egel::Outcome::Threw(vm.bad("right side")));
    let expr = call(&vm, "System::par", vec![one, fail]);
    assert_eq!(reduce_exception(&vm, &expr), vm.bad("right side"));
}

#[test]
fn test_every_definition_is_bound() {
    let vm = setup();
    for def in egel::primitives::definitions() {
        let bound = vm.get_data_string(def.name);
        let builtin = bound.as_combinator().and_then(|c| c.builtin());
        assert_eq!(builtin.map(|b| b.shape()), Some(def.shape), "{}", def.name);
    }
}
