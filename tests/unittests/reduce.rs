// The reduction loop: bootstrap, re-entrancy, cooperative halting
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use egel::value::Outcome;
use egel::{ReducerState, Reduction, Value};

use crate::common::{bare, int_add, reduce_value};

#[test]
fn test_literals_reduce_to_themselves() {
    let vm = bare();
    for v in [
        Value::integer(-1),
        Value::float(0.5),
        Value::complex(1.0, 1.0),
        Value::char('λ'),
        Value::text("text"),
    ] {
        assert_eq!(vm.reduce(&v), Reduction::Value(v.clone()));
    }
}

#[test]
fn test_nested_reduce_from_builtin() {
    let vm = bare();
    let add = int_add(&vm);
    // strict: forces its argument with a nested reduction
    let force = vm.monadic("Main::force", "", |vm, v| match vm.reduce(v) {
        Reduction::Value(r) => Outcome::Matched(r),
        Reduction::Exception(e) => Outcome::Threw(e),
        Reduction::Halted => Outcome::NoMatch,
    });
    let inner = Value::apply(add.clone(), [Value::integer(1), Value::integer(2)]);
    let forced = Value::apply(force, [inner]);
    let expr = Value::apply(add.clone(), [Value::integer(10)]);
    let expr = Value::apply(expr, [Value::integer(5)]);

    assert_eq!(reduce_value(&vm, &forced), Value::integer(3));
    assert_eq!(reduce_value(&vm, &expr), Value::integer(15));
}

#[test]
fn test_nested_exception_does_not_escape_outer() {
    let vm = bare();
    let boom = vm.monadic("Main::boom", "", |_, v| Outcome::Threw(v.clone()));
    let catch = vm.monadic("Main::catch", "", |vm, v| match vm.reduce(v) {
        Reduction::Exception(e) => Outcome::Matched(Value::apply(vm.data("Main::caught"), [e])),
        Reduction::Value(r) => Outcome::Matched(r),
        Reduction::Halted => Outcome::NoMatch,
    });
    let expr = Value::apply(catch, [Value::apply(boom, [Value::integer(9)])]);
    assert_eq!(reduce_value(&vm, &expr).to_string(), "(Main::caught 9)");
}

#[test]
fn test_halt_from_another_thread() {
    let vm = bare();
    // never finishes: keeps returning its own thunk
    let spin = vm.compiled("Main::spin", |_, thunk| Some(thunk.clone()));
    let state = Arc::new(ReducerState::new());

    let halter = {
        let state = state.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            state.halt();
        })
    };
    assert_eq!(vm.reduce_with(&spin, &state), Reduction::Halted);
    halter.join().unwrap();
}

#[test]
fn test_handlers_receive_result_and_exception() {
    let vm = bare();
    let results = Arc::new(Mutex::new(Vec::new()));
    let exceptions = Arc::new(Mutex::new(Vec::new()));
    let ret = {
        let results = results.clone();
        vm.sink("Main::ret", move |v| results.lock().unwrap().push(v))
    };
    let exc = {
        let exceptions = exceptions.clone();
        vm.sink("Main::exc", move |v| exceptions.lock().unwrap().push(v))
    };
    let boom = vm.monadic("Main::boom", "", |_, v| Outcome::Threw(v.clone()));
    let state = ReducerState::new();

    assert!(vm.reduce_with_handlers(&Value::integer(1), &ret, &exc, &state));
    assert!(vm.reduce_with_handlers(
        &Value::apply(boom, [Value::integer(2)]),
        &ret,
        &exc,
        &state
    ));

    assert_eq!(*results.lock().unwrap(), vec![Value::integer(1)]);
    assert_eq!(*exceptions.lock().unwrap(), vec![Value::integer(2)]);
}

#[test]
fn test_long_chain_runs_in_constant_stack() {
    let vm = bare();
    // countdown n continues with (countdown n-1) until zero
    let countdown = vm.unary("Main::countdown", "", |vm, n| match n.as_integer() {
        Some(0) => Outcome::Matched(Value::text("done")),
        Some(n) => Outcome::Matched(Value::apply(
            vm.get_data_string("Main::countdown"),
            [Value::integer(n - 1)],
        )),
        None => Outcome::NoMatch,
    });
    vm.define(countdown.clone()).unwrap();
    let expr = Value::apply(countdown, [Value::integer(100_000)]);
    assert_eq!(reduce_value(&vm, &expr), Value::text("done"));
}
