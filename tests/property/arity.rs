// Property tests for saturation of fixed-arity builtins.
//
// A builtin of arity N applied to M arguments stays a redex while M < N,
// fires on exactly N, and leaves the remaining M - N applied to its result.

use crate::common::{bare, reduce_value};
use egel::value::{NativeFn, Outcome, Shape};
use egel::{Value, Vm};
use proptest::prelude::*;
use std::sync::Arc;

fn shape_of(arity: usize) -> Shape {
    match arity {
        1 => Shape::Monadic,
        2 => Shape::Dyadic,
        _ => Shape::Triadic,
    }
}

/// Builtin that answers with its argument count.
fn counter(vm: &Vm, arity: usize) -> Value {
    let func: NativeFn = Arc::new(|_: &Vm, args: &[Value]| {
        Outcome::Matched(Value::integer(args.len() as i64))
    });
    vm.builtin("Main::count", shape_of(arity), "", func)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn fires_only_when_saturated(arity in 1usize..=3, supplied in 1usize..=6) {
        let vm = bare();
        let count = counter(&vm, arity);
        let args: Vec<Value> = (0..supplied as i64).map(Value::integer).collect();
        let expr = Value::apply(count, args.clone());
        let result = reduce_value(&vm, &expr);

        if supplied < arity {
            prop_assert_eq!(result, expr);
        } else {
            let fired = Value::integer(arity as i64);
            let expected = Value::apply(fired, args[arity..].to_vec());
            prop_assert_eq!(result, expected);
        }
    }

    #[test]
    fn variadic_takes_everything(supplied in 1usize..=8) {
        let vm = bare();
        let func: NativeFn = Arc::new(|_: &Vm, args: &[Value]| {
            Outcome::Matched(Value::integer(args.len() as i64))
        });
        let count = vm.builtin("Main::count", Shape::Variadic, "", func);
        let args: Vec<Value> = (0..supplied as i64).map(Value::integer).collect();
        let result = reduce_value(&vm, &Value::apply(count, args));
        prop_assert_eq!(result, Value::integer(supplied as i64));
    }
}
