//! Control combinators.

use crate::primitives::def::CombinatorDef;
use crate::value::{Outcome, Shape, Value};
use crate::vm::Vm;

pub fn prim_throw(_: &Vm, args: &[Value]) -> Outcome {
    match args {
        [e] => Outcome::Threw(e.clone()),
        _ => Outcome::NoMatch,
    }
}

/// Continues with `f x`, so the application is reduced by the engine.
pub fn prim_apply(_: &Vm, args: &[Value]) -> Outcome {
    match args {
        [f, x] => Outcome::Matched(Value::apply(f.clone(), [x.clone()])),
        _ => Outcome::NoMatch,
    }
}

pub fn prim_list(vm: &Vm, args: &[Value]) -> Outcome {
    Outcome::Matched(vm.to_list(args.to_vec()))
}

pub const PRIMITIVES: &[CombinatorDef] = &[
    CombinatorDef {
        name: "System::throw",
        shape: Shape::Monadic,
        func: prim_throw,
        doc: "Throw the argument as an exception.",
        params: &["e"],
    },
    CombinatorDef {
        name: "System::apply",
        shape: Shape::Binary,
        func: prim_apply,
        doc: "Apply a function to an argument.",
        params: &["f", "x"],
    },
    CombinatorDef {
        name: "System::list",
        shape: Shape::Variadic,
        func: prim_list,
        doc: "Collect all arguments into a list.",
        params: &[],
    },
];
