//! Parallel reduction.

use std::panic;
use std::thread;

use crate::primitives::def::CombinatorDef;
use crate::value::{Outcome, Shape, Value};
use crate::vm::{Reduction, Vm};

/// Reduce `f none` and `g none` on two threads sharing the machine.
///
/// Yields the tuple of both results. If either side throws, the first
/// exception (left before right) is rethrown.
pub fn prim_par(vm: &Vm, args: &[Value]) -> Outcome {
    let [f, g] = args else {
        return Outcome::NoMatch;
    };
    let none = vm.create_none();
    let left_expr = Value::apply(f.clone(), [none.clone()]);
    let right_expr = Value::apply(g.clone(), [none]);

    let (left, right) = thread::scope(|scope| {
        let left = scope.spawn(|| vm.reduce(&left_expr));
        let right = scope.spawn(|| vm.reduce(&right_expr));
        (left.join(), right.join())
    });
    let left = left.unwrap_or_else(|payload| panic::resume_unwind(payload));
    let right = right.unwrap_or_else(|payload| panic::resume_unwind(payload));

    match (left, right) {
        (Reduction::Value(a), Reduction::Value(b)) => Outcome::Matched(vm.create_tuple([a, b])),
        (Reduction::Exception(e), _) | (_, Reduction::Exception(e)) => Outcome::Threw(e),
        _ => Outcome::Threw(vm.bad("parallel reduction halted")),
    }
}

pub const PRIMITIVES: &[CombinatorDef] = &[CombinatorDef {
    name: "System::par",
    shape: Shape::Dyadic,
    func: prim_par,
    doc: "Reduce `f none` and `g none` in parallel, returning both results as a tuple.",
    params: &["f", "g"],
}];
