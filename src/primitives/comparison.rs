//! Comparison over the total value order.

use std::cmp::Ordering;

use crate::primitives::def::CombinatorDef;
use crate::value::{compare, Outcome, Shape, Value};
use crate::vm::Vm;

fn relation(vm: &Vm, args: &[Value], holds: fn(Ordering) -> bool) -> Outcome {
    match args {
        [a, b] => Outcome::Matched(vm.create_bool(holds(compare(a, b)))),
        _ => Outcome::NoMatch,
    }
}

pub fn prim_eq(vm: &Vm, args: &[Value]) -> Outcome {
    relation(vm, args, Ordering::is_eq)
}

pub fn prim_ne(vm: &Vm, args: &[Value]) -> Outcome {
    relation(vm, args, Ordering::is_ne)
}

pub fn prim_lt(vm: &Vm, args: &[Value]) -> Outcome {
    relation(vm, args, Ordering::is_lt)
}

pub fn prim_le(vm: &Vm, args: &[Value]) -> Outcome {
    relation(vm, args, Ordering::is_le)
}

pub fn prim_gt(vm: &Vm, args: &[Value]) -> Outcome {
    relation(vm, args, Ordering::is_gt)
}

pub fn prim_ge(vm: &Vm, args: &[Value]) -> Outcome {
    relation(vm, args, Ordering::is_ge)
}

pub const PRIMITIVES: &[CombinatorDef] = &[
    CombinatorDef {
        name: "System::==",
        shape: Shape::Dyadic,
        func: prim_eq,
        doc: "Structural equality.",
        params: &["x", "y"],
    },
    CombinatorDef {
        name: "System::/=",
        shape: Shape::Dyadic,
        func: prim_ne,
        doc: "Structural inequality.",
        params: &["x", "y"],
    },
    CombinatorDef {
        name: "System::<",
        shape: Shape::Dyadic,
        func: prim_lt,
        params: &["x", "y"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::<=",
        shape: Shape::Dyadic,
        func: prim_le,
        params: &["x", "y"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::>",
        shape: Shape::Dyadic,
        func: prim_gt,
        params: &["x", "y"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::>=",
        shape: Shape::Dyadic,
        func: prim_ge,
        params: &["x", "y"],
        ..CombinatorDef::DEFAULT
    },
];
