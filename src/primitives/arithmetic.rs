//! Arithmetic over integers, floats and complex numbers.
//!
//! Operands must have the same tag; mixed operands do not match. Integer
//! overflow and division by zero throw.

use crate::primitives::def::CombinatorDef;
use crate::value::{Outcome, Shape, Value};
use crate::vm::Vm;

fn throw(vm: &Vm, message: &str) -> Outcome {
    Outcome::Threw(vm.bad(message))
}

fn checked(vm: &Vm, op: &str, result: Option<i64>) -> Outcome {
    match result {
        Some(i) => Outcome::Matched(Value::integer(i)),
        None => throw(vm, &format!("integer overflow in {}", op)),
    }
}

pub fn prim_add(vm: &Vm, args: &[Value]) -> Outcome {
    match args {
        [Value::Integer(a), Value::Integer(b)] => checked(vm, "+", a.checked_add(*b)),
        [Value::Float(a), Value::Float(b)] => Outcome::Matched(Value::float(a + b)),
        [Value::Complex(ar, ai), Value::Complex(br, bi)] => {
            Outcome::Matched(Value::complex(ar + br, ai + bi))
        }
        [Value::Text(a), Value::Text(b)] => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Outcome::Matched(Value::text(joined))
        }
        _ => Outcome::NoMatch,
    }
}

pub fn prim_sub(vm: &Vm, args: &[Value]) -> Outcome {
    match args {
        [Value::Integer(a), Value::Integer(b)] => checked(vm, "-", a.checked_sub(*b)),
        [Value::Float(a), Value::Float(b)] => Outcome::Matched(Value::float(a - b)),
        [Value::Complex(ar, ai), Value::Complex(br, bi)] => {
            Outcome::Matched(Value::complex(ar - br, ai - bi))
        }
        _ => Outcome::NoMatch,
    }
}

pub fn prim_mul(vm: &Vm, args: &[Value]) -> Outcome {
    match args {
        [Value::Integer(a), Value::Integer(b)] => checked(vm, "*", a.checked_mul(*b)),
        [Value::Float(a), Value::Float(b)] => Outcome::Matched(Value::float(a * b)),
        [Value::Complex(ar, ai), Value::Complex(br, bi)] => {
            Outcome::Matched(Value::complex(ar * br - ai * bi, ar * bi + ai * br))
        }
        _ => Outcome::NoMatch,
    }
}

pub fn prim_div(vm: &Vm, args: &[Value]) -> Outcome {
    match args {
        [Value::Integer(_), Value::Integer(0)] => throw(vm, "division by zero"),
        [Value::Integer(a), Value::Integer(b)] => checked(vm, "/", a.checked_div(*b)),
        [Value::Float(a), Value::Float(b)] => Outcome::Matched(Value::float(a / b)),
        [Value::Complex(ar, ai), Value::Complex(br, bi)] => {
            let norm = br * br + bi * bi;
            if norm == 0.0 {
                return throw(vm, "division by zero");
            }
            Outcome::Matched(Value::complex(
                (ar * br + ai * bi) / norm,
                (ai * br - ar * bi) / norm,
            ))
        }
        _ => Outcome::NoMatch,
    }
}

pub fn prim_rem(vm: &Vm, args: &[Value]) -> Outcome {
    match args {
        [Value::Integer(_), Value::Integer(0)] => throw(vm, "division by zero"),
        [Value::Integer(a), Value::Integer(b)] => checked(vm, "%", a.checked_rem(*b)),
        [Value::Float(a), Value::Float(b)] => Outcome::Matched(Value::float(a % b)),
        _ => Outcome::NoMatch,
    }
}

pub fn prim_negate(vm: &Vm, args: &[Value]) -> Outcome {
    match args {
        [Value::Integer(a)] => checked(vm, "negate", a.checked_neg()),
        [Value::Float(a)] => Outcome::Matched(Value::float(-a)),
        [Value::Complex(re, im)] => Outcome::Matched(Value::complex(-re, -im)),
        _ => Outcome::NoMatch,
    }
}

pub const PRIMITIVES: &[CombinatorDef] = &[
    CombinatorDef {
        name: "System::+",
        shape: Shape::Dyadic,
        func: prim_add,
        doc: "Sum of two numbers, or concatenation of two texts.",
        params: &["x", "y"],
    },
    CombinatorDef {
        name: "System::-",
        shape: Shape::Dyadic,
        func: prim_sub,
        doc: "Difference of two numbers.",
        params: &["x", "y"],
    },
    CombinatorDef {
        name: "System::*",
        shape: Shape::Dyadic,
        func: prim_mul,
        doc: "Product of two numbers.",
        params: &["x", "y"],
    },
    CombinatorDef {
        name: "System::/",
        shape: Shape::Dyadic,
        func: prim_div,
        doc: "Quotient of two numbers. Integer division truncates.",
        params: &["x", "y"],
    },
    CombinatorDef {
        name: "System::%",
        shape: Shape::Dyadic,
        func: prim_rem,
        doc: "Remainder of a division.",
        params: &["x", "y"],
    },
    CombinatorDef {
        name: "System::negate",
        shape: Shape::Monadic,
        func: prim_negate,
        doc: "Arithmetic negation.",
        params: &["x"],
    },
];
