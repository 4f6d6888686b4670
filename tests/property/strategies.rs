//! Proptest strategies for generating arbitrary Egel values.

#![allow(dead_code)]

use egel::Value;
use proptest::prelude::*;

/// Strategy for literal values.
///
/// Generates integers, floats (including NaN, infinities and signed zero),
/// chars and short texts.
pub fn arb_literal() -> impl Strategy<Value = Value> {
    prop_oneof![
        10 => any::<i64>().prop_map(Value::integer),
        10 => prop::num::f64::NORMAL.prop_map(Value::float),
        1 => Just(Value::float(0.0)),
        1 => Just(Value::float(-0.0)),
        1 => Just(Value::float(f64::INFINITY)),
        1 => Just(Value::float(f64::NEG_INFINITY)),
        1 => Just(Value::float(f64::NAN)),
        5 => any::<char>().prop_map(Value::char),
        5 => "[a-z]{0,8}".prop_map(|s| Value::text(s.as_str())),
    ]
}

/// Strategy for literals and nested arrays of them.
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_literal().prop_recursive(4, 64, 6, |inner| {
        prop::collection::vec(inner, 2..6).prop_map(Value::array)
    })
}
