//! Textual rendering of values.
//!
//! Lists render as `{1, 2, 3}`, tuples as `(1, 2)`, other arrays as a
//! parenthesized application `(f a b)` with `.` for an empty slot. Text
//! and characters are quoted and escaped.

use std::fmt;

use super::array::Array;
use super::list::{is_cons, is_nil, is_tuple, list_to_vec, tuple_to_vec};
use super::Value;

/// Pending output. Arrays expand into their delimiters and children, so
/// nesting depth costs heap, not stack.
enum Piece {
    Value(Value),
    Hole,
    Token(&'static str),
}

fn render_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    write!(f, "{:?}", x)
}

fn render_scalar(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Integer(i) => write!(f, "{}", i),
        Value::Float(x) => render_float(f, *x),
        Value::Complex(re, im) => {
            render_float(f, *re)?;
            if !im.is_sign_negative() {
                f.write_str("+")?;
            }
            render_float(f, *im)?;
            f.write_str("i")
        }
        Value::Char(c) => write!(f, "{:?}", c),
        Value::Text(s) => write!(f, "{:?}", s.as_ref()),
        Value::Opaque(o) => o.render(f),
        Value::Combinator(c) => {
            if is_nil(value) {
                f.write_str("{}")
            } else if is_tuple(value) {
                f.write_str("()")
            } else {
                f.write_str(c.name())
            }
        }
        Value::Array(_) => Ok(()),
    }
}

fn expand(value: &Value, array: &Array, pending: &mut Vec<Piece>) {
    let list = if is_cons(value) { list_to_vec(value) } else { None };
    let tuple = if list.is_none() && is_tuple(value) {
        tuple_to_vec(value)
    } else {
        None
    };
    type Layout = (&'static str, Vec<Option<Value>>, &'static str, &'static str);
    let (open, slots, separator, close): Layout = match (list, tuple) {
        (Some(items), _) => ("{", items.into_iter().map(Some).collect(), ", ", "}"),
        (None, Some(fields)) => ("(", fields.into_iter().map(Some).collect(), ", ", ")"),
        (None, None) => ("(", array.snapshot(), " ", ")"),
    };

    pending.push(Piece::Token(close));
    for (i, slot) in slots.into_iter().enumerate().rev() {
        pending.push(match slot {
            Some(v) => Piece::Value(v),
            None => Piece::Hole,
        });
        if i > 0 {
            pending.push(Piece::Token(separator));
        }
    }
    pending.push(Piece::Token(open));
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Value(self.clone())];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Token(token) => f.write_str(token)?,
                Piece::Hole => f.write_str(".")?,
                Piece::Value(value) => match &value {
                    Value::Array(array) => expand(&value, array, &mut pending),
                    _ => render_scalar(f, &value)?,
                },
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
