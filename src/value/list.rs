//! Lists and tuples encoded as arrays.
//!
//! `nil` is the bare `System::nil` constructor and a cons cell is the
//! three-slot array `[System::cons, head, tail]`. A tuple is the bare
//! `System::tuple` constructor (the empty tuple) or an array headed by it.
//!
//! Recognition looks at the head symbol and, for cons cells, the exact size.
//! An array headed by `cons` with any other size is a plain application.

use crate::symbol::{SYMBOL_CONS, SYMBOL_NIL, SYMBOL_TUPLE};

use super::Value;

fn is_constructor(value: &Value, symbol: crate::value::SymbolId) -> bool {
    value
        .as_combinator()
        .is_some_and(|c| c.symbol() == symbol)
}

fn head_is(value: &Value, symbol: crate::value::SymbolId) -> bool {
    value
        .as_array()
        .and_then(|a| a.head())
        .is_some_and(|h| is_constructor(&h, symbol))
}

pub fn is_nil(value: &Value) -> bool {
    is_constructor(value, SYMBOL_NIL)
}

pub fn is_cons(value: &Value) -> bool {
    head_is(value, SYMBOL_CONS) && value.as_array().is_some_and(|a| a.len() == 3)
}

pub fn is_tuple(value: &Value) -> bool {
    is_constructor(value, SYMBOL_TUPLE) || head_is(value, SYMBOL_TUPLE)
}

/// Split a cons cell into head and tail.
pub fn uncons(value: &Value) -> Option<(Value, Value)> {
    if !is_cons(value) {
        return None;
    }
    let cell = value.as_array()?;
    Some((cell.get(1)?, cell.get(2)?))
}

/// Whether `value` is a proper list: cons cells ending in `nil`.
pub fn is_list(value: &Value) -> bool {
    list_to_vec(value).is_some()
}

/// Elements of a proper list in order. `None` for anything else, including
/// an improper tail.
pub fn list_to_vec(value: &Value) -> Option<Vec<Value>> {
    let mut items = Vec::new();
    let mut cursor = value.clone();
    loop {
        if is_nil(&cursor) {
            return Some(items);
        }
        let (head, tail) = uncons(&cursor)?;
        items.push(head);
        cursor = tail;
    }
}

/// Fields of a tuple; empty for the bare constructor.
pub fn tuple_to_vec(value: &Value) -> Option<Vec<Value>> {
    if is_constructor(value, SYMBOL_TUPLE) {
        return Some(Vec::new());
    }
    if !head_is(value, SYMBOL_TUPLE) {
        return None;
    }
    let mut fields = value.as_array()?.values()?;
    fields.remove(0);
    Some(fields)
}

/// Build a list right to left from the canonical constructors.
pub fn build_list<I>(nil: &Value, cons: &Value, items: I) -> Value
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: DoubleEndedIterator,
{
    items.into_iter().rev().fold(nil.clone(), |tail, head| {
        Value::array(vec![cons.clone(), head, tail])
    })
}

/// Build a tuple; the bare constructor when there are no fields.
pub fn build_tuple(tuple: &Value, fields: impl IntoIterator<Item = Value>) -> Value {
    Value::apply(tuple.clone(), fields)
}
