//! Host embedding API: literals, canonical constants, lists, tuples and
//! exception values.

use crate::error::VmError;
use crate::symbol::{SYMBOL_FALSE, SYMBOL_NONE, SYMBOL_TRUE};
use crate::value::list;
use crate::value::{Array, Opaque, Value};

use super::Vm;

impl Vm {
    pub fn create_integer(&self, i: i64) -> Value {
        Value::integer(i)
    }

    pub fn create_float(&self, f: f64) -> Value {
        Value::float(f)
    }

    pub fn create_complex(&self, re: f64, im: f64) -> Value {
        Value::complex(re, im)
    }

    pub fn create_char(&self, c: char) -> Value {
        Value::char(c)
    }

    pub fn create_text(&self, s: &str) -> Value {
        Value::text(s)
    }

    pub fn create_opaque<T: Opaque>(&self, object: T) -> Value {
        Value::opaque(object)
    }

    /// Array of `len` empty slots.
    pub fn create_array(&self, len: usize) -> Value {
        Value::Array(Array::with_len(len))
    }

    pub fn create_none(&self) -> Value {
        self.machine.canon.none.clone()
    }

    pub fn create_true(&self) -> Value {
        self.machine.canon.true_.clone()
    }

    pub fn create_false(&self) -> Value {
        self.machine.canon.false_.clone()
    }

    pub fn create_bool(&self, b: bool) -> Value {
        if b {
            self.create_true()
        } else {
            self.create_false()
        }
    }

    pub fn create_nil(&self) -> Value {
        self.machine.canon.nil.clone()
    }

    pub fn create_cons(&self, head: Value, tail: Value) -> Value {
        Value::array(vec![self.machine.canon.cons.clone(), head, tail])
    }

    pub fn create_tuple(&self, fields: impl IntoIterator<Item = Value>) -> Value {
        list::build_tuple(&self.machine.canon.tuple, fields)
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    fn has_symbol(value: &Value, symbol: crate::value::SymbolId) -> bool {
        value.as_combinator().is_some_and(|c| c.symbol() == symbol)
    }

    pub fn is_none(&self, value: &Value) -> bool {
        Self::has_symbol(value, SYMBOL_NONE)
    }

    pub fn is_true(&self, value: &Value) -> bool {
        Self::has_symbol(value, SYMBOL_TRUE)
    }

    pub fn is_false(&self, value: &Value) -> bool {
        Self::has_symbol(value, SYMBOL_FALSE)
    }

    pub fn is_bool(&self, value: &Value) -> bool {
        self.is_true(value) || self.is_false(value)
    }

    pub fn is_nil(&self, value: &Value) -> bool {
        list::is_nil(value)
    }

    pub fn is_cons(&self, value: &Value) -> bool {
        list::is_cons(value)
    }

    pub fn is_list(&self, value: &Value) -> bool {
        list::is_list(value)
    }

    pub fn is_tuple(&self, value: &Value) -> bool {
        list::is_tuple(value)
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Build a list from native values, keeping their order.
    pub fn to_list(&self, items: Vec<Value>) -> Value {
        list::build_list(&self.machine.canon.nil, &self.machine.canon.cons, items)
    }

    /// Native values of a proper list.
    pub fn from_list(&self, value: &Value) -> Option<Vec<Value>> {
        list::list_to_vec(value)
    }

    pub fn to_tuple(&self, fields: Vec<Value>) -> Value {
        self.create_tuple(fields)
    }

    pub fn from_tuple(&self, value: &Value) -> Option<Vec<Value>> {
        list::tuple_to_vec(value)
    }

    // =========================================================================
    // Exception values
    // =========================================================================

    /// `System::exception "message"`.
    pub fn bad(&self, message: impl AsRef<str>) -> Value {
        Value::array(vec![
            self.machine.canon.exception.clone(),
            Value::text(message.as_ref()),
        ])
    }

    /// `System::badargs (callee args...)`.
    pub fn bad_args(&self, callee: &Value, args: &[Value]) -> Value {
        let redex = Value::apply(callee.clone(), args.iter().cloned());
        Value::array(vec![self.machine.canon.badargs.clone(), redex])
    }

    /// `System::unsupported "operation" value`.
    pub fn unsupported(&self, operation: &str, value: &Value) -> Value {
        Value::array(vec![
            self.machine.canon.unsupported.clone(),
            Value::text(operation),
            value.clone(),
        ])
    }

    /// Exception value for a host-side error.
    pub fn error_value(&self, err: &VmError) -> Value {
        match err {
            VmError::Unsupported { operation, value } => Value::array(vec![
                self.machine.canon.unsupported.clone(),
                Value::text(operation.as_str()),
                Value::text(value.as_str()),
            ]),
            other => self.bad(other.to_string()),
        }
    }
}
