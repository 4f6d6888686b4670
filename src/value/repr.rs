//! The universal runtime cell.
//!
//! Literals are stored inline; text, opaque objects, combinators and arrays
//! are shared behind atomically counted handles so a value can be referenced
//! from several arrays and reduction threads at once.

use std::sync::Arc;

use crate::error::{VmError, VmResult};
use crate::symbol::{SYMBOL_CHAR, SYMBOL_COMPLEX, SYMBOL_FLOAT, SYMBOL_INT, SYMBOL_TEXT};

use super::array::Array;
use super::combinator::{Combinator, CombinatorKind};
use super::opaque::Opaque;
use super::types::{SymbolId, Subtag, Tag};

#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Complex(f64, f64),
    Char(char),
    Text(Arc<str>),
    Opaque(Arc<dyn Opaque>),
    Combinator(Arc<Combinator>),
    Array(Array),
}

impl Value {
    // =========================================================================
    // Constructors
    // =========================================================================

    pub fn integer(i: i64) -> Value {
        Value::Integer(i)
    }

    pub fn float(f: f64) -> Value {
        Value::Float(f)
    }

    pub fn complex(re: f64, im: f64) -> Value {
        Value::Complex(re, im)
    }

    pub fn char(c: char) -> Value {
        Value::Char(c)
    }

    pub fn text(s: impl Into<Arc<str>>) -> Value {
        Value::Text(s.into())
    }

    pub fn opaque<T: Opaque>(object: T) -> Value {
        Value::Opaque(Arc::new(object))
    }

    pub fn combinator(c: Combinator) -> Value {
        Value::Combinator(Arc::new(c))
    }

    /// Array of the given values. A single value is returned as itself,
    /// never wrapped.
    pub fn array(mut values: Vec<Value>) -> Value {
        if values.len() == 1 {
            if let Some(only) = values.pop() {
                return only;
            }
        }
        Value::Array(Array::from_values(values))
    }

    /// Application of `head` to `args`; just `head` when there are none.
    pub fn apply(head: Value, args: impl IntoIterator<Item = Value>) -> Value {
        let mut values = vec![head];
        values.extend(args);
        Value::array(values)
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn tag(&self) -> Tag {
        match self {
            Value::Integer(_) => Tag::Integer,
            Value::Float(_) => Tag::Float,
            Value::Complex(..) => Tag::Complex,
            Value::Char(_) => Tag::Char,
            Value::Text(_) => Tag::Text,
            Value::Opaque(_) => Tag::Opaque,
            Value::Combinator(_) => Tag::Combinator,
            Value::Array(_) => Tag::Array,
        }
    }

    pub fn subtag(&self) -> Option<Subtag> {
        match self {
            Value::Opaque(o) => Some(o.subtag()),
            Value::Combinator(c) => Some(c.subtag()),
            _ => None,
        }
    }

    /// Symbol identifying this value: the type symbol for literals, the own
    /// symbol for combinators and opaques, and the head's for arrays.
    pub fn symbol(&self) -> Option<SymbolId> {
        match self {
            Value::Integer(_) => Some(SYMBOL_INT),
            Value::Float(_) => Some(SYMBOL_FLOAT),
            Value::Complex(..) => Some(SYMBOL_COMPLEX),
            Value::Char(_) => Some(SYMBOL_CHAR),
            Value::Text(_) => Some(SYMBOL_TEXT),
            Value::Opaque(o) => Some(o.symbol()),
            Value::Combinator(c) => Some(c.symbol()),
            Value::Array(a) => a.head().and_then(|h| h.symbol()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.tag().name()
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Value::Complex(..))
    }

    pub fn is_char(&self) -> bool {
        matches!(self, Value::Char(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn is_literal(&self) -> bool {
        self.tag() <= Tag::Text
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self, Value::Opaque(_))
    }

    pub fn is_combinator(&self) -> bool {
        matches!(self, Value::Combinator(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_data(&self) -> bool {
        self.subtag() == Some(Subtag::Data)
    }

    pub fn is_stub(&self) -> bool {
        self.subtag() == Some(Subtag::Stub)
    }

    pub fn is_module(&self) -> bool {
        self.subtag() == Some(Subtag::Module)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<(f64, f64)> {
        match self {
            Value::Complex(re, im) => Some((*re, *im)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Arc<dyn Opaque>> {
        match self {
            Value::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// Borrow the host object if this is an opaque of type `T`.
    pub fn downcast<T: Opaque>(&self) -> Option<&T> {
        self.as_opaque()?.as_any().downcast_ref::<T>()
    }

    pub fn as_combinator(&self) -> Option<&Arc<Combinator>> {
        match self {
            Value::Combinator(c) => Some(c),
            _ => None,
        }
    }

    pub fn combinator_kind(&self) -> Option<&CombinatorKind> {
        self.as_combinator().map(|c| c.kind())
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    fn mismatch(&self, expected: Tag) -> VmError {
        VmError::TypeMismatch {
            expected: expected.name(),
            got: self.type_name(),
        }
    }

    pub fn get_integer(&self) -> VmResult<i64> {
        self.as_integer().ok_or_else(|| self.mismatch(Tag::Integer))
    }

    pub fn get_float(&self) -> VmResult<f64> {
        self.as_float().ok_or_else(|| self.mismatch(Tag::Float))
    }

    pub fn get_complex(&self) -> VmResult<(f64, f64)> {
        self.as_complex().ok_or_else(|| self.mismatch(Tag::Complex))
    }

    pub fn get_char(&self) -> VmResult<char> {
        self.as_char().ok_or_else(|| self.mismatch(Tag::Char))
    }

    pub fn get_text(&self) -> VmResult<&str> {
        self.as_text().ok_or_else(|| self.mismatch(Tag::Text))
    }

    pub fn get_array(&self) -> VmResult<&Array> {
        self.as_array().ok_or_else(|| self.mismatch(Tag::Array))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}
