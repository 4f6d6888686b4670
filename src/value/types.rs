//! Core value types for the Egel runtime
//!
//! This module contains the discriminants used throughout the value system:
//! - `SymbolId` - Interned symbol identifier
//! - `Tag` - Primary discriminant of a `Value`
//! - `Subtag` - Origin of a combinator or opaque object

use std::fmt;

/// Symbol ID for interned qualified names.
///
/// Symbols are dense and never reused, so comparing two ids is the same as
/// comparing the names they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolId(pub u32);

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Primary discriminant of a runtime value.
///
/// The declaration order is the first key of the total order: every integer
/// sorts before every float, every float before every complex, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tag {
    Integer = 0,
    Float = 1,
    Complex = 2,
    Char = 3,
    Text = 4,
    Opaque = 5,
    Combinator = 6,
    Array = 7,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Integer => "integer",
            Tag::Float => "float",
            Tag::Complex => "complex",
            Tag::Char => "char",
            Tag::Text => "text",
            Tag::Opaque => "opaque",
            Tag::Combinator => "combinator",
            Tag::Array => "array",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Secondary discriminant for combinators and opaque objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtag {
    /// Data constructor; never fails, its arity is the application depth.
    Data,
    /// Host primitive with a fixed shape.
    Builtin,
    /// Code interpreted by an installed `CodeRunner`.
    Bytecode,
    /// Host code operating on whole thunks.
    Compiled,
    /// Wrapper around a loaded module.
    Module,
    /// Placeholder for a symbol that was never defined.
    Stub,
    /// Host-defined opaque object.
    Host,
}
