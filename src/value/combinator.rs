//! Combinators: named callables.
//!
//! A combinator is a symbol plus a closed set of behaviours. Data
//! constructors never fail and simply rebuild their application. Builtins
//! have a fixed `Shape` and implement only `apply`; the reduction engine
//! handles saturation, spurious arguments, no-match and exceptions for all
//! of them uniformly.

use std::fmt;
use std::sync::Arc;

use crate::module::LoadedModule;
use crate::vm::Vm;

use super::array::Array;
use super::types::{SymbolId, Subtag};
use super::Value;

/// Result of applying a builtin to its arguments.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The arguments matched; this is the result.
    Matched(Value),
    /// The arguments have the wrong shape; the redex is left as it was.
    NoMatch,
    /// A catchable exception, routed to the thunk's exception handler.
    Threw(Value),
}

impl Outcome {
    pub fn is_match(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }
}

impl From<Option<Value>> for Outcome {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(v) => Outcome::Matched(v),
            None => Outcome::NoMatch,
        }
    }
}

impl From<Result<Value, Value>> for Outcome {
    fn from(value: Result<Value, Value>) -> Self {
        match value {
            Ok(v) => Outcome::Matched(v),
            Err(e) => Outcome::Threw(e),
        }
    }
}

/// Builtin implementation. The slice holds exactly as many arguments as
/// the builtin's shape takes (all of them for variadics).
pub type NativeFn = Arc<dyn Fn(&Vm, &[Value]) -> Outcome + Send + Sync>;

/// Thunk-level implementation: receives the whole thunk and returns the next
/// one, or `None` once a terminal handler has consumed its argument.
pub type ReduceFn = Arc<dyn Fn(&Vm, &Array) -> Option<Array> + Send + Sync>;

/// Arity and continuation behaviour of a builtin.
///
/// The non-continuing shapes write their result straight into the caller's
/// result slot. `Unary`, `Binary` and `Ternary` instead hand their result
/// back to the engine for further reduction under the caller's
/// continuation, so a builtin can return an expression without forcing it
/// on the host stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Medadic,
    Monadic,
    Dyadic,
    Triadic,
    Variadic,
    Unary,
    Binary,
    Ternary,
}

impl Shape {
    /// Number of arguments consumed, `None` for variadics.
    pub fn arity(self) -> Option<usize> {
        match self {
            Shape::Medadic => Some(0),
            Shape::Monadic | Shape::Unary => Some(1),
            Shape::Dyadic | Shape::Binary => Some(2),
            Shape::Triadic | Shape::Ternary => Some(3),
            Shape::Variadic => None,
        }
    }

    /// Whether a successful result is reduced further.
    pub fn continues(self) -> bool {
        matches!(self, Shape::Unary | Shape::Binary | Shape::Ternary)
    }
}

pub struct Builtin {
    shape: Shape,
    func: NativeFn,
    doc: Arc<str>,
}

impl Builtin {
    pub fn new(shape: Shape, func: NativeFn, doc: impl Into<Arc<str>>) -> Self {
        Builtin {
            shape,
            func,
            doc: doc.into(),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn apply(&self, vm: &Vm, args: &[Value]) -> Outcome {
        debug_assert!(self.shape.arity().map_or(true, |n| n == args.len()));
        (self.func)(vm, args)
    }
}

/// Compiled code awaiting a `CodeRunner`.
#[derive(Clone)]
pub struct Bytecode {
    code: Arc<[u8]>,
    constants: Arc<[Value]>,
}

impl Bytecode {
    pub fn new(code: impl Into<Arc<[u8]>>, constants: impl Into<Arc<[Value]>>) -> Self {
        Bytecode {
            code: code.into(),
            constants: constants.into(),
        }
    }

    pub fn code(&self) -> &[u8] {
        &self.code
    }

    pub fn constants(&self) -> &[Value] {
        &self.constants
    }
}

pub enum CombinatorKind {
    Data,
    Builtin(Builtin),
    Bytecode(Bytecode),
    Compiled(ReduceFn),
    Module(Arc<LoadedModule>),
    Stub,
}

pub struct Combinator {
    symbol: SymbolId,
    name: Arc<str>,
    kind: CombinatorKind,
}

impl Combinator {
    pub fn new(symbol: SymbolId, name: impl Into<Arc<str>>, kind: CombinatorKind) -> Self {
        Combinator {
            symbol,
            name: name.into(),
            kind,
        }
    }

    pub fn symbol(&self) -> SymbolId {
        self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &CombinatorKind {
        &self.kind
    }

    pub fn subtag(&self) -> Subtag {
        match self.kind {
            CombinatorKind::Data => Subtag::Data,
            CombinatorKind::Builtin(_) => Subtag::Builtin,
            CombinatorKind::Bytecode(_) => Subtag::Bytecode,
            CombinatorKind::Compiled(_) => Subtag::Compiled,
            CombinatorKind::Module(_) => Subtag::Module,
            CombinatorKind::Stub => Subtag::Stub,
        }
    }

    pub fn is_data(&self) -> bool {
        matches!(self.kind, CombinatorKind::Data)
    }

    pub fn is_stub(&self) -> bool {
        matches!(self.kind, CombinatorKind::Stub)
    }

    pub fn builtin(&self) -> Option<&Builtin> {
        match &self.kind {
            CombinatorKind::Builtin(b) => Some(b),
            _ => None,
        }
    }

    pub fn module(&self) -> Option<&Arc<LoadedModule>> {
        match &self.kind {
            CombinatorKind::Module(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Debug for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combinator")
            .field("symbol", &self.symbol)
            .field("name", &self.name)
            .field("subtag", &self.subtag())
            .finish()
    }
}
