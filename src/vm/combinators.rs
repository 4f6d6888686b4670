//! Constructors for host-defined combinators.
//!
//! Each interns its name and returns an unbound combinator value; bind it
//! with `define` or export it from a module.

use std::sync::Arc;

use crate::error::fatal;
use crate::value::{
    Array, Builtin, Bytecode, Combinator, CombinatorKind, NativeFn, Outcome, Shape, Value,
};

use super::thunk::ARGS;
use super::Vm;

impl Vm {
    fn named(&self, name: &str, kind: CombinatorKind) -> Value {
        let symbol = self.enter_symbol(name);
        Value::combinator(Combinator::new(symbol, self.shared_symbol_name(symbol), kind))
    }

    /// A builtin with an explicit shape and raw argument slice.
    pub fn builtin(&self, name: &str, shape: Shape, doc: &str, func: NativeFn) -> Value {
        self.named(name, CombinatorKind::Builtin(Builtin::new(shape, func, doc)))
    }

    /// A data constructor: always succeeds, rebuilding its application.
    pub fn data(&self, name: &str) -> Value {
        self.named(name, CombinatorKind::Data)
    }

    pub fn medadic<F>(&self, name: &str, doc: &str, f: F) -> Value
    where
        F: Fn(&Vm) -> Outcome + Send + Sync + 'static,
    {
        let func: NativeFn = Arc::new(move |vm: &Vm, _: &[Value]| f(vm));
        self.builtin(name, Shape::Medadic, doc, func)
    }

    pub fn monadic<F>(&self, name: &str, doc: &str, f: F) -> Value
    where
        F: Fn(&Vm, &Value) -> Outcome + Send + Sync + 'static,
    {
        self.builtin(name, Shape::Monadic, doc, one(f))
    }

    pub fn dyadic<F>(&self, name: &str, doc: &str, f: F) -> Value
    where
        F: Fn(&Vm, &Value, &Value) -> Outcome + Send + Sync + 'static,
    {
        self.builtin(name, Shape::Dyadic, doc, two(f))
    }

    pub fn triadic<F>(&self, name: &str, doc: &str, f: F) -> Value
    where
        F: Fn(&Vm, &Value, &Value, &Value) -> Outcome + Send + Sync + 'static,
    {
        self.builtin(name, Shape::Triadic, doc, three(f))
    }

    pub fn variadic<F>(&self, name: &str, doc: &str, f: F) -> Value
    where
        F: Fn(&Vm, &[Value]) -> Outcome + Send + Sync + 'static,
    {
        self.builtin(name, Shape::Variadic, doc, Arc::new(f))
    }

    /// Like `monadic`, but the result is reduced further.
    pub fn unary<F>(&self, name: &str, doc: &str, f: F) -> Value
    where
        F: Fn(&Vm, &Value) -> Outcome + Send + Sync + 'static,
    {
        self.builtin(name, Shape::Unary, doc, one(f))
    }

    /// Like `dyadic`, but the result is reduced further.
    pub fn binary<F>(&self, name: &str, doc: &str, f: F) -> Value
    where
        F: Fn(&Vm, &Value, &Value) -> Outcome + Send + Sync + 'static,
    {
        self.builtin(name, Shape::Binary, doc, two(f))
    }

    /// Like `triadic`, but the result is reduced further.
    pub fn ternary<F>(&self, name: &str, doc: &str, f: F) -> Value
    where
        F: Fn(&Vm, &Value, &Value, &Value) -> Outcome + Send + Sync + 'static,
    {
        self.builtin(name, Shape::Ternary, doc, three(f))
    }

    /// A combinator that takes over the whole thunk.
    pub fn compiled<F>(&self, name: &str, f: F) -> Value
    where
        F: Fn(&Vm, &Array) -> Option<Array> + Send + Sync + 'static,
    {
        self.named(name, CombinatorKind::Compiled(Arc::new(f)))
    }

    /// A combinator reduced by the installed `CodeRunner`.
    pub fn bytecode(&self, name: &str, code: Bytecode) -> Value {
        self.named(name, CombinatorKind::Bytecode(code))
    }

    /// Terminal combinator: hands its single argument to `f` and ends the
    /// reduction.
    pub fn sink<F>(&self, name: &str, f: F) -> Value
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        let symbol = self.enter_symbol(name);
        self.terminal(symbol, f)
    }

    pub(crate) fn terminal<F>(&self, symbol: crate::value::SymbolId, f: F) -> Value
    where
        F: Fn(Value) + Send + Sync + 'static,
    {
        let name = self.shared_symbol_name(symbol);
        let label = name.clone();
        let reduce = move |_: &Vm, thunk: &Array| -> Option<Array> {
            match thunk.get(ARGS) {
                Some(value) => f(value),
                None => fatal(format_args!("{} reached without an argument", label)),
            }
            None
        };
        Value::combinator(Combinator::new(
            symbol,
            name,
            CombinatorKind::Compiled(Arc::new(reduce)),
        ))
    }

    /// Placeholder for a symbol without a definition. Reducing it is fatal.
    pub fn stub(&self, name: &str) -> Value {
        self.named(name, CombinatorKind::Stub)
    }
}

fn one<F>(f: F) -> NativeFn
where
    F: Fn(&Vm, &Value) -> Outcome + Send + Sync + 'static,
{
    Arc::new(move |vm: &Vm, args: &[Value]| match args {
        [a] => f(vm, a),
        _ => fatal(format_args!("expected 1 argument, got {}", args.len())),
    })
}

fn two<F>(f: F) -> NativeFn
where
    F: Fn(&Vm, &Value, &Value) -> Outcome + Send + Sync + 'static,
{
    Arc::new(move |vm: &Vm, args: &[Value]| match args {
        [a, b] => f(vm, a, b),
        _ => fatal(format_args!("expected 2 arguments, got {}", args.len())),
    })
}

fn three<F>(f: F) -> NativeFn
where
    F: Fn(&Vm, &Value, &Value, &Value) -> Outcome + Send + Sync + 'static,
{
    Arc::new(move |vm: &Vm, args: &[Value]| match args {
        [a, b, c] => f(vm, a, b, c),
        _ => fatal(format_args!("expected 3 arguments, got {}", args.len())),
    })
}
