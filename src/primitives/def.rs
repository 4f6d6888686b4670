//! Combinator definitions for declarative registration.
//!
//! Each primitive module exports a `const PRIMITIVES: &[CombinatorDef]`
//! table; the system module turns every entry into a builtin.

use crate::value::{Outcome, Shape, Value};
use crate::vm::Vm;

/// Implementation of a table-defined builtin. Receives exactly as many
/// arguments as the shape takes (all of them for variadics).
pub type PrimitiveFn = fn(&Vm, &[Value]) -> Outcome;

pub struct CombinatorDef {
    /// Qualified name, e.g. `System::+`.
    pub name: &'static str,
    pub shape: Shape,
    pub func: PrimitiveFn,
    /// One-line description.
    pub doc: &'static str,
    /// Parameter names, for documentation.
    pub params: &'static [&'static str],
}

impl CombinatorDef {
    /// Base for struct-update syntax. Its `func` never matches.
    pub const DEFAULT: CombinatorDef = CombinatorDef {
        name: "",
        shape: Shape::Variadic,
        func: no_match,
        doc: "",
        params: &[],
    };

    /// Signature line such as `System::+ x y`.
    pub fn signature(&self) -> String {
        let mut signature = self.name.to_string();
        for param in self.params {
            signature.push(' ');
            signature.push_str(param);
        }
        signature
    }
}

fn no_match(_: &Vm, _: &[Value]) -> Outcome {
    Outcome::NoMatch
}
