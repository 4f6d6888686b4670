//! One reduction step.
//!
//! The callee decides what happens to a thunk:
//! - an application is spliced so its head becomes the callee;
//! - literals, opaques, data constructors and modules are values already,
//!   so the redex itself is deposited;
//! - compiled and bytecode combinators take over the whole thunk;
//! - builtins follow the shared protocol in [`Vm::apply_builtin`];
//! - a stub is an unresolved reference and aborts.

use crate::error::fatal;
use crate::value::{Array, Builtin, CombinatorKind, Outcome, Value};

use super::thunk::{splice, Frame, CALLEE};
use super::Vm;

impl Vm {
    /// Reduce one step; `None` once the reduction has unwound.
    pub fn step(&self, thunk: &Array) -> Option<Array> {
        let callee = match thunk.get(CALLEE) {
            Some(callee) => callee,
            None => fatal(format_args!(
                "malformed thunk: no callee in {} slots",
                thunk.len()
            )),
        };
        log::trace!("step {}", callee);

        if let Value::Combinator(c) = &callee {
            match c.kind() {
                CombinatorKind::Compiled(reduce) => return reduce(self, thunk),
                CombinatorKind::Bytecode(code) => {
                    return match self.code_runner() {
                        Some(runner) => runner.reduce(self, c, code, thunk),
                        None => fatal(format_args!(
                            "bytecode combinator {} reduced with no code runner installed",
                            c.name()
                        )),
                    };
                }
                CombinatorKind::Stub => {
                    fatal(format_args!("reduced undefined symbol {}", c.name()))
                }
                _ => {}
            }
        }

        let frame = Frame::decode(thunk);
        match &frame.callee {
            Value::Array(head) => Some(splice(&frame, head)),
            Value::Combinator(c) => match c.kind() {
                CombinatorKind::Builtin(builtin) => self.apply_builtin(&frame, builtin),
                _ => frame.deposit(frame.redex()),
            },
            _ => frame.deposit(frame.redex()),
        }
    }

    /// Builtin calling protocol, shared by every shape.
    ///
    /// With fewer arguments than the arity the redex is deposited unchanged.
    /// Otherwise `apply` sees exactly the first `arity` arguments and:
    /// - on a match without leftovers, a non-continuing shape deposits the
    ///   result; leftovers or a continuing shape reduce `result leftovers...`
    ///   next under the same frame;
    /// - on no match the full redex is deposited;
    /// - a thrown value goes to the handler frame.
    pub(crate) fn apply_builtin(&self, frame: &Frame, builtin: &Builtin) -> Option<Array> {
        let shape = builtin.shape();
        let arity = shape.arity().unwrap_or(frame.args.len());
        if frame.args.len() < arity {
            return frame.deposit(frame.redex());
        }

        let (taken, spurious) = frame.args.split_at(arity);
        match builtin.apply(self, taken) {
            Outcome::Matched(result) => {
                if spurious.is_empty() && !shape.continues() {
                    frame.deposit(result)
                } else {
                    Some(frame.rethread(result, spurious.iter().cloned()))
                }
            }
            Outcome::NoMatch => frame.deposit(frame.redex()),
            Outcome::Threw(exception) => {
                log::debug!("{} threw {}", frame.callee, exception);
                frame.raise(exception)
            }
        }
    }
}
