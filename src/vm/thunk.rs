//! Thunk layout and frame rewriting.
//!
//! A thunk is an array
//! `[result, index, continuation, handler, callee, args...]`:
//! the callee's value goes to `result[index]`, after which `continuation`
//! is reduced next. A thrown value is appended to a copy of `handler`
//! instead, and that copy is reduced next.

use smallvec::SmallVec;

use crate::error::fatal;
use crate::value::{Array, Value};

pub const RESULT: usize = 0;
pub const RESULT_INDEX: usize = 1;
pub const CONTINUATION: usize = 2;
pub const HANDLER: usize = 3;
pub const CALLEE: usize = 4;
pub const ARGS: usize = 5;

/// Arguments of a single step; most calls take few.
pub type Args = SmallVec<[Value; 4]>;

/// A decoded thunk.
pub struct Frame {
    pub result: Option<Value>,
    pub index: Option<Value>,
    pub continuation: Option<Value>,
    pub handler: Option<Value>,
    pub callee: Value,
    pub args: Args,
}

/// Build a thunk from its frame header, a callee and arguments.
pub fn build(
    result: Option<Value>,
    index: Option<Value>,
    continuation: Option<Value>,
    handler: Option<Value>,
    callee: Value,
    args: impl IntoIterator<Item = Value>,
) -> Array {
    let mut slots = vec![result, index, continuation, handler, Some(callee)];
    slots.extend(args.into_iter().map(Some));
    Array::new(slots)
}

impl Frame {
    /// Split a thunk into its parts. A thunk shorter than the header, or
    /// with an empty callee or argument slot, is a broken invariant.
    pub fn decode(thunk: &Array) -> Frame {
        let mut slots = thunk.snapshot().into_iter();
        if thunk.len() < ARGS {
            fatal(format_args!(
                "malformed thunk: {} slots, need at least {}",
                thunk.len(),
                ARGS
            ));
        }
        let result = slots.next().flatten();
        let index = slots.next().flatten();
        let continuation = slots.next().flatten();
        let handler = slots.next().flatten();
        let callee = match slots.next().flatten() {
            Some(callee) => callee,
            None => fatal("malformed thunk: empty callee slot"),
        };
        let args = slots
            .enumerate()
            .map(|(i, slot)| match slot {
                Some(arg) => arg,
                None => fatal(format_args!("malformed thunk: empty argument {}", i)),
            })
            .collect();
        Frame {
            result,
            index,
            continuation,
            handler,
            callee,
            args,
        }
    }

    /// The callee applied to all arguments, as a value.
    pub fn redex(&self) -> Value {
        Value::apply(self.callee.clone(), self.args.iter().cloned())
    }

    /// Store `value` in the result slot and continue with the continuation.
    pub fn deposit(&self, value: Value) -> Option<Array> {
        let target = match &self.result {
            Some(Value::Array(target)) => target,
            Some(other) => fatal(format_args!("thunk result slot holds {}", other.type_name())),
            None => fatal("thunk has no result slot"),
        };
        let index = match self.index.as_ref().and_then(Value::as_integer) {
            Some(i) if i >= 0 => i as usize,
            _ => fatal("thunk result index is not a non-negative integer"),
        };
        target.set(index, value);
        match &self.continuation {
            Some(Value::Array(next)) => Some(next.clone()),
            Some(other) => fatal(format_args!("thunk continuation is {}", other.type_name())),
            None => None,
        }
    }

    /// Reduce `callee args` next, delivering to this frame's result slot.
    pub fn rethread(&self, callee: Value, args: impl IntoIterator<Item = Value>) -> Array {
        build(
            self.result.clone(),
            self.index.clone(),
            self.continuation.clone(),
            self.handler.clone(),
            callee,
            args,
        )
    }

    /// Route a thrown value to the exception handler frame.
    ///
    /// The handler frame is copied with `exception` appended; its own header
    /// is kept as it was.
    pub fn raise(&self, exception: Value) -> Option<Array> {
        match &self.handler {
            Some(Value::Array(handler)) => {
                let mut slots = handler.snapshot();
                slots.push(Some(exception));
                Some(Array::new(slots))
            }
            Some(other) => fatal(format_args!("thunk handler is {}", other.type_name())),
            None => fatal(format_args!("uncaught exception {} with no handler", exception)),
        }
    }
}

/// Flatten an application callee into the thunk: the callee's own elements
/// come first, then the thunk's arguments.
pub fn splice(frame: &Frame, callee: &Array) -> Array {
    let mut parts = callee.snapshot().into_iter().map(|slot| match slot {
        Some(v) => v,
        None => fatal("cannot apply an array with empty slots"),
    });
    let head = match parts.next() {
        Some(head) => head,
        None => fatal("cannot apply an empty array"),
    };
    frame.rethread(head, parts.chain(frame.args.iter().cloned()))
}
