//! The reduction loop and the bootstrap frame.
//!
//! `reduce_with_handlers` wraps an expression as
//! `T = [R, 5, R, E, expr]` where `R = [., ., ., ., ret, .]` and
//! `E = [., ., ., ., exc]`. The result lands in `R[5]` and `R` is reduced
//! next, so `ret` sees it; a throw appends to a copy of `E`, so `exc` sees
//! the exception. The loop stops when a step returns no thunk.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::fatal;
use crate::value::{Array, Value};

use super::state::ReducerState;
use super::thunk::{self, ARGS};
use super::Vm;

/// How a top-level reduction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    Value(Value),
    Exception(Value),
    /// Stopped through the reducer state before finishing.
    Halted,
}

impl Reduction {
    pub fn is_value(&self) -> bool {
        matches!(self, Reduction::Value(_))
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, Reduction::Exception(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Reduction::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn exception(&self) -> Option<&Value> {
        match self {
            Reduction::Exception(e) => Some(e),
            _ => None,
        }
    }
}

impl Vm {
    /// Trampoline: step until unwound or halted. Returns whether the
    /// reduction ran to completion.
    pub fn run(&self, thunk: Array, state: &ReducerState) -> bool {
        let mut current = Some(thunk);
        let mut steps: u64 = 0;
        while let Some(thunk) = current {
            if state.is_halted() {
                log::debug!("halted after {} steps", steps);
                return false;
            }
            current = self.step(&thunk);
            steps += 1;
        }
        log::trace!("unwound after {} steps", steps);
        true
    }

    /// Reduce `expr`, delivering the result to `ret` and an uncaught
    /// exception to `exc`. Both receive their value as the single argument
    /// of a terminal frame; see [`Vm::sink`].
    pub fn reduce_with_handlers(
        &self,
        expr: &Value,
        ret: &Value,
        exc: &Value,
        state: &ReducerState,
    ) -> bool {
        let result = Array::new(vec![None, None, None, None, Some(ret.clone()), None]);
        let handler = Array::new(vec![None, None, None, None, Some(exc.clone())]);
        let bootstrap = thunk::build(
            Some(Value::Array(result.clone())),
            Some(Value::integer(ARGS as i64)),
            Some(Value::Array(result)),
            Some(Value::Array(handler)),
            expr.clone(),
            Vec::new(),
        );
        log::debug!("reduce {}", expr);
        self.run(bootstrap, state)
    }

    /// Reduce `expr` under a host-controlled state.
    pub fn reduce_with(&self, expr: &Value, state: &ReducerState) -> Reduction {
        let outcome: Arc<Mutex<Option<Reduction>>> = Arc::default();

        let store = |wrap: fn(Value) -> Reduction| {
            let outcome = outcome.clone();
            move |value: Value| {
                *outcome.lock().unwrap_or_else(PoisonError::into_inner) = Some(wrap(value));
            }
        };
        let ret = self.terminal(self.machine.result_symbol, store(Reduction::Value));
        let exc = self.terminal(self.machine.handler_symbol, store(Reduction::Exception));

        if !self.reduce_with_handlers(expr, &ret, &exc, state) {
            return Reduction::Halted;
        }
        let reduction = outcome
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match reduction {
            Some(reduction) => reduction,
            None => fatal(format_args!("reduction of {} unwound without a result", expr)),
        }
    }

    /// Reduce `expr` to a value or an uncaught exception.
    ///
    /// May be called from inside a builtin; the nested reduction has its
    /// own bootstrap frame and leaves the caller's thunk alone.
    pub fn reduce(&self, expr: &Value) -> Reduction {
        self.reduce_with(expr, &ReducerState::new())
    }
}
