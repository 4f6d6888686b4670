//! The reduction machine.
//!
//! A [`Vm`] owns the symbol table, global bindings, loaded modules and
//! configuration. Reduction rewrites array-encoded thunks one step at a
//! time (see [`thunk`]) until the bootstrap frame's terminal handler is
//! reached.

mod combinators;
mod core;
pub mod dispatch;
mod literals;
pub mod reduce;
pub mod state;
pub mod thunk;

pub use self::core::{CodeRunner, Vm};
pub use reduce::Reduction;
pub use state::{ReducerState, State};
