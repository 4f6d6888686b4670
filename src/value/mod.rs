//! Runtime values.
//!
//! Every datum the machine touches is a [`Value`]: an inline literal or a
//! shared handle to text, a host object, a combinator or an array. Arrays
//! are the only composite; tuples, lists and thunks are all arrays with a
//! recognized head.

pub mod array;
pub mod combinator;
pub mod compare;
pub mod display;
pub mod list;
pub mod opaque;
pub mod repr;
pub mod types;

pub use array::Array;
pub use combinator::{
    Builtin, Bytecode, Combinator, CombinatorKind, NativeFn, Outcome, ReduceFn, Shape,
};
pub use compare::compare;
pub use opaque::Opaque;
pub use repr::Value;
pub use types::{Subtag, SymbolId, Tag};
