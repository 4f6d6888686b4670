//! Builtin combinators of the `System` namespace.

pub mod arithmetic;
pub mod comparison;
pub mod concurrency;
pub mod control;
pub mod def;
pub mod introspection;
pub mod registration;

pub use def::CombinatorDef;
pub use registration::{definitions, register_primitives, SystemModule};
