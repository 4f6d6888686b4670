//! # Egel - an embeddable graph-reduction machine
//!
//! Egel reduces combinator applications encoded as arrays. A program is a
//! graph of [`Value`]s; reduction rewrites "thunks" (application frames
//! carrying a result slot, a continuation and an exception handler) one
//! step at a time, without growing the host stack.
//!
//! ## Quick Start
//!
//! ```
//! use egel::{register_primitives, Reduction, Value, Vm};
//!
//! let vm = Vm::new();
//! register_primitives(&vm).unwrap();
//!
//! let add = vm.get_data_string("System::+");
//! let expr = Value::apply(add, [Value::integer(3), Value::integer(4)]);
//! assert_eq!(vm.reduce(&expr), Reduction::Value(Value::integer(7)));
//! ```
//!
//! ## Architecture
//!
//! 1. **Values** - literals, opaque host objects, combinators and arrays
//! 2. **Symbols and data** - interned names and their global bindings
//! 3. **Reduction** - the thunk protocol, dispatch and the trampoline
//! 4. **Modules** - internal and dynamically loaded units of combinators

pub mod config;
pub mod data;
pub mod error;
pub mod module;
pub mod plugin;
pub mod primitives;
pub mod symbol;
pub mod value;
pub mod vm;

pub use config::Config;
pub use error::{VmError, VmResult};
pub use module::{LoadedModule, Module};
pub use primitives::register_primitives;
pub use symbol::SymbolTable;
pub use value::{Array, Combinator, Opaque, Outcome, Shape, SymbolId, Value};
pub use vm::{CodeRunner, ReducerState, Reduction, Vm};
