//! Host-defined objects.
//!
//! Handles such as channels, dictionaries or regex patterns are not plain
//! literals. They enter the value graph as `Value::Opaque` and provide their
//! own identity through `symbol` and `compare`.
//!
//! Opaque objects can be reached from several reduction threads at once.
//! Anything mutable inside one must carry its own lock.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use super::types::{SymbolId, Subtag};

pub trait Opaque: Any + Send + Sync {
    /// Symbol naming the type of this object, e.g. `Dict::dictionary`.
    fn symbol(&self) -> SymbolId;

    /// Qualified name used when rendering.
    fn name(&self) -> &str;

    /// Order against another opaque object with the same symbol.
    ///
    /// Must be a total order that stays stable across calls; it is used as a
    /// map key comparator.
    fn compare(&self, other: &dyn Opaque) -> Ordering;

    fn subtag(&self) -> Subtag {
        Subtag::Host
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.name())
    }

    fn as_any(&self) -> &dyn Any;
}

impl fmt::Debug for dyn Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
