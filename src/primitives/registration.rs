//! The `system` module: every primitive table as one internal module.

use std::sync::Arc;

use crate::error::VmResult;
use crate::module::Module;
use crate::value::Value;
use crate::vm::Vm;

use super::def::CombinatorDef;
use super::{arithmetic, comparison, concurrency, control, introspection};

/// All primitive tables; the single place that enumerates them.
pub(crate) const ALL_TABLES: &[&[CombinatorDef]] = &[
    arithmetic::PRIMITIVES,
    comparison::PRIMITIVES,
    concurrency::PRIMITIVES,
    control::PRIMITIVES,
    introspection::PRIMITIVES,
];

pub struct SystemModule;

impl Module for SystemModule {
    fn name(&self) -> &str {
        "system"
    }

    fn docstring(&self) -> &str {
        "Core combinators: arithmetic, comparison, introspection, control and parallelism."
    }

    fn exports(&self, vm: &Vm) -> Vec<Value> {
        ALL_TABLES
            .iter()
            .flat_map(|table| table.iter())
            .map(|def| vm.builtin(def.name, def.shape, def.doc, Arc::new(def.func)))
            .collect()
    }
}

/// Every table definition, for documentation lookups.
pub fn definitions() -> impl Iterator<Item = &'static CombinatorDef> {
    ALL_TABLES.iter().flat_map(|table| table.iter())
}

/// Load the `system` module into `vm`, returning its module combinator.
pub fn register_primitives(vm: &Vm) -> VmResult<Value> {
    let module = vm.load_module(Box::new(SystemModule))?;
    log::debug!("registered {} system combinators", definitions().count());
    Ok(module)
}
