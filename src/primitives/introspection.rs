//! Type predicates and module queries.

use std::sync::Arc;

use crate::module::LoadedModule;
use crate::primitives::def::CombinatorDef;
use crate::value::{Outcome, Shape, Value};
use crate::vm::Vm;

fn predicate(vm: &Vm, args: &[Value], test: fn(&Vm, &Value) -> bool) -> Outcome {
    match args {
        [v] => Outcome::Matched(vm.create_bool(test(vm, v))),
        _ => Outcome::NoMatch,
    }
}

pub fn prim_is_integer(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_integer())
}

pub fn prim_is_float(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_float())
}

pub fn prim_is_complex(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_complex())
}

pub fn prim_is_char(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_char())
}

pub fn prim_is_text(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_text())
}

pub fn prim_is_opaque(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_opaque())
}

pub fn prim_is_combinator(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_combinator())
}

pub fn prim_is_array(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_array())
}

pub fn prim_is_list(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, Vm::is_list)
}

pub fn prim_is_tuple(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, Vm::is_tuple)
}

pub fn prim_query_is_module(vm: &Vm, args: &[Value]) -> Outcome {
    predicate(vm, args, |_, v| v.is_module())
}

pub fn prim_query_modules(vm: &Vm, _: &[Value]) -> Outcome {
    Outcome::Matched(vm.to_list(vm.modules()))
}

/// Apply `query` to a module argument; anything else does not match.
fn with_module(args: &[Value], query: impl FnOnce(&Arc<LoadedModule>) -> Value) -> Outcome {
    match args {
        [v] => v
            .as_combinator()
            .and_then(|c| c.module())
            .map(query)
            .into(),
        _ => Outcome::NoMatch,
    }
}

pub fn prim_query_module_name(_: &Vm, args: &[Value]) -> Outcome {
    with_module(args, |m| Value::text(m.name()))
}

pub fn prim_query_module_docstring(_: &Vm, args: &[Value]) -> Outcome {
    with_module(args, |m| Value::text(m.docstring()))
}

pub fn prim_query_module_imports(vm: &Vm, args: &[Value]) -> Outcome {
    with_module(args, |m| {
        vm.to_list(m.imports().iter().map(|i| Value::text(i.as_str())).collect())
    })
}

pub fn prim_query_module_exports(vm: &Vm, args: &[Value]) -> Outcome {
    with_module(args, |m| vm.to_list(m.exports().to_vec()))
}

pub const PRIMITIVES: &[CombinatorDef] = &[
    CombinatorDef {
        name: "System::is_integer",
        shape: Shape::Monadic,
        func: prim_is_integer,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::is_float",
        shape: Shape::Monadic,
        func: prim_is_float,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::is_complex",
        shape: Shape::Monadic,
        func: prim_is_complex,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::is_char",
        shape: Shape::Monadic,
        func: prim_is_char,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::is_text",
        shape: Shape::Monadic,
        func: prim_is_text,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::is_opaque",
        shape: Shape::Monadic,
        func: prim_is_opaque,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::is_combinator",
        shape: Shape::Monadic,
        func: prim_is_combinator,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::is_array",
        shape: Shape::Monadic,
        func: prim_is_array,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::is_list",
        shape: Shape::Monadic,
        func: prim_is_list,
        doc: "Whether the argument is a proper list ending in nil.",
        params: &["x"],
    },
    CombinatorDef {
        name: "System::is_tuple",
        shape: Shape::Monadic,
        func: prim_is_tuple,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::query_modules",
        shape: Shape::Medadic,
        func: prim_query_modules,
        doc: "List of all loaded modules.",
        params: &[],
    },
    CombinatorDef {
        name: "System::query_is_module",
        shape: Shape::Monadic,
        func: prim_query_is_module,
        params: &["x"],
        ..CombinatorDef::DEFAULT
    },
    CombinatorDef {
        name: "System::query_module_name",
        shape: Shape::Monadic,
        func: prim_query_module_name,
        doc: "Name of a module.",
        params: &["m"],
    },
    CombinatorDef {
        name: "System::query_module_docstring",
        shape: Shape::Monadic,
        func: prim_query_module_docstring,
        doc: "Documentation of a module.",
        params: &["m"],
    },
    CombinatorDef {
        name: "System::query_module_imports",
        shape: Shape::Monadic,
        func: prim_query_module_imports,
        doc: "Imports of a module, as a list of texts.",
        params: &["m"],
    },
    CombinatorDef {
        name: "System::query_module_exports",
        shape: Shape::Monadic,
        func: prim_query_module_exports,
        doc: "Combinators exported by a module.",
        params: &["m"],
    },
];
