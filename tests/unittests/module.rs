// Module loading: imports, collisions, module combinators
use egel::value::Outcome;
use egel::{Module, Value, Vm, VmError};

use crate::common::{bare, reduce_value, setup};

struct Greeter;

impl Module for Greeter {
    fn name(&self) -> &str {
        "greeter"
    }

    fn docstring(&self) -> &str {
        "Says hello."
    }

    fn imports(&self) -> Vec<String> {
        vec!["system".to_string(), "System::+".to_string()]
    }

    fn exports(&self, vm: &Vm) -> Vec<Value> {
        vec![vm.monadic("Greeter::hello", "greet", |_, who| match who.as_text() {
            Some(name) => Outcome::Matched(Value::text(format!("hello {}", name))),
            None => Outcome::NoMatch,
        })]
    }
}

struct Clash;

impl Module for Clash {
    fn name(&self) -> &str {
        "clash"
    }

    fn exports(&self, vm: &Vm) -> Vec<Value> {
        vec![vm.data("Clash::fine"), vm.data("System::+")]
    }
}

#[test]
fn test_module_exports_are_callable() {
    let vm = setup();
    vm.load_module(Box::new(Greeter)).unwrap();
    let hello = vm.get_data_string("Greeter::hello");
    let expr = Value::apply(hello, [Value::text("world")]);
    assert_eq!(reduce_value(&vm, &expr), Value::text("hello world"));
}

#[test]
fn test_missing_import_is_reported() {
    let vm = bare();
    let err = vm.load_module(Box::new(Greeter)).unwrap_err();
    assert_eq!(
        err,
        VmError::UnresolvedImport {
            module: "greeter".to_string(),
            import: "system".to_string()
        }
    );
    assert!(vm.get_data_string("Greeter::hello").is_stub());
}

#[test]
fn test_collision_with_other_module_is_detected() {
    let vm = setup();
    let err = vm.load_module(Box::new(Clash)).unwrap_err();
    assert_eq!(
        err,
        VmError::SymbolCollision {
            name: "System::+".to_string(),
            module: "clash".to_string(),
            existing: "system".to_string()
        }
    );
    // nothing from the failed module was bound
    assert!(vm.get_data_string("Clash::fine").is_stub());
    assert!(vm.get_data_string("System::+").as_combinator().unwrap().builtin().is_some());
}

#[test]
fn test_module_queries() {
    let vm = setup();
    let greeter = vm.load_module(Box::new(Greeter)).unwrap();
    assert!(greeter.is_module());
    assert_eq!(greeter.to_string(), "Module::greeter");

    let query = |name: &str, arg: Value| {
        reduce_value(&vm, &Value::apply(vm.get_data_string(name), [arg]))
    };
    assert_eq!(
        query("System::query_module_name", greeter.clone()),
        Value::text("greeter")
    );
    assert_eq!(
        query("System::query_module_docstring", greeter.clone()),
        Value::text("Says hello.")
    );
    let imports = query("System::query_module_imports", greeter.clone());
    assert_eq!(
        vm.from_list(&imports),
        Some(vec![Value::text("system"), Value::text("System::+")])
    );
    let exports = query("System::query_module_exports", greeter.clone());
    assert_eq!(vm.from_list(&exports).map(|e| e.len()), Some(1));
    assert!(vm.is_true(&query("System::query_is_module", greeter)));

    let modules = reduce_value(&vm, &vm.get_data_string("System::query_modules"));
    let names: Vec<String> = vm
        .from_list(&modules)
        .unwrap()
        .iter()
        .map(|m| m.to_string())
        .collect();
    assert_eq!(names, vec!["Module::system", "Module::greeter"]);
}

#[test]
fn test_module_combinator_is_inert() {
    let vm = setup();
    let system = vm.find_module("system").unwrap();
    let expr = Value::apply(system.clone(), [Value::integer(1)]);
    assert_eq!(reduce_value(&vm, &expr), expr);
}

#[test]
fn test_import_searches_path() {
    let dir = std::env::temp_dir().join(format!("egel-import-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let vm = Vm::with_config(egel::Config::default().with_search_path([dir.clone()]));

    let candidates = vm.module_candidates("dict");
    assert_eq!(candidates[0], dir.join("dict"));
    assert!(candidates
        .iter()
        .any(|c| c.extension().map(|e| e == std::env::consts::DLL_EXTENSION) == Some(true)));

    // a file that is not a library is found but fails to load
    std::fs::write(dir.join("junk"), b"not a library").unwrap();
    assert!(matches!(
        vm.import("junk"),
        Err(VmError::LoadFailed { .. })
    ));
    assert!(matches!(
        vm.import("absent"),
        Err(VmError::ModuleNotFound { .. })
    ));
    std::fs::remove_dir_all(&dir).unwrap();
}
