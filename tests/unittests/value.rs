// Value model: tags, singleton collapse, extraction, opaque objects
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use egel::value::{compare, Subtag, Tag};
use egel::{Array, Opaque, SymbolId, Value, VmError};

use crate::common::bare;

struct Handle {
    symbol: SymbolId,
    id: u64,
}

impl Opaque for Handle {
    fn symbol(&self) -> SymbolId {
        self.symbol
    }

    fn name(&self) -> &str {
        "Test::handle"
    }

    fn compare(&self, other: &dyn Opaque) -> Ordering {
        match other.as_any().downcast_ref::<Handle>() {
            Some(other) => self.id.cmp(&other.id),
            None => Ordering::Less,
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<handle {}>", self.id)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn test_singleton_collapse() {
    for v in [
        Value::integer(1),
        Value::text("x"),
        Value::array(vec![Value::integer(1), Value::integer(2)]),
    ] {
        let wrapped = Value::array(vec![v.clone()]);
        assert_eq!(wrapped.tag(), v.tag());
        assert_eq!(wrapped, v);
    }
}

#[test]
fn test_tags_and_subtags() {
    let vm = bare();
    assert_eq!(Value::integer(1).tag(), Tag::Integer);
    assert_eq!(Value::complex(1.0, 0.0).tag(), Tag::Complex);
    assert_eq!(Value::array(vec![]).tag(), Tag::Array);
    assert_eq!(Value::integer(1).subtag(), None);
    assert_eq!(vm.data("Main::d").subtag(), Some(Subtag::Data));
    let handle = Value::opaque(Handle {
        symbol: vm.enter_symbol("Test::handle"),
        id: 1,
    });
    assert_eq!(handle.subtag(), Some(Subtag::Host));
}

#[test]
fn test_extraction_is_checked() {
    assert_eq!(Value::integer(5).get_integer(), Ok(5));
    assert_eq!(Value::text("hi").get_text(), Ok("hi"));
    assert_eq!(
        Value::float(1.0).get_char(),
        Err(VmError::TypeMismatch {
            expected: "char",
            got: "float"
        })
    );
    assert!(Value::integer(1).as_array().is_none());
}

#[test]
fn test_opaque_identity_and_order() {
    let vm = bare();
    let symbol = vm.enter_symbol("Test::handle");
    let a = Value::opaque(Handle { symbol, id: 1 });
    let b = Value::opaque(Handle { symbol, id: 2 });
    let a_again = Value::opaque(Handle { symbol, id: 1 });

    assert_eq!(compare(&a, &b), Ordering::Less);
    assert_eq!(a, a_again);
    assert_eq!(a.downcast::<Handle>().map(|h| h.id), Some(1));
    assert_eq!(a.to_string(), "<handle 1>");

    // different opaque types order by symbol
    let other = Value::opaque(Handle {
        symbol: vm.enter_symbol("Test::other"),
        id: 0,
    });
    assert_eq!(compare(&a, &other), Ordering::Less);
}

#[test]
fn test_array_slots_are_mutable_in_place() {
    let array = Array::with_len(3);
    let value = Value::Array(array.clone());
    array.set(0, Value::integer(1));
    assert_eq!(value.as_array().and_then(|a| a.get(0)), Some(Value::integer(1)));
    assert_eq!(value.to_string(), "(1 . .)");
}

#[test]
fn test_values_cross_threads() {
    let shared = Value::array(vec![Value::text("a"), Value::integer(1)]);
    let copies: Vec<Value> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| shared.clone())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(copies.iter().all(|c| *c == shared));
    drop(copies);
    assert_eq!(shared.as_array().unwrap().share_count(), 1);
}
