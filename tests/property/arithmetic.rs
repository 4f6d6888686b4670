// Property tests for the system arithmetic combinators.

use crate::common::{reduce_value, setup};
use egel::Value;
use proptest::prelude::*;

fn binary(vm: &egel::Vm, op: &str, a: Value, b: Value) -> Value {
    reduce_value(vm, &Value::apply(vm.get_data_string(op), [a, b]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn add_commutative(a in -10000i64..10000, b in -10000i64..10000) {
        let vm = setup();
        let r1 = binary(&vm, "System::+", Value::integer(a), Value::integer(b));
        let r2 = binary(&vm, "System::+", Value::integer(b), Value::integer(a));
        prop_assert_eq!(r1, r2, "addition not commutative for {} + {}", a, b);
    }

    #[test]
    fn mul_commutative(a in -1000i64..1000, b in -1000i64..1000) {
        let vm = setup();
        let r1 = binary(&vm, "System::*", Value::integer(a), Value::integer(b));
        prop_assert_eq!(r1, Value::integer(a * b));
    }

    #[test]
    fn division_identity(a in -100000i64..100000, b in 1i64..1000) {
        let vm = setup();
        let q = binary(&vm, "System::/", Value::integer(a), Value::integer(b));
        let r = binary(&vm, "System::%", Value::integer(a), Value::integer(b));
        let (q, r) = (q.as_integer().unwrap(), r.as_integer().unwrap());
        prop_assert_eq!(q * b + r, a);
    }

    #[test]
    fn text_concatenation(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let vm = setup();
        let joined = binary(&vm, "System::+", Value::text(a.as_str()), Value::text(b.as_str()));
        let expected = format!("{}{}", a, b);
        prop_assert_eq!(joined.as_text(), Some(expected.as_str()));
    }
}
