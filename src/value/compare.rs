//! Total order over all values.
//!
//! Values order first by tag, then by kind:
//! - numbers numerically (unordered floats fall back to `total_cmp`)
//! - text lexicographically by code point
//! - opaques by their own `compare` within one symbol, else by symbol id
//! - combinators by symbol id
//! - arrays by length first, then element by element
//!
//! Comparison is iterative so very deep arrays cannot exhaust the stack.
//! `PartialEq`, `Eq`, `PartialOrd` and `Ord` for `Value` are derived from
//! it, which makes `Value` usable as a `BTreeMap` key.

use std::cmp::Ordering;

use super::Value;

fn compare_float(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Compare two values; the order is total and antisymmetric.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    // Pending pairs are popped in lexicographic order: element pairs of an
    // array are pushed last-first.
    let mut pending: Vec<(Option<Value>, Option<Value>)> = vec![(Some(a.clone()), Some(b.clone()))];

    while let Some(pair) = pending.pop() {
        let (x, y) = match pair {
            (None, None) => continue,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => (x, y),
        };

        let ord = x.tag().cmp(&y.tag());
        if ord != Ordering::Equal {
            return ord;
        }

        let ord = match (&x, &y) {
            (Value::Integer(i), Value::Integer(j)) => i.cmp(j),
            (Value::Float(f), Value::Float(g)) => compare_float(*f, *g),
            (Value::Complex(r0, i0), Value::Complex(r1, i1)) => {
                compare_float(*r0, *r1).then_with(|| compare_float(*i0, *i1))
            }
            (Value::Char(c), Value::Char(d)) => c.cmp(d),
            (Value::Text(s), Value::Text(t)) => s.as_ref().cmp(t.as_ref()),
            (Value::Opaque(o), Value::Opaque(p)) => {
                let (s0, s1) = (o.symbol(), p.symbol());
                if s0 == s1 {
                    o.compare(p.as_ref())
                } else {
                    s0.cmp(&s1)
                }
            }
            (Value::Combinator(c), Value::Combinator(d)) => c.symbol().cmp(&d.symbol()),
            (Value::Array(a0), Value::Array(a1)) => {
                if a0.ptr_eq(a1) {
                    Ordering::Equal
                } else {
                    let (s0, s1) = (a0.snapshot(), a1.snapshot());
                    match s0.len().cmp(&s1.len()) {
                        Ordering::Equal => {
                            pending.extend(s0.into_iter().zip(s1).rev());
                            Ordering::Equal
                        }
                        ord => ord,
                    }
                }
            }
            _ => crate::error::fatal(format_args!(
                "compare on mismatched payloads for tag {}",
                x.tag()
            )),
        };

        if ord != Ordering::Equal {
            return ord;
        }
    }

    Ordering::Equal
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
