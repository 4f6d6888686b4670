//! Shared, slot-mutable arrays.
//!
//! Arrays are the only composite value. Tuples, lists, applications and
//! thunks are all arrays distinguished by their head. Slots are nullable so
//! a continuation frame can hold the hole its result will be written into.
//!
//! Dropping the last handle to an array never recurses per element: nested
//! arrays that become unreachable are flattened onto a work list.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Value;

struct ArrayData {
    slots: RwLock<Vec<Option<Value>>>,
}

impl Drop for ArrayData {
    fn drop(&mut self) {
        let slots = std::mem::take(self.slots.get_mut().unwrap_or_else(PoisonError::into_inner));
        let mut pending: Vec<Value> = slots.into_iter().flatten().collect();

        while let Some(value) = pending.pop() {
            if let Value::Array(Array(inner)) = value {
                // Only the thread that drops the final strong reference gets
                // the data back; everyone else just decrements the count.
                if let Some(mut data) = Arc::into_inner(inner) {
                    let nested = std::mem::take(
                        data.slots.get_mut().unwrap_or_else(PoisonError::into_inner),
                    );
                    pending.extend(nested.into_iter().flatten());
                }
            }
        }
    }
}

/// Handle to a heap-allocated array of nullable slots.
///
/// Cloning the handle shares the array; `set` is visible through every
/// handle.
#[derive(Clone)]
pub struct Array(Arc<ArrayData>);

impl Array {
    pub fn new(slots: Vec<Option<Value>>) -> Self {
        Array(Arc::new(ArrayData {
            slots: RwLock::new(slots),
        }))
    }

    /// Array with every slot filled.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Array::new(values.into_iter().map(Some).collect())
    }

    /// Array of `len` empty slots.
    pub fn with_len(len: usize) -> Self {
        Array::new(vec![None; len])
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Option<Value>>> {
        self.0.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Option<Value>>> {
        self.0.slots.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Contents of slot `index`; `None` when the slot is empty or out of range.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.read().get(index).cloned().flatten()
    }

    /// Fill slot `index`. Writing past the end is a structural violation.
    pub fn set(&self, index: usize, value: Value) {
        let mut slots = self.write();
        match slots.get_mut(index) {
            Some(slot) => *slot = Some(value),
            None => crate::error::fatal(format_args!(
                "array write at index {} past length {}",
                index,
                slots.len()
            )),
        }
    }

    /// Copy of the current slots.
    pub fn snapshot(&self) -> Vec<Option<Value>> {
        self.read().clone()
    }

    /// Copy of the current slots, or `None` if any slot is still empty.
    pub fn values(&self) -> Option<Vec<Value>> {
        self.read().iter().cloned().collect()
    }

    /// Value of the head slot, if present.
    pub fn head(&self) -> Option<Value> {
        self.get(0)
    }

    pub fn ptr_eq(&self, other: &Array) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of handles sharing this array.
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}
