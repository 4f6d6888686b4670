//! Error handling.
//!
//! Three channels, never mixed:
//! - [`VmError`] for host-side failures (loading, binding, extraction);
//! - thrown `Value`s for catchable in-language exceptions;
//! - [`fatal`] for broken internal invariants, which abort via panic.

mod builders;
mod types;

use std::fmt::Display;

pub use types::{VmError, VmResult};

/// Abort on a violated internal invariant.
///
/// Logs at error level, then panics with the caller's location attached.
#[track_caller]
#[cold]
pub fn fatal(message: impl Display) -> ! {
    let location = std::panic::Location::caller();
    log::error!("internal error at {}: {}", location, message);
    panic!("internal error: {}", message)
}
