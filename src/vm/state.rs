//! Cooperative run state shared between a reduction loop and its host.

use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum State {
    Running = 0,
    /// Blocked inside a host primitive.
    Sleeping = 1,
    /// Terminal; observed at the top of the next reduction step.
    Halted = 2,
}

impl State {
    fn from_u8(raw: u8) -> State {
        match raw {
            0 => State::Running,
            1 => State::Sleeping,
            _ => State::Halted,
        }
    }
}

/// State flag a host thread can flip to stop a reduction.
///
/// Halting is cooperative: a primitive already running is not interrupted.
#[derive(Debug)]
pub struct ReducerState(AtomicU8);

impl ReducerState {
    pub fn new() -> Self {
        ReducerState(AtomicU8::new(State::Running as u8))
    }

    pub fn get(&self) -> State {
        State::from_u8(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, state: State) {
        self.0.store(state as u8, Ordering::Release);
    }

    pub fn halt(&self) {
        self.set(State::Halted);
    }

    pub fn is_halted(&self) -> bool {
        self.get() == State::Halted
    }

    /// Run a blocking host operation marked as `Sleeping`.
    ///
    /// Returns to `Running` afterwards unless the state was halted meanwhile.
    pub fn sleeping<T>(&self, f: impl FnOnce() -> T) -> T {
        let _ = self.0.compare_exchange(
            State::Running as u8,
            State::Sleeping as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        let out = f();
        let _ = self.0.compare_exchange(
            State::Sleeping as u8,
            State::Running as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        out
    }
}

impl Default for ReducerState {
    fn default() -> Self {
        Self::new()
    }
}
