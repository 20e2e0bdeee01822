//! Finite automata over character alphabets.
//!
//! This module provides:
//! - An arena-backed automaton model with optional epsilon transitions
//! - Determinism checking
//! - Word acceptance by simulating all active states at once
//! - Subset construction (NFA to DFA conversion)
//! - A textual loader and PyO3 bindings for Python interoperability

mod acceptance;
mod error;
mod finite_automaton;
pub mod loader;
#[cfg(feature = "python")]
mod python_bindings;
mod state;
mod subset_construction;
mod symbol;
mod transition;

pub use acceptance::{Rejection, Verdict};
pub use error::{AutomatonError, Result};
pub use finite_automaton::Automaton;
#[cfg(feature = "python")]
pub use python_bindings::automaton;
pub use state::{State, StateId, StateSet};
pub use subset_construction::{Determinized, subset_construction};
pub use symbol::{EPSILON, Symbol, is_epsilon};
pub use transition::Transition;
