//! Error types for automaton construction.

use thiserror::Error;

/// Errors raised while building an [`Automaton`](crate::automaton::Automaton).
///
/// Rejecting a word is not an error; see
/// [`Verdict`](crate::automaton::Verdict) for that.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// A transition endpoint names a state that was never added.
    ///
    /// States must be added before any transition that references them.
    #[error("state `{0}` does not exist in the automaton")]
    UnknownState(String),

    /// A state with this name already exists.
    #[error("state `{0}` already exists in the automaton")]
    DuplicateState(String),

    /// A second state was flagged initial.
    ///
    /// The automaton keeps its existing initial state and the new state is
    /// not added.
    #[error("cannot add initial state `{rejected}`: `{existing}` is already the initial state")]
    DuplicateInitialState { existing: String, rejected: String },
}

/// A specialized `Result` type for automaton construction.
pub type Result<T> = std::result::Result<T, AutomatonError>;
