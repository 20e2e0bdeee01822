//! Transition edges.

use crate::automaton::state::StateId;
use crate::automaton::symbol::Symbol;

/// A labeled edge `origin --symbol--> destination`.
///
/// Equality and hashing are structural, so inserting the same edge twice
/// leaves a single entry in the automaton's transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    origin: StateId,
    symbol: Symbol,
    destination: StateId,
}

impl Transition {
    pub fn new(origin: StateId, symbol: Symbol, destination: StateId) -> Self {
        Self {
            origin,
            symbol,
            destination,
        }
    }

    pub fn origin(&self) -> StateId {
        self.origin
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn destination(&self) -> StateId {
        self.destination
    }
}
