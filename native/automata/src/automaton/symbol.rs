//! Symbol types for automata transitions.

use std::fmt;

/// A transition label: either a single alphabet character or the epsilon
/// marker.
///
/// Epsilon is its own variant rather than a reserved character, so every
/// `char` (including `'e'`) stays available as an ordinary input symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A symbol of the input alphabet.
    Char(char),
    /// An empty (silent) move.
    Epsilon,
}

/// Shorthand for [`Symbol::Epsilon`].
pub const EPSILON: Symbol = Symbol::Epsilon;

/// Check if a symbol is an epsilon transition.
#[inline]
pub fn is_epsilon(symbol: Symbol) -> bool {
    symbol == EPSILON
}

impl Symbol {
    /// The alphabet character, or `None` for epsilon.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(c),
            Symbol::Epsilon => None,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Epsilon => f.write_str("ε"),
        }
    }
}
