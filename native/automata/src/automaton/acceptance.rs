//! Word acceptance by simulating every path at once.

use crate::automaton::finite_automaton::Automaton;
use std::fmt;

/// Why a word was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The automaton has no initial state, so its language is empty.
    NoInitialState,
    /// The character at `position` is not in the alphabet.
    UnknownSymbol { position: usize, symbol: char },
    /// No active state has a transition on the character at `position`.
    NoTransition { position: usize, symbol: char },
    /// The whole word was read but none of the reached states is final.
    NotFinal { reached: Vec<String> },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoInitialState => f.write_str("the automaton has no initial state"),
            Rejection::UnknownSymbol { position, symbol } => write!(
                f,
                "symbol '{symbol}' at position {position} is not in the automaton's alphabet"
            ),
            Rejection::NoTransition { position, symbol } => write!(
                f,
                "no transition on symbol '{symbol}' at position {position}"
            ),
            Rejection::NotFinal { reached } => write!(
                f,
                "end of word reached in non-final state(s) {{{}}}",
                reached.join(", ")
            ),
        }
    }
}

/// Outcome of running a word through an automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// The rejection cause, if the word was rejected.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected(cause) => Some(cause),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => f.write_str("Accepted"),
            Verdict::Rejected(cause) => write!(f, "Rejected: {cause}"),
        }
    }
}

impl Automaton {
    /// Run `word` through the automaton and report the outcome.
    ///
    /// The set of active states starts at the epsilon closure of the initial
    /// state and advances one character at a time; the word is accepted iff
    /// a final state is active once the input is exhausted.
    pub fn run(&self, word: &str) -> Verdict {
        let verdict = self.simulate(word);
        if let Verdict::Rejected(cause) = &verdict {
            tracing::debug!(word, %cause, "word rejected");
        }
        verdict
    }

    /// Check whether the automaton accepts `word`.
    pub fn accepts(&self, word: &str) -> bool {
        self.run(word).is_accepted()
    }

    fn simulate(&self, word: &str) -> Verdict {
        if self.initial_state().is_none() {
            return Verdict::Rejected(Rejection::NoInitialState);
        }

        let mut current = self.initial_closure();

        for (position, symbol) in word.chars().enumerate() {
            if !self.alphabet().contains(&symbol) {
                return Verdict::Rejected(Rejection::UnknownSymbol { position, symbol });
            }

            let next = self.move_on_symbol(&current, symbol);
            if next.is_empty() {
                return Verdict::Rejected(Rejection::NoTransition { position, symbol });
            }

            tracing::trace!(position, %symbol, active = ?next, "step");
            current = next;
        }

        if self.contains_final(&current) {
            Verdict::Accepted
        } else {
            let reached = current
                .iter()
                .filter_map(|id| self.state(id))
                .map(|state| state.name().to_owned())
                .collect();
            Verdict::Rejected(Rejection::NotFinal { reached })
        }
    }
}
