//! Subset construction algorithm for converting an automaton with
//! non-determinism or epsilon moves into a DFA.

use crate::automaton::finite_automaton::Automaton;
use crate::automaton::state::{State, StateId, StateSet};
use crate::automaton::symbol::Symbol;
use crate::automaton::transition::Transition;
use indexmap::IndexSet;
use std::borrow::Cow;
use std::collections::VecDeque;

/// The result of [`subset_construction`]: the DFA plus, for each of its
/// states, the set of source states it stands for.
#[derive(Debug, Clone)]
pub struct Determinized {
    automaton: Automaton,
    subsets: Vec<StateSet>,
}

impl Determinized {
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn into_automaton(self) -> Automaton {
        self.automaton
    }

    /// The source states represented by the DFA state `state`.
    pub fn subset_of(&self, state: StateId) -> Option<&StateSet> {
        self.subsets.get(state as usize)
    }

    /// Source subsets, indexed by DFA state id.
    pub fn subsets(&self) -> &[StateSet] {
        &self.subsets
    }
}

/// Convert an automaton to a DFA using the powerset construction algorithm.
///
/// DFA states are named `q0`, `q1`, ... in breadth-first discovery order,
/// visiting symbols in ascending alphabet order. `q0` is the epsilon closure
/// of the source's initial state. A source without an initial state yields
/// an empty DFA.
pub fn subset_construction(nfa: &Automaton) -> Determinized {
    // The index of a subset in `discovered` is the id of its DFA state
    let mut discovered: IndexSet<StateSet> = IndexSet::new();
    let mut dfa = Automaton::new();

    let initial_set = nfa.initial_closure();
    if initial_set.is_empty() {
        return Determinized {
            automaton: dfa,
            subsets: Vec::new(),
        };
    }

    let initial_is_final = nfa.contains_final(&initial_set);
    let initial_dfa_state = dfa.push_state(State::new("q0", true, initial_is_final));
    discovered.insert(initial_set.clone());

    let mut worklist: VecDeque<(StateId, StateSet)> = VecDeque::new();
    worklist.push_back((initial_dfa_state, initial_set));

    while let Some((current_dfa_state, current_nfa_set)) = worklist.pop_front() {
        for &symbol in nfa.alphabet() {
            let next_nfa_set = nfa.move_on_symbol(&current_nfa_set, symbol);

            if next_nfa_set.is_empty() {
                // No transition on this symbol - the DFA rejects here too
                continue;
            }

            let next_dfa_state = match discovered.get_index_of(&next_nfa_set) {
                Some(existing) => existing as StateId,
                None => {
                    let name = format!("q{}", discovered.len());
                    let is_final = nfa.contains_final(&next_nfa_set);
                    tracing::debug!(%name, subset = ?next_nfa_set, is_final, "new DFA state");

                    let new_state = dfa.push_state(State::new(name, false, is_final));
                    discovered.insert(next_nfa_set.clone());
                    worklist.push_back((new_state, next_nfa_set));
                    new_state
                }
            };

            dfa.insert_transition(Transition::new(
                current_dfa_state,
                Symbol::Char(symbol),
                next_dfa_state,
            ));
        }
    }

    Determinized {
        automaton: dfa,
        subsets: discovered.into_iter().collect(),
    }
}

impl Automaton {
    /// An equivalent deterministic automaton.
    ///
    /// Returns `self` unchanged when it is already deterministic; otherwise
    /// builds a fresh automaton with [`subset_construction`].
    pub fn to_deterministic(&self) -> Cow<'_, Automaton> {
        if self.is_deterministic() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(subset_construction(self).into_automaton())
        }
    }
}
