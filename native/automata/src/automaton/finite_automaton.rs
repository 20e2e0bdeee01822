//! Finite automaton over a character alphabet, with optional epsilon moves.

use crate::automaton::error::{AutomatonError, Result};
use crate::automaton::state::{State, StateId, StateSet};
use crate::automaton::symbol::{EPSILON, Symbol, is_epsilon};
use crate::automaton::transition::Transition;
use indexmap::IndexSet;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt;

/// A finite automaton, deterministic or not.
///
/// States live in an arena indexed by [`StateId`]; transitions are kept in a
/// flat, structurally deduplicated table with an `(origin, symbol)` index for
/// successor lookups. Nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct Automaton {
    /// State arena, indexed by `StateId`
    states: Vec<State>,
    /// Name -> id
    names: HashMap<String, StateId>,
    /// All transitions in insertion order
    transitions: IndexSet<Transition>,
    /// (source, symbol) -> destinations
    successors: HashMap<(StateId, Symbol), StateSet>,
    /// Every character used by a transition (never epsilon)
    alphabet: BTreeSet<char>,
    initial_state: Option<StateId>,
}

impl Automaton {
    /// Create a new empty automaton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state and return its id.
    ///
    /// Fails if the name is taken, or if `is_initial` is set while another
    /// state is already initial. On failure the automaton is unchanged.
    pub fn add_state(
        &mut self,
        name: impl Into<String>,
        is_initial: bool,
        is_final: bool,
    ) -> Result<StateId> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(AutomatonError::DuplicateState(name));
        }
        if is_initial {
            if let Some(existing) = self.initial_state {
                return Err(AutomatonError::DuplicateInitialState {
                    existing: self.states[existing as usize].name().to_owned(),
                    rejected: name,
                });
            }
        }
        Ok(self.push_state(State::new(name, is_initial, is_final)))
    }

    /// Add a transition between two existing states.
    ///
    /// Character symbols are recorded in the alphabet. Adding an edge that is
    /// already present is a no-op.
    pub fn add_transition(
        &mut self,
        origin: &str,
        symbol: impl Into<Symbol>,
        destination: &str,
    ) -> Result<()> {
        let source = self.require_state(origin)?;
        let target = self.require_state(destination)?;
        self.insert_transition(Transition::new(source, symbol.into(), target));
        Ok(())
    }

    /// Add an epsilon transition between two existing states.
    pub fn add_epsilon_transition(&mut self, origin: &str, destination: &str) -> Result<()> {
        self.add_transition(origin, EPSILON, destination)
    }

    /// Change the final flag of an existing state.
    pub fn set_final(&mut self, name: &str, is_final: bool) -> Result<()> {
        let id = self.require_state(name)?;
        self.states[id as usize].set_final(is_final);
        Ok(())
    }

    fn require_state(&self, name: &str) -> Result<StateId> {
        self.state_id(name)
            .ok_or_else(|| AutomatonError::UnknownState(name.to_owned()))
    }

    /// Append a state whose name is known to be fresh.
    pub(crate) fn push_state(&mut self, state: State) -> StateId {
        let id = self.states.len() as StateId;
        if state.is_initial() {
            self.initial_state = Some(id);
        }
        self.names.insert(state.name().to_owned(), id);
        self.states.push(state);
        id
    }

    /// Insert a transition whose endpoints are known to exist.
    pub(crate) fn insert_transition(&mut self, transition: Transition) {
        if !self.transitions.insert(transition) {
            return;
        }

        let symbol = transition.symbol();
        if let Some(c) = symbol.as_char() {
            self.alphabet.insert(c);
        }

        let capacity = self.states.len();
        self.successors
            .entry((transition.origin(), symbol))
            .or_insert_with(|| StateSet::with_capacity(capacity))
            .insert(transition.destination());

        tracing::trace!(
            origin = self.states[transition.origin() as usize].name(),
            %symbol,
            destination = self.states[transition.destination() as usize].name(),
            "added transition"
        );
    }

    /// Get the number of states.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Get the number of distinct transitions.
    pub fn num_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// All states, indexed by their id.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id as usize)
    }

    /// Look up a state id by name.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.names.get(name).copied()
    }

    /// Get the alphabet (all transition characters, in ascending order).
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn initial_state(&self) -> Option<StateId> {
        self.initial_state
    }

    /// The final states, computed from the per-state flags.
    pub fn final_states(&self) -> StateSet {
        let mut finals = StateSet::with_capacity(self.states.len());
        for (id, state) in self.states.iter().enumerate() {
            if state.is_final() {
                finals.insert(id as StateId);
            }
        }
        finals
    }

    pub(crate) fn is_final(&self, id: StateId) -> bool {
        self.state(id).is_some_and(State::is_final)
    }

    pub(crate) fn contains_final(&self, states: &StateSet) -> bool {
        states.intersects(&self.final_states())
    }

    /// All transitions in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.transitions.iter().copied()
    }

    /// Outgoing transitions of a state.
    pub fn transitions_from(&self, state: StateId) -> impl Iterator<Item = Transition> + '_ {
        self.transitions
            .iter()
            .copied()
            .filter(move |t| t.origin() == state)
    }

    /// Outgoing transitions of `state` labeled `symbol`.
    ///
    /// More than one element means the automaton is non-deterministic at this
    /// state.
    pub fn transitions_for_symbol(
        &self,
        state: StateId,
        symbol: impl Into<Symbol>,
    ) -> impl Iterator<Item = Transition> + '_ {
        let symbol = symbol.into();
        self.successors(state, symbol)
            .into_iter()
            .flat_map(|destinations| destinations.iter())
            .map(move |destination| Transition::new(state, symbol, destination))
    }

    /// The destinations of `state` on `symbol`, if it has any.
    pub fn successors(&self, state: StateId, symbol: impl Into<Symbol>) -> Option<&StateSet> {
        self.successors.get(&(state, symbol.into()))
    }

    /// True iff there are no epsilon transitions and no state has more than
    /// one transition on any symbol.
    pub fn is_deterministic(&self) -> bool {
        self.successors
            .iter()
            .all(|(&(_, symbol), destinations)| !is_epsilon(symbol) && destinations.len() <= 1)
    }

    /// Get the epsilon closure of a set of states.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = StateSet::with_capacity(self.states.len());
        let mut stack: Vec<StateId> = states.iter().collect();

        while let Some(s) = stack.pop() {
            if closure.contains(s) {
                continue;
            }
            closure.insert(s);

            if let Some(destinations) = self.successors.get(&(s, EPSILON)) {
                for dest in destinations.iter() {
                    if !closure.contains(dest) {
                        stack.push(dest);
                    }
                }
            }
        }

        closure
    }

    /// The epsilon closure of the initial state, or an empty set if there is
    /// no initial state.
    pub fn initial_closure(&self) -> StateSet {
        match self.initial_state {
            Some(initial) => {
                self.epsilon_closure(&StateSet::singleton(initial, self.states.len()))
            }
            None => StateSet::default(),
        }
    }

    /// Get the states reachable from a set of states on a given character.
    /// Returns the epsilon closure of the reached states.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: char) -> StateSet {
        let mut reached = StateSet::with_capacity(self.states.len());

        for state in states.iter() {
            if let Some(destinations) = self.successors.get(&(state, Symbol::Char(symbol))) {
                reached.union_with(destinations);
            }
        }

        self.epsilon_closure(&reached)
    }

    /// Check whether the automaton accepts no word at all.
    /// Uses BFS from the initial closure following all transitions.
    pub fn language_is_empty(&self) -> bool {
        let mut visited = StateSet::with_capacity(self.states.len());
        let mut queue: VecDeque<StateId> = self.initial_closure().iter().collect();

        while let Some(state) = queue.pop_front() {
            if visited.contains(state) {
                continue;
            }
            visited.insert(state);

            if self.is_final(state) {
                return false;
            }

            for transition in self.transitions_from(state) {
                if !visited.contains(transition.destination()) {
                    queue.push_back(transition.destination());
                }
            }
        }

        true
    }

    fn name_of(&self, id: StateId) -> &str {
        self.state(id).map_or("?", State::name)
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Automaton:")?;

        writeln!(f, "States:")?;
        for state in &self.states {
            writeln!(f, " - {state}")?;
        }

        let alphabet: Vec<String> = self.alphabet.iter().map(char::to_string).collect();
        writeln!(f, "Alphabet: {}", alphabet.join(", "))?;

        writeln!(f, "Transitions:")?;
        for t in &self.transitions {
            writeln!(
                f,
                " - {} --{}--> {}",
                self.name_of(t.origin()),
                t.symbol(),
                self.name_of(t.destination())
            )?;
        }

        Ok(())
    }
}
