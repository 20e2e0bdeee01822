//! State types for automata.

use fixedbitset::FixedBitSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A state identifier represented as a u32.
///
/// Identifiers index into the state arena of the owning
/// [`Automaton`](crate::automaton::Automaton) and are handed out in insertion
/// order starting at zero.
pub type StateId = u32;

/// A vertex of an automaton.
///
/// The name is the state's identity: an automaton never holds two states with
/// the same name. Only the final flag can change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    name: String,
    is_initial: bool,
    is_final: bool,
}

impl State {
    pub(crate) fn new(name: impl Into<String>, is_initial: bool, is_final: bool) -> Self {
        Self {
            name: name.into(),
            is_initial,
            is_final,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub(crate) fn set_final(&mut self, is_final: bool) {
        self.is_final = is_final;
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.is_initial {
            f.write_str("(Initial)")?;
        }
        if self.is_final {
            f.write_str("(Final)")?;
        }
        Ok(())
    }
}

/// A subset of an automaton's states, one bit per `StateId`.
///
/// Equality and hashing look only at membership, never at bit capacity, so a
/// subset found during determinization can be used as a map key as is.
#[derive(Clone, Default)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// An empty set with room for ids below `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// A set holding only `state`.
    pub fn singleton(state: StateId, capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        set.insert(state);
        set
    }

    /// Add `state`, growing the bit set when the id is past its end.
    pub fn insert(&mut self, state: StateId) {
        let idx = state as usize;
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        self.bits.insert(idx);
    }

    pub fn contains(&self, state: StateId) -> bool {
        let idx = state as usize;
        if idx >= self.bits.len() {
            false
        } else {
            self.bits.contains(idx)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Number of member states.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Member ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|i| i as StateId)
    }

    /// Add every member of `other`.
    pub fn union_with(&mut self, other: &StateSet) {
        if other.bits.len() > self.bits.len() {
            self.bits.grow(other.bits.len());
        }
        self.bits.union_with(&other.bits);
    }

    /// True if the two sets share at least one state.
    pub fn intersects(&self, other: &StateSet) -> bool {
        self.bits.intersection(&other.bits).next().is_some()
    }

    /// The states in ascending order.
    pub fn to_vec(&self) -> Vec<StateId> {
        self.iter().collect()
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for StateSet {}

impl Hash for StateSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for id in self.iter() {
            id.hash(state);
        }
        self.len().hash(state);
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let items: Vec<StateId> = iter.into_iter().collect();
        let capacity = items.iter().copied().max().map_or(0, |m| m as usize + 1);
        let mut set = Self::with_capacity(capacity);
        for state in items {
            set.insert(state);
        }
        set
    }
}
