//! Property-based tests for acceptance and subset construction using proptest
//!
//! Random small automata over {a, b} with optional epsilon moves are checked
//! against a naive configuration-search acceptor.

use automata::{Automaton, EPSILON, Symbol, subset_construction};
use proptest::prelude::*;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet, VecDeque};

const MAX_STATES: usize = 5;

#[derive(Debug, Clone)]
struct Blueprint {
    finals: Vec<bool>,
    edges: Vec<(usize, Symbol, usize)>,
}

fn symbol_strategy() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        4 => Just(Symbol::Char('a')),
        4 => Just(Symbol::Char('b')),
        1 => Just(EPSILON),
    ]
}

fn blueprint_strategy() -> impl Strategy<Value = Blueprint> {
    (1..=MAX_STATES).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec((0..n, symbol_strategy(), 0..n), 0..12),
        )
            .prop_map(|(finals, edges)| Blueprint { finals, edges })
    })
}

fn word_strategy() -> impl Strategy<Value = String> {
    "[ab]{0,6}"
}

fn build(blueprint: &Blueprint) -> Automaton {
    let mut a = Automaton::new();
    for (i, &is_final) in blueprint.finals.iter().enumerate() {
        a.add_state(format!("s{i}"), i == 0, is_final).unwrap();
    }
    for &(from, symbol, to) in &blueprint.edges {
        a.add_transition(&format!("s{from}"), symbol, &format!("s{to}"))
            .unwrap();
    }
    a
}

// Explore (state, position) configurations directly from the edge list
fn naive_accepts(blueprint: &Blueprint, word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([(0usize, 0usize)]);

    while let Some((state, pos)) = queue.pop_front() {
        if !seen.insert((state, pos)) {
            continue;
        }
        if pos == chars.len() && blueprint.finals[state] {
            return true;
        }
        for &(from, symbol, to) in &blueprint.edges {
            if from != state {
                continue;
            }
            match symbol {
                Symbol::Epsilon => queue.push_back((to, pos)),
                Symbol::Char(c) if pos < chars.len() && chars[pos] == c => {
                    queue.push_back((to, pos + 1))
                }
                Symbol::Char(_) => {}
            }
        }
    }

    false
}

// Characters labelling some transition whose origin is reachable from the
// initial closure
fn reachable_symbols(nfa: &Automaton) -> BTreeSet<char> {
    let mut visited = nfa.initial_closure();
    let mut queue: VecDeque<_> = visited.iter().collect();
    let mut symbols = BTreeSet::new();

    while let Some(state) = queue.pop_front() {
        for transition in nfa.transitions_from(state) {
            if let Some(c) = transition.symbol().as_char() {
                symbols.insert(c);
            }
            if !visited.contains(transition.destination()) {
                visited.insert(transition.destination());
                queue.push_back(transition.destination());
            }
        }
    }

    symbols
}

proptest! {
    #[test]
    fn prop_determinized_is_deterministic(blueprint in blueprint_strategy()) {
        let nfa = build(&blueprint);
        prop_assert!(nfa.to_deterministic().is_deterministic());
    }

    #[test]
    fn prop_accepts_matches_naive_search(blueprint in blueprint_strategy(), word in word_strategy()) {
        let nfa = build(&blueprint);
        prop_assert_eq!(nfa.accepts(&word), naive_accepts(&blueprint, &word));
    }

    #[test]
    fn prop_determinization_preserves_acceptance(
        blueprint in blueprint_strategy(),
        words in prop::collection::vec(word_strategy(), 1..8),
    ) {
        let nfa = build(&blueprint);
        let dfa = nfa.to_deterministic();
        let constructed = subset_construction(&nfa);
        prop_assert_eq!(constructed.automaton().alphabet(), &reachable_symbols(&nfa));
        for word in &words {
            prop_assert_eq!(nfa.accepts(word), dfa.accepts(word), "word {:?}", word);
        }
    }

    #[test]
    fn prop_determinization_is_idempotent(blueprint in blueprint_strategy()) {
        let nfa = build(&blueprint);
        let dfa = nfa.to_deterministic();
        prop_assert!(matches!(dfa.to_deterministic(), Cow::Borrowed(_)));
    }

    #[test]
    fn prop_language_emptiness_agrees_with_dfa(blueprint in blueprint_strategy()) {
        let nfa = build(&blueprint);
        let dfa = nfa.to_deterministic();
        prop_assert_eq!(nfa.language_is_empty(), dfa.language_is_empty());
    }

    #[test]
    fn prop_rejected_transition_leaves_automaton_unchanged(
        blueprint in blueprint_strategy(),
        symbol in "[a-z]",
    ) {
        let mut nfa = build(&blueprint);
        let alphabet = nfa.alphabet().clone();
        let transitions: Vec<_> = nfa.transitions().collect();
        let symbol = symbol.chars().next().unwrap();

        prop_assert!(nfa.add_transition("s0", symbol, "missing").is_err());
        prop_assert!(nfa.add_transition("missing", symbol, "s0").is_err());
        prop_assert_eq!(nfa.alphabet(), &alphabet);
        prop_assert_eq!(nfa.transitions().collect::<Vec<_>>(), transitions);
    }
}
