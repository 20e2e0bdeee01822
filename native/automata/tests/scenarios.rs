//! End-to-end scenarios for construction, acceptance and determinization.

use automata::automaton::loader;
use automata::{Automaton, AutomatonError, Rejection, Verdict};
use std::borrow::Cow;

fn chain() -> Automaton {
    let mut a = Automaton::new();
    a.add_state("s0", true, false).unwrap();
    a.add_state("s1", false, false).unwrap();
    a.add_state("s2", false, true).unwrap();
    a.add_transition("s0", 'a', "s1").unwrap();
    a.add_transition("s1", 'b', "s2").unwrap();
    a
}

fn fork() -> Automaton {
    let mut a = Automaton::new();
    a.add_state("s0", true, false).unwrap();
    a.add_state("s1", false, false).unwrap();
    a.add_state("s2", false, true).unwrap();
    a.add_transition("s0", 'a', "s1").unwrap();
    a.add_transition("s0", 'a', "s2").unwrap();
    a
}

#[test]
fn test_chain_scenario() {
    let a = chain();

    assert!(a.is_deterministic());
    assert!(a.accepts("ab"));
    assert!(!a.accepts("a"));
    assert!(matches!(
        a.run("ac"),
        Verdict::Rejected(Rejection::UnknownSymbol { symbol: 'c', .. })
    ));
    assert!(!a.accepts(""));
}

#[test]
fn test_fork_scenario() {
    let nfa = fork();
    assert!(!nfa.is_deterministic());

    let dfa = nfa.to_deterministic();
    assert!(dfa.is_deterministic());
    for state in 0..dfa.num_states() as u32 {
        for &symbol in dfa.alphabet() {
            assert!(dfa.transitions_for_symbol(state, symbol).count() <= 1);
        }
    }
    assert!(dfa.accepts("a"));
    assert!(nfa.accepts("a"));
}

#[test]
fn test_empty_automaton_scenario() {
    let a = Automaton::new();
    assert!(a.is_deterministic());
    for word in ["", "a", "hello"] {
        assert!(!a.accepts(word));
    }
    assert!(matches!(a.to_deterministic(), Cow::Borrowed(_)));
}

#[test]
fn test_repeated_determinization_is_stable() {
    let nfa = fork();
    let once = nfa.to_deterministic().into_owned();
    let twice = once.to_deterministic();

    assert!(matches!(twice, Cow::Borrowed(_)));
    assert_eq!(once.to_string(), twice.to_string());
}

#[test]
fn test_invalid_transition_does_not_mutate() {
    let mut a = chain();
    let before = a.to_string();

    assert_eq!(
        a.add_transition("s2", 'z', "s7"),
        Err(AutomatonError::UnknownState("s7".into()))
    );
    assert_eq!(a.to_string(), before);
}

#[test]
fn test_determinized_naming_and_rendering() {
    let nfa = fork();
    let dfa = nfa.to_deterministic();

    let expected = "\
Automaton:
States:
 - q0(Initial)
 - q1(Final)
Alphabet: a
Transitions:
 - q0 --a--> q1
";
    assert_eq!(dfa.to_string(), expected);
}

#[test]
fn test_loaded_epsilon_nfa_matches_its_dfa() {
    // (ab)* with an epsilon loop back to the start
    let nfa = loader::parse(
        "\
# States
start initial final
mid
end

# Transitions
start a mid
mid b end
end ε start
",
    )
    .unwrap();

    let dfa = nfa.to_deterministic();
    assert!(dfa.is_deterministic());
    for (word, expected) in [
        ("", true),
        ("ab", true),
        ("abab", true),
        ("a", false),
        ("aba", false),
        ("ba", false),
    ] {
        assert_eq!(nfa.accepts(word), expected, "nfa on {word:?}");
        assert_eq!(dfa.accepts(word), expected, "dfa on {word:?}");
    }
}
