//! Loading automata from their textual description.
//!
//! The format has a states section followed by a transitions section:
//!
//! ```text
//! # States
//! s0 initial
//! s1
//! s2 final
//! # Transitions
//! s0 a s1
//! s1 b s2
//! s1 ε s0
//! ```
//!
//! Blank lines and `#` comments are skipped. A comment containing
//! `# Transitions` (or a bare `Transitions` line) starts the transitions
//! section. State flags are `initial` and `final`, case-insensitive. A
//! transition symbol is a single character; `ε` marks an epsilon move.

use crate::automaton::error::AutomatonError;
use crate::automaton::finite_automaton::Automaton;
use crate::automaton::symbol::{EPSILON, Symbol};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// The token that denotes an epsilon transition.
pub const EPSILON_TOKEN: &str = "ε";

/// Errors produced while loading an automaton description.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read automaton file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: unknown state flag `{flag}` (expected `initial` or `final`)")]
    UnknownFlag { line: usize, flag: String },

    #[error("line {line}: expected `origin symbol destination`")]
    MalformedTransition { line: usize },

    #[error("line {line}: symbol `{symbol}` must be a single character")]
    MultiCharacterSymbol { line: usize, symbol: String },

    #[error("line {line}: {source}")]
    Automaton {
        line: usize,
        #[source]
        source: AutomatonError,
    },
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    States,
    Transitions,
}

/// Parse an automaton description.
pub fn parse(input: &str) -> Result<Automaton, LoadError> {
    let mut automaton = Automaton::new();
    let mut section = Section::States;

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();

        if text.is_empty() || text.starts_with('#') {
            if text.contains("# Transitions") {
                section = Section::Transitions;
            }
            continue;
        }
        if text == "Transitions" {
            section = Section::Transitions;
            continue;
        }

        let mut parts = text.split_whitespace();
        match section {
            Section::States => parse_state(&mut automaton, line, &mut parts)?,
            Section::Transitions => parse_transition(&mut automaton, line, &mut parts)?,
        }
    }

    Ok(automaton)
}

fn parse_state<'a>(
    automaton: &mut Automaton,
    line: usize,
    parts: &mut impl Iterator<Item = &'a str>,
) -> Result<(), LoadError> {
    let Some(name) = parts.next() else {
        return Ok(());
    };

    let mut is_initial = false;
    let mut is_final = false;
    for flag in parts {
        if flag.eq_ignore_ascii_case("initial") {
            is_initial = true;
        } else if flag.eq_ignore_ascii_case("final") {
            is_final = true;
        } else {
            return Err(LoadError::UnknownFlag {
                line,
                flag: flag.to_owned(),
            });
        }
    }

    automaton
        .add_state(name, is_initial, is_final)
        .map_err(|source| LoadError::Automaton { line, source })?;
    Ok(())
}

fn parse_transition<'a>(
    automaton: &mut Automaton,
    line: usize,
    parts: &mut impl Iterator<Item = &'a str>,
) -> Result<(), LoadError> {
    let (Some(origin), Some(symbol), Some(destination), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(LoadError::MalformedTransition { line });
    };

    let symbol = parse_symbol(symbol).ok_or_else(|| LoadError::MultiCharacterSymbol {
        line,
        symbol: symbol.to_owned(),
    })?;

    automaton
        .add_transition(origin, symbol, destination)
        .map_err(|source| LoadError::Automaton { line, source })
}

fn parse_symbol(token: &str) -> Option<Symbol> {
    if token == EPSILON_TOKEN {
        return Some(EPSILON);
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(Symbol::Char(c)),
        _ => None,
    }
}

/// Read and parse an automaton description from a file.
pub fn load(path: impl AsRef<Path>) -> Result<Automaton, LoadError> {
    let input = std::fs::read_to_string(path)?;
    parse(&input)
}

impl FromStr for Automaton {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
