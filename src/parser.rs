//! Text format → NFA.
//!
//! The input is line oriented; blank lines are skipped and every line is
//! trimmed. The first four non-blank lines are headers:
//!
//! ```text
//! q0,q1,q2        state names, in order
//! a,b             alphabet symbols
//! q0              initial state
//! q2              final states
//! q0,a=>q0,q1     transition rules, one per line
//! ```
//!
//! A rule `src,sym=>t1,...,tN` contributes one transition per target; a
//! state with several targets for one symbol is how nondeterminism is
//! written. Only the first comma on the left side separates source from
//! symbol, so a previously merged label group parses back as one symbol
//! (`q0,a,b=>q1` is source `q0`, symbol `a,b`).

use crate::automaton::{Automaton, State, Transition};
use crate::state::StateId;
use thiserror::Error;

/// Why an input text could not be parsed. Parsing is atomic: on any
/// error, no automaton is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 4 header lines (states, alphabet, initial state, final states), found {found}")]
    MissingHeader { found: usize },
    #[error("duplicate state name {0:?}")]
    DuplicateState(String),
    #[error("duplicate alphabet symbol {0:?}")]
    DuplicateSymbol(String),
    #[error("state {0:?} is not declared in the state list")]
    UnknownState(String),
    #[error("symbol {0:?} is not in the declared alphabet")]
    UnknownSymbol(String),
    #[error("malformed transition rule {0:?}, expected \"source,symbol=>target,...\"")]
    MalformedTransition(String),
}

fn index_of(states: &[State], name: &str) -> Result<StateId, ParseError> {
    states
        .iter()
        .position(|s| s.name == name)
        .ok_or_else(|| ParseError::UnknownState(name.to_string()))
}

/// Parse an automaton description into an NFA.
pub fn parse(text: &str) -> Result<Automaton, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 4 {
        return Err(ParseError::MissingHeader { found: lines.len() });
    }

    let mut states: Vec<State> = Vec::new();
    for name in lines[0].split(',').map(str::trim) {
        if states.iter().any(|s| s.name == name) {
            return Err(ParseError::DuplicateState(name.to_string()));
        }
        states.push(State {
            name: name.to_string(),
            is_final: false,
        });
    }

    let mut alphabet: Vec<String> = Vec::new();
    for symbol in lines[1].split(',').map(str::trim) {
        if alphabet.iter().any(|s| s == symbol) {
            return Err(ParseError::DuplicateSymbol(symbol.to_string()));
        }
        alphabet.push(symbol.to_string());
    }

    let initial_state = lines[2].to_string();
    index_of(&states, &initial_state)?;

    for name in lines[3].split(',').map(str::trim) {
        let index = index_of(&states, name)?;
        states[index].is_final = true;
    }

    let mut transitions = Vec::new();
    for line in &lines[4..] {
        let (lhs, rhs) = line
            .split_once("=>")
            .ok_or_else(|| ParseError::MalformedTransition(line.to_string()))?;
        let (source_name, symbol) = lhs
            .trim()
            .split_once(',')
            .ok_or_else(|| ParseError::MalformedTransition(line.to_string()))?;
        let source = index_of(&states, source_name.trim())?;

        let parts: Vec<&str> = symbol.split(',').map(str::trim).collect();
        for part in &parts {
            if part.is_empty() {
                return Err(ParseError::MalformedTransition(line.to_string()));
            }
            if !alphabet.iter().any(|s| s == part) {
                return Err(ParseError::UnknownSymbol(part.to_string()));
            }
        }
        let symbol = parts.join(",");

        for target_name in rhs.split(',').map(str::trim) {
            let target = index_of(&states, target_name)?;
            transitions.push(Transition {
                source,
                target,
                symbol: symbol.clone(),
            });
        }
    }

    Ok(Automaton {
        states,
        alphabet,
        transitions,
        initial_state,
    })
}
