//! The automaton data model shared by every pipeline stage.

use crate::state::{StateId, StateSet};
use std::collections::HashSet;

/// A named state. `is_final` marks accepting states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub is_final: bool,
}

/// A labeled edge between two states, by index into the owning
/// automaton's state list.
///
/// `symbol` may be a comma-joined group of alphabet symbols if the edge
/// went through [`crate::merge::merge_parallel_edges`]; consumers that
/// need per-symbol semantics must split on the comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub source: StateId,
    pub target: StateId,
    pub symbol: String,
}

/// A finite automaton, deterministic or not.
///
/// State order is significant: a state's position is its stable index,
/// referenced by transitions. Alphabet order is the tie-break order used
/// during subset construction and is preserved through every stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    pub states: Vec<State>,
    pub alphabet: Vec<String>,
    pub transitions: Vec<Transition>,
    pub initial_state: String,
}

impl Automaton {
    /// Index of the state with the given name, if declared.
    pub fn state_index(&self, name: &str) -> Option<StateId> {
        self.states.iter().position(|s| s.name == name)
    }

    /// Panic if the automaton violates a structural invariant.
    ///
    /// Converter and minimizer call this on entry: a dangling index or a
    /// duplicate state name there is a defect in the producing stage, not
    /// a user-input error, and must not be masked.
    pub fn check_consistent(&self) {
        let mut seen = HashSet::with_capacity(self.states.len());
        for state in &self.states {
            assert!(
                seen.insert(state.name.as_str()),
                "duplicate state name {:?}",
                state.name
            );
        }
        assert!(
            seen.contains(self.initial_state.as_str()),
            "initial state {:?} is not declared",
            self.initial_state
        );
        for transition in &self.transitions {
            assert!(
                transition.source < self.states.len() && transition.target < self.states.len(),
                "transition {:?} references a state index out of bounds ({} states)",
                transition,
                self.states.len()
            );
        }
    }

    /// Simulate the automaton on a word, nondeterministically.
    ///
    /// Tracks the full set of states reachable after each input symbol, so
    /// it is valid for NFAs and DFAs alike. Comma-grouped edge labels are
    /// split before matching. Returns whether any reached state is final.
    pub fn accepts(&self, word: &[&str]) -> bool {
        let capacity = self.states.len();
        let Some(initial) = self.state_index(&self.initial_state) else {
            return false;
        };
        let mut current = StateSet::singleton(initial, capacity);
        for symbol in word {
            let mut next = StateSet::with_capacity(capacity);
            for transition in &self.transitions {
                if current.contains(transition.source)
                    && transition.symbol.split(',').any(|part| part == *symbol)
                {
                    next.insert(transition.target);
                }
            }
            // Stuck: the implicit sink is never left again.
            if next.is_empty() {
                return false;
            }
            current = next;
        }
        let accepted = current.iter().any(|state| self.states[state].is_final);
        accepted
    }
}
