//! Subset construction (NFA → DFA).

use crate::automaton::{Automaton, State, Transition};
use crate::merge::merge_parallel_edges;
use crate::state::{StateId, StateSet};
use indexmap::IndexMap;
use std::collections::{HashMap, VecDeque};

/// Convert an NFA into an equivalent DFA with the powerset construction.
///
/// Each DFA state stands for a set of NFA states; its name is the
/// lexicographically sorted, comma-joined member-name list, so naming is
/// canonical regardless of discovery order. A symbol with no successor
/// from a composite state yields no edge at all: the non-accepting sink
/// stays implicit. The result has its parallel edges merged.
///
/// The number of composite states is worst-case exponential in the NFA
/// state count; no cap or timeout is applied.
pub fn subset_construction(nfa: &Automaton) -> Automaton {
    nfa.check_consistent();
    let capacity = nfa.states.len();

    // NFA transition table keyed by (state, symbol). Grouped labels from
    // a previous merge pass expand into their individual symbols here.
    let mut table: HashMap<(StateId, &str), StateSet> = HashMap::new();
    for transition in &nfa.transitions {
        for symbol in transition.symbol.split(',') {
            table
                .entry((transition.source, symbol))
                .or_insert_with(|| StateSet::with_capacity(capacity))
                .insert(transition.target);
        }
    }

    let initial = nfa
        .state_index(&nfa.initial_state)
        .expect("consistent automaton declares its initial state");

    // Composite states are keyed by their sorted member-index list; the
    // map's insertion order is the DFA state order. The worklist holds
    // discovered but not yet expanded composites, oldest first.
    let mut discovered: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut worklist: VecDeque<(StateSet, StateId)> = VecDeque::new();
    let mut transitions: Vec<Transition> = Vec::new();

    let start = StateSet::singleton(initial, capacity);
    discovered.insert(start.to_vec(), 0);
    worklist.push_back((start, 0));

    while let Some((current, source)) = worklist.pop_front() {
        for symbol in &nfa.alphabet {
            let mut successors = StateSet::with_capacity(capacity);
            for member in current.iter() {
                if let Some(set) = table.get(&(member, symbol.as_str())) {
                    successors.union_with(set);
                }
            }
            if successors.is_empty() {
                // Implicit sink: record no edge for this symbol.
                continue;
            }

            let key = successors.to_vec();
            let target = match discovered.get(&key) {
                Some(&id) => id,
                None => {
                    let id = discovered.len();
                    discovered.insert(key, id);
                    worklist.push_back((successors, id));
                    id
                }
            };
            transitions.push(Transition {
                source,
                target,
                symbol: symbol.clone(),
            });
        }
    }
    log::debug!(
        "subset construction: {} NFA states -> {} DFA states, {} transitions",
        nfa.states.len(),
        discovered.len(),
        transitions.len()
    );

    let states: Vec<State> = discovered
        .keys()
        .map(|members| {
            let mut names: Vec<&str> = members
                .iter()
                .map(|&member| nfa.states[member].name.as_str())
                .collect();
            names.sort_unstable();
            State {
                name: names.join(","),
                is_final: members.iter().any(|&member| nfa.states[member].is_final),
            }
        })
        .collect();

    let mut dfa = Automaton {
        states,
        alphabet: nfa.alphabet.clone(),
        transitions,
        initial_state: nfa.initial_state.clone(),
    };
    merge_parallel_edges(&mut dfa);
    dfa
}
