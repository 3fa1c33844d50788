//! Parallel-edge consolidation.

use crate::automaton::{Automaton, Transition};
use crate::state::StateId;
use indexmap::{IndexMap, IndexSet};

/// Merge every group of transitions sharing the same ordered
/// `(source, target)` pair into a single edge whose label is the
/// comma-joined symbol set, in first-seen order with duplicates dropped.
///
/// Groups of one are left as they are, so the operation is idempotent.
/// This is a presentation-level rewrite: the accepted language does not
/// change, consumers split the label on commas.
pub fn merge_parallel_edges(automaton: &mut Automaton) {
    let before = automaton.transitions.len();
    let mut groups: IndexMap<(StateId, StateId), IndexSet<String>> = IndexMap::new();
    for transition in automaton.transitions.drain(..) {
        groups
            .entry((transition.source, transition.target))
            .or_default()
            .insert(transition.symbol);
    }
    automaton.transitions = groups
        .into_iter()
        .map(|((source, target), symbols)| Transition {
            source,
            target,
            symbol: symbols.into_iter().collect::<Vec<_>>().join(","),
        })
        .collect();
    if automaton.transitions.len() != before {
        log::trace!(
            "merged {} parallel edges into {}",
            before,
            automaton.transitions.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::State;

    fn two_state_automaton(transitions: Vec<Transition>) -> Automaton {
        Automaton {
            states: vec![
                State { name: "q0".into(), is_final: false },
                State { name: "q1".into(), is_final: true },
            ],
            alphabet: vec!["a".into(), "b".into(), "c".into()],
            transitions,
            initial_state: "q0".into(),
        }
    }

    #[test]
    fn joins_parallel_edges_in_first_seen_order() {
        let mut automaton = two_state_automaton(vec![
            Transition { source: 0, target: 1, symbol: "b".into() },
            Transition { source: 0, target: 0, symbol: "c".into() },
            Transition { source: 0, target: 1, symbol: "a".into() },
        ]);
        merge_parallel_edges(&mut automaton);
        assert_eq!(
            automaton.transitions,
            vec![
                Transition { source: 0, target: 1, symbol: "b,a".into() },
                Transition { source: 0, target: 0, symbol: "c".into() },
            ]
        );
    }

    #[test]
    fn duplicate_symbols_collapse() {
        let mut automaton = two_state_automaton(vec![
            Transition { source: 0, target: 1, symbol: "a".into() },
            Transition { source: 0, target: 1, symbol: "a".into() },
        ]);
        merge_parallel_edges(&mut automaton);
        assert_eq!(automaton.transitions.len(), 1);
        assert_eq!(automaton.transitions[0].symbol, "a");
    }

    #[test]
    fn distinguishes_edge_direction() {
        let mut automaton = two_state_automaton(vec![
            Transition { source: 0, target: 1, symbol: "a".into() },
            Transition { source: 1, target: 0, symbol: "b".into() },
        ]);
        merge_parallel_edges(&mut automaton);
        assert_eq!(automaton.transitions.len(), 2);
    }

    #[test]
    fn merging_twice_is_a_no_op() {
        let mut automaton = two_state_automaton(vec![
            Transition { source: 0, target: 1, symbol: "a".into() },
            Transition { source: 0, target: 1, symbol: "b".into() },
            Transition { source: 1, target: 1, symbol: "c".into() },
        ]);
        merge_parallel_edges(&mut automaton);
        let once = automaton.clone();
        merge_parallel_edges(&mut automaton);
        assert_eq!(automaton, once);
    }
}
