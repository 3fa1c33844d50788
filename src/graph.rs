//! Graphviz DOT rendering of an automaton.

use crate::automaton::Automaton;
use std::fmt::Write as _;

/// Serialize the automaton as a Graphviz digraph.
///
/// Final states are double circles; an unlabeled plaintext node marks the
/// initial state. Merged edge labels are emitted as-is, commas included.
pub fn to_dot(automaton: &Automaton) -> String {
    let mut dot = String::from("digraph automaton {\n  rankdir=LR;\n");
    dot.push_str("  start [label=\"\" shape=plaintext];\n");
    for (index, state) in automaton.states.iter().enumerate() {
        let shape = if state.is_final { "doublecircle" } else { "circle" };
        let _ = writeln!(dot, "  s{index} [label=\"{}\" shape={shape}];", state.name);
    }
    if let Some(initial) = automaton.state_index(&automaton.initial_state) {
        let _ = writeln!(dot, "  start -> s{initial};");
    }
    for transition in &automaton.transitions {
        let _ = writeln!(
            dot,
            "  s{} -> s{} [label=\"{}\"];",
            transition.source, transition.target, transition.symbol
        );
    }
    dot.push_str("}\n");
    dot
}
