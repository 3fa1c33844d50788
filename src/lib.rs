//! NFA determinization and reduction.
//!
//! Parses a line-oriented automaton description into an NFA, converts it
//! to an equivalent DFA with the subset construction, and reduces the DFA
//! by collapsing structurally identical states. Every stage is a pure,
//! synchronous function returning a fresh owned [`Automaton`]; no stage
//! mutates another stage's output.
//!
//! ```
//! use detmin::Pipeline;
//!
//! let run = Pipeline::from_text("q0,q1\na,b\nq0\nq1\nq0,a=>q0,q1\nq1,b=>q1").unwrap();
//! assert!(run.minimized.states.len() <= run.dfa.states.len());
//! ```

mod automaton;
mod graph;
mod merge;
mod minimize;
mod parser;
mod state;
mod subset;

pub use automaton::{Automaton, State, Transition};
pub use graph::to_dot;
pub use merge::merge_parallel_edges;
pub use minimize::minimize;
pub use parser::{parse, ParseError};
pub use state::{StateId, StateSet};
pub use subset::subset_construction;

/// The three snapshots of one full run.
///
/// Each field is an independent owned value; the DFA holds no references
/// into the NFA it was derived from.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub nfa: Automaton,
    pub dfa: Automaton,
    pub minimized: Automaton,
}

impl Pipeline {
    /// Run parse → convert → reduce on a full input text.
    ///
    /// Executes end to end before returning; there is no partial result.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        let nfa = parser::parse(text)?;
        let dfa = subset::subset_construction(&nfa);
        let minimized = minimize::minimize(&dfa);
        Ok(Pipeline { nfa, dfa, minimized })
    }
}
