use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use detmin::{to_dot, Automaton, Pipeline};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Stage {
    Nfa,
    Dfa,
    Minimized,
}

#[derive(Parser, Debug)]
#[command(
    name = "detmin",
    about = "Convert an NFA description to an equivalent, reduced DFA"
)]
struct Cli {
    /// Automaton description file (see README for the line format)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Emit Graphviz DOT for one stage instead of the text summary
    #[arg(long, value_enum, value_name = "STAGE")]
    dot: Option<Stage>,
}

fn print_summary(label: &str, automaton: &Automaton) {
    println!(
        "{label}: {} states, {} transitions, initial {}",
        automaton.states.len(),
        automaton.transitions.len(),
        automaton.initial_state
    );
    for transition in &automaton.transitions {
        println!(
            "  {} --{}--> {}",
            automaton.states[transition.source].name,
            transition.symbol,
            automaton.states[transition.target].name
        );
    }
    let finals: Vec<&str> = automaton
        .states
        .iter()
        .filter(|s| s.is_final)
        .map(|s| s.name.as_str())
        .collect();
    println!("  final: {}", finals.join(", "));
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let run = Pipeline::from_text(&text)
        .with_context(|| format!("parsing {}", cli.input.display()))?;

    match cli.dot {
        Some(Stage::Nfa) => print!("{}", to_dot(&run.nfa)),
        Some(Stage::Dfa) => print!("{}", to_dot(&run.dfa)),
        Some(Stage::Minimized) => print!("{}", to_dot(&run.minimized)),
        None => {
            print_summary("NFA", &run.nfa);
            print_summary("DFA", &run.dfa);
            print_summary("reduced DFA", &run.minimized);
        }
    }

    Ok(())
}
