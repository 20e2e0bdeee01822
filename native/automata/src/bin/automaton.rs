//! Command-line front end: load an automaton description and test words
//! against it.

use std::borrow::Cow;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use automata::automaton::loader;
use automata::{State, subset_construction};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "automaton")]
#[command(about = "Test words against a finite automaton and determinize it")]
#[command(version)]
struct Cli {
    /// Automaton description file
    file: PathBuf,

    /// Words to test
    words: Vec<String>,

    /// Print the subset construction and test words against its DFA
    #[arg(short, long)]
    determinize: bool,

    /// Log each rejection cause and determinization step
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let automaton = loader::load(&cli.file)
        .with_context(|| format!("could not load {}", cli.file.display()))?;

    println!("{automaton}");
    println!("Is deterministic: {}", automaton.is_deterministic());

    let automaton = if cli.determinize {
        let determinized = subset_construction(&automaton);
        println!("\nDeterministic equivalent:\n{}", determinized.automaton());
        println!("Subsets:");
        for (state, subset) in determinized.automaton().states().iter().zip(determinized.subsets()) {
            let members: Vec<&str> = subset
                .iter()
                .filter_map(|id| automaton.state(id))
                .map(State::name)
                .collect();
            println!(" - {} = {{{}}}", state.name(), members.join(", "));
        }
        Cow::Owned(determinized.into_automaton())
    } else {
        Cow::Borrowed(&automaton)
    };

    for word in &cli.words {
        println!("\nTesting word: {word}");
        match automaton.run(word).rejection() {
            None => println!("Result: Accepted"),
            Some(cause) => println!("Result: Rejected ({cause})"),
        }
    }

    Ok(())
}
