use std::fmt::Display;

use clap::{Parser, Subcommand};
use dfa_canon::prelude::*;
use owo_colors::OwoColorize;
use tracing::{debug, info, trace};
use tracing_subscriber::{filter, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "dfa-canon",
    about = "Removes unreachable states from deterministic finite automata and minimizes them"
)]
struct Cli {
    /// Raises the log level, given once for debug and twice for trace output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Canonicalizes the built-in example automaton
    Example,
    /// Canonicalizes a randomly generated automaton
    Random {
        #[arg(short = 'q', long, default_value = "8", value_parser = clap::value_parser!(u32).range(1..))]
        states: u32,
        #[arg(short = 's', long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=26))]
        symbols: u8,
        /// Probability with which a transition is defined
        #[arg(short = 't', long, default_value = "0.9")]
        density: f64,
        /// Probability with which a state is accepting
        #[arg(short = 'f', long, default_value = "0.3")]
        accepting: f64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => filter::LevelFilter::INFO,
        1 => filter::LevelFilter::DEBUG,
        _ => filter::LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(env_filter))
        .init();

    trace!("setup {level} logging");
}

fn example_dfa() -> Result<Dfa<&'static str, char>, MalformedAutomaton> {
    Dfa::new(
        ["q0", "q1", "q2", "q3"],
        ['0', '1'],
        [
            ("q0", '0', "q1"),
            ("q0", '1', "q2"),
            ("q1", '0', "q0"),
            ("q1", '1', "q3"),
            ("q2", '0', "q3"),
            ("q2", '1', "q0"),
            ("q3", '0', "q3"),
            ("q3", '1', "q3"),
        ],
        "q0",
        ["q3"],
    )
}

fn print_section<D: Display>(title: &str, dfa: &D) {
    println!("\n{}\n{}", title.bold().underline(), dfa);
}

fn canonicalize_and_print<Q: StateId, S: Symbol>(mut dfa: Dfa<Q, S>) {
    print_section("Original automaton", &dfa);

    let before = dfa.size();
    dfa.prune();
    print_section("After removing unreachable states", &dfa);

    let pruned = dfa.size();
    let min = dfa.minimize();
    print_section("Minimized automaton", &min);

    info!(
        original = before,
        reachable = pruned,
        minimal = min.size(),
        "canonicalization finished"
    );
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::Example => {
            debug!("using the built-in example");
            canonicalize_and_print(example_dfa()?);
        }
        Command::Random {
            states,
            symbols,
            density,
            accepting,
            seed,
        } => {
            let mut generator = RandomDfa::new(states as usize, symbols as usize)
                .with_transition_density(density)
                .with_accepting_density(accepting);
            if let Some(seed) = seed {
                generator = generator.with_seed(seed);
            }
            debug!("drawing a random automaton with {generator:?}");
            canonicalize_and_print(generator.generate());
        }
    }

    Ok(())
}
