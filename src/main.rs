use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crossfill::{
    error::Result,
    grid::{parse_structure, parse_wordlist},
    render::{to_report, to_text},
    solver::{
        heuristics::{
            FirstUnassigned, LeastConstraining, Lexicographic, MrvDegree, Shuffled,
            ValueOrdering, VariableSelection,
        },
        stats::render_stats_table,
        Solver, SolverConfig,
    },
};

/// Fill a crossword grid from a word list.
#[derive(Debug, Parser)]
#[command(name = "crossfill", version)]
struct Args {
    /// Grid structure file: '_' for open cells, anything else blocked.
    structure: PathBuf,
    /// Word list file, one candidate per line.
    words: PathBuf,
    /// Use the naive first-unassigned / lexicographic orderings instead of
    /// MRV and least-constraining-value.
    #[arg(long)]
    naive: bool,
    /// Re-run arc-consistency propagation around each assignment.
    #[arg(long)]
    propagate: bool,
    /// Shuffle candidate order with this seed (overrides value ordering).
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after expanding this many search nodes.
    #[arg(long)]
    node_budget: Option<u64>,
    /// Print search statistics to stderr.
    #[arg(long)]
    stats: bool,
    /// Emit the solution as JSON instead of a rendered grid.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let structure = fs::read_to_string(&args.structure)?;
    let wordlist = fs::read_to_string(&args.words)?;

    let graph = parse_structure(&structure)?;
    let vocabulary = parse_wordlist(&wordlist);

    let variable: Box<dyn VariableSelection> = if args.naive {
        Box::new(FirstUnassigned)
    } else {
        Box::new(MrvDegree)
    };
    let value: Box<dyn ValueOrdering> = match (args.seed, args.naive) {
        (Some(seed), _) => Box::new(Shuffled::new(seed)),
        (None, true) => Box::new(Lexicographic),
        (None, false) => Box::new(LeastConstraining),
    };
    let solver = Solver::new(variable, value).with_config(SolverConfig {
        maintain_arc_consistency: args.propagate,
        node_budget: args.node_budget,
    });

    let (solution, stats) = solver.solve(&graph, &vocabulary);
    if args.stats {
        eprintln!("{}", render_stats_table(&stats));
    }

    match solution {
        Some(assignment) => {
            if args.json {
                let report = to_report(&graph, &assignment);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", to_text(&graph, &assignment));
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            if stats.budget_exhausted {
                eprintln!("Search budget exhausted before a conclusion.");
            } else {
                println!("No solution.");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
