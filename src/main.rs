use clap::Parser;
use resolute::{cnf_reader, Config, LoaderConfig, Verdict};
use std::path::PathBuf;
use std::process::ExitCode;

/// Decide whether a CNF formula is satisfiable, by resolution refutation
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// The formula: one clause per line, like `p !q r`
    file: PathBuf,

    /// Simplify the formula with unit propagation before resolving
    #[arg(long)]
    unit_propagation: bool,

    /// Skip a leading `c ...` / `p cnf <vars> <clauses>` header
    #[arg(long)]
    dimacs_header: bool,

    /// Assume SAT once the resolution working set reaches this many clauses
    #[arg(long, value_name = "N")]
    clause_limit: Option<usize>,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Config {
            loader: LoaderConfig {
                dimacs_header: args.dimacs_header,
            },
            unit_propagation: args.unit_propagation,
            clause_limit: args.clause_limit,
        }
    }
}

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        // --help and --version
        Err(e) => e.exit(),
    };
    let config = Config::from(&args);

    let mut formula = match cnf_reader::read_from_file(&args.file, &config.loader) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("Error: failed to read formula: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Analyzing formula with {} symbols and {} clauses",
        formula.symbols().len(),
        formula.len()
    );
    let outcome = resolute::solve(&mut formula, &config);

    if let Some(propagation) = &outcome.propagation {
        println!(
            "Unit propagation fixed {} symbols and removed {} clauses{}",
            propagation.assigned.len(),
            propagation.clauses_removed,
            if propagation.conflict {
                ", finding a conflict"
            } else {
                ""
            }
        );
    }

    let result = &outcome.resolution;
    match result.verdict {
        Verdict::Sat => println!("Formula is SATISFIABLE"),
        Verdict::Unsat => println!("Formula is UNSATISFIABLE"),
    }
    if !result.saturated {
        eprintln!("Warning: resolution stopped before saturating; SAT is assumed, not proven");
    }

    ExitCode::SUCCESS
}
