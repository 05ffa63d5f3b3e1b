use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dense_simplex::algorithm::config::{SolverConfig, EFFORT_CUTOFF, MAX_ITERATIONS, TOLERANCE};
use dense_simplex::algorithm::strategy::pivot_rule::{MaxScaledRatio, SmallestRatio};
use dense_simplex::data::linear_program::problem::Problem;
use dense_simplex::io::import;

/// Solve a linear program with the dense tableau simplex method, showing every iteration.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// JSON file containing the problem description
    problem_file: PathBuf,

    /// Rule used to select the pivot element
    #[arg(long, value_enum, default_value_t = Rule::MaxScaledRatio)]
    rule: Rule,

    /// Maximum number of pivots
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,

    /// Abort once more than this many pivots have been applied
    #[arg(long, default_value_t = EFFORT_CUTOFF)]
    effort_cutoff: usize,

    /// Tolerance when reading the solution off the final tableau
    #[arg(long, default_value_t = TOLERANCE, value_parser = parse_tolerance, conflicts_with = "exact")]
    tolerance: f64,

    /// Compare exactly when reading the solution off the final tableau
    #[arg(long)]
    exact: bool,

    /// Print the solve output as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Rule {
    /// Largest objective coefficient times minimum ratio
    MaxScaledRatio,
    /// Smallest ratio over all profitable columns
    SmallestRatio,
}

fn main() {
    let opts = Opts::parse();
    init_logging();

    let problem: Problem<f64> = match import(&opts.problem_file) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("Couldn't import \"{}\": {}", opts.problem_file.to_string_lossy(), error);
            exit(1);
        },
    };

    let config = SolverConfig {
        max_iterations: opts.max_iterations,
        effort_cutoff: opts.effort_cutoff,
        tolerance: if opts.exact { 0f64 } else { opts.tolerance },
    };

    let result = match opts.rule {
        Rule::MaxScaledRatio => problem.solve_with::<MaxScaledRatio>(&config),
        Rule::SmallestRatio => problem.solve_with::<SmallestRatio>(&config),
    };
    let output = match result {
        Ok(output) => output,
        Err(error) => {
            eprintln!("Couldn't solve: {}", error);
            exit(1);
        },
    };

    if opts.json {
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(error) => {
                eprintln!("Couldn't write the output: {}", error);
                exit(1);
            },
        }
    } else {
        print!("{}", output);
    }
}

/// Accept only finite, nonnegative tolerances.
fn parse_tolerance(value: &str) -> Result<f64, String> {
    let tolerance = value.parse::<f64>().map_err(|error| error.to_string())?;
    if tolerance.is_finite() && tolerance >= 0f64 {
        Ok(tolerance)
    } else {
        Err(format!("expected a finite, nonnegative number, found {}", value))
    }
}

/// Log to stderr, filtered by `RUST_LOG`, warnings only by default.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr);
    // Only fails if a subscriber was installed already
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
