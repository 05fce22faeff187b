//! radial-order CLI entry point.
//!
//! Reads a JSON page list, prints the optimized order annotated with
//! `displayOrder`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use radial_order::radial::{self, OptimizationState, Score};
use radial_order::{DEFAULT_STEP_BUDGET, Error, OptimizeConfig, Result, parse_pages};

/// Crossing-minimizing circular order for a set of linked pages.
#[derive(Parser, Debug)]
#[command(
    name = "radial-order",
    version = env!("RADIAL_ORDER_VERSION"),
    about = "Crossing-minimizing circular order for a set of linked pages"
)]
struct Cli {
    /// Input JSON page list (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Run incremental mode with the default per-step budget (1000 ms)
    #[arg(long = "incremental")]
    incremental: bool,

    /// Run incremental mode with this per-step budget in milliseconds
    #[arg(long = "step-budget-ms")]
    step_budget_ms: Option<u64>,

    /// Stop after this many steps even if the search is not complete
    #[arg(long = "max-steps")]
    max_steps: Option<usize>,

    /// Print crossing count and average link distance before and after
    #[arg(long = "metrics")]
    metrics: bool,

    /// Log search progress to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("radial_order={level}"))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(buf)
        }
    }
}

fn format_score(label: &str, score: &Score) -> String {
    format!(
        "{label}: crossings={} avg_distance={:.3}\n",
        score.crossings, score.avg_distance
    )
}

fn execute(cli: &Cli) -> Result<String> {
    let text = read_input(cli.input.as_ref())?;
    let pages = parse_pages(&text)?;
    let mut config = match cli.step_budget_ms {
        Some(ms) => OptimizeConfig::incremental(Duration::from_millis(ms)),
        None if cli.incremental => OptimizeConfig::incremental(DEFAULT_STEP_BUDGET),
        None => OptimizeConfig::new(),
    };
    config.max_steps = cli.max_steps;

    let mut state = OptimizationState::new(pages);
    let before = state.score();
    info!(
        pages = state.order.len(),
        batch = config.is_batch(),
        "optimizing"
    );
    let summary = radial::run(&mut state, &config);
    info!(
        steps = summary.steps,
        improvements = summary.improvements,
        "done"
    );

    if cli.metrics {
        let after = state.score();
        let mut report = format_score("input", &before);
        report.push_str(&format_score("optimized", &after));
        return Ok(report);
    }
    let mut json = serde_json::to_string_pretty(&state.display_order())?;
    json.push('\n');
    Ok(json)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rendered = match execute(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path.display(), e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
