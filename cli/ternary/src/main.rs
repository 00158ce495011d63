//! Ternary CLI: evaluate three-valued logic rules from the command line.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use ternary_core::{Engine, LogRetention, Trit};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use manifest::TernaryManifest;

#[derive(Parser)]
#[command(name = "ternary", version, about = "Three-valued logic rule engine")]
struct Cli {
    /// Path to a ternary.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Decision log retention ("unbounded" or an entry count)
    #[arg(long, global = true)]
    retention: Option<LogRetention>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter ternary.toml in the current directory
    Init,
    /// Evaluate a rule once
    Eval {
        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
        /// Rule name (case-sensitive)
        rule: String,
        /// Inputs: true/false/unknown, t/f/u, 1/-1/0, or +/-/?
        #[arg(allow_negative_numbers = true)]
        inputs: Vec<Trit>,
    },
    /// Evaluate a file of `RULE trit...` lines on one engine
    Batch {
        /// Print decisions and stats as JSON
        #[arg(long)]
        json: bool,
        /// Batch file path
        file: PathBuf,
    },
    /// List registered rules
    Rules,
    /// Show counters of a freshly configured engine (evaluations start at zero)
    Stats {
        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Tabulate a rule over every pair of trits
    TruthTable {
        /// Rule name (case-sensitive)
        rule: String,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` overrides the
/// default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let engine = || build_engine(&cwd, cli.config.as_deref(), cli.retention);

    match cli.command {
        Commands::Init => commands::init::run(&cwd),
        Commands::Eval { json, rule, inputs } => {
            commands::eval::run(&engine()?, &rule, &inputs, json)
        }
        Commands::Batch { json, file } => commands::batch::run(&engine()?, &file, json),
        Commands::Rules => commands::rules::run(&engine()?),
        Commands::Stats { json } => commands::stats::run(&engine()?, json),
        Commands::TruthTable { rule } => commands::truth_table::run(&engine()?, &rule),
    }
}

/// Build an engine from an explicit manifest, a discovered one, or defaults.
fn build_engine(
    cwd: &Path,
    config: Option<&Path>,
    retention: Option<LogRetention>,
) -> anyhow::Result<Engine> {
    let manifest = match config {
        Some(path) => TernaryManifest::load(path)?,
        None => match TernaryManifest::find_and_load(cwd)? {
            Some((manifest, path)) => {
                tracing::debug!(path = %path.display(), "loaded manifest");
                manifest
            }
            None => TernaryManifest::default(),
        },
    };
    manifest.build_engine(retention)
}
