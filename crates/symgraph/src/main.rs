use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use symgraph::commands;
use symgraph::config::SymgraphConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "symgraph",
    about = "Resolve analyzer symbol paths into a cross-repository code graph"
)]
#[command(version, propagate_version = true)]
struct Cli {
    /// Config file (defaults to $SYMGRAPH_CONFIG, then .symgraph/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one unit's analyzer output into graph JSON
    Graph {
        /// Source unit JSON file
        #[arg(long)]
        unit: PathBuf,

        /// Analyzer output (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print output
        #[arg(long)]
        pretty: bool,
    },

    /// Convert many units in parallel
    Batch {
        /// JSON list of {"unit": ..., "input": "path"} jobs
        #[arg(long)]
        jobs: PathBuf,

        /// Pretty-print output
        #[arg(long)]
        pretty: bool,
    },

    /// Drop requirements that have no resolved repository
    Prune {
        /// Requirement list (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print output
        #[arg(long)]
        pretty: bool,
    },
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: resets the SIGPIPE disposition to its default; no memory is touched.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn init_tracing(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    // stdout carries JSON output; logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("symgraph={level}")));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = SymgraphConfig::discover(cli.config.as_deref())?;
    match cli.command {
        Commands::Graph {
            unit,
            input,
            pretty,
        } => commands::graph::run(&config, &unit, input.as_deref(), pretty)?,
        Commands::Batch { jobs, pretty } => {
            if commands::batch::run(&config, &jobs, pretty)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Prune { input, pretty } => {
            commands::prune::run(&config, input.as_deref(), pretty)?
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    reset_sigpipe();
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
