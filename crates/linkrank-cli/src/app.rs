//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank the pages of an HTML corpus by random-surfer PageRank"
)]
pub struct Cli {
    /// Directory containing the corpus .html pages
    pub corpus: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// YAML config file (defaults to the user config directory)
    #[arg(long, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub rank: RankArgs,
}

/// Overrides for the configured ranking parameters
#[derive(clap::Args)]
pub struct RankArgs {
    /// Probability of following a link rather than jumping
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Number of random-walk samples
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Per-page convergence tolerance for power iteration
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Iteration cap for power iteration
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Seed for the random walk
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
