//! Command line argument parsing for Sentiscope CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::ml::svm::Penalty;

/// Sentiscope - movie-review sentiment classification and fit diagnostics
#[derive(Parser, Debug, Clone)]
#[command(name = "sentiscope")]
#[command(about = "Train and evaluate a TF-IDF + linear SVM sentiment classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SentimentArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", env = "SENTISCOPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SentimentArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on an 80/10/10 split and diagnose bias and variance
    Diagnose(DiagnoseArgs),

    /// Train and test on a class-balanced 50/50 split
    Balanced(BalancedArgs),
}

/// Options shared by every run. Unset options fall back to the configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Dataset CSV file (columns `review` and `sentiment`)
    #[arg(short, long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Split seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Regularization penalty
    #[arg(short, long)]
    pub penalty: Option<Penalty>,

    /// Regularization strength C (> 0)
    #[arg(short = 'C', long = "c", value_name = "C")]
    pub c: Option<f64>,
}

/// Arguments for the diagnosis run
#[derive(Parser, Debug, Clone)]
pub struct DiagnoseArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for the class-balanced run
#[derive(Parser, Debug, Clone)]
pub struct BalancedArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Seed of the final test-set shuffle
    #[arg(long)]
    pub shuffle_seed: Option<u64>,
}
