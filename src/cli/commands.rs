//! Command implementations for Sentiscope CLI.

use anyhow::Context;
use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SentimentConfig;
use crate::error::Result;
use crate::experiment::{load_dataset, run_balanced, run_diagnosis};

/// Execute a CLI command.
pub fn execute_command(args: SentimentArgs) -> Result<()> {
    match &args.command {
        Command::Diagnose(diagnose_args) => diagnose(diagnose_args, &args),
        Command::Balanced(balanced_args) => balanced(balanced_args, &args),
    }
}

/// Start from the configuration file (or defaults) and apply command-line overrides.
pub fn resolve_config(model: &ModelArgs, cli_args: &SentimentArgs) -> Result<SentimentConfig> {
    let mut config = match &cli_args.config {
        Some(path) => SentimentConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => SentimentConfig::default(),
    };

    if let Some(data) = &model.data {
        config.data_path = data.clone();
    }
    if let Some(seed) = model.seed {
        config.split_seed = seed;
    }
    if let Some(penalty) = model.penalty {
        config.svm.penalty = penalty;
    }
    if let Some(c) = model.c {
        config.svm.c = c;
    }

    config.validate()?;
    Ok(config)
}

/// Run the three-way split diagnosis.
fn diagnose(args: &DiagnoseArgs, cli_args: &SentimentArgs) -> Result<()> {
    let config = resolve_config(&args.model, cli_args)?;
    info!(
        "Diagnosing {} with {} penalty, C={}",
        config.data_path.display(),
        config.svm.penalty,
        config.svm.c
    );

    let dataset = load_dataset(&config)?;
    let run = run_diagnosis(&dataset, &config)?;
    output_diagnosis(&run, cli_args)
}

/// Run the class-balanced evaluation.
fn balanced(args: &BalancedArgs, cli_args: &SentimentArgs) -> Result<()> {
    let mut config = resolve_config(&args.model, cli_args)?;
    if let Some(shuffle_seed) = args.shuffle_seed {
        config.shuffle_seed = shuffle_seed;
    }
    info!(
        "Balanced evaluation of {} with {} penalty, C={}",
        config.data_path.display(),
        config.svm.penalty,
        config.svm.c
    );

    let dataset = load_dataset(&config)?;
    let run = run_balanced(&dataset, &config)?;
    output_balanced(&run, cli_args)
}
