//! CLI entrypoint for crowdsum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod commands;
mod progress;

use anyhow::{Context, Result, bail};
use clap::Parser;
use commands::Cli;
use crowdsum_application::{SummarizationParams, SummarizeTasksUseCase};
use crowdsum_infrastructure::{ConfigLoader, HttpSummarizationOracle, read_jsonl_records};
use progress::ProgressReporter;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("loading configuration")?
    };

    // CLI flags override the config file
    if let Some(endpoint) = &cli.endpoint {
        config.oracle.endpoint = endpoint.clone();
    }
    let mut params: SummarizationParams = config.aggregation.to_params();
    if let Some(count) = cli.permutations {
        params = params.with_permutations(count);
    }
    if let Some(seed) = cli.seed {
        params = params.with_seed(seed);
    }

    let input = match &cli.input {
        Some(path) => path,
        None => bail!("Input file is required. See --help."),
    };

    let records = read_jsonl_records(input)?;
    if records.is_empty() {
        bail!("{} contains no records", input.display());
    }
    info!("Loaded {} records from {}", records.len(), input.display());

    // === Dependency Injection ===
    // Create the infrastructure adapter (HTTP summarization oracle)
    let oracle = Arc::new(HttpSummarizationOracle::new(config.oracle.clone())?);

    // Ctrl-C abandons the run at the next task boundary
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let use_case = SummarizeTasksUseCase::new(oracle, params).with_cancellation(cancel);

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(records).await?
    } else {
        let reporter = ProgressReporter::new();
        use_case.execute_with_progress(records, &reporter).await?
    };

    let json = serde_json::to_string_pretty(&result)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote {} task results to {}", result.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
