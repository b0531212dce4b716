//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for crowdsum
#[derive(Parser, Debug)]
#[command(name = "crowdsum")]
#[command(author, version, about = "Aggregate crowd-sourced text answers through a summarization oracle")]
#[command(long_about = r#"
crowdsum reads worker answers (one JSON record per line), groups them by
task, and asks a summarization endpoint to fuse each task's answers into one
representative text.

With --permutations N, each task's answers are additionally shuffled into N
distinct orderings; the oracle runs once per ordering and the outputs are
reduced by plurality vote.

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./crowdsum.toml   Project-level config
3. ~/.config/crowdsum/config.toml   Global config

Example:
  crowdsum answers.jsonl
  crowdsum --permutations 10 --seed 42 answers.jsonl
  crowdsum --endpoint http://gpu-box:8080/generate -o result.json answers.jsonl
"#)]
pub struct Cli {
    /// Input JSONL file of {"task", "worker", "text"} records
    pub input: Option<PathBuf>,

    /// Write the result JSON to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Generation endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Number of random input orderings to evaluate per task
    #[arg(short, long, value_name = "N")]
    pub permutations: Option<usize>,

    /// Seed for reproducible permutation sampling
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
