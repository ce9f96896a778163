//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for consultation results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every specialist's report
    Full,
    /// Only the merged summary
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for consilium
#[derive(Parser, Debug)]
#[command(name = "consilium")]
#[command(author, version, about = "Multi-specialist medical consultation orchestrator")]
#[command(long_about = r#"
Consilium routes one medical question to every configured specialist
agent in parallel, waits for each to answer, time out, or fail, and
merges the answered opinions into one combined result.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./consilium.toml    Project-level config
3. ~/.config/consilium/config.toml   Global config

Example:
  consilium "I see blood in my urine and urinate frequently. Which tests do I need?"
  consilium --language ko "소변에 피가 보입니다"
  consilium --health
"#)]
pub struct Cli {
    /// The question to route to the specialists
    pub question: Option<String>,

    /// Language hint forwarded to the specialists
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

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

    /// Probe every configured specialist and exit
    #[arg(long)]
    pub health: bool,

    /// Write a JSONL consultation transcript to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
