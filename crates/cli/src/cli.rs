//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

/// Palindrome checks and run-length compression for strings
///
/// Run without a command to print the built-in demonstration.
#[derive(Parser)]
#[command(name = "strops")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "STROPS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether text reads the same forward and backward
    Palindrome(PalindromeArgs),
    /// Run-length encode text
    Compress(CompressArgs),
    /// Decode run-length encoded text
    Expand(ExpandArgs),
}

#[derive(clap::Args)]
pub struct PalindromeArgs {
    /// Text to check
    pub text: String,

    /// Lowercase the text before comparing (not full Unicode case folding)
    #[arg(long)]
    pub fold_case: bool,

    /// Output format (default: from config, else text)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args)]
pub struct CompressArgs {
    /// Text to encode
    pub text: String,

    /// Output format (default: from config, else text)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args)]
pub struct ExpandArgs {
    /// Encoded text, e.g. a3b2c
    #[arg(value_name = "ENCODED")]
    pub text: String,

    /// Output format (default: from config, else text)
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
