// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strops expand` command implementation.

use strops::cli::{ExpandArgs, OutputFormat};
use strops::config::Config;
use strops::error::ExitCode;
use strops::rle;

/// Run the `strops expand` command.
///
/// Malformed input is returned as an [`rle::ExpandError`], which `main`
/// reports with [`ExitCode::InvalidInput`].
pub fn run(args: &ExpandArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let expanded = rle::expand(&args.text)?;

    match args.output.unwrap_or(config.output.format) {
        OutputFormat::Text => println!("{expanded}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.text,
                "expanded": expanded,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ExitCode::Success)
}
