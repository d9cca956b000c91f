// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strops compress` command implementation.

use strops::cli::{CompressArgs, OutputFormat};
use strops::config::Config;
use strops::error::ExitCode;
use strops::rle;

/// Run the `strops compress` command.
pub fn run(args: &CompressArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let compressed = rle::compress(&args.text);
    tracing::debug!(
        input_len = args.text.len(),
        output_len = compressed.len(),
        "compressed"
    );

    match args.output.unwrap_or(config.output.format) {
        OutputFormat::Text => println!("{compressed}"),
        OutputFormat::Json => {
            let runs: Vec<serde_json::Value> = rle::runs(&args.text)
                .map(|run| serde_json::json!({ "char": run.ch.to_string(), "len": run.len }))
                .collect();
            let output = serde_json::json!({
                "input": args.text,
                "compressed": compressed,
                "runs": runs,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ExitCode::Success)
}
