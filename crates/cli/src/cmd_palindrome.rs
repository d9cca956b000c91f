// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strops palindrome` command implementation.

use strops::cli::{OutputFormat, PalindromeArgs};
use strops::config::Config;
use strops::error::ExitCode;
use strops::palindrome;

/// Run the `strops palindrome` command.
pub fn run(args: &PalindromeArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let fold_case = args.fold_case || config.palindrome.fold_case;
    let result = if fold_case {
        palindrome::is_palindrome_folded(&args.text)
    } else {
        palindrome::is_palindrome(&args.text)
    };
    tracing::debug!(fold_case, result, "palindrome check");

    match args.output.unwrap_or(config.output.format) {
        OutputFormat::Text => println!("{result}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "input": args.text,
                "fold_case": fold_case,
                "palindrome": result,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(ExitCode::Success)
}
