// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use strops::cli::{Cli, Command};
use strops::config::{self, Config};
use strops::demo;
use strops::discovery;
use strops::error::ExitCode;

mod cmd_compress;
mod cmd_expand;
mod cmd_palindrome;

fn init_logging() {
    let filter = EnvFilter::try_from_env("STROPS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> std::process::ExitCode {
    init_logging();

    match run() {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::for_error(&e).into()
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        demo::run(&mut std::io::stdout().lock())?;
        return Ok(ExitCode::Success);
    };

    let config = load_config(cli.config.as_ref())?;

    match command {
        Command::Palindrome(args) => cmd_palindrome::run(args, &config),
        Command::Compress(args) => cmd_compress::run(args, &config),
        Command::Expand(args) => cmd_expand::run(args, &config),
    }
}

/// Load the explicit config, else the discovered one, else defaults.
fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.clone()),
        None => discovery::find_config(&std::env::current_dir()?),
    };

    match path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(&path)
                .with_context(|| format!("failed to load {}", path.display()))
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}
