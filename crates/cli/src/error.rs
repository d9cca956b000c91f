// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes and error classification.

use crate::config::ConfigError;
use crate::rle::ExpandError;

/// Exit codes reported by the `strops` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// I/O failures and other unexpected errors.
    InternalError = 1,
    /// Malformed user input or configuration.
    InvalidInput = 2,
}

impl ExitCode {
    /// Pick the exit code for an error that reached `main`.
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.chain().any(|cause| {
            cause.is::<ExpandError>() || cause.is::<ConfigError>() || cause.is::<toml::de::Error>()
        }) {
            ExitCode::InvalidInput
        } else {
            ExitCode::InternalError
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
