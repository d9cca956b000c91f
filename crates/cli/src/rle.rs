// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-length compression.
//!
//! A run of two or more identical characters is written as the character
//! followed by its decimal length; a lone character is written bare. So
//! `"aaabbc"` becomes `"a3b2c"`.
//!
//! Digits in the input are copied through like any other character, which
//! makes the encoding ambiguous for such inputs: [`expand`] always reads
//! digits as counts.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// A maximal run of one repeated character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub ch: char,
    /// Always at least 1.
    pub len: usize,
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len > 1 {
            write!(f, "{}{}", self.ch, self.len)
        } else {
            write!(f, "{}", self.ch)
        }
    }
}

/// Iterator over the maximal runs of a string. See [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let ch = self.chars.next()?;
        let mut len = 1;
        while self.chars.next_if_eq(&ch).is_some() {
            len += 1;
        }
        Some(Run { ch, len })
    }
}

/// Split `s` into maximal runs, left to right.
pub fn runs(s: &str) -> Runs<'_> {
    Runs {
        chars: s.chars().peekable(),
    }
}

/// Run-length encode `s`.
pub fn compress(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for run in runs(s) {
        out.push(run.ch);
        if run.len > 1 {
            out.push_str(&run.len.to_string());
        }
    }
    out
}

/// Largest output, in bytes, that [`expand`] will produce.
pub const MAX_EXPANDED_BYTES: usize = 1 << 30;

/// Malformed run-length encoded input.
///
/// Offsets are byte offsets into the encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("count at offset {offset} has no character to repeat")]
    MissingSymbol { offset: usize },

    #[error("count for '{symbol}' at offset {offset} is zero")]
    ZeroCount { symbol: char, offset: usize },

    #[error("count for '{symbol}' at offset {offset} has a leading zero")]
    LeadingZero { symbol: char, offset: usize },

    #[error("count for '{symbol}' at offset {offset} is too large")]
    CountOverflow { symbol: char, offset: usize },

    #[error("expanding '{symbol}' at offset {offset} exceeds {MAX_EXPANDED_BYTES} bytes")]
    OutputTooLarge { symbol: char, offset: usize },
}

/// Decode a string produced by [`compress`].
///
/// Each token is a non-digit character followed by an optional decimal
/// count. A missing count means 1. Output is capped at
/// [`MAX_EXPANDED_BYTES`].
pub fn expand(encoded: &str) -> Result<String, ExpandError> {
    let mut out = String::new();
    let mut total: usize = 0;
    let mut tokens = encoded.char_indices().peekable();

    while let Some((offset, symbol)) = tokens.next() {
        if symbol.is_ascii_digit() {
            return Err(ExpandError::MissingSymbol { offset });
        }

        let count_start = offset + symbol.len_utf8();
        let mut count_end = count_start;
        while let Some((i, d)) = tokens.next_if(|(_, c)| c.is_ascii_digit()) {
            count_end = i + d.len_utf8();
        }

        let digits = &encoded[count_start..count_end];
        let count = if digits.is_empty() {
            1
        } else {
            parse_count(digits, symbol, count_start)?
        };

        let too_large = ExpandError::OutputTooLarge { symbol, offset };
        let run_bytes = count
            .checked_mul(symbol.len_utf8())
            .ok_or_else(|| too_large.clone())?;
        total = total
            .checked_add(run_bytes)
            .filter(|&n| n <= MAX_EXPANDED_BYTES)
            .ok_or_else(|| too_large.clone())?;
        out.try_reserve(run_bytes).map_err(|_| too_large)?;
        out.extend(std::iter::repeat_n(symbol, count));
    }

    Ok(out)
}

fn parse_count(digits: &str, symbol: char, offset: usize) -> Result<usize, ExpandError> {
    let count: usize = digits
        .parse()
        .map_err(|_| ExpandError::CountOverflow { symbol, offset })?;
    if count == 0 {
        return Err(ExpandError::ZeroCount { symbol, offset });
    }
    if digits.starts_with('0') {
        return Err(ExpandError::LeadingZero { symbol, offset });
    }
    Ok(count)
}

#[cfg(test)]
#[path = "rle_tests.rs"]
mod tests;
