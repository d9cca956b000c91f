// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in demonstration, printed when `strops` runs without a command.

use std::io::{self, Write};

use crate::palindrome::is_palindrome;
use crate::rle::compress;

/// Input for the palindrome line.
pub const PALINDROME_INPUT: &str = "madam";

/// Input for the compression line.
pub const COMPRESS_INPUT: &str = "aaabbcdddddfffff";

/// Write the two demo lines: the palindrome result, then the compressed string.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", is_palindrome(PALINDROME_INPUT))?;
    writeln!(out, "{}", compress(COMPRESS_INPUT))?;
    Ok(())
}
