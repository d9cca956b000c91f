// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! String utilities: palindrome checks and run-length compression.
//!
//! ```
//! assert!(strops::is_palindrome("madam"));
//! assert_eq!(strops::compress("aaabbc"), "a3b2c");
//! assert_eq!(strops::expand("a3b2c").unwrap(), "aaabbc");
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod discovery;
pub mod error;
pub mod palindrome;
pub mod rle;


pub use palindrome::{is_palindrome, is_palindrome_folded};
pub use rle::{ExpandError, Run, compress, expand, runs};
