// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Palindrome detection.
//!
//! Comparison is ordinal: two characters match only if they are the same
//! Unicode scalar value. Callers wanting case-insensitive matching can use
//! [`is_palindrome_folded`] or normalize the input themselves.

/// Returns true if `s` reads the same forward and backward.
///
/// The empty string and any single character are palindromes.
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Like [`is_palindrome`], but lowercases each character before comparing.
///
/// Characters whose lowercase form expands to several characters
/// (e.g. `'İ'`) are compared on their full expansion. This is lowercasing,
/// not full Unicode case folding: `"ß"` does not match `"SS"`.
pub fn is_palindrome_folded(s: &str) -> bool {
    let folded: String = s.chars().flat_map(char::to_lowercase).collect();
    is_palindrome(&folded)
}

#[cfg(test)]
#[path = "palindrome_tests.rs"]
mod tests;
