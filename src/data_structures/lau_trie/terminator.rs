// Copyright (c) 2025 Moana Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unique per-string terminators.
//!
//! Every inserted string is closed by the delimiter followed by a fixed number
//! of base-256 digits encoding the insertion number. Each digit is stored as
//! the `char` with that code point (`U+0000..=U+00FF`), most significant digit
//! first. The fixed width keeps every terminator the same length, so no
//! wrapped suffix can ever be a prefix of another one.

use super::error::LauTrieError;

/// Number of base-256 digits following the delimiter.
pub const TERMINATOR_DIGITS: usize = 4;

/// Total terminator length in characters, delimiter included.
pub const TERMINATOR_LEN: usize = TERMINATOR_DIGITS + 1;

/// Number of distinct terminators the encoding can produce.
pub const TERMINATOR_CAPACITY: u64 = 1 << (8 * TERMINATOR_DIGITS);

/// Builds the terminator for insertion number `count`.
///
/// # Errors
///
/// Returns [`LauTrieError::CapacityExceeded`] once `count` no longer fits in
/// [`TERMINATOR_DIGITS`] digits.
pub fn unique_terminator(delimiter: char, count: u64) -> Result<[char; TERMINATOR_LEN], LauTrieError> {
    if count >= TERMINATOR_CAPACITY {
        return Err(LauTrieError::CapacityExceeded(count));
    }

    let mut terminator = [delimiter; TERMINATOR_LEN];
    let mut rest = count;
    for slot in terminator[1..].iter_mut().rev() {
        *slot = char::from((rest & 0xFF) as u8);
        rest >>= 8;
    }
    Ok(terminator)
}

/// Recovers the insertion number from a terminator produced by
/// [`unique_terminator`]. Returns `None` for malformed input.
pub fn decode_terminator(delimiter: char, terminator: &[char]) -> Option<u64> {
    let (first, digits) = terminator.split_first()?;
    if *first != delimiter || digits.len() != TERMINATOR_DIGITS {
        return None;
    }
    digits.iter().try_fold(0u64, |acc, &digit| {
        u8::try_from(u32::from(digit))
            .ok()
            .map(|byte| (acc << 8) | u64::from(byte))
    })
}
