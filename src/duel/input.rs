//! Input validation for secrets and guesses.
//!
//! The sole gate for raw text entering the duel mode. Everything a player
//! types goes through `validate_number` before any comparison; failures
//! are data the caller shows inline, never faults.

use serde::{Deserialize, Serialize};

use crate::core::{GUESS_MAX, GUESS_MIN};

/// Why a raw input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputError {
    /// Blank after trimming.
    Empty,
    /// Not an integer literal.
    NotAnInteger,
    /// Integer, but outside `[0, 100]`.
    OutOfRange,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            InputError::Empty => "enter a number",
            InputError::NotAnInteger => "whole numbers only",
            InputError::OutOfRange => "the number must be between 0 and 100",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for InputError {}

/// Validate a raw string as an integer in `[0, 100]`.
///
/// Trims surrounding whitespace first. Returns the parsed value, or the
/// first applicable rejection reason.
pub fn validate_number(raw: &str) -> Result<i32, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value: i32 = trimmed.parse().map_err(|_| InputError::NotAnInteger)?;

    if !(GUESS_MIN..=GUESS_MAX).contains(&value) {
        return Err(InputError::OutOfRange);
    }

    Ok(value)
}
