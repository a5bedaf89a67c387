//! Core engine types: difficulty presets, verdicts, RNG, board bounds.
//!
//! This module contains the fundamental building blocks shared by both
//! game modes. Feature modules (`engine`, `duel`, `round`) build on these.

pub mod difficulty;
pub mod rng;
pub mod verdict;

pub use difficulty::Difficulty;
pub use rng::GameRng;
pub use verdict::Verdict;

/// Lowest value a hidden target or guess may take.
pub const GUESS_MIN: i32 = 0;

/// Highest value a hidden target or guess may take.
pub const GUESS_MAX: i32 = 100;

/// Clamp a value into the playable `[GUESS_MIN, GUESS_MAX]` interval.
#[must_use]
pub const fn clamp_to_board(value: i32) -> i32 {
    if value < GUESS_MIN {
        GUESS_MIN
    } else if value > GUESS_MAX {
        GUESS_MAX
    } else {
        value
    }
}
