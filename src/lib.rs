//! # hilo-engine
//!
//! Headless guessing engine for a 0-100 number duel game with two modes:
//! the computer hunts a number the player thought of, or two players duel
//! with one choosing and one guessing.
//!
//! ## Design Principles
//!
//! 1. **Pure values**: belief state is a chain of immutable snapshots;
//!    feedback application derives a new state, never mutates shared ones.
//!
//! 2. **Injected randomness**: every random draw flows through a
//!    caller-owned `GameRng`, so a fixed seed reproduces a full round.
//!
//! 3. **Failures as data**: bad input and contradictory feedback are
//!    ordinary values (`InputError`, the `invalid` flag), never panics.
//!    Both are round-scoped and recovered by starting a new round.
//!
//! ## Modules
//!
//! - `core`: difficulty presets, verdicts, RNG, board bounds
//! - `engine`: the human-like computer guesser and its belief state
//! - `duel`: validation, comparison, and range helpers for two players
//! - `round`: headless round drivers tying the pieces together

pub mod core;
pub mod duel;
pub mod engine;
pub mod round;

// Re-export commonly used types
pub use crate::core::{clamp_to_board, Difficulty, GameRng, Verdict, GUESS_MAX, GUESS_MIN};

pub use crate::engine::{next_guess, thinking_delay, Guess, MessageWindow, SearchState};

pub use crate::duel::{compare_guess, narrow_range, swap_roles, validate_number, InputError, Range, Role};

pub use crate::round::{AiRound, DuelRound, Exchange, GuessOutcome, RoundOutcome};
