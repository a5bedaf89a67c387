//! The computer guesser: belief state, guess selection, flavor messages.
//!
//! A round is a chain of immutable `SearchState` snapshots:
//!
//! ```text
//! created -> { guessing <-> updated } -> { won | invalid }
//! ```
//!
//! `next_guess` reads a snapshot (plus the caller's RNG) and emits a
//! guess with a flavor message; `SearchState::after_feedback` derives the
//! next snapshot from the player's verdict. Terminal states are a
//! `Correct` verdict (won) and a contradiction (`invalid`); from the
//! latter the only legal move is discarding the state and starting over.

pub mod guess;
pub mod messages;
pub mod state;

pub use guess::{next_guess, thinking_delay, Guess};
pub use messages::{MessageWindow, CLOSING_MESSAGES, THINKING_MESSAGES};
pub use state::SearchState;
