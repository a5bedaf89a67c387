//! Belief state for the computer guesser.
//!
//! ## SearchState
//!
//! A value snapshot of everything the guesser believes about the hidden
//! target: the still-possible `[low, high]` bounds, how many guesses it
//! has made, and what it guessed last. Feedback application never mutates
//! a state in place; it derives a fresh snapshot, so a round is a chain of
//! immutable values and the caller can keep any of them around safely.
//!
//! ## Contradiction
//!
//! Feedback is supplied by a human and can lie. When accumulated verdicts
//! leave no possible target (`low > high`) the derived state carries
//! `invalid = true` instead of panicking; callers check it after every
//! update and offer a round reset.

use serde::{Deserialize, Serialize};

use super::messages::MessageWindow;
use crate::core::{clamp_to_board, Difficulty, Verdict, GUESS_MAX, GUESS_MIN};

/// Immutable belief-state snapshot for one computer-guesser round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Inclusive lower bound of the still-possible targets.
    pub low: i32,

    /// Inclusive upper bound of the still-possible targets.
    pub high: i32,

    /// Guesses made so far this round.
    pub guess_count: u32,

    /// Most recent guess emitted, if any.
    pub last_guess: Option<i32>,

    /// Difficulty preset, fixed at creation.
    pub difficulty: Difficulty,

    /// Maximum midpoint deviation, resolved from `difficulty` at creation.
    pub max_deviation: i32,

    /// Recently used thinking-message indices.
    pub recent_messages: MessageWindow,

    /// Set once feedback has contradicted itself (`low > high`).
    pub invalid: bool,
}

impl SearchState {
    /// Create a fresh state for a new round: full `[0, 100]` range,
    /// no guesses yet.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            low: GUESS_MIN,
            high: GUESS_MAX,
            guess_count: 0,
            last_guess: None,
            difficulty,
            max_deviation: difficulty.max_deviation(),
            recent_messages: MessageWindow::new(),
            invalid: false,
        }
    }

    /// Width of the current range (`high - low`).
    #[must_use]
    pub fn range(&self) -> i32 {
        self.high - self.low
    }

    /// Ideal midpoint of the current range, halves rounding up.
    #[must_use]
    pub fn midpoint(&self) -> i32 {
        (self.low + self.high + 1) / 2
    }

    /// Derive the next snapshot from a verdict about `guess`.
    ///
    /// Bumps the guess count, remembers the guess, narrows the bounds
    /// (`Correct` leaves them alone; the round is over), clamps into
    /// `[0, 100]`, and flags a contradiction if the range emptied.
    #[must_use]
    pub fn after_feedback(&self, verdict: Verdict, guess: i32) -> Self {
        let mut next = self.clone();
        next.guess_count = self.guess_count + 1;
        next.last_guess = Some(guess);

        match verdict {
            Verdict::Higher => next.low = next.low.max(guess + 1),
            Verdict::Lower => next.high = next.high.min(guess - 1),
            Verdict::Correct => {}
        }

        next.low = clamp_to_board(next.low);
        next.high = clamp_to_board(next.high);

        if next.low > next.high {
            next.invalid = true;
        }

        next
    }
}
