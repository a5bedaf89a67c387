//! Comparison and range arithmetic for the two-player duel.
//!
//! The duel has no AI, but spectators see a "possible range" display
//! that narrows under exactly the same rules the computer guesser uses.
//! `compare_guess` produces the verdict, `Range::narrowed` folds it into
//! the display, and a collapsed-then-contradicted range is the duel's
//! equivalent of the guesser's `invalid` flag.

use serde::{Deserialize, Serialize};

use crate::core::{Verdict, GUESS_MAX, GUESS_MIN};

/// Inclusive interval of still-possible targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub low: i32,
    pub high: i32,
}

impl Range {
    /// The full playable board, `[0, 100]`.
    pub const FULL: Range = Range {
        low: GUESS_MIN,
        high: GUESS_MAX,
    };

    /// Create a range.
    #[must_use]
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// No value satisfies the accumulated verdicts.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Exactly one candidate left.
    #[must_use]
    pub const fn pinned_value(&self) -> Option<i32> {
        if self.low == self.high {
            Some(self.low)
        } else {
            None
        }
    }

    /// Fold a verdict about `guess` into this range.
    ///
    /// `Correct` collapses the range to the now-known value.
    #[must_use]
    pub fn narrowed(self, guess: i32, verdict: Verdict) -> Self {
        match verdict {
            Verdict::Higher => Range::new(self.low.max(guess + 1), self.high),
            Verdict::Lower => Range::new(self.low, self.high.min(guess - 1)),
            Verdict::Correct => Range::new(guess, guess),
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Compare a guess against the secret.
///
/// The verdict locates the *target*: `Higher` means the secret is above
/// the guess.
#[must_use]
pub fn compare_guess(guess: i32, secret: i32) -> Verdict {
    if guess < secret {
        Verdict::Higher
    } else if guess > secret {
        Verdict::Lower
    } else {
        Verdict::Correct
    }
}

/// Narrow a `[low, high]` range from a verdict about `guess`.
///
/// Free-function form of `Range::narrowed` for callers tracking raw
/// bounds.
#[must_use]
pub fn narrow_range(low: i32, high: i32, guess: i32, verdict: Verdict) -> Range {
    Range::new(low, high).narrowed(guess, verdict)
}
