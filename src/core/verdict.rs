//! Directional feedback about a guess.
//!
//! A `Verdict` locates the hidden *target* relative to a guess, not the
//! guess relative to the target: `Higher` means "the target is higher
//! than your guess". This orientation is the shared contract between the
//! duel helpers that produce verdicts and the engine that consumes them.

use serde::{Deserialize, Serialize};

/// Where the hidden target lies relative to a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The target is above the guess.
    Higher,
    /// The target is below the guess.
    Lower,
    /// The guess hit the target.
    Correct,
}

impl Verdict {
    /// Did this verdict end the round?
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Verdict::Higher => "higher",
            Verdict::Lower => "lower",
            Verdict::Correct => "correct",
        };
        f.write_str(name)
    }
}
