//! Difficulty presets for the computer guesser.
//!
//! Difficulty controls the maximum deviation from the ideal midpoint
//! the guesser allows itself when it decides to guess "randomly":
//!
//! - `Easy`   → ±3 (sloppier, takes longer to find the target)
//! - `Medium` → ±2
//! - `Hard`   → ±1 (close to an exact binary search)

use serde::{Deserialize, Serialize};

/// Difficulty preset, fixed at round creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All presets, in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Maximum deviation from the ideal midpoint for random guesses.
    #[must_use]
    pub const fn max_deviation(self) -> i32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 2,
            Difficulty::Hard => 1,
        }
    }

    /// Parse a difficulty name.
    ///
    /// Unrecognized names fall back to `Medium`, so a stale or garbled
    /// settings value can never break round creation.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
