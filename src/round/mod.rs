//! Headless round drivers.
//!
//! The UI sequences guesses, delays, and overlays; these drivers hold the
//! logic core of that sequencing so it can be exercised without a screen:
//!
//! - `AiRound` plays the computer guesser against a known secret,
//!   recording every exchange, until it wins or the feedback contradicts
//!   itself.
//! - `DuelRound` referees the two-player mode: validates guesses, issues
//!   verdicts, narrows the spectator range, and calls the range-collapse
//!   loss.
//!
//! Both keep a transcript in a persistent `im::Vector`, so snapshots of a
//! round's history share structure and clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameRng, Verdict, GUESS_MAX, GUESS_MIN};
use crate::duel::{compare_guess, validate_number, InputError, Range, Role};
use crate::engine::{next_guess, SearchState};

/// Hard cap on guesses per round.
///
/// Every truthful verdict removes at least the guessed value from the
/// range, so a round over 101 values ends well before this; the cap only
/// guards driver loops against a broken feedback source.
const MAX_GUESSES: u32 = 128;

/// One guess/verdict exchange, as shown in the history list.
///
/// Serializes for UI consumption; messages are static pool entries, so
/// there is no deserialization back into an `Exchange`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Exchange {
    pub guess: i32,
    pub message: &'static str,
    pub verdict: Verdict,
}

/// How a computer-guesser round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The guesser found the target.
    Won { attempts: u32 },
    /// The feedback contradicted itself; no target fits.
    Contradiction,
}

/// A computer-guesser round against a known secret.
///
/// Owns the belief-state chain, the RNG, and the transcript. The round
/// can be driven one exchange at a time (`step`) for UIs that interleave
/// thinking delays, or to completion (`play`) for tests and simulation.
#[derive(Clone, Debug)]
pub struct AiRound {
    state: SearchState,
    rng: GameRng,
    transcript: Vector<Exchange>,
    outcome: Option<RoundOutcome>,
}

impl AiRound {
    /// Start a round at the given difficulty with a seeded RNG.
    #[must_use]
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, GameRng::new(seed))
    }

    /// Start a round with a caller-supplied RNG.
    #[must_use]
    pub fn with_rng(difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            state: SearchState::new(difficulty),
            rng,
            transcript: Vector::new(),
            outcome: None,
        }
    }

    /// Current belief-state snapshot.
    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Every exchange so far, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &Vector<Exchange> {
        &self.transcript
    }

    /// The round's outcome, once it has one.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Play one exchange: guess, compare against `secret`, apply the
    /// verdict.
    ///
    /// Returns the outcome if this exchange ended the round. Calling
    /// `step` on a finished round returns the existing outcome unchanged.
    pub fn step(&mut self, secret: i32) -> Option<RoundOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        let guess = next_guess(&mut self.state, &mut self.rng);
        let verdict = compare_guess(guess.value, secret);
        self.transcript.push_back(Exchange {
            guess: guess.value,
            message: guess.message,
            verdict,
        });

        if verdict.is_correct() {
            self.outcome = Some(RoundOutcome::Won {
                attempts: self.state.guess_count + 1,
            });
            return self.outcome;
        }

        self.state = self.state.after_feedback(verdict, guess.value);
        if self.state.invalid {
            self.outcome = Some(RoundOutcome::Contradiction);
        }
        self.outcome
    }

    /// Drive the round to completion against `secret`.
    pub fn play(&mut self, secret: i32) -> RoundOutcome {
        for _ in 0..MAX_GUESSES {
            if let Some(outcome) = self.step(secret) {
                return outcome;
            }
        }
        // Unreachable with honest comparison; the cap turns a broken
        // feedback source into a contradiction instead of a spin.
        RoundOutcome::Contradiction
    }
}

/// Result of one submitted guess in the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guesser found the secret.
    Correct { attempts: u32 },
    /// Keep guessing; the spectator range has narrowed.
    Narrowed { verdict: Verdict, range: Range },
    /// Range collapse: the guesses/verdicts no longer fit any target.
    Contradiction,
}

/// Referee for one two-player round.
///
/// Tracks the secret, the spectator's possible range, and which seat is
/// guessing. The range-collapse loss fires at guess submission: once the
/// range is pinned to a single value, guessing anything else loses the
/// round immediately, matching the moment the AI mode flags `invalid`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelRound {
    secret: i32,
    chooser: Role,
    range: Range,
    guesses: u32,
    over: bool,
}

impl DuelRound {
    /// Start a round with a pre-validated secret.
    ///
    /// The secret must come through `validate_number`; values outside the
    /// board are rejected here as well so the invariant can't be skipped.
    pub fn new(secret: i32, chooser: Role) -> Result<Self, InputError> {
        if !(GUESS_MIN..=GUESS_MAX).contains(&secret) {
            return Err(InputError::OutOfRange);
        }
        Ok(Self {
            secret,
            chooser,
            range: Range::FULL,
            guesses: 0,
            over: false,
        })
    }

    /// Start a round from the chooser's raw input.
    pub fn from_input(raw: &str, chooser: Role) -> Result<Self, InputError> {
        let secret = validate_number(raw)?;
        Self::new(secret, chooser)
    }

    /// The seat currently guessing.
    #[must_use]
    pub fn guesser(&self) -> Role {
        self.chooser.swapped()
    }

    /// The seat that chose the secret.
    #[must_use]
    pub fn chooser(&self) -> Role {
        self.chooser
    }

    /// The spectator's still-possible range.
    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Guesses submitted so far.
    #[must_use]
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Has the round ended (win or contradiction)?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Submit a raw guess from the guesser.
    ///
    /// Validation failures leave the round untouched so the player can
    /// retype immediately. A valid guess is compared, the range narrowed,
    /// and collapse conditions turned into `Contradiction`.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, InputError> {
        let guess = validate_number(raw)?;

        // Only one candidate left: guessing anything else is the loss
        // condition, decided before the chooser even answers.
        if let Some(only) = self.range.pinned_value() {
            if guess != only {
                self.over = true;
                return Ok(GuessOutcome::Contradiction);
            }
        }

        self.guesses += 1;
        let verdict = compare_guess(guess, self.secret);
        self.range = self.range.narrowed(guess, verdict);

        if verdict.is_correct() {
            self.over = true;
            return Ok(GuessOutcome::Correct {
                attempts: self.guesses,
            });
        }

        if self.range.is_empty() {
            self.over = true;
            return Ok(GuessOutcome::Contradiction);
        }

        Ok(GuessOutcome::Narrowed {
            verdict,
            range: self.range,
        })
    }

    /// Set up the next round: seats swap, the new chooser provides a
    /// fresh secret.
    pub fn next_round(&self, raw_secret: &str) -> Result<Self, InputError> {
        Self::from_input(raw_secret, self.chooser.swapped())
    }
}
