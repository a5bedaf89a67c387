//! The human-like guesser.
//!
//! Structurally this is a binary search over `[low, high]`, but a pure
//! midpoint bisection reads as mechanical. The guesser layers controlled
//! randomness on top: early guesses may jump off-center by up to the
//! difficulty's deviation, mid-round guesses mostly get a ±1 wobble, and
//! once the range is narrow all randomness is dropped so no attempt is
//! wasted. Every guess stays inside the current bounds and never repeats
//! the previous guess.

use super::messages::pick_message;
use super::state::SearchState;
use crate::core::GameRng;

/// Chance of an off-center guess while the round is young (0-2 guesses).
const EARLY_OFFSET_CHANCE: f64 = 0.40;

/// Chance of an off-center guess mid-round (3-5 guesses).
const MID_OFFSET_CHANCE: f64 = 0.20;

/// Chance of an off-center guess late in the round (6+ guesses).
const LATE_OFFSET_CHANCE: f64 = 0.08;

/// Bounds of the simulated thinking pause, in milliseconds.
const THINKING_DELAY_MS: std::ops::Range<u64> = 700..1200;

/// One emitted guess: the value and its flavor message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guess {
    /// The guessed value, always within the state's bounds.
    pub value: i32,
    /// Flavor message to show alongside the guess.
    pub message: &'static str,
}

/// Produce the next guess for the current belief state.
///
/// The guess is always within `[state.low, state.high]` and never equal
/// to `state.last_guess`. Message recency bookkeeping on `state` is the
/// only part of it this call touches.
pub fn next_guess(state: &mut SearchState, rng: &mut GameRng) -> Guess {
    let range = state.range();
    let mid = state.midpoint();

    let value = if range <= 1 {
        // One or two candidates left; take the one we didn't just say.
        if state.last_guess == Some(state.low) {
            state.high
        } else {
            state.low
        }
    } else if range <= 3 {
        // Precision phase: no randomness once this narrow.
        mid
    } else {
        let offset_chance = match state.guess_count {
            0..=2 => EARLY_OFFSET_CHANCE,
            3..=5 => MID_OFFSET_CHANCE,
            _ => LATE_OFFSET_CHANCE,
        };

        let mut value = if rng.gen_bool(offset_chance) {
            mid + rng.gen_range_inclusive(-state.max_deviation..=state.max_deviation)
        } else {
            // Slight imprecision: ±1 wobble, half the time none at all.
            // Small ranges skip it so progress isn't thrown away.
            let wobble = if range > 6 {
                match rng.gen_range(0..4) {
                    0 => -1,
                    3 => 1,
                    _ => 0,
                }
            } else {
                0
            };
            mid + wobble
        };

        value = value.clamp(state.low, state.high);

        // Saying the same number twice in a row looks robotic and can
        // stall the round; nudge one step away from the midpoint.
        if state.last_guess == Some(value) {
            value = if value >= mid { value - 1 } else { value + 1 };
            value = value.clamp(state.low, state.high);
        }

        value
    };

    let message = pick_message(&mut state.recent_messages, range, state.guess_count, rng);

    Guess { value, message }
}

/// Random pause before revealing a guess, in milliseconds.
///
/// Purely cosmetic pacing for the presentation layer; uniform in
/// `[700, 1200)`.
pub fn thinking_delay(rng: &mut GameRng) -> u64 {
    rng.gen_range_u64(THINKING_DELAY_MS)
}
