//! Property tests for the guessing engine and duel helpers.
//!
//! The engine's invariants hold for arbitrary valid states and arbitrary
//! feedback sequences, not just the scripted paths; proptest hunts for
//! the corners.

use proptest::prelude::*;

use hilo_engine::{
    compare_guess, narrow_range, next_guess, AiRound, Difficulty, GameRng, RoundOutcome,
    SearchState, Verdict,
};

fn any_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

/// An arbitrary valid (non-contradicted) belief state.
fn any_valid_state() -> impl Strategy<Value = SearchState> {
    (any_difficulty(), 0..=100i32, 0..=100i32, 0u32..30, proptest::option::of(0..=100i32)).prop_map(
        |(difficulty, a, b, guess_count, last_guess)| {
            let mut state = SearchState::new(difficulty);
            state.low = a.min(b);
            state.high = a.max(b);
            state.guess_count = guess_count;
            state.last_guess = last_guess;
            state
        },
    )
}

proptest! {
    /// Guesses always land inside the current bounds.
    #[test]
    fn prop_guess_within_bounds(mut state in any_valid_state(), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let (low, high) = (state.low, state.high);

        let guess = next_guess(&mut state, &mut rng);
        prop_assert!((low..=high).contains(&guess.value));
    }

    /// `Higher` never decreases `low`; `Lower` never increases `high`;
    /// every update bumps the guess count and records the guess.
    #[test]
    fn prop_feedback_monotone(
        state in any_valid_state(),
        guess in 0..=100i32,
        verdict in prop_oneof![Just(Verdict::Higher), Just(Verdict::Lower), Just(Verdict::Correct)],
    ) {
        let after = state.after_feedback(verdict, guess);

        prop_assert!(after.low >= state.low);
        prop_assert!(after.high <= state.high);
        prop_assert_eq!(after.guess_count, state.guess_count + 1);
        prop_assert_eq!(after.last_guess, Some(guess));
        prop_assert!((0..=100).contains(&after.low));
        prop_assert!((0..=100).contains(&after.high));
    }

    /// For honest verdicts derived from a fixed secret, `guess_count`
    /// after N updates is N, `low <= high` holds after every update, and
    /// the secret never leaves the range.
    #[test]
    fn prop_consistent_feedback_never_contradicts(
        difficulty in any_difficulty(),
        secret in 0..=100i32,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = SearchState::new(difficulty);
        let mut updates = 0u32;

        loop {
            let guess = next_guess(&mut state, &mut rng);
            let verdict = compare_guess(guess.value, secret);
            if verdict.is_correct() {
                break;
            }

            state = state.after_feedback(verdict, guess.value);
            updates += 1;

            prop_assert!(!state.invalid);
            prop_assert!(state.low <= state.high);
            prop_assert!((state.low..=state.high).contains(&secret));
            prop_assert_eq!(state.guess_count, updates);

            prop_assert!(updates <= 101, "round failed to terminate");
        }
    }

    /// A driven round against any secret ends in a win.
    #[test]
    fn prop_ai_round_wins(
        difficulty in any_difficulty(),
        secret in 0..=100i32,
        seed in any::<u64>(),
    ) {
        let mut round = AiRound::with_rng(difficulty, GameRng::new(seed));
        match round.play(secret) {
            RoundOutcome::Won { attempts } => {
                prop_assert!((1..=101).contains(&attempts));
                prop_assert_eq!(round.transcript().len() as u32, attempts);
            }
            RoundOutcome::Contradiction => prop_assert!(false, "honest round contradicted"),
        }
    }

    /// Range narrowing agrees with the engine's feedback rules on the
    /// directional verdicts. Guesses stay off the board edges: the engine
    /// clamps its bounds back onto the board, the raw duel range does not.
    #[test]
    fn prop_narrow_range_matches_feedback(
        state in any_valid_state(),
        guess in 1..=99i32,
        verdict in prop_oneof![Just(Verdict::Higher), Just(Verdict::Lower)],
    ) {
        let range = narrow_range(state.low, state.high, guess, verdict);
        let after = state.after_feedback(verdict, guess);

        prop_assert_eq!((range.low, range.high), (after.low, after.high));
    }
}
