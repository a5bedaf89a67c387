//! Guessing-engine benchmarks: single-guess cost and full-round cost.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hilo_engine::{next_guess, AiRound, Difficulty, GameRng, SearchState};

fn bench_next_guess(c: &mut Criterion) {
    c.bench_function("next_guess_full_range", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| {
            let mut state = SearchState::new(Difficulty::Medium);
            black_box(next_guess(&mut state, &mut rng))
        });
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("ai_round_all_secrets", |b| {
        b.iter(|| {
            for secret in (0..=100).step_by(10) {
                let mut round = AiRound::new(Difficulty::Medium, secret as u64);
                black_box(round.play(secret));
            }
        });
    });
}

criterion_group!(benches, bench_next_guess, bench_full_round);
criterion_main!(benches);
