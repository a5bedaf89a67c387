//! Pure helpers for the two-player duel: validation, comparison, range
//! narrowing, role alternation.
//!
//! No AI here. The chooser's verdicts narrow the same `[0, 100]` interval
//! the computer guesser searches, so the two modes share the `Verdict`
//! contract and the contradiction semantics.

pub mod input;
pub mod range;
pub mod role;

pub use input::{validate_number, InputError};
pub use range::{compare_guess, narrow_range, Range};
pub use role::{swap_roles, Role};
