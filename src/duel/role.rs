//! Player roles for the duel.
//!
//! One player chooses the secret, the other guesses; the roles swap
//! between rounds.

use serde::{Deserialize, Serialize};

/// One of the two duel seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    One,
    Two,
}

impl Role {
    /// The other seat.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Role::One => Role::Two,
            Role::Two => Role::One,
        }
    }

    /// 1-based seat number, as shown to players.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Role::One => 1,
            Role::Two => 2,
        }
    }

    /// Seat from a 1-based number, if valid.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Role::One),
            2 => Some(Role::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Swap chooser and guesser between rounds.
#[must_use]
pub const fn swap_roles(role: Role) -> Role {
    role.swapped()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_roles() {
        assert_eq!(swap_roles(Role::One), Role::Two);
        assert_eq!(swap_roles(Role::Two), Role::One);
    }

    #[test]
    fn test_swap_is_involution() {
        for role in [Role::One, Role::Two] {
            assert_eq!(swap_roles(swap_roles(role)), role);
        }
    }

    #[test]
    fn test_numbering() {
        assert_eq!(Role::One.number(), 1);
        assert_eq!(Role::Two.number(), 2);
        assert_eq!(Role::from_number(1), Some(Role::One));
        assert_eq!(Role::from_number(2), Some(Role::Two));
        assert_eq!(Role::from_number(3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Role::One.to_string(), "Player 1");
    }
}
