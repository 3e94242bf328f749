//! Error types for the dice engine.

/// Errors that can occur while rolling dice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// A fixed bound (dice count, die sides, reroll-set size, explode threshold) was violated.
    #[error("exceeded permitted {limit} (max {max})")]
    LimitExceeded {
        /// Name of the violated limit, as shown to users.
        limit: &'static str,
        /// The bound that applies to the limit.
        max: u32,
    },

    /// A die with no faces was requested.
    #[error("a die needs at least one side (got {sides})")]
    InvalidDie {
        /// The requested number of sides.
        sides: u32,
    },
}

impl DiceError {
    /// Shorthand for a [`DiceError::LimitExceeded`].
    pub fn limit(limit: &'static str, max: u32) -> Self {
        Self::LimitExceeded { limit, max }
    }
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
