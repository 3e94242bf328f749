//! Roll resolvers: one per game system.
//!
//! - **Simple sum**: roll a pool and add it up
//! - **Target number**: count dice that meet a target
//! - **Storyteller**: exploding d10 pools with rote, botches and exceptional successes
//! - **Chance die**: a single d10 with narrow success and dramatic-failure bands
//! - **FATE**: four fudge dice summed to a ladder result

pub mod chance;
pub mod count;
pub mod fate;
pub mod storyteller;
pub mod sum;

pub use chance::{ChanceDie, ChanceRoll};
pub use count::{TargetNumber, TargetRoll};
pub use fate::{Fate, FateRoll};
pub use storyteller::{Storyteller, StorytellerRoll};
pub use sum::{SimpleSum, SumRoll};

use serde::Serialize;

/// The headline result of a pass/fail roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// A success that reached the exceptional threshold.
    ExceptionalSuccess,
    /// A standard success.
    Success,
    /// A failure with a botch.
    DramaticFailure,
    /// A standard failure.
    Failure,
}

impl Verdict {
    /// Returns true for either kind of success.
    pub fn is_success(self) -> bool {
        matches!(self, Self::ExceptionalSuccess | Self::Success)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExceptionalSuccess => write!(f, "Exceptional Success"),
            Self::Success => write!(f, "Success"),
            Self::DramaticFailure => write!(f, "Dramatic Failure"),
            Self::Failure => write!(f, "Failure"),
        }
    }
}

/// Count values at or above `target`.
pub(crate) fn count_at_or_above<'a>(
    values: impl IntoIterator<Item = &'a i32>,
    target: i32,
) -> u32 {
    let count = values.into_iter().filter(|v| **v >= target).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_display() {
        assert_eq!(
            Verdict::ExceptionalSuccess.to_string(),
            "Exceptional Success"
        );
        assert_eq!(Verdict::Success.to_string(), "Success");
        assert_eq!(Verdict::DramaticFailure.to_string(), "Dramatic Failure");
        assert_eq!(Verdict::Failure.to_string(), "Failure");
    }

    #[test]
    fn verdict_success_kinds() {
        assert!(Verdict::ExceptionalSuccess.is_success());
        assert!(Verdict::Success.is_success());
        assert!(!Verdict::DramaticFailure.is_success());
        assert!(!Verdict::Failure.is_success());
    }

    #[test]
    fn counts_inclusive_threshold() {
        assert_eq!(count_at_or_above(&[7, 8, 9, 10], 8), 3);
        assert_eq!(count_at_or_above(&[], 8), 0);
    }
}
