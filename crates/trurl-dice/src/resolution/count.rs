//! Target-number resolution: count dice that meet a target.

use serde::Serialize;

use crate::dice::{Die, DieSequence, DieSource, roll_n};
use crate::error::DiceResult;
use crate::resolution::count_at_or_above;

/// A pool where each die at or above `target` is a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetNumber {
    /// Number of dice.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Lowest face that counts as a success.
    pub target: i32,
}

/// The result of a [`TargetNumber`] roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRoll {
    /// What was rolled.
    pub pool: TargetNumber,
    /// Individual faces in roll order.
    pub rolls: DieSequence,
    /// Faces at or above the target.
    pub successes: u32,
    /// Faces below the target.
    pub failures: u32,
}

impl TargetNumber {
    /// Roll the pool and count successes.
    pub fn roll(self, src: &mut dyn DieSource) -> DiceResult<TargetRoll> {
        let rolls = roll_n(src, self.count, Die::Sided(self.sides))?;
        let successes = count_at_or_above(&rolls, self.target);
        let failures = self.count - successes;
        Ok(TargetRoll {
            pool: self,
            rolls,
            successes,
            failures,
        })
    }
}
