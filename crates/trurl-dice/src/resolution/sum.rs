//! Simple-sum resolution: roll a pool and total it.

use serde::Serialize;

use crate::dice::{Die, DieSequence, DieSource, roll_n};
use crate::error::DiceResult;

/// A pool of identical dice that is summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimpleSum {
    /// Number of dice.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
}

/// The result of a [`SimpleSum`] roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SumRoll {
    /// What was rolled.
    pub pool: SimpleSum,
    /// Individual faces in roll order.
    pub rolls: DieSequence,
}

impl SimpleSum {
    /// Roll the pool.
    pub fn roll(self, src: &mut dyn DieSource) -> DiceResult<SumRoll> {
        let rolls = roll_n(src, self.count, Die::Sided(self.sides))?;
        Ok(SumRoll { pool: self, rolls })
    }
}

impl SumRoll {
    /// Sum of all faces.
    pub fn total(&self) -> i64 {
        self.rolls.iter().map(|v| i64::from(*v)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SequenceSource;

    #[test]
    fn totals_every_face() {
        let mut src = SequenceSource::new(vec![3, 5, 6]);
        let roll = SimpleSum { count: 3, sides: 6 }.roll(&mut src).unwrap();
        assert_eq!(roll.rolls, vec![3, 5, 6]);
        assert_eq!(roll.total(), 14);
    }

    #[test]
    fn empty_pool_totals_zero() {
        let mut src = SequenceSource::new(vec![]);
        let roll = SimpleSum { count: 0, sides: 6 }.roll(&mut src).unwrap();
        assert!(roll.rolls.is_empty());
        assert_eq!(roll.total(), 0);
    }

    #[test]
    fn large_pool_does_not_overflow() {
        let mut src = SequenceSource::repeating(10_000);
        let roll = SimpleSum {
            count: 100,
            sides: 10_000,
        }
        .roll(&mut src)
        .unwrap();
        assert_eq!(roll.total(), 1_000_000);
    }
}
