//! Chance-die resolution: a single d10 when the pool is empty.

use serde::Serialize;

use crate::dice::{Die, DieSource};
use crate::error::DiceResult;
use crate::resolution::Verdict;

/// A single die with a success band at the top and a dramatic-failure band at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChanceDie {
    /// The die rolled.
    pub die: Die,
    /// Faces at or above this value succeed.
    pub success_at: i32,
    /// Faces at or below this value are dramatic failures.
    pub dramatic_at: i32,
}

impl Default for ChanceDie {
    fn default() -> Self {
        Self {
            die: Die::D10,
            success_at: 10,
            dramatic_at: 1,
        }
    }
}

/// The result of a [`ChanceDie`] roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChanceRoll {
    /// What was rolled.
    pub die: ChanceDie,
    /// The face rolled.
    pub value: i32,
}

impl ChanceDie {
    /// Roll the die.
    pub fn roll(self, src: &mut dyn DieSource) -> DiceResult<ChanceRoll> {
        let value = self.die.roll(src)?;
        Ok(ChanceRoll { die: self, value })
    }
}

impl ChanceRoll {
    /// The headline result.
    pub fn verdict(&self) -> Verdict {
        if self.value >= self.die.success_at {
            Verdict::Success
        } else if self.value <= self.die.dramatic_at {
            Verdict::DramaticFailure
        } else {
            Verdict::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SequenceSource;

    fn verdict_for(face: u32) -> Verdict {
        let mut src = SequenceSource::new(vec![face]);
        ChanceDie::default().roll(&mut src).unwrap().verdict()
    }

    #[test]
    fn ten_succeeds() {
        assert_eq!(verdict_for(10), Verdict::Success);
    }

    #[test]
    fn one_is_dramatic() {
        assert_eq!(verdict_for(1), Verdict::DramaticFailure);
    }

    #[test]
    fn middle_faces_fail() {
        for face in 2..=9 {
            assert_eq!(verdict_for(face), Verdict::Failure, "face {face}");
        }
    }
}
