//! FATE/FUDGE resolution: four signed dice summed.

use serde::Serialize;

use crate::dice::{Die, DieSequence, DieSource, roll_n};
use crate::error::DiceResult;

/// A pool of fudge dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fate {
    /// Number of fudge dice; four in standard play.
    pub count: u32,
}

impl Default for Fate {
    fn default() -> Self {
        Self { count: 4 }
    }
}

/// The result of a [`Fate`] roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FateRoll {
    /// Faces in roll order, each -1, 0 or +1.
    pub rolls: DieSequence,
}

impl Fate {
    /// Roll the pool.
    pub fn roll(self, src: &mut dyn DieSource) -> DiceResult<FateRoll> {
        let rolls = roll_n(src, self.count, Die::Fudge)?;
        Ok(FateRoll { rolls })
    }
}

impl FateRoll {
    /// Sum of all faces.
    pub fn total(&self) -> i32 {
        self.rolls.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SequenceSource;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sums_signed_faces() {
        let mut src = SequenceSource::new(vec![3, 3, 1, 2]);
        let roll = Fate::default().roll(&mut src).unwrap();
        assert_eq!(roll.rolls, vec![1, 1, -1, 0]);
        assert_eq!(roll.total(), 1);
    }

    proptest! {
        #[test]
        fn total_is_on_the_ladder(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let roll = Fate::default().roll(&mut rng).unwrap();
            prop_assert_eq!(roll.rolls.len(), 4);
            prop_assert!((-4..=4).contains(&roll.total()));
        }
    }
}
