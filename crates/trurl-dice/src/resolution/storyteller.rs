//! Storyteller resolution: exploding d10 pools.
//!
//! Each die at or above the target number is a success, and each die at or
//! above the explode threshold is rolled again. The rote quality rerolls
//! every failed die once more. With botch tracking, a pool with no successes
//! and at least one 1 is a dramatic failure.

use serde::Serialize;

use crate::dice::{Die, DieSource, GroupedChains, explode, roll_n_exploding};
use crate::error::DiceResult;
use crate::resolution::{Verdict, count_at_or_above};

/// Parameters for a storyteller roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Storyteller {
    /// Number of dice in the pool.
    pub count: u32,
    /// Faces at or above this value roll again.
    pub explode: u32,
    /// Faces at or above this value are successes.
    pub target: u32,
    /// Successes needed for an exceptional success; `None` disables it.
    pub exceptional: Option<u32>,
    /// Successes always added to the result.
    pub autos: u32,
    /// Successes added only when at least one die succeeded.
    pub per_hit_bonus: u32,
    /// Reroll every failed die once.
    pub rote: bool,
    /// Report 1s as botches when nothing succeeded.
    pub botch_tracking: bool,
}

impl Default for Storyteller {
    fn default() -> Self {
        Self {
            count: 0,
            explode: 10,
            target: 8,
            exceptional: Some(5),
            autos: 0,
            per_hit_bonus: 0,
            rote: false,
            botch_tracking: false,
        }
    }
}

/// The result of a [`Storyteller`] roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorytellerRoll {
    /// What was rolled.
    pub pool: Storyteller,
    /// The first pass, followed by the rote pass when one was made.
    pub passes: Vec<GroupedChains>,
    /// Successes rolled on the dice, before bonuses.
    pub rolled: u32,
    /// Reported successes, including autos and the per-hit bonus.
    pub successes: u32,
    /// Botches counted; zero unless tracking is on and nothing succeeded.
    pub botches: u32,
    /// Whether the rolled successes reached the exceptional threshold.
    pub exceptional: bool,
}

impl Storyteller {
    /// A classic pool: 10-again, target 8, exceptional at 5, no botches.
    pub fn classic(count: u32) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// A scion pool: no exceptional threshold, botches tracked, never rote.
    pub fn scion(count: u32) -> Self {
        Self {
            count,
            exceptional: None,
            botch_tracking: true,
            ..Self::default()
        }
    }

    /// Roll the pool.
    pub fn roll(self, src: &mut dyn DieSource) -> DiceResult<StorytellerRoll> {
        // Both thresholds come from parsed u32 flags; values beyond a d10 never match.
        let threshold = i32::try_from(self.explode).unwrap_or(i32::MAX);
        let target = i32::try_from(self.target).unwrap_or(i32::MAX);

        let first = roll_n_exploding(src, self.count, Die::D10, threshold)?;
        let values: Vec<i32> = first.iter().flat_map(|c| c.iter()).collect();
        let mut rolled = count_at_or_above(&values, target);
        let failures = values.iter().filter(|v| **v < target).count();
        let botch_candidates = values.iter().filter(|v| **v == 1).count();

        let mut passes = vec![first];
        if self.rote {
            // Failures can outnumber the pool when the target is above the
            // explode threshold. Only the chain ceiling bounds this pass.
            let second = (0..failures)
                .map(|_| explode(src, Die::D10, threshold))
                .collect::<DiceResult<GroupedChains>>()?;
            let values: Vec<i32> = second.iter().flat_map(|c| c.iter()).collect();
            rolled += count_at_or_above(&values, target);
            passes.push(second);
        }

        let exceptional = self.exceptional.is_some_and(|t| rolled >= t);
        let botches = if self.botch_tracking && rolled == 0 {
            u32::try_from(botch_candidates).unwrap_or(u32::MAX)
        } else {
            0
        };
        let bonus = if rolled > 0 { self.per_hit_bonus } else { 0 };
        let successes = rolled.saturating_add(self.autos).saturating_add(bonus);

        tracing::debug!(
            count = self.count,
            rolled,
            successes,
            botches,
            exceptional,
            "storyteller roll resolved"
        );

        Ok(StorytellerRoll {
            pool: self,
            passes,
            rolled,
            successes,
            botches,
            exceptional,
        })
    }
}

impl StorytellerRoll {
    /// The headline result.
    pub fn verdict(&self) -> Verdict {
        if self.exceptional {
            Verdict::ExceptionalSuccess
        } else if self.successes > 0 {
            Verdict::Success
        } else if self.botches > 0 {
            Verdict::DramaticFailure
        } else {
            Verdict::Failure
        }
    }
}
