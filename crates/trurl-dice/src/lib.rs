//! Dice engine for the Trurl dice bot.
//!
//! Provides bounded dice primitives (plain, exploding and reroll-set
//! chains), resolvers for several tabletop systems (simple sums, target
//! numbers, storyteller pools, chance dice, FATE), and a formatter that
//! renders each result as highlighted chat text.

pub mod dice;
pub mod error;
pub mod report;
pub mod resolution;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dice::{Die, DieSequence, DieSource, ExplosionChain, GroupedChains};
pub use error::{DiceError, DiceResult};
pub use report::{Report, RollOutcome};
pub use resolution::{
    ChanceDie, ChanceRoll, Fate, FateRoll, SimpleSum, Storyteller, StorytellerRoll, SumRoll,
    TargetNumber, TargetRoll, Verdict,
};
