//! Dice types, limits, and the random source they draw from.
//!
//! Every roll draws from a [`DieSource`]. Production code hands in a
//! [`StdRng`]; tests can script exact faces with a sequence source.

pub mod chain;
pub mod roll;

pub use chain::{ExplosionChain, GroupedChains};
pub use roll::{explode, explode_with_rerolls, roll_die, roll_n, roll_n_exploding};

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::DiceResult;

/// Maximum number of dice in a single roll.
pub const MAX_DICE: u32 = 100;

/// Maximum number of sides on a single die.
pub const MAX_SIDES: u32 = 10_000;

/// Maximum number of faces in a reroll set.
pub const MAX_REROLLS: usize = 6;

/// Lowest explode threshold the storyteller commands accept.
///
/// The engine does not enforce this floor itself; callers validate it
/// before exploding.
pub const MIN_EXPLODE: u32 = 8;

/// Hard ceiling on the number of draws in one explosion chain.
pub const MAX_CHAIN_LENGTH: usize = 1_000;

/// A flat sequence of rolled values.
pub type DieSequence = Vec<i32>;

/// A uniform source of die faces.
pub trait DieSource {
    /// Draw a value uniformly in `[1, sides]`. `sides` is always at least one.
    fn draw(&mut self, sides: u32) -> u32;
}

impl DieSource for StdRng {
    fn draw(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }
}

/// A die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// A die numbered `1..=sides`.
    Sided(u32),
    /// A FATE/FUDGE die showing -1, 0 or +1.
    Fudge,
}

impl Die {
    /// The ten-sided die used by storyteller pools.
    pub const D10: Self = Self::Sided(10);

    /// Returns the number of faces on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::Sided(n) => n,
            Self::Fudge => 3,
        }
    }

    /// Roll this die once.
    pub fn roll(self, src: &mut dyn DieSource) -> DiceResult<i32> {
        let face = roll_die(src, self.sides())?;
        // Faces are bounded by MAX_SIDES, so they always fit.
        let face = face as i32;
        Ok(match self {
            Self::Sided(_) => face,
            Self::Fudge => face - 2,
        })
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sided(n) => write!(f, "d{n}"),
            Self::Fudge => write!(f, "dF"),
        }
    }
}
