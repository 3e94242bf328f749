//! Rolling primitives with bounds checking.

use super::chain::{ExplosionChain, GroupedChains};
use super::{
    Die, DieSequence, DieSource, MAX_CHAIN_LENGTH, MAX_DICE, MAX_REROLLS, MAX_SIDES,
};
use crate::error::{DiceError, DiceResult};

/// Roll a single die with `sides` faces.
pub fn roll_die(src: &mut dyn DieSource, sides: u32) -> DiceResult<u32> {
    if sides > MAX_SIDES {
        return Err(DiceError::limit("sides", MAX_SIDES));
    }
    if sides == 0 {
        return Err(DiceError::InvalidDie { sides });
    }
    Ok(src.draw(sides))
}

/// Roll `count` independent dice.
pub fn roll_n(src: &mut dyn DieSource, count: u32, die: Die) -> DiceResult<DieSequence> {
    check_count(count)?;
    (0..count).map(|_| die.roll(src)).collect()
}

/// Roll one die, rolling again while the value meets `threshold`.
///
/// The first draw is unconditional, so the chain is never empty.
pub fn explode(src: &mut dyn DieSource, die: Die, threshold: i32) -> DiceResult<ExplosionChain> {
    chain_while(src, die, |value| value >= threshold)
}

/// Roll one die, rolling again while the value is in `rerolls`.
pub fn explode_with_rerolls(
    src: &mut dyn DieSource,
    die: Die,
    rerolls: &[i32],
) -> DiceResult<ExplosionChain> {
    if rerolls.len() > MAX_REROLLS {
        // MAX_REROLLS is a small constant.
        return Err(DiceError::limit("rerolls", MAX_REROLLS as u32));
    }
    chain_while(src, die, |value| rerolls.contains(&value))
}

/// Roll `count` dice, exploding each at `threshold`.
pub fn roll_n_exploding(
    src: &mut dyn DieSource,
    count: u32,
    die: Die,
    threshold: i32,
) -> DiceResult<GroupedChains> {
    check_count(count)?;
    (0..count).map(|_| explode(src, die, threshold)).collect()
}

fn check_count(count: u32) -> DiceResult<()> {
    if count > MAX_DICE {
        return Err(DiceError::limit("dice", MAX_DICE));
    }
    Ok(())
}

fn chain_while(
    src: &mut dyn DieSource,
    die: Die,
    qualifies: impl Fn(i32) -> bool,
) -> DiceResult<ExplosionChain> {
    let mut rerolled = Vec::new();
    loop {
        let value = die.roll(src)?;
        if !qualifies(value) {
            return Ok(ExplosionChain::new(rerolled, value));
        }
        if rerolled.len() + 1 >= MAX_CHAIN_LENGTH {
            tracing::warn!(
                die = %die,
                draws = MAX_CHAIN_LENGTH,
                "explosion chain hit the length ceiling"
            );
            return Ok(ExplosionChain::new(rerolled, value));
        }
        rerolled.push(value);
    }
}
