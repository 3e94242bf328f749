//! Dice-rolling commands.

use trurl_dice::{ChanceDie, Fate, Report, SimpleSum, TargetNumber};

use super::flags::{Variant, parse_storyteller};
use crate::dispatch::Context;
use crate::error::CommandResult;

/// `roll <count> <sides> [target]`: a sum, or a target-number count.
pub fn roll(ctx: &mut Context<'_>) -> CommandResult<()> {
    ctx.check_params(2, Some(3))?;

    let count: u32 = ctx.param(0)?;
    let sides: u32 = ctx.param(1)?;

    let outcome = if ctx.params.len() == 3 {
        let target: i32 = ctx.param(2)?;
        TargetNumber {
            count,
            sides,
            target,
        }
        .roll(ctx.rng)?
        .report()
    } else {
        SimpleSum { count, sides }.roll(ctx.rng)?.report()
    };

    ctx.reply_roll(&outcome);
    Ok(())
}

/// `fate`: four FATE dice.
pub fn fate(ctx: &mut Context<'_>) -> CommandResult<()> {
    ctx.check_params(0, Some(0))?;

    let outcome = Fate::default().roll(ctx.rng)?.report();
    ctx.reply_roll(&outcome);
    Ok(())
}

/// `wod <count> [n] [flags]`: a classic storyteller pool. `wod 0` is a chance die.
pub fn wod(ctx: &mut Context<'_>) -> CommandResult<()> {
    ctx.check_params(1, None)?;

    if ctx.params.len() == 1 && ctx.param::<u32>(0)? == 0 {
        return chance(ctx);
    }

    let pool = parse_storyteller(ctx.params, Variant::Classic)?;
    let outcome = pool.roll(ctx.rng)?.report();
    ctx.reply_roll(&outcome);
    Ok(())
}

/// `chance`: a single chance die. Parameters are ignored.
pub fn chance(ctx: &mut Context<'_>) -> CommandResult<()> {
    let outcome = ChanceDie::default().roll(ctx.rng)?.report();
    ctx.reply_roll(&outcome);
    Ok(())
}

/// `scion <count> [n] [flags]`: a botch-tracking storyteller pool.
pub fn scion(ctx: &mut Context<'_>) -> CommandResult<()> {
    ctx.check_params(1, None)?;

    let pool = parse_storyteller(ctx.params, Variant::Scion)?;
    let outcome = pool.roll(ctx.rng)?.report();
    ctx.reply_roll(&outcome);
    Ok(())
}
