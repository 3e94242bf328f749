//! Parameter grammar shared by the storyteller commands.
//!
//! `<count> [<n>] [flags...]`: the count is required, an optional second
//! number sets the explode threshold, and the remaining tokens are flags in
//! any order. Tokens that are not recognised flags are ignored.

use trurl_dice::Storyteller;
use trurl_dice::dice::MIN_EXPLODE;

use crate::error::{CommandError, CommandResult};

/// Which storyteller command is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `wod`: exceptional threshold, damage bonus, rote.
    Classic,
    /// `scion`: botch tracking, enhancement bonus, no rote.
    Scion,
}

/// Parse storyteller parameters into a pool.
pub fn parse_storyteller(params: &[String], variant: Variant) -> CommandResult<Storyteller> {
    let count = params
        .first()
        .ok_or(CommandError::ParameterCount { min: 1, max: None })?
        .parse::<u32>()?;

    let mut pool = match variant {
        Variant::Classic => Storyteller::classic(count),
        Variant::Scion => Storyteller::scion(count),
    };

    let explode = params.get(1).and_then(|p| p.parse::<i32>().ok());
    let flags = match explode {
        Some(n) => {
            if i64::from(n) < i64::from(MIN_EXPLODE) {
                return Err(CommandError::LimitExceeded {
                    limit: "explode",
                    max: MIN_EXPLODE,
                });
            }
            pool.explode = n.unsigned_abs();
            &params[2..]
        }
        None => &params[1..],
    };

    for flag in flags {
        match variant {
            Variant::Classic => apply_classic(&mut pool, flag),
            Variant::Scion => apply_scion(&mut pool, flag),
        }
    }

    Ok(pool)
}

fn apply_classic(pool: &mut Storyteller, flag: &str) {
    if flag == "rote" {
        pool.rote = true;
        return;
    }
    let Some((key, value)) = numeric_flag(flag) else {
        return;
    };
    match key {
        'a' => pool.autos = value,
        'd' => pool.per_hit_bonus = value,
        't' => pool.target = value,
        'e' => pool.exceptional = (value != 0).then_some(value),
        _ => {}
    }
}

fn apply_scion(pool: &mut Storyteller, flag: &str) {
    let Some((key, value)) = numeric_flag(flag) else {
        return;
    };
    match key {
        'a' => pool.autos = value,
        'e' => pool.per_hit_bonus = value,
        't' => pool.target = value,
        _ => {}
    }
}

/// Split `x123` into `('x', 123)`.
fn numeric_flag(flag: &str) -> Option<(char, u32)> {
    let mut chars = flag.chars();
    let key = chars.next()?;
    let value = chars.as_str().parse().ok()?;
    Some((key, value))
}
