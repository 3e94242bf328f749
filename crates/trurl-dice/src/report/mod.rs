//! Rendering resolved rolls into display text.
//!
//! Every resolved roll renders to a [`RollOutcome`]: a description of what
//! was rolled, a one-line summary, and a verbose listing of every die.
//! Text carries highlight markup from [`markup`].

pub mod markup;

use serde::Serialize;

use crate::dice::{ExplosionChain, GroupedChains};
use crate::resolution::{ChanceRoll, FateRoll, StorytellerRoll, SumRoll, TargetRoll, Verdict};
use markup::{Highlight, bold, paint};

/// Separator between the draws of one explosion chain.
pub const CHAIN_SEPARATOR: &str = "→";

/// The rendered result of a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollOutcome {
    /// What was rolled, e.g. "5 dice (10-again, rote)".
    pub description: String,
    /// The headline result.
    pub summary: String,
    /// Every die drawn.
    pub verbose: String,
}

/// Something that renders to a [`RollOutcome`].
pub trait Report {
    /// Render this result.
    fn report(&self) -> RollOutcome;
}

impl Report for SumRoll {
    fn report(&self) -> RollOutcome {
        RollOutcome {
            description: format!("{}d{}", self.pool.count, self.pool.sides),
            summary: bold(self.total()),
            verbose: bracket(self.rolls.iter().map(i32::to_string)),
        }
    }
}

impl Report for TargetRoll {
    fn report(&self) -> RollOutcome {
        let target = self.pool.target;
        let dice = self.rolls.iter().map(|&v| {
            let highlight = if v >= target {
                Highlight::Neutral
            } else {
                Highlight::Muted
            };
            paint(highlight, v)
        });
        RollOutcome {
            description: format!("{}d{} at TN {}", self.pool.count, self.pool.sides, target),
            summary: format!(
                "[Successes: {}, Failed: {}]",
                bold(self.successes),
                self.failures
            ),
            verbose: bracket(dice),
        }
    }
}

impl Report for FateRoll {
    fn report(&self) -> RollOutcome {
        let total = self.total();
        let summary = if total > 0 {
            bold(format!("+{total}"))
        } else {
            total.to_string()
        };
        let glyphs: String = self
            .rolls
            .iter()
            .map(|v| match v.signum() {
                1 => "[+]",
                -1 => "[-]",
                _ => "[ ]",
            })
            .collect();
        RollOutcome {
            description: format!("{}dF", self.rolls.len()),
            summary,
            verbose: glyphs,
        }
    }
}

impl Report for ChanceRoll {
    fn report(&self) -> RollOutcome {
        let verdict = self.verdict();
        let (summary, highlight) = match verdict {
            Verdict::ExceptionalSuccess | Verdict::Success => (bold(verdict), Highlight::Neutral),
            Verdict::DramaticFailure => (paint(Highlight::Danger, verdict), Highlight::Danger),
            Verdict::Failure => (verdict.to_string(), Highlight::Muted),
        };
        RollOutcome {
            description: "a chance die".to_string(),
            summary,
            verbose: bracket(std::iter::once(paint(highlight, self.value))),
        }
    }
}

impl Report for StorytellerRoll {
    fn report(&self) -> RollOutcome {
        RollOutcome {
            description: self.description(),
            summary: self.summary(),
            verbose: self
                .passes
                .iter()
                .map(|pass| self.render_pass(pass))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl StorytellerRoll {
    fn description(&self) -> String {
        let mut qualifiers = Vec::new();
        if self.pool.explode <= 10 {
            qualifiers.push(format!("{}-again", self.pool.explode));
        }
        if self.pool.rote {
            qualifiers.push("rote".to_string());
        }

        let mut desc = format!("{} dice", self.pool.count);
        if !qualifiers.is_empty() {
            desc.push_str(&format!(" ({})", qualifiers.join(", ")));
        }
        desc
    }

    fn summary(&self) -> String {
        let verdict = self.verdict();
        match verdict {
            Verdict::ExceptionalSuccess | Verdict::Success => format!(
                "{verdict}: {} {}",
                bold(self.successes),
                if self.successes == 1 { "success" } else { "successes" }
            ),
            Verdict::DramaticFailure => format!(
                "{}: {} {}",
                paint(Highlight::Danger, verdict),
                self.botches,
                if self.botches == 1 { "botch" } else { "botches" }
            ),
            Verdict::Failure => verdict.to_string(),
        }
    }

    fn render_pass(&self, pass: &GroupedChains) -> String {
        bracket(pass.iter().map(|chain| self.render_chain(chain)))
    }

    fn render_chain(&self, chain: &ExplosionChain) -> String {
        // Thresholds above i32::MAX cannot be met by a d10.
        let target = i32::try_from(self.pool.target).unwrap_or(i32::MAX);
        let last = if chain.last() >= target {
            Highlight::Neutral
        } else if chain.last() == 1 && self.botches > 0 {
            Highlight::Danger
        } else {
            Highlight::Muted
        };

        chain
            .rerolled()
            .iter()
            .map(|v| paint(Highlight::Ongoing, v))
            .chain(std::iter::once(paint(last, chain.last())))
            .collect::<Vec<_>>()
            .join(CHAIN_SEPARATOR)
    }
}

fn bracket(items: impl Iterator<Item = String>) -> String {
    format!("[{}]", items.collect::<Vec<_>>().join(" "))
}
