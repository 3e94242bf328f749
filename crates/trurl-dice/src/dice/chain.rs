//! Explosion chains: one die's reroll history.

use serde::Serialize;

/// The draws made for one initially-rolled die.
///
/// Every value in `rerolled` qualified for another draw; `last` is the value
/// that stopped the chain (or the draw that hit the length ceiling).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplosionChain {
    rerolled: Vec<i32>,
    last: i32,
}

/// One chain per initially-rolled die, in roll order.
pub type GroupedChains = Vec<ExplosionChain>;

impl ExplosionChain {
    /// Build a chain from the values that triggered a reroll and the final value.
    pub fn new(rerolled: Vec<i32>, last: i32) -> Self {
        Self { rerolled, last }
    }

    /// Build a chain from a list of draws, or `None` if the list is empty.
    pub fn from_values(values: &[i32]) -> Option<Self> {
        let (last, rerolled) = values.split_last()?;
        Some(Self::new(rerolled.to_vec(), *last))
    }

    /// Values that triggered another draw.
    pub fn rerolled(&self) -> &[i32] {
        &self.rerolled
    }

    /// The value that ended the chain.
    pub fn last(&self) -> i32 {
        self.last
    }

    /// Number of draws in the chain. Always at least one.
    pub fn draws(&self) -> usize {
        self.rerolled.len() + 1
    }

    /// All draws in order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.rerolled
            .iter()
            .copied()
            .chain(std::iter::once(self.last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_splits_last() {
        let chain = ExplosionChain::from_values(&[10, 10, 4]).unwrap();
        assert_eq!(chain.rerolled(), &[10, 10]);
        assert_eq!(chain.last(), 4);
        assert_eq!(chain.draws(), 3);
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![10, 10, 4]);
    }

    #[test]
    fn from_empty_values_is_none() {
        assert!(ExplosionChain::from_values(&[]).is_none());
    }

    #[test]
    fn single_draw_chain() {
        let chain = ExplosionChain::new(Vec::new(), 7);
        assert_eq!(chain.draws(), 1);
        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![7]);
    }
}
