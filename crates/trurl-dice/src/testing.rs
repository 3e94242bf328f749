//! Scripted die sources for deterministic tests.

use crate::dice::DieSource;

/// A die source that returns faces from a predetermined sequence.
///
/// Panics when the sequence is exhausted, or when a scripted face does not
/// fit the die being rolled.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u32>,
    index: usize,
    repeat: bool,
}

impl SequenceSource {
    /// Create a source that yields `values` once, in order.
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            index: 0,
            repeat: false,
        }
    }

    /// Create a source that yields `value` forever.
    pub fn repeating(value: u32) -> Self {
        Self {
            values: vec![value],
            index: 0,
            repeat: true,
        }
    }

    /// Number of scripted values not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.index)
    }
}

impl DieSource for SequenceSource {
    fn draw(&mut self, sides: u32) -> u32 {
        let value = if self.repeat {
            self.values[0]
        } else {
            let value = self.values[self.index];
            self.index += 1;
            value
        };
        assert!(
            (1..=sides).contains(&value),
            "scripted face {value} does not fit a d{sides}"
        );
        value
    }
}
