//! Randomness for reward placement.
//!
//! The engine only ever asks for "an integer uniformly in `[0, bound)`", which is
//! captured by [`RandomSource`]. Every `rand` generator is a source, so production
//! code can hand in a `SmallRng` while tests use [`ScriptedSource`] to pin down
//! exactly where rewards land.

use rand::{Rng, RngCore};

/// Supplies uniformly distributed integers.
pub trait RandomSource {
    /// returns an integer uniformly in `[0, bound)`, `bound` is never zero
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Replays a fixed list of values, each reduced modulo the requested bound.
///
/// Once the list runs out every draw is zero, which makes [`shuffle`] leave the
/// remaining elements in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptedSource {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that replays `values` in order
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that always draws zero, so shuffles are the identity
    pub fn identity() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn consumed(&self) -> usize {
        self.cursor.min(self.values.len())
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: usize) -> usize {
        let value = self.values.get(self.cursor).copied().unwrap_or(0);
        self.cursor += 1;
        value % bound
    }
}

/// Shuffle a slice in place using Fisher-Yates.
///
/// For each `i` in `0..n - 1` an index `j` is drawn from `[i, n)` and the two
/// elements are swapped.
pub fn shuffle<T, R: RandomSource + ?Sized>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let j = i + rng.below(n - i);
        slice.swap(i, j);
    }
}
