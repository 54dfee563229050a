//! Injectable randomness for exploration-mode tie-breaking.

use rand::{Rng, RngCore};

/// Source of uniform index choices.
///
/// Implemented for every `rand::RngCore`, so a seeded
/// `rand::rngs::StdRng` gives reproducible selections. Tests may supply
/// their own scripted implementation.
pub trait RandomSource: Send {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: RngCore + Send> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}
