use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` keys drawn uniformly from `0..max`.
/// The same seed always produces the same sequence
pub struct RandomKeys {
    remaining: usize,
    max: i64,
    rng: Pcg64,
}

impl RandomKeys {
    pub fn new(num: usize, max: i64, seed: u64) -> RandomKeys {
        assert!(max > 0);
        RandomKeys {
            remaining: num,
            max,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomKeys {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(0..self.max))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomKeys {}

impl ExactSizeIterator for RandomKeys {}
