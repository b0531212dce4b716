//! Uniform sampling of distinct permutations

use super::permutation::Permutation;
use crate::core::error::DomainError;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Draws distinct orderings of a task's texts.
///
/// Disabled, or without a target count, the sampler yields only the identity
/// ordering. Enabled with a count, it draws that many pairwise-distinct
/// permutations uniformly from the full space of `n!` orderings. Sampling is
/// without replacement, so no ordering is evaluated twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationSampler {
    enabled: bool,
    count: Option<usize>,
}

impl PermutationSampler {
    /// Create a sampler
    pub fn new(enabled: bool, count: Option<usize>) -> Self {
        Self { enabled, count }
    }

    /// Sampler that always yields the identity ordering
    pub fn disabled() -> Self {
        Self::new(false, None)
    }

    /// Sample orderings for a group of `n` texts.
    ///
    /// Returns exactly one identity ordering when sampling is off or when
    /// `n <= 1` (a single text has a single ordering, for any count), and
    /// `count` distinct permutations otherwise. Requesting more orderings
    /// than `n!` is a `SampleSize` error.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<Permutation>, DomainError> {
        let count = match self.count {
            Some(c) if self.enabled && c > 0 => c,
            _ => return Ok(vec![Permutation::identity(n)]),
        };
        if n <= 1 {
            return Ok(vec![Permutation::identity(n)]);
        }

        match factorial(n) {
            Some(total) => {
                if count as u128 > total {
                    return Err(DomainError::SampleSize {
                        requested: count,
                        available: total,
                    });
                }
                match usize::try_from(total) {
                    Ok(total) => Ok(Self::sample_by_rank(n, count, total, rng)),
                    // n! exceeds the rank space; fall back to digit sampling.
                    Err(_) => Ok(Self::sample_by_digits(n, count, rng)),
                }
            }
            // n! overflows u128; the space dwarfs any representable count.
            None => Ok(Self::sample_by_digits(n, count, rng)),
        }
    }

    /// Sample with an optional seed; `None` seeds from OS entropy.
    pub fn sample_with_seed(
        &self,
        n: usize,
        seed: Option<u64>,
    ) -> Result<Vec<Permutation>, DomainError> {
        match seed {
            Some(seed) => self.sample(n, &mut StdRng::seed_from_u64(seed)),
            None => self.sample(n, &mut StdRng::from_os_rng()),
        }
    }

    /// Draw `count` distinct ranks out of `total` and decode each.
    fn sample_by_rank<R: Rng + ?Sized>(
        n: usize,
        count: usize,
        total: usize,
        rng: &mut R,
    ) -> Vec<Permutation> {
        index::sample(rng, total, count)
            .into_iter()
            .map(|rank| Permutation::from_rank(rank as u128, n))
            .collect()
    }

    /// Draw random Lehmer codes until `count` distinct permutations are
    /// collected. Only reached when `n!` is astronomically larger than any
    /// requestable count, so collisions are negligible and the seen-set is
    /// a guard, not a hot path.
    fn sample_by_digits<R: Rng + ?Sized>(n: usize, count: usize, rng: &mut R) -> Vec<Permutation> {
        let mut seen = HashSet::with_capacity(count);
        let mut sampled = Vec::with_capacity(count);
        while sampled.len() < count {
            let digits: Vec<usize> = (0..n).map(|i| rng.random_range(0..n - i)).collect();
            let permutation = Permutation::from_lehmer(&digits);
            if seen.insert(permutation.clone()) {
                sampled.push(permutation);
            }
        }
        sampled
    }
}

/// `n!` as a `u128`, or `None` on overflow (n >= 35)
pub(crate) fn factorial(n: usize) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, i| acc.checked_mul(i))
}
