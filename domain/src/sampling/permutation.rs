//! Permutation value object and rank decoding

/// One arrangement of a task's texts (Value Object).
///
/// Stored as an index vector: `indices[i]` is the position in the original
/// text list that lands at slot `i`. Permutations are ephemeral; they are
/// produced by the sampler and consumed within one task's aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// The identity permutation over `n` elements (input order unchanged)
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Number of elements the permutation arranges
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the permutation arranges zero elements
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether this permutation leaves the input order unchanged
    pub fn is_identity(&self) -> bool {
        self.indices.iter().enumerate().all(|(slot, &i)| slot == i)
    }

    /// The underlying index vector
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Reorder `items` according to this permutation.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.indices.iter().map(|&i| items[i].clone()).collect()
    }

    /// Decode a permutation rank over `n` elements.
    ///
    /// Ranks index the symmetric group in lexicographic order through the
    /// factorial number system: rank 0 is the identity, rank `n! - 1` the
    /// full reversal. `rank` must be below `n!`.
    pub(crate) fn from_rank(mut rank: u128, n: usize) -> Self {
        let mut digits = vec![0usize; n];
        for i in 1..=n {
            digits[n - i] = (rank % i as u128) as usize;
            rank /= i as u128;
        }
        Self::from_lehmer(&digits)
    }

    /// Decode a Lehmer code into a permutation.
    ///
    /// `digits[i]` must lie in `0..n - i`; each digit picks the next element
    /// from the list of positions not used yet.
    pub(crate) fn from_lehmer(digits: &[usize]) -> Self {
        let mut remaining: Vec<usize> = (0..digits.len()).collect();
        let indices = digits.iter().map(|&d| remaining.remove(d)).collect();
        Self { indices }
    }
}
