//! Variation of information between two partitions.

use crate::{
    gmd::{Entropy, GeneralizedMergeDistance},
    Float, Partition, Result, Token,
};

/// The variation of information between `result` and `standard`.
///
/// This is the generalized merge distance where both operations cost the
/// change in entropy `h(x + y) - h(x) - h(y)`, with `h(v) = (v / n) ln(v / n)`
/// and `n` the number of distinct tokens of `standard`.
///
/// # Errors
///
/// See [`GeneralizedMergeDistance::distance`].
///
/// # Example
///
/// ```rust
/// use partition_distances::{metrics::variation_of_information, Partition};
///
/// let standard = Partition::new(vec![vec![1, 2], vec![3, 4]]);
/// let result = Partition::new(vec![vec![1, 2, 3, 4]]);
///
/// // One split of a set of 4 tokens into two halves.
/// let vi: f64 = variation_of_information(&result, &standard).unwrap();
/// assert!((vi - core::f64::consts::LN_2).abs() < 1e-12);
/// ```
pub fn variation_of_information<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> Result<U> {
    let entropy = Entropy::new(standard.num_distinct_tokens());
    GeneralizedMergeDistance::new(entropy, entropy).distance(result, standard)
}
