//! Pairwise precision, recall and F1, computed with the generalized merge
//! distance.
//!
//! A pair of tokens is a true positive when both partitions put the two
//! tokens in the same cluster. With a split cost of `x * y` and free merges,
//! the merge distance counts the pairs of the result that the standard
//! separates, i.e. the false positives. Against the denormalized standard,
//! where nothing is joined, the same distance counts every pair of the
//! result. Recall swaps the roles of splits and merges.
//!
//! When a normalizing distance is zero there are no pairs to score and the
//! precision (or recall) is zero.

use crate::{
    gmd::{GeneralizedMergeDistance, Product, Zero},
    Float, Partition, Result, Token,
};

/// The fraction of token pairs joined by `result` that `standard` joins too.
///
/// Computed as `1 - gmd(result, standard) / gmd(result, denormalized(standard))`
/// with split cost `x * y` and free merges.
///
/// # Errors
///
/// See [`GeneralizedMergeDistance::distance`].
pub fn pairwise_precision<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> Result<U> {
    let engine = GeneralizedMergeDistance::new(Product, Zero);

    let false_positives: U = engine.distance(result, standard)?;
    let result_pairs: U = engine.distance(result, &standard.denormalized())?;

    Ok(complement_of_ratio(false_positives, result_pairs))
}

/// The fraction of token pairs joined by `standard` that `result` joins too.
///
/// Computed as `1 - gmd(result, standard) / gmd(denormalized(standard), standard)`
/// with free splits and merge cost `x * y`.
///
/// # Errors
///
/// See [`GeneralizedMergeDistance::distance`].
pub fn pairwise_recall<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> Result<U> {
    let engine = GeneralizedMergeDistance::new(Zero, Product);

    let false_negatives: U = engine.distance(result, standard)?;
    let standard_pairs: U = engine.distance(&standard.denormalized(), standard)?;

    Ok(complement_of_ratio(false_negatives, standard_pairs))
}

/// The harmonic mean of the pairwise precision and recall. It is zero when
/// both are zero.
///
/// # Errors
///
/// See [`GeneralizedMergeDistance::distance`].
///
/// # Example
///
/// ```rust
/// use partition_distances::{metrics::pairwise_f1, Partition};
///
/// let standard = Partition::new(vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f", "g"]]);
///
/// let f1: f64 = pairwise_f1(&standard, &standard).unwrap();
/// assert_eq!(f1, 1.0);
///
/// // Singletons join no pairs at all.
/// let f1: f64 = pairwise_f1(&standard.denormalized(), &standard).unwrap();
/// assert_eq!(f1, 0.0);
/// ```
pub fn pairwise_f1<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> Result<U> {
    let precision = pairwise_precision(result, standard)?;
    let recall = pairwise_recall(result, standard)?;
    Ok(U::harmonic_mean(precision, recall))
}

/// `1 - numerator / denominator`, or zero when the denominator is zero.
fn complement_of_ratio<U: Float>(numerator: U, denominator: U) -> U {
    if denominator.is_zero() {
        U::zero()
    } else {
        U::one() - numerator / denominator
    }
}
