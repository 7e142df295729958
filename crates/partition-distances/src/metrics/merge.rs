//! The basic merge distance.

use crate::{
    gmd::{GeneralizedMergeDistance, Unit},
    Float, Partition, Result, Token,
};

/// The number of splits and merges that transform `result` into `standard`,
/// i.e. the generalized merge distance with unit costs.
///
/// # Errors
///
/// See [`GeneralizedMergeDistance::distance`].
///
/// # Example
///
/// ```rust
/// use partition_distances::{metrics::basic_merge_distance, Partition};
///
/// let standard = Partition::new(vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f", "g"]]);
/// let result = Partition::new(vec![vec!["a", "b", "c", "d"], vec!["e", "f"], vec!["g"]]);
///
/// // One split of {a, b, c, d} and one merge of {e, f} with {g}.
/// let distance: f64 = basic_merge_distance(&result, &standard).unwrap();
/// assert_eq!(distance, 2.0);
/// ```
pub fn basic_merge_distance<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> Result<U> {
    GeneralizedMergeDistance::new(Unit, Unit).distance(result, standard)
}
