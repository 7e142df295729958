//! The generalized merge distance between two partitions.
//!
//! The generalized merge distance (GMD) is the total cost of the split and
//! merge operations that transform a result partition into a standard
//! partition. It was introduced by Menestrina et al. in "Evaluating Entity
//! Resolution Results" (VLDB 2010), together with the linear-time algorithm
//! implemented here.
//!
//! The cost of each operation is given by a pair of [`CostFunction`]s. The
//! same engine computes the basic merge distance, pairwise precision and
//! recall, and the variation of information; see [`crate::metrics`].

mod cost;

pub use cost::{entropy_term, CostFunction, Entropy, Product, Unit, Zero};

use std::collections::{hash_map::Entry, HashMap};

use crate::{index::ClusterIndex, Float, MetricsError, Partition, Result, Token};

/// The generalized merge distance for a fixed pair of cost functions.
///
/// # Type Parameters
///
/// - `S`: The cost function for splits.
/// - `M`: The cost function for merges.
///
/// # Example
///
/// ```rust
/// use partition_distances::{gmd::{Product, Zero}, GeneralizedMergeDistance, Partition};
///
/// let result = Partition::new(vec![vec!["a", "b", "c", "d"]]);
/// let standard = Partition::new(vec![vec!["a", "b"], vec!["c", "d"]]);
///
/// // Splitting {a, b, c, d} into {a, b} and {c, d} separates 4 pairs.
/// let pairs_split = GeneralizedMergeDistance::new(Product, Zero);
/// let distance: f64 = pairs_split.distance(&result, &standard).unwrap();
/// assert_eq!(distance, 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizedMergeDistance<S, M> {
    /// The cost of a split.
    split: S,
    /// The cost of a merge.
    merge: M,
}

impl<S, M> GeneralizedMergeDistance<S, M> {
    /// Creates a new generalized merge distance from its split and merge costs.
    pub const fn new(split: S, merge: M) -> Self {
        Self { split, merge }
    }

    /// The cost function for splits.
    pub const fn split(&self) -> &S {
        &self.split
    }

    /// The cost function for merges.
    pub const fn merge(&self) -> &M {
        &self.merge
    }

    /// Computes the cost of transforming `result` into `standard`.
    ///
    /// The standard partition is walked cluster by cluster, in order. For
    /// each standard cluster, the result clusters it overlaps are visited in
    /// the order their first overlapping token is encountered. A result
    /// cluster that keeps some tokens outside the standard cluster costs a
    /// split, and every result cluster after the first costs a merge with the
    /// tokens gathered so far.
    ///
    /// # Errors
    ///
    /// * `MalformedPartition` if a token occurs more than once in `result`.
    /// * `MissingToken` if a token of `standard` does not occur in `result`.
    pub fn distance<T: Token, U: Float>(&self, result: &Partition<T>, standard: &Partition<T>) -> Result<U>
    where
        S: CostFunction<U>,
        M: CostFunction<U>,
    {
        let mut index = ClusterIndex::new(result);
        if let Some(token) = index.repeated_token() {
            return Err(MetricsError::repeated_token(token));
        }

        let mut total = U::zero();
        for (i, cluster) in standard.iter().enumerate() {
            let overlaps = overlaps(&index, cluster)?;
            let cost = self.cluster_cost(&mut index, &overlaps);
            ftlog::trace!("Standard cluster {i} overlaps {} result clusters at cost {cost}.", overlaps.len());
            total += cost;
        }

        ftlog::debug!(
            "GMD with split cost {} and merge cost {} between {} result and {} standard clusters is {total}.",
            self.split.name(),
            self.merge.name(),
            result.len(),
            standard.len()
        );

        Ok(total)
    }

    /// The cost of gathering one standard cluster from its `overlaps` with
    /// the result clusters, consuming them from the `index`.
    fn cluster_cost<T, U: Float>(&self, index: &mut ClusterIndex<T>, overlaps: &[(usize, usize)]) -> U
    where
        S: CostFunction<U>,
        M: CostFunction<U>,
    {
        let mut cost = U::zero();
        let mut accumulated = 0;

        for &(id, count) in overlaps {
            let remaining = index.remaining(id);
            if remaining > count {
                cost += self.split.cost(count, remaining - count);
            }
            index.consume(id, count);

            if accumulated > 0 {
                cost += self.merge.cost(count, accumulated);
            }
            accumulated += count;
        }

        cost
    }
}

/// Counts the tokens of `cluster` owned by each result cluster, in the order
/// the result clusters are first encountered.
///
/// Returns pairs of `(result cluster id, overlap count)`.
fn overlaps<T: Token>(index: &ClusterIndex<T>, cluster: &[T]) -> Result<Vec<(usize, usize)>> {
    let mut overlaps: Vec<(usize, usize)> = Vec::new();
    let mut positions: HashMap<usize, usize> = HashMap::new();

    for token in cluster {
        let id = index
            .cluster_of(token)
            .ok_or_else(|| MetricsError::missing_token(token))?;
        match positions.entry(id) {
            Entry::Occupied(e) => overlaps[*e.get()].1 += 1,
            Entry::Vacant(e) => {
                e.insert(overlaps.len());
                overlaps.push((id, 1));
            }
        }
    }

    Ok(overlaps)
}

/// Computes the generalized merge distance from `result` to `standard` under
/// the given split and merge costs.
///
/// See [`GeneralizedMergeDistance::distance`].
///
/// # Errors
///
/// * `MalformedPartition` if a token occurs more than once in `result`.
/// * `MissingToken` if a token of `standard` does not occur in `result`.
///
/// # Example
///
/// ```rust
/// use partition_distances::{gmd, gmd::Unit, Partition};
///
/// let standard = Partition::new(vec![vec!["a", "b"], vec!["c", "d"]]);
/// let result = Partition::new(vec![vec!["a"], vec!["b"], vec!["c", "d"]]);
///
/// // One merge turns {a} and {b} into {a, b}.
/// let distance: f64 = gmd(&result, &standard, Unit, Unit).unwrap();
/// assert_eq!(distance, 1.0);
///
/// // Closures are cost functions too.
/// let distance: f64 = gmd(&standard, &result, |_: usize, _: usize| 2.0, Unit).unwrap();
/// assert_eq!(distance, 2.0);
/// ```
pub fn gmd<T: Token, U: Float, S: CostFunction<U>, M: CostFunction<U>>(
    result: &Partition<T>,
    standard: &Partition<T>,
    split: S,
    merge: M,
) -> Result<U> {
    GeneralizedMergeDistance::new(split, merge).distance(result, standard)
}
