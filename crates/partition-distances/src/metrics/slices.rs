//! Metrics over every slice of two `Clustering`s.
//!
//! Slices are paired by position and truncated to the shorter of the two
//! clusterings. Slice `i` of the output corresponds to slice `i` of the
//! inputs.
//!
//! A failing slice aborts the whole batch, and its error is reported as
//! [`MetricsError::Slice`](crate::MetricsError::Slice) with the position of the slice. Sequential
//! functions report the first failing slice.
//!
//! Every function has a parallel version, prefixed with `par_`, that
//! evaluates the slices with `rayon`. When several slices fail in parallel,
//! any one of them may be reported.

use rayon::prelude::*;

use crate::{Clustering, Float, Partition, Result, Token};

use super::Evaluation;

/// Applies `metric` to every pair of slices, in order.
fn per_slice<T, U, F>(result: &Clustering<T>, standard: &Clustering<T>, metric: F) -> Result<Vec<U>>
where
    F: Fn(&Partition<T>, &Partition<T>) -> Result<U>,
{
    let scores = result
        .zip_slices(standard)
        .enumerate()
        .map(|(i, (r, s))| {
            ftlog::debug!("Evaluating slice {i} with {} result and {} standard clusters.", r.len(), s.len());
            metric(r, s).map_err(|e| e.in_slice(i))
        })
        .collect::<Result<Vec<_>>>()?;

    ftlog::info!("Evaluated {} slices.", scores.len());
    Ok(scores)
}

/// Parallel version of [`per_slice`].
fn par_per_slice<T, U, F>(result: &Clustering<T>, standard: &Clustering<T>, metric: F) -> Result<Vec<U>>
where
    T: Send + Sync,
    U: Send,
    F: (Fn(&Partition<T>, &Partition<T>) -> Result<U>) + Send + Sync,
{
    let scores = result
        .slices()
        .par_iter()
        .zip(standard.slices().par_iter())
        .enumerate()
        .map(|(i, (r, s))| {
            ftlog::debug!("Evaluating slice {i} with {} result and {} standard clusters.", r.len(), s.len());
            metric(r, s).map_err(|e| e.in_slice(i))
        })
        .collect::<Result<Vec<_>>>()?;

    ftlog::info!("Evaluated {} slices in parallel.", scores.len());
    Ok(scores)
}

/// The basic merge distance summed over all slices.
///
/// # Errors
///
/// `MetricsError::Slice` wrapping the error of the first slice that fails.
pub fn basic_merge_distance<T: Token, U: Float>(result: &Clustering<T>, standard: &Clustering<T>) -> Result<U> {
    per_slice(result, standard, super::basic_merge_distance).map(|d: Vec<U>| d.into_iter().sum())
}

/// Parallel version of [`basic_merge_distance`].
///
/// # Errors
///
/// See [`basic_merge_distance`].
pub fn par_basic_merge_distance<T: Token + Send + Sync, U: Float>(
    result: &Clustering<T>,
    standard: &Clustering<T>,
) -> Result<U> {
    par_per_slice(result, standard, super::basic_merge_distance).map(|d: Vec<U>| d.into_iter().sum())
}

/// The pairwise precision of every slice.
///
/// # Errors
///
/// `MetricsError::Slice` wrapping the error of the first slice that fails.
pub fn pairwise_precision<T: Token, U: Float>(result: &Clustering<T>, standard: &Clustering<T>) -> Result<Vec<U>> {
    per_slice(result, standard, super::pairwise_precision)
}

/// Parallel version of [`pairwise_precision`].
///
/// # Errors
///
/// See [`pairwise_precision`].
pub fn par_pairwise_precision<T: Token + Send + Sync, U: Float>(
    result: &Clustering<T>,
    standard: &Clustering<T>,
) -> Result<Vec<U>> {
    par_per_slice(result, standard, super::pairwise_precision)
}

/// The pairwise recall of every slice.
///
/// # Errors
///
/// `MetricsError::Slice` wrapping the error of the first slice that fails.
pub fn pairwise_recall<T: Token, U: Float>(result: &Clustering<T>, standard: &Clustering<T>) -> Result<Vec<U>> {
    per_slice(result, standard, super::pairwise_recall)
}

/// Parallel version of [`pairwise_recall`].
///
/// # Errors
///
/// See [`pairwise_recall`].
pub fn par_pairwise_recall<T: Token + Send + Sync, U: Float>(
    result: &Clustering<T>,
    standard: &Clustering<T>,
) -> Result<Vec<U>> {
    par_per_slice(result, standard, super::pairwise_recall)
}

/// The pairwise F1 score of every slice.
///
/// # Errors
///
/// `MetricsError::Slice` wrapping the error of the first slice that fails.
///
/// # Example
///
/// ```rust
/// use partition_distances::{metrics::slices, Clustering, Item, Partition};
///
/// let gold = Partition::new(vec![vec!["a", "b"], vec!["c", "d"]]);
/// let standard = Clustering::new(vec![gold.clone(), gold.clone(), gold]);
///
/// let result = Clustering::new(vec![
///     Partition::from_items(["a", "b", "c", "d"].map(Item::token)),
///     Partition::new(vec![vec!["a", "b"], vec!["c", "d"]]),
/// ]);
///
/// let f1: Vec<f64> = slices::pairwise_f1(&result, &standard).unwrap();
/// assert_eq!(f1, vec![0.0, 1.0]);
/// ```
pub fn pairwise_f1<T: Token, U: Float>(result: &Clustering<T>, standard: &Clustering<T>) -> Result<Vec<U>> {
    per_slice(result, standard, super::pairwise_f1)
}

/// Parallel version of [`pairwise_f1`].
///
/// # Errors
///
/// See [`pairwise_f1`].
pub fn par_pairwise_f1<T: Token + Send + Sync, U: Float>(
    result: &Clustering<T>,
    standard: &Clustering<T>,
) -> Result<Vec<U>> {
    par_per_slice(result, standard, super::pairwise_f1)
}

/// The variation of information of every slice.
///
/// # Errors
///
/// `MetricsError::Slice` wrapping the error of the first slice that fails.
pub fn variation_of_information<T: Token, U: Float>(
    result: &Clustering<T>,
    standard: &Clustering<T>,
) -> Result<Vec<U>> {
    per_slice(result, standard, super::variation_of_information)
}

/// Parallel version of [`variation_of_information`].
///
/// # Errors
///
/// See [`variation_of_information`].
pub fn par_variation_of_information<T: Token + Send + Sync, U: Float>(
    result: &Clustering<T>,
    standard: &Clustering<T>,
) -> Result<Vec<U>> {
    par_per_slice(result, standard, super::variation_of_information)
}

/// Every metric of every slice.
///
/// # Errors
///
/// `MetricsError::Slice` wrapping the error of the first slice that fails.
pub fn evaluate<T: Token, U: Float>(result: &Clustering<T>, standard: &Clustering<T>) -> Result<Vec<Evaluation<U>>> {
    per_slice(result, standard, Evaluation::compute)
}

/// Parallel version of [`evaluate`].
///
/// # Errors
///
/// See [`evaluate`].
pub fn par_evaluate<T: Token + Send + Sync, U: Float>(
    result: &Clustering<T>,
    standard: &Clustering<T>,
) -> Result<Vec<Evaluation<U>>> {
    par_per_slice(result, standard, Evaluation::compute)
}

#[cfg(test)]
mod tests {
    use crate::{Clustering, MetricsError, Partition};

    #[test]
    fn first_failure_aborts() {
        let standard = Clustering::new(vec![
            Partition::new(vec![vec![1, 2]]),
            Partition::new(vec![vec![1, 2, 3]]),
            Partition::new(vec![vec![4]]),
        ]);
        let result = Clustering::new(vec![
            Partition::new(vec![vec![1], vec![2]]),
            Partition::new(vec![vec![1, 2]]),
            Partition::new(vec![vec![4]]),
        ]);

        for outcome in [
            super::basic_merge_distance::<_, f64>(&result, &standard).map(|d| vec![d]),
            super::par_pairwise_recall::<_, f64>(&result, &standard),
        ] {
            match outcome {
                Err(MetricsError::Slice { index, source }) => {
                    assert_eq!(index, 1);
                    assert!(matches!(*source, MetricsError::MissingToken { .. }));
                }
                other => unreachable!("expected a slice error, got {other:?}"),
            }
        }
    }
}
