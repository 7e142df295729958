//! Precision, recall and F1 of a set of matching pairs.
//!
//! A matching pair claims that two records refer to the same entity. Pairs are
//! unordered, so `(a, b)` and `(b, a)` are the same match, and repeated pairs
//! count once.

use std::collections::HashSet;

use crate::{utils::Interner, Float, Token};

/// The true positives, the number of distinct result pairs and the number of
/// distinct standard pairs.
fn confusion<T: Token>(result: &[(T, T)], standard: &[(T, T)]) -> (usize, usize, usize) {
    let mut interner = Interner::new();
    let standard = standard
        .iter()
        .map(|(a, b)| interner.pair(a, b))
        .collect::<HashSet<_>>();
    let result = result.iter().map(|(a, b)| interner.pair(a, b)).collect::<HashSet<_>>();

    let true_positives = result.intersection(&standard).count();
    (true_positives, result.len(), standard.len())
}

/// The fraction of `result` pairs that are also `standard` pairs, i.e.
/// `tp / (tp + fp)`. Zero when `result` is empty.
///
/// # Example
///
/// ```rust
/// use partition_distances::pairs;
///
/// let standard = [("a", "b"), ("c", "d")];
/// let result = [("b", "a"), ("d", "e")];
///
/// let precision: f64 = pairs::precision(&result, &standard);
/// assert_eq!(precision, 0.5);
/// ```
pub fn precision<T: Token, U: Float>(result: &[(T, T)], standard: &[(T, T)]) -> U {
    let (true_positives, retrieved, _) = confusion(result, standard);
    U::ratio_or_zero(U::from_count(true_positives), U::from_count(retrieved))
}

/// The fraction of `standard` pairs that are also `result` pairs, i.e.
/// `tp / (tp + fn)`. Zero when `standard` is empty.
pub fn recall<T: Token, U: Float>(result: &[(T, T)], standard: &[(T, T)]) -> U {
    let (true_positives, _, relevant) = confusion(result, standard);
    U::ratio_or_zero(U::from_count(true_positives), U::from_count(relevant))
}

/// The harmonic mean of [`precision`] and [`recall`]. Zero when both are zero.
pub fn f1<T: Token, U: Float>(result: &[(T, T)], standard: &[(T, T)]) -> U {
    U::harmonic_mean(precision(result, standard), recall(result, standard))
}
