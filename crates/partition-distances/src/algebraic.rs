//! Set-based agreement metrics between two partitions.
//!
//! These metrics compare clusters as sets through direct intersection
//! arithmetic and do not use the merge distance engine. Tokens that occur in
//! only one of the two partitions simply contribute no overlap.
//!
//! | Metric | Counts |
//! |--------|--------|
//! | Rand index | pairs on which both partitions agree |
//! | Adjusted Rand index | Rand index corrected for chance |
//! | Talburt-Wang index (and its square root) | clusters against their non-empty overlaps |
//! | Pair precision / recall | intra-cluster token pairs |
//! | Cluster precision / recall | clusters matched exactly |
//!
//! Every ratio with a vanishing denominator is zero, except the adjusted Rand
//! index, which is one when the two partitions cannot be told apart.

use std::collections::{HashMap, HashSet};

use crate::{index::ClusterIndex, utils, utils::Interner, Float, Partition, Token};

/// The contingency table of two partitions: how many tokens each standard
/// cluster shares with each result cluster.
struct Contingency {
    /// Standard cluster id and result cluster id to the size of their overlap.
    cells: HashMap<(usize, usize), usize>,
    /// Per standard cluster, the number of its tokens found in the result.
    rows: Vec<usize>,
    /// Per result cluster, the number of its tokens found in the standard.
    columns: Vec<usize>,
    /// The number of tokens in both partitions.
    n: usize,
}

impl Contingency {
    /// Builds the table with one pass over the standard partition.
    fn new<T: Token>(result: &Partition<T>, standard: &Partition<T>) -> Self {
        let index = ClusterIndex::new(result);

        let mut cells = HashMap::new();
        let mut rows = vec![0; standard.len()];
        let mut columns = vec![0; index.num_clusters()];
        let mut n = 0;

        for (i, cluster) in standard.iter().enumerate() {
            for token in cluster.iter().collect::<HashSet<_>>() {
                if let Some(j) = index.cluster_of(token) {
                    *cells.entry((i, j)).or_insert(0) += 1;
                    rows[i] += 1;
                    columns[j] += 1;
                    n += 1;
                }
            }
        }

        Self { cells, rows, columns, n }
    }

    /// The number of token pairs joined by both partitions.
    fn joined_by_both(&self) -> usize {
        self.cells.values().map(|&c| utils::comb_2(c)).sum()
    }

    /// The number of token pairs joined by the standard.
    fn joined_by_standard(&self) -> usize {
        self.rows.iter().map(|&c| utils::comb_2(c)).sum()
    }

    /// The number of token pairs joined by the result.
    fn joined_by_result(&self) -> usize {
        self.columns.iter().map(|&c| utils::comb_2(c)).sum()
    }
}

/// The fraction of token pairs on which `result` and `standard` agree, either
/// both joining or both separating the two tokens.
///
/// Zero when there are fewer than two tokens in common.
///
/// # Example
///
/// ```rust
/// use partition_distances::{algebraic::rand_index, Partition};
///
/// let standard = Partition::new(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
/// let result = Partition::new(vec![vec![1, 2, 3], vec![4, 5], vec![6]]);
///
/// let ri: f64 = rand_index(&result, &standard);
/// assert!((ri - 10.0 / 15.0).abs() < 1e-12);
/// ```
pub fn rand_index<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    let table = Contingency::new(result, standard);

    let total = utils::comb_2(table.n);
    if total == 0 {
        return U::zero();
    }

    let both = table.joined_by_both();
    let false_positives = table.joined_by_result() - both;
    let false_negatives = table.joined_by_standard() - both;
    let true_negatives = total - both - false_positives - false_negatives;

    U::from_count(both + true_negatives) / U::from_count(total)
}

/// The Rand index adjusted for chance (Hubert and Arabie).
///
/// One when the expected and maximum indices coincide, which includes every
/// comparison with fewer than two tokens in common.
pub fn adjusted_rand_index<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    let table = Contingency::new(result, standard);

    let total = utils::comb_2(table.n);
    if total == 0 {
        return U::one();
    }

    let both = U::from_count(table.joined_by_both());
    let by_standard = U::from_count(table.joined_by_standard());
    let by_result = U::from_count(table.joined_by_result());

    let expected = by_standard * by_result / U::from_count(total);
    let maximum = (by_standard + by_result) / (U::one() + U::one());
    if maximum == expected {
        return U::one();
    }

    (both - expected) / (maximum - expected)
}

/// The Talburt-Wang index, `|S| * |R| / |V|^2`, where `|S|` and `|R|` are the
/// numbers of clusters and `|V|` the number of non-empty overlaps between a
/// standard and a result cluster.
///
/// Zero when no clusters overlap.
///
/// # Example
///
/// ```rust
/// use partition_distances::{algebraic::talburt_wang_index, Partition};
///
/// let standard = Partition::new(vec![vec![1, 2], vec![3, 4, 5, 6]]);
/// let result = Partition::new(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
///
/// let twi: f64 = talburt_wang_index(&result, &standard);
/// assert!((twi - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn talburt_wang_index<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    let overlaps = Contingency::new(result, standard).cells.len();
    if overlaps == 0 {
        return U::zero();
    }

    let clusters = U::from_count(standard.len()) * U::from_count(result.len());
    let overlaps = U::from_count(overlaps);
    clusters / (overlaps * overlaps)
}

/// The square root form of the Talburt-Wang index, `sqrt(|S| * |R|) / |V|`.
///
/// Zero when no clusters overlap.
pub fn talburt_wang_index_root<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    talburt_wang_index::<T, U>(result, standard).sqrt()
}

/// The intra-cluster token pairs of a partition, as pairs of ids.
fn token_pairs<'a, T: Token>(partition: &'a Partition<T>, interner: &mut Interner<'a, T>) -> HashSet<(usize, usize)> {
    let mut pairs = HashSet::new();
    for cluster in partition {
        let ids = interner.ids(cluster);
        for (i, &a) in ids.iter().enumerate() {
            pairs.extend(ids[i + 1..].iter().map(|&b| (a, b)));
        }
    }
    pairs
}

/// The fraction of the intra-cluster pairs of `result` that are also pairs in
/// `standard`. Zero when `result` has no pairs.
pub fn pair_precision<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    let mut interner = Interner::new();
    let standard_pairs = token_pairs(standard, &mut interner);
    let result_pairs = token_pairs(result, &mut interner);

    let common = standard_pairs.intersection(&result_pairs).count();
    U::ratio_or_zero(U::from_count(common), U::from_count(result_pairs.len()))
}

/// The fraction of the intra-cluster pairs of `standard` that are also pairs
/// in `result`. Zero when `standard` has no pairs.
pub fn pair_recall<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    let mut interner = Interner::new();
    let standard_pairs = token_pairs(standard, &mut interner);
    let result_pairs = token_pairs(result, &mut interner);

    let common = standard_pairs.intersection(&result_pairs).count();
    U::ratio_or_zero(U::from_count(common), U::from_count(standard_pairs.len()))
}

/// The harmonic mean of [`pair_precision`] and [`pair_recall`].
pub fn pair_comparison_measure<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    U::harmonic_mean(pair_precision(result, standard), pair_recall(result, standard))
}

/// The non-empty clusters of a partition, as sorted sets of ids.
fn cluster_sets<'a, T: Token>(partition: &'a Partition<T>, interner: &mut Interner<'a, T>) -> HashSet<Vec<usize>> {
    partition
        .iter()
        .filter(|cluster| !cluster.is_empty())
        .map(|cluster| interner.ids(cluster))
        .collect()
}

/// The fraction of the clusters of `result` that are exactly clusters of
/// `standard`. Zero when `result` has no clusters.
///
/// # Example
///
/// ```rust
/// use partition_distances::{algebraic::cluster_precision, Partition};
///
/// let standard = Partition::new(vec![vec!["a", "b"], vec!["c"]]);
/// let result = Partition::new(vec![vec!["b", "a"], vec!["c", "d"]]);
///
/// let precision: f64 = cluster_precision(&result, &standard);
/// assert_eq!(precision, 0.5);
/// ```
pub fn cluster_precision<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    let mut interner = Interner::new();
    let standard_clusters = cluster_sets(standard, &mut interner);
    let result_clusters = cluster_sets(result, &mut interner);

    let common = standard_clusters.intersection(&result_clusters).count();
    U::ratio_or_zero(U::from_count(common), U::from_count(result_clusters.len()))
}

/// The fraction of the clusters of `standard` that are exactly clusters of
/// `result`. Zero when `standard` has no clusters.
pub fn cluster_recall<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    let mut interner = Interner::new();
    let standard_clusters = cluster_sets(standard, &mut interner);
    let result_clusters = cluster_sets(result, &mut interner);

    let common = standard_clusters.intersection(&result_clusters).count();
    U::ratio_or_zero(U::from_count(common), U::from_count(standard_clusters.len()))
}

/// The harmonic mean of [`cluster_precision`] and [`cluster_recall`].
pub fn cluster_comparison_measure<T: Token, U: Float>(result: &Partition<T>, standard: &Partition<T>) -> U {
    U::harmonic_mean(cluster_precision(result, standard), cluster_recall(result, standard))
}
