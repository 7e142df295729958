//! The canonical sequence-of-clusters form of a partition.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Item, Token};

/// An ordered sequence of clusters of tokens.
///
/// Within one partition every token should appear in at most one cluster.
/// This is checked where it matters: the merge distance engine rejects a
/// result partition that repeats a token.
///
/// Empty clusters are kept. They contribute no overlap to any metric.
///
/// # Examples
///
/// ```
/// use partition_distances::{Item, Partition};
///
/// // The normalizer reads a bare token as a singleton cluster.
/// let partition = Partition::from_items(vec![
///     Item::token("a"),
///     Item::cluster(["b", "c"]),
///     Item::cluster([]),
/// ]);
///
/// assert_eq!(partition.clusters(), &[vec!["a"], vec!["b", "c"], vec![]]);
/// assert_eq!(partition.num_tokens(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Item<T>>", into = "Vec<Vec<T>>")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Partition<T> {
    /// The clusters, in input order.
    clusters: Vec<Vec<T>>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self { clusters: Vec::new() }
    }
}

impl<T> Partition<T> {
    /// Creates a partition from clusters that are already explicit.
    #[must_use]
    pub const fn new(clusters: Vec<Vec<T>>) -> Self {
        Self { clusters }
    }

    /// Normalizes a sequence of bare tokens and clusters.
    ///
    /// Bare tokens become singleton clusters. Order is kept, as are empty
    /// clusters.
    pub fn from_items<I: IntoIterator<Item = Item<T>>>(items: I) -> Self {
        Self {
            clusters: items.into_iter().map(Item::into_cluster).collect(),
        }
    }

    /// The clusters of the partition.
    #[must_use]
    pub fn clusters(&self) -> &[Vec<T>] {
        &self.clusters
    }

    /// Iterates over the clusters of the partition.
    pub fn iter(&self) -> core::slice::Iter<'_, Vec<T>> {
        self.clusters.iter()
    }

    /// Iterates over every token of every cluster, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &T> {
        self.clusters.iter().flatten()
    }

    /// The number of clusters, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether the partition has no clusters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// The total number of tokens across all clusters.
    #[must_use]
    pub fn num_tokens(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }
}

impl<T: Token> Partition<T> {
    /// The number of distinct tokens across all clusters.
    #[must_use]
    pub fn num_distinct_tokens(&self) -> usize {
        self.tokens().collect::<HashSet<_>>().len()
    }

    /// The denormalized partition: every distinct token in its own singleton
    /// cluster, in order of first appearance.
    ///
    /// Tokens are deduplicated, so a token repeated across clusters yields a
    /// single singleton.
    #[must_use]
    pub fn denormalized(&self) -> Self {
        let mut seen = HashSet::new();
        let clusters = self
            .tokens()
            .filter(|&token| seen.insert(token))
            .map(|token| vec![token.clone()])
            .collect();
        Self { clusters }
    }
}

impl<T> From<Vec<Vec<T>>> for Partition<T> {
    fn from(clusters: Vec<Vec<T>>) -> Self {
        Self::new(clusters)
    }
}

impl<T> From<Vec<Item<T>>> for Partition<T> {
    fn from(items: Vec<Item<T>>) -> Self {
        Self::from_items(items)
    }
}

impl<T> From<Partition<T>> for Vec<Vec<T>> {
    fn from(partition: Partition<T>) -> Self {
        partition.clusters
    }
}

impl<T> FromIterator<Item<T>> for Partition<T> {
    fn from_iter<I: IntoIterator<Item = Item<T>>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<'a, T> IntoIterator for &'a Partition<T> {
    type Item = &'a Vec<T>;
    type IntoIter = core::slice::Iter<'a, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
