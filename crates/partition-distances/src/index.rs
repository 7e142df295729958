//! Membership index from token to the cluster that owns it.

use std::collections::HashMap;

use crate::partition::{Partition, Token};

/// Maps every token of a partition to the position of its cluster, and every
/// cluster to the number of its tokens not yet consumed.
///
/// An index is built for a single pass of the merge distance engine: its
/// size counters are decremented destructively as overlap is consumed, so it
/// must never be reused.
///
/// If a token appears more than once, the last cluster it appears in wins the
/// token map while every occurrence still counts towards its cluster's size.
/// True partitions never trigger this. The first such token is remembered in
/// [`ClusterIndex::repeated_token`].
#[derive(Debug, Clone)]
pub struct ClusterIndex<'a, T> {
    /// Token to 0-based cluster id, in encounter order.
    membership: HashMap<&'a T, usize>,
    /// Cluster id to the number of tokens not yet consumed.
    remaining: Vec<usize>,
    /// The first token seen twice, if any.
    repeated: Option<&'a T>,
}

impl<'a, T: Token> ClusterIndex<'a, T> {
    /// Builds the index in one linear pass over the clusters and their tokens.
    #[must_use]
    pub fn new(partition: &'a Partition<T>) -> Self {
        let mut membership = HashMap::with_capacity(partition.num_tokens());
        let mut remaining = Vec::with_capacity(partition.len());
        let mut repeated = None;

        for (i, cluster) in partition.iter().enumerate() {
            for token in cluster {
                if membership.insert(token, i).is_some() && repeated.is_none() {
                    ftlog::warn!("Token {token:?} appears more than once; it is now assigned to cluster {i}.");
                    repeated = Some(token);
                }
            }
            remaining.push(cluster.len());
        }

        Self {
            membership,
            remaining,
            repeated,
        }
    }

    /// The id of the cluster that owns `token`, if any.
    #[must_use]
    pub fn cluster_of(&self, token: &T) -> Option<usize> {
        self.membership.get(token).copied()
    }

    /// The first token that was found in more than one place.
    #[must_use]
    pub const fn repeated_token(&self) -> Option<&'a T> {
        self.repeated
    }
}

impl<'a, T> ClusterIndex<'a, T> {
    /// The number of clusters in the index.
    #[must_use]
    pub fn num_clusters(&self) -> usize {
        self.remaining.len()
    }

    /// The number of tokens of cluster `id` not yet consumed.
    ///
    /// # Panics
    ///
    /// If `id` is not a cluster of the index.
    #[must_use]
    pub fn remaining(&self, id: usize) -> usize {
        self.remaining[id]
    }

    /// Consumes `count` tokens of cluster `id`.
    ///
    /// The counter saturates at zero, so tokens repeated on the consuming side
    /// cannot underflow it.
    ///
    /// # Panics
    ///
    /// If `id` is not a cluster of the index.
    pub fn consume(&mut self, id: usize, count: usize) {
        self.remaining[id] = self.remaining[id].saturating_sub(count);
    }
}

#[cfg(test)]
mod tests {
    use crate::Partition;

    use super::ClusterIndex;

    #[test]
    fn encounter_order() {
        let partition = Partition::new(vec![vec!["a", "b"], vec![], vec!["c"]]);
        let mut index = ClusterIndex::new(&partition);

        assert_eq!(index.num_clusters(), 3);
        assert_eq!(index.cluster_of(&"a"), Some(0));
        assert_eq!(index.cluster_of(&"b"), Some(0));
        assert_eq!(index.cluster_of(&"c"), Some(2));
        assert_eq!(index.cluster_of(&"d"), None);
        assert_eq!((index.remaining(0), index.remaining(1), index.remaining(2)), (2, 0, 1));
        assert!(index.repeated_token().is_none());

        index.consume(0, 1);
        assert_eq!(index.remaining(0), 1);
        index.consume(0, 5);
        assert_eq!(index.remaining(0), 0);
    }

    #[test]
    fn last_write_wins() {
        let partition = Partition::new(vec![vec!["a", "b"], vec!["b", "c"]]);
        let index = ClusterIndex::new(&partition);

        assert_eq!(index.cluster_of(&"b"), Some(1));
        assert_eq!(index.remaining(0), 2);
        assert_eq!(index.repeated_token(), Some(&"b"));
    }
}
