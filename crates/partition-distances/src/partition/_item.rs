//! One element of an un-normalized partition.

use serde::{Deserialize, Serialize};

/// An element of the input to the partition normalizer.
///
/// Every cluster is wrapped explicitly, even a singleton, so a token that is
/// itself a sequence (e.g. a string) is never mistaken for a cluster of its
/// parts. A bare `Token` is read as a singleton cluster.
///
/// With serde, an array is read as a cluster and anything else as a bare
/// token. The `Cluster` variant is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item<T> {
    /// A cluster of tokens.
    Cluster(Vec<T>),
    /// A bare token, i.e. a singleton cluster.
    Token(T),
}

impl<T> Item<T> {
    /// A bare token.
    pub const fn token(token: T) -> Self {
        Self::Token(token)
    }

    /// A cluster of the given tokens.
    pub fn cluster<I: IntoIterator<Item = T>>(tokens: I) -> Self {
        Self::Cluster(tokens.into_iter().collect())
    }

    /// Converts the item to the cluster it stands for.
    pub fn into_cluster(self) -> Vec<T> {
        match self {
            Self::Cluster(tokens) => tokens,
            Self::Token(token) => vec![token],
        }
    }
}

impl<T> From<Vec<T>> for Item<T> {
    fn from(tokens: Vec<T>) -> Self {
        Self::Cluster(tokens)
    }
}
