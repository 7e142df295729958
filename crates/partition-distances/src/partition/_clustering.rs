//! A batch of partitions compared slice by slice.

use serde::{Deserialize, Serialize};

use super::Partition;

/// The output of a clustering process over one or more slices, e.g. one
/// partition per evaluated threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Clustering<T> {
    /// Descriptions of the features the clustering was computed from, kept
    /// as raw JSON of any shape. The metrics never read them.
    #[cfg(feature = "json")]
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub feature_info: serde_json::Value,
    /// One partition per slice.
    pub clustered_rows: Vec<Partition<T>>,
}

impl<T> Clustering<T> {
    /// Creates a clustering without feature information.
    #[must_use]
    pub const fn new(clustered_rows: Vec<Partition<T>>) -> Self {
        Self {
            #[cfg(feature = "json")]
            feature_info: serde_json::Value::Null,
            clustered_rows,
        }
    }

    /// Sets the feature information.
    #[cfg(feature = "json")]
    #[must_use]
    pub fn with_feature_info(mut self, feature_info: serde_json::Value) -> Self {
        self.feature_info = feature_info;
        self
    }

    /// The partitions, one per slice.
    #[must_use]
    pub fn slices(&self) -> &[Partition<T>] {
        &self.clustered_rows
    }

    /// The number of slices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clustered_rows.len()
    }

    /// Whether there are no slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clustered_rows.is_empty()
    }

    /// Pairs the slices of `self` with those of `other`, truncated to the
    /// shorter of the two.
    pub fn zip_slices<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = (&'a Partition<T>, &'a Partition<T>)> {
        self.clustered_rows.iter().zip(other.clustered_rows.iter())
    }
}

impl<T> From<Vec<Partition<T>>> for Clustering<T> {
    fn from(clustered_rows: Vec<Partition<T>>) -> Self {
        Self::new(clustered_rows)
    }
}

impl<T> From<Partition<T>> for Clustering<T> {
    fn from(partition: Partition<T>) -> Self {
        Self::new(vec![partition])
    }
}
