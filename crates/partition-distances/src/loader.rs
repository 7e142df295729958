//! Reading partitions, clusterings and matching pairs from JSON.
//!
//! Tokens are read as [`Key`]s. At the top level of a partition an array is a
//! cluster and anything else is a bare token, i.e. a singleton cluster. Inside
//! a cluster an array is a composite key. Floats, booleans, nulls and objects
//! are not tokens.
//!
//! A clustering is an object with an optional `feature_info` of any JSON
//! shape, kept as is, and a `clustered_rows` array of partitions:
//!
//! ```json
//! {
//!     "feature_info": ["title", "price"],
//!     "clustered_rows": [
//!         [["a", "b"], "c", [["buy", 1], ["abt", 7]]]
//!     ]
//! }
//! ```
//!
//! Input of the wrong shape is reported as
//! [`MetricsError::MalformedPartition`]; invalid JSON as [`MetricsError::Json`].

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::{Clustering, Key, MetricsError, Partition, Result};

/// Deserializes `json`, sorting shape errors from syntax errors.
fn from_json<V: DeserializeOwned>(json: &str) -> Result<V> {
    serde_json::from_str(json).map_err(|e| match e.classify() {
        Category::Data => MetricsError::MalformedPartition { reason: e.to_string() },
        Category::Io | Category::Syntax | Category::Eof => MetricsError::Json(e),
    })
}

/// Reads a partition from a JSON array of items.
///
/// # Errors
///
/// * `MalformedPartition` if an element cannot be read as a token or cluster.
/// * `Json` if `json` is not valid JSON.
///
/// # Example
///
/// ```rust
/// use partition_distances::{loader, Key};
///
/// let partition = loader::parse_partition(r#"["a", ["b", 2], [["c", 3]]]"#).unwrap();
///
/// assert_eq!(partition.len(), 3);
/// assert_eq!(partition.clusters()[0], vec![Key::from("a")]);
/// assert_eq!(partition.clusters()[1], vec![Key::from("b"), Key::Int(2)]);
/// assert_eq!(partition.clusters()[2], vec![Key::from(vec![Key::from("c"), Key::Int(3)])]);
/// ```
pub fn parse_partition(json: &str) -> Result<Partition<Key>> {
    let partition: Partition<Key> = from_json(json)?;
    ftlog::debug!(
        "Read a partition of {} tokens in {} clusters.",
        partition.num_tokens(),
        partition.len()
    );
    Ok(partition)
}

/// Reads a clustering from a JSON object.
///
/// # Errors
///
/// * `MalformedPartition` if the object does not have the expected shape.
/// * `Json` if `json` is not valid JSON.
pub fn parse_clustering(json: &str) -> Result<Clustering<Key>> {
    let clustering: Clustering<Key> = from_json(json)?;
    ftlog::debug!("Read a clustering of {} slices.", clustering.len());
    Ok(clustering)
}

/// Reads matching pairs from a JSON array of two-element arrays.
///
/// # Errors
///
/// * `MalformedPartition` if an element is not a pair of tokens.
/// * `Json` if `json` is not valid JSON.
pub fn parse_match_pairs(json: &str) -> Result<Vec<(Key, Key)>> {
    let pairs: Vec<(Key, Key)> = from_json(json)?;
    ftlog::debug!("Read {} matching pairs.", pairs.len());
    Ok(pairs)
}

/// Reads a clustering from a JSON file.
///
/// # Errors
///
/// * `Io` if the file cannot be read.
/// * See [`parse_clustering`].
pub fn read_clustering<P: AsRef<Path>>(path: P) -> Result<Clustering<Key>> {
    let path = path.as_ref();
    ftlog::info!("Reading clustering from {path:?}.");
    parse_clustering(&std::fs::read_to_string(path)?)
}

/// Reads a partition from a JSON file.
///
/// # Errors
///
/// * `Io` if the file cannot be read.
/// * See [`parse_partition`].
pub fn read_partition<P: AsRef<Path>>(path: P) -> Result<Partition<Key>> {
    let path = path.as_ref();
    ftlog::info!("Reading partition from {path:?}.");
    parse_partition(&std::fs::read_to_string(path)?)
}
