//! Partitions of a record set and the tokens they are made of.
//!
//! We provide:
//!
//! * `Token`: anything with structural equality and hashing.
//! * `Key`: a concrete token for loaded data, possibly a composite key.
//! * `Item`: one element of un-normalized input, either a bare token or a
//!   cluster of tokens.
//! * `Partition`: the canonical sequence of clusters that every metric reads.
//! * `Clustering`: a sequence of partitions, one per slice.

mod _clustering;
mod _item;
mod _key;
mod _partition;

pub use _clustering::Clustering;
pub use _item::Item;
pub use _key::Key;
pub use _partition::Partition;

use core::{fmt::Debug, hash::Hash};

/// An elementary unit of comparison, e.g. a record identifier.
///
/// Two tokens with the same content are the same token, so lookups work
/// across independently constructed partitions.
pub trait Token: Hash + Eq + Clone + Debug {}

impl<T: Hash + Eq + Clone + Debug> Token for T {}
