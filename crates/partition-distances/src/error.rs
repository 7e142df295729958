//! Errors raised while comparing partitions.

use core::fmt::Debug;

use thiserror::Error;

/// A `Result` whose error is a [`MetricsError`].
pub type Result<T> = core::result::Result<T, MetricsError>;

/// Everything that can go wrong while computing a metric or loading its input.
///
/// Division by zero in a ratio is never an error: every ratio in this crate
/// has a defined value when its denominator vanishes.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A token of the standard partition is absent from the result partition.
    #[error("token {token} of the standard partition is missing from the result partition; reconcile both partitions first")]
    MissingToken {
        /// The `Debug` rendering of the offending token.
        token: String,
    },

    /// The input is not a partition, or cannot be read as one.
    #[error("malformed partition: {reason}")]
    MalformedPartition {
        /// What is wrong with the input.
        reason: String,
    },

    /// The first failure of a batch of slices.
    #[error("slice {index}: {source}")]
    Slice {
        /// The position of the failing slice.
        index: usize,
        /// What went wrong in that slice.
        #[source]
        source: Box<MetricsError>,
    },

    /// The JSON input could not be parsed.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The input file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MetricsError {
    /// A `MissingToken` error naming `token`.
    pub fn missing_token<T: Debug + ?Sized>(token: &T) -> Self {
        Self::MissingToken {
            token: format!("{token:?}"),
        }
    }

    /// A `MalformedPartition` error for a token that occurs more than once.
    pub fn repeated_token<T: Debug + ?Sized>(token: &T) -> Self {
        Self::MalformedPartition {
            reason: format!("token {token:?} occurs more than once in the result partition"),
        }
    }

    /// Attributes this error to the slice at `index` of a batch.
    #[must_use]
    pub fn in_slice(self, index: usize) -> Self {
        Self::Slice {
            index,
            source: Box::new(self),
        }
    }
}
