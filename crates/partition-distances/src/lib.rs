#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod error;
pub mod number;

pub use error::{MetricsError, Result};
pub use number::Float;

pub mod algebraic;
pub mod gmd;
pub mod index;
pub mod metrics;
pub mod pairs;
pub mod partition;
mod utils;

#[cfg(feature = "json")]
pub mod loader;

pub use gmd::{gmd, GeneralizedMergeDistance};
pub use partition::{Clustering, Item, Key, Partition, Token};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
