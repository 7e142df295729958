//! Agreement metrics computed with the generalized merge distance.
//!
//! Each metric is a configuration of the
//! [`GeneralizedMergeDistance`](crate::gmd::GeneralizedMergeDistance) engine
//! with a specific pair of cost functions:
//!
//! | Metric | Split cost | Merge cost | Post-processing |
//! |--------|------------|------------|-----------------|
//! | Basic merge distance | `1` | `1` | none |
//! | Pairwise precision | `x * y` | `0` | normalized by the denormalized standard |
//! | Pairwise recall | `0` | `x * y` | normalized by the denormalized standard |
//! | Variation of information | entropy change | entropy change | none |
//!
//! The functions at the root of this module compare two partitions. Those in
//! [`slices`] compare two [`Clustering`](crate::Clustering)s slice by slice.

mod information;
mod merge;
mod pairwise;
pub mod slices;

pub use information::variation_of_information;
pub use merge::basic_merge_distance;
pub use pairwise::{pairwise_f1, pairwise_precision, pairwise_recall};

use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Float, Partition, Result, Token};

/// All merge-distance based metrics for one pair of partitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation<U> {
    /// The basic merge distance.
    pub basic_merge_distance: U,
    /// The pairwise precision.
    pub pairwise_precision: U,
    /// The pairwise recall.
    pub pairwise_recall: U,
    /// The pairwise F1 score.
    pub pairwise_f1: U,
    /// The variation of information.
    pub variation_of_information: U,
}

impl<U: Float> Evaluation<U> {
    /// Computes every metric of `result` against `standard`.
    ///
    /// # Errors
    ///
    /// See [`GeneralizedMergeDistance::distance`](crate::gmd::GeneralizedMergeDistance::distance).
    pub fn compute<T: Token>(result: &Partition<T>, standard: &Partition<T>) -> Result<Self> {
        let pairwise_precision = pairwise_precision(result, standard)?;
        let pairwise_recall = pairwise_recall(result, standard)?;

        Ok(Self {
            basic_merge_distance: basic_merge_distance(result, standard)?,
            pairwise_precision,
            pairwise_recall,
            pairwise_f1: U::harmonic_mean(pairwise_precision, pairwise_recall),
            variation_of_information: variation_of_information(result, standard)?,
        })
    }

    /// A one-line summary of the scores.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "BMD={:.1} P={:.3} R={:.3} F1={:.3} VI={:.4}",
            self.basic_merge_distance.as_f64(),
            self.pairwise_precision.as_f64(),
            self.pairwise_recall.as_f64(),
            self.pairwise_f1.as_f64(),
            self.variation_of_information.as_f64()
        )
    }
}

impl<U: Float> Display for Evaluation<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Merge distance evaluation:")?;
        writeln!(f, "  basic merge distance:     {:.1}", self.basic_merge_distance.as_f64())?;
        writeln!(f, "  pairwise precision:       {:.4}", self.pairwise_precision.as_f64())?;
        writeln!(f, "  pairwise recall:          {:.4}", self.pairwise_recall.as_f64())?;
        writeln!(f, "  pairwise F1:              {:.4}", self.pairwise_f1.as_f64())?;
        write!(f, "  variation of information: {:.4}", self.variation_of_information.as_f64())
    }
}
