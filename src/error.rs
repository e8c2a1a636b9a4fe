//! Crate error type.

use thiserror::Error;

/// Errors produced while building the model or analyzing a fit.
#[derive(Debug, Error)]
pub enum Error {
    /// A region code points outside the per-region effect array.
    ///
    /// Raised before model construction when a dataset's region encoding
    /// is not a contiguous `0..n_regions` range (e.g. rows for region C
    /// without any rows for A or B).
    #[error("region index {index} out of bounds for {n_regions} declared regions")]
    RegionIndexOutOfBounds {
        /// The offending region code.
        index: usize,
        /// Number of distinct regions in the dataset.
        n_regions: usize,
    },

    /// The dataset contains no observations.
    #[error("dataset contains no observations")]
    EmptyDataset,

    /// Sampler configuration is unusable (zero chains, zero draws, ...).
    #[error("invalid sampler configuration: {0}")]
    InvalidConfig(String),

    /// The trace holds no draws for the requested parameter.
    #[error("trace contains no draws for parameter `{0}`")]
    EmptyTrace(String),

    /// Posterior-predictive output does not line up with the observed data.
    ///
    /// The predictive mean must have exactly one entry per observation
    /// before it can be compared or plotted against the observed values.
    #[error("posterior predictive length {actual} does not match observed length {expected}")]
    PredictiveShapeMismatch {
        /// Number of observed consumption values.
        expected: usize,
        /// Number of predictive means actually produced.
        actual: usize,
    },
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;
