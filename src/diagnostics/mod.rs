//! Posterior diagnostics.
//!
//! - Quantile computation (Type 2, Hyndman & Fan)
//! - Split-R̂ and effective sample size
//! - Per-parameter summary table

mod convergence;
mod quantile;
mod summary;

pub use convergence::{effective_sample_size, split_rhat};
pub use quantile::{credible_interval, quantile};
pub use summary::{summarize, SummaryRow};
