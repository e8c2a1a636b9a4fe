//! Numeric constants shared across modules.

/// ln(2π), used by the Gaussian log-density kernels.
pub const LOG_2PI: f64 = 1.8378770664093453;

/// Default RNG seed for data generation and sampling.
pub const DEFAULT_SEED: u64 = 42;
