//! Posterior-predictive simulation.
//!
//! Regenerates consumption values per observation from the fitted
//! posterior: for every retained draw, one simulated value per observation
//! from `Normal(linear predictor, sigma_c)`, then averaged over chains and
//! draws. The predictive mean is guaranteed to line up one-to-one with the
//! observed consumption vector before it can be plotted against it.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::{Error, Result};
use crate::model::{HierarchicalModel, SIGMA_C};
use crate::sampler::Trace;

/// Posterior-predictive consumption, reduced over chains and draws.
#[derive(Debug, Clone)]
pub struct PosteriorPredictive {
    mean: Vec<f64>,
    sd: Vec<f64>,
}

impl PosteriorPredictive {
    /// Predictive mean per observation (averaged over chains and draws).
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Predictive standard deviation per observation.
    pub fn sd(&self) -> &[f64] {
        &self.sd
    }

    /// Number of observations covered.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    /// Whether the predictive is empty.
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Check that the predictive mean lines up with an observed vector.
    ///
    /// Must pass before predicted and observed values are compared or
    /// plotted; a mismatch is a hard error, not a warning.
    pub fn validate_against(&self, observed: &[f64]) -> Result<()> {
        if self.mean.len() != observed.len() {
            return Err(Error::PredictiveShapeMismatch {
                expected: observed.len(),
                actual: self.mean.len(),
            });
        }
        Ok(())
    }
}

/// Draw posterior-predictive consumption for every observation.
///
/// One simulated value per (chain, draw, observation); the per-observation
/// mean and standard deviation are accumulated without materializing the
/// full predictive cube.
pub fn sample_posterior_predictive(
    model: &HierarchicalModel,
    trace: &Trace,
    seed: u64,
) -> Result<PosteriorPredictive> {
    let n_obs = model.n_observations();
    if trace.n_draws() == 0 || trace.n_chains() == 0 {
        return Err(Error::EmptyTrace("posterior predictive".into()));
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut sum = vec![0.0; n_obs];
    let mut sum_sq = vec![0.0; n_obs];
    let total = (trace.n_chains() * trace.n_draws()) as f64;

    for chain in 0..trace.n_chains() {
        for draw in 0..trace.n_draws() {
            let params = trace.draw(chain, draw);
            let sigma = params[SIGMA_C];
            for i in 0..n_obs {
                let z: f64 = rng.sample(StandardNormal);
                let simulated = model.linear_predictor(params, i) + sigma * z;
                sum[i] += simulated;
                sum_sq[i] += simulated * simulated;
            }
        }
    }

    let mean: Vec<f64> = sum.iter().map(|s| s / total).collect();
    let sd: Vec<f64> = sum_sq
        .iter()
        .zip(&mean)
        .map(|(&sq, &m)| (sq / total - m * m).max(0.0).sqrt())
        .collect();

    let predictive = PosteriorPredictive { mean, sd };
    predictive.validate_against(model.observed())?;
    Ok(predictive)
}
