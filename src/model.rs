//! Hierarchical model specification.
//!
//! The joint density over latent parameters and observed consumption:
//!
//! ```text
//! mu_c              ~ Normal(350, 50)          global consumption mean
//! sigma_c           ~ HalfNormal(50)           shared scale (group + residual)
//! region_effect[r]  ~ Normal(mu_c, sigma_c)    one per distinct region
//! coeff[j]          ~ Normal(0, 10)            tank level, temperature, usage rate
//! consumption[i]    ~ Normal(region_effect[region(i)] + Σ coeff[j]·x[j][i], sigma_c)
//! ```
//!
//! The sampler works in unconstrained space: `sigma_c` is parameterized as
//! its logarithm, with the Jacobian term folded into the log posterior.
//! Reported traces carry the constrained (natural-scale) values.

use crate::constants::LOG_2PI;
use crate::data::{Dataset, Region};
use crate::error::{Error, Result};

/// Number of fixed-effect covariates (tank level, temperature, usage rate).
pub const N_COVARIATES: usize = 3;

/// Index of `mu_c` in the parameter vector.
pub const MU_C: usize = 0;

/// Index of `sigma_c` in the parameter vector (log-scale when unconstrained).
pub const SIGMA_C: usize = 1;

/// Prior hyperparameters.
///
/// Defaults match the canonical analysis; override via
/// [`HierarchicalModel::with_priors`] for sensitivity checks.
#[derive(Debug, Clone, Copy)]
pub struct Priors {
    /// Center of the `mu_c` hyperprior.
    pub mu_c_mean: f64,
    /// Scale of the `mu_c` hyperprior.
    pub mu_c_sd: f64,
    /// Scale of the half-normal `sigma_c` hyperprior.
    pub sigma_c_scale: f64,
    /// Scale of the zero-centered coefficient priors.
    pub coeff_sd: f64,
}

impl Default for Priors {
    fn default() -> Self {
        Self {
            mu_c_mean: 350.0,
            mu_c_sd: 50.0,
            sigma_c_scale: 50.0,
            coeff_sd: 10.0,
        }
    }
}

/// Fully specified joint probability model bound to a dataset.
///
/// Construction validates the dataset's region-index invariant, so a built
/// model can always index its per-region effect array safely.
#[derive(Debug, Clone)]
pub struct HierarchicalModel {
    priors: Priors,
    n_regions: usize,
    region_idx: Vec<usize>,
    covariates: [Vec<f64>; N_COVARIATES],
    consumption: Vec<f64>,
    names: Vec<String>,
}

impl HierarchicalModel {
    /// Build the model for a dataset with default priors.
    pub fn new(dataset: &Dataset) -> Result<Self> {
        Self::with_priors(dataset, Priors::default())
    }

    /// Build the model with explicit prior hyperparameters.
    pub fn with_priors(dataset: &Dataset, priors: Priors) -> Result<Self> {
        dataset.validate()?;
        let n_regions = dataset.n_regions();

        let mut names = vec!["mu_c".to_string(), "sigma_c".to_string()];
        for r in 0..n_regions {
            // Validation guarantees region codes form a contiguous 0..n_regions range.
            let region = Region::from_index(r).ok_or(Error::RegionIndexOutOfBounds {
                index: r,
                n_regions,
            })?;
            names.push(format!("region_effect[{region}]"));
        }
        names.push("tank_level_coeff".to_string());
        names.push("temperature_coeff".to_string());
        names.push("usage_rate_coeff".to_string());

        Ok(Self {
            priors,
            n_regions,
            region_idx: dataset.region_indices(),
            covariates: [
                dataset.tank_levels(),
                dataset.temperatures(),
                dataset.usage_rates(),
            ],
            consumption: dataset.consumption(),
            names,
        })
    }

    /// Number of latent parameters (2 global + one effect per region + 3 coefficients).
    pub fn n_params(&self) -> usize {
        2 + self.n_regions + N_COVARIATES
    }

    /// Number of observations the model is conditioned on.
    pub fn n_observations(&self) -> usize {
        self.consumption.len()
    }

    /// Number of distinct regions.
    pub fn n_regions(&self) -> usize {
        self.n_regions
    }

    /// Parameter names, in vector order.
    pub fn param_names(&self) -> &[String] {
        &self.names
    }

    /// Observed consumption values.
    pub fn observed(&self) -> &[f64] {
        &self.consumption
    }

    /// Index of the effect for region code `r` in the parameter vector.
    pub fn region_effect_index(&self, r: usize) -> usize {
        2 + r
    }

    /// Index of covariate coefficient `j` in the parameter vector.
    pub fn coeff_index(&self, j: usize) -> usize {
        2 + self.n_regions + j
    }

    /// Starting point for the chains, in unconstrained space.
    ///
    /// Prior centers: `mu_c` and the region effects at the prior mean,
    /// `log sigma_c` at the log of the half-normal scale, coefficients at 0.
    pub fn initial_point(&self) -> Vec<f64> {
        let mut theta = vec![0.0; self.n_params()];
        theta[MU_C] = self.priors.mu_c_mean;
        theta[SIGMA_C] = self.priors.sigma_c_scale.ln();
        for r in 0..self.n_regions {
            theta[self.region_effect_index(r)] = self.priors.mu_c_mean;
        }
        theta
    }

    /// Rough per-parameter posterior scales used to shape random-walk
    /// proposals. Only relative magnitudes matter; the sampler adapts a
    /// global factor on top of these during burn-in.
    pub fn base_scales(&self) -> Vec<f64> {
        let mut scales = vec![0.0; self.n_params()];
        scales[MU_C] = 35.0;
        scales[SIGMA_C] = 0.2;
        for r in 0..self.n_regions {
            scales[self.region_effect_index(r)] = 40.0;
        }
        // Coefficient scales reflect each covariate's spread in the data.
        for j in 0..N_COVARIATES {
            let x = &self.covariates[j];
            let n = x.len() as f64;
            let mean = x.iter().sum::<f64>() / n;
            let var = x.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            let sd = var.sqrt().max(1e-3);
            scales[self.coeff_index(j)] = (self.priors.sigma_c_scale / (n.sqrt() * sd))
                .min(self.priors.coeff_sd);
        }
        scales
    }

    /// Log posterior density at an unconstrained parameter vector,
    /// including the log-Jacobian of the `sigma_c` transform.
    ///
    /// Returns `f64::NEG_INFINITY` outside the support.
    pub fn log_posterior(&self, theta: &[f64]) -> f64 {
        debug_assert_eq!(theta.len(), self.n_params());

        let mu_c = theta[MU_C];
        let log_sigma = theta[SIGMA_C];
        let sigma = log_sigma.exp();
        if !sigma.is_finite() || sigma <= 0.0 {
            return f64::NEG_INFINITY;
        }

        let mut lp = normal_logpdf(mu_c, self.priors.mu_c_mean, self.priors.mu_c_sd);
        // Half-normal prior on sigma plus the log|d sigma / d log_sigma| Jacobian.
        lp += half_normal_logpdf(sigma, self.priors.sigma_c_scale) + log_sigma;

        for r in 0..self.n_regions {
            lp += normal_logpdf(theta[self.region_effect_index(r)], mu_c, sigma);
        }
        for j in 0..N_COVARIATES {
            lp += normal_logpdf(theta[self.coeff_index(j)], 0.0, self.priors.coeff_sd);
        }

        for i in 0..self.consumption.len() {
            let pred = self.linear_predictor(theta, i);
            lp += normal_logpdf(self.consumption[i], pred, sigma);
        }

        if lp.is_nan() {
            f64::NEG_INFINITY
        } else {
            lp
        }
    }

    /// Linear predictor for observation `i`.
    ///
    /// Works on either parameterization: the predictor only touches the
    /// region effects and coefficients, which are identical in constrained
    /// and unconstrained space.
    pub fn linear_predictor(&self, theta: &[f64], i: usize) -> f64 {
        let mut pred = theta[self.region_effect_index(self.region_idx[i])];
        for j in 0..N_COVARIATES {
            pred += theta[self.coeff_index(j)] * self.covariates[j][i];
        }
        pred
    }

    /// Map an unconstrained vector to natural scale (`sigma_c = exp(log_sigma)`).
    pub fn constrain(&self, theta: &[f64]) -> Vec<f64> {
        let mut out = theta.to_vec();
        out[SIGMA_C] = theta[SIGMA_C].exp();
        out
    }
}

/// Gaussian log density.
fn normal_logpdf(x: f64, mean: f64, sd: f64) -> f64 {
    let z = (x - mean) / sd;
    -0.5 * z * z - sd.ln() - 0.5 * LOG_2PI
}

/// Half-normal log density on `x > 0` with the given scale.
fn half_normal_logpdf(x: f64, scale: f64) -> f64 {
    let z = x / scale;
    std::f64::consts::LN_2 - 0.5 * z * z - scale.ln() - 0.5 * LOG_2PI
}
