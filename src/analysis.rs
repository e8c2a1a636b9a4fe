//! Main `Analysis` entry point and builder.

use crate::config::Config;
use crate::data::Dataset;
use crate::diagnostics::{self, SummaryRow};
use crate::error::Result;
use crate::model::HierarchicalModel;
use crate::predictive::{self, PosteriorPredictive};
use crate::sampler::{self, Trace};

/// A completed fit: model, trace, summary, and posterior predictive.
#[derive(Debug, Clone)]
pub struct Fit {
    /// The model the trace was drawn from.
    pub model: HierarchicalModel,
    /// Posterior samples across all chains and draws.
    pub trace: Trace,
    /// Per-parameter summary statistics.
    pub summary: Vec<SummaryRow>,
    /// Posterior-predictive consumption, reduced over chains and draws.
    pub predictive: PosteriorPredictive,
}

/// Main entry point for the consumption analysis.
///
/// Use the builder pattern to configure and run a fit.
///
/// # Example
///
/// ```no_run
/// use tankfit::{Analysis, Dataset};
///
/// let dataset = Dataset::synthetic(42);
/// let fit = Analysis::new()
///     .draws(2000)
///     .chains(4)
///     .seed(42)
///     .run(&dataset)
///     .expect("fit");
///
/// for row in &fit.summary {
///     println!("{}: {:.1}", row.name, row.mean);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    config: Config,
}

impl Analysis {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set retained draws per chain.
    pub fn draws(mut self, n: usize) -> Self {
        self.config.draws = n;
        self
    }

    /// Set burn-in iterations per chain.
    pub fn burn_in(mut self, n: usize) -> Self {
        self.config.burn_in = n;
        self
    }

    /// Set the number of chains.
    pub fn chains(mut self, n: usize) -> Self {
        self.config.chains = n;
        self
    }

    /// Set the base RNG seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the target acceptance rate for burn-in adaptation.
    pub fn target_accept(mut self, rate: f64) -> Self {
        self.config.target_accept = rate;
        self
    }

    /// Set the credible-interval probability mass.
    pub fn credible_mass(mut self, mass: f64) -> Self {
        self.config.credible_mass = mass;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full pipeline against a dataset: validate, build the model,
    /// sample the posterior, summarize, and draw the posterior predictive.
    pub fn run(self, dataset: &Dataset) -> Result<Fit> {
        self.config.validate()?;

        let model = HierarchicalModel::new(dataset)?;
        let trace = sampler::sample(&model, &self.config)?;
        let summary = diagnostics::summarize(&trace, self.config.credible_mass)?;
        let predictive =
            predictive::sample_posterior_predictive(&model, &trace, self.config.seed)?;

        Ok(Fit {
            model,
            trace,
            summary,
            predictive,
        })
    }
}
