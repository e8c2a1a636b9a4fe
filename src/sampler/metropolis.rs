//! Adaptive random-walk Metropolis–Hastings sampler.
//!
//! Each chain runs an independent random walk over the model's
//! unconstrained parameter vector. Proposals are isotropic Gaussian steps
//! shaped by the model's per-parameter base scales and a global step-size
//! factor adapted toward the target acceptance rate during burn-in
//! (Robbins–Monro). Adaptation freezes once burn-in ends, so the retained
//! draws come from a fixed-kernel Markov chain.
//!
//! Chain RNG streams are derived from the base seed with `long_jump`, so a
//! run is reproducible bit-for-bit given the same seed and configuration.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::Config;
use crate::error::Result;
use crate::model::HierarchicalModel;
use crate::sampler::Trace;

/// Initial global step factor: the classic 2.38/√d random-walk scaling.
fn initial_step(dim: usize) -> f64 {
    2.38 / (dim as f64).sqrt()
}

/// Draw posterior samples for `model` under `config`.
///
/// Returns a [`Trace`] with `config.chains` chains of `config.draws`
/// retained draws each, on the natural parameter scale.
pub fn sample(model: &HierarchicalModel, config: &Config) -> Result<Trace> {
    config.validate()?;

    let mut seed_rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let mut chains = Vec::with_capacity(config.chains);
    let mut acceptance = Vec::with_capacity(config.chains);

    for _ in 0..config.chains {
        let chain_rng = seed_rng.clone();
        seed_rng.long_jump();

        let (draws, rate) = run_chain(model, config, chain_rng);
        chains.push(draws);
        acceptance.push(rate);
    }

    Ok(Trace::new(
        model.param_names().to_vec(),
        chains,
        acceptance,
    ))
}

/// Run a single chain; returns retained draws and the post-burn-in
/// acceptance rate.
fn run_chain(
    model: &HierarchicalModel,
    config: &Config,
    mut rng: Xoshiro256PlusPlus,
) -> (Vec<Vec<f64>>, f64) {
    let dim = model.n_params();
    let base_scales = model.base_scales();

    // Jittered start so chains do not share an initial state.
    let mut theta = model.initial_point();
    for (t, scale) in theta.iter_mut().zip(&base_scales) {
        let z: f64 = rng.sample(StandardNormal);
        *t += config.init_jitter * scale * z;
    }
    let mut lp = model.log_posterior(&theta);

    let mut log_step = initial_step(dim).ln();
    let mut proposal = vec![0.0; dim];
    let mut draws = Vec::with_capacity(config.draws);
    let mut accepted_after_burn_in = 0usize;

    let total = config.burn_in + config.draws;
    for iter in 0..total {
        let step = log_step.exp();
        for j in 0..dim {
            let z: f64 = rng.sample(StandardNormal);
            proposal[j] = theta[j] + step * base_scales[j] * z;
        }

        let lp_proposal = model.log_posterior(&proposal);
        let log_alpha = lp_proposal - lp;
        let accept = log_alpha >= 0.0 || rng.random::<f64>().ln() < log_alpha;
        if accept {
            theta.copy_from_slice(&proposal);
            lp = lp_proposal;
        }

        if iter < config.burn_in {
            // Robbins–Monro step-size adaptation toward the target rate.
            let alpha = log_alpha.exp().min(1.0);
            let gain = (iter as f64 + 1.0).powf(-0.6);
            log_step += gain * (alpha - config.target_accept);
        } else {
            if accept {
                accepted_after_burn_in += 1;
            }
            draws.push(model.constrain(&theta));
        }
    }

    let rate = accepted_after_burn_in as f64 / config.draws as f64;
    (draws, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SEED;
    use crate::data::Dataset;
    use crate::model::{MU_C, SIGMA_C};

    fn quick_config() -> Config {
        Config {
            draws: 400,
            burn_in: 400,
            chains: 2,
            ..Config::default()
        }
    }

    fn fitted() -> (HierarchicalModel, Trace) {
        let model =
            HierarchicalModel::new(&Dataset::synthetic(DEFAULT_SEED)).expect("valid dataset");
        let trace = sample(&model, &quick_config()).expect("sampling succeeds");
        (model, trace)
    }

    #[test]
    fn test_trace_shape() {
        let (model, trace) = fitted();
        assert_eq!(trace.n_chains(), 2);
        assert_eq!(trace.n_draws(), 400);
        assert_eq!(trace.n_params(), model.n_params());
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let model =
            HierarchicalModel::new(&Dataset::synthetic(DEFAULT_SEED)).expect("valid dataset");
        let config = quick_config();
        let a = sample(&model, &config).expect("first run");
        let b = sample(&model, &config).expect("second run");
        for chain in 0..a.n_chains() {
            for draw in 0..a.n_draws() {
                assert_eq!(a.draw(chain, draw), b.draw(chain, draw));
            }
        }
    }

    #[test]
    fn test_acceptance_rate_reasonable() {
        let (_, trace) = fitted();
        for (chain, &rate) in trace.acceptance_rates().iter().enumerate() {
            assert!(
                (0.03..0.8).contains(&rate),
                "chain {chain} acceptance rate {rate} outside sane range"
            );
        }
    }

    #[test]
    fn test_posterior_values_plausible() {
        let (_, trace) = fitted();
        let mu = trace.posterior_mean(MU_C).expect("mu_c draws");
        let sigma = trace.posterior_mean(SIGMA_C).expect("sigma_c draws");
        assert!(
            (150.0..550.0).contains(&mu),
            "posterior mean of mu_c implausible: {mu}"
        );
        assert!(sigma > 0.0, "sigma_c must stay positive, got {sigma}");
        assert!(sigma.is_finite());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let model =
            HierarchicalModel::new(&Dataset::synthetic(DEFAULT_SEED)).expect("valid dataset");
        let config = Config {
            chains: 0,
            ..Config::default()
        };
        assert!(sample(&model, &config).is_err());
    }
}
