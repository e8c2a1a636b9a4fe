//! Posterior trace container.

use crate::error::{Error, Result};

/// Posterior samples for every parameter across all chains and draws.
///
/// Shape is `[chains][draws][params]`; every chain/draw pair holds exactly
/// one value per parameter. Values are on the natural (constrained) scale.
/// A trace is produced once by the sampler and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Trace {
    names: Vec<String>,
    chains: Vec<Vec<Vec<f64>>>,
    acceptance: Vec<f64>,
}

impl Trace {
    /// Assemble a trace from per-chain draws.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if chains are ragged or a draw's length does
    /// not match the parameter count.
    pub(crate) fn new(names: Vec<String>, chains: Vec<Vec<Vec<f64>>>, acceptance: Vec<f64>) -> Self {
        debug_assert_eq!(chains.len(), acceptance.len());
        if let Some(first) = chains.first() {
            for chain in &chains {
                debug_assert_eq!(chain.len(), first.len(), "ragged chains");
                for draw in chain {
                    debug_assert_eq!(draw.len(), names.len(), "draw width != n_params");
                }
            }
        }
        Self {
            names,
            chains,
            acceptance,
        }
    }

    /// Number of chains.
    pub fn n_chains(&self) -> usize {
        self.chains.len()
    }

    /// Retained draws per chain.
    pub fn n_draws(&self) -> usize {
        self.chains.first().map_or(0, Vec::len)
    }

    /// Number of parameters.
    pub fn n_params(&self) -> usize {
        self.names.len()
    }

    /// Parameter names, in vector order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a parameter by name.
    pub fn name_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Post-burn-in acceptance rate per chain.
    pub fn acceptance_rates(&self) -> &[f64] {
        &self.acceptance
    }

    /// One draw: the full parameter vector at `(chain, draw)`.
    pub fn draw(&self, chain: usize, draw: usize) -> &[f64] {
        &self.chains[chain][draw]
    }

    /// All draws of one parameter within one chain, in order.
    pub fn chain_parameter(&self, chain: usize, param: usize) -> Vec<f64> {
        self.chains[chain].iter().map(|d| d[param]).collect()
    }

    /// All draws of one parameter pooled across chains.
    pub fn pooled_parameter(&self, param: usize) -> Vec<f64> {
        self.chains
            .iter()
            .flat_map(|chain| chain.iter().map(move |d| d[param]))
            .collect()
    }

    /// Posterior mean of one parameter over all chains and draws.
    pub fn posterior_mean(&self, param: usize) -> Result<f64> {
        let pooled = self.pooled_parameter(param);
        if pooled.is_empty() {
            let name = self
                .names
                .get(param)
                .cloned()
                .unwrap_or_else(|| format!("#{param}"));
            return Err(Error::EmptyTrace(name));
        }
        Ok(pooled.iter().sum::<f64>() / pooled.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_trace() -> Trace {
        // 2 chains × 3 draws × 2 params
        Trace::new(
            vec!["a".into(), "b".into()],
            vec![
                vec![vec![1.0, 10.0], vec![2.0, 20.0], vec![3.0, 30.0]],
                vec![vec![4.0, 40.0], vec![5.0, 50.0], vec![6.0, 60.0]],
            ],
            vec![0.3, 0.25],
        )
    }

    #[test]
    fn test_shape_accessors() {
        let trace = toy_trace();
        assert_eq!(trace.n_chains(), 2);
        assert_eq!(trace.n_draws(), 3);
        assert_eq!(trace.n_params(), 2);
        assert_eq!(trace.name_index("b"), Some(1));
        assert_eq!(trace.name_index("missing"), None);
    }

    #[test]
    fn test_pooled_and_mean() {
        let trace = toy_trace();
        assert_eq!(trace.pooled_parameter(0), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mean = trace.posterior_mean(1).expect("non-empty");
        assert!((mean - 35.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_trace_error() {
        let trace = Trace::new(vec!["a".into()], vec![], vec![]);
        assert!(matches!(
            trace.posterior_mean(0),
            Err(Error::EmptyTrace(name)) if name == "a"
        ));
    }
}
