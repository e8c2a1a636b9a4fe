//! Posterior summary statistics.

use serde::Serialize;

use crate::diagnostics::convergence::{effective_sample_size, split_rhat};
use crate::diagnostics::quantile::credible_interval;
use crate::error::{Error, Result};
use crate::sampler::Trace;

/// One row of the posterior summary table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    /// Parameter name.
    pub name: String,
    /// Posterior mean over all chains and draws.
    pub mean: f64,
    /// Posterior standard deviation.
    pub sd: f64,
    /// Lower bound of the equal-tailed credible interval.
    pub ci_low: f64,
    /// Upper bound of the equal-tailed credible interval.
    pub ci_high: f64,
    /// Effective sample size (Geyer truncation, summed over chains).
    pub ess: f64,
    /// Split-R̂ potential scale reduction.
    pub r_hat: f64,
}

/// Summarize every parameter in the trace.
///
/// Produces exactly one row per declared parameter, in parameter order.
/// `credible_mass` sets the probability mass of the reported interval.
pub fn summarize(trace: &Trace, credible_mass: f64) -> Result<Vec<SummaryRow>> {
    let mut rows = Vec::with_capacity(trace.n_params());

    for param in 0..trace.n_params() {
        let pooled = trace.pooled_parameter(param);
        if pooled.is_empty() {
            return Err(Error::EmptyTrace(trace.names()[param].clone()));
        }

        let n = pooled.len() as f64;
        let mean = pooled.iter().sum::<f64>() / n;
        let sd = if pooled.len() > 1 {
            (pooled.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            0.0
        };
        let (ci_low, ci_high) = credible_interval(&pooled, credible_mass);

        let per_chain: Vec<Vec<f64>> = (0..trace.n_chains())
            .map(|c| trace.chain_parameter(c, param))
            .collect();

        rows.push(SummaryRow {
            name: trace.names()[param].clone(),
            mean,
            sd,
            ci_low,
            ci_high,
            ess: effective_sample_size(&per_chain),
            r_hat: split_rhat(&per_chain),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_trace() -> Trace {
        let draws_a: Vec<Vec<f64>> = (0..100).map(|i| vec![i as f64, 1.0]).collect();
        let draws_b: Vec<Vec<f64>> = (0..100).map(|i| vec![i as f64, 1.0]).collect();
        Trace::new(
            vec!["ramp".into(), "flat".into()],
            vec![draws_a, draws_b],
            vec![0.3, 0.3],
        )
    }

    #[test]
    fn test_one_row_per_parameter() {
        let rows = summarize(&toy_trace(), 0.94).expect("summary");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "ramp");
        assert_eq!(rows[1].name, "flat");
    }

    #[test]
    fn test_mean_and_interval() {
        let rows = summarize(&toy_trace(), 0.94).expect("summary");
        assert!((rows[0].mean - 49.5).abs() < 1e-9);
        assert!(rows[0].ci_low < rows[0].mean && rows[0].mean < rows[0].ci_high);
        assert_eq!(rows[1].mean, 1.0);
        assert_eq!(rows[1].sd, 0.0);
    }

    #[test]
    fn test_summary_serializes() {
        let rows = summarize(&toy_trace(), 0.94).expect("summary");
        let json = serde_json::to_string(&rows).expect("serialize");
        assert!(json.contains("\"ramp\""));
        assert!(json.contains("r_hat"));
    }

    #[test]
    fn test_empty_trace_rejected() {
        let trace = Trace::new(vec!["a".into()], vec![], vec![]);
        assert!(matches!(
            summarize(&trace, 0.94),
            Err(Error::EmptyTrace(_))
        ));
    }
}
