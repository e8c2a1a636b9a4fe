//! Convergence diagnostics: split-R̂ and effective sample size.
//!
//! Split-R̂ follows Gelman et al.: each chain is split in half and the
//! potential scale reduction factor is computed over the resulting
//! sequences, which also catches within-chain drift. ESS uses Geyer's
//! initial positive sequence truncation of the autocorrelation sum,
//! summed over chains.

/// Split-R̂ potential scale reduction for one parameter.
///
/// `chains` holds the per-chain draw sequences. Values near 1.0 indicate
/// the chains agree; values noticeably above 1.0 indicate poor mixing.
/// Returns 1.0 when there is not enough data to split (fewer than 4 draws
/// per chain) or when the draws are constant.
pub fn split_rhat(chains: &[Vec<f64>]) -> f64 {
    let mut sequences: Vec<&[f64]> = Vec::with_capacity(chains.len() * 2);
    for chain in chains {
        if chain.len() < 4 {
            return 1.0;
        }
        let mid = chain.len() / 2;
        // Drop the middle element of odd-length chains so halves match.
        sequences.push(&chain[..mid]);
        sequences.push(&chain[chain.len() - mid..]);
    }
    if sequences.is_empty() {
        return 1.0;
    }

    let n = sequences[0].len() as f64;
    let m = sequences.len() as f64;

    let means: Vec<f64> = sequences.iter().map(|s| mean(s)).collect();
    let vars: Vec<f64> = sequences
        .iter()
        .zip(&means)
        .map(|(s, &mu)| sample_variance(s, mu))
        .collect();

    let w = mean(&vars);
    let grand_mean = mean(&means);
    let b = n * sample_variance(&means, grand_mean);

    if w <= f64::EPSILON {
        return 1.0;
    }

    let var_plus = (n - 1.0) / n * w + b / n;
    (var_plus / w).sqrt()
}

/// Effective sample size for one parameter, summed over chains.
///
/// Per chain: integrated autocorrelation time via Geyer's initial positive
/// sequence (pairwise sums of autocorrelations truncated at the first
/// negative pair), then `n / tau`, clamped to at most `n`. Constant chains
/// contribute nothing.
pub fn effective_sample_size(chains: &[Vec<f64>]) -> f64 {
    chains.iter().map(|chain| chain_ess(chain)).sum()
}

fn chain_ess(chain: &[f64]) -> f64 {
    let n = chain.len();
    if n < 4 {
        return n as f64;
    }

    let mu = mean(chain);
    let c0 = autocovariance(chain, mu, 0);
    if c0 <= f64::EPSILON {
        return 0.0;
    }

    let mut tau = 1.0;
    let mut t = 1;
    while t + 1 < n {
        let pair =
            (autocovariance(chain, mu, t) + autocovariance(chain, mu, t + 1)) / c0;
        if pair < 0.0 {
            break;
        }
        tau += 2.0 * pair;
        t += 2;
    }

    (n as f64 / tau).clamp(0.0, n as f64)
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance around a given mean.
fn sample_variance(data: &[f64], mu: f64) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    data.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / (data.len() as f64 - 1.0)
}

/// Biased (1/n) autocovariance at lag `t`.
fn autocovariance(data: &[f64], mu: f64, t: usize) -> f64 {
    let n = data.len();
    (0..n - t)
        .map(|i| (data[i] - mu) * (data[i + t] - mu))
        .sum::<f64>()
        / n as f64
}
