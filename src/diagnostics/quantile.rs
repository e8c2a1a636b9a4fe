//! Type 2 quantiles (inverse empirical CDF with averaging).
//!
//! Type 2 formula (for sorted sample x of size n at probability p):
//! ```text
//! h = n * p + 0.5
//! q = (x[floor(h)] + x[ceil(h)]) / 2
//! ```
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical
//! packages." The American Statistician 50(4):361–365.

/// Compute a single quantile of `data` at probability `p`.
///
/// Uses `select_nth_unstable` for O(n) expected time; the slice is
/// partially reordered as a side effect.
///
/// # Panics
///
/// Panics if `data` is empty or `p` is outside [0, 1].
pub fn quantile(data: &mut [f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "quantile probability must be in [0, 1]"
    );

    let n = data.len();
    if n == 1 {
        return data[0];
    }

    let h = n as f64 * p + 0.5;
    let floor_idx = (h.floor() as usize).saturating_sub(1).min(n - 1);
    let ceil_idx = (h.ceil() as usize).saturating_sub(1).min(n - 1);

    if floor_idx == ceil_idx {
        let (_, &mut val, _) = data.select_nth_unstable_by(floor_idx, |a, b| a.total_cmp(b));
        return val;
    }

    // Select the larger index first; everything before it is <= it, so the
    // second selection stays correct.
    let (_, &mut ceil_val, _) = data.select_nth_unstable_by(ceil_idx, |a, b| a.total_cmp(b));
    let (_, &mut floor_val, _) = data.select_nth_unstable_by(floor_idx, |a, b| a.total_cmp(b));

    (floor_val + ceil_val) / 2.0
}

/// Equal-tailed credible interval containing `mass` probability.
///
/// # Panics
///
/// Panics if `data` is empty or `mass` is outside (0, 1).
pub fn credible_interval(data: &[f64], mass: f64) -> (f64, f64) {
    assert!(
        mass > 0.0 && mass < 1.0,
        "credible mass must be in (0, 1)"
    );
    let tail = (1.0 - mass) / 2.0;
    let mut working = data.to_vec();
    let low = quantile(&mut working, tail);
    let high = quantile(&mut working, 1.0 - tail);
    (low, high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_of_odd_sample() {
        let mut data = vec![3.0, 1.0, 2.0];
        assert_eq!(quantile(&mut data, 0.5), 2.0);
    }

    #[test]
    fn test_median_averages_at_discontinuity() {
        let mut data = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&mut data, 0.5), 2.5);
    }

    #[test]
    fn test_extreme_quantiles() {
        let mut data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(quantile(&mut data, 0.0), 1.0);
        assert_eq!(quantile(&mut data, 1.0), 5.0);
    }

    #[test]
    fn test_single_element() {
        let mut data = vec![7.5];
        assert_eq!(quantile(&mut data, 0.37), 7.5);
    }

    #[test]
    fn test_credible_interval_bounds_ordered() {
        let data: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let (low, high) = credible_interval(&data, 0.94);
        assert!(low < high);
        assert!(low > 0.0 && high < 999.0, "94% interval should trim tails");
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn test_empty_slice_panics() {
        quantile(&mut [], 0.5);
    }
}
