//! Synthetic tank-reading dataset.
//!
//! Generates the fixed 15-row table (3 regions × 5 tanks) the analysis is
//! run against. Generation is seeded and bit-for-bit reproducible: the same
//! seed always yields the same dataset. Values are drawn uniformly within
//! the documented ranges, column by column (all tank levels first, then all
//! temperatures, and so on), so the draw order is part of the contract.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of tanks sampled per region.
pub const TANKS_PER_REGION: usize = 5;

/// Tank fill level range (percent of capacity).
pub const TANK_LEVEL_RANGE: (f64, f64) = (50.0, 100.0);

/// Ambient temperature range (°C).
pub const TEMPERATURE_RANGE: (f64, f64) = (-5.0, 35.0);

/// Usage rate range (liters/day).
pub const USAGE_RATE_RANGE: (f64, f64) = (5.0, 15.0);

/// Observed consumption range (liters).
pub const CONSUMPTION_RANGE: (f64, f64) = (200.0, 500.0);

/// Region label for a tank reading.
///
/// The integer encoding is stable: `A → 0`, `B → 1`, `C → 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Region A.
    A,
    /// Region B.
    B,
    /// Region C.
    C,
}

impl Region {
    /// All regions, in encoding order.
    pub const ALL: [Region; 3] = [Region::A, Region::B, Region::C];

    /// Integer code for this region.
    pub fn index(self) -> usize {
        match self {
            Region::A => 0,
            Region::B => 1,
            Region::C => 2,
        }
    }

    /// Region for an integer code, if it is a valid encoding.
    pub fn from_index(index: usize) -> Option<Region> {
        Region::ALL.get(index).copied()
    }

    /// Single-letter label.
    pub fn label(self) -> &'static str {
        match self {
            Region::A => "A",
            Region::B => "B",
            Region::C => "C",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One tank reading: region, covariates, and the consumption target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Region the tank belongs to.
    pub region: Region,
    /// Tank fill level (percent).
    pub tank_level: f64,
    /// Ambient temperature (°C).
    pub temperature: f64,
    /// Usage rate (liters/day).
    pub usage_rate: f64,
    /// Observed propane consumption (liters) — the regression target.
    pub consumption: f64,
}

/// Immutable ordered collection of tank readings.
///
/// Invariant: every observation's region code lies in `[0, n_regions)`,
/// where `n_regions` counts the distinct region labels present. The
/// canonical synthetic dataset trivially satisfies this (all three regions
/// appear); [`Dataset::validate`] enforces it for hand-built datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    observations: Vec<Observation>,
}

impl Dataset {
    /// Build a dataset from explicit observations.
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Generate the canonical synthetic dataset: 5 tanks per region for
    /// regions A, B, C, with all columns drawn uniformly within their
    /// documented ranges from a single seeded RNG stream.
    pub fn synthetic(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let n = Region::ALL.len() * TANKS_PER_REGION;

        let tank_levels = uniform_column(&mut rng, TANK_LEVEL_RANGE, n);
        let temperatures = uniform_column(&mut rng, TEMPERATURE_RANGE, n);
        let usage_rates = uniform_column(&mut rng, USAGE_RATE_RANGE, n);
        let consumptions = uniform_column(&mut rng, CONSUMPTION_RANGE, n);

        let observations = (0..n)
            .map(|i| Observation {
                region: Region::ALL[i / TANKS_PER_REGION],
                tank_level: tank_levels[i],
                temperature: temperatures[i],
                usage_rate: usage_rates[i],
                consumption: consumptions[i],
            })
            .collect();

        Self { observations }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observations, in order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of distinct region labels present.
    pub fn n_regions(&self) -> usize {
        let mut seen = [false; Region::ALL.len()];
        for obs in &self.observations {
            seen[obs.region.index()] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }

    /// Region codes, one per observation.
    pub fn region_indices(&self) -> Vec<usize> {
        self.observations.iter().map(|o| o.region.index()).collect()
    }

    /// Tank-level column.
    pub fn tank_levels(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.tank_level).collect()
    }

    /// Temperature column.
    pub fn temperatures(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.temperature).collect()
    }

    /// Usage-rate column.
    pub fn usage_rates(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.usage_rate).collect()
    }

    /// Consumption column (regression target).
    pub fn consumption(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.consumption).collect()
    }

    /// Check the region-index invariant.
    ///
    /// The per-region effect array is sized by the number of distinct
    /// regions, so every region code must fall below that count. A dataset
    /// containing only region C rows (code 2, one distinct region) is
    /// rejected here rather than indexing out of bounds during sampling.
    pub fn validate(&self) -> Result<()> {
        if self.observations.is_empty() {
            return Err(Error::EmptyDataset);
        }
        let n_regions = self.n_regions();
        for obs in &self.observations {
            let index = obs.region.index();
            if index >= n_regions {
                return Err(Error::RegionIndexOutOfBounds { index, n_regions });
            }
        }
        Ok(())
    }
}

/// Draw `n` values uniformly from `[lo, hi)`.
fn uniform_column<R: Rng>(rng: &mut R, (lo, hi): (f64, f64), n: usize) -> Vec<f64> {
    (0..n).map(|_| lo + (hi - lo) * rng.random::<f64>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SEED;

    #[test]
    fn test_synthetic_row_count() {
        let data = Dataset::synthetic(DEFAULT_SEED);
        assert_eq!(data.len(), 15);
        assert_eq!(data.n_regions(), 3);
    }

    #[test]
    fn test_synthetic_five_rows_per_region() {
        let data = Dataset::synthetic(DEFAULT_SEED);
        for region in Region::ALL {
            let count = data
                .observations()
                .iter()
                .filter(|o| o.region == region)
                .count();
            assert_eq!(count, TANKS_PER_REGION, "region {region} row count");
        }
    }

    #[test]
    fn test_region_encoding_bijection() {
        for (expected, region) in Region::ALL.into_iter().enumerate() {
            assert_eq!(region.index(), expected);
            assert_eq!(Region::from_index(expected), Some(region));
        }
        assert_eq!(Region::from_index(3), None);
    }

    #[test]
    fn test_synthetic_reproducible() {
        let a = Dataset::synthetic(DEFAULT_SEED);
        let b = Dataset::synthetic(DEFAULT_SEED);
        assert_eq!(a, b, "same seed must give identical datasets");
    }

    #[test]
    fn test_synthetic_seed_sensitivity() {
        let a = Dataset::synthetic(DEFAULT_SEED);
        let b = Dataset::synthetic(DEFAULT_SEED + 1);
        assert_ne!(a, b, "different seeds should give different datasets");
    }

    #[test]
    fn test_validate_rejects_gapped_region_codes() {
        // Only region C present: one distinct region, but code 2.
        let data = Dataset::new(vec![Observation {
            region: Region::C,
            tank_level: 75.0,
            temperature: 10.0,
            usage_rate: 8.0,
            consumption: 300.0,
        }]);
        match data.validate() {
            Err(Error::RegionIndexOutOfBounds { index, n_regions }) => {
                assert_eq!(index, 2);
                assert_eq!(n_regions, 1);
            }
            other => panic!("expected RegionIndexOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(matches!(
            Dataset::new(Vec::new()).validate(),
            Err(Error::EmptyDataset)
        ));
    }
}
