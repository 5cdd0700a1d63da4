//! Intensity-to-commit-count policy.
//!
//! Converts a painted intensity into the number of commits synthesized for
//! that day, and draws a plausible intraday time for each commit. Draws come
//! from a PCG generator seeded from the config, so tests can pin the seed
//! while normal runs stay random.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::canvas::MAX_INTENSITY;
use crate::error::PolicyError;

/// Configuration for the commit policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Inclusive commit-count range per intensity 1..=4.
    pub bands: [(u32, u32); MAX_INTENSITY as usize],

    /// Inclusive hour window commits may land in.
    pub hours: (u8, u8),

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            bands: [(1, 3), (4, 7), (8, 12), (13, 20)],
            hours: (9, 22),
            seed: None,
        }
    }
}

impl PolicyConfig {
    /// Bands must be non-empty, disjoint, and increase with intensity so
    /// that a denser cell always renders denser on the calendar.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let mut previous_high = 0u32;
        for (index, &(low, high)) in self.bands.iter().enumerate() {
            if low == 0 || low > high || low <= previous_high {
                return Err(PolicyError::InvalidBands { index, low, high });
            }
            previous_high = high;
        }
        let (start, end) = self.hours;
        if start > end || end > 23 {
            return Err(PolicyError::InvalidHours { start, end });
        }
        Ok(())
    }
}

/// Commit-count and commit-time source for the planner.
pub struct CommitPolicy {
    config: PolicyConfig,
    rng: Mcg128Xsl64,
}

impl CommitPolicy {
    /// Policy with default bands and an entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            config: PolicyConfig::default(),
            rng: Mcg128Xsl64::from_entropy(),
        }
    }

    /// Policy with a custom, validated config. The generator is seeded from
    /// `config.seed` when set.
    pub fn with_config(config: PolicyConfig) -> Result<Self, PolicyError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    /// Number of commits for a cell of the given intensity. Intensity 0
    /// yields no commits; each call draws independently.
    pub fn count_for(&mut self, intensity: u8) -> u32 {
        if intensity == 0 {
            return 0;
        }
        let band = usize::from(intensity.min(MAX_INTENSITY)) - 1;
        let (low, high) = self.config.bands[band];
        self.rng.gen_range(low..=high)
    }

    /// Attach a drawn intraday time to a date: an hour inside the working
    /// window, arbitrary minute and second.
    pub fn commit_time(&mut self, date: NaiveDate) -> NaiveDateTime {
        let (start, end) = self.config.hours;
        let hour = u32::from(self.rng.gen_range(start..=end));
        let minute = self.rng.gen_range(0..60u32);
        let second = self.rng.gen_range(0..60u32);
        let time = NaiveTime::from_hms_opt(hour, minute, second).unwrap_or_default();
        date.and_time(time)
    }
}

impl Default for CommitPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn seeded(seed: u64) -> CommitPolicy {
        CommitPolicy::with_config(PolicyConfig {
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn intensity_zero_never_draws_commits() {
        let mut policy = seeded(7);
        for _ in 0..1000 {
            assert_eq!(policy.count_for(0), 0);
        }
    }

    #[test]
    fn draws_stay_inside_the_intensity_band() {
        let mut policy = seeded(42);
        for _ in 0..10_000 {
            let count = policy.count_for(2);
            assert!((4..=7).contains(&count), "count {count} outside [4, 7]");
        }
    }

    #[test]
    fn every_band_is_honored() {
        let mut policy = seeded(11);
        for _ in 0..1000 {
            assert!((1..=3).contains(&policy.count_for(1)));
            assert!((8..=12).contains(&policy.count_for(3)));
            assert!((13..=20).contains(&policy.count_for(4)));
        }
    }

    #[test]
    fn same_seed_produces_the_same_draws() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for intensity in [1u8, 2, 3, 4, 2, 1] {
            assert_eq!(a.count_for(intensity), b.count_for(intensity));
        }
    }

    #[test]
    fn commit_time_stays_inside_the_working_window() {
        let mut policy = seeded(3);
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        for _ in 0..1000 {
            let stamp = policy.commit_time(date);
            assert_eq!(stamp.date(), date);
            assert!((9..=22).contains(&stamp.hour()));
        }
    }

    #[test]
    fn overlapping_bands_are_rejected() {
        let config = PolicyConfig {
            bands: [(1, 4), (4, 7), (8, 12), (13, 20)],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PolicyError::InvalidBands { index: 1, .. })
        ));
    }

    #[test]
    fn decreasing_bands_are_rejected() {
        let config = PolicyConfig {
            bands: [(4, 7), (1, 3), (8, 12), (13, 20)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_band_is_rejected() {
        let config = PolicyConfig {
            bands: [(3, 1), (4, 7), (8, 12), (13, 20)],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PolicyError::InvalidBands { index: 0, .. })
        ));
    }

    #[test]
    fn inverted_hour_window_is_rejected() {
        let config = PolicyConfig {
            hours: (22, 9),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PolicyError::InvalidHours { .. })
        ));
    }
}
