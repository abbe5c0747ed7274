//! Sweep configuration and validation.
//!
//! Configuration is the only place this simulator can fail: once a
//! [`SweepConfig`] passes [`SweepConfig::validate`], every downstream
//! trial degrades numerical edge cases to zero-contribution outcomes
//! instead of erroring.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use physec_core::trial::TrialParams;

/// Configuration for one SNR sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Number of transmit antennas at Alice.
    pub n_antennas: usize,
    /// Power split factor α for the beamforming vector, in [0, 1].
    pub alpha: f64,
    /// Receiver noise variance σ².
    pub noise_variance: f64,
    /// Secrecy-rate threshold for the achievability probability.
    pub rate_threshold: f64,
    /// Independent Bob channel trials per (strategy, SNR) point.
    pub bob_trials: usize,
    /// Independent Eve channel draws averaged within each Bob trial.
    pub eve_trials: usize,
    /// SNR sweep points in dB, processed in the order given.
    pub snr_db_range: Vec<f64>,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for SweepConfig {
    /// The reference comparison setup: 10 antennas, an even power split,
    /// unit noise, a 3 bits/s/Hz threshold, 1000×1000 trials over
    /// −5..=20 dB in 1 dB steps.
    fn default() -> Self {
        Self {
            n_antennas: 10,
            alpha: 0.5,
            noise_variance: 1.0,
            rate_threshold: 3.0,
            bob_trials: 1000,
            eve_trials: 1000,
            snr_db_range: evenly_spaced(-5.0, 20.0, 1.0),
            seed: 42,
        }
    }
}

impl SweepConfig {
    /// Check the configuration before any trial runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_antennas < 1 {
            return Err(ConfigError::NoAntennas);
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::AlphaOutOfRange(self.alpha));
        }
        if !(self.noise_variance.is_finite() && self.noise_variance > 0.0) {
            return Err(ConfigError::NonPositiveNoiseVariance(self.noise_variance));
        }
        if !(self.rate_threshold.is_finite() && self.rate_threshold >= 0.0) {
            return Err(ConfigError::NegativeRateThreshold(self.rate_threshold));
        }
        if self.bob_trials < 1 || self.eve_trials < 1 {
            return Err(ConfigError::NoTrials {
                bob: self.bob_trials,
                eve: self.eve_trials,
            });
        }
        if self.snr_db_range.is_empty() {
            return Err(ConfigError::EmptySnrRange);
        }
        if self.snr_db_range.iter().any(|snr| !snr.is_finite()) {
            return Err(ConfigError::NonFiniteSnr);
        }
        Ok(())
    }

    /// The per-trial parameter subset handed to the core evaluator.
    pub fn trial_params(&self) -> TrialParams {
        TrialParams {
            n_antennas: self.n_antennas,
            alpha: self.alpha,
            noise_variance: self.noise_variance,
            eve_trials: self.eve_trials,
            rate_threshold: self.rate_threshold,
        }
    }
}

/// Evenly spaced SNR points from `start_db` to `stop_db` inclusive.
///
/// Returns an empty range (rejected by validation) when `step_db` is not
/// positive or the bounds are reversed.
pub fn evenly_spaced(start_db: f64, stop_db: f64, step_db: f64) -> Vec<f64> {
    if step_db <= 0.0 || stop_db < start_db {
        return Vec::new();
    }
    // Nudge the quotient before flooring so a non-representable step
    // (0.1, 0.2, ...) landing just below an integer cannot drop the
    // final point of an inclusive range.
    let count = ((stop_db - start_db) / step_db + 1e-9).floor() as usize + 1;
    (0..count).map(|i| start_db + i as f64 * step_db).collect()
}

/// Errors raised by sweep-configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("antenna count must be at least 1")]
    NoAntennas,

    #[error("power split factor must lie in [0, 1], got {0}")]
    AlphaOutOfRange(f64),

    #[error("noise variance must be positive and finite, got {0}")]
    NonPositiveNoiseVariance(f64),

    #[error("rate threshold must be non-negative and finite, got {0}")]
    NegativeRateThreshold(f64),

    #[error("Monte Carlo trial counts must be at least 1 (bob: {bob}, eve: {eve})")]
    NoTrials { bob: usize, eve: usize },

    #[error("SNR sweep range is empty")]
    EmptySnrRange,

    #[error("SNR sweep range contains a non-finite value")]
    NonFiniteSnr,
}
