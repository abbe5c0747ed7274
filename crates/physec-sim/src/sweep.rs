//! The SNR sweep driver.
//!
//! Processes SNR points in the configured order; per point, each selected
//! strategy runs `bob_trials` independent trials whose secrecy rates and
//! threshold events are arithmetic-averaged into one [`SnrPoint`]. The
//! whole sweep draws from a single `StdRng` seeded from the config, so a
//! fixed seed reproduces the report bit for bit.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use physec_core::power::snr_to_total_power;
use physec_core::strategy::Strategy;
use physec_core::trial::{run_trial, TrialParams};

use crate::config::{ConfigError, SweepConfig};

/// Aggregated statistics for one (strategy, SNR) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnrPoint {
    /// The SNR operating point in dB.
    pub snr_db: f64,
    /// Average secrecy rate over all Bob trials, bits/s/Hz.
    pub avg_secrecy_rate: f64,
    /// Fraction of trials with `R_s > rate_threshold`.
    pub outage_prob: f64,
}

/// One strategy's curve across the whole sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyCurve {
    pub strategy: Strategy,
    /// One point per configured SNR value, in sweep order.
    pub points: Vec<SnrPoint>,
}

/// Full sweep output, ready for the presentation layer to tabulate or
/// plot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub curves: Vec<StrategyCurve>,
}

impl SweepReport {
    /// The curve for a given strategy, if it was part of the sweep.
    pub fn curve(&self, strategy: Strategy) -> Option<&[SnrPoint]> {
        self.curves
            .iter()
            .find(|c| c.strategy == strategy)
            .map(|c| c.points.as_slice())
    }
}

/// Run the full sweep sequentially from one seeded random stream.
pub fn run_sweep(
    strategies: &[Strategy],
    config: &SweepConfig,
) -> Result<SweepReport, ConfigError> {
    config.validate()?;
    let params = config.trial_params();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut curves: Vec<StrategyCurve> = strategies
        .iter()
        .map(|&strategy| StrategyCurve {
            strategy,
            points: Vec::with_capacity(config.snr_db_range.len()),
        })
        .collect();

    for &snr_db in &config.snr_db_range {
        let p_total = snr_to_total_power(snr_db, config.noise_variance);
        for curve in &mut curves {
            let point = sweep_point(
                curve.strategy,
                snr_db,
                p_total,
                &params,
                config.bob_trials,
                &mut rng,
            );
            debug!(
                strategy = curve.strategy.label(),
                snr_db,
                avg_secrecy_rate = point.avg_secrecy_rate,
                outage_prob = point.outage_prob,
            );
            curve.points.push(point);
        }
        info!(snr_db, strategies = curves.len(), "SNR point processed");
    }

    Ok(SweepReport { curves })
}

/// Run the sweep with SNR points fanned out over rayon.
///
/// Every point gets its own deterministic substream derived from the
/// config seed and the point index, so workers never share random state
/// and the result does not depend on scheduling.
#[cfg(feature = "parallel")]
pub fn run_sweep_parallel(
    strategies: &[Strategy],
    config: &SweepConfig,
) -> Result<SweepReport, ConfigError> {
    use rayon::prelude::*;

    config.validate()?;
    let params = config.trial_params();

    let per_point: Vec<Vec<SnrPoint>> = config
        .snr_db_range
        .par_iter()
        .enumerate()
        .map(|(index, &snr_db)| {
            let mut rng = StdRng::seed_from_u64(substream_seed(config.seed, index));
            let p_total = snr_to_total_power(snr_db, config.noise_variance);
            strategies
                .iter()
                .map(|&strategy| {
                    sweep_point(strategy, snr_db, p_total, &params, config.bob_trials, &mut rng)
                })
                .collect()
        })
        .collect();

    let curves = strategies
        .iter()
        .enumerate()
        .map(|(s_idx, &strategy)| StrategyCurve {
            strategy,
            points: per_point.iter().map(|points| points[s_idx]).collect(),
        })
        .collect();

    Ok(SweepReport { curves })
}

/// Mix the sweep seed with an SNR-point index (splitmix64 step).
#[cfg(feature = "parallel")]
fn substream_seed(seed: u64, index: usize) -> u64 {
    let mut x = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Average `bob_trials` independent trials into one point.
fn sweep_point<R: Rng + ?Sized>(
    strategy: Strategy,
    snr_db: f64,
    p_total: f64,
    params: &TrialParams,
    bob_trials: usize,
    rng: &mut R,
) -> SnrPoint {
    // Validation guarantees bob_trials ≥ 1; an empty average still
    // degrades to zero rather than dividing by zero.
    if bob_trials == 0 {
        return SnrPoint {
            snr_db,
            avg_secrecy_rate: 0.0,
            outage_prob: 0.0,
        };
    }
    let mut rate_sum = 0.0;
    let mut hits = 0usize;
    for _ in 0..bob_trials {
        let outcome = run_trial(strategy, p_total, params, rng);
        rate_sum += outcome.secrecy_rate;
        hits += outcome.above_threshold as usize;
    }
    let denom = bob_trials as f64;
    SnrPoint {
        snr_db,
        avg_secrecy_rate: rate_sum / denom,
        outage_prob: hits as f64 / denom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn small_config() -> SweepConfig {
        SweepConfig {
            n_antennas: 4,
            bob_trials: 50,
            eve_trials: 20,
            snr_db_range: vec![-5.0, 5.0, 15.0],
            seed: 7,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_before_running() {
        let config = SweepConfig {
            snr_db_range: vec![],
            ..small_config()
        };
        assert_eq!(
            run_sweep(&Strategy::ALL, &config),
            Err(ConfigError::EmptySnrRange)
        );
    }

    #[test]
    fn test_report_shape_and_order() {
        let config = small_config();
        let report = run_sweep(&Strategy::ALL, &config).unwrap();
        assert_eq!(report.curves.len(), Strategy::ALL.len());
        for curve in &report.curves {
            assert_eq!(curve.points.len(), config.snr_db_range.len());
            for (point, &snr_db) in curve.points.iter().zip(&config.snr_db_range) {
                assert_eq!(point.snr_db, snr_db);
            }
        }
    }

    #[test]
    fn test_outage_prob_stays_in_unit_interval() {
        let report = run_sweep(&Strategy::ALL, &small_config()).unwrap();
        for curve in &report.curves {
            for point in &curve.points {
                assert!(
                    (0.0..=1.0).contains(&point.outage_prob),
                    "{}: outage {} at {} dB",
                    curve.strategy.label(),
                    point.outage_prob,
                    point.snr_db
                );
                assert!(point.avg_secrecy_rate >= 0.0);
            }
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_report() {
        let config = small_config();
        let a = run_sweep(&Strategy::ALL, &config).unwrap();
        let b = run_sweep(&Strategy::ALL, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = small_config();
        let other = SweepConfig { seed: 8, ..config.clone() };
        let a = run_sweep(&[Strategy::ConstantInstPower], &config).unwrap();
        let b = run_sweep(&[Strategy::ConstantInstPower], &other).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rate_statistically_increases_with_snr() {
        // Statistical monotonicity: across a 20 dB span the averaged
        // secrecy rate should rise for every strategy.
        let config = SweepConfig {
            bob_trials: 200,
            snr_db_range: vec![-5.0, 15.0],
            ..small_config()
        };
        let report = run_sweep(&Strategy::ALL, &config).unwrap();
        for curve in &report.curves {
            let low = curve.points[0].avg_secrecy_rate;
            let high = curve.points[1].avg_secrecy_rate;
            assert!(
                high > low,
                "{}: rate fell from {low} to {high} over +20 dB",
                curve.strategy.label()
            );
        }
    }

    #[test]
    fn test_zero_trial_point_degrades_to_zero() {
        // Defensive fallback below the validation layer: averaging an
        // empty trial set yields zeros, not a division by zero.
        let mut rng = StdRng::seed_from_u64(1);
        let params = small_config().trial_params();
        let point = sweep_point(Strategy::ConstantPower, 5.0, 3.16, &params, 0, &mut rng);
        assert_eq!(point.snr_db, 5.0);
        assert_eq!(point.avg_secrecy_rate, 0.0);
        assert_eq!(point.outage_prob, 0.0);
    }

    #[test]
    fn test_averages_agree_across_seeds() {
        // The per-point averages estimate the same expectations whatever
        // the seed; with a few hundred trials two independent runs must
        // land close together.
        let config = SweepConfig {
            bob_trials: 400,
            eve_trials: 20,
            snr_db_range: vec![10.0],
            ..small_config()
        };
        let other = SweepConfig { seed: 999, ..config.clone() };
        let a = run_sweep(&[Strategy::ConstantInstPower], &config).unwrap();
        let b = run_sweep(&[Strategy::ConstantInstPower], &other).unwrap();
        let pa = a.curves[0].points[0];
        let pb = b.curves[0].points[0];
        assert_abs_diff_eq!(pa.avg_secrecy_rate, pb.avg_secrecy_rate, epsilon = 0.4);
        assert_abs_diff_eq!(pa.outage_prob, pb.outage_prob, epsilon = 0.15);
    }

    #[test]
    fn test_curve_lookup() {
        let report = run_sweep(&[Strategy::EnsembleBeam], &small_config()).unwrap();
        assert!(report.curve(Strategy::EnsembleBeam).is_some());
        assert!(report.curve(Strategy::ConstantPower).is_none());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_sweep_matches_shape_and_is_deterministic() {
        let config = small_config();
        let a = run_sweep_parallel(&Strategy::ALL, &config).unwrap();
        let b = run_sweep_parallel(&Strategy::ALL, &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.curves.len(), Strategy::ALL.len());
        for curve in &a.curves {
            assert_eq!(curve.points.len(), config.snr_db_range.len());
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_sweep_agrees_with_sequential() {
        // Parallel substreams differ from the sequential stream, so the
        // reports are not bit-identical; the estimated expectations must
        // still coincide within Monte Carlo tolerance.
        let config = SweepConfig {
            bob_trials: 400,
            eve_trials: 20,
            snr_db_range: vec![0.0, 15.0],
            ..small_config()
        };
        let seq = run_sweep(&[Strategy::EnsembleBeam], &config).unwrap();
        let par = run_sweep_parallel(&[Strategy::EnsembleBeam], &config).unwrap();
        for (s, p) in seq.curves[0].points.iter().zip(&par.curves[0].points) {
            assert_eq!(s.snr_db, p.snr_db);
            assert_abs_diff_eq!(s.avg_secrecy_rate, p.avg_secrecy_rate, epsilon = 0.4);
            assert_abs_diff_eq!(s.outage_prob, p.outage_prob, epsilon = 0.15);
        }
    }
}
