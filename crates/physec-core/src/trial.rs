//! Single Monte Carlo trial evaluation.
//!
//! One trial draws Bob's channel, builds the strategy's beamforming and
//! artificial-noise vectors, computes Bob's rate, estimates Eve's rate
//! over `eve_trials` independent eavesdropper channels, and reduces the
//! pair to an instantaneous secrecy rate plus a threshold event.
//!
//! All numerical edge cases (degenerate channel, degenerate null space,
//! zero-power beam) degrade to a zero-contribution trial; nothing in here
//! returns an error once the configuration has been validated upstream.

use rand::Rng;

use crate::channel::generate_channel;
use crate::strategy::Strategy;
use crate::types::{vec_ops, Complex, NORM_EPS};

/// Per-trial parameters, fixed across a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialParams {
    /// Number of transmit antennas at Alice.
    pub n_antennas: usize,
    /// Power split factor α in [0, 1].
    pub alpha: f64,
    /// Receiver noise variance σ².
    pub noise_variance: f64,
    /// Independent Eve channel draws averaged per Bob trial.
    pub eve_trials: usize,
    /// Secrecy-rate threshold for the achievability event.
    pub rate_threshold: f64,
}

/// Outcome of one Monte Carlo trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// Instantaneous secrecy rate `max(0, R_b − R_e)` in bits/s/Hz.
    pub secrecy_rate: f64,
    /// Whether the secrecy rate strictly exceeded the threshold.
    pub above_threshold: bool,
}

impl TrialOutcome {
    /// Zero-rate outcome used by all degenerate fallbacks.
    fn zero() -> Self {
        TrialOutcome {
            secrecy_rate: 0.0,
            above_threshold: false,
        }
    }
}

/// Run one independent trial: draw Bob's channel and evaluate it.
pub fn run_trial<R: Rng + ?Sized>(
    strategy: Strategy,
    p_total: f64,
    params: &TrialParams,
    rng: &mut R,
) -> TrialOutcome {
    let h = generate_channel(rng, params.n_antennas);
    evaluate_channel(strategy, &h, p_total, params, rng)
}

/// Evaluate a trial for a given Bob channel realization.
///
/// Split out from [`run_trial`] so degenerate channels and the null-space
/// invariant can be exercised directly with a caller-chosen `h`.
pub fn evaluate_channel<R: Rng + ?Sized>(
    strategy: Strategy,
    h: &[Complex],
    p_total: f64,
    params: &TrialParams,
    rng: &mut R,
) -> TrialOutcome {
    let h_norm_sqr = vec_ops::norm_sqr(h);
    if h_norm_sqr < NORM_EPS {
        return TrialOutcome::zero();
    }

    let split = strategy.power_split(p_total, h.len(), params.alpha, h_norm_sqr);
    let w = strategy.beamforming_vector(h, split.lambda);
    if vec_ops::norm(&w) < NORM_EPS {
        // No signal transmitted; the secrecy rate is zero regardless of
        // Eve, so the Eve-side estimation is skipped entirely.
        return TrialOutcome::zero();
    }
    let z = strategy.artificial_noise(h, split.mu, rng);
    let an_active = vec_ops::norm(&z) >= NORM_EPS;

    let sigma_sq = params.noise_variance;
    let bob_signal = vec_ops::inner_product(h, &w).norm_sqr();
    let r_bob = (1.0 + bob_signal / sigma_sq).log2();

    let mut eve_rate_sum = 0.0;
    for _ in 0..params.eve_trials {
        let g = generate_channel(rng, h.len());
        let eve_signal = vec_ops::inner_product(&g, &w).norm_sqr();
        let noise_floor = if an_active {
            // AN leaks into Eve's receiver; clamp the floor so a freak
            // cancellation cannot blow up the ratio.
            (vec_ops::inner_product(&g, &z).norm_sqr() + sigma_sq).max(NORM_EPS)
        } else {
            sigma_sq
        };
        eve_rate_sum += (1.0 + eve_signal / noise_floor).log2();
    }
    let r_eve = if params.eve_trials > 0 {
        eve_rate_sum / params.eve_trials as f64
    } else {
        0.0
    };

    let secrecy_rate = (r_bob - r_eve).max(0.0);
    TrialOutcome {
        secrecy_rate,
        above_threshold: secrecy_rate > params.rate_threshold,
    }
}
