//! Transmit power-allocation and artificial-noise injection strategies.
//!
//! Alice splits her budget `P` between a beamforming vector `w = f(√λ, h)`
//! and an artificial-noise vector `z` of power governed by `μ`. The five
//! strategies share that skeleton but differ in how `(λ, μ)` are derived
//! and how `w` and `z` are normalized; each formula matches a distinct
//! power-constraint convention and they are **not** algebraically
//! equivalent, so the per-variant expressions below are preserved exactly.
//!
//! With the channel model `h ~ CN(0, 2 I_N)` the relevant ensemble
//! averages are `E[‖h‖²] = 2N` and `E[1/‖h‖²] = 1/(2(N−1))`; these are the
//! constants that appear in the per-variant formulas.
//!
//! | variant | λ | μ | w |
//! |---|---|---|---|
//! | `ConstantPower` | 2(N−1)αP | P − λ/(2(N−1)) | √λ·h/‖h‖² |
//! | `VariablePower` | 2(N−1)αP | max(0, P − λ/‖h‖²) | √λ·h/‖h‖² |
//! | `ConstantInstPower` | αP | (1−α)P | √λ·h/‖h‖ |
//! | `EnsembleBeam` | αP/(2N) | (1−α)P | √λ·h |
//! | `EnsembleBeamScaledAn` | αP/(2N) | (1−α)P/(2N) | √λ·h, z scaled by ‖h‖ |

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::nullspace::null_space_basis;
use crate::types::{vec_ops, ChannelVector, Complex, NORM_EPS};

/// Signal / artificial-noise power coefficients for one channel
/// realization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSplit {
    /// Power coefficient for the beamforming vector `w`.
    pub lambda: f64,
    /// Power coefficient for the artificial-noise vector `z`.
    pub mu: f64,
}

/// The five power-allocation / artificial-noise strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// S1: channel-inversion beam, fixed split against the ensemble
    /// average inversion cost. Bob's received signal power is the constant
    /// `λ` regardless of the fade.
    ConstantPower,
    /// S1.2: channel-inversion beam; whatever the inversion leaves of the
    /// budget in *this* realization goes to artificial noise.
    VariablePower,
    /// S2: unit-norm beam, so the instantaneous transmit powers of `w`
    /// and `z` are exactly `αP` and `(1−α)P` every trial.
    ConstantInstPower,
    /// S3.1: raw-channel beam with ensemble-normalized signal power,
    /// full `(1−α)P` to artificial noise.
    EnsembleBeam,
    /// S3.2: raw-channel beam; artificial noise additionally tracks the
    /// instantaneous channel gain `‖h‖`.
    EnsembleBeamScaledAn,
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Strategy; 5] = [
        Strategy::ConstantPower,
        Strategy::VariablePower,
        Strategy::ConstantInstPower,
        Strategy::EnsembleBeam,
        Strategy::EnsembleBeamScaledAn,
    ];

    /// Short display label, as used in comparison tables and plots.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::ConstantPower => "S1 (Const Power)",
            Strategy::VariablePower => "S1.2 (Var Power)",
            Strategy::ConstantInstPower => "S2 (Const Inst Power)",
            Strategy::EnsembleBeam => "S3.1",
            Strategy::EnsembleBeamScaledAn => "S3.2",
        }
    }

    /// Derive the `(λ, μ)` power coefficients for one realization.
    ///
    /// `h_norm_sqr` is the instantaneous `‖h‖²`; only `VariablePower`
    /// depends on it. For the channel-inversion variants with `N = 1`
    /// there is no `(N−1)` ensemble constant to invert against, so both
    /// coefficients collapse to zero and the trial degenerates to a
    /// zero-rate outcome.
    pub fn power_split(
        &self,
        p_total: f64,
        n: usize,
        alpha: f64,
        h_norm_sqr: f64,
    ) -> PowerSplit {
        match self {
            Strategy::ConstantPower => {
                if n <= 1 {
                    return PowerSplit { lambda: 0.0, mu: 0.0 };
                }
                let ensemble = 2.0 * (n - 1) as f64;
                let lambda = ensemble * alpha * p_total;
                PowerSplit {
                    lambda,
                    mu: p_total - lambda / ensemble,
                }
            }
            Strategy::VariablePower => {
                if n <= 1 {
                    return PowerSplit { lambda: 0.0, mu: 0.0 };
                }
                let lambda = 2.0 * (n - 1) as f64 * alpha * p_total;
                // Instantaneous inversion cost ‖w‖² = λ/‖h‖²; the residual
                // budget goes to artificial noise, floored at zero when a
                // deep fade makes the inversion itself overshoot P.
                PowerSplit {
                    lambda,
                    mu: (p_total - lambda / h_norm_sqr).max(0.0),
                }
            }
            Strategy::ConstantInstPower => PowerSplit {
                lambda: alpha * p_total,
                mu: (1.0 - alpha) * p_total,
            },
            Strategy::EnsembleBeam => PowerSplit {
                lambda: alpha * p_total / (2.0 * n as f64),
                mu: (1.0 - alpha) * p_total,
            },
            Strategy::EnsembleBeamScaledAn => {
                let ensemble = 2.0 * n as f64;
                PowerSplit {
                    lambda: alpha * p_total / ensemble,
                    mu: (1.0 - alpha) * p_total / ensemble,
                }
            }
        }
    }

    /// Beamforming vector `w` for channel `h` and signal coefficient `λ`.
    pub fn beamforming_vector(&self, h: &[Complex], lambda: f64) -> ChannelVector {
        let amplitude = lambda.max(0.0).sqrt();
        match self {
            Strategy::ConstantPower | Strategy::VariablePower => {
                // w = √λ · h/‖h‖²: inverts the channel so h^H w = √λ.
                let h_norm_sqr = vec_ops::norm_sqr(h);
                if h_norm_sqr < NORM_EPS {
                    return vec_ops::zeros(h.len());
                }
                vec_ops::scaled(h, amplitude / h_norm_sqr)
            }
            Strategy::ConstantInstPower => {
                // w = √λ · h/‖h‖: unit-norm direction, ‖w‖² = λ exactly.
                let h_norm = vec_ops::norm(h);
                if h_norm < NORM_EPS {
                    return vec_ops::zeros(h.len());
                }
                vec_ops::scaled(h, amplitude / h_norm)
            }
            Strategy::EnsembleBeam | Strategy::EnsembleBeamScaledAn => {
                // w = √λ · h: power normalized only in expectation,
                // E[‖w‖²] = λ · 2N.
                vec_ops::scaled(h, amplitude)
            }
        }
    }

    /// Amplitude applied to the unit-norm null-space direction.
    fn noise_amplitude(&self, mu: f64, h_norm: f64) -> f64 {
        let base = mu.max(0.0).sqrt();
        match self {
            Strategy::EnsembleBeamScaledAn => base * h_norm,
            _ => base,
        }
    }

    /// Construct the artificial-noise vector `z` for channel `h`.
    ///
    /// Draws a complex Gaussian coefficient per null-space basis vector,
    /// mixes them through the basis, normalizes the result to unit norm
    /// and applies the strategy's noise amplitude. Because of the unit
    /// normalization, only the direction of the coefficient draw matters.
    ///
    /// Falls back to the zero vector when `N = 1` (no null space), when
    /// the basis is degenerate, or when the mixed direction has negligible
    /// norm — artificial noise is simply skipped for that trial.
    pub fn artificial_noise<R: Rng + ?Sized>(
        &self,
        h: &[Complex],
        mu: f64,
        rng: &mut R,
    ) -> ChannelVector {
        let n = h.len();
        if n <= 1 {
            return vec_ops::zeros(n);
        }
        let basis = null_space_basis(h);
        if basis.len() < n - 1 {
            return vec_ops::zeros(n);
        }

        let mut mixed = vec_ops::zeros(n);
        for b in &basis {
            let re: f64 = rng.sample(StandardNormal);
            let im: f64 = rng.sample(StandardNormal);
            let coeff = Complex::new(re, im);
            for (m, bi) in mixed.iter_mut().zip(b.iter()) {
                *m += bi * coeff;
            }
        }

        let mixed_norm = vec_ops::norm(&mixed);
        if mixed_norm < NORM_EPS {
            return vec_ops::zeros(n);
        }
        let amplitude = self.noise_amplitude(mu, vec_ops::norm(h));
        vec_ops::scaled(&mixed, amplitude / mixed_norm)
    }
}
