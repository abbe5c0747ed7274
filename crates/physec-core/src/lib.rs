//! Numerical core for physical-layer secrecy simulation.
//!
//! Models a multi-antenna transmitter (Alice) sending confidential data to a
//! legitimate receiver (Bob) while a passive eavesdropper (Eve) listens.
//! Alice splits her power budget between a beamforming vector `w` carrying
//! Bob's signal and an artificial-noise vector `z` confined to the null
//! space of Bob's channel, so the noise degrades only Eve.
//!
//! The crate provides:
//!
//! - [`channel`]: i.i.d. complex Gaussian channel realizations
//! - [`power`]: dB-SNR to transmit-power-budget conversion
//! - [`nullspace`]: orthonormal null-space bases for AN construction
//! - [`strategy`]: the five power-allocation / AN-injection strategies
//! - [`trial`]: the single Monte Carlo trial evaluator
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so a whole
//! simulation run is reproducible from one seed.
//!
//! ## Example
//!
//! ```rust
//! use physec_core::strategy::Strategy;
//! use physec_core::trial::{run_trial, TrialParams};
//! use physec_core::power::snr_to_total_power;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let params = TrialParams {
//!     n_antennas: 4,
//!     alpha: 0.5,
//!     noise_variance: 1.0,
//!     eve_trials: 50,
//!     rate_threshold: 1.0,
//! };
//! let p_total = snr_to_total_power(10.0, params.noise_variance);
//! let outcome = run_trial(Strategy::ConstantInstPower, p_total, &params, &mut rng);
//! assert!(outcome.secrecy_rate >= 0.0);
//! ```

pub mod channel;
pub mod nullspace;
pub mod power;
pub mod strategy;
pub mod trial;
pub mod types;

pub use strategy::Strategy;
pub use trial::{run_trial, TrialOutcome, TrialParams};
pub use types::{ChannelVector, Complex};
