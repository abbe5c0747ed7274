//! Monte Carlo SNR sweep driver for physical-layer secrecy strategies.
//!
//! Wraps the [`physec_core`] trial evaluator in a validated, reproducible
//! sweep: for each SNR point the dB target is converted to a transmit
//! power budget, every selected strategy runs `bob_trials` independent
//! trials, and the per-trial secrecy rates and threshold events are
//! averaged into one [`sweep::SnrPoint`] per (strategy, SNR) pair.
//!
//! ## Example
//!
//! ```rust
//! use physec_sim::config::SweepConfig;
//! use physec_sim::sweep::run_sweep;
//! use physec_core::Strategy;
//!
//! let config = SweepConfig {
//!     n_antennas: 4,
//!     bob_trials: 20,
//!     eve_trials: 10,
//!     snr_db_range: vec![0.0, 10.0],
//!     ..Default::default()
//! };
//! let report = run_sweep(&[Strategy::ConstantInstPower], &config).unwrap();
//! assert_eq!(report.curves[0].points.len(), 2);
//! ```

pub mod config;
pub mod sweep;

pub use config::{ConfigError, SweepConfig};
pub use sweep::{run_sweep, SnrPoint, StrategyCurve, SweepReport};

#[cfg(feature = "parallel")]
pub use sweep::run_sweep_parallel;
