//! Random channel generation.
//!
//! Channel realizations follow the classic rich-scattering model: each
//! entry is circularly-symmetric complex Gaussian with real and imaginary
//! parts drawn i.i.d. from a standard normal, i.e. `h ~ CN(0, 2 I_N)` with
//! per-entry variance 2 and `E[‖h‖²] = 2N`. Every call produces a fresh
//! realization; nothing is cached between trials.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::types::{ChannelVector, Complex};

/// Draw one instantaneous channel realization of dimension `n`.
///
/// `n` must be at least 1; `n = 0` yields an empty vector which the trial
/// evaluator rejects as a degenerate channel.
pub fn generate_channel<R: Rng + ?Sized>(rng: &mut R, n: usize) -> ChannelVector {
    (0..n)
        .map(|_| {
            let re: f64 = rng.sample(StandardNormal);
            let im: f64 = rng.sample(StandardNormal);
            Complex::new(re, im)
        })
        .collect()
}
