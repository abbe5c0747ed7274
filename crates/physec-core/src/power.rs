//! SNR to transmit-power-budget conversion.

/// Convert a dB value to linear scale: `10^(db / 10)`.
#[inline]
pub fn db_to_linear(db_value: f64) -> f64 {
    10.0_f64.powf(db_value / 10.0)
}

/// Total transmit power budget `P` for a target SNR.
///
/// `P = 10^(snr_db / 10) · σ²`, so at 0 dB the budget equals the receiver
/// noise variance.
#[inline]
pub fn snr_to_total_power(snr_db: f64, noise_variance: f64) -> f64 {
    db_to_linear(snr_db) * noise_variance
}
