//! Core types and complex vector helpers.
//!
//! Channel realizations, beamforming vectors, and artificial-noise vectors
//! are all plain `Vec<Complex64>` values; the [`vec_ops`] module collects
//! the handful of inner-product and norm operations the strategies need.

use num_complex::Complex64;

/// Type alias for complex numbers using f64 precision.
pub type Complex = Complex64;

/// An N-dimensional complex channel (or transmit) vector.
pub type ChannelVector = Vec<Complex>;

/// Norm threshold below which a vector is treated as numerically zero.
///
/// Degenerate channels, failed null-space projections, and zero-power
/// beamformers all fall back through this threshold instead of raising.
pub const NORM_EPS: f64 = 1e-9;

/// Complex vector operations shared by the strategy and trial code.
pub mod vec_ops {
    use super::Complex;

    /// Hermitian inner product `⟨a, b⟩ = Σ conj(a_i) · b_i`.
    ///
    /// With `a` the channel vector this is exactly `a^H b`, the quantity
    /// the rate expressions are built from.
    #[inline]
    pub fn inner_product(a: &[Complex], b: &[Complex]) -> Complex {
        debug_assert_eq!(a.len(), b.len());
        a.iter().zip(b.iter()).map(|(x, y)| x.conj() * y).sum()
    }

    /// Squared Euclidean norm `‖v‖²`.
    #[inline]
    pub fn norm_sqr(v: &[Complex]) -> f64 {
        v.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Euclidean norm `‖v‖`.
    #[inline]
    pub fn norm(v: &[Complex]) -> f64 {
        norm_sqr(v).sqrt()
    }

    /// Scale a vector by a real factor.
    pub fn scaled(v: &[Complex], factor: f64) -> Vec<Complex> {
        v.iter().map(|&c| c * factor).collect()
    }

    /// The all-zero vector of dimension `n`.
    pub fn zeros(n: usize) -> Vec<Complex> {
        vec![Complex::new(0.0, 0.0); n]
    }
}

#[cfg(test)]
mod tests {
    use super::vec_ops::*;
    use super::Complex;
    use approx::assert_relative_eq;

    #[test]
    fn test_inner_product_conjugates_left_argument() {
        let a = vec![Complex::new(0.0, 1.0)];
        let b = vec![Complex::new(0.0, 1.0)];
        // ⟨j, j⟩ = conj(j)·j = 1
        let ip = inner_product(&a, &b);
        assert_relative_eq!(ip.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(ip.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norms() {
        let v = vec![Complex::new(3.0, 0.0), Complex::new(0.0, 4.0)];
        assert_relative_eq!(norm_sqr(&v), 25.0, epsilon = 1e-12);
        assert_relative_eq!(norm(&v), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_self_inner_product_equals_norm_sqr() {
        let v = vec![Complex::new(1.0, -2.0), Complex::new(-0.5, 0.25)];
        let ip = inner_product(&v, &v);
        assert_relative_eq!(ip.re, norm_sqr(&v), epsilon = 1e-12);
        assert_relative_eq!(ip.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scaled_and_zeros() {
        let v = vec![Complex::new(1.0, 1.0)];
        let s = scaled(&v, 2.0);
        assert_relative_eq!(s[0].re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(s[0].im, 2.0, epsilon = 1e-12);
        assert_eq!(zeros(3).len(), 3);
        assert_relative_eq!(norm(&zeros(3)), 0.0);
    }
}
