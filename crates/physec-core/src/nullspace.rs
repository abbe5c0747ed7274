//! Orthonormal null-space bases for artificial-noise construction.
//!
//! For a non-zero channel `h` of dimension `N > 1`, the null space of
//! `h^H` is the `(N−1)`-dimensional subspace orthogonal to `h`. Any vector
//! built from its basis satisfies `h^H z = 0` exactly, which is what makes
//! artificial noise invisible to Bob while still jamming Eve.

use crate::types::{vec_ops, ChannelVector, Complex, NORM_EPS};

/// Tolerance for rejecting a candidate basis direction that Gram-Schmidt
/// has reduced to numerical dust.
const DEFLATION_EPS: f64 = 1e-6;

/// Orthonormal basis of the null space of `h^H`.
///
/// Returns `N−1` unit vectors, each orthogonal to `h` and to one another,
/// built by twice-iterated Gram-Schmidt over the standard basis seeded
/// with `h/‖h‖`. Returns an empty basis for `N ≤ 1` or a numerically zero
/// `h`; callers treat a short basis as "no artificial noise this trial".
pub fn null_space_basis(h: &[Complex]) -> Vec<ChannelVector> {
    let n = h.len();
    if n <= 1 {
        return Vec::new();
    }
    let h_norm = vec_ops::norm(h);
    if h_norm < NORM_EPS {
        return Vec::new();
    }
    let unit_h: ChannelVector = h.iter().map(|&c| c / h_norm).collect();

    let mut basis: Vec<ChannelVector> = Vec::with_capacity(n - 1);
    for k in 0..n {
        if basis.len() == n - 1 {
            break;
        }
        let mut v = vec_ops::zeros(n);
        v[k] = Complex::new(1.0, 0.0);

        // Two orthogonalization passes keep the basis orthonormal to
        // working precision even when e_k is nearly parallel to h.
        for _ in 0..2 {
            project_out(&mut v, &unit_h);
            for b in &basis {
                project_out(&mut v, b);
            }
        }

        let v_norm = vec_ops::norm(&v);
        if v_norm > DEFLATION_EPS {
            basis.push(v.iter().map(|&c| c / v_norm).collect());
        }
    }
    basis
}

/// Subtract from `v` its projection onto the unit vector `u`.
fn project_out(v: &mut [Complex], u: &[Complex]) {
    let coeff = vec_ops::inner_product(u, v);
    for (vi, ui) in v.iter_mut().zip(u.iter()) {
        *vi -= ui * coeff;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::generate_channel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dimension_is_n_minus_one() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in 2..=12 {
            let h = generate_channel(&mut rng, n);
            let basis = null_space_basis(&h);
            assert_eq!(basis.len(), n - 1, "wrong basis dimension for N={n}");
        }
    }

    #[test]
    fn test_trivial_cases_yield_empty_basis() {
        assert!(null_space_basis(&[]).is_empty());
        assert!(null_space_basis(&[Complex::new(1.0, -0.5)]).is_empty());
        // Numerically zero channel
        let h = vec![Complex::new(1e-12, 0.0); 4];
        assert!(null_space_basis(&h).is_empty());
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let mut rng = StdRng::seed_from_u64(12);
        let h = generate_channel(&mut rng, 8);
        let basis = null_space_basis(&h);
        for (i, bi) in basis.iter().enumerate() {
            for (j, bj) in basis.iter().enumerate() {
                let ip = vec_ops::inner_product(bi, bj);
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (ip.re - expected).abs() < 1e-10 && ip.im.abs() < 1e-10,
                    "⟨b{i}, b{j}⟩ = {ip} not {expected}"
                );
            }
        }
    }

    #[test]
    fn test_basis_is_orthogonal_to_channel() {
        // The defining property: h^H b = 0 for every basis vector, across
        // many random channel draws.
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..200 {
            let h = generate_channel(&mut rng, 6);
            for b in null_space_basis(&h) {
                let leak = vec_ops::inner_product(&h, &b).norm();
                assert!(leak < 1e-10, "null-space leakage {leak}");
            }
        }
    }
}
