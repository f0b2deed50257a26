//! Bloch-angle extraction and per-level disentangling.
//!
//! A pair of amplitudes `(a, b)` is written as
//!
//!   r · e^{it/2} · Rz(φ) · Ry(θ) |0⟩
//!
//! so applying `Ry(-θ) · Rz(-φ)` collapses the pair onto a single effective
//! amplitude `r · e^{it/2}`. Doing this for every pair of a vector peels off
//! its least significant qubit.

use num_complex::Complex64;

/// Rotation pair and leftover amplitude for one amplitude pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochAngles {
    /// Polar angle: `Ry(theta)` takes `|0⟩` to the pair's magnitudes.
    pub theta: f64,
    /// Azimuthal angle: relative phase `arg(b) - arg(a)`.
    pub phi: f64,
    /// Magnitude and common phase left after rotating the pair down.
    pub remaining: Complex64,
}

/// Output of disentangling the least significant qubit of a vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Disentangled {
    /// Half-length vector over the remaining qubits.
    pub remaining: Vec<Complex64>,
    /// Negated Ry angles, one per amplitude pair.
    pub thetas: Vec<f64>,
    /// Negated Rz angles, one per amplitude pair.
    pub phis: Vec<f64>,
}

/// Compute the Bloch angles of the pair `(a, b)`.
///
/// A pair whose norm is below `epsilon` has no meaningful angles; it maps to
/// `theta = phi = 0` with a zero remaining amplitude.
pub fn bloch_angles(a: Complex64, b: Complex64, epsilon: f64) -> BlochAngles {
    let mag_a = a.norm();
    let r = (a.norm_sqr() + b.norm_sqr()).sqrt();
    if r < epsilon {
        return BlochAngles {
            theta: 0.0,
            phi: 0.0,
            remaining: Complex64::new(0.0, 0.0),
        };
    }

    // Same angle as 2·acos(|a| / r), but exact for a pair whose other half is zero.
    let theta = 2.0 * b.norm().atan2(mag_a);
    let (a_arg, b_arg) = (a.arg(), b.arg());
    let t = a_arg + b_arg;
    BlochAngles {
        theta,
        phi: b_arg - a_arg,
        remaining: Complex64::from_polar(r, t / 2.0),
    }
}

/// Rotations that disentangle the least significant qubit of `amplitudes`.
///
/// Pairs `(2i, 2i + 1)` differ only in that qubit. The angles are negated
/// because they drive the state towards `|0⟩`, the opposite of preparation.
pub fn rotations_to_disentangle(amplitudes: &[Complex64], epsilon: f64) -> Disentangled {
    let half = amplitudes.len() / 2;
    let mut out = Disentangled {
        remaining: Vec::with_capacity(half),
        thetas: Vec::with_capacity(half),
        phis: Vec::with_capacity(half),
    };

    for pair in amplitudes.chunks_exact(2) {
        let angles = bloch_angles(pair[0], pair[1], epsilon);
        out.remaining.push(angles.remaining);
        out.thetas.push(-angles.theta);
        out.phis.push(-angles.phi);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ampliprep_ir::Unitary2x2;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    const EPS: f64 = 1e-10;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    /// Rebuild the pair from its angles: remaining · Rz(φ) · Ry(θ) |0⟩.
    fn rebuild(angles: &BlochAngles) -> (Complex64, Complex64) {
        let u = Unitary2x2::rz(angles.phi) * Unitary2x2::ry(angles.theta);
        let (zero, one) = u.apply(c(1.0, 0.0), c(0.0, 0.0));
        (angles.remaining * zero, angles.remaining * one)
    }

    #[test]
    fn test_basis_states() {
        let zero = bloch_angles(c(1.0, 0.0), c(0.0, 0.0), EPS);
        assert_eq!(zero.theta, 0.0);
        assert_eq!(zero.phi, 0.0);
        assert!((zero.remaining - c(1.0, 0.0)).norm() < EPS);

        let one = bloch_angles(c(0.0, 0.0), c(1.0, 0.0), EPS);
        assert!((one.theta - PI).abs() < EPS);
        assert!((one.remaining - c(1.0, 0.0)).norm() < EPS);
    }

    #[test]
    fn test_polar_angle_exact_at_poles() {
        // |a|² does not round-trip through sqrt for this a.
        let a = c(0.6579262960238549, -0.6223547680904647);
        assert_eq!(bloch_angles(a, c(0.0, 0.0), EPS).theta, 0.0);
        assert_eq!(bloch_angles(c(0.0, 0.0), a, EPS).theta, PI);
    }

    #[test]
    fn test_degenerate_pair() {
        let angles = bloch_angles(c(1e-12, 0.0), c(0.0, -1e-12), EPS);
        assert_eq!(angles.theta, 0.0);
        assert_eq!(angles.phi, 0.0);
        assert_eq!(angles.remaining, c(0.0, 0.0));
    }

    #[test]
    fn test_rebuilds_pair() {
        let pairs = [
            (c(0.6, 0.0), c(0.0, 0.8)),
            (c(-0.3, 0.1), c(0.2, -0.5)),
            (c(0.0, -0.7), c(0.0, 0.0)),
            (c(FRAC_1_SQRT_2, 0.0), c(-FRAC_1_SQRT_2, 0.0)),
        ];
        for (a, b) in pairs {
            let (ra, rb) = rebuild(&bloch_angles(a, b, EPS));
            assert!((ra - a).norm() < 1e-12, "a: {ra} vs {a}");
            assert!((rb - b).norm() < 1e-12, "b: {rb} vs {b}");
        }
    }

    #[test]
    fn test_disentangle_halves_vector() {
        let s = 0.5;
        let amplitudes = [c(s, 0.0), c(s, 0.0), c(0.0, s), c(-s, 0.0)];
        let out = rotations_to_disentangle(&amplitudes, EPS);

        assert_eq!(out.remaining.len(), 2);
        assert_eq!(out.thetas.len(), 2);
        assert_eq!(out.phis.len(), 2);

        // Equal-magnitude pairs sit on the equator.
        for theta in &out.thetas {
            assert!((theta + PI / 2.0).abs() < EPS);
        }
        // Second pair: arg(b) - arg(a) = π - π/2, negated.
        assert!((out.phis[1] + PI / 2.0).abs() < EPS);

        let norm: f64 = out.remaining.iter().map(Complex64::norm_sqr).sum();
        assert!((norm - 1.0).abs() < EPS);
    }
}
