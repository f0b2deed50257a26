//! 2x2 unitary matrices for single-qubit gates.

use num_complex::Complex64;

use crate::gate::StandardGate;

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 unitary matrix.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Create the identity matrix.
    pub fn identity() -> Self {
        Self::new(
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        )
    }

    /// Create a Pauli-X matrix.
    pub fn x() -> Self {
        Self::new(
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
        )
    }

    /// Create an RX rotation matrix.
    pub fn rx(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(0.0, -s),
            Complex64::new(0.0, -s),
            Complex64::new(c, 0.0),
        )
    }

    /// Create an RY rotation matrix.
    pub fn ry(theta: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            Complex64::new(-s, 0.0),
            Complex64::new(s, 0.0),
            Complex64::new(c, 0.0),
        )
    }

    /// Create an RZ rotation matrix.
    pub fn rz(theta: f64) -> Self {
        let exp_neg = Complex64::from_polar(1.0, -theta / 2.0);
        let exp_pos = Complex64::from_polar(1.0, theta / 2.0);
        Self::new(
            exp_neg,
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            exp_pos,
        )
    }

    /// Create a U gate U(theta, phi, lambda).
    pub fn u(theta: f64, phi: f64, lambda: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            -Complex64::from_polar(s, lambda),
            Complex64::from_polar(s, phi),
            Complex64::from_polar(c, phi + lambda),
        )
    }

    /// Matrix of a single-qubit gate, `None` for multi-qubit gates.
    pub fn from_gate(gate: &StandardGate) -> Option<Self> {
        match *gate {
            StandardGate::X => Some(Self::x()),
            StandardGate::Rx(theta) => Some(Self::rx(theta)),
            StandardGate::Ry(theta) => Some(Self::ry(theta)),
            StandardGate::Rz(theta) => Some(Self::rz(theta)),
            StandardGate::U(theta, phi, lambda) => Some(Self::u(theta, phi, lambda)),
            StandardGate::CX => None,
        }
    }

    /// Multiply this matrix by another: self * other.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Apply the matrix to the amplitude pair `(|0⟩, |1⟩)`.
    #[inline]
    pub fn apply(&self, zero: Complex64, one: Complex64) -> (Complex64, Complex64) {
        let [a, b, c, d] = self.data;
        (a * zero + b * one, c * zero + d * one)
    }

    /// Check if `self` equals `other` element-wise within `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).norm() < tolerance)
    }
}

impl Default for Unitary2x2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Unitary2x2 {
    type Output = Self;

    #[allow(clippy::needless_pass_by_value)]
    fn mul(self, rhs: Self) -> Self::Output {
        Unitary2x2::mul(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_x_squared_is_identity() {
        let x = Unitary2x2::x();
        assert!((x * x).approx_eq(&Unitary2x2::identity(), TOL));
    }

    #[test]
    fn test_rotation_conjugated_by_x_flips_sign() {
        let x = Unitary2x2::x();
        for theta in [0.3, -1.2, PI] {
            assert!((x * Unitary2x2::ry(theta) * x).approx_eq(&Unitary2x2::ry(-theta), TOL));
            assert!((x * Unitary2x2::rz(theta) * x).approx_eq(&Unitary2x2::rz(-theta), TOL));
        }
    }

    #[test]
    fn test_rotations_compose() {
        let composed = Unitary2x2::ry(0.4) * Unitary2x2::ry(0.6);
        assert!(composed.approx_eq(&Unitary2x2::ry(1.0), TOL));
    }

    #[test]
    fn test_phased_x_pair_is_global_phase() {
        let phase = 0.9;
        let product = Unitary2x2::x() * Unitary2x2::u(PI, phase, PI + phase);
        let expected = Complex64::from_polar(1.0, phase);
        assert!((product.data[0] - expected).norm() < TOL);
        assert!((product.data[3] - expected).norm() < TOL);
        assert!(product.data[1].norm() < TOL);
        assert!(product.data[2].norm() < TOL);
    }

    #[test]
    fn test_from_gate() {
        assert!(Unitary2x2::from_gate(&StandardGate::CX).is_none());
        let ry = Unitary2x2::from_gate(&StandardGate::Ry(0.5)).unwrap();
        assert!(ry.approx_eq(&Unitary2x2::ry(0.5), TOL));
    }
}
