//! Elementary gate types.

use serde::{Deserialize, Serialize};

/// Elementary gates emitted by state-preparation synthesis.
///
/// Rotation angles are concrete radians; there are no symbolic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Pauli-X gate.
    X,
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Universal single-qubit gate U(θ, φ, λ).
    U(f64, f64, f64),
    /// Controlled-X (CNOT) gate.
    CX,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::X => "x",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::U(_, _, _) => "u",
            StandardGate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::X
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_)
            | StandardGate::U(_, _, _) => 1,
            StandardGate::CX => 2,
        }
    }

    /// Angle of a single-axis rotation, `None` for every other gate.
    pub fn rotation_angle(&self) -> Option<f64> {
        match self {
            StandardGate::Rx(theta) | StandardGate::Ry(theta) | StandardGate::Rz(theta) => {
                Some(*theta)
            }
            StandardGate::X | StandardGate::U(_, _, _) | StandardGate::CX => None,
        }
    }

    /// Check if this is a single-axis rotation.
    pub fn is_rotation(&self) -> bool {
        self.rotation_angle().is_some()
    }

    /// The inverse gate.
    ///
    /// Rotations negate their angle, `U(θ, φ, λ)` becomes `U(-θ, -λ, -φ)`,
    /// and X and CX are self-inverse.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match *self {
            StandardGate::X => StandardGate::X,
            StandardGate::Rx(theta) => StandardGate::Rx(-theta),
            StandardGate::Ry(theta) => StandardGate::Ry(-theta),
            StandardGate::Rz(theta) => StandardGate::Rz(-theta),
            StandardGate::U(theta, phi, lambda) => StandardGate::U(-theta, -lambda, -phi),
            StandardGate::CX => StandardGate::CX,
        }
    }
}

/// Axis of a single-qubit rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationAxis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl RotationAxis {
    /// Build the rotation gate about this axis.
    #[inline]
    pub fn gate(self, theta: f64) -> StandardGate {
        match self {
            RotationAxis::X => StandardGate::Rx(theta),
            RotationAxis::Y => StandardGate::Ry(theta),
            RotationAxis::Z => StandardGate::Rz(theta),
        }
    }
}
