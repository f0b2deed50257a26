//! Gate instructions combining a gate with its operands.

use serde::{Deserialize, Serialize};

use crate::gate::{RotationAxis, StandardGate};
use crate::qubit::QubitId;

/// An elementary gate applied to concrete qubits.
///
/// Operands are ordered: `[target]` for single-qubit gates and
/// `[control, target]` for CX.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate.
    pub gate: StandardGate,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self {
            gate,
            qubits: vec![qubit],
        }
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self {
            gate,
            qubits: vec![q1, q2],
        }
    }

    /// Create a rotation about `axis` on `qubit`.
    pub fn rotation(axis: RotationAxis, theta: f64, qubit: QubitId) -> Self {
        Self::single_qubit_gate(axis.gate(theta), qubit)
    }

    /// Create a CNOT instruction.
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        Self::two_qubit_gate(StandardGate::CX, control, target)
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        self.gate.name()
    }

    /// Check if this is a CNOT.
    pub fn is_cx(&self) -> bool {
        matches!(self.gate, StandardGate::CX)
    }

    /// Check if this is a CNOT on exactly the same `[control, target]` pair as `other`.
    pub fn is_same_cx(&self, other: &Instruction) -> bool {
        self.is_cx() && other.is_cx() && self.qubits == other.qubits
    }

    /// The inverse instruction on the same operands.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            gate: self.gate.inverse(),
            qubits: self.qubits.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_instruction() {
        let inst = Instruction::rotation(RotationAxis::Y, 0.5, QubitId(0));
        assert_eq!(inst.qubits.len(), 1);
        assert_eq!(inst.name(), "ry");
        assert!(!inst.is_cx());
    }

    #[test]
    fn test_cx_pairing() {
        let a = Instruction::cx(QubitId(1), QubitId(0));
        let b = Instruction::cx(QubitId(1), QubitId(0));
        let flipped = Instruction::cx(QubitId(0), QubitId(1));

        assert!(a.is_same_cx(&b));
        assert!(!a.is_same_cx(&flipped));
        assert!(!a.is_same_cx(&Instruction::rotation(RotationAxis::Z, 0.1, QubitId(0))));
    }

    #[test]
    fn test_inverse_keeps_operands() {
        let inst = Instruction::rotation(RotationAxis::Z, 0.3, QubitId(2));
        let inv = inst.inverse();
        assert_eq!(inv.gate, StandardGate::Rz(-0.3));
        assert_eq!(inv.qubits, vec![QubitId(2)]);
    }
}
