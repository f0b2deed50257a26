//! Dense state-vector simulation of gate trees.
//!
//! Basis-state index bit `k` holds the value of `QubitId(k)`, so qubit 0 is
//! the least significant.

use num_complex::Complex64;

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::node::GateNode;
use crate::qubit::QubitId;
use crate::unitary::Unitary2x2;

/// A pure quantum state over `num_qubits` qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    num_qubits: u32,
    amplitudes: Vec<Complex64>,
}

impl Statevector {
    /// The all-zero basis state `|0…0⟩`.
    pub fn zero_state(num_qubits: u32) -> Self {
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            num_qubits,
            amplitudes,
        }
    }

    /// Wrap an amplitude vector whose length is a power of two.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> IrResult<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(IrError::InvalidDimension(len));
        }
        Ok(Self {
            num_qubits: len.trailing_zeros(),
            amplitudes,
        })
    }

    /// Simulate `circuit` starting from `|0…0⟩`.
    pub fn from_circuit(circuit: &Circuit) -> IrResult<Self> {
        let width = circuit
            .qubits()
            .iter()
            .map(|q| q.id.0 + 1)
            .max()
            .unwrap_or(0);
        let mut state = Self::zero_state(width);
        for node in circuit.nodes() {
            state.apply_node(node)?;
        }
        Ok(state)
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The amplitudes in basis-state order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply every gate of a tree in order.
    pub fn apply_node(&mut self, node: &GateNode) -> IrResult<()> {
        for inst in node.leaves() {
            self.apply(inst)?;
        }
        Ok(())
    }

    /// Apply a single instruction.
    pub fn apply(&mut self, inst: &Instruction) -> IrResult<()> {
        let expected = inst.gate.num_qubits();
        if inst.qubits.len() != expected as usize {
            return Err(IrError::QubitCountMismatch {
                gate_name: inst.name().to_string(),
                expected,
                got: inst.qubits.len() as u32,
            });
        }
        for &qubit in &inst.qubits {
            self.check_qubit(qubit, inst.name())?;
        }

        match Unitary2x2::from_gate(&inst.gate) {
            Some(u) => self.apply_single(&u, inst.qubits[0]),
            None => {
                debug_assert!(matches!(inst.gate, StandardGate::CX));
                self.apply_cx(inst.qubits[0], inst.qubits[1]);
            }
        }
        Ok(())
    }

    /// Check if `self == phase · other` element-wise within `tolerance`.
    pub fn approx_eq_scaled(&self, other: &Self, phase: Complex64, tolerance: f64) -> bool {
        self.num_qubits == other.num_qubits
            && self
                .amplitudes
                .iter()
                .zip(other.amplitudes.iter())
                .all(|(a, b)| (a - phase * b).norm() < tolerance)
    }

    /// Squared overlap `|⟨self|other⟩|²`.
    pub fn fidelity(&self, other: &Self) -> f64 {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum::<Complex64>()
            .norm_sqr()
    }

    fn check_qubit(&self, qubit: QubitId, gate_name: &str) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitNotFound {
                qubit,
                gate_name: Some(gate_name.to_string()),
            });
        }
        Ok(())
    }

    fn apply_single(&mut self, u: &Unitary2x2, qubit: QubitId) {
        let mask = 1usize << qubit.index();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (zero, one) = u.apply(self.amplitudes[i], self.amplitudes[j]);
                self.amplitudes[i] = zero;
                self.amplitudes[j] = one;
            }
        }
    }

    fn apply_cx(&mut self, control: QubitId, target: QubitId) {
        let control_mask = 1usize << control.index();
        let target_mask = 1usize << target.index();
        for i in 0..self.amplitudes.len() {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
    }
}
