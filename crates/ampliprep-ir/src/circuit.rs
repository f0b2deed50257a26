//! High-level circuit builder API.

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::Instruction;
use crate::node::GateNode;
use crate::qubit::{Qubit, QubitId};

/// A quantum circuit.
///
/// Holds a register of qubits and an ordered list of gate trees. Every
/// appended node is checked against the register before it is stored.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Top-level gate trees in application order.
    nodes: Vec<GateNode>,
    /// Counter for generating qubit IDs.
    next_qubit_id: u32,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            nodes: vec![],
            next_qubit_id: 0,
        }
    }

    /// Create a circuit with a given number of qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.next_qubit_id);
        self.next_qubit_id += 1;
        self.qubits.push(Qubit::new(id));
        id
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Rx(theta), qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Ry(theta), qubit))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(StandardGate::Rz(theta), qubit))
    }

    /// Apply universal U gate.
    pub fn u(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::single_qubit_gate(
            StandardGate::U(theta, phi, lambda),
            qubit,
        ))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Instruction::cx(control, target))
    }

    /// Append a gate or gate tree.
    ///
    /// Every leaf must use the right number of distinct qubits of this circuit.
    pub fn append(&mut self, node: impl Into<GateNode>) -> IrResult<&mut Self> {
        let node = node.into();
        for inst in node.leaves() {
            self.check_instruction(inst)?;
        }
        self.nodes.push(node);
        Ok(self)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check that `qubits` are distinct members of this circuit.
    pub fn check_operands(&self, qubits: &[QubitId], gate_name: &str) -> IrResult<()> {
        for (i, &qubit) in qubits.iter().enumerate() {
            self.check_qubit(qubit, gate_name)?;
            if qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(gate_name.to_string()),
                });
            }
        }
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId, gate_name: &str) -> IrResult<()> {
        if self.qubits.iter().any(|q| q.id == qubit) {
            Ok(())
        } else {
            Err(IrError::QubitNotFound {
                qubit,
                gate_name: Some(gate_name.to_string()),
            })
        }
    }

    fn check_instruction(&self, inst: &Instruction) -> IrResult<()> {
        let expected = inst.gate.num_qubits();
        if inst.qubits.len() != expected as usize {
            return Err(IrError::QubitCountMismatch {
                gate_name: inst.name().to_string(),
                expected,
                got: inst.qubits.len() as u32,
            });
        }
        self.check_operands(&inst.qubits, inst.name())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the top-level gate trees.
    pub fn nodes(&self) -> &[GateNode] {
        &self.nodes
    }

    /// Iterate over all elementary gates in application order.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.nodes.iter().flat_map(GateNode::leaves)
    }

    /// Number of elementary gates.
    pub fn num_ops(&self) -> usize {
        self.nodes.iter().map(GateNode::num_leaves).sum()
    }
}
