//! Ampliprep Gate Intermediate Representation
//!
//! This crate is the host side of state-preparation synthesis: it defines the
//! gates the synthesizer emits, the tree those gates are grouped into, the
//! circuit container trees are appended to, and a small state-vector
//! simulator used to check results.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] and [`Qubit`] for addressing circuit qubits
//! - **Gates**: [`StandardGate`] (X, Rx, Ry, Rz, U, CX) and [`RotationAxis`]
//! - **Instructions**: [`Instruction`] combining a gate with its operands
//! - **Gate trees**: [`GateNode`] (leaf or [`CompositeGate`]) with full-sequence
//!   inversion via [`GateNode::inverse`]
//! - **Circuit**: [`Circuit`] builder that validates operands on append
//! - **Simulation**: [`Unitary2x2`] and [`Statevector`]
//!
//! # Example: Inverting a Gate Tree
//!
//! ```rust
//! use ampliprep_ir::{GateNode, Instruction, RotationAxis, QubitId, StandardGate};
//!
//! let tree = GateNode::composite(
//!     "prep",
//!     vec![
//!         Instruction::rotation(RotationAxis::Y, 0.5, QubitId(0)).into(),
//!         Instruction::cx(QubitId(0), QubitId(1)).into(),
//!     ],
//! );
//!
//! // Reverse the sequence and invert every gate
//! let inverse = tree.inverse();
//! let gates: Vec<_> = inverse.leaves().map(|inst| inst.gate).collect();
//! assert_eq!(gates, vec![StandardGate::CX, StandardGate::Ry(-0.5)]);
//! ```
//!
//! # Example: Simulating a Circuit
//!
//! ```rust
//! use ampliprep_ir::{Circuit, QubitId, Statevector};
//! use std::f64::consts::PI;
//!
//! let mut circuit = Circuit::with_size("bell", 2);
//! circuit.ry(PI / 2.0, QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let state = Statevector::from_circuit(&circuit).unwrap();
//! assert!((state.amplitudes()[3].re - 0.5_f64.sqrt()).abs() < 1e-12);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod node;
pub mod qubit;
pub mod statevector;
pub mod unitary;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{RotationAxis, StandardGate};
pub use instruction::Instruction;
pub use node::{CompositeGate, GateNode, Leaves};
pub use qubit::{Qubit, QubitId};
pub use statevector::Statevector;
pub use unitary::Unitary2x2;
