//! Ampliprep State Preparation Synthesis
//!
//! This crate turns a normalized vector of `2^n` complex amplitudes into a
//! tree of Ry, Rz and CX gates that prepares it from `|0…0⟩`, up to a global
//! phase that is reported alongside the tree.
//!
//! # Overview
//!
//! Synthesis works by uncomputing the target state one qubit at a time:
//! 1. **Angle extraction**: every amplitude pair is written as Bloch angles
//!    plus a leftover amplitude ([`bloch`])
//! 2. **Disentangling**: one level of pairs is rotated down, halving the vector
//! 3. **Multiplexing**: per-pair angles become uniformly controlled Rz and Ry
//!    rotations built from single rotations and CX ([`multiplex`])
//! 4. **Optimization**: zero rotations are dropped and CX pairs meeting
//!    across composite boundaries are cancelled ([`optimize`])
//! 5. **Inversion**: the uncompute tree is inverted into the preparation tree
//!
//! # Architecture
//!
//! ```text
//! amplitudes ──► Initializer ──► per level: rotations_to_disentangle
//!                    │                        │
//!                    │                        ▼
//!                    │          Multiplexor(Z), Multiplexor(Y)
//!                    ▼
//!              Optimizer: RemoveZeroRotations, CancelDoubleCx (fixed point)
//!                    │
//!                    ▼
//!              GateNode::inverse ──► Initialization { gate, global_phase }
//! ```
//!
//! # Example: Preparing a Bell State
//!
//! ```rust
//! use ampliprep_ir::{QubitId, Statevector};
//! use ampliprep_synth::initialize;
//! use num_complex::Complex64;
//! use std::f64::consts::FRAC_1_SQRT_2;
//!
//! let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
//! let zero = Complex64::new(0.0, 0.0);
//! let bell = [s, zero, zero, s];
//!
//! let prep = initialize(&bell, &[QubitId(0), QubitId(1)]).unwrap();
//! assert_eq!(prep.gate().num_leaves(), 5);
//!
//! let mut state = Statevector::zero_state(2);
//! state.apply_node(prep.gate()).unwrap();
//! let target = Statevector::from_amplitudes(bell.to_vec()).unwrap();
//! assert!(state.approx_eq_scaled(&target, prep.global_phase(), 1e-10));
//! ```
//!
//! # Example: Appending to a Circuit
//!
//! ```rust
//! use ampliprep_ir::{Circuit, QubitId};
//! use ampliprep_synth::PrepareState;
//! use num_complex::Complex64;
//!
//! let mut circuit = Circuit::with_size("prep", 1);
//! let amplitudes = [Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8)];
//! let phase = circuit.initialize(&amplitudes, &[QubitId(0)]).unwrap();
//! circuit.global_phase(phase.conj()).unwrap();
//! ```
//!
//! # Custom Passes
//!
//! Implement [`TreePass`] to add a rewrite over gate trees:
//!
//! ```rust
//! use ampliprep_ir::CompositeGate;
//! use ampliprep_synth::{SynthesisConfig, TreePass};
//!
//! struct Flatten;
//!
//! impl TreePass for Flatten {
//!     fn name(&self) -> &str { "flatten" }
//!
//!     fn run(&self, root: &mut CompositeGate, _config: &SynthesisConfig) -> usize {
//!         // Rewrite `root` here; return the number of gates removed.
//!         0
//!     }
//! }
//! ```

pub mod adapter;
pub mod bloch;
pub mod config;
pub mod error;
pub mod global_phase;
pub mod initialize;
pub mod multiplex;
pub mod optimize;
pub mod reverse;

pub use adapter::PrepareState;
pub use bloch::{BlochAngles, Disentangled, bloch_angles, rotations_to_disentangle};
pub use config::{DEFAULT_EPSILON, SynthesisConfig};
pub use error::{InitError, InitResult};
pub use global_phase::global_phase_gate;
pub use initialize::{Initialization, Initializer, initialize};
pub use multiplex::Multiplexor;
pub use optimize::{CancelDoubleCx, OptimizationStats, Optimizer, RemoveZeroRotations, TreePass};
pub use reverse::reverse_order;
