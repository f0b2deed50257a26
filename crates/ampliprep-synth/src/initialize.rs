//! State-preparation orchestration.
//!
//! Synthesis runs backwards. Starting from the target vector, each level
//! disentangles the least significant remaining qubit with a Z multiplexor
//! followed by a Y multiplexor, until a single amplitude is left. The tree
//! built this way takes the target state to `|0…0⟩`; its inverse prepares
//! the target from `|0…0⟩` up to the residual global phase.

use ampliprep_ir::{CompositeGate, GateNode, QubitId, RotationAxis};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::bloch::rotations_to_disentangle;
use crate::config::SynthesisConfig;
use crate::error::{InitError, InitResult};
use crate::multiplex::Multiplexor;
use crate::optimize::{OptimizationStats, Optimizer};

/// Synthesizes state-preparation gate trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Initializer {
    config: SynthesisConfig,
}

/// The result of a synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initialization {
    gate: GateNode,
    global_phase: Complex64,
    num_qubits: usize,
    stats: OptimizationStats,
}

impl Initialization {
    /// The preparation tree, a composite named `initialize`.
    pub fn gate(&self) -> &GateNode {
        &self.gate
    }

    /// Take ownership of the preparation tree.
    pub fn into_gate(self) -> GateNode {
        self.gate
    }

    /// Residual phase: simulating [`gate`](Self::gate) on `|0…0⟩` gives
    /// `global_phase · ψ`.
    pub fn global_phase(&self) -> Complex64 {
        self.global_phase
    }

    /// Number of qubits the tree acts on.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Optimizer statistics. Counts are unchanged if optimization was disabled.
    pub fn stats(&self) -> &OptimizationStats {
        &self.stats
    }
}

impl Initializer {
    /// Create an initializer with the given configuration.
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Build a tree that prepares `amplitudes` on `qubits` (LSB first).
    ///
    /// `amplitudes[i]` is the coefficient of the basis state whose bit `k`
    /// is the value of `qubits[k]`.
    ///
    /// # Errors
    ///
    /// Returns an error, before any gate is built, if the vector length is
    /// not a power of two of at least 2, if `qubits` has the wrong size, or
    /// if the squared magnitudes do not sum to one within the tolerance.
    #[instrument(skip(self, amplitudes, qubits), fields(len = amplitudes.len()))]
    pub fn synthesize(
        &self,
        amplitudes: &[Complex64],
        qubits: &[QubitId],
    ) -> InitResult<Initialization> {
        self.config.validate()?;
        let num_qubits = self.check_amplitudes(amplitudes, qubits)?;
        let epsilon = self.config.epsilon;

        let mut disentangler = CompositeGate::new("disentangler");
        let mut remaining = amplitudes.to_vec();
        let rz_mux = Multiplexor::new(qubits, RotationAxis::Z);
        let ry_mux = Multiplexor::new(qubits, RotationAxis::Y);

        for level in 0..num_qubits {
            let step = rotations_to_disentangle(&remaining, epsilon);
            disentangler.push(rz_mux.build(level, &step.phis));
            disentangler.push(ry_mux.build(level, &step.thetas));
            debug!(level, pairs = step.thetas.len(), "qubit disentangled");
            remaining = step.remaining;
        }

        // Exactly one amplitude is left: the phase the uncompute tree leaves on |0…0⟩.
        let residual = remaining
            .first()
            .copied()
            .unwrap_or(Complex64::new(1.0, 0.0));

        let stats = if self.config.optimize {
            Optimizer::new(self.config).run(&mut disentangler)
        } else {
            let gates = disentangler.children.iter().map(GateNode::num_leaves).sum();
            OptimizationStats {
                gates_before: gates,
                gates_after: gates,
                ..Default::default()
            }
        };

        let mut gate = GateNode::Composite(disentangler).inverse();
        if let Some(root) = gate.as_composite_mut() {
            root.name = "initialize".to_string();
        }

        info!(
            num_qubits,
            gates = stats.gates_after,
            removed = stats.gates_before - stats.gates_after,
            "state preparation synthesized"
        );

        Ok(Initialization {
            gate,
            global_phase: residual.conj(),
            num_qubits,
            stats,
        })
    }

    /// Validate shape, register size and normalization, in that order.
    fn check_amplitudes(&self, amplitudes: &[Complex64], qubits: &[QubitId]) -> InitResult<usize> {
        let len = amplitudes.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(InitError::InvalidShape { len });
        }

        let num_qubits = len.trailing_zeros() as usize;
        if qubits.len() != num_qubits {
            return Err(InitError::CardinalityMismatch {
                amplitudes: len,
                expected: num_qubits,
                got: qubits.len(),
            });
        }

        let norm_sqr: f64 = amplitudes.iter().map(Complex64::norm_sqr).sum();
        if !self.config.is_close(norm_sqr, 1.0) {
            return Err(InitError::NotNormalized { norm_sqr });
        }

        Ok(num_qubits)
    }
}

/// Synthesize with the default configuration.
///
/// See [`Initializer::synthesize`].
pub fn initialize(amplitudes: &[Complex64], qubits: &[QubitId]) -> InitResult<Initialization> {
    Initializer::default().synthesize(amplitudes, qubits)
}
