//! Circuit-level entry points.

use ampliprep_ir::{Circuit, QubitId};
use num_complex::Complex64;
use tracing::debug;

use crate::config::SynthesisConfig;
use crate::error::InitResult;
use crate::global_phase::global_phase_gate;
use crate::initialize::Initializer;

/// State preparation on a host circuit.
pub trait PrepareState {
    /// Append a tree preparing `amplitudes` on `qubits`, using the default
    /// configuration.
    ///
    /// Returns the residual global phase of the appended tree.
    fn initialize(&mut self, amplitudes: &[Complex64], qubits: &[QubitId]) -> InitResult<Complex64>;

    /// Like [`initialize`](Self::initialize) with an explicit configuration.
    fn initialize_with(
        &mut self,
        amplitudes: &[Complex64],
        qubits: &[QubitId],
        config: &SynthesisConfig,
    ) -> InitResult<Complex64>;

    /// Append a gate multiplying the state by the unit phase `phase`.
    fn global_phase(&mut self, phase: Complex64) -> InitResult<&mut Self>;
}

impl PrepareState for Circuit {
    fn initialize(&mut self, amplitudes: &[Complex64], qubits: &[QubitId]) -> InitResult<Complex64> {
        self.initialize_with(amplitudes, qubits, &SynthesisConfig::default())
    }

    fn initialize_with(
        &mut self,
        amplitudes: &[Complex64],
        qubits: &[QubitId],
        config: &SynthesisConfig,
    ) -> InitResult<Complex64> {
        self.check_operands(qubits, "initialize")?;
        let init = Initializer::new(*config).synthesize(amplitudes, qubits)?;

        let phase = init.global_phase();
        debug!(circuit = %self.name(), gates = init.gate().num_leaves(), "appending initialize");
        self.append(init.into_gate())?;
        Ok(phase)
    }

    fn global_phase(&mut self, phase: Complex64) -> InitResult<&mut Self> {
        let first: Vec<QubitId> = self.qubits().iter().take(1).map(|q| q.id).collect();
        let gate = global_phase_gate(&[phase], &first, &SynthesisConfig::default())?;
        self.append(gate)?;
        Ok(self)
    }
}
