//! Global-phase gate.

use std::f64::consts::PI;

use ampliprep_ir::{GateNode, Instruction, QubitId, StandardGate};
use num_complex::Complex64;

use crate::config::SynthesisConfig;
use crate::error::{InitError, InitResult};

/// Build a gate that multiplies the whole state by the unit phase `params[0]`.
///
/// `U(π, φ, π + φ)` equals `e^{iφ} · X`, so following it with `X` on the same
/// qubit leaves only the phase. Both act on `qubits[0]`.
///
/// # Errors
///
/// [`InitError::EmptyRegister`] without qubits, [`InitError::ParameterCount`]
/// unless exactly one parameter is given, [`InitError::PhaseMagnitude`] if
/// the parameter is not of unit length within the tolerance.
pub fn global_phase_gate(
    params: &[Complex64],
    qubits: &[QubitId],
    config: &SynthesisConfig,
) -> InitResult<GateNode> {
    config.validate()?;
    let &target = qubits.first().ok_or(InitError::EmptyRegister)?;
    let [phase] = params else {
        return Err(InitError::ParameterCount(params.len()));
    };

    let magnitude = phase.norm();
    if !config.is_close(magnitude, 1.0) {
        return Err(InitError::PhaseMagnitude { magnitude });
    }

    let phi = phase.arg();
    Ok(GateNode::composite(
        "global_phase",
        vec![
            Instruction::single_qubit_gate(StandardGate::U(PI, phi, PI + phi), target).into(),
            Instruction::single_qubit_gate(StandardGate::X, target).into(),
        ],
    ))
}
