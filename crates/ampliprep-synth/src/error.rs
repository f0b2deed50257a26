//! Error types for the synthesis crate.

use thiserror::Error;

/// Errors produced by state-preparation synthesis.
///
/// All of them are detected before any gate tree is built.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InitError {
    /// Amplitude vector length is not a power of two, or is 1 (zero qubits).
    #[error("Desired vector of length {len} is not a positive power of 2")]
    InvalidShape {
        /// Length of the rejected vector.
        len: usize,
    },

    /// Amplitude count does not match the target register.
    #[error(
        "Number of complex amplitudes ({amplitudes}) does not correspond to the number of \
         qubits: expected {expected}, got {got}"
    )]
    CardinalityMismatch {
        /// Length of the amplitude vector.
        amplitudes: usize,
        /// Qubit count implied by the amplitude vector.
        expected: usize,
        /// Qubit count of the target register.
        got: usize,
    },

    /// Squared magnitudes do not sum to one.
    #[error("Sum of amplitudes-squared does not equal one (got {norm_sqr})")]
    NotNormalized {
        /// The computed sum of squared magnitudes.
        norm_sqr: f64,
    },

    /// The global-phase helper takes exactly one phase factor.
    #[error("Global phase takes exactly one parameter, got {0}")]
    ParameterCount(usize),

    /// The global-phase factor is not of unit magnitude.
    #[error("Phase factor is not of unit length (magnitude {magnitude})")]
    PhaseMagnitude {
        /// Magnitude of the rejected phase factor.
        magnitude: f64,
    },

    /// The global-phase helper needs a qubit to act on.
    #[error("Global phase needs at least one qubit")]
    EmptyRegister,

    /// Configured tolerance is not a positive finite number.
    #[error("Tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    /// Host circuit returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] ampliprep_ir::IrError),
}

/// Result type for synthesis operations.
pub type InitResult<T> = Result<T, InitError>;
