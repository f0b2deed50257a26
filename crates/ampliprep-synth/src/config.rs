//! Synthesis configuration.
//!
//! [`SynthesisConfig`] carries the numeric tolerance used by every comparison
//! in the crate (normalization, degenerate amplitude pairs, zero-rotation
//! chopping, unit-phase checks) and whether the gate-tree optimizer runs.
//!
//! ```
//! use ampliprep_synth::SynthesisConfig;
//!
//! let config = SynthesisConfig::new().with_epsilon(1e-8);
//! assert_eq!(config.epsilon, 1e-8);
//! assert!(config.optimize);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{InitError, InitResult};

/// Default tolerance for chopping small numbers to zero.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Settings shared by all synthesis stages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Absolute tolerance for numeric comparisons.
    pub epsilon: f64,
    /// Run zero-rotation elimination and CX cancellation on the result.
    pub optimize: bool,
}

impl SynthesisConfig {
    /// Create a configuration with the default tolerance and optimization enabled.
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            optimize: true,
        }
    }

    /// Set the numeric tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Enable or disable the gate-tree optimizer.
    #[must_use]
    pub fn with_optimization(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    /// Check that the tolerance is usable.
    pub fn validate(&self) -> InitResult<()> {
        if self.epsilon.is_finite() && self.epsilon > 0.0 {
            Ok(())
        } else {
            Err(InitError::InvalidTolerance(self.epsilon))
        }
    }

    /// Set values with magnitude below the tolerance to exactly zero.
    #[inline]
    pub fn chop(&self, value: f64) -> f64 {
        if value.abs() < self.epsilon { 0.0 } else { value }
    }

    /// Check if `a` and `b` agree within the tolerance.
    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SynthesisConfig::default();
        assert_eq!(config.epsilon, DEFAULT_EPSILON);
        assert!(config.optimize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_chop() {
        let config = SynthesisConfig::new();
        assert_eq!(config.chop(5e-11), 0.0);
        assert_eq!(config.chop(-5e-11), 0.0);
        assert_eq!(config.chop(1e-9), 1e-9);
    }

    #[test]
    fn test_invalid_tolerance() {
        for eps in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let err = SynthesisConfig::new().with_epsilon(eps).validate().unwrap_err();
            assert!(matches!(err, InitError::InvalidTolerance(_)));
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SynthesisConfig::new().with_epsilon(1e-6).with_optimization(false);
        let json = serde_json::to_string(&config).unwrap();
        let back: SynthesisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
