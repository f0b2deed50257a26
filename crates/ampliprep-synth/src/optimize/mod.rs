//! Gate-tree optimization passes.
//!
//! Two rewrites run over the uncompute tree before it is inverted:
//!
//! - [`RemoveZeroRotations`]: drop rotations whose angle chops to zero
//! - [`CancelDoubleCx`]: delete CX pairs that meet across composite boundaries
//!
//! [`Optimizer`] runs the first once and the second until a pass removes
//! nothing, since one cancellation can make two further CX gates adjacent.

mod cancel;
mod zero_rotation;

#[cfg(test)]
mod tests;

pub use cancel::CancelDoubleCx;
pub use zero_rotation::RemoveZeroRotations;

use ampliprep_ir::CompositeGate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::SynthesisConfig;

/// A structural rewrite over a gate tree.
pub trait TreePass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Run one pass over `root`, returning the number of gates removed.
    fn run(&self, root: &mut CompositeGate, config: &SynthesisConfig) -> usize;

    /// Repeat the pass until it removes nothing.
    ///
    /// Returns the total number of gates removed and the number of passes run,
    /// including the final pass that found nothing.
    fn run_until_stable(&self, root: &mut CompositeGate, config: &SynthesisConfig) -> (usize, usize) {
        let mut removed = 0;
        let mut passes = 0;
        loop {
            let n = self.run(root, config);
            passes += 1;
            removed += n;
            if n == 0 {
                return (removed, passes);
            }
        }
    }
}

/// Statistics reported after optimization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationStats {
    /// Gate count before optimization.
    pub gates_before: usize,
    /// Gate count after optimization.
    pub gates_after: usize,
    /// Rotations removed as zero.
    pub zero_rotations_removed: usize,
    /// CX pairs cancelled.
    pub cx_pairs_removed: usize,
    /// CX cancellation passes needed to reach the fixed point.
    pub cx_passes: usize,
}

impl OptimizationStats {
    /// Fraction of gates eliminated (0.0 – 1.0).
    pub fn reduction_ratio(&self) -> f64 {
        if self.gates_before == 0 {
            return 0.0;
        }
        (self.gates_before - self.gates_after) as f64 / self.gates_before as f64
    }
}

/// Runs zero-rotation elimination followed by CX cancellation to a fixed point.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optimizer {
    config: SynthesisConfig,
}

impl Optimizer {
    /// Create an optimizer using the tolerance from `config`.
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Optimize `root` in place.
    #[instrument(skip(self, root), fields(tree = %root.name))]
    pub fn run(&self, root: &mut CompositeGate) -> OptimizationStats {
        let gates_before = count_gates(root);

        let zero_rotations_removed = RemoveZeroRotations.run(root, &self.config);
        debug!(
            "Pass {} completed, removed {zero_rotations_removed} gates",
            RemoveZeroRotations.name()
        );

        let (cx_removed, cx_passes) = CancelDoubleCx.run_until_stable(root, &self.config);
        debug!(
            "Pass {} reached fixed point after {cx_passes} passes, removed {cx_removed} gates",
            CancelDoubleCx.name()
        );

        let stats = OptimizationStats {
            gates_before,
            gates_after: count_gates(root),
            zero_rotations_removed,
            cx_pairs_removed: cx_removed / 2,
            cx_passes,
        };
        debug!(
            gates_before = stats.gates_before,
            gates_after = stats.gates_after,
            "gate tree optimized"
        );
        stats
    }
}

fn count_gates(root: &CompositeGate) -> usize {
    root.children.iter().map(ampliprep_ir::GateNode::num_leaves).sum()
}
