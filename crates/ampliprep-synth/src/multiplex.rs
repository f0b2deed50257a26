//! Multiplexed (uniformly controlled) rotation synthesis.
//!
//! A multiplexor applies `R(angles[i])` to a target qubit when the control
//! qubits above it encode `i`. It is built recursively: rotate the target by
//! the half-sum of each angle pair, flip it with a CX from the most
//! significant control, then rotate by the half-difference. Flipping the target
//! negates the rotation, so the two halves add up to `angles[i]` for one
//! control value and subtract for the other.
//!
//! Following Shende, Bullock and Markov, the second sub-multiplexor is
//! order-reversed and every inner closing CX is left out: the reversed
//! neighbour opens with the same CX, and the optimizer cancels the pair.
//! Only the outermost multiplexor keeps its closing CX.

use ampliprep_ir::{CompositeGate, GateNode, Instruction, QubitId, RotationAxis};

use crate::reverse::reverse_order;

/// Builder for multiplexed rotations over a fixed qubit register.
#[derive(Debug, Clone, Copy)]
pub struct Multiplexor<'a> {
    /// Register ordered from the least significant qubit.
    qubits: &'a [QubitId],
    /// Axis of the elementary rotation.
    axis: RotationAxis,
}

impl<'a> Multiplexor<'a> {
    /// Create a builder for `axis` rotations on `qubits` (LSB first).
    pub fn new(qubits: &'a [QubitId], axis: RotationAxis) -> Self {
        Self { qubits, axis }
    }

    /// Build the multiplexor whose target is `qubits[bottom]`.
    ///
    /// Bit `j` of an angle's index selects control `qubits[bottom + 1 + j]`.
    ///
    /// # Panics
    ///
    /// Panics if `angles.len()` is not a power of two `2^k`, or if
    /// `bottom + k` is not an index into the register.
    pub fn build(&self, bottom: usize, angles: &[f64]) -> GateNode {
        assert!(
            angles.len().is_power_of_two(),
            "multiplexor needs 2^k angles, got {}",
            angles.len()
        );
        let target = self.qubits[bottom];

        if let [angle] = angles {
            return GateNode::leaf(Instruction::rotation(self.axis, *angle, target));
        }

        let len = angles.len();
        let local_num_qubits = len.trailing_zeros() as usize + 1;
        let control = self.qubits[local_num_qubits - 1 + bottom];
        let combined = combine_angles(angles);
        let (low, high) = combined.split_at(len / 2);

        let mut mux = CompositeGate::new(format!("multiplex{local_num_qubits}"));
        mux.push(self.build(bottom, low));
        mux.push(Instruction::cx(control, target));
        mux.push(reverse_order(self.build(bottom, high)));

        // No neighbour above this level to cancel a closing CX against.
        if self.qubits.len() == local_num_qubits + bottom {
            mux.push(Instruction::cx(control, target));
        }

        GateNode::Composite(mux)
    }
}

/// Apply `kron([[½, ½], [½, -½]], I)` to `angles`.
///
/// The first half of the result holds pairwise half-sums, the second half the
/// matching half-differences.
fn combine_angles(angles: &[f64]) -> Vec<f64> {
    let (first, second) = angles.split_at(angles.len() / 2);
    let sums = first.iter().zip(second).map(|(a, b)| (a + b) / 2.0);
    let diffs = first.iter().zip(second).map(|(a, b)| (a - b) / 2.0);
    sums.chain(diffs).collect()
}
