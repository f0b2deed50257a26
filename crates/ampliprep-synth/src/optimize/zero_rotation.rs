//! Zero-rotation elimination.

use ampliprep_ir::{CompositeGate, GateNode};

use crate::config::SynthesisConfig;

use super::TreePass;

/// Removes Rx/Ry/Rz gates whose angle is zero after chopping.
///
/// Works bottom-up; composites left without children are dropped from their
/// parent. CX and other non-rotation gates are never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveZeroRotations;

impl RemoveZeroRotations {
    /// Create a new zero-rotation pass.
    pub fn new() -> Self {
        Self
    }
}

impl TreePass for RemoveZeroRotations {
    fn name(&self) -> &'static str {
        "RemoveZeroRotations"
    }

    fn run(&self, root: &mut CompositeGate, config: &SynthesisConfig) -> usize {
        remove_zero_rotations(&mut root.children, config)
    }
}

fn remove_zero_rotations(children: &mut Vec<GateNode>, config: &SynthesisConfig) -> usize {
    let mut removed = 0;
    children.retain_mut(|node| match node {
        GateNode::Composite(c) => {
            removed += remove_zero_rotations(&mut c.children, config);
            !c.is_empty()
        }
        GateNode::Leaf(inst) => match inst.gate.rotation_angle() {
            Some(theta) if config.chop(theta) == 0.0 => {
                removed += 1;
                false
            }
            _ => true,
        },
    });
    removed
}
