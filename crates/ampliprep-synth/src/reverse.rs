//! Order reversal of gate trees.

use ampliprep_ir::{CompositeGate, GateNode};

/// Reverse the child order at every level of `node`.
///
/// Gates themselves are left untouched: this is not an inversion, only a
/// change of sequencing. Reversing twice gives back the original tree.
#[must_use]
pub fn reverse_order(node: GateNode) -> GateNode {
    match node {
        GateNode::Leaf(_) => node,
        GateNode::Composite(c) => GateNode::Composite(CompositeGate {
            name: c.name,
            children: c.children.into_iter().rev().map(reverse_order).collect(),
        }),
    }
}
