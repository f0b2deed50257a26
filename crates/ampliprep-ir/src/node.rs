//! Hierarchical gate trees.
//!
//! A [`GateNode`] is either a single [`Instruction`] or a named
//! [`CompositeGate`] owning an ordered list of child nodes. Trees are strict:
//! every child is owned by exactly one composite.

use serde::{Deserialize, Serialize};

use crate::instruction::Instruction;

/// A node in a gate tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateNode {
    /// An elementary gate.
    Leaf(Instruction),
    /// A named sub-sequence.
    Composite(CompositeGate),
}

/// A named, ordered sequence of gate nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeGate {
    /// The name of the sub-circuit.
    pub name: String,
    /// Children in application order.
    pub children: Vec<GateNode>,
}

impl CompositeGate {
    /// Create an empty composite gate.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: vec![],
        }
    }

    /// Create a composite gate with the given children.
    pub fn with_children(name: impl Into<String>, children: Vec<GateNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Append a child node.
    pub fn push(&mut self, node: impl Into<GateNode>) {
        self.children.push(node.into());
    }

    /// Check if the composite has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl GateNode {
    /// Create a leaf node.
    pub fn leaf(instruction: Instruction) -> Self {
        GateNode::Leaf(instruction)
    }

    /// Create a composite node.
    pub fn composite(name: impl Into<String>, children: Vec<GateNode>) -> Self {
        GateNode::Composite(CompositeGate::with_children(name, children))
    }

    /// Check if this is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, GateNode::Leaf(_))
    }

    /// Check if this is a composite without children.
    pub fn is_empty_composite(&self) -> bool {
        match self {
            GateNode::Leaf(_) => false,
            GateNode::Composite(c) => c.is_empty(),
        }
    }

    /// Get the instruction if this is a leaf.
    pub fn as_leaf(&self) -> Option<&Instruction> {
        match self {
            GateNode::Leaf(inst) => Some(inst),
            GateNode::Composite(_) => None,
        }
    }

    /// Get the composite if this is one.
    pub fn as_composite(&self) -> Option<&CompositeGate> {
        match self {
            GateNode::Leaf(_) => None,
            GateNode::Composite(c) => Some(c),
        }
    }

    /// Get a mutable reference to the composite if this is one.
    pub fn as_composite_mut(&mut self) -> Option<&mut CompositeGate> {
        match self {
            GateNode::Leaf(_) => None,
            GateNode::Composite(c) => Some(c),
        }
    }

    /// Get the name of the node: the gate name for leaves, the composite name otherwise.
    pub fn name(&self) -> &str {
        match self {
            GateNode::Leaf(inst) => inst.name(),
            GateNode::Composite(c) => &c.name,
        }
    }

    /// Count the elementary gates in this tree.
    pub fn num_leaves(&self) -> usize {
        match self {
            GateNode::Leaf(_) => 1,
            GateNode::Composite(c) => c.children.iter().map(GateNode::num_leaves).sum(),
        }
    }

    /// Iterate over the elementary gates in application order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            stack: vec![std::slice::from_ref(self).iter()],
        }
    }

    /// The inverse of this tree.
    ///
    /// Every nested sequence is reversed and every gate replaced by its
    /// inverse, so applying `node` then `node.inverse()` is the identity.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            GateNode::Leaf(inst) => GateNode::Leaf(inst.inverse()),
            GateNode::Composite(c) => GateNode::Composite(CompositeGate {
                name: c.name,
                children: c.children.into_iter().rev().map(GateNode::inverse).collect(),
            }),
        }
    }
}

impl From<Instruction> for GateNode {
    fn from(inst: Instruction) -> Self {
        GateNode::Leaf(inst)
    }
}

impl From<CompositeGate> for GateNode {
    fn from(composite: CompositeGate) -> Self {
        GateNode::Composite(composite)
    }
}

/// Depth-first iterator over the leaves of a gate tree.
pub struct Leaves<'a> {
    stack: Vec<std::slice::Iter<'a, GateNode>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Instruction;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = match self.stack.last_mut()?.next() {
                Some(node) => node,
                None => {
                    self.stack.pop();
                    continue;
                }
            };
            match node {
                GateNode::Leaf(inst) => return Some(inst),
                GateNode::Composite(c) => self.stack.push(c.children.iter()),
            }
        }
    }
}
