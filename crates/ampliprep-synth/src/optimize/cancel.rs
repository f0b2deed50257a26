//! Double-CX cancellation across composite boundaries.
//!
//! Two sibling nodes are adjacent in execution order when the last leaf under
//! the left one is immediately followed by the first leaf under the right one.
//! When both are the same CX the pair is the identity and both leaves are
//! deleted, wherever in the tree they live.

use ampliprep_ir::{CompositeGate, GateNode, Instruction};

use crate::config::SynthesisConfig;

use super::TreePass;

/// Deletes adjacent identical CX gates, including pairs split by composites.
///
/// One call performs a single pass; deletions can make new pairs adjacent, so
/// the optimizer repeats it until nothing is removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CancelDoubleCx;

impl CancelDoubleCx {
    /// Create a new CX cancellation pass.
    pub fn new() -> Self {
        Self
    }
}

impl TreePass for CancelDoubleCx {
    fn name(&self) -> &'static str {
        "CancelDoubleCx"
    }

    fn run(&self, root: &mut CompositeGate, _config: &SynthesisConfig) -> usize {
        cancel_children(&mut root.children)
    }
}

/// Which edge of a subtree to descend to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    First,
    Last,
}

/// Position of a leaf as child indices from a sibling list downwards.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LeafLocation(Vec<usize>);

impl LeafLocation {
    /// Locate the first or last leaf under `children[index]`.
    ///
    /// Empty composites are stepped over. Returns `None` when the subtree
    /// holds no leaf at all.
    fn find(children: &[GateNode], index: usize, edge: Edge) -> Option<Self> {
        let mut path = vec![index];
        descend(children.get(index)?, edge, &mut path).then_some(Self(path))
    }

    fn get<'a>(&self, children: &'a [GateNode]) -> Option<&'a Instruction> {
        leaf_at(children, &self.0)
    }

    /// Remove the leaf, dropping any composite the removal leaves empty.
    fn remove(&self, children: &mut Vec<GateNode>) {
        remove_at(children, &self.0);
    }
}

fn descend(node: &GateNode, edge: Edge, path: &mut Vec<usize>) -> bool {
    let c = match node {
        GateNode::Leaf(_) => return true,
        GateNode::Composite(c) => c,
    };
    let n = c.children.len();
    for k in 0..n {
        let i = match edge {
            Edge::First => k,
            Edge::Last => n - 1 - k,
        };
        path.push(i);
        if descend(&c.children[i], edge, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn leaf_at<'a>(children: &'a [GateNode], path: &[usize]) -> Option<&'a Instruction> {
    let (&index, rest) = path.split_first()?;
    match children.get(index)? {
        GateNode::Leaf(inst) if rest.is_empty() => Some(inst),
        GateNode::Composite(c) => leaf_at(&c.children, rest),
        GateNode::Leaf(_) => None,
    }
}

fn remove_at(children: &mut Vec<GateNode>, path: &[usize]) {
    let Some((&index, rest)) = path.split_first() else {
        return;
    };
    if index >= children.len() {
        return;
    }
    if rest.is_empty() {
        children.remove(index);
        return;
    }
    let emptied = match &mut children[index] {
        GateNode::Composite(c) => {
            remove_at(&mut c.children, rest);
            c.children.is_empty()
        }
        GateNode::Leaf(_) => false,
    };
    if emptied {
        children.remove(index);
    }
}

/// One cancellation pass over a sibling list and everything below it.
fn cancel_children(children: &mut Vec<GateNode>) -> usize {
    let mut removed = 0;

    // A lone composite child has no sibling to pair with; only its inside matters.
    if let [GateNode::Composite(only)] = children.as_mut_slice() {
        removed += cancel_children(&mut only.children);
        if only.is_empty() {
            children.clear();
        }
        return removed;
    }

    for child in children.iter_mut() {
        if let GateNode::Composite(c) = child {
            removed += cancel_children(&mut c.children);
        }
    }
    children.retain(|child| !child.is_empty_composite());

    let mut i = 0;
    while i + 1 < children.len() {
        if cancel_pair(children, i) {
            removed += 2;
            // The left neighbour may now meet whatever slid into place.
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }

    removed
}

/// Delete the boundary leaves of `children[i]` and `children[i + 1]` if they
/// are the same CX.
fn cancel_pair(children: &mut Vec<GateNode>, i: usize) -> bool {
    let Some(left) = LeafLocation::find(children, i, Edge::Last) else {
        return false;
    };
    let Some(right) = LeafLocation::find(children, i + 1, Edge::First) else {
        return false;
    };

    let same_cx = match (left.get(children), right.get(children)) {
        (Some(l), Some(r)) => l.is_same_cx(r),
        _ => false,
    };
    if !same_cx {
        return false;
    }

    // Right first: it sits under a later index, so `left` stays valid.
    right.remove(children);
    left.remove(children);
    true
}
