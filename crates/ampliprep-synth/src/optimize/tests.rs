use super::*;
use ampliprep_ir::{GateNode, Instruction, QubitId, RotationAxis};

fn ry(theta: f64, q: u32) -> GateNode {
    Instruction::rotation(RotationAxis::Y, theta, QubitId(q)).into()
}

fn rz(theta: f64, q: u32) -> GateNode {
    Instruction::rotation(RotationAxis::Z, theta, QubitId(q)).into()
}

fn rx(theta: f64, q: u32) -> GateNode {
    Instruction::rotation(RotationAxis::X, theta, QubitId(q)).into()
}

fn cx(control: u32, target: u32) -> GateNode {
    Instruction::cx(QubitId(control), QubitId(target)).into()
}

fn group(children: Vec<GateNode>) -> GateNode {
    GateNode::composite("group", children)
}

fn root(children: Vec<GateNode>) -> CompositeGate {
    CompositeGate::with_children("root", children)
}

fn names(root: &CompositeGate) -> Vec<String> {
    root.children
        .iter()
        .flat_map(GateNode::leaves)
        .map(|inst| inst.name().to_string())
        .collect()
}

fn has_adjacent_cx_pair(root: &CompositeGate) -> bool {
    let leaves: Vec<_> = root.children.iter().flat_map(GateNode::leaves).collect();
    leaves.windows(2).any(|w| w[0].is_same_cx(w[1]))
}

#[test]
fn test_zero_rotations_removed() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![
        ry(0.0, 0),
        cx(1, 0),
        rz(1e-12, 0),
        rx(-1e-11, 1),
        ry(0.3, 1),
    ]);

    let removed = RemoveZeroRotations.run(&mut tree, &config);
    assert_eq!(removed, 3);
    assert_eq!(names(&tree), vec!["cx", "ry"]);
}

#[test]
fn test_zero_rotation_pass_keeps_cx() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![cx(0, 1), group(vec![cx(1, 0)])]);
    assert_eq!(RemoveZeroRotations.run(&mut tree, &config), 0);
    assert_eq!(tree.children.len(), 2);
}

#[test]
fn test_zero_rotation_drops_emptied_composites() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![
        group(vec![ry(0.0, 0), group(vec![rz(0.0, 0)])]),
        ry(0.5, 0),
    ]);

    assert_eq!(RemoveZeroRotations.run(&mut tree, &config), 2);
    assert_eq!(tree.children.len(), 1);
    assert!(tree.children[0].is_leaf());
}

#[test]
fn test_zero_rotation_respects_tolerance() {
    let loose = SynthesisConfig::new().with_epsilon(1e-3);
    let mut tree = root(vec![ry(1e-4, 0), ry(1e-2, 0)]);
    assert_eq!(RemoveZeroRotations.run(&mut tree, &loose), 1);
    assert_eq!(tree.children.len(), 1);
}

#[test]
fn test_cancel_adjacent_siblings() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![ry(0.2, 0), cx(1, 0), cx(1, 0), ry(0.4, 0)]);
    assert_eq!(CancelDoubleCx.run(&mut tree, &config), 2);
    assert_eq!(names(&tree), vec!["ry", "ry"]);
}

#[test]
fn test_different_cx_not_cancelled() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![cx(0, 1), cx(1, 0), cx(2, 0)]);
    assert_eq!(CancelDoubleCx.run(&mut tree, &config), 0);
    assert_eq!(tree.children.len(), 3);
}

#[test]
fn test_cancel_across_composite_boundary() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![
        group(vec![ry(0.1, 0), group(vec![rz(0.2, 0), cx(1, 0)])]),
        group(vec![group(vec![cx(1, 0), ry(0.3, 0)]), rz(0.4, 0)]),
    ]);

    assert_eq!(CancelDoubleCx.run(&mut tree, &config), 2);
    assert_eq!(names(&tree), vec!["ry", "rz", "ry", "rz"]);
    // Both groups keep their other gates, so nothing is pruned.
    assert_eq!(tree.children.len(), 2);
}

#[test]
fn test_cancellation_prunes_emptied_composites() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![ry(0.1, 0), group(vec![cx(1, 0)]), group(vec![cx(1, 0)])]);

    assert_eq!(CancelDoubleCx.run(&mut tree, &config), 2);
    assert_eq!(tree.children.len(), 1);
    assert!(tree.children.iter().all(|c| !c.is_empty_composite()));
}

#[test]
fn test_empty_composite_does_not_hide_pair() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![cx(1, 0), group(vec![]), cx(1, 0)]);
    assert_eq!(CancelDoubleCx.run(&mut tree, &config), 2);
    assert!(tree.children.is_empty());
}

#[test]
fn test_single_composite_child() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![group(vec![cx(2, 1), cx(2, 1)])]);
    assert_eq!(CancelDoubleCx.run(&mut tree, &config), 2);
    assert!(tree.children.is_empty());
}

#[test]
fn test_cascade_collapses_nested_pairs() {
    let config = SynthesisConfig::default();
    // cx(1,0) cx(2,0) cx(2,0) cx(1,0): the inner pair hides the outer one.
    let mut tree = root(vec![
        cx(1, 0),
        group(vec![cx(2, 0)]),
        group(vec![group(vec![cx(2, 0)]), cx(1, 0)]),
        ry(0.5, 0),
    ]);

    let stats = Optimizer::new(config).run(&mut tree);
    assert_eq!(stats.cx_pairs_removed, 2);
    assert_eq!(stats.gates_before, 5);
    assert_eq!(stats.gates_after, 1);
    assert_eq!(names(&tree), vec!["ry"]);
    assert!(stats.cx_passes >= 1);
}

#[test]
fn test_optimizer_reaches_fixpoint() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![
        group(vec![ry(0.0, 0), cx(1, 0)]),
        group(vec![rz(1e-14, 0), cx(2, 0)]),
        group(vec![cx(2, 0), rz(0.0, 1)]),
        group(vec![cx(1, 0), ry(0.7, 0)]),
    ]);

    let stats = Optimizer::new(config).run(&mut tree);
    assert_eq!(stats.zero_rotations_removed, 3);
    assert_eq!(stats.cx_pairs_removed, 2);
    assert_eq!(names(&tree), vec!["ry"]);
    assert!(!has_adjacent_cx_pair(&tree));
    assert!((stats.reduction_ratio() - 7.0 / 8.0).abs() < 1e-12);
}

#[test]
fn test_optimizer_is_idempotent() {
    let config = SynthesisConfig::default();
    let mut tree = root(vec![
        ry(0.3, 0),
        group(vec![cx(1, 0), rz(0.0, 0)]),
        group(vec![cx(1, 0), ry(0.2, 1), cx(0, 1)]),
        cx(0, 1),
    ]);

    let optimizer = Optimizer::new(config);
    optimizer.run(&mut tree);
    let once = tree.clone();

    let stats = optimizer.run(&mut tree);
    assert_eq!(tree, once);
    assert_eq!(stats.zero_rotations_removed, 0);
    assert_eq!(stats.cx_pairs_removed, 0);
    assert_eq!(stats.cx_passes, 1);
}

#[test]
fn test_empty_tree() {
    let mut tree = root(vec![]);
    let stats = Optimizer::default().run(&mut tree);
    assert_eq!(stats, OptimizationStats { cx_passes: 1, ..Default::default() });
    assert_eq!(stats.reduction_ratio(), 0.0);
}

#[test]
fn test_pass_names() {
    assert_eq!(RemoveZeroRotations::new().name(), "RemoveZeroRotations");
    assert_eq!(CancelDoubleCx::new().name(), "CancelDoubleCx");
}
