use super::*;
use crate::graph::Graph;
use crate::node::OpTag;

#[test]
fn test_add_forward() -> Result<(), MicroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(-3.5);
    let c = add_op(a, b)?;
    assert_eq!(c.value(), -1.5);
    assert_eq!(c.op_tag(), OpTag::Add);
    assert_eq!(c.operands(), vec![a, b]);
    // operands are left untouched
    assert_eq!(a.value(), 2.0);
    assert_eq!(b.grad(), 0.0);
    Ok(())
}

#[test]
fn test_add_backward() -> Result<(), MicroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(4.0);
    let b = graph.leaf(7.0);
    let c = add_op(a, b)?;
    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_same_node_twice() -> Result<(), MicroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(3.0);
    let c = add_op(a, a)?;
    assert_eq!(c.value(), 6.0);
    assert_eq!(c.operands(), vec![a]);
    c.backward()?;
    assert_eq!(a.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_constant_is_promoted() -> Result<(), MicroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(1.5);
    let c = add_op(a, 2)?;
    assert_eq!(c.value(), 3.5);
    assert_eq!(graph.len(), 3);

    let promoted = c.operands()[1];
    assert!(promoted.is_leaf());
    assert_eq!(promoted.value(), 2.0);

    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(promoted.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_graph_mismatch() {
    let g1 = Graph::new();
    let g2 = Graph::new();
    let a = g1.leaf(1.0);
    let b = g2.leaf(2.0);
    assert_eq!(
        add_op(a, b).err(),
        Some(MicroGradError::GraphMismatch { operation: "add_op".to_string() })
    );
    assert_eq!(g1.len(), 1);
}
