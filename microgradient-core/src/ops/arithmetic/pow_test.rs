use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use crate::graph::Graph;
use crate::node::OpTag;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward_and_backward() -> Result<(), MicroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let c = pow_op(a, 3)?;
    assert_relative_eq!(c.value(), 8.0, epsilon = 1e-12);
    assert_eq!(c.op_tag(), OpTag::Pow(3.0));
    assert_eq!(c.op_tag().to_string(), "**3");

    c.backward()?;
    // 3 * 2^2
    assert_relative_eq!(a.grad(), 12.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_zero_exponent() -> Result<(), MicroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(5.0);
    let c = pow_op(a, 0)?;
    assert_eq!(c.value(), 1.0);
    c.backward()?;
    assert_eq!(a.grad(), 0.0);
    Ok(())
}

#[test]
fn test_pow_negative_and_fractional() -> Result<(), MicroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(4.0);
    let inv = pow_op(a, -1)?;
    assert_relative_eq!(inv.value(), 0.25, epsilon = 1e-12);
    inv.backward()?;
    // -1 * 4^-2
    assert_relative_eq!(a.grad(), -0.0625, epsilon = 1e-12);

    graph.zero_grad();
    let root = pow_op(a, 0.5_f32)?;
    assert_relative_eq!(root.value(), 2.0, epsilon = 1e-12);
    root.backward()?;
    assert_relative_eq!(a.grad(), 0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_integer_exponent_on_negative_base() -> Result<(), MicroGradError> {
    let graph = Graph::new();
    let a = graph.leaf(-3.0);
    let c = pow_op(a, 2)?;
    assert_relative_eq!(c.value(), 9.0, epsilon = 1e-12);
    c.backward()?;
    assert_relative_eq!(a.grad(), -6.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_rejects_node_exponent() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    let p = graph.leaf(3.0);
    let before = graph.len();
    match pow_op(a, p) {
        Err(MicroGradError::InvalidArgument { operation, .. }) => assert_eq!(operation, "pow_op"),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    // nothing was appended to the graph
    assert_eq!(graph.len(), before);
}

#[test]
fn test_pow_rejects_non_finite_exponent() {
    let graph = Graph::new();
    let a = graph.leaf(2.0);
    assert!(matches!(
        pow_op(a, f64::NAN),
        Err(MicroGradError::InvalidArgument { .. })
    ));
    assert!(matches!(
        pow_op(a, f64::INFINITY),
        Err(MicroGradError::InvalidArgument { .. })
    ));
}

#[test]
fn test_pow_grad_check() {
    let result = check_grad(
        |_, inputs| pow_op(inputs[0], 2.5),
        &[1.7],
        &GradCheckConfig::default(),
    );
    assert!(result.is_ok(), "pow grad check failed: {:?}", result.err());
}
