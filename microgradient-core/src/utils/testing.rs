use crate::error::MicroGradError;
use crate::graph::Graph;
use crate::value::Value;

/// Checks that a node's forward value and gradient are close to the expected ones.
/// Panics with both numbers on mismatch.
pub fn check_value_near(
    actual: &Value<'_>,
    expected_value: f64,
    expected_grad: f64,
    tolerance: f64,
) {
    let value = actual.value();
    let grad = actual.grad();
    if (value - expected_value).abs() > tolerance {
        panic!(
            "Value mismatch for node {}: actual={:?}, expected={:?}, tolerance={:?}",
            actual.id(),
            value,
            expected_value,
            tolerance
        );
    }
    if (grad - expected_grad).abs() > tolerance {
        panic!(
            "Gradient mismatch for node {}: actual={:?}, expected={:?}, tolerance={:?}",
            actual.id(),
            grad,
            expected_grad,
            tolerance
        );
    }
}

/// Central finite difference of a single-input function, evaluated on fresh graphs.
pub fn numerical_derivative<F>(func: F, x: f64, epsilon: f64) -> Result<f64, MicroGradError>
where
    F: for<'g> Fn(&'g Graph, Value<'g>) -> Result<Value<'g>, MicroGradError>,
{
    let eval = |input: f64| -> Result<f64, MicroGradError> {
        let graph = Graph::new();
        let leaf = graph.leaf(input);
        Ok(func(&graph, leaf)?.value())
    };
    Ok((eval(x + epsilon)? - eval(x - epsilon)?) / (2.0 * epsilon))
}
