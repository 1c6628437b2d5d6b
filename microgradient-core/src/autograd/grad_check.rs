use crate::error::MicroGradError;
use crate::graph::Graph;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicroGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MicroGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Invalid gradient check configuration: {0}")]
    InvalidConfig(String),
}

/// Tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Step used for the central difference.
    pub epsilon: f64,
    /// Absolute difference accepted between analytical and numerical gradients.
    pub abs_tolerance: f64,
    /// Relative difference accepted when the absolute check fails.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-4,
            rel_tolerance: 1e-4,
        }
    }
}

/// Builds a fresh graph with one leaf per input and evaluates `func` on it.
fn evaluate<F>(func: &F, inputs: &[f64]) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, MicroGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.value())
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and
/// returns the scalar output. The analytical gradient of every input is taken
/// from one backward pass; the numerical one is the central difference
/// \( \frac{f(x + \varepsilon) - f(x - \varepsilon)}{2\varepsilon} \).
///
/// # Errors
/// Returns the first mismatch or non-finite gradient found, or the engine
/// error raised by `func`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    config: &GradCheckConfig,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, MicroGradError>,
{
    if !(config.epsilon > 0.0 && config.epsilon.is_finite()) {
        return Err(GradCheckError::InvalidConfig(format!(
            "epsilon must be positive and finite, got {}",
            config.epsilon
        )));
    }

    // --- Analytical gradients ---
    let analytical_grads: Vec<f64> = {
        let graph = Graph::new();
        let leaves: Vec<Value<'_>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
        let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
        output
            .backward()
            .map_err(GradCheckError::BackwardPassError)?;
        leaves.iter().map(|leaf| leaf.grad()).collect()
    };
    debug!(
        "check_grad: {} inputs, analytical gradients {:?}",
        inputs.len(),
        analytical_grads
    );

    // --- Numerical gradients ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let mut perturbed = inputs.to_vec();

        perturbed[i] = inputs[i] + config.epsilon;
        let loss_plus = evaluate(&func, &perturbed)?;
        perturbed[i] = inputs[i] - config.epsilon;
        let loss_minus = evaluate(&func, &perturbed)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
