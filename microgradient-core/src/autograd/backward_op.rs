use crate::node::{NodeId, OpTag};
use std::fmt::Debug;

/// Defines the interface for the backward pass of a differentiable scalar operation.
///
/// Every non-leaf node stores the operation that produced it. During
/// `backward()` the engine asks that operation for the increment it contributes
/// to each of its inputs, given the gradient that has reached the output.
pub trait BackwardOp: Debug {
    /// Computes the gradient increments for the operation's inputs.
    ///
    /// With \( z = f(x_1, ..., x_n) \) this returns
    /// \( \frac{dL}{dz} \cdot \frac{\partial z}{\partial x_i} \) for every input \( i \).
    ///
    /// # Arguments
    /// * `output_value`: forward value \( z \) of the node that owns this operation.
    /// * `grad_output`: accumulated \( \frac{dL}{dz} \).
    /// * `input_values`: forward values of the inputs, in the order returned by `inputs()`.
    ///
    /// # Returns
    /// One increment per input, in the same order as `inputs()`.
    fn backward(&self, output_value: f64, grad_output: f64, input_values: &[f64]) -> Vec<f64>;

    /// Ids of the nodes consumed by the forward computation, in operand order.
    ///
    /// The same id appears twice when a node is used twice (`a + a`); each
    /// occurrence receives its own increment.
    fn inputs(&self) -> Vec<NodeId>;
}

/// The operation that produced a node, with the operand ids and constants its
/// local derivative needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Input node; propagates nothing.
    Leaf,
    Add(NodeId, NodeId),
    Mul(NodeId, NodeId),
    /// `base ** exponent` with a constant exponent.
    Pow { base: NodeId, exponent: f64 },
    Exp(NodeId),
    Tanh(NodeId),
    Relu(NodeId),
}

impl Op {
    /// Diagnostic tag for this operation.
    pub fn tag(&self) -> OpTag {
        match self {
            Op::Leaf => OpTag::Leaf,
            Op::Add(..) => OpTag::Add,
            Op::Mul(..) => OpTag::Mul,
            Op::Pow { exponent, .. } => OpTag::Pow(*exponent),
            Op::Exp(_) => OpTag::Exp,
            Op::Tanh(_) => OpTag::Tanh,
            Op::Relu(_) => OpTag::Relu,
        }
    }
}

impl BackwardOp for Op {
    fn backward(&self, output_value: f64, grad_output: f64, input_values: &[f64]) -> Vec<f64> {
        match *self {
            Op::Leaf => Vec::new(),
            // d(a + b)/da = d(a + b)/db = 1
            Op::Add(..) => vec![grad_output, grad_output],
            // d(a * b)/da = b, d(a * b)/db = a
            Op::Mul(..) => vec![
                input_values[1] * grad_output,
                input_values[0] * grad_output,
            ],
            Op::Pow { exponent, .. } => {
                let base = input_values[0];
                vec![exponent * base.powf(exponent - 1.0) * grad_output]
            }
            // d(e^a)/da = e^a, which is the output itself
            Op::Exp(_) => vec![output_value * grad_output],
            Op::Tanh(_) => vec![(1.0 - output_value * output_value) * grad_output],
            Op::Relu(_) => {
                let local = if output_value > 0.0 { 1.0 } else { 0.0 };
                vec![local * grad_output]
            }
        }
    }

    fn inputs(&self) -> Vec<NodeId> {
        match *self {
            Op::Leaf => Vec::new(),
            Op::Add(a, b) | Op::Mul(a, b) => vec![a, b],
            Op::Pow { base, .. } => vec![base],
            Op::Exp(a) | Op::Tanh(a) | Op::Relu(a) => vec![a],
        }
    }
}
