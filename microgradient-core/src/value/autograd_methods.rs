use crate::autograd::graph::{topological_sort, trace};
use crate::autograd::BackwardOp;
use crate::error::MicroGradError;
use crate::value::Value;
use log::{debug, warn};

/// Nodes and edges reachable from a root, for visualization consumers.
///
/// Both lists are sorted by node id. Each edge `(operand, consumer)` appears
/// once even when the consumer uses the operand several times.
#[derive(Debug, Clone)]
pub struct GraphTrace<'g> {
    pub nodes: Vec<Value<'g>>,
    pub edges: Vec<(Value<'g>, Value<'g>)>,
}

impl<'g> Value<'g> {
    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0`, then visits every node reachable
    /// through operands in reverse topological order, adding each operation's
    /// local-derivative contribution to its operands. When a node feeds several
    /// consumers, all contributions are summed.
    ///
    /// Existing gradients are not cleared: calling this twice without
    /// [`Graph::zero_grad`](crate::graph::Graph::zero_grad) accumulates onto the
    /// previous results.
    ///
    /// # Errors
    /// Cannot fail for a handle obtained from the public API. The `Result` is
    /// kept for uniformity with the rest of the engine.
    pub fn backward(&self) -> Result<(), MicroGradError> {
        let mut nodes = self.graph.write_nodes();
        let order = topological_sort(&nodes, self.id)?;
        debug!(
            "backward: root {} reaches {} nodes (arena holds {})",
            self.id,
            order.len(),
            nodes.len()
        );

        let stale = nodes[self.id.0].grad;
        if stale != 0.0 {
            warn!(
                "backward: root {} already has gradient {}; upstream gradients will accumulate",
                self.id, stale
            );
        }
        nodes[self.id.0].grad = 1.0;

        for &node_id in order.iter().rev() {
            let (op, output_value, grad_output) = {
                let node = &nodes[node_id.0];
                (node.op, node.value, node.grad)
            };
            let inputs = op.inputs();
            if inputs.is_empty() {
                continue;
            }
            let input_values: Vec<f64> = inputs.iter().map(|id| nodes[id.0].value).collect();
            let increments = op.backward(output_value, grad_output, &input_values);

            for (input_id, increment) in inputs.into_iter().zip(increments) {
                nodes[input_id.0].grad += increment;
            }
        }

        Ok(())
    }

    /// Resets this node's gradient to `0.0`.
    pub fn zero_grad(&self) {
        self.graph.write_nodes()[self.id.0].grad = 0.0;
    }

    /// Nodes reachable from this one, each placed after all of its operands.
    ///
    /// This is the order `backward()` walks in reverse.
    pub fn topological_order(&self) -> Result<Vec<Value<'g>>, MicroGradError> {
        let order = topological_sort(&self.graph.read_nodes(), self.id)?;
        Ok(order
            .into_iter()
            .map(|id| Value { graph: self.graph, id })
            .collect())
    }

    /// Collects every node and edge reachable from this node.
    pub fn trace(&self) -> Result<GraphTrace<'g>, MicroGradError> {
        let (node_ids, edge_ids) = trace(&self.graph.read_nodes(), self.id)?;
        let graph = self.graph;
        Ok(GraphTrace {
            nodes: node_ids.into_iter().map(|id| Value { graph, id }).collect(),
            edges: edge_ids
                .into_iter()
                .map(|(from, to)| (Value { graph, id: from }, Value { graph, id: to }))
                .collect(),
        })
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
