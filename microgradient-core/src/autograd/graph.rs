use crate::autograd::BackwardOp;
use crate::error::MicroGradError;
use crate::node::{NodeData, NodeId};
use log::trace;
use std::collections::{BTreeSet, HashSet};

/// Work item of the iterative depth-first traversal.
enum Visit {
    /// Node reached for the first time: schedule its operands.
    Enter(NodeId),
    /// All operands have been emitted: emit the node.
    Exit(NodeId),
}

fn check_root(nodes: &[NodeData], root: NodeId) -> Result<(), MicroGradError> {
    if root.0 >= nodes.len() {
        return Err(MicroGradError::NodeNotFound {
            id: root,
            len: nodes.len(),
        });
    }
    Ok(())
}

/// Builds a topological ordering of the nodes reachable from `root`.
///
/// Post-order depth-first traversal driven by an explicit stack, so arbitrarily
/// deep chains cannot exhaust the call stack. The visited set is keyed by
/// `NodeId`, which makes each node appear exactly once no matter how many
/// paths lead to it. Every node comes after all of its operands and `root` is
/// always last.
pub(crate) fn topological_sort(
    nodes: &[NodeData],
    root: NodeId,
) -> Result<Vec<NodeId>, MicroGradError> {
    check_root(nodes, root)?;

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<NodeId> = Vec::new();
    let mut stack = vec![Visit::Enter(root)];

    while let Some(item) = stack.pop() {
        match item {
            Visit::Enter(id) => {
                if !visited.insert(id) {
                    continue;
                }
                trace!("[topological_sort] visiting {}", id);
                stack.push(Visit::Exit(id));
                for input in nodes[id.0].op.inputs() {
                    if !visited.contains(&input) {
                        stack.push(Visit::Enter(input));
                    }
                }
            }
            Visit::Exit(id) => sorted.push(id),
        }
    }

    Ok(sorted)
}

/// Collects the nodes reachable from `root` and the `(operand, consumer)` edges
/// between them, both sorted by id.
pub(crate) fn trace(
    nodes: &[NodeData],
    root: NodeId,
) -> Result<(Vec<NodeId>, Vec<(NodeId, NodeId)>), MicroGradError> {
    check_root(nodes, root)?;

    let mut seen: BTreeSet<NodeId> = BTreeSet::new();
    let mut edges: BTreeSet<(NodeId, NodeId)> = BTreeSet::new();
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        for input in nodes[id.0].op.inputs() {
            edges.insert((input, id));
            if !seen.contains(&input) {
                stack.push(input);
            }
        }
    }

    Ok((seen.into_iter().collect(), edges.into_iter().collect()))
}
