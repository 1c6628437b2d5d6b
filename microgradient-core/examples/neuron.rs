//! Forward and backward pass through a single tanh neuron, printing every
//! node reachable from the output.

use microgradient_core::{Graph, MicroGradError};

fn main() -> Result<(), MicroGradError> {
    let graph = Graph::new();

    let x1 = graph.leaf_with_label(2.0, "x1");
    let x2 = graph.leaf_with_label(0.0, "x2");
    let w1 = graph.leaf_with_label(-3.0, "w1");
    let w2 = graph.leaf_with_label(1.0, "w2");
    let b = graph.leaf_with_label(6.881_373_587_019_543, "b");

    let x1w1 = x1 * w1;
    x1w1.set_label("x1*w1");
    let x2w2 = x2 * w2;
    x2w2.set_label("x2*w2");
    let n = x1w1 + x2w2 + b;
    n.set_label("n");
    let o = n.tanh();
    o.set_label("o");

    o.backward()?;

    let traced = o.trace()?;
    for node in &traced.nodes {
        println!(
            "{:>3} {:<6} {:<5} {}",
            node.id().index(),
            node.label().unwrap_or_default(),
            node.op_tag().to_string(),
            node
        );
    }
    for (from, to) in &traced.edges {
        println!("{} -> {}", from.id(), to.id());
    }
    Ok(())
}
