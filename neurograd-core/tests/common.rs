use neurograd_core::{Graph, Node};

// Helper to create one leaf per value.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn leaves<'g>(graph: &'g Graph, values: &[f64]) -> Vec<Node<'g>> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Every node reachable from `root`, with its current gradient, in topological order.
#[allow(dead_code)]
pub(crate) fn reachable_grads(root: &Node<'_>) -> Vec<f64> {
    root.topological_order()
        .expect("root belongs to its graph")
        .iter()
        .map(|n| n.grad())
        .collect()
}
