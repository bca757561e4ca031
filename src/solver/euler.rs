use crate::graph::Graph;
use crate::types::VertexId;

/// Hierholzer's algorithm with an explicit vertex stack, so circuit length
/// is bounded by heap memory rather than call-stack depth.
///
/// Precondition: every vertex has even degree (the augmentation step
/// guarantees this). Each vertex keeps a cursor into its adjacency list and
/// edges are consumed by id, which is what lets parallel edges be walked
/// individually. Adjacency lists are scanned in edge insertion order and
/// the start vertex is the lowest-indexed one with positive degree, so the
/// resulting circuit is reproducible for identical graphs.
///
/// The returned sequence is closed (first vertex equals last) with length
/// `edge_count + 1`, or empty when the graph has no edges.
pub fn eulerian_circuit(graph: &Graph) -> Vec<VertexId> {
    let start = match graph.vertices().find(|&v| graph.degree(v) > 0) {
        Some(v) => v,
        None => return Vec::new(),
    };

    let mut cursor = vec![0usize; graph.vertex_count()];
    let mut used = vec![false; graph.edge_count()];
    let mut stack = vec![start];
    let mut circuit = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&u) = stack.last() {
        let neighbors = graph.neighbors(u);
        let mut advanced = false;
        while cursor[u.index()] < neighbors.len() {
            let adjacency = neighbors[cursor[u.index()]];
            cursor[u.index()] += 1;
            if !used[adjacency.edge as usize] {
                // Consuming the id covers both directions of the edge.
                used[adjacency.edge as usize] = true;
                stack.push(adjacency.to);
                advanced = true;
                break;
            }
        }
        if !advanced {
            circuit.push(u);
            stack.pop();
        }
    }

    circuit.reverse();
    circuit
}
