use crate::graph::Graph;
use crate::solver::matching::Matching;
use crate::solver::shortest_path::PairTable;

/// Builds the augmented multigraph: a copy of the original plus one
/// duplicate edge per hop of every matched shortest path. Each duplicate
/// takes the minimum weight among the parallel edges already joining that
/// hop, so the duplication cost equals the matched path distance. The
/// original graph is never touched.
pub fn augment(graph: &Graph, table: &PairTable, matching: &Matching) -> Graph {
    let mut augmented = graph.clone();
    for &(i, j) in &matching.pairs {
        let path = table.paths.get(i, j);
        for hop in path.windows(2) {
            let (a, b) = (hop[0], hop[1]);
            let weight = graph
                .min_weight_between(a, b)
                .expect("matched shortest paths only use existing edges");
            augmented.push_edge(a, b, weight);
        }
    }
    augmented
}
