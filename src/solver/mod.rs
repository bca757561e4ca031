mod augment;
mod connectivity;
mod euler;
mod matching;
mod shortest_path;

pub use augment::augment;
pub use connectivity::is_connected_ignoring_isolated;
pub use euler::eulerian_circuit;
pub use matching::{Matching, minimum_weight_matching};
pub use shortest_path::{PairTable, ShortestPaths, dijkstra};


use log::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::tour::Tour;

/// Solves the undirected route inspection problem on `graph`: the returned
/// tour is a minimum-cost closed walk using every edge at least once.
///
/// The graph is read-only for the duration of the call and no state is
/// kept between calls, so repeated solves over the same graph are
/// independent and interleave safely.
///
/// Fails with [`Error::Disconnected`] when the positive-degree vertices do
/// not form a single component. [`Error::Unreachable`] and
/// [`Error::OddVertexParity`] indicate internal defects rather than bad
/// input and abort the call the same way.
pub fn solve(graph: &Graph) -> Result<Tour> {
    if !is_connected_ignoring_isolated(graph) {
        return Err(Error::Disconnected);
    }

    let base_cost = graph.total_weight();
    let odd = graph.odd_vertices();
    debug!(
        "solving: {} vertices, {} edges, {} odd, base cost {}",
        graph.vertex_count(),
        graph.edge_count(),
        odd.len(),
        base_cost
    );

    // Already Eulerian: every edge is traversed exactly once.
    if odd.is_empty() {
        return Ok(Tour {
            total_cost: base_cost,
            vertices: eulerian_circuit(graph),
        });
    }

    let table = PairTable::build(graph, &odd)?;
    let matching = minimum_weight_matching(&table.dist)?;
    debug!(
        "matched {} pairs, added cost {}",
        matching.pairs.len(),
        matching.added_cost
    );

    let augmented = augment(graph, &table, &matching);
    let circuit = eulerian_circuit(&augmented);

    Ok(Tour {
        total_cost: base_cost + matching.added_cost,
        vertices: circuit,
    })
}
