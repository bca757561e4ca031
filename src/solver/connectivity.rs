use std::collections::VecDeque;

use crate::graph::Graph;

/// Checks whether every positive-degree vertex can reach every other one.
/// Degree-0 vertices are unused nodes and do not count against the check.
/// An edgeless graph is trivially connected.
pub fn is_connected_ignoring_isolated(graph: &Graph) -> bool {
    let start = match graph.vertices().find(|&v| graph.degree(v) > 0) {
        Some(v) => v,
        None => return true,
    };

    let mut seen = vec![false; graph.vertex_count()];
    seen[start.index()] = true;
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for adjacency in graph.neighbors(u) {
            if !seen[adjacency.to.index()] {
                seen[adjacency.to.index()] = true;
                queue.push_back(adjacency.to);
            }
        }
    }

    graph
        .vertices()
        .all(|v| graph.degree(v) == 0 || seen[v.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_is_connected() {
        assert!(is_connected_ignoring_isolated(&Graph::new()));
    }

    #[test]
    fn path_graph_is_connected() {
        let g = Graph::from_edges([("A", "B", 1.0), ("B", "C", 1.0)]).unwrap();
        assert!(is_connected_ignoring_isolated(&g));
    }

    #[test]
    fn two_components_are_not_connected() {
        let g = Graph::from_edges([("A", "B", 1.0), ("C", "D", 1.0)]).unwrap();
        assert!(!is_connected_ignoring_isolated(&g));
    }

    #[test]
    fn isolated_vertex_is_ignored() {
        let mut g = Graph::from_edges([("A", "B", 1.0)]).unwrap();
        g.add_vertex("C");
        assert!(is_connected_ignoring_isolated(&g));
    }

    #[test]
    fn vertex_only_graph_is_connected() {
        let mut g = Graph::new();
        g.add_vertex("A");
        g.add_vertex("B");
        assert!(is_connected_ignoring_isolated(&g));
    }
}
