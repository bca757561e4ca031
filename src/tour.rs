use crate::graph::Graph;
use crate::types::{Cost, VertexId};

/// A solved inspection tour: the minimum total cost and the closed vertex
/// sequence realizing it. The sequence is empty for an edgeless graph;
/// otherwise its first and last vertices coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub total_cost: Cost,
    pub vertices: Vec<VertexId>,
}

impl Tour {
    /// Number of edge traversals in the tour.
    pub fn leg_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_closed(&self) -> bool {
        self.vertices.first() == self.vertices.last()
    }

    /// Resolves the vertex sequence back to the caller's labels.
    pub fn labels<'a>(&self, graph: &'a Graph) -> Vec<&'a str> {
        self.vertices.iter().map(|&v| graph.label(v)).collect()
    }

    /// The tour as a printable `A -> B -> C -> A` string.
    pub fn display(&self, graph: &Graph) -> String {
        self.labels(graph).join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_display_round_trip_through_the_graph() {
        let g = Graph::from_edges([("A", "B", 1.0), ("B", "A", 2.0)]).unwrap();
        let tour = Tour {
            total_cost: 3.0,
            vertices: vec![
                g.vertex("A").unwrap(),
                g.vertex("B").unwrap(),
                g.vertex("A").unwrap(),
            ],
        };
        assert_eq!(tour.leg_count(), 2);
        assert!(tour.is_closed());
        assert_eq!(tour.labels(&g), vec!["A", "B", "A"]);
        assert_eq!(tour.display(&g), "A -> B -> A");
    }

    #[test]
    fn empty_tour_has_no_legs() {
        let tour = Tour { total_cost: 0.0, vertices: Vec::new() };
        assert_eq!(tour.leg_count(), 0);
    }
}
