use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{VertexId, Weight};
use crate::utils::Matrix2;

/// Single-source shortest-path result: tentative distance and predecessor
/// per vertex, indexed densely. Unreachable vertices stay `None`.
#[derive(Debug)]
pub struct ShortestPaths {
    source: VertexId,
    dist: Vec<Option<Weight>>,
    prev: Vec<Option<VertexId>>,
}

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// distance first. Equal distances fall back to the vertex index, keeping
/// traversal order reproducible.
#[derive(Copy, Clone, Debug, PartialEq)]
struct QueueEntry {
    dist: Weight,
    vertex: VertexId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra over non-negative weights. Weight validity is established at
/// graph construction, so no checks are repeated here.
pub fn dijkstra(graph: &Graph, source: VertexId) -> ShortestPaths {
    let n = graph.vertex_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut prev: Vec<Option<VertexId>> = vec![None; n];

    dist[source.index()] = Some(0.0);
    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry { dist: 0.0, vertex: source });

    while let Some(QueueEntry { dist: d, vertex: u }) = heap.pop() {
        // Stale entry: a shorter path to `u` was already settled.
        match dist[u.index()] {
            Some(best) if d > best => continue,
            _ => {}
        }
        for adjacency in graph.neighbors(u) {
            let next = d + adjacency.weight;
            let better = match dist[adjacency.to.index()] {
                Some(current) => next < current,
                None => true,
            };
            if better {
                dist[adjacency.to.index()] = Some(next);
                prev[adjacency.to.index()] = Some(u);
                heap.push(QueueEntry { dist: next, vertex: adjacency.to });
            }
        }
    }

    ShortestPaths { source, dist, prev }
}

impl ShortestPaths {
    #[inline(always)]
    pub fn source(&self) -> VertexId {
        self.source
    }

    #[inline(always)]
    pub fn distance_to(&self, target: VertexId) -> Option<Weight> {
        self.dist[target.index()]
    }

    /// Reconstructs the path from the source to `target` by walking the
    /// predecessor chain backward, then reversing. `None` if unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.dist[target.index()]?;
        let mut path = vec![target];
        let mut cursor = target;
        while let Some(p) = self.prev[cursor.index()] {
            path.push(p);
            cursor = p;
        }
        path.reverse();
        debug_assert_eq!(path[0], self.source);
        Some(path)
    }
}

/// Pairwise shortest distances and paths among the odd-degree vertices.
/// Built once per solve and consumed by matching and augmentation.
pub struct PairTable {
    /// Dense copy of the odd vertex set, defining row/column order.
    pub vertices: Vec<VertexId>,
    pub dist: Matrix2<Weight>,
    /// `paths.get(i, j)` is the vertex sequence from `vertices[i]` to
    /// `vertices[j]`, endpoints included.
    pub paths: Matrix2<Vec<VertexId>>,
}

impl PairTable {
    /// Runs Dijkstra once per odd vertex and fills one row per run. Every
    /// pair must be reachable once the connectivity check has passed, so a
    /// missing distance is reported as an internal defect.
    pub fn build(graph: &Graph, odd: &[VertexId]) -> Result<Self> {
        let k = odd.len();
        let mut dist = Matrix2::new(k, k, 0.0);
        let mut paths = Matrix2::new(k, k, Vec::new());

        for (i, &source) in odd.iter().enumerate() {
            let sp = dijkstra(graph, source);
            for (j, &target) in odd.iter().enumerate() {
                if i == j {
                    *paths.get_mut(i, j) = vec![source];
                    continue;
                }
                let d = sp.distance_to(target).ok_or_else(|| Error::Unreachable {
                    origin: graph.label(source).to_string(),
                    target: graph.label(target).to_string(),
                })?;
                *dist.get_mut(i, j) = d;
                *paths.get_mut(i, j) = sp
                    .path_to(target)
                    .expect("path exists whenever a distance exists");
            }
        }

        Ok(PairTable { vertices: odd.to_vec(), dist, paths })
    }
}
