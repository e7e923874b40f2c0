//! Weighted Undirected Graphs: the Witness 1-Skeleton
//!
//! A lazy witness complex is fully determined by its 1-skeleton, so the
//! edge builder's entire output is an edge-weighted graph on the
//! landmark-local vertices `0..n`. Downstream expansion stages consume
//! this graph to enumerate higher simplices; this crate only produces it.

use std::collections::BTreeMap;

/// Undirected, edge-weighted graph on `n` vertices.
///
/// Vertices are landmark-local indices. Edges are stored once under the
/// normalized `(min, max)` key; queries accept either endpoint order.
/// Insertion overwrites any existing weight for the pair.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    vertex_count: usize,
    // Keyed by (a, b) with a < b; BTreeMap keeps edge iteration ordered.
    edges: BTreeMap<(usize, usize), f64>,
}

impl WeightedGraph {
    /// Create an empty graph on `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: BTreeMap::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert (or overwrite) the edge `{a, b}` with the given weight.
    ///
    /// Self-loops are ignored; witness edges only ever connect distinct
    /// landmarks.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) {
        if a == b {
            return;
        }
        self.edges.insert(Self::key(a, b), weight);
    }

    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        a != b && self.edges.contains_key(&Self::key(a, b))
    }

    /// Weight of the edge `{a, b}`, if present.
    pub fn weight(&self, a: usize, b: usize) -> Option<f64> {
        if a == b {
            return None;
        }
        self.edges.get(&Self::key(a, b)).copied()
    }

    /// Iterate over edges as `(a, b, weight)` with `a < b`, in
    /// lexicographic vertex order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.edges.iter().map(|(&(a, b), &w)| (a, b, w))
    }

    fn key(a: usize, b: usize) -> (usize, usize) {
        if a < b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_query_symmetric() {
        let mut graph = WeightedGraph::new(4);
        graph.add_edge(2, 0, 1.5);

        assert!(graph.contains_edge(0, 2));
        assert!(graph.contains_edge(2, 0));
        assert_eq!(graph.weight(0, 2), Some(1.5));
        assert_eq!(graph.weight(2, 0), Some(1.5));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_overwrite_keeps_single_edge() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(0, 1, 2.0);
        graph.add_edge(1, 0, 0.5);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight(0, 1), Some(0.5));
    }

    #[test]
    fn test_self_loops_ignored() {
        let mut graph = WeightedGraph::new(3);
        graph.add_edge(1, 1, 1.0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_edge(1, 1));
    }

    #[test]
    fn test_edges_iteration_ordered() {
        let mut graph = WeightedGraph::new(4);
        graph.add_edge(3, 1, 0.3);
        graph.add_edge(0, 2, 0.1);
        graph.add_edge(0, 1, 0.2);

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(0, 1, 0.2), (0, 2, 0.1), (1, 3, 0.3)]);
    }
}
