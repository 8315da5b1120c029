use super::{macros::*, *};

/// A directed weighted graph stored as one arc list per node.
///
/// ```
/// use wgraphs::prelude::*;
///
/// let graph = WeightedAdjArray::from_edges(3, [(0, 1, 4i64), (1, 2, -1), (0, 2, 5)]);
///
/// assert_eq!(graph.number_of_nodes(), 3);
/// assert_eq!(graph.number_of_edges(), 3);
/// assert_eq!(graph.weighted_neighbors_of(0).collect::<Vec<_>>(), vec![(1, 4), (2, 5)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WeightedAdjArray<W> {
    num_edges: NumEdges,
    nbs: Vec<Vec<(Node, W)>>,
}

impl_common_graph_ops!(WeightedAdjArray<W> => nbs);

impl<W: Weight> WeightedAdjacencyList for WeightedAdjArray<W> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<W: Weight> WeightedEdgeEditing<W> for WeightedAdjArray<W> {
    fn add_edge(&mut self, u: Node, v: Node, w: W) {
        assert!(v < self.number_of_nodes());
        self.nbs[u as usize].push((v, w));
        self.num_edges += 1;
    }
}

impl<W: Weight> WeightedAdjArray<W> {
    /// Adds the edge in both directions `(u, v)` and `(v, u)`
    pub fn add_undirected_edge(&mut self, u: Node, v: Node, w: W) {
        self.add_edge(u, v, w);
        self.add_edge(v, u, w);
    }

    /// Returns a slice of the out-arcs of `u`
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[(Node, W)] {
        &self.nbs[u as usize]
    }

    /// Returns the graph with every edge reversed
    pub fn reversed(&self) -> Self {
        let mut rev = Self::new(self.number_of_nodes());
        for e in self.weighted_edges() {
            rev.add_edge(e.to, e.from, e.weight);
        }
        rev
    }

    /// Removes all edges while keeping the nodes
    pub fn clear_edges(&mut self) {
        self.nbs.iter_mut().for_each(|nbs| nbs.clear());
        self.num_edges = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn arcs_in_insertion_order() {
        let mut graph = WeightedAdjArray::new(4);
        graph.add_edge(0, 3, 2i32);
        graph.add_edge(0, 1, 7);
        graph.add_edge(0, 3, 1); // parallel arcs are kept
        graph.add_undirected_edge(1, 2, -3);

        assert_eq!(graph.number_of_edges(), 5);
        assert_eq!(graph.degree_of(0), 3);
        assert_eq!(graph.as_neighbors_slice(0), &[(3, 2), (1, 7), (3, 1)]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![1]);
        assert_eq!(graph.min_weight(), Some(-3));
        assert!(!graph.has_nonnegative_weights());

        let rev = graph.reversed();
        assert_eq!(rev.number_of_edges(), 5);
        assert_eq!(rev.as_neighbors_slice(3), &[(0, 2), (0, 1)]);

        graph.clear_edges();
        assert!(graph.is_singleton());
        assert_eq!(graph.number_of_nodes(), 4);
    }

    #[test]
    fn try_from_edges() {
        let ok = WeightedAdjArray::try_from_edges(3, [(0, 1, 1i64), (1, 2, 1)]);
        assert_eq!(ok.unwrap().number_of_edges(), 2);

        let err = WeightedAdjArray::try_from_edges(3, [(0, 1, 1i64), (1, 3, 1)]);
        assert_eq!(err, Err(GraphError::NodeOutOfRange { node: 3, n: 3 }));
    }
}

// ---------- Testing ----------

#[cfg(test)]
use crate::testing::test_graph_ops;

#[cfg(test)]
test_graph_ops!(
    test_weighted_adj_array,
    WeightedAdjArray<i64>,
    i64,
    (GraphNew, WeightedAdjacencyList, WeightedEdgeEditing)
);
