/*!
# Graph Operations

Small getter/setter traits every graph representation implements. Algorithms are written against
these traits (mostly [`WeightedAdjacencyList`]) instead of concrete types.
*/

use std::ops::Range;

use num::Signed;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all nodes.
    /// In contrast to borrowing iterators, the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weighted out-neighborhoods & edges
pub trait WeightedAdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    type Weight: Weight;

    /// Returns an iterator over the out-arcs `(v, w)` of a given vertex in insertion order.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Self::Weight)> + '_;

    /// Returns the number of outgoing arcs of `u` (parallel arcs counted individually)
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the out-neighbors of a given vertex, ignoring weights
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge::new(u, v, w))
    }

    /// Returns an iterator over all edges, grouped by their tail in increasing order
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u))
    }

    /// Returns the smallest weight of any edge, or `None` if there are no edges
    fn min_weight(&self) -> Option<Self::Weight> {
        self.weighted_edges().map(|e| e.weight).min()
    }

    /// Returns *true* if no edge has a negative weight
    fn has_nonnegative_weights(&self) -> bool {
        self.min_weight().is_none_or(|w| !w.is_negative())
    }
}

/// Provides a constructor for a graph with `n` nodes and no edges
pub trait GraphNew {
    /// Creates an empty graph with `n` singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert weighted edges
pub trait WeightedEdgeEditing<W: Weight>: GraphNodeOrder {
    /// Adds the directed edge `(u, v)` with weight `w`. Parallel edges are kept.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, w: W);

    /// Adds all edges in the collection
    fn add_edges<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<W>>,
    {
        for e in edges {
            let WeightedEdge { from, to, weight } = e.into();
            self.add_edge(from, to, weight);
        }
    }

    /// Adds the directed edge `(u, v)` after checking that both endpoints exist
    fn try_add_edge(&mut self, u: Node, v: Node, w: W) -> Result<(), GraphError> {
        GraphError::check_node(u, self.number_of_nodes())?;
        GraphError::check_node(v, self.number_of_nodes())?;
        self.add_edge(u, v, w);
        Ok(())
    }
}

/// Construction of a graph from a node count and an edge list
pub trait GraphFromEdges<W: Weight>: GraphNew + WeightedEdgeEditing<W> + Sized {
    /// Creates a graph with `n` nodes and the given edges
    /// ** Panics if an endpoint is `>= n` **
    fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<W>>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    /// Creates a graph with `n` nodes and the given edges, rejecting out-of-range endpoints
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<W>>,
    {
        let mut graph = Self::new(n);
        for e in edges {
            let WeightedEdge { from, to, weight } = e.into();
            graph.try_add_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

impl<G, W> GraphFromEdges<W> for G
where
    W: Weight,
    G: GraphNew + WeightedEdgeEditing<W>,
{
}
