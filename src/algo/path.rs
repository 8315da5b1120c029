/*!
# Single-Source Shortest Paths

[`ShortestPathTree`] is the common result type of all single-source engines: a distance per node
(see [`Distance`]) together with the predecessor on a shortest path, which allows reconstructing
the path itself via [`ShortestPathTree::path_to`].

The [`ShortestPaths`] trait exposes the engines directly on every [`WeightedAdjacencyList`]:
```
use wgraphs::{prelude::*, algo::*};

let graph = WeightedAdjArray::from_edges(4, [(0, 1, 1i64), (1, 2, 1), (2, 3, 1), (0, 3, 10)]);

assert_eq!(graph.dijkstra_to(0, 3), Distance::Finite(3));
assert_eq!(graph.dijkstra(0).path_to(3), Some(vec![0, 1, 2, 3]));
assert_eq!(graph.bellman_ford(0).distance(3), Distance::Finite(3));
```
*/

use super::*;

/// Distances and predecessors computed from a single source.
///
/// Distances start out as [`Distance::Unreachable`] (the source at its start value) and only ever
/// decrease while an algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree<W> {
    source: Node,
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<OptionalNode>>,
}

impl<W: Weight> ShortestPathTree<W> {
    /// Creates a tree for `n` nodes where only `source` is reached, at distance zero
    pub fn new(n: NumNodes, source: Node) -> Self {
        Self::with_source_distance(n, source, W::zero())
    }

    /// Creates a tree for `n` nodes where only `source` is reached, at distance `d`
    pub fn with_source_distance(n: NumNodes, source: Node, d: W) -> Self {
        assert!(source < n);
        let mut distances = vec![Distance::Unreachable; n as usize];
        distances[source as usize] = Distance::Finite(d);
        Self {
            source,
            distances,
            predecessors: vec![None; n as usize],
        }
    }

    /// Returns the source node
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the number of nodes covered by the tree
    pub fn number_of_nodes(&self) -> NumNodes {
        self.distances.len() as NumNodes
    }

    /// Returns the distance of `v`
    /// ** Panics if `v >= n` **
    pub fn distance(&self, v: Node) -> Distance<W> {
        self.distances[v as usize]
    }

    /// Returns the distances of all nodes, indexed by node
    pub fn distances(&self) -> &[Distance<W>] {
        &self.distances
    }

    /// Returns the predecessor of `v` on a shortest path, if any.
    /// The source and unreached nodes have no predecessor.
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize].map(|p| p.get())
    }

    /// Returns *true* if `v` was reached (possibly with an unbounded distance)
    pub fn is_reachable(&self, v: Node) -> bool {
        !self.distance(v).is_unreachable()
    }

    /// Returns *true* if any node is affected by a negative cycle
    /// (or by a walk whose length drops below `W::MIN`)
    pub fn has_negative_cycle(&self) -> bool {
        self.distances.iter().any(|d| d.is_unbounded())
    }

    /// Returns the nodes affected by negative cycles in increasing order
    pub fn unbounded_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(v, d)| d.is_unbounded().then_some(v as Node))
    }

    /// Reconstructs a shortest path from the source to `v` (both included) by walking the
    /// predecessor chain backwards.
    ///
    /// Returns `None` if `v` is unreachable or its distance is unbounded.
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.distance(v).is_finite() {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.predecessor(u) {
            if u == self.source || path.len() > self.distances.len() {
                break;
            }
            path.push(p);
            u = p;
        }

        if u != self.source {
            return None;
        }

        path.reverse();
        Some(path)
    }

    /// Lowers the distance of `v` to `d` via predecessor `u`.
    pub(crate) fn update(&mut self, v: Node, d: W, u: Node) {
        debug_assert!(Distance::Finite(d) < self.distances[v as usize]);
        self.distances[v as usize] = Distance::Finite(d);
        self.predecessors[v as usize] = OptionalNode::new(u);
    }

    /// Marks `v` as affected by a negative cycle. Returns *true* if it was not marked before.
    pub(crate) fn mark_unbounded(&mut self, v: Node) -> bool {
        let was_unbounded = self.distances[v as usize].is_unbounded();
        self.distances[v as usize] = Distance::Unbounded;
        !was_unbounded
    }
}

/// Provides the shortest-path engines as methods on weighted graphs.
pub trait ShortestPaths: WeightedAdjacencyList {
    /// Runs Dijkstra's algorithm from `source` to all nodes.
    /// Requires non-negative weights; see [`ShortestPaths::try_dijkstra`].
    fn dijkstra(&self, source: Node) -> ShortestPathTree<Self::Weight> {
        Dijkstra::new(self, source).run()
    }

    /// Runs Dijkstra's algorithm from `source` and stops as soon as `target` is settled
    fn dijkstra_to(&self, source: Node, target: Node) -> Distance<Self::Weight> {
        Dijkstra::new(self, source).target(target).run().distance(target)
    }

    /// Like [`ShortestPaths::dijkstra`], but checks for negative weights and nodes out of range
    fn try_dijkstra(&self, source: Node) -> Result<ShortestPathTree<Self::Weight>, GraphError> {
        Dijkstra::new(self, source).try_run()
    }

    /// Runs Bellman-Ford from `source`. Nodes affected by a reachable negative cycle are
    /// reported as [`Distance::Unbounded`].
    fn bellman_ford(&self, source: Node) -> ShortestPathTree<Self::Weight> {
        BellmanFord::new(self, source).run()
    }

    /// Computes the distances between all pairs of nodes with Floyd-Warshall
    fn all_pairs_shortest_paths(&self) -> AllPairsShortestPaths<Self::Weight> {
        FloydWarshall::new(self).run()
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList {}
