/*!
# Bellman-Ford

Single-source shortest paths for arbitrary (also negative) weights.

After at most `n - 1` relaxation rounds over all edges, every distance that is still improvable
belongs to a node reachable from a negative cycle. Those nodes, and everything reachable from
them, are reported as [`Distance::Unbounded`].

Sums are computed with checked arithmetic. A walk whose length exceeds `W::MAX` is not a path
(as in Dijkstra), while a walk shorter than `W::MIN` makes its end node unbounded as well.

```
use wgraphs::{prelude::*, algo::*};

// 1 -> 2 -> 1 is a cycle of weight -1
let graph = WeightedAdjArray::from_edges(5, [(0, 1, 1i64), (1, 2, 1), (2, 1, -2), (2, 3, 1), (0, 4, 3)]);
let tree = graph.bellman_ford(0);

assert_eq!(tree.distance(0), Distance::Finite(0));
assert_eq!(tree.distance(1), Distance::Unbounded);
assert_eq!(tree.distance(3), Distance::Unbounded);
assert_eq!(tree.distance(4), Distance::Finite(3));
```
*/

use itertools::Itertools;
use log::debug;
use num::{CheckedAdd, Signed};

use super::*;

/// Configuration of a Bellman-Ford run
pub struct BellmanFord<'a, G> {
    graph: &'a G,
    source: Node,
}

impl<'a, G> BellmanFord<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Prepares a search from `source`
    pub fn new(graph: &'a G, source: Node) -> Self {
        Self { graph, source }
    }

    /// Runs the search.
    /// ** Panics if `source >= n` **
    pub fn run(&self) -> ShortestPathTree<G::Weight> {
        let n = self.graph.number_of_nodes();
        let edges = self.graph.weighted_edges().collect_vec();
        let mut tree = ShortestPathTree::new(n, self.source);

        let mut underflows = Vec::new();
        let mut rounds = 0;
        for _ in 1..n {
            rounds += 1;
            let mut changed = false;
            for e in &edges {
                match Self::relaxed_distance(&tree, e) {
                    Some(Distance::Finite(d)) => tree.update(e.to, d, e.from),
                    Some(_) => {
                        tree.mark_unbounded(e.to);
                        underflows.push(e.to);
                    }
                    None => continue,
                }
                changed = true;
            }
            if !changed {
                break;
            }
        }

        // Anything still improvable is influenced by a negative cycle
        let improvable = edges
            .iter()
            .filter(|e| Self::relaxed_distance(&tree, e).is_some())
            .map(|e| e.to)
            .chain(underflows)
            .collect_vec();

        let mut unbounded = 0;
        for v in self.graph.dfs_from_many(improvable) {
            tree.mark_unbounded(v);
            unbounded += 1;
        }

        debug!(
            "bellman-ford from {} on {} nodes: {} rounds, {} unbounded nodes",
            self.source, n, rounds, unbounded
        );

        tree
    }

    /// Returns the new distance of `e.to` if `e` improves it.
    /// Sums above `W::MAX` never improve anything; sums below `W::MIN` yield `Unbounded`.
    fn relaxed_distance(
        tree: &ShortestPathTree<G::Weight>,
        e: &WeightedEdge<G::Weight>,
    ) -> Option<Distance<G::Weight>> {
        let du = tree.distance(e.from).finite()?;
        let d = match du.checked_add(&e.weight) {
            Some(d) => Distance::Finite(d),
            None if e.weight.is_negative() => Distance::Unbounded,
            None => return None,
        };
        (d < tree.distance(e.to)).then_some(d)
    }

    /// Returns *true* if a negative cycle is reachable from the source
    pub fn has_negative_cycle(&self) -> bool {
        self.run().has_negative_cycle()
    }
}
