/*!
# Dijkstra

Single-source shortest paths for non-negative weights using a binary heap with lazy deletion:
instead of a decrease-key operation, an improved node is pushed again and stale heap entries
are skipped when popped.

```
use wgraphs::{prelude::*, algo::*};

let graph = WeightedAdjArray::from_edges(4, [(0, 1, 1i64), (1, 2, 1), (2, 3, 1), (0, 3, 10)]);

let tree = Dijkstra::new(&graph, 0).run();
assert_eq!(tree.distances(), &[
    Distance::Finite(0),
    Distance::Finite(1),
    Distance::Finite(2),
    Distance::Finite(3),
]);

assert_eq!(Dijkstra::new(&graph, 3).target(0).run().distance(0), Distance::Unreachable);
```
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use log::{debug, trace};
use num::{CheckedAdd, Signed, Zero};

use super::*;

/// Configuration of a Dijkstra run
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    source: Node,
    target: Option<Node>,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Prepares a search from `source` to all nodes
    pub fn new(graph: &'a G, source: Node) -> Self {
        Self {
            graph,
            source,
            target: None,
        }
    }

    /// Stops the search once `target` is settled.
    ///
    /// The distance of `target` (and of every node settled before it) is final; all other
    /// entries of the returned tree may be upper bounds only.
    pub fn set_target(&mut self, target: Node) {
        self.target = Some(target);
    }

    /// Builder variant of [`Dijkstra::set_target`]
    pub fn target(mut self, target: Node) -> Self {
        self.set_target(target);
        self
    }

    /// Runs the search.
    ///
    /// Weights must be non-negative; otherwise the result is unspecified, and with a negative
    /// cycle the run may not finish in practice. Use [`Dijkstra::try_run`] to validate the
    /// input first.
    /// ** Panics if `source >= n` **
    pub fn run(&self) -> ShortestPathTree<G::Weight> {
        let mut tree = ShortestPathTree::new(self.graph.number_of_nodes(), self.source);
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((G::Weight::zero(), self.source)));

        let mut settled = 0usize;
        while let Some(Reverse((d, u))) = heap.pop() {
            if tree.distance(u) < Distance::Finite(d) {
                continue; // stale entry
            }

            settled += 1;
            if self.target == Some(u) {
                trace!("dijkstra reached target {u} at distance {d}");
                break;
            }

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                let Some(nd) = d.checked_add(&w) else {
                    continue;
                };

                if Distance::Finite(nd) < tree.distance(v) {
                    tree.update(v, nd, u);
                    heap.push(Reverse((nd, v)));
                }
            }
        }

        debug!(
            "dijkstra from {} settled {} of {} nodes",
            self.source,
            settled,
            self.graph.number_of_nodes()
        );

        tree
    }

    /// Checks that the source (and target) exist and that no weight is negative, then runs
    /// the search.
    pub fn try_run(&self) -> Result<ShortestPathTree<G::Weight>, GraphError> {
        let n = self.graph.number_of_nodes();
        GraphError::check_node(self.source, n)?;
        if let Some(t) = self.target {
            GraphError::check_node(t, n)?;
        }

        if let Some(e) = self.graph.weighted_edges().find(|e| e.weight.is_negative()) {
            return Err(GraphError::NegativeWeight {
                from: e.from,
                to: e.to,
            });
        }

        Ok(self.run())
    }
}
