/*!
# Earliest Arrival in Timetable Graphs

Dijkstra on a [`TimetableGraph`]: the label of a node is the earliest time at which it can be
reached. Leaving `u` at time `t` over an arc means waiting for the arc's next departure
`>= t` and then travelling for its duration. As waiting never helps to arrive earlier later on
(FIFO property), the greedy order of Dijkstra remains correct.

```
use wgraphs::{prelude::*, algo::*};

// departures from 0 at 15, 25, 35, ...; travel time 5
let graph = TimetableGraph::from_edges(2, [(0, 1, 15i64, 10, 5)]);

assert_eq!(graph.earliest_arrival(0).distance(1), Distance::Finite(20));
assert_eq!(
    EarliestArrival::new(&graph, 0).start_time(16).run().distance(1),
    Distance::Finite(30)
);
```
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use log::debug;

use super::*;

/// Configuration of an earliest-arrival search
pub struct EarliestArrival<'a, W> {
    graph: &'a TimetableGraph<W>,
    source: Node,
    start_time: W,
    target: Option<Node>,
}

impl<'a, W: Weight> EarliestArrival<'a, W> {
    /// Prepares a search from `source` starting at time zero
    pub fn new(graph: &'a TimetableGraph<W>, source: Node) -> Self {
        Self {
            graph,
            source,
            start_time: W::zero(),
            target: None,
        }
    }

    /// Sets the time at which the source is left
    pub fn set_start_time(&mut self, t: W) {
        self.start_time = t;
    }

    /// Builder variant of [`EarliestArrival::set_start_time`]
    pub fn start_time(mut self, t: W) -> Self {
        self.set_start_time(t);
        self
    }

    /// Stops once the earliest arrival at `target` is known
    pub fn set_target(&mut self, target: Node) {
        self.target = Some(target);
    }

    /// Builder variant of [`EarliestArrival::set_target`]
    pub fn target(mut self, target: Node) -> Self {
        self.set_target(target);
        self
    }

    /// Runs the search. The returned tree holds arrival times instead of lengths; the source is
    /// at the start time.
    ///
    /// Durations and periods must be non-negative.
    /// ** Panics if `source >= n` **
    pub fn run(&self) -> ShortestPathTree<W> {
        let mut tree = ShortestPathTree::with_source_distance(
            self.graph.number_of_nodes(),
            self.source,
            self.start_time,
        );

        let mut heap = BinaryHeap::new();
        heap.push(Reverse((self.start_time, self.source)));

        while let Some(Reverse((t, u))) = heap.pop() {
            if tree.distance(u) < Distance::Finite(t) {
                continue;
            }
            if self.target == Some(u) {
                break;
            }

            for arc in self.graph.arcs_of(u) {
                let Some(arrival) = arc
                    .next_departure(t)
                    .and_then(|dep| dep.checked_add(&arc.duration))
                else {
                    continue;
                };

                if Distance::Finite(arrival) < tree.distance(arc.to) {
                    tree.update(arc.to, arrival, u);
                    heap.push(Reverse((arrival, arc.to)));
                }
            }
        }

        debug!(
            "earliest arrival from {} at time {}: {} nodes reached",
            self.source,
            self.start_time,
            self.graph
                .vertices()
                .filter(|&v| tree.is_reachable(v))
                .count()
        );

        tree
    }

    /// Checks that the source (and target) exist and that no duration or period is negative,
    /// then runs the search.
    pub fn try_run(&self) -> Result<ShortestPathTree<W>, GraphError> {
        let n = self.graph.number_of_nodes();
        GraphError::check_node(self.source, n)?;
        if let Some(t) = self.target {
            GraphError::check_node(t, n)?;
        }

        for u in self.graph.vertices() {
            for arc in self.graph.arcs_of(u) {
                if arc.duration.is_negative() {
                    return Err(GraphError::NegativeWeight { from: u, to: arc.to });
                }
                if arc.period.is_negative() {
                    return Err(GraphError::NegativePeriod { from: u, to: arc.to });
                }
            }
        }

        Ok(self.run())
    }
}

impl<W: Weight> TimetableGraph<W> {
    /// Earliest arrival times at all nodes when leaving `source` at time zero
    pub fn earliest_arrival(&self, source: Node) -> ShortestPathTree<W> {
        EarliestArrival::new(self, source).run()
    }

    /// Earliest arrival time at `target` when leaving `source` at `start_time`
    pub fn earliest_arrival_at(&self, source: Node, target: Node, start_time: W) -> Distance<W> {
        EarliestArrival::new(self, source)
            .start_time(start_time)
            .target(target)
            .run()
            .distance(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn waiting_for_departures() {
        let graph = TimetableGraph::from_edges(
            4,
            [
                (0, 1, 0i64, 10, 4),  // 0, 10, 20, ...
                (1, 2, 5, 0, 1),      // only at 5
                (1, 3, 7, 3, 2),      // 7, 10, 13, ...
                (0, 3, 0, 0, 100),
            ],
        );

        let tree = graph.earliest_arrival(0);
        assert_eq!(tree.distance(0), Distance::Finite(0));
        assert_eq!(tree.distance(1), Distance::Finite(4));
        assert_eq!(tree.distance(2), Distance::Finite(6));
        assert_eq!(tree.distance(3), Distance::Finite(9));
        assert_eq!(tree.path_to(3), Some(vec![0, 1, 3]));

        // leaving a bit later misses the only departure of (1, 2)
        let tree = EarliestArrival::new(&graph, 0).start_time(1).run();
        assert_eq!(tree.distance(0), Distance::Finite(1));
        assert_eq!(tree.distance(1), Distance::Finite(14));
        assert_eq!(tree.distance(2), Distance::Unreachable);
        assert_eq!(tree.distance(3), Distance::Finite(18));

        assert_eq!(graph.earliest_arrival_at(0, 3, 1), Distance::Finite(18));
        assert_eq!(graph.earliest_arrival_at(1, 0, 0), Distance::Unreachable);
    }

    #[test]
    fn try_run_validates() {
        let graph = TimetableGraph::from_edges(2, [(0, 1, 0i32, 1, -1)]);
        assert_eq!(
            EarliestArrival::new(&graph, 0).try_run(),
            Err(GraphError::NegativeWeight { from: 0, to: 1 })
        );
        assert_eq!(
            EarliestArrival::new(&graph, 2).try_run(),
            Err(GraphError::NodeOutOfRange { node: 2, n: 2 })
        );
    }

    #[test]
    fn negative_period_never_departs_early() {
        // unchecked construction lets the arc in; only its first departure at 0 exists
        let graph = TimetableGraph::from_edges(2, [(0, 1, 0i64, -3, 0)]);
        assert_eq!(
            EarliestArrival::new(&graph, 0).start_time(5).try_run(),
            Err(GraphError::NegativePeriod { from: 0, to: 1 })
        );

        let tree = EarliestArrival::new(&graph, 0).start_time(5).run();
        assert_eq!(tree.distance(1), Distance::Unreachable);
        assert_eq!(graph.earliest_arrival(0).distance(1), Distance::Finite(0));
    }

    #[test]
    fn every_minute_is_plain_dijkstra() {
        // with period 1 and first departure 0 the timetable never makes anyone wait
        let rng = &mut Pcg64Mcg::seed_from_u64(0x7173);
        for _ in 0..30 {
            let n: Node = rng.random_range(1..25);
            let m = rng.random_range(0..3 * n);

            let mut plain = WeightedAdjArray::<i64>::new(n);
            let mut timetable = TimetableGraph::<i64>::new(n);
            for _ in 0..m {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                let d: i64 = rng.random_range(0..20);
                plain.add_edge(u, v, d);
                timetable.add_edge(TimetableEdge::new(u, v, 0, 1, d));
            }

            assert_eq!(
                timetable.earliest_arrival(0).distances(),
                plain.dijkstra(0).distances()
            );
        }
    }
}
