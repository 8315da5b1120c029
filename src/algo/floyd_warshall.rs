/*!
# Floyd-Warshall

All-pairs shortest paths in `O(n^3)` time and `O(n^2)` memory. Negative weights are allowed;
a pair `(u, v)` is reported as [`Distance::Unbounded`] if some path from `u` to `v` can pass
through a negative cycle, or if its length drops below `W::MIN`. Lengths above `W::MAX` count
as no path.

```
use wgraphs::{prelude::*, algo::*};

let graph = WeightedAdjArray::from_edges(3, [(0, 1, 4i32), (1, 2, -2), (0, 2, 3)]);
let apsp = graph.all_pairs_shortest_paths();

assert_eq!(apsp.distance(0, 2), Distance::Finite(2));
assert_eq!(apsp.distance(2, 0), Distance::Unreachable);
assert_eq!(apsp.distance(1, 1), Distance::Finite(0));
```
*/

use itertools::Itertools;
use log::debug;
use num::{CheckedAdd, Signed, Zero};

use super::*;

/// Distance matrix computed by [`FloydWarshall`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPairsShortestPaths<W> {
    n: NumNodes,
    distances: Vec<Distance<W>>,
}

impl<W: Weight> AllPairsShortestPaths<W> {
    /// Number of nodes of the underlying graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns the distance from `u` to `v`
    /// ** Panics if `u >= n || v >= n` **
    pub fn distance(&self, u: Node, v: Node) -> Distance<W> {
        assert!(u < self.n && v < self.n);
        self.distances[self.index(u, v)]
    }

    /// Returns the distances from `u` to all nodes
    /// ** Panics if `u >= n` **
    pub fn distances_from(&self, u: Node) -> &[Distance<W>] {
        assert!(u < self.n);
        let begin = self.index(u, 0);
        &self.distances[begin..begin + self.n as usize]
    }

    /// Returns *true* if the graph contains a negative cycle
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.n).any(|u| self.distance(u, u).is_unbounded())
    }

    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }
}

/// Configuration of a Floyd-Warshall run
pub struct FloydWarshall<'a, G> {
    graph: &'a G,
}

impl<'a, G> FloydWarshall<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    /// Computes the distance matrix
    pub fn run(&self) -> AllPairsShortestPaths<G::Weight> {
        let n = self.graph.len();
        let idx = |u: usize, v: usize| u * n + v;

        let mut distances = vec![Distance::Unreachable; n * n];
        for u in 0..n {
            distances[idx(u, u)] = Distance::Finite(G::Weight::zero());
        }

        // keep the lightest of parallel arcs; positive loops never help
        for e in self.graph.weighted_edges() {
            let entry = &mut distances[idx(e.from as usize, e.to as usize)];
            *entry = (*entry).min(Distance::Finite(e.weight));
        }

        for k in 0..n {
            for i in 0..n {
                let dik = distances[idx(i, k)];
                if dik.is_unreachable() {
                    continue;
                }
                for j in 0..n {
                    let d = Self::concat(dik, distances[idx(k, j)]);
                    if d < distances[idx(i, j)] {
                        distances[idx(i, j)] = d;
                    }
                }
            }
        }

        let cycle_nodes = (0..n)
            .filter(|&v| distances[idx(v, v)] < Distance::Finite(G::Weight::zero()))
            .collect_vec();

        for &v in &cycle_nodes {
            let into = (0..n)
                .filter(|&i| !distances[idx(i, v)].is_unreachable())
                .collect_vec();
            let from = (0..n)
                .filter(|&j| !distances[idx(v, j)].is_unreachable())
                .collect_vec();
            for (&i, &j) in into.iter().cartesian_product(&from) {
                distances[idx(i, j)] = Distance::Unbounded;
            }
        }

        debug!(
            "floyd-warshall on {} nodes: {} nodes on negative cycles",
            n,
            cycle_nodes.len()
        );

        AllPairsShortestPaths {
            n: n as NumNodes,
            distances,
        }
    }

    /// Length of a walk `i -> k -> j` made of the two given parts.
    /// Sums above `W::MAX` are no walk, sums below `W::MIN` are `Unbounded`.
    fn concat(ik: Distance<G::Weight>, kj: Distance<G::Weight>) -> Distance<G::Weight> {
        match (ik, kj) {
            (Distance::Unreachable, _) | (_, Distance::Unreachable) => Distance::Unreachable,
            (Distance::Finite(a), Distance::Finite(b)) => match a.checked_add(&b) {
                Some(d) => Distance::Finite(d),
                None if b.is_negative() => Distance::Unbounded,
                None => Distance::Unreachable,
            },
            _ => Distance::Unbounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn diagonal_and_loops() {
        let graph = WeightedAdjArray::from_edges(2, [(0, 0, 5i64), (0, 1, 3), (0, 1, 1)]);
        let apsp = graph.all_pairs_shortest_paths();
        assert_eq!(apsp.distance(0, 0), Distance::Finite(0));
        assert_eq!(apsp.distance(0, 1), Distance::Finite(1));
        assert_eq!(apsp.distances_from(1), &[Distance::Unreachable, Distance::Finite(0)]);
        assert!(!apsp.has_negative_cycle());
    }

    #[test]
    fn negative_cycle() {
        // 1 <-> 2 is negative, 0 leads into it, 3 is only reachable from it, 4 is separate
        let graph = WeightedAdjArray::from_edges(
            5,
            [(0, 1, 1i32), (1, 2, -3), (2, 1, 1), (2, 3, 0), (4, 0, 2)],
        );
        let apsp = graph.all_pairs_shortest_paths();

        assert!(apsp.has_negative_cycle());
        assert_eq!(apsp.distance(0, 3), Distance::Unbounded);
        assert_eq!(apsp.distance(4, 1), Distance::Unbounded);
        assert_eq!(apsp.distance(1, 1), Distance::Unbounded);
        assert_eq!(apsp.distance(4, 0), Distance::Finite(2));
        assert_eq!(apsp.distance(3, 3), Distance::Finite(0));
        assert_eq!(apsp.distance(3, 1), Distance::Unreachable);
    }

    #[test]
    fn lengths_beyond_weight_range() {
        let graph = WeightedAdjArray::from_edges(3, [(0, 1, i8::MAX), (1, 2, 1)]);
        let apsp = graph.all_pairs_shortest_paths();
        assert_eq!(apsp.distance(0, 1), Distance::Finite(i8::MAX));
        assert_eq!(apsp.distance(0, 2), Distance::Unreachable);
        assert_eq!(apsp.distances_from(0), graph.dijkstra(0).distances());

        let graph =
            WeightedAdjArray::from_edges(4, [(0, 1, -100i8), (1, 2, -100), (2, 3, 1), (0, 3, 5)]);
        let apsp = graph.all_pairs_shortest_paths();
        assert_eq!(apsp.distance(0, 2), Distance::Unbounded);
        assert_eq!(apsp.distance(0, 3), Distance::Unbounded);
        assert_eq!(apsp.distance(1, 3), Distance::Finite(-99));
        assert!(!apsp.has_negative_cycle());
        for u in graph.vertices() {
            assert_eq!(apsp.distances_from(u), graph.bellman_ford(u).distances());
        }
    }

    #[test]
    fn empty_graph() {
        let apsp = WeightedAdjArray::<i32>::new(0).all_pairs_shortest_paths();
        assert_eq!(apsp.number_of_nodes(), 0);
        assert!(!apsp.has_negative_cycle());
    }

    #[test]
    fn matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0xf10d);
        for _ in 0..100 {
            let n = rng.random_range(1..12);
            let m = rng.random_range(0..3 * n);
            let graph: WeightedAdjArray<i64> = WeightedGnm::new()
                .nodes(n)
                .edges(m)
                .weights(-4..=10i64)
                .generate(rng);

            let apsp = graph.all_pairs_shortest_paths();
            for u in graph.vertices() {
                assert_eq!(apsp.distances_from(u), graph.bellman_ford(u).distances());
            }
        }
    }
}
