use crate::{algo::*, prelude::*};
use itertools::Itertools;
use num::{Signed, Zero};

/// Enables `log` output in tests (`RUST_LOG=debug cargo test`). Safe to call repeatedly.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Computes distances from `source` by enumerating all simple paths.
/// Only meaningful if no negative cycle is reachable from `source`.
pub(crate) fn brute_force_distances<G: WeightedAdjacencyList>(
    graph: &G,
    source: Node,
) -> Vec<Distance<G::Weight>> {
    fn recurse<G: WeightedAdjacencyList>(
        graph: &G,
        u: Node,
        length: G::Weight,
        on_path: &mut NodeBitSet,
        best: &mut [Distance<G::Weight>],
    ) {
        if Distance::Finite(length) < best[u as usize] {
            best[u as usize] = Distance::Finite(length);
        }

        for (v, w) in graph.weighted_neighbors_of(u) {
            if !on_path.set_bit(v) {
                recurse(graph, v, length + w, on_path, best);
                on_path.clear_bit(v);
            }
        }
    }

    let mut best = vec![Distance::Unreachable; graph.len()];
    let mut on_path = graph.vertex_bitset_unset();
    on_path.set_bit(source);
    recurse(graph, source, G::Weight::zero(), &mut on_path, &mut best);
    best
}

/// Checks that the path to `v` stored in `tree` exists in `graph` and has exactly the length
/// reported for `v`. Nodes without a finite distance must not have a path.
pub(crate) fn assert_path_has_length<G: WeightedAdjacencyList>(
    graph: &G,
    tree: &ShortestPathTree<G::Weight>,
    v: Node,
) {
    let Distance::Finite(d) = tree.distance(v) else {
        assert_eq!(tree.path_to(v), None);
        return;
    };

    let path = tree.path_to(v).unwrap();
    assert_eq!(path.first(), Some(&tree.source()));
    assert_eq!(path.last(), Some(&v));

    let length = path
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| {
            graph
                .weighted_neighbors_of(a)
                .filter_map(|(x, w)| (x == b).then_some(w))
                .min()
                .unwrap()
        })
        .fold(G::Weight::zero(), |acc, w| acc + w);

    assert_eq!(length, d);
}

/// Returns all nodes that lie on a closed walk of negative total weight.
///
/// For every node `x` this computes the lightest walks of exactly `k` arcs starting in `x` for
/// `k = 1..=n`; a negative simple cycle through `x` has at most `n` arcs.
pub(crate) fn nodes_on_negative_cycles<G: WeightedAdjacencyList>(graph: &G) -> Vec<Node> {
    let n = graph.len();
    let edges = graph.weighted_edges().collect_vec();

    graph
        .vertices()
        .filter(|&x| {
            let mut walk: Vec<Option<G::Weight>> = vec![None; n];
            walk[x as usize] = Some(G::Weight::zero());

            (0..n).any(|_| {
                let mut next: Vec<Option<G::Weight>> = vec![None; n];
                for e in &edges {
                    if let Some(d) = walk[e.from as usize] {
                        let cand = d + e.weight;
                        let entry = &mut next[e.to as usize];
                        if entry.is_none_or(|old| cand < old) {
                            *entry = Some(cand);
                        }
                    }
                }
                walk = next;
                walk[x as usize].is_some_and(|d| d.is_negative())
            })
        })
        .collect()
}

/// Returns *true* if `graph` contains a cycle of negative total weight
pub(crate) fn has_negative_cycle<G: WeightedAdjacencyList>(graph: &G) -> bool {
    !nodes_on_negative_cycles(graph).is_empty()
}

/// Every weighted graph should behave like a plain list of arcs in insertion order
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, $weight:ty, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates `m` random edges (parallel ones and loops included) for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge<$weight>> {
                (0..m).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    let w: $weight = rng.random_range(-10..=10);

                    WeightedEdge::new(u, v, w)
                }).collect_vec()
            }

            $(
                test_graph_ops!(@$trait, $graph, $weight);
            )*
        }
    };
    (@GraphNew, $graph:ty, $weight:ty) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert!(graph.is_singleton());

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }
        }
    };
    (@WeightedAdjacencyList, $graph:ty, $weight:ty) => {
        #[test]
        fn test_weighted_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m in [n * 2, n * 5, n * 10] {
                    let edges = random_edges(rng, n, m);
                    let graph = <$graph>::from_edges(n, edges.iter());

                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), m);

                    for u in 0..n {
                        let expected = edges
                            .iter()
                            .filter(|e| e.from == u)
                            .map(|e| (e.to, e.weight))
                            .collect_vec();

                        assert_eq!(graph.weighted_neighbors_of(u).collect_vec(), expected);
                        assert_eq!(graph.degree_of(u) as usize, expected.len());
                    }

                    let mut sorted = edges.clone();
                    sorted.sort_by_key(|e| e.from);
                    assert_eq!(graph.weighted_edges().collect_vec(), sorted);
                    assert_eq!(graph.min_weight(), edges.iter().map(|e| e.weight).min());
                }
            }
        }
    };
    (@WeightedEdgeEditing, $graph:ty, $weight:ty) => {
        #[test]
        fn test_weighted_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in [1 as NumNodes, 10, 20] {
                let mut graph = <$graph>::new(n);
                let edges = random_edges(rng, n, 3 * n);

                for e in &edges {
                    assert!(graph.try_add_edge(e.from, e.to, e.weight).is_ok());
                }
                assert_eq!(graph.number_of_edges(), 3 * n);

                assert_eq!(
                    graph.try_add_edge(0, n, 1),
                    Err(GraphError::NodeOutOfRange { node: n, n })
                );
                assert_eq!(
                    graph.try_add_edge(n + 1, 0, 1),
                    Err(GraphError::NodeOutOfRange { node: n + 1, n })
                );
                assert_eq!(graph.number_of_edges(), 3 * n);

                let rebuilt = <$graph>::try_from_edges(n, edges.iter()).unwrap();
                assert_eq!(rebuilt.weighted_edges().collect_vec(), graph.weighted_edges().collect_vec());
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_cycle_oracle() {
        let graph = WeightedAdjArray::from_edges(5, [(0, 1, 1i32), (1, 2, -2), (2, 1, 1), (2, 3, 0), (4, 4, -1)]);
        assert_eq!(nodes_on_negative_cycles(&graph), vec![1, 2, 4]);
        assert!(has_negative_cycle(&graph));

        let graph = WeightedAdjArray::from_edges(3, [(0, 1, -1i32), (1, 2, -1), (2, 0, 2)]);
        assert!(!has_negative_cycle(&graph));
    }

    #[test]
    fn brute_force_oracle() {
        let graph = WeightedAdjArray::from_edges(4, [(0, 1, 5i64), (0, 2, 1), (2, 1, 1), (1, 3, -3)]);
        assert_eq!(
            brute_force_distances(&graph, 0),
            vec![Distance::Finite(0), Distance::Finite(2), Distance::Finite(1), Distance::Finite(-1)]
        );
        assert_eq!(brute_force_distances(&graph, 3)[0], Distance::Unreachable);
    }
}
