/*!
# Minimum Spanning Trees

Kruskal's algorithm on top of [`DisjointSets`]: edges are scanned in order of increasing weight
and taken whenever they connect two different components. Edge directions are ignored.

```
use wgraphs::{prelude::*, algo::*};

let graph = WeightedAdjArray::from_edges(4, [(0, 1, 3i64), (1, 2, 1), (2, 0, 2), (3, 2, 5)]);

let tree = graph.minimum_spanning_tree().unwrap();
assert_eq!(tree.total_weight(), 8);
assert_eq!(
    tree.edges(),
    &[WeightedEdge::new(0, 2, 2), WeightedEdge::new(1, 2, 1), WeightedEdge::new(2, 3, 5)]
);
```
*/

use itertools::Itertools;
use log::debug;

use super::*;

/// Edges of a minimum spanning tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<W> {
    total_weight: W,
    edges: Vec<WeightedEdge<W>>,
}

impl<W: Weight> SpanningTree<W> {
    /// Sum of all edge weights
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// The tree edges with `from <= to`, sorted lexicographically
    pub fn edges(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }

    /// Number of tree edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    pub fn into_edges(self) -> Vec<WeightedEdge<W>> {
        self.edges
    }
}

/// Computes a minimum spanning tree of the undirected graph with nodes `0..n` and the given
/// edges, or `None` if that graph is disconnected.
///
/// Among edges of equal weight, earlier ones are preferred.
/// ** Panics if an endpoint is `>= n` **
pub fn kruskal<W, I, E>(n: NumNodes, edges: I) -> Option<SpanningTree<W>>
where
    W: Weight,
    I: IntoIterator<Item = E>,
    E: Into<WeightedEdge<W>>,
{
    let mut edges = edges.into_iter().map(|e| e.into()).collect_vec();
    edges.sort_by_key(|e| e.weight);

    let mut sets = DisjointSets::new(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1) as usize);
    let mut total_weight = W::zero();

    for e in edges {
        if sets.number_of_sets() <= 1 {
            break;
        }
        if sets.union(e.from, e.to) {
            total_weight = total_weight + e.weight;
            tree.push(e.normalized());
        }
    }

    if n > 1 && tree.len() + 1 != n as usize {
        debug!(
            "kruskal: graph with {} nodes is disconnected ({} components)",
            n,
            sets.number_of_sets()
        );
        return None;
    }

    tree.sort_unstable_by_key(|e| (e.from, e.to, e.weight));
    debug!("kruskal: spanning tree of weight {total_weight} on {n} nodes");

    Some(SpanningTree {
        total_weight,
        edges: tree,
    })
}

/// Provides Kruskal's algorithm on weighted graphs
pub trait MinimumSpanningTree: WeightedAdjacencyList {
    /// Minimum spanning tree of the graph with edge directions ignored, or `None` if the graph
    /// is disconnected. The empty graph and a single node have an empty tree.
    fn minimum_spanning_tree(&self) -> Option<SpanningTree<Self::Weight>> {
        kruskal(self.number_of_nodes(), self.weighted_edges())
    }
}

impl<G> MinimumSpanningTree for G where G: WeightedAdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn known_tree() {
        let edges = [
            (0, 1, 4i32),
            (0, 7, 8),
            (1, 2, 8),
            (1, 7, 11),
            (2, 3, 7),
            (2, 8, 2),
            (2, 5, 4),
            (3, 4, 9),
            (3, 5, 14),
            (4, 5, 10),
            (5, 6, 2),
            (6, 7, 1),
            (6, 8, 6),
            (7, 8, 7),
        ];

        let tree = kruskal(9, edges).unwrap();
        assert_eq!(tree.total_weight(), 37);
        assert_eq!(tree.number_of_edges(), 8);
        assert!(tree.edges().iter().all(|e| e.from <= e.to));
        assert!(tree.edges().windows(2).all(|w| (w[0].from, w[0].to) <= (w[1].from, w[1].to)));
    }

    #[test]
    fn ties_prefer_earlier_edges() {
        let tree = kruskal(3, [(2, 1, 1i64), (0, 1, 1), (0, 2, 1)]).unwrap();
        assert_eq!(
            tree.into_edges(),
            vec![WeightedEdge::new(0, 1, 1), WeightedEdge::new(1, 2, 1)]
        );
    }

    #[test]
    fn degenerate_graphs() {
        assert!(kruskal::<i32, _, WeightedEdge<i32>>(0, []).is_some());

        let single = kruskal::<i32, _, WeightedEdge<i32>>(1, []).unwrap();
        assert_eq!(single.total_weight(), 0);
        assert!(single.edges().is_empty());

        assert!(kruskal(3, [(0, 1, 5i32)]).is_none());
        assert!(kruskal(2, [(0, 0, 1i32), (1, 1, 1)]).is_none());
    }

    #[test]
    fn negative_weights_and_parallel_edges() {
        let graph = WeightedAdjArray::from_edges(3, [(0, 1, 2i32), (1, 0, -1), (1, 2, 0), (2, 2, -9)]);
        let tree = graph.minimum_spanning_tree().unwrap();
        assert_eq!(tree.total_weight(), -1);
        assert_eq!(
            tree.edges(),
            &[WeightedEdge::new(0, 1, -1), WeightedEdge::new(1, 2, 0)]
        );
    }

    #[test]
    fn no_lighter_tree_by_exchange() {
        // cut property: swapping a tree edge for a non-tree edge never decreases the weight
        let rng = &mut Pcg64Mcg::seed_from_u64(0x357);
        for _ in 0..50 {
            let n = rng.random_range(2..12);
            let m = rng.random_range(n..4 * n);
            let graph: WeightedAdjArray<i32> = WeightedGnm::new()
                .nodes(n)
                .edges(m)
                .weights(-10..=10i32)
                .generate(rng);

            let Some(tree) = graph.minimum_spanning_tree() else {
                continue;
            };
            assert_eq!(tree.number_of_edges(), n - 1);

            for removed in 0..tree.edges().len() {
                let rest = tree
                    .edges()
                    .iter()
                    .enumerate()
                    .filter_map(|(i, e)| (i != removed).then_some(*e))
                    .collect_vec();

                for e in graph.weighted_edges() {
                    let mut sets = DisjointSets::new(n);
                    for f in rest.iter().chain(std::iter::once(&e)) {
                        sets.union(f.from, f.to);
                    }
                    if sets.number_of_sets() == 1 {
                        let weight = rest.iter().map(|f| f.weight).sum::<i32>() + e.weight;
                        assert!(weight >= tree.total_weight());
                    }
                }
            }
        }
    }
}
