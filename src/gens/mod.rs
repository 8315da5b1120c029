/*!
# Graph Generators

Builders for random weighted graphs. A generator is configured fluently and then either
produces a lazy stream of [`WeightedEdge`]s or a whole graph of any type implementing
[`GraphFromEdges`]:

1. Create a generator instance (e.g., `WeightedGnm::new()`).
2. Set parameters (e.g., `.nodes(n).edges(m).weights(0..=9)`).
3. Generate edges via `stream()` or a graph via `generate()`.

Supported models:
- weighted G(n,m): `m` arcs with independently and uniformly drawn endpoints and weights.
  Parallel arcs are possible, loops can be excluded.

```
use wgraphs::{prelude::*, gens::*};
use rand::SeedableRng;

let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
let graph: WeightedAdjArray<i64> = WeightedGnm::new()
    .nodes(10)
    .edges(25)
    .weights(-3..=7i64)
    .generate(rng);

assert_eq!(graph.number_of_edges(), 25);
assert!(graph.weighted_edges().all(|e| (-3..=7).contains(&e.weight)));
```
*/

use std::ops::RangeInclusive;

use rand::{Rng, distr::uniform::SampleUniform};
use rand_distr::{Distribution, Uniform};

use crate::prelude::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Builder variant of [`NumNodesGen::set_nodes`]
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the number of edges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of edges in the graph generator.
    fn set_edges(&mut self, m: NumEdges);

    /// Builder variant of [`NumEdgesGen::set_edges`]
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }
}

/// General trait for a configurable random generator of weighted edges.
pub trait WeightedGraphGenerator<W: Weight> {
    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng;

    /// Builds a graph from all generated edges
    fn generate<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphFromEdges<W>,
        R: Rng;
}

/// Generator for weighted `G(n,m)` multigraphs.
///
/// Weights default to `0..=0`, loops are allowed unless disabled via [`WeightedGnm::loops`].
#[derive(Debug, Clone)]
pub struct WeightedGnm<W> {
    n: NumNodes,
    m: NumEdges,
    weights: RangeInclusive<W>,
    loops: bool,
}

impl<W: Weight> Default for WeightedGnm<W> {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            weights: W::zero()..=W::zero(),
            loops: true,
        }
    }
}

impl<W: Weight> WeightedGnm<W> {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the range weights are drawn from uniformly
    /// ** Panics if the range is empty **
    pub fn set_weights(&mut self, weights: RangeInclusive<W>) {
        assert!(weights.start() <= weights.end());
        self.weights = weights;
    }

    /// Builder variant of [`WeightedGnm::set_weights`]
    pub fn weights(mut self, weights: RangeInclusive<W>) -> Self {
        self.set_weights(weights);
        self
    }

    /// Allows (*true*) or forbids (*false*) arcs `(u, u)`
    pub fn set_loops(&mut self, loops: bool) {
        self.loops = loops;
    }

    /// Builder variant of [`WeightedGnm::set_loops`]
    pub fn loops(mut self, loops: bool) -> Self {
        self.set_loops(loops);
        self
    }
}

impl<W> NumNodesGen for WeightedGnm<W> {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl<W> NumEdgesGen for WeightedGnm<W> {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl<W: Weight + SampleUniform> WeightedGraphGenerator<W> for WeightedGnm<W> {
    /// ** Panics if edges are requested on an empty node set, or on a single node without loops **
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge<W>>
    where
        R: Rng,
    {
        assert!(self.m == 0 || self.n > 0);
        assert!(self.m == 0 || self.loops || self.n > 1);

        let n = self.n;
        let loops = self.loops;
        let Ok(weights) = Uniform::new_inclusive(*self.weights.start(), *self.weights.end()) else {
            panic!("empty weight range");
        };

        (0..self.m).map(move |_| {
            let from = rng.random_range(0..n);
            let to = loop {
                let to = rng.random_range(0..n);
                if loops || to != from {
                    break to;
                }
            };

            WeightedEdge::new(from, to, weights.sample(rng))
        })
    }

    fn generate<G, R>(&self, rng: &mut R) -> G
    where
        G: GraphFromEdges<W>,
        R: Rng,
    {
        G::from_edges(self.n, self.stream(rng))
    }
}

/// Trait for building full graph instances from the weighted random models
pub trait RandomWeightedGraph<W: Weight>: Sized {
    /// Creates a random weighted `G(n,m)` graph
    fn weighted_gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges, weights: RangeInclusive<W>) -> Self
    where
        R: Rng;
}

impl<G, W> RandomWeightedGraph<W> for G
where
    G: GraphFromEdges<W>,
    W: Weight + SampleUniform,
{
    fn weighted_gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges, weights: RangeInclusive<W>) -> Self
    where
        R: Rng,
    {
        WeightedGnm::new().nodes(n).edges(m).weights(weights).generate(rng)
    }
}
