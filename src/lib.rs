/*!
`wgraphs` is a library of classical algorithms on **w**eighted directed graphs whose nodes are
numbered `0` to `n - 1`:
- shortest paths from a single source (Dijkstra, Bellman-Ford) and between all pairs
  (Floyd-Warshall), including detection of negative cycles,
- earliest arrival in graphs whose arcs run on a periodic timetable,
- maximum flows and minimum cuts (Ford-Fulkerson, Dinic),
- minimum spanning trees (Kruskal on top of a union-find).

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as
compared to `u64/usize`. **Edges** are [`WeightedEdge`]s `(from, to, weight)`; weights are any
signed primitive integer (see [`Weight`]). Results of path queries are [`Distance`]s, which keep
"no path" and "arbitrarily short path" apart from every finite length.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`WeightedAdjArray`](crate::repr::WeightedAdjArray)
- [`TimetableGraph`](crate::repr::TimetableGraph)
- [`ResidualNetwork`](crate::algo::ResidualNetwork) (flow networks, lives next to the flow algorithms)

# Design

All algorithms are provided as configurable structs that one can alter to their needs using
either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided
graph. Alternatively, the commonly used functionalities are implemented via traits on the graph
itself, making them usable without configuring the algorithm beforehand.

Operations that panic on invalid input (a node `>= n`, a negative weight where none is allowed)
have a `try_` sibling returning a [`GraphError`] instead.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, basic graph operations, and all
  standard graph representations,
- [`algo`] includes the algorithms together with the traits that expose them on graphs
  (`graph.dijkstra(s)`, `graph.minimum_spanning_tree()`, `network.max_flow(..)`, ...),
- [`gens`] includes random weighted graph generators,
- [`utils`] includes helper structures such as [`DisjointSets`](crate::utils::DisjointSets).

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let graph = WeightedAdjArray::from_edges(3, [(0, 1, 2i64), (1, 2, -1), (0, 2, 4)]);

assert_eq!(graph.bellman_ford(0).distance(2), Distance::Finite(1));
assert_eq!(graph.minimum_spanning_tree().unwrap().total_weight(), 1);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod weight;

pub use edge::*;
pub use error::GraphError;
pub use node::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation
/// traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}
