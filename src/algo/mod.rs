/*!
# Graph Algorithms

Shortest paths, maximum flows, minimum spanning trees and the traversals they are built on.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
Each algorithm is a configurable struct (e.g. [`Dijkstra`], [`Dinic`]) and the commonly used
entry points are also available as traits implemented directly on the graphs, for example
`graph.dijkstra(s)` or `graph.minimum_spanning_tree()`.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;
mod mst;
mod network_flow;
mod path;
mod timetable;
mod traversal;

use crate::{prelude::*, utils::*};

pub use bellman_ford::*;
pub use dijkstra::*;
pub use floyd_warshall::*;
pub use mst::*;
pub use network_flow::*;
pub use path::*;
pub use timetable::*;
pub use traversal::*;
