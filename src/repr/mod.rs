/*!
# Graph Representations

- [`WeightedAdjArray`]: directed graph storing per node an ordered list of `(neighbor, weight)`
  arcs. The workhorse for Dijkstra, Bellman-Ford, Floyd-Warshall and Kruskal.
- [`TimetableGraph`]: directed graph whose arcs can only be taken at scheduled departure times.

Both are sized exactly to the node count given at construction; adding arcs never creates
nodes. Arcs are kept in insertion order, which determines tie-breaking in all algorithms.
*/

use crate::{ops::*, *};

mod timetable;
mod weighted;

pub use timetable::*;
pub use weighted::*;

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$generic:ident> => $nbs:ident) => {
            impl<$generic: Weight> GraphNodeOrder for $struct<$generic> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$generic: Weight> GraphEdgeOrder for $struct<$generic> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$generic: Weight> GraphNew for $struct<$generic> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        num_edges: 0,
                        $nbs: vec![Vec::new(); n as usize],
                    }
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
