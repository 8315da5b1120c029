/*!
# Maximum Flows and Minimum Cuts

This module computes maximum `s-t` flows in capacitated directed graphs.

## Core concepts
- The [`ResidualNetwork`] stores for every input edge `(u, v, c)` a **forward arc** in `u`'s list
  (capacity `c`) and a **backward arc** in `v`'s list (capacity `0`). Both know the index of
  their sibling ("mirror"), and the flow of a backward arc is always the negated flow of its
  forward arc. Pushing flow along an arc ([`ResidualNetwork::push`]) updates both.
- An **augmenting path** is a path from `s` to `t` using only arcs with positive residual
  capacity `capacity - flow`.

## Implementations
- [`FordFulkerson`] repeatedly augments along a path found by depth-first search.
- [`Dinic`] alternates between a BFS layering of the residual network and a blocking flow on
  arcs that advance exactly one layer.

Both are iterators yielding the amount of flow added per step. Running a solver to exhaustion
via [`MaxFlowSolver::run`] consumes it and returns a [`MaxFlow`], which answers the queries
that are only meaningful at the fixed point: per-arc flows and a minimum cut.

```
use wgraphs::{prelude::*, algo::*};

//   / 1 \
// 0      3
//   \ 2 /
let network = ResidualNetwork::from_edges(4, [(0, 1, 10i64), (0, 2, 5), (1, 3, 5), (2, 3, 10)]);

let flow = Dinic::new(network.clone(), 0, 3).run();
assert_eq!(flow.value(), 10);
assert_eq!(flow.min_cut().source_side(), vec![0, 1]);
assert_eq!(flow.cut_capacity(), 10);

let flow = network.max_flow(MaxFlowAlgorithm::FordFulkerson, 0, 3);
assert_eq!(flow.value(), 10);
```
*/

use log::{debug, trace};

use super::{traversal::*, *};
use crate::repr::macros::impl_common_graph_ops;

/// Position of an arc: the `index`-th entry of the arc list of `node`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArcId {
    pub node: Node,
    pub index: NumEdges,
}

impl ArcId {
    pub fn new(node: Node, index: NumEdges) -> Self {
        Self { node, index }
    }
}

/// A forward or backward arc of a [`ResidualNetwork`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidualArc<C> {
    /// Head of the arc
    pub to: Node,
    /// Index of the sibling arc within the arc list of `to`
    pub mirror: NumEdges,
    /// Capacity; `0` for backward arcs
    pub capacity: C,
    /// Current flow; never positive on backward arcs
    pub flow: C,
}

impl<C: Weight> ResidualArc<C> {
    /// Remaining capacity `capacity - flow`
    pub fn residual(&self) -> C {
        self.capacity - self.flow
    }
}

/// Flow on an input edge as reported by [`MaxFlow::arc_flows`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcFlow<C> {
    pub from: Node,
    pub to: Node,
    pub flow: C,
    pub capacity: C,
}

/// Paired-arc residual representation of a flow network.
///
/// As a [`WeightedAdjacencyList`], the network exposes its *residual graph*: exactly the arcs
/// with positive residual capacity, weighted by that capacity. All traversals of
/// [`Traversal`] thus operate on the residual graph.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResidualNetwork<C> {
    num_edges: NumEdges,
    arcs: Vec<Vec<ResidualArc<C>>>,
}

impl_common_graph_ops!(ResidualNetwork<C> => arcs);

impl<C: Weight> WeightedAdjacencyList for ResidualNetwork<C> {
    type Weight = C;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, C)> + '_ {
        self.arcs[u as usize].iter().filter_map(|arc| {
            let r = arc.residual();
            (r > C::zero()).then_some((arc.to, r))
        })
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.weighted_neighbors_of(u).count() as NumNodes
    }
}

impl<C: Weight> ResidualNetwork<C> {
    /// Creates a network with `n` nodes and the given edges `(u, v, capacity)`
    /// ** Panics if an endpoint is `>= n` **
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<C>>,
    {
        let mut network = Self::new(n);
        for e in edges {
            let WeightedEdge { from, to, weight } = e.into();
            network.add_edge(from, to, weight);
        }
        network
    }

    /// Creates a network with `n` nodes, rejecting out-of-range endpoints and negative capacities
    pub fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge<C>>,
    {
        let mut network = Self::new(n);
        for e in edges {
            let WeightedEdge { from, to, weight } = e.into();
            network.try_add_edge(from, to, weight)?;
        }
        Ok(network)
    }

    /// Adds the edge `(u, v)` with capacity `c` as a forward arc at `u` and a backward arc at
    /// `v`, and returns the position of the forward arc.
    /// ** Panics if `u >= n || v >= n` **
    pub fn add_edge(&mut self, u: Node, v: Node, c: C) -> ArcId {
        assert!(v < self.number_of_nodes());
        let forward = self.arcs[u as usize].len() as NumEdges;
        // a loop stores both arcs in the same list
        let backward = self.arcs[v as usize].len() as NumEdges + (u == v) as NumEdges;

        self.arcs[u as usize].push(ResidualArc {
            to: v,
            mirror: backward,
            capacity: c,
            flow: C::zero(),
        });
        self.arcs[v as usize].push(ResidualArc {
            to: u,
            mirror: forward,
            capacity: C::zero(),
            flow: C::zero(),
        });
        self.num_edges += 1;

        ArcId::new(u, forward)
    }

    /// Like [`ResidualNetwork::add_edge`] but checks the endpoints and the capacity
    pub fn try_add_edge(&mut self, u: Node, v: Node, c: C) -> Result<ArcId, GraphError> {
        GraphError::check_node(u, self.number_of_nodes())?;
        GraphError::check_node(v, self.number_of_nodes())?;
        if c.is_negative() {
            return Err(GraphError::NegativeCapacity { from: u, to: v });
        }
        Ok(self.add_edge(u, v, c))
    }

    /// Returns all arcs (forward and backward) of `u` in insertion order
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> &[ResidualArc<C>] {
        &self.arcs[u as usize]
    }

    /// Returns the arc at position `id`
    pub fn arc(&self, id: ArcId) -> &ResidualArc<C> {
        &self.arcs[id.node as usize][id.index as usize]
    }

    /// Returns the position of the sibling of the arc at `id`
    pub fn mirror_of(&self, id: ArcId) -> ArcId {
        let arc = self.arc(id);
        ArcId::new(arc.to, arc.mirror)
    }

    /// Residual capacity of the arc at `id`
    pub fn residual(&self, id: ArcId) -> C {
        self.arc(id).residual()
    }

    /// Sends `amount` units of flow along the arc at `id`; its mirror loses the same amount.
    /// ** Panics (in debug builds) if `amount` exceeds the residual capacity **
    pub fn push(&mut self, id: ArcId, amount: C) {
        debug_assert!(amount <= self.residual(id));
        let mirror = self.mirror_of(id);
        self.arcs[id.node as usize][id.index as usize].flow =
            self.arcs[id.node as usize][id.index as usize].flow + amount;
        self.arcs[mirror.node as usize][mirror.index as usize].flow =
            self.arcs[mirror.node as usize][mirror.index as usize].flow - amount;
    }

    /// Removes all flow, keeping the capacities
    pub fn reset_flow(&mut self) {
        for arc in self.arcs.iter_mut().flatten() {
            arc.flow = C::zero();
        }
    }

    /// Outgoing minus incoming flow of `u`
    pub fn excess_out_of(&self, u: Node) -> C {
        self.arcs[u as usize]
            .iter()
            .fold(C::zero(), |acc, arc| acc + arc.flow)
    }

    /// Nodes reachable from `s` over arcs with positive residual capacity
    pub fn reachable_from(&self, s: Node) -> NodeBitSet {
        self.reachable_set(s)
    }

    /// Computes a maximum flow from `s` to `t` with the chosen algorithm
    /// ** Panics if `s >= n || t >= n` **
    pub fn max_flow(self, algo: MaxFlowAlgorithm, s: Node, t: Node) -> MaxFlow<C> {
        match algo {
            MaxFlowAlgorithm::FordFulkerson => FordFulkerson::new(self, s, t).run(),
            MaxFlowAlgorithm::Dinic => Dinic::new(self, s, t).run(),
        }
    }
}

/// Selects the algorithm used by [`ResidualNetwork::max_flow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxFlowAlgorithm {
    FordFulkerson,
    #[default]
    Dinic,
}

/// Common interface of the max-flow iterators.
///
/// Each call to `next` performs one step of the algorithm and returns the amount of flow it
/// added, or `None` once the flow is maximum.
pub trait MaxFlowSolver<C: Weight>: Iterator<Item = C> + Sized {
    fn source(&self) -> Node;

    fn sink(&self) -> Node;

    /// Returns the residual network in its current state
    fn into_network(self) -> ResidualNetwork<C>;

    /// Runs the algorithm to completion. The flow value only counts flow added by this solver.
    fn run(mut self) -> MaxFlow<C> {
        let mut value = C::zero();
        let mut steps = 0;
        for delta in self.by_ref() {
            value = value + delta;
            steps += 1;
        }

        debug!(
            "max flow {} -> {} has value {} after {} steps",
            self.source(),
            self.sink(),
            value,
            steps
        );

        MaxFlow {
            source: self.source(),
            sink: self.sink(),
            value,
            network: self.into_network(),
        }
    }
}

/// Augmenting-path algorithm using a depth-first search from the source.
///
/// Returns the bottleneck of every augmenting path it saturates.
pub struct FordFulkerson<C> {
    network: ResidualNetwork<C>,
    source: Node,
    sink: Node,
    visited: NodeBitSet,
    stack: Vec<(Node, NumEdges)>,
    path: Vec<ArcId>,
}

impl<C: Weight> FordFulkerson<C> {
    /// ** Panics if `s >= n || t >= n` **
    pub fn new(network: ResidualNetwork<C>, s: Node, t: Node) -> Self {
        assert!(s < network.number_of_nodes() && t < network.number_of_nodes());
        Self {
            visited: network.vertex_bitset_unset(),
            network,
            source: s,
            sink: t,
            stack: Vec::new(),
            path: Vec::new(),
        }
    }

    /// Like [`FordFulkerson::new`] but reports out-of-range terminals as errors
    pub fn try_new(network: ResidualNetwork<C>, s: Node, t: Node) -> Result<Self, GraphError> {
        GraphError::check_node(s, network.number_of_nodes())?;
        GraphError::check_node(t, network.number_of_nodes())?;
        Ok(Self::new(network, s, t))
    }

    /// Searches for an augmenting path and stores its arcs in `self.path`.
    /// Arcs are tried in list order, as a recursive DFS would.
    fn find_path(&mut self) -> bool {
        self.visited.clear_all();
        self.stack.clear();
        self.path.clear();

        self.visited.set_bit(self.source);
        self.stack.push((self.source, 0));

        while let Some(top) = self.stack.last_mut() {
            let (u, index) = *top;
            let arcs = self.network.arcs_of(u);
            if index as usize >= arcs.len() {
                self.stack.pop();
                self.path.pop();
                continue;
            }
            top.1 += 1;

            let arc = arcs[index as usize];
            if arc.residual() > C::zero() && !self.visited.set_bit(arc.to) {
                self.path.push(ArcId::new(u, index));
                if arc.to == self.sink {
                    return true;
                }
                self.stack.push((arc.to, 0));
            }
        }

        false
    }
}

impl<C: Weight> Iterator for FordFulkerson<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.source == self.sink || !self.find_path() {
            return None;
        }

        let bottleneck = self
            .path
            .iter()
            .map(|&id| self.network.residual(id))
            .min()?;

        for &id in &self.path {
            self.network.push(id, bottleneck);
        }

        trace!(
            "augmented {} along a path of {} arcs",
            bottleneck,
            self.path.len()
        );
        Some(bottleneck)
    }
}

impl<C: Weight> MaxFlowSolver<C> for FordFulkerson<C> {
    fn source(&self) -> Node {
        self.source
    }

    fn sink(&self) -> Node {
        self.sink
    }

    fn into_network(self) -> ResidualNetwork<C> {
        self.network
    }
}

/// Dinic's blocking-flow algorithm.
///
/// Every step computes a BFS layering of the residual network and then saturates all
/// shortest augmenting paths; it returns the flow added by that phase.
pub struct Dinic<C> {
    network: ResidualNetwork<C>,
    source: Node,
    sink: Node,
    levels: Vec<Node>,
    current_arc: Vec<NumEdges>,
    path: Vec<ArcId>,
}

impl<C: Weight> Dinic<C> {
    /// ** Panics if `s >= n || t >= n` **
    pub fn new(network: ResidualNetwork<C>, s: Node, t: Node) -> Self {
        assert!(s < network.number_of_nodes() && t < network.number_of_nodes());
        let n = network.len();
        Self {
            network,
            source: s,
            sink: t,
            levels: vec![INVALID_NODE; n],
            current_arc: vec![0; n],
            path: Vec::new(),
        }
    }

    /// Like [`Dinic::new`] but reports out-of-range terminals as errors
    pub fn try_new(network: ResidualNetwork<C>, s: Node, t: Node) -> Result<Self, GraphError> {
        GraphError::check_node(s, network.number_of_nodes())?;
        GraphError::check_node(t, network.number_of_nodes())?;
        Ok(Self::new(network, s, t))
    }

    /// Computes BFS levels in the residual network and returns *true* if the sink is reached
    fn compute_levels(&mut self) -> bool {
        self.levels.fill(INVALID_NODE);
        self.network
            .bfs_with_predecessor(self.source)
            .depths_into(&mut self.levels);
        self.levels[self.sink as usize] != INVALID_NODE
    }

    /// Returns the next arc of `u` into the next level that has residual capacity.
    /// Skipped arcs are useless for the rest of the phase.
    fn advance(&mut self, u: Node) -> Option<ArcId> {
        let arcs = self.network.arcs_of(u);
        let next_level = self.levels[u as usize] + 1;
        let current = &mut self.current_arc[u as usize];

        while (*current as usize) < arcs.len() {
            let arc = &arcs[*current as usize];
            if arc.residual() > C::zero() && self.levels[arc.to as usize] == next_level {
                return Some(ArcId::new(u, *current));
            }
            *current += 1;
        }

        None
    }

    /// Saturates augmenting paths in the layered network until none is left
    fn blocking_flow(&mut self) -> C {
        self.current_arc.fill(0);
        let mut total = C::zero();
        let mut augmentations = 0;

        self.path.clear();
        let mut u = self.source;
        loop {
            if u == self.sink {
                let Some(bottleneck) = self
                    .path
                    .iter()
                    .map(|&id| self.network.residual(id))
                    .min()
                else {
                    break;
                };

                for &id in &self.path {
                    self.network.push(id, bottleneck);
                }
                total = total + bottleneck;
                augmentations += 1;

                self.path.clear();
                u = self.source;
                continue;
            }

            if let Some(id) = self.advance(u) {
                self.path.push(id);
                u = self.network.arc(id).to;
                continue;
            }

            // dead end: retreat and discard the arc that led here
            let Some(last) = self.path.pop() else {
                break;
            };
            u = last.node;
            self.current_arc[u as usize] += 1;
        }

        trace!(
            "phase with sink at level {}: {} augmentations, flow {}",
            self.levels[self.sink as usize],
            augmentations,
            total
        );
        total
    }
}

impl<C: Weight> Iterator for Dinic<C> {
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.source == self.sink || !self.compute_levels() {
            return None;
        }
        Some(self.blocking_flow())
    }
}

impl<C: Weight> MaxFlowSolver<C> for Dinic<C> {
    fn source(&self) -> Node {
        self.source
    }

    fn sink(&self) -> Node {
        self.sink
    }

    fn into_network(self) -> ResidualNetwork<C> {
        self.network
    }
}

/// A maximum flow together with the residual network it leaves behind
#[derive(Debug, Clone)]
pub struct MaxFlow<C> {
    source: Node,
    sink: Node,
    value: C,
    network: ResidualNetwork<C>,
}

impl<C: Weight> MaxFlow<C> {
    /// Value of the flow
    pub fn value(&self) -> C {
        self.value
    }

    pub fn source(&self) -> Node {
        self.source
    }

    pub fn sink(&self) -> Node {
        self.sink
    }

    /// The residual network carrying the flow
    pub fn network(&self) -> &ResidualNetwork<C> {
        &self.network
    }

    pub fn into_network(self) -> ResidualNetwork<C> {
        self.network
    }

    /// All arcs with positive flow, ordered by tail and then by position in the tail's list
    pub fn arc_flows(&self) -> Vec<ArcFlow<C>> {
        self.network
            .vertices()
            .flat_map(|u| {
                self.network
                    .arcs_of(u)
                    .iter()
                    .filter(|arc| arc.flow > C::zero())
                    .map(move |arc| ArcFlow {
                        from: u,
                        to: arc.to,
                        flow: arc.flow,
                        capacity: arc.capacity,
                    })
            })
            .collect()
    }

    /// The source side of a minimum cut: all nodes still reachable from the source in the
    /// residual network
    pub fn min_cut(&self) -> MinCut {
        MinCut {
            source_side: self.network.reachable_from(self.source),
        }
    }

    /// Sum of the capacities of all edges leaving the source side of [`MaxFlow::min_cut`].
    /// Equals [`MaxFlow::value`].
    pub fn cut_capacity(&self) -> C {
        let cut = self.min_cut();
        cut.source_side
            .iter_set_bits()
            .flat_map(|u| self.network.arcs_of(u))
            .filter(|arc| !cut.contains(arc.to))
            .fold(C::zero(), |acc, arc| acc + arc.capacity)
    }
}

/// Source side of an `s-t` cut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    source_side: NodeBitSet,
}

impl MinCut {
    /// Returns *true* if `u` is on the source side
    pub fn contains(&self, u: Node) -> bool {
        self.source_side.get_bit(u)
    }

    /// Nodes on the source side in increasing order
    pub fn source_side(&self) -> Vec<Node> {
        self.source_side.iter_set_bits().collect()
    }

    /// Number of nodes on the source side
    pub fn len(&self) -> NumNodes {
        self.source_side.cardinality()
    }

    pub fn is_empty(&self) -> bool {
        self.source_side.is_empty()
    }

    pub fn as_bitset(&self) -> &NodeBitSet {
        &self.source_side
    }
}
