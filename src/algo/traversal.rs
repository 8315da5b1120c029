/*!
Graph traversal iterators and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking), optionally
  started from several nodes at once.
- [`TraversalTree`], which turns a traversal with predecessors into parent or depth arrays.
- A high-level [`Traversal`] trait that exposes the searches directly as methods on graphs.

Traversals ignore weights; they follow every arc returned by
[`WeightedAdjacencyList::neighbors_of`]. Views such as the residual graph of a flow network only
report arcs that are currently usable, so the same searches compute layerings and cuts there.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Access to the graph an iterator works on
pub trait WithGraphRef<G> {
    fn graph_ref(&self) -> &G;
}

/// Abstraction for items yielded by a traversal iterator.
///
/// Either a plain [`Node`] or a [`PredecessorOfNode`], which additionally carries the node
/// from which the item was discovered.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; a start node is encoded as `(u, u)`.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Frontier of a traversal. A queue yields BFS, a stack yields DFS.
pub trait NodeSequencer<T> {
    /// Creates an empty frontier
    fn empty() -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn empty() -> Self {
        VecDeque::new()
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Every node is yielded at most once; it is marked visited when it enters the frontier.
pub struct TraversalSearch<'a, G, S, I>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A DFS traversal iterator over the graph
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A DFS traversal iterator that records predecessor information
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> WithGraphRef<G> for TraversalSearch<'_, G, S, I>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self::from_starts(graph, [start])
    }

    /// Creates a traversal that starts from all given nodes simultaneously.
    /// Duplicates are ignored; the start nodes are yielded first, in the given order for BFS.
    pub fn from_starts<N>(graph: &'a G, starts: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        let mut search = Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            sequencer: S::empty(),
            stop_at: None,
            _item: PhantomData,
        };
        for u in starts {
            if !search.visited.set_bit(u) {
                search.sequencer.push(I::new_without_predecessor(u));
            }
        }
        search
    }

    /// Returns *true* if `u` has already been discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Returns the set of nodes discovered so far
    pub fn visited(&self) -> &NodeBitSet {
        &self.visited
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a node from the search: it is treated as if it was already visited.
    /// Has no effect on nodes already in the frontier, so call it directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    /// Builder variant of [`TraversalSearch::exclude_node`]
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.exclude_node(u);
        self
    }

    /// Consumes the traversal and returns the set of all nodes it visits
    pub fn into_visited(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.visited
    }

    /// Consumes the traversal search and returns true iff `u` is reached
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        self.any(|v| v.item() == u)
    }
}

/// Extension trait for traversal iterators yielding [`PredecessorOfNode`], which extracts the
/// implied search tree.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + WeightedAdjacencyList,
{
    /// Consumes the iterator and sets `tree[v]` to the predecessor of every visited node `v`.
    /// Unvisited entries remain unchanged.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Returns a parent array where unvisited nodes and roots are their own parent
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Consumes the iterator and computes the depth of each visited node (roots at depth 0).
    /// Unvisited entries remain unchanged.
    ///
    /// For a BFS this is the number of arcs on a shortest path from the start nodes.
    fn depths_into(&mut self, depths: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
    }

    /// Returns the depth of every node; unvisited nodes get [`INVALID_NODE`]
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedAdjArray::from_edges(4, [(0, 1, 5i32), (1, 2, 5), (0, 2, 9)]);
    ///
    /// let depths = g.bfs_with_predecessor(0).depths();
    /// assert_eq!(depths, vec![0, 1, 1, INVALID_NODE]);
    /// ```
    fn depths(&mut self) -> Vec<Node> {
        let mut depths: Vec<_> = vec![INVALID_NODE; self.graph_ref().len()];
        self.depths_into(&mut depths);
        depths
    }
}

impl<'a, G, S> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode>
where
    G: WeightedAdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
{
}

/// Provides convenient traversal methods on every graph
pub trait Traversal: WeightedAdjacencyList {
    /// Nodes reachable from `start` in breadth-first order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = WeightedAdjArray::from_edges(3, [(0, 1, 1i32), (1, 2, 1)]);
    /// assert_eq!(g.bfs(0).collect::<Vec<_>>(), vec![0, 1, 2]);
    /// assert_eq!(g.bfs(1).collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Nodes reachable from `start` in depth-first order.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Nodes reachable from any of the `starts` in depth-first order.
    fn dfs_from_many<N>(&self, starts: N) -> DFS<'_, Self>
    where
        N: IntoIterator<Item = Node>,
    {
        DFS::from_starts(self, starts)
    }

    /// BFS from `start` that additionally yields the predecessor of every node
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// DFS from `start` that additionally yields the predecessor of every node
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns the set of nodes reachable from `start` (including `start`)
    fn reachable_set(&self, start: Node) -> NodeBitSet {
        self.bfs(start).into_visited()
    }

    /// Returns *true* if there is a directed path from `u` to `v`
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        u == v || self.bfs(u).is_node_reachable(v)
    }
}

impl<G> Traversal for G where G: WeightedAdjacencyList {}
