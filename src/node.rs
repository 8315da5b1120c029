/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` in the per-node arrays every
algorithm keeps (distances, predecessors, levels, parents) and (2) directly index those arrays
with `u as usize`.
*/

use std::num::NonZero;

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since predecessor arrays are `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as the `None`-niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// Dense set of nodes `0..n`.
///
/// Thin wrapper around [`FixedBitSet`] that speaks [`Node`] instead of `usize`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct NodeBitSet(FixedBitSet);

impl NodeBitSet {
    /// Creates an empty bitset able to hold the nodes `0..n`
    pub fn new(n: NumNodes) -> Self {
        Self(FixedBitSet::with_capacity(n as usize))
    }

    /// Creates a bitset for `0..n` with exactly the given nodes set
    pub fn new_with_bits_set<I>(n: NumNodes, bits: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(n);
        set.set_bits(bits);
        set
    }

    /// Number of nodes this bitset can hold
    pub fn number_of_bits(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns *true* if `u` is contained
    /// ** Panics if `u >= n` **
    pub fn get_bit(&self, u: Node) -> bool {
        self.0[u as usize]
    }

    /// Inserts `u` and returns *true* if it was contained before
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.0.put(u as usize)
    }

    /// Inserts all given nodes
    pub fn set_bits<I>(&mut self, bits: I)
    where
        I: IntoIterator<Item = Node>,
    {
        for u in bits {
            self.set_bit(u);
        }
    }

    /// Removes `u` and returns *true* if it was contained before
    pub fn clear_bit(&mut self, u: Node) -> bool {
        let was_set = self.get_bit(u);
        self.0.set(u as usize, false);
        was_set
    }

    /// Removes all nodes
    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    /// Number of contained nodes
    pub fn cardinality(&self) -> NumNodes {
        self.0.count_ones(..) as NumNodes
    }

    /// Returns *true* if no node is contained
    pub fn is_empty(&self) -> bool {
        self.0.is_clear()
    }

    /// Iterates over all contained nodes in increasing order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.ones().map(|u| u as Node)
    }
}

impl std::fmt::Debug for NodeBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}
