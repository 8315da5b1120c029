use std::cmp::Ordering;

use crate::*;

/// Disjoint sets over the nodes `0..n` (union-find).
///
/// `find` compresses paths fully and `union` links by rank, so every operation runs in
/// amortized inverse-Ackermann time. Sets can only be merged, never split.
///
/// ```
/// use wgraphs::utils::DisjointSets;
///
/// let mut sets = DisjointSets::new(5);
/// sets.union(0, 1);
/// sets.union(1, 2);
///
/// assert!(sets.same(0, 2));
/// assert!(!sets.same(0, 3));
/// assert_eq!(sets.number_of_sets(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSets {
    parent: Vec<Node>,
    rank: Vec<u8>,
    number_of_sets: NumNodes,
}

impl DisjointSets {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            number_of_sets: n,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.number_of_sets
    }

    /// Returns the representative of the set containing `x`.
    /// Afterwards every node on the path from `x` to its root points to the root directly.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut u = x;
        while u != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y` and returns *true* if they were different.
    ///
    /// The root of lower rank is attached to the other one; on equal ranks the smaller node
    /// stays root and its rank grows by one.
    /// ** Panics if `x >= n || y >= n` **
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        let (root, child) = match self.rank[rx as usize].cmp(&self.rank[ry as usize]) {
            Ordering::Less => (ry, rx),
            Ordering::Greater => (rx, ry),
            Ordering::Equal => {
                let (root, child) = if rx < ry { (rx, ry) } else { (ry, rx) };
                self.rank[root as usize] += 1;
                (root, child)
            }
        };

        self.parent[child as usize] = root;
        self.number_of_sets -= 1;
        true
    }

    /// Returns *true* if `x` and `y` are in the same set
    /// ** Panics if `x >= n || y >= n` **
    pub fn same(&mut self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn singletons() {
        let mut sets = DisjointSets::new(4);
        assert_eq!(sets.len(), 4);
        assert_eq!(sets.number_of_sets(), 4);
        for u in 0..4 {
            assert_eq!(sets.find(u), u);
        }
        assert!(DisjointSets::new(0).is_empty());
    }

    #[test]
    fn union_and_same() {
        let mut sets = DisjointSets::new(5);
        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(!sets.union(2, 0));

        assert!(sets.same(0, 2));
        assert!(!sets.same(0, 3));
        assert!(sets.same(4, 4));
        assert_eq!(sets.number_of_sets(), 3);
    }

    #[test]
    fn union_by_rank() {
        let mut sets = DisjointSets::new(6);
        sets.union(3, 4); // tie: 3 becomes root with rank 1
        assert_eq!(sets.find(4), 3);

        sets.union(5, 4); // 5 has rank 0 and goes below 3
        assert_eq!(sets.find(5), 3);

        sets.union(0, 1);
        sets.union(1, 3); // tie of ranks 1: 0 becomes root
        assert_eq!(sets.find(5), 0);
        assert_eq!(sets.rank[0], 2);
    }

    #[test]
    fn full_path_compression() {
        let mut sets = DisjointSets::new(4);
        // build the chain 3 -> 2 -> 1 -> 0 by hand
        sets.parent = vec![0, 0, 1, 2];

        assert_eq!(sets.find(3), 0);
        assert_eq!(sets.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn matches_connectivity() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x0f1d);
        for _ in 0..100 {
            let n: Node = rng.random_range(1..30);
            let mut sets = DisjointSets::new(n);
            let mut component: Vec<Node> = (0..n).collect();

            for _ in 0..rng.random_range(0..2 * n) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);

                let (cu, cv) = (component[u as usize], component[v as usize]);
                assert_eq!(sets.union(u, v), cu != cv);
                for c in component.iter_mut() {
                    if *c == cv {
                        *c = cu;
                    }
                }
            }

            for u in 0..n {
                for v in 0..n {
                    assert_eq!(sets.same(u, v), component[u as usize] == component[v as usize]);
                }
            }

            let mut labels = component.clone();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(sets.number_of_sets() as usize, labels.len());
        }
    }
}
