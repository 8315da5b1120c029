/*!
# Utilities

Data structures used by the algorithms that are not graphs themselves:
- [`DisjointSets`]: union-find over nodes, the backbone of Kruskal's algorithm.
*/

pub mod union_find;

pub use union_find::DisjointSets;
