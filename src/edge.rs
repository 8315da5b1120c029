use std::fmt::{Debug, Display};

use crate::{Node, Weight};

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
/// CHANGE it to `u64` if this does not suffice (which it usually should).
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A directed edge `from -> to` carrying a weight (length, cost or capacity).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WeightedEdge<W> {
    pub from: Node,
    pub to: Node,
    pub weight: W,
}

impl<W: Weight> WeightedEdge<W> {
    pub fn new(from: Node, to: Node, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.from, self.to)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        let Edge(from, to) = self.edge().normalized();
        Self::new(from, to, self.weight)
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{})", self.from, self.to, self.weight)
    }
}

impl<W: Weight> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl<W: Weight> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

impl<W: Weight> From<&WeightedEdge<W>> for WeightedEdge<W> {
    fn from(value: &WeightedEdge<W>) -> Self {
        *value
    }
}

/// A directed edge of a time table: it can be used at times
/// `first_departure, first_departure + period, first_departure + 2 * period, ...`
/// (only once at `first_departure` if `period == 0`) and takes `duration` to traverse.
/// Periods and durations must be non-negative.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TimetableEdge<W> {
    pub from: Node,
    pub to: Node,
    pub first_departure: W,
    pub period: W,
    pub duration: W,
}

impl<W: Weight> TimetableEdge<W> {
    pub fn new(from: Node, to: Node, first_departure: W, period: W, duration: W) -> Self {
        Self {
            from,
            to,
            first_departure,
            period,
            duration,
        }
    }
}

impl<W: Weight> From<(Node, Node, W, W, W)> for TimetableEdge<W> {
    fn from(value: (Node, Node, W, W, W)) -> Self {
        TimetableEdge::new(value.0, value.1, value.2, value.3, value.4)
    }
}

impl<W: Weight> From<&(Node, Node, W, W, W)> for TimetableEdge<W> {
    fn from(value: &(Node, Node, W, W, W)) -> Self {
        TimetableEdge::new(value.0, value.1, value.2, value.3, value.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(Edge(1, 2).reverse(), Edge(2, 1));

        let e = WeightedEdge::new(5, 2, -7i32);
        assert_eq!(e.normalized(), WeightedEdge::new(2, 5, -7));
        assert_eq!(e.edge(), Edge(5, 2));
        assert_eq!(e.to_string(), "(5,2;-7)");
    }
}
