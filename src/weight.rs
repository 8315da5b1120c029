/*!
# Weights and Distances

Edge weights, capacities and travel times are all modelled by the same [`Weight`] trait: a signed
primitive integer. Signedness is required for Bellman-Ford/Floyd-Warshall (negative weights) and
for the residual network (the flow on a backward arc is the negation of its forward flow).

The outcome of a shortest-path query is a [`Distance`], which keeps the two "no number" cases
apart: a node may be [`Distance::Unreachable`] (no path at all) or [`Distance::Unbounded`]
(reachable through a negative cycle, so arbitrarily short paths exist).
*/

use std::fmt::{Debug, Display};

use num::{CheckedAdd, CheckedMul, PrimInt, Signed};

/// Numeric type usable as edge weight, capacity or time
pub trait Weight: PrimInt + Signed + CheckedAdd + CheckedMul + Debug + Display + Default {}

impl<W> Weight for W where W: PrimInt + Signed + CheckedAdd + CheckedMul + Debug + Display + Default {}

/// Shortest-path distance of a single node.
///
/// Ordered such that `Unbounded < Finite(_) < Unreachable`, i.e. a smaller value is always a
/// better (shorter) distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    /// Arbitrarily short paths exist due to a reachable negative cycle
    Unbounded,
    /// Length of a shortest path
    Finite(W),
    /// No path exists
    Unreachable,
}

impl<W> Default for Distance<W> {
    fn default() -> Self {
        Distance::Unreachable
    }
}

impl<W: Copy> Distance<W> {
    /// Returns the finite distance, or `None` for both sentinels
    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(d) => Some(d),
            _ => None,
        }
    }

    /// Returns *true* if the distance is a number
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns *true* if no path exists
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Returns *true* if the node is affected by a negative cycle
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Distance::Unbounded)
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl<W: Display> Display for Distance<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Unbounded => write!(f, "-inf"),
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_order() {
        let mut ds = vec![
            Distance::Unreachable,
            Distance::Finite(3i64),
            Distance::Unbounded,
            Distance::Finite(-2),
        ];
        ds.sort();
        assert_eq!(
            ds,
            vec![
                Distance::Unbounded,
                Distance::Finite(-2),
                Distance::Finite(3),
                Distance::Unreachable
            ]
        );
    }

    #[test]
    fn distance_accessors() {
        assert_eq!(Distance::Finite(0i32).finite(), Some(0));
        assert_eq!(Distance::<i32>::Unreachable.finite(), None);
        assert!(Distance::<i32>::Unbounded.is_unbounded());
        assert!(!Distance::<i32>::Unbounded.is_unreachable());
        assert_eq!(Distance::from(None::<i32>), Distance::Unreachable);
        assert_eq!(Distance::<i32>::default(), Distance::Unreachable);
        assert_eq!(Distance::Finite(-4i32).to_string(), "-4");
    }
}
