use super::{macros::*, *};

/// An out-arc of a [`TimetableGraph`]; see [`TimetableEdge`] for the semantics of the fields.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TimetableArc<W> {
    pub to: Node,
    pub first_departure: W,
    pub period: W,
    pub duration: W,
}

impl<W: Weight> TimetableArc<W> {
    /// Returns the earliest departure time `>= arrival` at which this arc can be taken, or
    /// `None` if the arc has no further departures.
    ///
    /// Departures form the arithmetic sequence `first_departure + k * period` for `k >= 0`;
    /// if `period <= 0` the only departure is `first_departure`.
    ///
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let arc = TimetableArc { to: 1, first_departure: 10i64, period: 7, duration: 3 };
    /// assert_eq!(arc.next_departure(4), Some(10));
    /// assert_eq!(arc.next_departure(17), Some(17));
    /// assert_eq!(arc.next_departure(18), Some(24));
    /// ```
    pub fn next_departure(&self, arrival: W) -> Option<W> {
        next_departure(arrival, self.first_departure, self.period)
    }
}

/// Earliest element of `first, first + period, first + 2 * period, ...` that is `>= now`.
///
/// Periods must be non-negative; a negative period is treated like `0`, i.e. `first` is the only
/// departure. Returns `None` if that departure is already gone, or if any intermediate value
/// overflows `W`.
pub fn next_departure<W: Weight>(now: W, first: W, period: W) -> Option<W> {
    if now <= first {
        return Some(first);
    }
    if !period.is_positive() {
        return None;
    }

    let rem = now.checked_sub(&first)? % period;
    if rem.is_zero() {
        Some(now)
    } else {
        now.checked_add(&(period - rem))
    }
}

/// A directed graph whose arcs are only usable at scheduled departure times.
///
/// ```
/// use wgraphs::prelude::*;
///
/// let graph = TimetableGraph::from_edges(2, [(0, 1, 15i64, 10, 5)]);
/// assert_eq!(graph.number_of_edges(), 1);
/// assert_eq!(graph.arcs_of(0)[0].next_departure(16), Some(25));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TimetableGraph<W> {
    num_edges: NumEdges,
    arcs: Vec<Vec<TimetableArc<W>>>,
}

impl_common_graph_ops!(TimetableGraph<W> => arcs);

impl<W: Weight> TimetableGraph<W> {
    /// Creates a graph with `n` nodes and the given edges
    /// ** Panics if an endpoint is `>= n` **
    pub fn from_edges<I, E>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<TimetableEdge<W>>,
    {
        let mut graph = Self::new(n);
        for e in edges {
            graph.add_edge(e.into());
        }
        graph
    }

    /// Creates a graph with `n` nodes and the given edges, rejecting out-of-range endpoints and
    /// negative periods
    pub fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = E>,
        E: Into<TimetableEdge<W>>,
    {
        let mut graph = Self::new(n);
        for e in edges {
            graph.try_add_edge(e.into())?;
        }
        Ok(graph)
    }

    /// Adds a scheduled edge
    /// ** Panics if an endpoint is `>= n` **
    pub fn add_edge(&mut self, edge: TimetableEdge<W>) {
        assert!(edge.to < self.number_of_nodes());
        self.arcs[edge.from as usize].push(TimetableArc {
            to: edge.to,
            first_departure: edge.first_departure,
            period: edge.period,
            duration: edge.duration,
        });
        self.num_edges += 1;
    }

    /// Adds a scheduled edge after checking that both endpoints exist and that the period is
    /// non-negative
    pub fn try_add_edge(&mut self, edge: TimetableEdge<W>) -> Result<(), GraphError> {
        GraphError::check_node(edge.from, self.number_of_nodes())?;
        GraphError::check_node(edge.to, self.number_of_nodes())?;
        if edge.period.is_negative() {
            return Err(GraphError::NegativePeriod {
                from: edge.from,
                to: edge.to,
            });
        }
        self.add_edge(edge);
        Ok(())
    }

    /// Returns the out-arcs of `u` in insertion order
    /// ** Panics if `u >= n` **
    pub fn arcs_of(&self, u: Node) -> &[TimetableArc<W>] {
        &self.arcs[u as usize]
    }
}
