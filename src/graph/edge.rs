//! Edge representation and directionality-aware edge equality.
//!
//! This module provides the [`Edge`] type, an ordered pair of vertices, and the
//! [`EdgeComparer`] which decides whether two edges denote the same connection.
//!
//! `Edge` itself always compares orientation-sensitively through its derived
//! [`PartialEq`] and [`Hash`](std::hash::Hash) implementations. Graphs choose an
//! [`EdgeComparer`] at construction time: directed graphs use [`EdgeComparer::Directed`],
//! undirected graphs use [`EdgeComparer::Undirected`], under which `(a, b)` and `(b, a)`
//! are equal. Edge lookup and removal resolve the stored orientation through the graph's
//! comparer.

use std::fmt;

/// A connection between two vertices.
///
/// For directed graphs the edge runs from [`from`](Edge::from) to [`to`](Edge::to). For
/// undirected graphs the orientation is only the one the edge was stored under.
///
/// # Examples
///
/// ```rust
/// use topograph::Edge;
///
/// let edge = Edge::new("a", "b");
/// assert_eq!(edge.from, "a");
/// assert_eq!(edge.to, "b");
/// assert_eq!(edge.reverse(), Edge::new("b", "a"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Edge<V> {
    /// Source vertex
    pub from: V,
    /// Destination vertex
    pub to: V,
}

impl<V> Edge<V> {
    /// Creates a new edge from `from` to `to`.
    #[must_use]
    #[inline]
    pub const fn new(from: V, to: V) -> Self {
        Edge { from, to }
    }

    /// Returns the edge with its endpoints swapped.
    #[must_use]
    #[inline]
    pub fn reverse(self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns an edge borrowing both endpoints.
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Edge<&V> {
        Edge {
            from: &self.from,
            to: &self.to,
        }
    }

    /// Returns `true` if the edge connects a vertex to itself.
    #[must_use]
    pub fn is_loop(&self) -> bool
    where
        V: PartialEq,
    {
        self.from == self.to
    }
}

impl<V: Clone> Edge<&V> {
    /// Clones both endpoints into an owned edge.
    #[must_use]
    pub fn cloned(self) -> Edge<V> {
        Edge {
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

impl<V> From<(V, V)> for Edge<V> {
    #[inline]
    fn from((from, to): (V, V)) -> Self {
        Edge { from, to }
    }
}

impl<V> From<Edge<V>> for (V, V) {
    #[inline]
    fn from(edge: Edge<V>) -> Self {
        (edge.from, edge.to)
    }
}

impl<V: fmt::Debug> fmt::Debug for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.from, self.to)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

/// Directionality-aware equality for edges.
///
/// The comparer is selected from the graph's directedness and never changes for the
/// lifetime of a graph.
///
/// # Examples
///
/// ```rust
/// use topograph::{Edge, EdgeComparer};
///
/// let ab = Edge::new(1, 2);
/// let ba = Edge::new(2, 1);
///
/// assert!(!EdgeComparer::Directed.equals(&ab, &ba));
/// assert!(EdgeComparer::Undirected.equals(&ab, &ba));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum EdgeComparer {
    /// `(a, b)` and `(b, a)` are distinct edges
    Directed,
    /// `(a, b)` and `(b, a)` denote the same edge
    Undirected,
}

impl EdgeComparer {
    /// Returns the comparer matching the given directedness.
    #[must_use]
    pub const fn for_directed(directed: bool) -> Self {
        if directed {
            EdgeComparer::Directed
        } else {
            EdgeComparer::Undirected
        }
    }

    /// Returns `true` if both edges denote the same connection under this comparer.
    #[must_use]
    pub fn equals<V: PartialEq>(self, a: &Edge<V>, b: &Edge<V>) -> bool {
        match self {
            EdgeComparer::Directed => a.from == b.from && a.to == b.to,
            EdgeComparer::Undirected => {
                (a.from == b.from && a.to == b.to) || (a.from == b.to && a.to == b.from)
            }
        }
    }

    /// Finds the stored orientation of `edge`.
    ///
    /// `is_stored` answers whether an exact `(from, to)` entry exists. The given
    /// orientation is tried first, then every other orientation this comparer treats as
    /// equal.
    pub(crate) fn locate<'v, V: PartialEq>(
        self,
        edge: Edge<&'v V>,
        mut is_stored: impl FnMut(&V, &V) -> bool,
    ) -> Option<Edge<&'v V>> {
        if is_stored(edge.from, edge.to) {
            return Some(edge);
        }
        let reversed = edge.reverse();
        let found = reversed != edge
            && self.equals(&edge, &reversed)
            && is_stored(reversed.from, reversed.to);
        found.then_some(reversed)
    }
}
