//! Traits shared by graph views and traversal algorithms.
//!
//! Two families live here:
//!
//! - [`SetView`] / [`SetViewMut`] describe the set-like facades returned by
//!   [`Graph::vertices`](crate::Graph::vertices) and [`Graph::edges`](crate::Graph::edges)
//!   (and their `_mut` counterparts). Both views implement the same trait independently.
//! - [`GraphBase`], [`Successors`] and [`Predecessors`] are the minimal adjacency
//!   interface the traversal algorithms are written against. Besides `&Graph`, the
//!   adapters [`Transposed`] and [`Neighborhood`] implement them, which lets a single
//!   depth-first search walk incoming edges or ignore edge direction entirely.

use std::hash::Hash;

/// Read-only set semantics over a graph component.
pub trait SetView {
    /// Element type of the set
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `item` is a member of the set.
    fn contains(&self, item: &Self::Item) -> bool;
}

/// Mutable set semantics over a graph component.
///
/// Every mutating call reports whether the graph actually changed. Adding a member that
/// is already present or removing one that is absent is not an error.
pub trait SetViewMut: SetView {
    /// Adds `item`, returning `true` if it was not present.
    fn add(&mut self, item: Self::Item) -> bool;

    /// Removes `item`, returning `true` if it was present.
    fn remove(&mut self, item: &Self::Item) -> bool;

    /// Removes every element.
    fn clear(&mut self);
}

/// Core graph interface: the vertex type and the vertex count.
pub trait GraphBase {
    /// Vertex type of the graph
    type Vertex: Eq + Hash;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;
}

/// Graph handles that can enumerate the direct successors of a vertex.
///
/// Implemented by cheap copyable handles such as `&'g Graph` or [`Transposed`] so that
/// traversals can own their handle while yielding vertices borrowed for `'g`.
pub trait Successors<'g>: GraphBase + Copy + 'g {
    /// Iterates the vertices reachable from `vertex` over a single edge.
    ///
    /// Unknown vertices have no successors.
    fn successors(self, vertex: &'g Self::Vertex) -> impl Iterator<Item = &'g Self::Vertex> + 'g;
}

/// Graph handles that can enumerate the direct predecessors of a vertex.
pub trait Predecessors<'g>: GraphBase + Copy + 'g {
    /// Iterates the vertices with an edge pointing at `vertex`.
    ///
    /// Unknown vertices have no predecessors.
    fn predecessors(
        self,
        vertex: &'g Self::Vertex,
    ) -> impl Iterator<Item = &'g Self::Vertex> + 'g;
}

/// Adapter that reverses every edge of the wrapped graph.
#[derive(Debug, Clone, Copy)]
pub struct Transposed<G>(pub G);

impl<G: GraphBase> GraphBase for Transposed<G> {
    type Vertex = G::Vertex;

    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }
}

impl<'g, G: Predecessors<'g>> Successors<'g> for Transposed<G> {
    fn successors(self, vertex: &'g Self::Vertex) -> impl Iterator<Item = &'g Self::Vertex> + 'g {
        self.0.predecessors(vertex)
    }
}

impl<'g, G: Successors<'g>> Predecessors<'g> for Transposed<G> {
    fn predecessors(
        self,
        vertex: &'g Self::Vertex,
    ) -> impl Iterator<Item = &'g Self::Vertex> + 'g {
        self.0.successors(vertex)
    }
}

/// Adapter that treats every edge of the wrapped graph as undirected.
///
/// Successors and predecessors of a vertex are both its full neighborhood. A vertex
/// connected in both directions may be yielded twice.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood<G>(pub G);

impl<G: GraphBase> GraphBase for Neighborhood<G> {
    type Vertex = G::Vertex;

    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }
}

impl<'g, G: Successors<'g> + Predecessors<'g>> Successors<'g> for Neighborhood<G> {
    fn successors(self, vertex: &'g Self::Vertex) -> impl Iterator<Item = &'g Self::Vertex> + 'g {
        self.0
            .successors(vertex)
            .chain(self.0.predecessors(vertex))
    }
}

impl<'g, G: Successors<'g> + Predecessors<'g>> Predecessors<'g> for Neighborhood<G> {
    fn predecessors(
        self,
        vertex: &'g Self::Vertex,
    ) -> impl Iterator<Item = &'g Self::Vertex> + 'g {
        self.successors(vertex)
    }
}
