//! Set-like views over the vertices and edges of a [`Graph`], and detached cursors.
//!
//! [`Graph::vertices`] and [`Graph::edges`] borrow the graph immutably, their `_mut`
//! counterparts borrow it mutably and are the only public way to change the structure.
//! While a view or one of its iterators is alive the borrow checker rules out any
//! concurrent mutation.
//!
//! [`VertexCursor`] and [`EdgeCursor`] hold no borrow at all. They remember the mutation
//! version of the graph they were created from and every step re-checks it, failing with
//! [`Error::ConcurrentModification`] once the graph has changed.

use std::hash::{BuildHasher, Hash};

use crate::{
    graph::{
        base::Graph,
        edge::Edge,
        traits::{SetView, SetViewMut},
    },
    Error, Result,
};

/// Read-only view over the vertex set of a graph.
pub struct VertexSet<'g, V, S> {
    graph: &'g Graph<V, S>,
}

/// Mutable view over the vertex set of a graph.
///
/// Removing a vertex also removes every edge incident to it.
pub struct VertexSetMut<'g, V, S> {
    graph: &'g mut Graph<V, S>,
}

/// Read-only view over the edge set of a graph.
pub struct EdgeSet<'g, V, S> {
    graph: &'g Graph<V, S>,
}

/// Mutable view over the edge set of a graph.
///
/// Adding an edge registers missing endpoints. Removing edges, including
/// [`clear`](SetViewMut::clear), never removes a vertex.
pub struct EdgeSetMut<'g, V, S> {
    graph: &'g mut Graph<V, S>,
}

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a read-only view over the vertices.
    #[must_use]
    pub fn vertices(&self) -> VertexSet<'_, V, S> {
        VertexSet { graph: self }
    }

    /// Returns a mutable view over the vertices.
    pub fn vertices_mut(&mut self) -> VertexSetMut<'_, V, S> {
        VertexSetMut { graph: self }
    }

    /// Returns a read-only view over the edges.
    #[must_use]
    pub fn edges(&self) -> EdgeSet<'_, V, S> {
        EdgeSet { graph: self }
    }

    /// Returns a mutable view over the edges.
    pub fn edges_mut(&mut self) -> EdgeSetMut<'_, V, S> {
        EdgeSetMut { graph: self }
    }

    /// Creates a cursor over the vertices that does not borrow the graph.
    #[must_use]
    pub fn vertex_cursor(&self) -> VertexCursor {
        VertexCursor {
            version: self.version,
            position: 0,
        }
    }

    /// Creates a cursor over the edges that does not borrow the graph.
    #[must_use]
    pub fn edge_cursor(&self) -> EdgeCursor {
        EdgeCursor {
            version: self.version,
            row: 0,
            column: 0,
        }
    }
}

impl<'g, V, S> VertexSet<'g, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Iterates the vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &'g V> + 'g {
        self.graph.store.vertices()
    }
}

impl<V, S> SetView for VertexSet<'_, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Item = V;

    fn len(&self) -> usize {
        self.graph.order()
    }

    fn contains(&self, item: &V) -> bool {
        self.graph.contains_vertex(item)
    }
}

impl<'g, V, S> IntoIterator for VertexSet<'g, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Item = &'g V;
    type IntoIter = indexmap::map::Keys<'g, V, Option<indexmap::IndexSet<V, S>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.graph.store.vertices()
    }
}

impl<V, S> VertexSetMut<'_, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Iterates the vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.graph.store.vertices()
    }
}

impl<V, S> SetView for VertexSetMut<'_, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Item = V;

    fn len(&self) -> usize {
        self.graph.order()
    }

    fn contains(&self, item: &V) -> bool {
        self.graph.contains_vertex(item)
    }
}

impl<V, S> SetViewMut for VertexSetMut<'_, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn add(&mut self, item: V) -> bool {
        self.graph.insert_vertex(item)
    }

    fn remove(&mut self, item: &V) -> bool {
        self.graph.remove_vertex(item)
    }

    fn clear(&mut self) {
        self.graph.clear();
    }
}

impl<'g, V, S> EdgeSet<'g, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Iterates the edges, grouped by source vertex in insertion order.
    ///
    /// Undirected edges are yielded once, in the orientation they were added with.
    pub fn iter(&self) -> impl Iterator<Item = Edge<&'g V>> + 'g {
        self.graph.store.entries().map(Edge::from)
    }
}

impl<V, S> SetView for EdgeSet<'_, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Item = Edge<V>;

    fn len(&self) -> usize {
        self.graph.size()
    }

    fn contains(&self, item: &Edge<V>) -> bool {
        self.graph.contains_edge(&item.from, &item.to)
    }
}

impl<V, S> EdgeSetMut<'_, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Iterates the edges, grouped by source vertex in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Edge<&V>> + '_ {
        self.graph.store.entries().map(Edge::from)
    }
}

impl<V, S> SetView for EdgeSetMut<'_, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Item = Edge<V>;

    fn len(&self) -> usize {
        self.graph.size()
    }

    fn contains(&self, item: &Edge<V>) -> bool {
        self.graph.contains_edge(&item.from, &item.to)
    }
}

impl<V, S> SetViewMut for EdgeSetMut<'_, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn add(&mut self, item: Edge<V>) -> bool {
        self.graph.insert_edge(item.from, item.to)
    }

    fn remove(&mut self, item: &Edge<V>) -> bool {
        self.graph.remove_edge(&item.from, &item.to)
    }

    fn clear(&mut self) {
        self.graph.clear_edges();
    }
}

/// Detached enumeration of a graph's vertices.
///
/// A cursor remembers only the version and position it has reached, not the graph it
/// came from. Passing a different graph at the same version, such as an unmodified clone,
/// is not detected and continues the enumeration over that graph.
///
/// # Examples
///
/// ```rust
/// use topograph::{Error, Graph, SetViewMut};
///
/// let mut graph: Graph<u32> = Graph::new();
/// graph.vertices_mut().add(1);
/// graph.vertices_mut().add(2);
///
/// let mut cursor = graph.vertex_cursor();
/// assert_eq!(cursor.next(&graph)?, Some(&1));
///
/// graph.vertices_mut().add(3);
/// assert!(matches!(
///     cursor.next(&graph),
///     Err(Error::ConcurrentModification { .. })
/// ));
/// # Ok::<(), topograph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct VertexCursor {
    version: u64,
    position: usize,
}

impl VertexCursor {
    /// Returns the next vertex, or `None` once every vertex was visited.
    ///
    /// # Errors
    /// Returns [`Error::ConcurrentModification`] if `graph` changed since the cursor was
    /// created.
    pub fn next<'g, V, S>(&mut self, graph: &'g Graph<V, S>) -> Result<Option<&'g V>>
    where
        V: Eq + Hash + Clone,
        S: BuildHasher + Clone,
    {
        check_version(self.version, graph.version)?;
        let vertex = graph.store.vertex_at(self.position);
        if vertex.is_some() {
            self.position += 1;
        }
        Ok(vertex)
    }
}

/// Detached enumeration of a graph's edges.
///
/// Edges are visited row by row in vertex insertion order. Like [`VertexCursor`], the
/// cursor is not bound to the graph it came from; only the version is checked.
#[derive(Debug, Clone)]
pub struct EdgeCursor {
    version: u64,
    row: usize,
    column: usize,
}

impl EdgeCursor {
    /// Returns the next edge, or `None` once every edge was visited.
    ///
    /// # Errors
    /// Returns [`Error::ConcurrentModification`] if `graph` changed since the cursor was
    /// created.
    pub fn next<'g, V, S>(&mut self, graph: &'g Graph<V, S>) -> Result<Option<Edge<&'g V>>>
    where
        V: Eq + Hash + Clone,
        S: BuildHasher + Clone,
    {
        check_version(self.version, graph.version)?;
        while let Some((from, row)) = graph.store.row_at(self.row) {
            if let Some(to) = row.and_then(|row| row.get_index(self.column)) {
                self.column += 1;
                return Ok(Some(Edge::new(from, to)));
            }
            self.row += 1;
            self.column = 0;
        }
        Ok(None)
    }
}

fn check_version(expected: u64, found: u64) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::ConcurrentModification { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_graph() -> Graph<char> {
        let mut graph = Graph::new();
        graph.edges_mut().add(Edge::new('a', 'b'));
        graph.edges_mut().add(Edge::new('a', 'c'));
        graph.edges_mut().add(Edge::new('c', 'd'));
        graph
    }

    #[test]
    fn test_vertex_view() {
        let graph = create_graph();
        let vertices = graph.vertices();
        assert_eq!(vertices.len(), 4);
        assert!(vertices.contains(&'d'));
        assert!(!vertices.contains(&'z'));
        assert_eq!(vertices.iter().copied().collect::<String>(), "abcd");
        assert_eq!(graph.vertices().into_iter().count(), 4);
    }

    #[test]
    fn test_vertex_view_mut() {
        let mut graph = create_graph();
        let mut vertices = graph.vertices_mut();
        assert!(vertices.add('e'));
        assert!(!vertices.add('e'));
        assert!(vertices.remove(&'c'));
        assert!(!vertices.remove(&'c'));
        assert_eq!(vertices.len(), 4);
        assert_eq!(graph.size(), 1);

        graph.vertices_mut().clear();
        assert!(graph.vertices().is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_edge_view() {
        let graph = create_graph();
        let edges = graph.edges();
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&Edge::new('a', 'c')));
        assert!(!edges.contains(&Edge::new('c', 'a')));
        let listed: Vec<_> = edges.iter().map(Edge::cloned).collect();
        assert_eq!(
            listed,
            vec![Edge::new('a', 'b'), Edge::new('a', 'c'), Edge::new('c', 'd')]
        );
    }

    #[test]
    fn test_edge_view_mut_keeps_vertices() {
        let mut graph = create_graph();
        let mut edges = graph.edges_mut();
        assert!(!edges.add(Edge::new('a', 'b')));
        assert!(edges.remove(&Edge::new('c', 'd')));
        assert!(!edges.remove(&Edge::new('c', 'd')));
        assert_eq!(edges.len(), 2);
        edges.clear();
        assert!(edges.is_empty());
        assert_eq!(graph.order(), 4);
    }

    #[test]
    fn test_undirected_edge_view() {
        let mut graph: Graph<u8> = Graph::new_undirected();
        assert!(graph.edges_mut().add(Edge::new(1, 2)));
        assert!(!graph.edges_mut().add(Edge::new(2, 1)));
        assert!(graph.edges().contains(&Edge::new(2, 1)));
        assert!(graph.edges_mut().remove(&Edge::new(2, 1)));
        assert_eq!(graph.order(), 2);
    }

    #[test]
    fn test_vertex_cursor() {
        let graph = create_graph();
        let mut cursor = graph.vertex_cursor();
        let mut seen = Vec::new();
        while let Some(vertex) = cursor.next(&graph).unwrap() {
            seen.push(*vertex);
        }
        assert_eq!(seen, vec!['a', 'b', 'c', 'd']);
        assert_eq!(cursor.next(&graph).unwrap(), None);
    }

    #[test]
    fn test_edge_cursor() {
        let graph = create_graph();
        let mut cursor = graph.edge_cursor();
        let mut seen = Vec::new();
        while let Some(edge) = cursor.next(&graph).unwrap() {
            seen.push(edge.cloned());
        }
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], Edge::new('c', 'd'));
    }

    #[test]
    fn test_cursor_detects_modification() {
        let mut graph = create_graph();
        let mut cursor = graph.edge_cursor();
        assert!(cursor.next(&graph).unwrap().is_some());

        graph.edges_mut().remove(&Edge::new('a', 'c'));
        let err = cursor.next(&graph).unwrap_err();
        assert_eq!(
            err,
            Error::ConcurrentModification {
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn test_cursor_checks_version_only() {
        let graph = create_graph();
        let copy = graph.clone();
        assert_eq!(copy.version(), graph.version());

        let mut cursor = graph.vertex_cursor();
        assert!(cursor.next(&graph).unwrap().is_some());
        assert!(cursor.next(&copy).unwrap().is_some());

        let mut edited = graph.clone();
        edited.vertices_mut().add('z');
        assert!(matches!(
            cursor.next(&edited),
            Err(Error::ConcurrentModification { .. })
        ));
    }

    #[test]
    fn test_noop_mutation_keeps_cursor_valid() {
        let mut graph = create_graph();
        let mut cursor = graph.vertex_cursor();
        graph.vertices_mut().add('a');
        assert_eq!(cursor.next(&graph).unwrap(), Some(&'a'));
    }
}
