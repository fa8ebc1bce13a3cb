//! Path queries, connectivity and connected components.

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
    iter,
};

use crate::graph::{
    algorithms::traversal::{self, DepthFirst},
    base::Graph,
    edge::Edge,
    traits::{Neighborhood, Transposed},
};

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns `true` if the edge `from -> to` exists.
    #[must_use]
    pub fn has_direct_path(&self, from: &V, to: &V) -> bool {
        self.contains_edge(from, to)
    }

    /// Returns `true` if a path of two or more edges leads from `from` to `to`.
    #[must_use]
    pub fn has_transitive_path(&self, from: &V, to: &V) -> bool {
        traversal::has_transitive_path(self, from, to)
    }

    /// Returns `true` if any path leads from `from` to `to`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{Edge, Graph};
    ///
    /// let graph: Graph<char> = [Edge::new('a', 'b'), Edge::new('b', 'c')].into_iter().collect();
    /// assert!(graph.has_path(&'a', &'c'));
    /// assert!(!graph.has_path(&'c', &'a'));
    /// ```
    #[must_use]
    pub fn has_path(&self, from: &V, to: &V) -> bool {
        self.has_direct_path(from, to) || self.has_transitive_path(from, to)
    }

    /// Iterates every vertex reachable from `vertex` along edge direction, excluding
    /// `vertex` itself.
    pub fn outgoing_vertices_connected_with<'a>(
        &'a self,
        vertex: &'a V,
    ) -> impl Iterator<Item = &'a V> + 'a {
        DepthFirst::new(self, vertex)
    }

    /// Iterates every vertex from which `vertex` is reachable, excluding `vertex` itself.
    pub fn incoming_vertices_connected_with<'a>(
        &'a self,
        vertex: &'a V,
    ) -> impl Iterator<Item = &'a V> + 'a {
        DepthFirst::new(Transposed(self), vertex)
    }

    /// Iterates every vertex connected with `vertex` when edge direction is ignored,
    /// excluding `vertex` itself.
    pub fn vertices_connected_with<'a>(
        &'a self,
        vertex: &'a V,
    ) -> impl Iterator<Item = &'a V> + 'a {
        DepthFirst::new(Neighborhood(self), vertex)
    }

    /// Iterates the edges leaving `vertex` or any vertex reachable from it.
    ///
    /// For undirected graphs these are the edges of the component containing `vertex`.
    pub fn edges_connected_with<'a>(
        &'a self,
        vertex: &'a V,
    ) -> impl Iterator<Item = Edge<&'a V>> + 'a {
        iter::once(vertex)
            .chain(self.outgoing_vertices_connected_with(vertex))
            .flat_map(move |from| self.store.adjacent(from).map(move |to| Edge::new(from, to)))
    }

    /// Returns `true` if every vertex is reachable from every other vertex when edge
    /// direction is ignored. Graphs with at most one vertex are connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.cache
            .connected
            .get_or_compute(self.version, || match self.store.vertex_at(0) {
                Some(first) if self.order() > 1 => {
                    DepthFirst::new(Neighborhood(self), first).count() + 1 == self.order()
                }
                _ => true,
            })
    }

    /// Splits the graph into its weakly connected components.
    ///
    /// Components are ordered by their first vertex in insertion order; each keeps the
    /// graph's configuration.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Self> {
        let mut assigned: HashSet<&V> = HashSet::with_capacity(self.order());
        let mut components = Vec::new();
        for vertex in self.store.vertices() {
            if assigned.contains(vertex) {
                continue;
            }
            let members: Vec<&V> = iter::once(vertex)
                .chain(DepthFirst::new(Neighborhood(self), vertex))
                .collect();
            assigned.extend(members.iter().copied());
            components.push(self.get_subgraph(members.into_iter().cloned()));
        }
        components
    }
}

#[cfg(test)]
mod tests {
    use crate::{Edge, Graph, SetViewMut};

    fn create_forest() -> Graph<u8> {
        let mut graph: Graph<u8> = [
            Edge::new(1, 2),
            Edge::new(2, 3),
            Edge::new(4, 3),
            Edge::new(5, 6),
        ]
        .into_iter()
        .collect();
        graph.vertices_mut().add(7);
        graph
    }

    #[test]
    fn test_path_queries() {
        let graph = create_forest();
        assert!(graph.has_direct_path(&1, &2));
        assert!(!graph.has_direct_path(&1, &3));
        assert!(graph.has_transitive_path(&1, &3));
        assert!(graph.has_path(&1, &3));
        assert!(!graph.has_path(&3, &1));
        assert!(!graph.has_path(&1, &4));
        assert!(!graph.has_path(&1, &99));
    }

    #[test]
    fn test_connected_with() {
        let graph = create_forest();
        let outgoing: Vec<_> = graph.outgoing_vertices_connected_with(&1).copied().collect();
        assert_eq!(outgoing, vec![2, 3]);

        let mut incoming: Vec<_> = graph.incoming_vertices_connected_with(&3).copied().collect();
        incoming.sort_unstable();
        assert_eq!(incoming, vec![1, 2, 4]);

        let mut all: Vec<_> = graph.vertices_connected_with(&4).copied().collect();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3]);

        assert_eq!(graph.vertices_connected_with(&7).count(), 0);
    }

    #[test]
    fn test_edges_connected_with() {
        let graph = create_forest();
        let edges: Vec<_> = graph.edges_connected_with(&1).map(Edge::cloned).collect();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(2, 3)]);
        assert_eq!(graph.edges_connected_with(&3).count(), 0);
    }

    #[test]
    fn test_undirected_reachability() {
        let mut graph: Graph<u8> = Graph::new_undirected();
        graph.edges_mut().add(Edge::new(1, 2));
        graph.edges_mut().add(Edge::new(3, 2));

        assert!(graph.has_path(&3, &1));
        assert!(graph.has_transitive_path(&1, &3));
        assert!(!graph.has_transitive_path(&1, &2));
        assert_eq!(graph.outgoing_vertices_connected_with(&1).count(), 2);
        assert_eq!(graph.edges_connected_with(&3).count(), 2);
    }

    #[test]
    fn test_is_connected() {
        let mut graph = create_forest();
        assert!(!graph.is_connected());

        let empty: Graph<u8> = Graph::new();
        assert!(empty.is_connected());

        graph.vertices_mut().remove(&7);
        graph.edges_mut().add(Edge::new(3, 5));
        assert!(graph.is_connected());

        graph.edges_mut().remove(&Edge::new(3, 5));
        assert!(!graph.is_connected());
    }

    #[test]
    fn test_edge_between_new_vertices_disconnects() {
        let mut graph: Graph<char> = Graph::new();
        graph.edges_mut().add(Edge::new('a', 'b'));
        assert!(graph.is_connected());

        graph.edges_mut().add(Edge::new('c', 'd'));
        assert!(!graph.is_connected());
        assert_eq!(graph.connected_components().len(), 2);

        graph.edges_mut().add(Edge::new('b', 'c'));
        assert!(graph.is_connected());

        graph.edges_mut().add(Edge::new('d', 'e'));
        assert!(graph.is_connected());
    }

    #[test]
    fn test_self_loop_on_new_vertex_disconnects() {
        let mut graph: Graph<u8> = [Edge::new(2, 0)].into_iter().collect();
        graph.vertices_mut().remove(&0);
        assert!(graph.is_connected());

        graph.edges_mut().add(Edge::new(0, 0));
        assert!(!graph.is_connected());
    }

    #[test]
    fn test_connected_components() {
        let graph = create_forest();
        let components = graph.connected_components();
        assert_eq!(components.len(), 3);
        assert_eq!(components[0].order(), 4);
        assert_eq!(components[0].size(), 3);
        assert!(components[0].contains_edge(&4, &3));
        assert_eq!(components[1].order(), 2);
        assert_eq!(components[2].order(), 1);
        assert!(components.iter().all(Graph::is_connected));
    }
}
