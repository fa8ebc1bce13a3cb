//! Induced subgraphs, containment and set algebra between graphs.

use std::hash::{BuildHasher, Hash};

use crate::graph::base::Graph;

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns the subgraph induced by `vertices`.
    ///
    /// Vertices not in this graph are ignored. The result keeps every edge whose
    /// endpoints were both selected, and lists vertices in the order given.
    #[must_use]
    pub fn get_subgraph<I>(&self, vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut subgraph = self.empty_like();
        for vertex in vertices {
            if self.contains_vertex(&vertex) {
                subgraph.insert_vertex(vertex);
            }
        }
        let selected: Vec<V> = subgraph.store.vertices().cloned().collect();
        for from in &selected {
            for to in self.store.adjacent(from) {
                if subgraph.contains_vertex(to) {
                    subgraph.insert_edge(from.clone(), to.clone());
                }
            }
        }
        subgraph
    }

    /// Returns `true` if every vertex and every edge of this graph also belongs to `other`.
    ///
    /// Graphs of different directedness are never subgraphs of each other.
    #[must_use]
    pub fn is_subgraph_of<S2>(&self, other: &Graph<V, S2>) -> bool
    where
        S2: BuildHasher + Clone,
    {
        self.config.directed == other.config.directed
            && self.order() <= other.order()
            && self.size <= other.size
            && self.store.vertices().all(|vertex| other.contains_vertex(vertex))
            && self
                .store
                .entries()
                .all(|(from, to)| other.contains_edge(from, to))
    }

    /// Adds every vertex and edge of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{Edge, Graph};
    ///
    /// let mut left: Graph<u8> = [Edge::new(1, 2)].into_iter().collect();
    /// let right: Graph<u8> = [Edge::new(2, 3)].into_iter().collect();
    ///
    /// left.union_with(&right);
    /// assert!(left.has_path(&1, &3));
    /// ```
    pub fn union_with<S2>(&mut self, other: &Graph<V, S2>)
    where
        S2: BuildHasher + Clone,
    {
        for vertex in other.store.vertices() {
            if !self.contains_vertex(vertex) {
                self.insert_vertex(vertex.clone());
            }
        }
        for (from, to) in other.store.entries() {
            if !self.contains_edge(from, to) {
                self.insert_edge(from.clone(), to.clone());
            }
        }
    }

    /// Keeps only the vertices and edges also present in `other`.
    pub fn intersect_with<S2>(&mut self, other: &Graph<V, S2>)
    where
        S2: BuildHasher + Clone,
    {
        let foreign_vertices: Vec<V> = self
            .store
            .vertices()
            .filter(|vertex| !other.contains_vertex(vertex))
            .cloned()
            .collect();
        for vertex in &foreign_vertices {
            self.remove_vertex(vertex);
        }
        let foreign_edges: Vec<(V, V)> = self
            .store
            .entries()
            .filter(|(from, to)| !other.contains_edge(from, to))
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();
        for (from, to) in &foreign_edges {
            self.remove_edge(from, to);
        }
    }

    /// Removes every edge also present in `other`. Vertices are kept.
    pub fn except_with<S2>(&mut self, other: &Graph<V, S2>)
    where
        S2: BuildHasher + Clone,
    {
        let shared: Vec<(V, V)> = self
            .store
            .entries()
            .filter(|(from, to)| other.contains_edge(from, to))
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();
        for (from, to) in &shared {
            self.remove_edge(from, to);
        }
    }
}
