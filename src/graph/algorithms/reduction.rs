//! Transitive and reflexive reduction.

use std::hash::{BuildHasher, Hash};

use crate::graph::base::Graph;

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Removes every edge implied by a longer path between the same endpoints.
    ///
    /// Redundant edges of a vertex are collected before its row is touched. Each one is
    /// checked again right before removal, because on cyclic graphs an earlier removal
    /// can be the last alternative route for a later candidate. Self-loops are kept; see
    /// [`reduce_reflexes`](Self::reduce_reflexes).
    ///
    /// Runs in O(V * E) time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{Edge, Graph, SetView};
    ///
    /// let mut graph: Graph<char> = [Edge::new('a', 'b'), Edge::new('b', 'c'), Edge::new('a', 'c')]
    ///     .into_iter()
    ///     .collect();
    ///
    /// graph.reduce_transitions();
    /// assert!(!graph.edges().contains(&Edge::new('a', 'c')));
    /// assert!(graph.has_path(&'a', &'c'));
    /// ```
    pub fn reduce_transitions(&mut self) {
        let vertices: Vec<V> = self.store.vertices().cloned().collect();
        let mut removed = 0usize;
        for from in &vertices {
            let redundant: Vec<V> = self
                .outgoing_vertices_adjacent_to(from)
                .filter(|to| *to != from && self.has_transitive_path(from, to))
                .cloned()
                .collect();
            for to in &redundant {
                if self.has_transitive_path(from, to) && self.remove_edge(from, to) {
                    removed += 1;
                }
            }
        }
        log::debug!(
            "transitive reduction removed {removed} of {} edges",
            self.size + removed
        );
    }

    /// Returns a copy with every edge implied by a longer path removed.
    #[must_use]
    pub fn get_transitive_reduction(&self) -> Self {
        let mut reduced = self.clone();
        reduced.reduce_transitions();
        reduced
    }

    /// Removes every self-loop. The vertices stay.
    pub fn reduce_reflexes(&mut self) {
        let looped: Vec<V> = self
            .store
            .entries()
            .filter(|(from, to)| from == to)
            .map(|(from, _)| from.clone())
            .collect();
        for vertex in &looped {
            self.remove_edge(vertex, vertex);
        }
    }

    /// Returns a copy without self-loops.
    #[must_use]
    pub fn get_reflexive_reduction(&self) -> Self {
        let mut reduced = self.clone();
        reduced.reduce_reflexes();
        reduced
    }
}
