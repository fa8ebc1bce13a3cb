//! Cycle detection.
//!
//! Directed graphs run an iterative depth-first search tracking the vertices on the
//! active path; meeting one of them again closes a cycle. Undirected graphs are cyclic
//! exactly when some connected component has at least as many edges as vertices, since
//! a component without cycles is a tree.

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use crate::graph::{algorithms::traversal::DepthFirst, base::Graph, traits::Neighborhood};

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns `true` if the graph contains a cycle. Self-loops count as cycles.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{Edge, Graph, SetViewMut};
    ///
    /// let mut graph: Graph<u8> = [Edge::new(1, 2), Edge::new(2, 3)].into_iter().collect();
    /// assert!(!graph.is_cyclic());
    ///
    /// graph.edges_mut().add(Edge::new(3, 1));
    /// assert!(graph.is_cyclic());
    /// ```
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.cache.cyclic.get_or_compute(self.version, || {
            if self.config.directed {
                self.has_directed_cycle()
            } else {
                self.has_undirected_cycle()
            }
        })
    }

    fn has_directed_cycle(&self) -> bool {
        #[derive(Clone, Copy)]
        enum State {
            Enter,
            Exit,
        }

        let mut visited: HashSet<&V> = HashSet::with_capacity(self.order());
        let mut on_path: HashSet<&V> = HashSet::new();

        for root in self.store.vertices() {
            if visited.contains(root) {
                continue;
            }
            let mut stack = vec![(root, State::Enter)];
            while let Some((vertex, state)) = stack.pop() {
                match state {
                    State::Enter => {
                        if !visited.insert(vertex) {
                            continue;
                        }
                        on_path.insert(vertex);
                        stack.push((vertex, State::Exit));
                        for successor in self.store.adjacent(vertex) {
                            if on_path.contains(successor) {
                                return true;
                            }
                            if !visited.contains(successor) {
                                stack.push((successor, State::Enter));
                            }
                        }
                    }
                    State::Exit => {
                        on_path.remove(vertex);
                    }
                }
            }
        }
        false
    }

    fn has_undirected_cycle(&self) -> bool {
        let mut assigned: HashSet<&V> = HashSet::with_capacity(self.order());
        for root in self.store.vertices() {
            if assigned.contains(root) {
                continue;
            }
            assigned.insert(root);
            let mut vertices = 1;
            let mut edges = self.store.row_len(root);
            for member in DepthFirst::new(Neighborhood(self), root) {
                assigned.insert(member);
                vertices += 1;
                edges += self.store.row_len(member);
            }
            if edges >= vertices {
                return true;
            }
        }
        false
    }
}
