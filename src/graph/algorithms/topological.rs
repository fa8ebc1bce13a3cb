//! Strict topological ordering of a graph.
//!
//! Vertices are peeled off a transposed working copy: a vertex without outgoing edges in
//! the transposed graph has no unordered predecessor in the original one. Removing it may
//! free the vertices that depended on it, which are queued in turn. Edges left over once
//! the queue runs dry belong to, or hang off, a cycle.

use std::{
    collections::VecDeque,
    hash::{BuildHasher, Hash},
};

use crate::{graph::base::Graph, Error, Result};

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Orders the vertices so that for every edge `a -> b`, `a` comes before `b`.
    ///
    /// Vertices that become free at the same time keep their insertion order.
    ///
    /// # Errors
    /// Returns [`Error::UnresolvedCycle`] if the graph contains a cycle and
    /// [`Error::InvalidArgument`] if the graph is undirected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{Edge, Graph};
    ///
    /// let graph: Graph<&str> = [Edge::new("std", "core"), Edge::new("alloc", "core")]
    ///     .into_iter()
    ///     .collect();
    ///
    /// let order = graph.order_topologically()?;
    /// assert_eq!(order, vec!["std", "alloc", "core"]);
    /// # Ok::<(), topograph::Error>(())
    /// ```
    pub fn order_topologically(&self) -> Result<Vec<V>> {
        if !self.config.directed {
            return Err(invalid_argument!(
                "an undirected graph has no topological order"
            ));
        }

        let mut working = self.get_transposition();
        let mut queue: VecDeque<V> = working
            .store
            .vertices()
            .filter(|vertex| working.store.row_len(vertex) == 0)
            .cloned()
            .collect();
        let mut order = Vec::with_capacity(self.order());

        while let Some(vertex) = queue.pop_front() {
            let dependents: Vec<V> = working
                .incoming_vertices_adjacent_to(&vertex)
                .cloned()
                .collect();
            working.remove_vertex(&vertex);
            for dependent in dependents {
                if working.out_degree(&dependent) == 0 {
                    queue.push_back(dependent);
                }
            }
            order.push(vertex);
        }

        if working.size() > 0 {
            let remaining = working.order();
            log::debug!(
                "topological order stopped with {remaining} of {} vertices unresolved",
                self.order()
            );
            return Err(Error::UnresolvedCycle { remaining });
        }
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Edge, Error, Graph, SetViewMut};

    fn position(order: &[u32], vertex: u32) -> usize {
        order.iter().position(|v| *v == vertex).unwrap()
    }

    #[test]
    fn test_order_respects_edges() {
        let edges = [
            Edge::new(5, 11),
            Edge::new(7, 11),
            Edge::new(7, 8),
            Edge::new(3, 8),
            Edge::new(3, 10),
            Edge::new(11, 2),
            Edge::new(11, 9),
            Edge::new(11, 10),
            Edge::new(8, 9),
        ];
        let graph: Graph<u32> = edges.into_iter().collect();
        let order = graph.order_topologically().unwrap();

        assert_eq!(order.len(), graph.order());
        for edge in edges {
            assert!(position(&order, edge.from) < position(&order, edge.to), "{edge:?}");
        }
    }

    #[test]
    fn test_isolated_vertices_are_ordered() {
        let mut graph: Graph<u32> = Graph::new();
        graph.vertices_mut().add(4);
        graph.edges_mut().add(Edge::new(2, 1));
        assert_eq!(graph.order_topologically().unwrap(), vec![4, 2, 1]);
    }

    #[test]
    fn test_cycle_is_rejected() {
        let graph: Graph<char> = [Edge::new('a', 'b'), Edge::new('b', 'c'), Edge::new('c', 'a')]
            .into_iter()
            .collect();
        assert_eq!(
            graph.order_topologically(),
            Err(Error::UnresolvedCycle { remaining: 3 })
        );
    }

    #[test]
    fn test_cycle_reports_blocked_vertices() {
        let graph: Graph<char> = [
            Edge::new('x', 'a'),
            Edge::new('a', 'b'),
            Edge::new('b', 'a'),
            Edge::new('b', 'd'),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            graph.order_topologically(),
            Err(Error::UnresolvedCycle { remaining: 3 })
        );
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let graph: Graph<u32> = [Edge::new(1, 1)].into_iter().collect();
        assert!(matches!(
            graph.order_topologically(),
            Err(Error::UnresolvedCycle { remaining: 1 })
        ));
    }

    #[test]
    fn test_undirected_is_rejected() {
        let graph: Graph<u32> = Graph::new_undirected();
        assert!(matches!(
            graph.order_topologically(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_original_is_untouched() {
        let graph: Graph<u32> = [Edge::new(1, 2)].into_iter().collect();
        let version = graph.version();
        graph.order_topologically().unwrap();
        assert_eq!(graph.version(), version);
        assert_eq!(graph.size(), 1);
    }
}
